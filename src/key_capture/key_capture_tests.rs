use super::*;
use crate::error::KeytimeError;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

/// Replays a scripted sequence of keyboard snapshots, one per pass.
/// Each snapshot is (held codes, escape active). The last snapshot repeats.
struct ScriptedKeys {
    frames: RefCell<VecDeque<(Vec<u8>, bool)>>,
    queries: Cell<usize>,
}

impl ScriptedKeys {
    fn new(frames: Vec<(Vec<u8>, bool)>) -> Self {
        Self {
            frames: RefCell::new(frames.into()),
            queries: Cell::new(0),
        }
    }

    fn current(&self) -> (Vec<u8>, bool) {
        self.frames
            .borrow()
            .front()
            .cloned()
            .unwrap_or_default()
    }

    /// Move to the next snapshot (keeps the last one forever)
    fn advance(&self) {
        let mut frames = self.frames.borrow_mut();
        if frames.len() > 1 {
            frames.pop_front();
        }
    }
}

impl KeyStateSource for ScriptedKeys {
    fn is_pressed(&self, code: u8) -> bool {
        self.queries.set(self.queries.get() + 1);
        self.current().0.contains(&code)
    }

    fn is_cancel_active(&self) -> bool {
        self.current().1
    }
}

fn run_until_done(capture: &mut KeyCapture, keys: &ScriptedKeys, max_ticks: usize) -> usize {
    let now = Instant::now();
    for tick in 1..=max_ticks {
        if !matches!(capture.tick(keys, now), CapturePhase::Capturing) {
            return tick;
        }
        keys.advance();
    }
    max_ticks
}

#[test]
fn test_new_capture_is_idle_and_ticks_are_noops() {
    let mut capture = KeyCapture::new(None);
    let keys = ScriptedKeys::new(vec![(vec![65], true)]);

    assert_eq!(capture.tick(&keys, Instant::now()), &CapturePhase::Idle);
    assert_eq!(keys.queries.get(), 0);
    assert!(capture.codes().is_empty());
}

#[test]
fn test_one_code_per_pass_then_escape_finishes() {
    let mut capture = KeyCapture::new(None);
    capture.start(Instant::now());
    let keys = ScriptedKeys::new(vec![
        (vec![], false),
        (vec![65], false),
        (vec![], false),
        (vec![66], false),
        (vec![27], true),
    ]);

    let ticks = run_until_done(&mut capture, &keys, 10);
    assert_eq!(ticks, 5);
    assert_eq!(
        capture.phase(),
        &CapturePhase::Done(CaptureResult::Captured("65+66+27".to_string()))
    );
}

#[test]
fn test_lowest_pressed_code_wins_each_pass() {
    let mut capture = KeyCapture::new(None);
    capture.start(Instant::now());
    let keys = ScriptedKeys::new(vec![(vec![90, 17, 65], false), (vec![27], true)]);

    run_until_done(&mut capture, &keys, 10);
    assert_eq!(capture.codes(), &[17, 27]);
}

#[test]
fn test_scan_stops_at_first_pressed_code() {
    let keys = ScriptedKeys::new(vec![(vec![3, 200], false)]);
    assert_eq!(keys.first_pressed(), Some(3));
    // Codes 0, 1, 2, 3 were queried and nothing past the hit
    assert_eq!(keys.queries.get(), 4);
}

#[test]
fn test_held_key_repeats_across_passes() {
    let mut capture = KeyCapture::new(None);
    capture.start(Instant::now());
    let keys = ScriptedKeys::new(vec![
        (vec![65], false),
        (vec![65], false),
        (vec![65], false),
        (vec![], true),
    ]);

    run_until_done(&mut capture, &keys, 10);
    assert_eq!(
        capture.take_result(),
        Some(CaptureResult::Captured("65+65+65".to_string()))
    );
}

#[test]
fn test_escape_before_any_key_is_ignored() {
    let mut capture = KeyCapture::new(None);
    capture.start(Instant::now());
    // Escape toggled on but nothing pressed yet
    let keys = ScriptedKeys::new(vec![(vec![], true), (vec![], true), (vec![70], true)]);

    let ticks = run_until_done(&mut capture, &keys, 10);
    assert_eq!(ticks, 3);
    assert_eq!(
        capture.phase(),
        &CapturePhase::Done(CaptureResult::Captured("70".to_string()))
    );
}

#[test]
fn test_deadline_times_out() {
    let start = Instant::now();
    let mut capture = KeyCapture::new(Some(Duration::from_millis(100)));
    capture.start(start);
    let keys = ScriptedKeys::new(vec![(vec![65], false)]);

    assert_eq!(
        capture.tick(&keys, start + Duration::from_millis(50)),
        &CapturePhase::Capturing
    );
    assert_eq!(
        capture.tick(&keys, start + Duration::from_millis(100)),
        &CapturePhase::Done(CaptureResult::TimedOut)
    );
    // Codes seen before the timeout are still inspectable
    assert_eq!(capture.codes(), &[65, 65]);
}

#[test]
fn test_escape_wins_over_deadline_on_same_pass() {
    let start = Instant::now();
    let mut capture = KeyCapture::new(Some(Duration::from_millis(10)));
    capture.start(start);
    let keys = ScriptedKeys::new(vec![(vec![65], true)]);

    assert_eq!(
        capture.tick(&keys, start + Duration::from_secs(1)),
        &CapturePhase::Done(CaptureResult::Captured("65".to_string()))
    );
}

#[test]
fn test_cancel_only_affects_running_capture() {
    let mut capture = KeyCapture::new(None);
    capture.cancel();
    assert_eq!(capture.phase(), &CapturePhase::Idle);

    capture.start(Instant::now());
    capture.cancel();
    assert_eq!(capture.take_result(), Some(CaptureResult::Cancelled));
    assert_eq!(capture.phase(), &CapturePhase::Idle);
}

#[test]
fn test_take_result_leaves_running_capture_alone() {
    let mut capture = KeyCapture::new(None);
    capture.start(Instant::now());
    assert_eq!(capture.take_result(), None);
    assert!(capture.is_capturing());
}

#[test]
fn test_restart_clears_previous_codes() {
    let mut capture = KeyCapture::new(None);
    capture.start(Instant::now());
    let keys = ScriptedKeys::new(vec![(vec![65], true)]);
    run_until_done(&mut capture, &keys, 3);
    assert_eq!(capture.codes(), &[65]);

    capture.start(Instant::now());
    assert!(capture.codes().is_empty());
    assert!(capture.is_capturing());
}

#[test]
fn test_join_codes() {
    assert_eq!(join_codes(&[]), "");
    assert_eq!(join_codes(&[1]), "1");
    assert_eq!(join_codes(&[1, 65, 27]), "1+65+27");
}

#[test]
fn test_start_with_unavailable_source_stays_idle() {
    let mut capture = KeyCapture::new(None);
    let source = capture.start_with(
        || Err(KeytimeError::KeyState("no display".to_string())),
        Instant::now(),
    );

    assert!(source.is_none());
    assert_eq!(capture.phase(), &CapturePhase::Idle);
    assert!(!capture.is_capturing());
}

#[test]
fn test_start_with_available_source_starts_capturing() {
    let mut capture = KeyCapture::new(None);
    let source = capture
        .start_with(
            || Ok(Box::new(ScriptedKeys::new(vec![(vec![65], true)])) as Box<dyn KeyStateSource>),
            Instant::now(),
        )
        .unwrap();

    assert!(capture.is_capturing());
    assert_eq!(
        capture.tick(source.as_ref(), Instant::now()),
        &CapturePhase::Done(CaptureResult::Captured("65".to_string()))
    );
}

#[test]
#[cfg_attr(not(feature = "system-tests"), ignore)]
fn test_system_key_state_can_be_queried() {
    let source = system_key_state().expect("keyboard state should be available");
    let _ = source.first_pressed();
    let _ = source.is_cancel_active();
}
