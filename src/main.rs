use gpui::*;

use keytime64::app::KeyTimeApp;
use keytime64::entries::TableLayout;
use keytime64::{config, logging, theme, APP_TITLE};

fn main() {
    let _logging_guard = logging::init();

    let loaded_config = config::load_config();
    let loaded_theme = theme::load_theme();
    logging::log(
        "APP",
        &format!(
            "Loaded config: column_width={}, poll_interval_ms={}, timeout_ms={:?}, extra_denylist={}",
            loaded_config.table.column_width,
            loaded_config.capture.poll_interval_ms,
            loaded_config.capture.timeout_ms,
            loaded_config.window_denylist.len()
        ),
    );

    Application::new().run(move |cx: &mut App| {
        logging::log("APP", "GPUI Application starting");

        let layout = TableLayout::from(loaded_config.table);
        let bounds = Bounds::centered(None, KeyTimeApp::window_size(&layout), cx);

        let opened = cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some(APP_TITLE.into()),
                    ..Default::default()
                }),
                ..Default::default()
            },
            move |window, cx| {
                let view = cx.new(|cx| KeyTimeApp::new(loaded_config, loaded_theme, cx));
                let focus_handle = view.read(cx).focus_handle(cx);
                focus_handle.focus(window, cx);
                view
            },
        );

        match opened {
            Ok(_) => cx.activate(true),
            Err(e) => {
                tracing::error!(error = ?e, "Failed to open main window");
                cx.quit();
            }
        }
    });
}
