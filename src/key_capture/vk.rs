//! Windows virtual-key codes for keys reported by name.
//!
//! Captured key strings are always Windows virtual-key codes so that entries
//! read the same regardless of the platform they were captured on.

/// Virtual-key code for a key name as spelled by `device_query`'s `Keycode`
/// (e.g. `"A"`, `"Key1"`, `"F5"`, `"LShift"`, `"Escape"`).
pub fn vk_from_key_name(name: &str) -> Option<u8> {
    // Single letters A-Z share their ASCII code
    if let [c] = name.as_bytes() {
        if c.is_ascii_uppercase() {
            return Some(*c);
        }
    }
    if let Some(digit) = name.strip_prefix("Key").and_then(single_digit) {
        return Some(0x30 + digit);
    }
    if let Some(digit) = name.strip_prefix("Numpad").and_then(single_digit) {
        return Some(0x60 + digit);
    }
    if let Some(n) = name.strip_prefix('F').and_then(|n| n.parse::<u8>().ok()) {
        if (1..=24).contains(&n) {
            return Some(0x6F + n);
        }
    }

    let code = match name {
        "Backspace" => 0x08,
        "Tab" => 0x09,
        "Enter" => 0x0D,
        "CapsLock" => 0x14,
        "Escape" => 0x1B,
        "Space" => 0x20,
        "PageUp" => 0x21,
        "PageDown" => 0x22,
        "End" => 0x23,
        "Home" => 0x24,
        "Left" => 0x25,
        "Up" => 0x26,
        "Right" => 0x27,
        "Down" => 0x28,
        "Insert" => 0x2D,
        "Delete" => 0x2E,
        "Meta" | "LMeta" | "Command" | "LCommand" => 0x5B,
        "RMeta" | "RCommand" => 0x5C,
        "NumpadMultiply" => 0x6A,
        "NumpadAdd" => 0x6B,
        "NumpadSubtract" => 0x6D,
        "NumpadDecimal" => 0x6E,
        "NumpadDivide" => 0x6F,
        "LShift" => 0xA0,
        "RShift" => 0xA1,
        "LControl" => 0xA2,
        "RControl" => 0xA3,
        "LAlt" | "LOption" => 0xA4,
        "RAlt" | "ROption" => 0xA5,
        "Semicolon" => 0xBA,
        "Equal" => 0xBB,
        "Comma" => 0xBC,
        "Minus" => 0xBD,
        "Dot" => 0xBE,
        "Slash" => 0xBF,
        "Grave" => 0xC0,
        "LeftBracket" => 0xDB,
        "BackSlash" => 0xDC,
        "RightBracket" => 0xDD,
        "Apostrophe" => 0xDE,
        _ => return None,
    };
    Some(code)
}

fn single_digit(s: &str) -> Option<u8> {
    match s.as_bytes() {
        [d] if d.is_ascii_digit() => Some(d - b'0'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_and_digits() {
        assert_eq!(vk_from_key_name("A"), Some(0x41));
        assert_eq!(vk_from_key_name("Z"), Some(0x5A));
        assert_eq!(vk_from_key_name("Key0"), Some(0x30));
        assert_eq!(vk_from_key_name("Key9"), Some(0x39));
        assert_eq!(vk_from_key_name("Numpad3"), Some(0x63));
    }

    #[test]
    fn test_function_keys() {
        assert_eq!(vk_from_key_name("F1"), Some(0x70));
        assert_eq!(vk_from_key_name("F12"), Some(0x7B));
        assert_eq!(vk_from_key_name("F25"), None);
        assert_eq!(vk_from_key_name("F"), Some(0x46));
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(vk_from_key_name("Escape"), Some(super::super::CANCEL_KEY));
        assert_eq!(vk_from_key_name("LShift"), Some(0xA0));
        assert_eq!(vk_from_key_name("RControl"), Some(0xA3));
        assert_eq!(vk_from_key_name("Space"), Some(0x20));
    }

    #[test]
    fn test_unknown_names() {
        assert_eq!(vk_from_key_name(""), None);
        assert_eq!(vk_from_key_name("a"), None);
        assert_eq!(vk_from_key_name("Key10"), None);
        assert_eq!(vk_from_key_name("Hyper"), None);
    }
}
