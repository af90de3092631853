//! Fuzz target for color parsing.
//!
//! Tests that Rgb::from_hex and the FromStr impl handle arbitrary strings
//! without panicking, and that anything accepted prints back as valid hex.

#![no_main]

use coursetext::Rgb;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Some(color) = Rgb::from_hex(data) {
        assert_eq!(Rgb::from_hex(&color.to_hex()), Some(color));
    }

    if !data.starts_with('#') {
        let _ = Rgb::from_hex(&format!("#{data}"));
    }

    if let Ok(color) = data.parse::<Rgb>() {
        assert_eq!(color.to_string().parse::<Rgb>(), Ok(color));
    }

    // Suffixes and prefixes on char boundaries
    for (i, _) in data.char_indices().take(10) {
        let _ = Rgb::from_hex(&data[i..]);
        let _ = Rgb::from_hex(&data[..i]);
    }
});
