//! Fuzz target for settings TOML parsing.
//!
//! Accepted settings must validate and survive a TOML round trip.

#![no_main]
use libfuzzer_sys::fuzz_target;
use stackstage_settings::ReportSettings;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(settings) = ReportSettings::from_toml_str(s) {
        assert!(settings.validate().is_ok());
        if let Ok(text) = settings.to_toml_string() {
            assert_eq!(ReportSettings::from_toml_str(&text).ok(), Some(settings));
        }
    }
});
