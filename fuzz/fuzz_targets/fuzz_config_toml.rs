#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Any user config file must parse or fail cleanly
        if let Ok(config) = toml::from_str::<firesale::Config>(content) {
            let _ = config.window.default_position();
            let _ = config.output.verbosity.level_filter();
        }
    }
});
