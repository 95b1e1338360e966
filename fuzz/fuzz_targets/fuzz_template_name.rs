#![no_main]

use std::path::Component;

use libfuzzer_sys::fuzz_target;
use viewc::domain::value_objects::TemplateName;

fuzz_target!(|data: &[u8]| {
    if let Ok(name) = std::str::from_utf8(data) {
        if let Ok(name) = TemplateName::new(name) {
            assert!(name
                .as_path()
                .components()
                .all(|c| matches!(c, Component::Normal(_))));
        }
    }
});
