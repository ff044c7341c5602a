#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Fuzz hippo.yaml parsing - this should never panic
        if let Ok(config) = serde_yaml_ng::from_str::<hippo::ProjectConfiguration>(content) {
            for name in config.environment_names() {
                let _ = hippo::domain::services::resolve_environment(&config, &name);
            }
        }
    }
});
