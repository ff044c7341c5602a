#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        if let Ok(connection) = hippo::domain::value_objects::ClusterConnection::parse(raw) {
            assert!(!connection.args().is_empty());
            let _ = connection.context();
            let _ = connection.namespace();
        }
    }
});
