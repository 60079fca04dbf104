#![no_main]
use depreport_core::{Config, StepInputs};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Split arbitrary input into the optional inputs
        let mut parts = s.split('\n');
        let _ = Config::from_inputs(StepInputs {
            auth_token: Some("token"),
            repository_url: parts.next(),
            commit_hash: Some("abc123"),
            api_base_url: parts.next(),
            set_specific_status: parts.next(),
            build_url: parts.next(),
            description: parts.next(),
            verbose: parts.next(),
            request_timeout_secs: parts.next(),
            ..Default::default()
        });
    }
});
