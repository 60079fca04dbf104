#![no_main]
use depreport_core::RepositorySlug;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Any accepted URL must yield delimiter-free, non-empty segments
        if let Ok(slug) = RepositorySlug::parse(s) {
            assert!(!slug.owner.is_empty() && !slug.name.is_empty());
            assert!(!slug.owner.contains(['/', ':']));
            assert!(!slug.name.contains(['/', ':']));
        }
    }
});
