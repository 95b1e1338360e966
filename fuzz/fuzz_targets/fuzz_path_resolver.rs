#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use viewc::domain::services::{CompiledPathResolver, HashedResolver, MirroredResolver};
use viewc::CacheRoot;

const CACHE_ROOT: &str = "/cache";

fuzz_target!(|data: &[u8]| {
    let Ok(source) = std::str::from_utf8(data) else {
        return;
    };
    let source = Path::new("/app").join(source);
    let Ok(root) = CacheRoot::new(CACHE_ROOT) else {
        return;
    };

    let hashed = HashedResolver::new("compiled");
    let mirrored = MirroredResolver::new("/app/views", "compiled");

    for artifact in [hashed.resolve(&source, &root), mirrored.resolve(&source, &root)]
        .into_iter()
        .flatten()
    {
        assert!(artifact.starts_with(CACHE_ROOT));
        assert_ne!(artifact.as_path(), Path::new(CACHE_ROOT));
    }
});
