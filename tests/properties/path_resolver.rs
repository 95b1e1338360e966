//! Property tests for compiled-path resolution.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use viewc::domain::services::{CompiledPathResolver, HashedResolver, MirroredResolver};
use viewc::CacheRoot;

const SOURCE_ROOT: &str = "/app/views";
const CACHE_ROOT: &str = "/app/storage/views";

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-][A-Za-z0-9._-]{0,11}")
        .unwrap()
        .prop_filter("no dot-only segments", |s| s != "." && s != "..")
}

fn relative_source() -> impl Strategy<Value = PathBuf> {
    proptest::collection::vec(segment(), 1..=4)
        .prop_map(|segments| segments.iter().collect::<PathBuf>())
}

fn cache_root() -> CacheRoot {
    CacheRoot::new(CACHE_ROOT).unwrap()
}

fn resolvers() -> (HashedResolver, MirroredResolver) {
    (
        HashedResolver::new("compiled"),
        MirroredResolver::new(SOURCE_ROOT, "compiled"),
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: resolving the same source twice gives the same artifact path.
    #[test]
    fn property_resolution_is_deterministic(rel in relative_source()) {
        let source = Path::new(SOURCE_ROOT).join(&rel);
        let (hashed, mirrored) = resolvers();

        prop_assert_eq!(
            hashed.resolve(&source, &cache_root()).unwrap(),
            hashed.resolve(&source, &cache_root()).unwrap()
        );
        prop_assert_eq!(
            mirrored.resolve(&source, &cache_root()).unwrap(),
            mirrored.resolve(&source, &cache_root()).unwrap()
        );
    }

    /// PROPERTY: `.` components and duplicate separators do not change the artifact.
    #[test]
    fn property_resolution_is_stable_under_normalization(rel in relative_source()) {
        let plain = Path::new(SOURCE_ROOT).join(&rel);
        let noisy = PathBuf::from(format!("{}/./{}", SOURCE_ROOT, rel.display().to_string().replace('/', "//")));
        let (hashed, mirrored) = resolvers();

        prop_assert_eq!(
            hashed.resolve(&plain, &cache_root()).unwrap(),
            hashed.resolve(&noisy, &cache_root()).unwrap()
        );
        prop_assert_eq!(
            mirrored.resolve(&plain, &cache_root()).unwrap(),
            mirrored.resolve(&noisy, &cache_root()).unwrap()
        );
    }

    /// PROPERTY: artifacts always live strictly below the cache root.
    #[test]
    fn property_artifact_stays_under_cache_root(
        rel in relative_source(),
        outside in any::<bool>(),
    ) {
        let base = if outside { "/elsewhere" } else { SOURCE_ROOT };
        let source = Path::new(base).join(&rel);
        let (hashed, mirrored) = resolvers();

        for artifact in [
            hashed.resolve(&source, &cache_root()).unwrap(),
            mirrored.resolve(&source, &cache_root()).unwrap(),
        ] {
            prop_assert!(artifact.starts_with(CACHE_ROOT));
            prop_assert_ne!(artifact.as_path(), Path::new(CACHE_ROOT));
            prop_assert_eq!(artifact.extension().and_then(|e| e.to_str()), Some("compiled"));
        }
    }

    /// PROPERTY: distinct sources never share an artifact.
    #[test]
    fn property_distinct_sources_never_collide(
        a in relative_source(),
        b in relative_source(),
    ) {
        prop_assume!(a != b);
        let a = Path::new(SOURCE_ROOT).join(&a);
        let b = Path::new(SOURCE_ROOT).join(&b);
        let (hashed, mirrored) = resolvers();

        prop_assert_ne!(
            hashed.resolve(&a, &cache_root()).unwrap(),
            hashed.resolve(&b, &cache_root()).unwrap()
        );
        prop_assert_ne!(
            mirrored.resolve(&a, &cache_root()).unwrap(),
            mirrored.resolve(&b, &cache_root()).unwrap()
        );
    }

    /// PROPERTY: a disabled cache root is always a configuration error.
    #[test]
    fn property_disabled_root_never_resolves(rel in relative_source()) {
        let source = Path::new(SOURCE_ROOT).join(&rel);
        let (hashed, mirrored) = resolvers();

        prop_assert!(hashed.resolve(&source, &CacheRoot::Disabled).is_err());
        prop_assert!(mirrored.resolve(&source, &CacheRoot::Disabled).is_err());
    }
}
