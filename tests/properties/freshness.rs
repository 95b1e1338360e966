//! Property tests for the modification-time freshness rule.

use std::path::Path;
use std::time::{Duration, SystemTime};

use proptest::prelude::*;

use viewc::domain::services::{FreshnessOracle, MtimeOracle};
use viewc::MemoryFs;

const SOURCE: &str = "/app/views/home.tpl";
const ARTIFACT: &str = "/app/cache/home.compiled";

fn at(secs: u64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000 + secs)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: an artifact is stale exactly when it is older than its source.
    #[test]
    fn property_stale_iff_artifact_older(
        source_secs in 0u64..10_000,
        artifact_secs in 0u64..10_000,
    ) {
        let fs = MemoryFs::new();
        fs.insert_at(SOURCE, "src", at(source_secs));
        fs.insert_at(ARTIFACT, "out", at(artifact_secs));

        let stale = MtimeOracle
            .is_stale(Path::new(SOURCE), Path::new(ARTIFACT), &fs)
            .unwrap();
        prop_assert_eq!(stale, artifact_secs < source_secs);
    }

    /// PROPERTY: a missing artifact is always stale, whatever the source time.
    #[test]
    fn property_missing_artifact_is_stale(source_secs in 0u64..10_000) {
        let fs = MemoryFs::new();
        fs.insert_at(SOURCE, "src", at(source_secs));

        prop_assert!(MtimeOracle
            .is_stale(Path::new(SOURCE), Path::new(ARTIFACT), &fs)
            .unwrap());
    }

    /// PROPERTY: a missing source is an error, never a freshness answer.
    #[test]
    fn property_missing_source_errors(artifact_secs in 0u64..10_000) {
        let fs = MemoryFs::new();
        fs.insert_at(ARTIFACT, "out", at(artifact_secs));

        let err = MtimeOracle
            .is_stale(Path::new(SOURCE), Path::new(ARTIFACT), &fs)
            .unwrap_err();
        prop_assert!(err.is_source_not_found());
    }
}
