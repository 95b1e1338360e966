//! Domain Services
//!
//! Stateless strategies the compiler composes:
//!
//! - `path_resolver` - where a compiled artifact lives
//! - `freshness` - whether a compiled artifact is still valid

pub mod freshness;
pub mod path_resolver;

pub use freshness::{FreshnessOracle, MtimeOracle};
pub use path_resolver::{
    normalize, CompiledPathResolver, HashedResolver, LayoutResolver, MirroredResolver,
    DEFAULT_ARTIFACT_EXTENSION,
};
