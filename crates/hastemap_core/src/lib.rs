//! Per-file analysis for a haste module map.
//!
//! This crate is the per-file unit of a module-registry builder: given one
//! candidate file it answers
//! - what module identity (if any) the file declares,
//! - which modules it statically depends on,
//! - whether it is a mock substitute for another module,
//! - what the SHA-1 fingerprint of its raw bytes is.
//!
//! The unit is stateless and re-entrant; crawling, parallelism, caching and
//! aggregation into a global module graph all belong to the caller. File
//! bytes are read at most once per call, and only when one of the requested
//! outputs actually needs them (see [`needs_read`]).

mod constants;
mod docblock;
mod extract;
mod fsio;
mod hasher;
mod resolver;
mod types;
mod worker;

// Re-export public API
pub use constants::{DEFAULT_MOCKS_PATTERN, NATIVE_EXTENSION, PACKAGE_MANIFEST};
pub use docblock::pragma_id;
pub use extract::extract_dependencies;
pub use fsio::{FileReader, OsFiles};
pub use hasher::{hash_file, sha1_hex};
pub use resolver::IdentityResolver;
pub use types::{AnalysisRequest, FileAnalysis, ModuleKind, ModuleRef};
pub use worker::{analyze, needs_read, relative_path};
