use regex::Regex;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::resolver::IdentityResolver;

/// How a file participates in the module map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ModuleKind {
    Module,
    Package,
}

/// A registrable module: its root-relative path and kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleRef {
    pub path: PathBuf,
    pub kind: ModuleKind,
}

/// Everything the analyzer learned about one file.
///
/// `dependencies` is `None` when extraction was not requested (or the file
/// is a package manifest), as opposed to `Some(vec![])` when extraction ran
/// and found nothing. `module` is `None` for mocks: they share the identity
/// namespace but are not separately addressable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileAnalysis {
    pub id: Option<String>,
    pub dependencies: Option<Vec<String>>,
    pub is_mock: bool,
    pub module: Option<ModuleRef>,
    pub sha1: Option<String>,
}

/// One analysis call. Built by the caller per file and never mutated here.
pub struct AnalysisRequest<'a> {
    pub file_path: &'a Path,
    pub root_dir: &'a Path,
    pub compute_dependencies: bool,
    pub compute_sha1: bool,
    /// Tested against the root-relative path; a match marks the file as a
    /// mock substitute for the module of the same identity.
    pub mock_pattern: Option<&'a Regex>,
    /// When set, identity comes from this capability instead of the
    /// docblock pragma / filename fallback.
    pub resolver: Option<&'a dyn IdentityResolver>,
}
