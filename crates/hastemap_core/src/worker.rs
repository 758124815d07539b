use anyhow::{Context, Result};
use log::{debug, trace};
use std::path::{Component, Path, PathBuf};

use crate::constants::{NATIVE_EXTENSION, PACKAGE_MANIFEST};
use crate::docblock;
use crate::extract;
use crate::fsio::{FileReader, read_bytes};
use crate::hasher;
use crate::types::{AnalysisRequest, FileAnalysis, ModuleKind, ModuleRef};

/// Analyzes one candidate file.
///
/// Classification takes exactly one of three paths: package manifest
/// (the filename is `package.json`), mock (the root-relative path matches
/// the mock pattern), or ordinary module. File bytes are read at most
/// once, and only when [`needs_read`] says an output needs them; when
/// both text scanning and hashing are requested, the hash is computed
/// from the same buffer.
pub fn analyze(files: &dyn FileReader, req: &AnalysisRequest) -> Result<FileAnalysis> {
    debug!("Analyzing {}", req.file_path.display());
    let rel = relative_path(req.root_dir, req.file_path);
    let rel_str = rel.to_string_lossy();
    let is_mock = req.mock_pattern.is_some_and(|re| re.is_match(&rel_str));

    let file_name = req.file_path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    let is_manifest = file_name == PACKAGE_MANIFEST;

    // Single I/O gate. When it is false the FileReader must stay untouched.
    let content = if needs_read(req, is_manifest) {
        Some(read_bytes(files, req.file_path)?)
    } else {
        trace!("Skipping read for {}: no requested output needs the bytes", rel_str);
        None
    };
    let content = content.as_deref();

    let sha1 = match content {
        Some(bytes) if req.compute_sha1 => Some(hasher::sha1_hex(bytes)),
        _ => None,
    };

    let mut analysis = FileAnalysis { sha1, is_mock, ..FileAnalysis::default() };

    if is_manifest {
        trace!("Classified as package manifest: {}", rel_str);
        if let Some(bytes) = content {
            let manifest: serde_json::Value = serde_json::from_slice(bytes).with_context(|| {
                format!("Cannot parse manifest '{}' as JSON.", req.file_path.display())
            })?;
            analysis.id = manifest.get("name").and_then(|n| n.as_str()).map(str::to_owned);
        }
        // Manifests surface their name only; code dependencies are a
        // module concept.
        analysis.module = Some(ModuleRef { path: rel.clone(), kind: ModuleKind::Package });
    } else {
        let is_native =
            req.file_path.extension().and_then(|e| e.to_str()) == Some(NATIVE_EXTENSION);
        let text = match content {
            Some(bytes) if !is_native => Some(String::from_utf8_lossy(bytes)),
            _ => None,
        };

        analysis.id = match req.resolver {
            Some(resolver) => {
                trace!("Delegating identity of {} to the configured resolver", rel_str);
                resolver.resolve_identity(content.unwrap_or_default(), req.file_path)?
            }
            None => text
                .as_deref()
                .and_then(docblock::pragma_id)
                .or_else(|| fallback_id(req.file_path)),
        };

        if req.compute_dependencies {
            let deps = text.as_deref().map(extract::extract_dependencies).unwrap_or_default();
            trace!("Found {} dependency references in {}", deps.len(), rel_str);
            analysis.dependencies = Some(deps);
        }

        analysis.module = Some(ModuleRef { path: rel.clone(), kind: ModuleKind::Module });
    }

    // Mocks share the identity namespace but are not addressable modules.
    if is_mock {
        analysis.module = None;
    }

    debug!("Finished {}: id={:?}, mock={}", rel_str, analysis.id, analysis.is_mock);
    Ok(analysis)
}

/// The read-requirement predicate: file bytes are fetched iff one of the
/// four consumers actually needs them — dependency extraction, a
/// configured identity resolver, manifest parsing, or hashing. Kept as
/// its own function so the zero-I/O case is testable in isolation.
pub fn needs_read(req: &AnalysisRequest, is_package_manifest: bool) -> bool {
    req.compute_dependencies
        || req.resolver.is_some()
        || is_package_manifest
        || req.compute_sha1
}

/// Root-relative form of `file`. Files outside `root` are reached with
/// `..` components rather than falling back to the absolute path, so the
/// mock pattern always sees a relative path.
pub fn relative_path(root: &Path, file: &Path) -> PathBuf {
    if let Ok(rel) = file.strip_prefix(root) {
        return rel.to_path_buf();
    }
    let root_parts: Vec<Component> = root.components().collect();
    let file_parts: Vec<Component> = file.components().collect();
    let common = root_parts.iter().zip(file_parts.iter()).take_while(|(a, b)| a == b).count();
    let mut rel = PathBuf::new();
    for _ in common..root_parts.len() {
        rel.push("..");
    }
    for part in &file_parts[common..] {
        rel.push(part);
    }
    rel
}

fn fallback_id(path: &Path) -> Option<String> {
    path.file_stem().and_then(|s| s.to_str()).map(str::to_owned)
}
