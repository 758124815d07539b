//! Constants for file classification.

/// Filename of the package manifest whose `name` field names the module
/// rooted at its directory.
pub const PACKAGE_MANIFEST: &str = "package.json";

/// Extension of native binary modules. Their bytes are never scanned for
/// pragmas or dependency literals.
pub const NATIVE_EXTENSION: &str = "node";

/// Default mock matcher: anything inside a `__mocks__` directory, tested
/// against the root-relative path.
pub const DEFAULT_MOCKS_PATTERN: &str = r"(?:^|/)__mocks__/";
