use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

// Matches require(<literal>) where the argument is exactly one static
// string: single-quoted, double-quoted, or an interpolation-free template
// literal. All three arms reject `\`, and the backtick arm rejects `$`
// outright, which also drops escape sequences and the (legal but rare)
// non-interpolated `$` character; that keeps the scan a strict
// under-approximation of what a real parser would accept.
static REQUIRE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\brequire\s*\(\s*(?:'([^'\\]*)'|"([^"\\]*)"|`([^`$\\]*)`)\s*\)"#).unwrap()
});

/// Single-pass lexical scan for static dependency references.
///
/// This is not a JavaScript parser. It recognizes only the
/// literal-argument call form and silently skips everything dynamic:
/// expressions, concatenations, multiple arguments, interpolated
/// templates. First-occurrence order is preserved and duplicates are
/// kept; de-duplication belongs to the aggregation layer.
pub fn extract_dependencies(src: &str) -> Vec<String> {
    let mut deps = Vec::new();
    for caps in REQUIRE_RE.captures_iter(src) {
        if let Some(m) = caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3)) {
            trace!("Found dependency literal: '{}'", m.as_str());
            deps.push(m.as_str().to_string());
        }
    }
    deps
}
