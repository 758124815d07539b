use once_cell::sync::Lazy;
use regex::Regex;

static DOCBLOCK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)^\s*(/\*.*?\*/)").unwrap());

static PRAGMA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@(?:providesModule|provides)\s+(\S+)").unwrap());

/// Extracts the module identity pragma from the leading block comment of
/// `src`, if any. Only the first block comment counts; a pragma further
/// down the file does not name the module.
pub fn pragma_id(src: &str) -> Option<String> {
    let block = DOCBLOCK_RE.captures(src)?;
    let caps = PRAGMA_RE.captures(block.get(1)?.as_str())?;
    Some(caps[1].to_string())
}
