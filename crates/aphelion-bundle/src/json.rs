//! Compact re-serialization of the config document.

use serde_json::Value;

/// Parse `source` as JSON and write it back without insignificant whitespace.
///
/// Keys keep their input order, non-ASCII text is emitted literally and
/// numbers keep their original spelling.
pub fn compact_json(source: &str) -> Result<String, serde_json::Error> {
    let value: Value = serde_json::from_str(source)?;
    serde_json::to_string(&value)
}
