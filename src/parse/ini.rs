//! INI decoding into a two-level mapping.

use crate::error::{DotcatError, Result};
use crate::value::{Mapping, Value};
use ::ini::Ini;

/// Name given to keys that appear before the first section header.
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// Flatten INI sections into `{section: {key: "value"}}`.
///
/// The default section (implicit or an explicit `[DEFAULT]` header) is kept
/// only when it has keys. Repeated
/// sections are merged, with later keys overwriting earlier ones.
pub(super) fn parse_ini(content: &str) -> Result<Value> {
    let ini = Ini::load_from_str(content).map_err(|e| DotcatError::parse("INI", e))?;

    let mut sections = Mapping::new();
    for (name, properties) in ini.iter() {
        let name = name.unwrap_or(DEFAULT_SECTION);
        if name == DEFAULT_SECTION && properties.is_empty() {
            continue;
        }

        let entry = sections
            .entry(name.to_string())
            .or_insert_with(|| Value::Mapping(Mapping::new()));
        if let Value::Mapping(section) = entry {
            for (key, value) in properties.iter() {
                section.insert(key.to_string(), Value::String(value.to_string()));
            }
        }
    }

    Ok(Value::Mapping(sections))
}
