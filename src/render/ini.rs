//! INI rendering for two-level mappings.

use crate::error::{DotcatError, Result};
use crate::value::Value;
use ::ini::Ini;

/// Write `{section: {key: value}}` as INI text. Inner values use the raw
/// rendering, so nested lists or tables end up as a single flow-style line.
/// Every section gets a header, including empty ones.
pub fn render_ini(value: &Value) -> Result<String> {
    let sections = value.as_mapping().ok_or(DotcatError::UnsupportedShape("ini"))?;

    let mut ini = Ini::new();
    for (name, section) in sections {
        let entries = section
            .as_mapping()
            .ok_or_else(|| DotcatError::InvalidSectionShape(name.clone()))?;
        let properties = ini.entry(Some(name.clone())).or_insert_with(Default::default);
        for (key, item) in entries {
            properties.insert(key.clone(), item.to_string());
        }
    }

    let mut buf = Vec::new();
    ini.write_to(&mut buf).map_err(|e| DotcatError::serialize("INI", e))?;
    String::from_utf8(buf).map_err(|e| DotcatError::serialize("INI", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::{parse_str, Format};

    fn dotcat_sections() -> Value {
        let section: Value = [("name", "dotcat"), ("version", "0.1.0")].into_iter().collect();
        [("dotcat", section)].into_iter().collect()
    }

    #[test]
    fn round_trip_is_idempotent() {
        let parsed = parse_str("[dotcat]\nname=dotcat\nversion=0.1.0", Format::Ini).expect("parse");
        assert_eq!(parsed, dotcat_sections());

        let rendered = render_ini(&parsed).expect("render");
        let reparsed = parse_str(&rendered, Format::Ini).expect("reparse");
        assert_eq!(reparsed, parsed);
    }

    #[test]
    fn empty_sections_survive_round_trip() {
        let parsed = parse_str("[a]\n[b]\nx=1\n", Format::Ini).expect("parse");
        let rendered = render_ini(&parsed).expect("render");
        assert!(rendered.contains("[a]"), "{}", rendered);

        let reparsed = parse_str(&rendered, Format::Ini).expect("reparse");
        assert_eq!(reparsed, parsed);
    }

    #[test]
    fn sections_are_written_with_headers() {
        let rendered = render_ini(&dotcat_sections()).expect("render");
        assert!(rendered.contains("[dotcat]"), "{}", rendered);
        assert!(rendered.contains("name=dotcat"), "{}", rendered);
        assert!(rendered.contains("version=0.1.0"), "{}", rendered);
    }

    #[test]
    fn non_string_values_are_stringified() {
        let section: Value =
            [("port", Value::from(8080i64)), ("debug", Value::from(true))].into_iter().collect();
        let value: Value = [("server", section)].into_iter().collect();

        let rendered = render_ini(&value).expect("render");
        let reparsed = parse_str(&rendered, Format::Ini).expect("reparse");

        let strings: Value = [("port", "8080"), ("debug", "true")].into_iter().collect();
        let expected: Value = [("server", strings)].into_iter().collect();
        assert_eq!(reparsed, expected);
    }

    #[test]
    fn top_level_must_be_mapping() {
        let err = render_ini(&Value::from("scalar")).expect_err("scalar");
        assert!(matches!(err, DotcatError::UnsupportedShape("ini")));
    }

    #[test]
    fn sections_must_be_mappings() {
        let value: Value = [("name", "dotcat")].into_iter().collect();
        let err = render_ini(&value).expect_err("flat map");
        assert!(matches!(err, DotcatError::InvalidSectionShape(ref s) if s == "name"));
    }
}
