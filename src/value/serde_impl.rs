//! serde data-model bridge so every format decodes into and encodes out of
//! [`Value`] directly.

use super::{Mapping, Number, Value};
use serde::de::{
    self, Deserialize, Deserializer, EnumAccess, MapAccess, SeqAccess, VariantAccess, Visitor,
};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::fmt;

/// Key under which the `toml` deserializer hands out datetimes.
const TOML_DATETIME_FIELD: &str = "$__toml_private_datetime";

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(Number::Int(n)) => serializer.serialize_i64(*n),
            Value::Number(Number::Float(n)) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Mapping(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, item) in map {
                    out.serialize_entry(key, item)?;
                }
                out.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any structured data value")
    }

    fn visit_bool<E>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Number(Number::Int(v)))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Value, E> {
        Ok(match i64::try_from(v) {
            Ok(n) => Value::Number(Number::Int(n)),
            Err(_) => Value::Number(Number::Float(v as f64)),
        })
    }

    fn visit_f64<E>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Number(Number::Float(v)))
    }

    fn visit_str<E>(self, v: &str) -> Result<Value, E> {
        Ok(Value::String(v.to_string()))
    }

    fn visit_string<E>(self, v: String) -> Result<Value, E> {
        Ok(Value::String(v))
    }

    fn visit_none<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_unit<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Deserialize::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::Sequence(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Value, A::Error> {
        let mut map = Mapping::with_capacity(access.size_hint().unwrap_or(0));

        let Some(MapKey(first)) = access.next_key()? else {
            return Ok(Value::Mapping(map));
        };
        if first == TOML_DATETIME_FIELD {
            let datetime: String = access.next_value()?;
            return Ok(Value::String(datetime));
        }
        map.insert(first, access.next_value()?);

        while let Some(MapKey(key)) = access.next_key()? {
            let item = access.next_value()?;
            map.insert(key, item);
        }
        Ok(Value::Mapping(map))
    }

    /// YAML custom tags (`!Ref name`) arrive as enums; the tag is dropped and
    /// the tagged value is kept.
    fn visit_enum<A: EnumAccess<'de>>(self, data: A) -> Result<Value, A::Error> {
        let (_tag, variant) = data.variant::<String>()?;
        variant.newtype_variant()
    }
}

/// Mapping key. YAML allows scalar keys of any type; they are stringified.
struct MapKey(String);

impl<'de> Deserialize<'de> for MapKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MapKeyVisitor)
    }
}

struct MapKeyVisitor;

impl<'de> Visitor<'de> for MapKeyVisitor {
    type Value = MapKey;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a scalar mapping key")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<MapKey, E> {
        Ok(MapKey(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<MapKey, E> {
        Ok(MapKey(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<MapKey, E> {
        Ok(MapKey(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<MapKey, E> {
        Ok(MapKey(v.to_string()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<MapKey, E> {
        Ok(MapKey(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<MapKey, E> {
        Ok(MapKey(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<MapKey, E> {
        Ok(MapKey("null".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_json_in_document_order() {
        let value: Value =
            serde_json::from_str(r#"{"b": 1, "a": [true, null, 2.5, "x"]}"#).expect("json");
        let expected: Value = [
            ("b", Value::from(1i64)),
            (
                "a",
                Value::Sequence(vec![
                    Value::Bool(true),
                    Value::Null,
                    Value::from(2.5f64),
                    Value::from("x"),
                ]),
            ),
        ]
        .into_iter()
        .collect();
        assert_eq!(value, expected);
    }

    #[test]
    fn large_unsigned_falls_back_to_float() {
        let value: Value = serde_json::from_str("18446744073709551615").expect("json");
        assert!(matches!(value, Value::Number(Number::Float(_))));
    }

    #[test]
    fn yaml_scalar_keys_are_stringified() {
        let value: Value = serde_yaml::from_str("1: one\ntrue: yes\n").expect("yaml");
        let map = value.as_mapping().expect("mapping");
        assert_eq!(map.get("1"), Some(&Value::from("one")));
        assert!(map.contains_key("true"));
    }

    #[test]
    fn yaml_custom_tags_keep_the_tagged_value() {
        let value: Value =
            serde_yaml::from_str("bucket: !Ref MyBucket\nports: !Ports [80, 443]\n").expect("yaml");
        let map = value.as_mapping().expect("mapping");
        assert_eq!(map.get("bucket"), Some(&Value::from("MyBucket")));
        assert_eq!(
            map.get("ports"),
            Some(&Value::Sequence(vec![Value::from(80i64), Value::from(443i64)]))
        );
    }

    #[test]
    fn toml_datetime_becomes_string() {
        let value: Value = toml::from_str("released = 1979-05-27T07:32:00Z\n").expect("toml");
        let map = value.as_mapping().expect("mapping");
        assert_eq!(map.get("released"), Some(&Value::from("1979-05-27T07:32:00Z")));
    }

    #[test]
    fn serializes_back_to_json() {
        let value: Value = [("name", Value::from("dotcat")), ("n", Value::from(3i64))]
            .into_iter()
            .collect();
        let out = serde_json::to_string(&value).expect("serialize");
        assert_eq!(out, r#"{"name":"dotcat","n":3}"#);
    }
}
