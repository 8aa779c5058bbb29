//! Plain-data YAML loading.
//!
//! Builds a `serde_yaml::Value` like `serde_yaml::from_str` does, with two
//! differences:
//!
//! - a repeated mapping key keeps the last value instead of failing;
//! - any tag outside the YAML core schema (`!custom`, `!!python/object:...`)
//!   is an error, so the result only ever holds scalars, mappings and
//!   sequences.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, EnumAccess, MapAccess, SeqAccess, VariantAccess, Visitor};
use serde_yaml::{Mapping, Number, Value};

use crate::error::Result;

/// Prefix libyaml expands `!!` to.
const CORE_TAG_PREFIX: &str = "tag:yaml.org,2002:";

/// Core-schema tags with a plain-data constructor.
const CORE_TAGS: &[&str] = &[
    "null",
    "bool",
    "int",
    "float",
    "binary",
    "timestamp",
    "omap",
    "pairs",
    "set",
    "str",
    "seq",
    "map",
];

/// Parse `text` into a plain YAML value.
///
/// # Errors
///
/// Returns [`Error::Yaml`](crate::Error::Yaml) on a syntax error or on a
/// non-core tag.
pub fn safe_load(text: &str) -> Result<Value> {
    let PlainValue(value) = serde_yaml::from_str(text)?;
    Ok(value)
}

/// Whether a tag, as reported by the parser, is in the core schema.
fn is_core_tag(tag: &str) -> bool {
    let name = if let Some(short) = tag.strip_prefix("!!") {
        short
    } else if let Some(long) = tag.trim_start_matches('!').strip_prefix(CORE_TAG_PREFIX) {
        long
    } else {
        return false;
    };
    CORE_TAGS.contains(&name)
}

fn unknown_tag_message(tag: &str) -> String {
    let shown = if tag.starts_with('!') || tag.starts_with("tag:") {
        tag.to_string()
    } else {
        format!("!{tag}")
    };
    format!("could not determine a constructor for the tag '{shown}'")
}

struct PlainValue(Value);

impl<'de> Deserialize<'de> for PlainValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(PlainVisitor).map(PlainValue)
    }
}

struct PlainVisitor;

impl<'de> Visitor<'de> for PlainVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any YAML value")
    }

    fn visit_bool<E>(self, v: bool) -> std::result::Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> std::result::Result<Value, E> {
        Ok(Value::Number(Number::from(v)))
    }

    fn visit_u64<E>(self, v: u64) -> std::result::Result<Value, E> {
        Ok(Value::Number(Number::from(v)))
    }

    fn visit_f64<E>(self, v: f64) -> std::result::Result<Value, E> {
        Ok(Value::Number(Number::from(v)))
    }

    fn visit_str<E>(self, v: &str) -> std::result::Result<Value, E> {
        Ok(Value::String(v.to_owned()))
    }

    fn visit_string<E>(self, v: String) -> std::result::Result<Value, E> {
        Ok(Value::String(v))
    }

    fn visit_unit<E>(self) -> std::result::Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E>(self) -> std::result::Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> std::result::Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(PlainVisitor)
    }

    fn visit_newtype_struct<D>(self, deserializer: D) -> std::result::Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(PlainVisitor)
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(PlainValue(item)) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::Sequence(items))
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut mapping = Mapping::new();
        while let Some((PlainValue(key), PlainValue(value))) = map.next_entry()? {
            // Last one wins.
            mapping.insert(key, value);
        }
        Ok(Value::Mapping(mapping))
    }

    fn visit_enum<A>(self, data: A) -> std::result::Result<Value, A::Error>
    where
        A: EnumAccess<'de>,
    {
        let (tag, contents): (String, A::Variant) = data.variant()?;
        if !is_core_tag(&tag) {
            return Err(de::Error::custom(unknown_tag_message(&tag)));
        }
        let PlainValue(value) = contents.newtype_variant()?;
        Ok(value)
    }
}
