//! Bridge between [`Variant`] and JSON via serde.
//!
//! - `null` ↔ `Absence`
//! - whole numbers within ±2^53 serialize as integers, other finite
//!   numbers as floats, and `NaN` / infinities as `null`
//! - mapping entries serialize in key order so output is deterministic

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::Result;
use crate::mapping::Mapping;
use crate::number::Number;
use crate::sequence::Sequence;
use crate::variant::Variant;

const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

fn as_safe_integer(n: Number) -> Option<i64> {
    let f = n.to_f64();
    (f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER).then_some(f as i64)
}

impl Variant {
    /// Parse a JSON document into a variant.
    ///
    /// ```
    /// use jsval_core::Variant;
    ///
    /// let v = Variant::from_json(r#"{"a":[1,"x"]}"#).unwrap();
    /// assert_eq!(v.at("a").unwrap().at(1).unwrap().to_string(), "x");
    /// ```
    pub fn from_json(json: &str) -> Result<Variant> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Variant::from(value))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<Value> for Variant {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Variant::Absence,
            Value::Bool(b) => Variant::Flag(b),
            Value::Number(n) => n.as_f64().map_or(Variant::Absence, Variant::from),
            Value::String(s) => Variant::from(s),
            Value::Array(items) => {
                let seq: Sequence = items.into_iter().map(Variant::from).collect();
                Variant::from(seq)
            }
            Value::Object(map) => {
                let mapping: Mapping = map.into_iter().collect();
                Variant::from(mapping)
            }
        }
    }
}

impl From<&Variant> for Value {
    fn from(value: &Variant) -> Self {
        match value {
            Variant::Absence => Value::Null,
            Variant::Flag(b) => Value::Bool(*b),
            Variant::Number(n) => match as_safe_integer(*n) {
                Some(i) => Value::from(i),
                None => serde_json::Number::from_f64(n.to_f64())
                    .map_or(Value::Null, Value::Number),
            },
            Variant::Text(text) => Value::String(text.as_str().to_string()),
            Variant::Sequence(seq) => Value::Array(seq.iter().map(Value::from).collect()),
            Variant::Mapping(map) => Value::Object(
                map.sorted_entries()
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if let Some(i) = as_safe_integer(*self) {
            return serializer.serialize_i64(i);
        }
        if self.to_f64().is_finite() {
            serializer.serialize_f64(self.to_f64())
        } else {
            serializer.serialize_unit()
        }
    }
}

impl Serialize for Sequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for item in self {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

impl Serialize for Mapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.sorted_entries() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for Variant {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Variant::Absence => serializer.serialize_unit(),
            Variant::Flag(b) => serializer.serialize_bool(*b),
            Variant::Number(n) => n.serialize(serializer),
            Variant::Text(text) => serializer.serialize_str(text.as_str()),
            Variant::Sequence(seq) => seq.serialize(serializer),
            Variant::Mapping(map) => map.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Variant {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Variant::from)
    }
}
