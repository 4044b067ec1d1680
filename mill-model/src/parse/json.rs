//! Typed field access over `serde_json` objects with located errors.

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::{Error, Result};

/// Short name of a JSON value's kind, for error messages.
pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A JSON object together with its path in the document.
#[derive(Debug, Clone, Copy)]
pub(crate) struct JsonObject<'a> {
    map: &'a Map<String, Value>,
    location: &'a str,
}

impl<'a> JsonObject<'a> {
    pub fn new(value: &'a Value, location: &'a str) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self { map, location }),
            _ => Err(Error::invalid_field("value", location, "an object")),
        }
    }

    pub fn location(&self) -> &'a str {
        self.location
    }

    pub fn has(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub fn value(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key)
    }

    pub fn str(&self, key: &str) -> Result<&'a str> {
        self.opt_str(key)?
            .ok_or_else(|| Error::missing_field(key, self.location))
    }

    pub fn opt_str(&self, key: &str) -> Result<Option<&'a str>> {
        match self.map.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(_) => Err(Error::invalid_field(key, self.location, "a string")),
        }
    }

    pub fn uuid(&self, key: &str) -> Result<Uuid> {
        parse_uuid(self.str(key)?, self.location)
    }

    pub fn opt_uuid(&self, key: &str) -> Result<Option<Uuid>> {
        self.opt_str(key)?
            .map(|s| parse_uuid(s, self.location))
            .transpose()
    }

    pub fn i64(&self, key: &str) -> Result<i64> {
        match self.map.get(key) {
            None => Err(Error::missing_field(key, self.location)),
            Some(value) => value
                .as_i64()
                .ok_or_else(|| Error::invalid_field(key, self.location, "an integer")),
        }
    }

    pub fn opt_object(&self, key: &str) -> Result<Option<&'a Map<String, Value>>> {
        match self.map.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Object(map)) => Ok(Some(map)),
            Some(_) => Err(Error::invalid_field(key, self.location, "an object")),
        }
    }

    pub fn opt_array(&self, key: &str) -> Result<Option<&'a Vec<Value>>> {
        match self.map.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Array(items)) => Ok(Some(items)),
            Some(_) => Err(Error::invalid_field(key, self.location, "an array")),
        }
    }
}

pub(crate) fn parse_uuid(value: &str, location: &str) -> Result<Uuid> {
    Uuid::parse_str(value).map_err(|e| Error::invalid_uuid(value, location, e))
}

/// Render a scalar JSON value as text (property values may be numbers or booleans).
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
