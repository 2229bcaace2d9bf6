//! Typed accessors over a filter's JSON options object

use serde_json::{Map, Value};

use crate::error::ConfigError;

pub(crate) struct FilterOptions<'a> {
    filter: &'a str,
    map: Option<&'a Map<String, Value>>,
}

impl<'a> FilterOptions<'a> {
    /// `null` is accepted as an empty options object
    pub fn new(filter: &'a str, options: &'a Value) -> Result<Self, ConfigError> {
        let map = match options {
            Value::Object(map) => Some(map),
            Value::Null => None,
            _ => {
                return Err(ConfigError::invalid_options(
                    filter,
                    "options must be a JSON object",
                ))
            }
        };
        Ok(Self { filter, map })
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.and_then(|map| map.get(key))
    }

    fn missing(&self, key: &str) -> ConfigError {
        ConfigError::invalid_options(self.filter, format!("missing required option \"{}\"", key))
    }

    fn wrong_type(&self, key: &str, expected: &str) -> ConfigError {
        ConfigError::invalid_options(self.filter, format!("option \"{}\" must be {}", key, expected))
    }

    pub fn required_bool(&self, key: &str) -> Result<bool, ConfigError> {
        self.get(key)
            .ok_or_else(|| self.missing(key))?
            .as_bool()
            .ok_or_else(|| self.wrong_type(key, "a boolean"))
    }

    pub fn required_str(&self, key: &str) -> Result<&'a str, ConfigError> {
        self.get(key)
            .ok_or_else(|| self.missing(key))?
            .as_str()
            .ok_or_else(|| self.wrong_type(key, "a string"))
    }

    pub fn str_or(&self, key: &str, default: &'a str) -> Result<&'a str, ConfigError> {
        match self.get(key) {
            None => Ok(default),
            Some(value) => value.as_str().ok_or_else(|| self.wrong_type(key, "a string")),
        }
    }

    pub fn f32_or(&self, key: &str, default: f32) -> Result<f32, ConfigError> {
        match self.get(key) {
            None => Ok(default),
            Some(value) => value
                .as_f64()
                .map(|v| v as f32)
                .ok_or_else(|| self.wrong_type(key, "a number")),
        }
    }

    pub fn optional_u64(&self, key: &str) -> Result<Option<u64>, ConfigError> {
        match self.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => value
                .as_u64()
                .map(Some)
                .ok_or_else(|| self.wrong_type(key, "a non-negative integer")),
        }
    }
}
