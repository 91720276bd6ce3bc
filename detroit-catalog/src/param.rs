//! Parameter specs of method descriptors.
//!
//! A parameter is written as a single string in the catalog:
//!
//! - `data`: a positional parameter
//! - `radius = 3`: a parameter with a default, kept as JavaScript source
//! - `...values`: a rest parameter collecting the remaining arguments

use std::{fmt, str::FromStr};

use detroit_core::is_identifier;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParamKind {
    Positional,
    Default(String),
    Rest,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct Param {
    pub name: String,
    pub kind: ParamKind,
}

impl Param {
    pub fn positional(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParamKind::Positional,
        }
    }

    pub fn with_default(name: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParamKind::Default(default.into()),
        }
    }

    pub fn rest(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParamKind::Rest,
        }
    }

    pub fn is_rest(&self) -> bool {
        matches!(self.kind, ParamKind::Rest)
    }

    pub fn default_value(&self) -> Option<&str> {
        match &self.kind {
            ParamKind::Default(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParamKind::Positional => write!(f, "{}", self.name),
            ParamKind::Default(value) => write!(f, "{} = {}", self.name, value),
            ParamKind::Rest => write!(f, "...{}", self.name),
        }
    }
}

impl FromStr for Param {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let param = if let Some(name) = s.strip_prefix("...") {
            Param::rest(name.trim())
        } else if let Some((name, default)) = s.split_once('=') {
            let default = default.trim();
            if default.is_empty() {
                return Err(format!("parameter '{}' has an empty default value", s));
            }
            Param::with_default(name.trim(), default)
        } else {
            Param::positional(s)
        };

        if param.name.is_empty() {
            return Err(format!("parameter '{}' has no name", s));
        }
        if !is_identifier(&param.name) {
            return Err(format!(
                "parameter name '{}' must contain only letters, numbers, and underscores",
                param.name
            ));
        }
        Ok(param)
    }
}

impl TryFrom<String> for Param {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Param> for String {
    fn from(param: Param) -> Self {
        param.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positional() {
        let param: Param = "data".parse().unwrap();
        assert_eq!(param, Param::positional("data"));
    }

    #[test]
    fn test_parse_default() {
        let param: Param = "radius = 3".parse().unwrap();
        assert_eq!(param, Param::with_default("radius", "3"));
        assert_eq!(param.default_value(), Some("3"));

        let param: Param = "format=\".2f\"".parse().unwrap();
        assert_eq!(param.default_value(), Some("\".2f\""));
    }

    #[test]
    fn test_parse_rest() {
        let param: Param = "...values".parse().unwrap();
        assert!(param.is_rest());
        assert_eq!(param.name, "values");
    }

    #[test]
    fn test_parse_invalid() {
        assert!("".parse::<Param>().is_err());
        assert!("...".parse::<Param>().is_err());
        assert!("radius =".parse::<Param>().is_err());
        assert!("{data, width}".parse::<Param>().is_err());
        assert!("2d".parse::<Param>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Param::positional("x").to_string(), "x");
        assert_eq!(Param::with_default("k", "1").to_string(), "k = 1");
        assert_eq!(Param::rest("args").to_string(), "...args");
    }
}
