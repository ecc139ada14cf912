//! Runtime values

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Number(i64),
    String(String),
}

impl Value {
    /// Numeric view: numbers as is, strings holding an integer parsed
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::String(s) => s.trim().parse().ok(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            Value::Number(_) => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::String(_) => "string",
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Number(0)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Number(-12).to_string(), "-12");
        assert_eq!(Value::from("AB1").to_string(), "AB1");
    }

    #[test]
    fn test_value_as_number() {
        assert_eq!(Value::Number(7).as_number(), Some(7));
        assert_eq!(Value::from("42").as_number(), Some(42));
        assert_eq!(Value::from("abc").as_number(), None);
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Value::default(), Value::Number(0));
        assert_eq!(Value::default().type_name(), "number");
    }
}
