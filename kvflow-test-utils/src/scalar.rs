// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt::{self, Display};

/// A dynamically-typed test value.
///
/// Equality is strict: the variant is part of the value, so `Int(1)`,
/// `Float(1.0)`, `Str("1")` and `Bool(true)` are all different.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// A signed integer
    Int(i64),
    /// A floating-point number
    Float(f64),
    /// A string; `"1"` is not the integer `1`
    Str(String),
    /// A boolean, displayed as `1` or `0`
    Bool(bool),
}

impl Scalar {
    /// Name of the variant, for assertion messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "str",
            Self::Bool(_) => "bool",
        }
    }

    /// `true` if a loose comparison by textual form would equate the two.
    #[must_use]
    pub fn loosely_equals(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Str(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{}", u8::from(*value)),
        }
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_text_different_type() {
        let int = Scalar::Int(1);
        let text = Scalar::from("1");

        assert!(int.loosely_equals(&text));
        assert_ne!(int, text, "{} and {} must differ", int.type_name(), text.type_name());
    }

    #[test]
    fn test_bool_displays_as_digit() {
        assert!(Scalar::Bool(true).loosely_equals(&Scalar::Int(1)));
        assert_eq!(Scalar::Bool(false).type_name(), "bool");
    }
}
