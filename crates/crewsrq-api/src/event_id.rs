//! Normalised event identifier.

use std::fmt;

use serde_json::Value;

/// Event identifier shared by listings and slug entries.
///
/// The listings API and the content site disagree on whether ids are JSON
/// numbers or strings, so both are reduced to their decimal text. Integral
/// floats read as integers (`42.0` equals `42`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventId(String);

impl EventId {
    /// Reads an identifier from a raw JSON value.
    ///
    /// Returns `None` for falsy values: `null`, `""`, `0`, `false`, and
    /// for arrays or objects. `true` is the identifier `1`.
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) if !s.is_empty() => Some(Self(s.clone())),
            Value::Number(n) if !is_zero(n) => Some(Self(number_text(n))),
            Value::Bool(true) => Some(Self(String::from("1"))),
            _ => None,
        }
    }

    /// Identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn number_text(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.is_finite() && f.fract().abs() < f64::EPSILON => {
            format!("{f:.0}")
        }
        _ => n.to_string(),
    }
}

fn is_zero(n: &serde_json::Number) -> bool {
    n.as_u64() == Some(0)
        || n.as_i64() == Some(0)
        || n.as_f64().is_some_and(|f| f.abs() < f64::EPSILON)
}
