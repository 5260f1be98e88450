use serde::{Deserialize, Serialize};

/// Scalar stored under a settings key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Bool(value)
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        SettingValue::Int(value)
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        SettingValue::Str(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::Str(value.to_string())
    }
}

/// Scalar types the store can read and write generically.
///
/// `zero` is the last link of the lookup chain: persisted value, then
/// registered default, then `zero`. A persisted value of a different
/// scalar type does not convert; `from_value` returns `None` and the
/// lookup falls through.
pub trait SettingScalar: Sized {
    fn zero() -> Self;
    fn from_value(value: &SettingValue) -> Option<Self>;
    fn into_value(self) -> SettingValue;
}

impl SettingScalar for bool {
    fn zero() -> Self {
        false
    }

    fn from_value(value: &SettingValue) -> Option<Self> {
        match value {
            SettingValue::Bool(inner) => Some(*inner),
            _ => None,
        }
    }

    fn into_value(self) -> SettingValue {
        SettingValue::Bool(self)
    }
}

impl SettingScalar for i64 {
    fn zero() -> Self {
        0
    }

    fn from_value(value: &SettingValue) -> Option<Self> {
        match value {
            SettingValue::Int(inner) => Some(*inner),
            _ => None,
        }
    }

    fn into_value(self) -> SettingValue {
        SettingValue::Int(self)
    }
}

impl SettingScalar for String {
    fn zero() -> Self {
        String::new()
    }

    fn from_value(value: &SettingValue) -> Option<Self> {
        match value {
            SettingValue::Str(inner) => Some(inner.clone()),
            _ => None,
        }
    }

    fn into_value(self) -> SettingValue {
        SettingValue::Str(self)
    }
}
