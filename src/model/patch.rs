//! Tri-state field wrapper for partial updates.
//!
//! Partial update endpoints must distinguish "field omitted" (leave the
//! stored value unchanged) from "field explicitly set to null" (clear it).
//! A plain `Option` cannot express that, so update parameter structs use
//! `Patch<T>` for every nullable field.

use sea_orm::{ActiveValue, Value};
use serde::{Deserialize, Deserializer};

/// A field in a partial update request.
///
/// - `Absent` - the field was omitted from the request body; keep the stored value.
/// - `Null` - the field was explicitly `null`; clear the stored value.
/// - `Value(T)` - the field carries a new value; store it.
///
/// Deserialization relies on `#[serde(default)]` on the containing field:
/// serde only calls `Patch::deserialize` when the key is present, so a
/// missing key falls back to `Default`, which is `Absent`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Patch<T> {
    #[default]
    Absent,
    Null,
    Value(T),
}

impl<T> Patch<T> {
    /// Returns true when the field was omitted from the request.
    pub fn is_absent(&self) -> bool {
        matches!(self, Patch::Absent)
    }

    /// Applies this patch to a nullable ActiveModel field.
    ///
    /// `Absent` leaves the field untouched (SeaORM will not include it in the
    /// UPDATE statement), `Null` sets it to `None`, and `Value` sets the new
    /// value.
    pub fn apply(self, field: &mut ActiveValue<Option<T>>)
    where
        Option<T>: Into<Value>,
    {
        match self {
            Patch::Absent => {}
            Patch::Null => *field = ActiveValue::Set(None),
            Patch::Value(value) => *field = ActiveValue::Set(Some(value)),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Patch::Value(value),
            None => Patch::Null,
        })
    }
}
