use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Tri-state field for PATCH/UPDATE requests on nullable columns.
///
/// - `Unchanged` → field absent from the request body, keep the stored value
/// - `Null` → explicit `null`, clear the column
/// - `Value` → set the column to the provided value
///
/// Use with `#[serde(default)]` so a missing key deserializes to `Unchanged`.
#[derive(Debug, Clone, PartialEq)]
pub enum PatchField<T> {
    Unchanged,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unchanged
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for PatchField<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => PatchField::Value(value),
            None => PatchField::Null,
        })
    }
}

impl<T: Serialize> Serialize for PatchField<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PatchField::Value(value) => serializer.serialize_some(value),
            _ => serializer.serialize_none(),
        }
    }
}

impl<T> PatchField<T> {
    /// True when the request wants to write this field (either null or a value).
    pub fn is_set(&self) -> bool {
        !matches!(self, PatchField::Unchanged)
    }

    pub fn is_unchanged(&self) -> bool {
        matches!(self, PatchField::Unchanged)
    }

    /// The value to write when `is_set()`; `None` covers both `Null` and `Unchanged`.
    pub fn write_value(&self) -> Option<&T> {
        match self {
            PatchField::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Applies the patch to a stored `Option<T>` in place.
    pub fn apply_to(self, target: &mut Option<T>) {
        match self {
            PatchField::Unchanged => {}
            PatchField::Null => *target = None,
            PatchField::Value(v) => *target = Some(v),
        }
    }
}

impl PatchField<String> {
    pub fn write_str(&self) -> Option<&str> {
        self.write_value().map(|s| s.as_str())
    }
}
