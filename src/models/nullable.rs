//! Deserializers that accept JSON `null` where a plain value is expected.
//!
//! The API sends `null` for numbers, strings and nested objects it has no
//! value for, and puts `null` entries into some result pages.

use serde::{Deserialize, Deserializer};

/// Decode `null` as the type's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode a list, dropping `null` entries. A `null` list is empty.
pub(crate) fn skip_nulls<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items = Option::<Vec<Option<T>>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(items.into_iter().flatten().collect())
}
