use super::{coerce, Primitive, Value};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::ops::{Deref, DerefMut};

/// Stores a composite field as JSON text.
///
/// The wrapped value is serialized with `serde_json` when written and
/// deserialized when loaded. A payload that does not deserialize into `T`
/// loads as `T::default()`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Json<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T> From<T> for Json<T> {
    fn from(value: T) -> Self {
        Json(value)
    }
}

impl<T> Primitive for Json<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    fn to_value(&self) -> Value {
        match serde_json::to_value(&self.0) {
            Ok(json) => Value::Json(json),
            Err(err) => {
                tracing::trace!(%err, "failed to serialize JSON field; writing empty object");
                Value::Json(serde_json::Value::Object(Default::default()))
            }
        }
    }

    fn load(value: Value) -> Self {
        if value.is_null() {
            return Json(T::default());
        }

        match serde_json::from_value(coerce::to_json(value)) {
            Ok(v) => Json(v),
            Err(err) => {
                tracing::trace!(%err, "failed to deserialize JSON field; using default");
                Json(T::default())
            }
        }
    }
}
