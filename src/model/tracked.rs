//! Change-tracked scalar field used by every transfer object.
//!
//! A `Tracked<T>` carries an optional value together with a flag recording whether the
//! value was supplied by the caller. Deserializing a field that is present in the JSON body
//! marks it as changed, including an explicit `null`. A field that is absent keeps the
//! default state: no value, unchanged. The server only writes changed fields back onto a
//! persisted row, which is what makes partial updates safe.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq)]
pub struct Tracked<T> {
    value: Option<T>,
    changed: bool,
}

impl<T> Default for Tracked<T> {
    fn default() -> Self {
        Self {
            value: None,
            changed: false,
        }
    }
}

impl<T> Tracked<T> {
    /// Holds `value` without marking it as changed.
    pub fn loaded(value: Option<T>) -> Self {
        Self {
            value,
            changed: false,
        }
    }

    /// Holds `value` and marks it as changed.
    pub fn changed(value: Option<T>) -> Self {
        Self {
            value,
            changed: true,
        }
    }

    /// Replaces the value and marks the field as changed.
    pub fn set(&mut self, value: Option<T>) {
        self.value = value;
        self.changed = true;
    }

    /// Replaces the value without touching the changed flag.
    pub fn load(&mut self, value: Option<T>) {
        self.value = value;
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// The value if it was changed, `None` when the field was never touched.
    pub fn changed_value(&self) -> Option<&Option<T>> {
        if self.changed {
            Some(&self.value)
        } else {
            None
        }
    }

    /// True when serializing the field would carry no information.
    pub fn is_omitted(&self) -> bool {
        !self.changed && self.value.is_none()
    }

    pub fn into_inner(self) -> Option<T> {
        self.value
    }
}

impl<T: Clone> Tracked<T> {
    pub fn cloned(&self) -> Option<T> {
        self.value.clone()
    }
}

impl<T> From<T> for Tracked<T> {
    fn from(value: T) -> Self {
        Self::changed(Some(value))
    }
}

impl<T: Serialize> Serialize for Tracked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Tracked<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::changed)
    }
}
