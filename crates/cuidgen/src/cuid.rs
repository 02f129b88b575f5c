use serde::{Serialize, Serializer};
use std::fmt;

/// A generated identifier: one lowercase letter followed by lowercase base36
/// digits.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cuid(String);

impl Cuid {
    pub(crate) fn new_unchecked(id: String) -> Self {
        Self(id)
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for Cuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cuid").field(&self.0).finish()
    }
}

impl fmt::Display for Cuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Cuid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Cuid> for String {
    fn from(value: Cuid) -> Self {
        value.0
    }
}

impl Serialize for Cuid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}
