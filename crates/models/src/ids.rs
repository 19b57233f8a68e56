use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Declares a textual identifier whose equality is defined on its trimmed
/// string form, so ids arriving as numbers or as text compare equal.
macro_rules! text_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub fn new(raw: impl AsRef<str>) -> Self {
                Self(raw.as_ref().trim().to_owned())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self::new(raw)
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self::new(raw)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                f.write_str(&self.0)
            }
        }
    };
}

text_id!(
    /// Student identifier. Stored as an integer, compared as text.
    StudentId
);
text_id!(
    /// Course catalog identifier, e.g. `CMPSC 131`
    CourseId
);
text_id!(
    /// Advisor identifier
    AdvisorId
);

impl From<i32> for StudentId {
    fn from(raw: i32) -> Self {
        Self(raw.to_string())
    }
}

impl From<i64> for StudentId {
    fn from(raw: i64) -> Self {
        Self(raw.to_string())
    }
}

impl StudentId {
    /// The integer storage key, if this id is numeric
    pub fn as_key(&self) -> Option<i32> {
        self.0.parse().ok()
    }
}
