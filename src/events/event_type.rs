//! # Case-insensitive event type names.
//!
//! [`EventType`] is the registry key. Every value passed as an event type goes through
//! [`EventType::new`], which takes the `Display` form and lower-cases it, so
//! `"Go_To_Bed"`, `"GO_TO_BED"` and `"go_to_bed"` name the same entry.
//!
//! ## Example
//! ```rust
//! use eventhub::EventType;
//!
//! let a = EventType::new("Go_To_Bed");
//! let b = EventType::new("go_to_bed");
//! assert_eq!(a, b);
//! assert_eq!(a.as_str(), "go_to_bed");
//!
//! // Non-string values are coerced through `Display`.
//! assert_eq!(EventType::new(42).as_str(), "42");
//! ```

use std::borrow::Borrow;
use std::fmt;

/// Normalized (lower-cased) event type name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventType(String);

impl EventType {
    /// Normalizes any displayable value into an event type.
    pub fn new(raw: impl fmt::Display) -> Self {
        Self(raw.to_string().to_lowercase())
    }

    /// Returns the normalized name.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EventType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for EventType {
    fn borrow(&self) -> &str {
        &self.0
    }
}
