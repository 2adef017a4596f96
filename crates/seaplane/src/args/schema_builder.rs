//! Fluent builder for option schemas.
//!
//! Each default fixes the kind of its option, so the builder is the usual way
//! to declare what a program accepts.
//!
//! # Example
//!
//! ```ignore
//! let schema = SchemaBuilder::new()
//!     .set("num", 1)
//!     .set("verbose", false)
//!     .set("name", "bag")
//!     .set("ratio", 7.3)
//!     .build();
//! ```

use crate::args::OptionMap;
use crate::variant::Variant;

/// Collects `(name, default)` pairs and produces an [`OptionMap`].
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    entries: Vec<(String, Variant)>,
}

impl SchemaBuilder {
    #[inline]
    pub fn new() -> Self {
        SchemaBuilder {
            entries: Vec::new(),
        }
    }

    /// Declare an option with its default. Declaring a name twice keeps the
    /// last default.
    #[inline]
    pub fn set(mut self, name: &str, default: impl Into<Variant>) -> Self {
        self.entries.push((name.to_owned(), default.into()));
        self
    }

    pub fn build(self) -> OptionMap {
        let mut map = OptionMap::with_capacity_and_hasher(self.entries.len(), Default::default());
        map.extend(self.entries);
        map
    }
}
