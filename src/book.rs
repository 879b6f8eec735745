use serde::{Deserialize, Serialize};

/// A book record. The crate only ever reads `category`; everything else is
/// opaque caller data.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Book {
    title: String,
    // a missing category deserializes to "", which matches no real category
    #[serde(default)]
    category: String,
}

impl Book {
    pub fn new(title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}
