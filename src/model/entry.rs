use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DictEntry {
    pub keyword: String,

    #[serde(default)]
    pub translation: String,

    #[serde(default)]
    pub description: String,
}

impl DictEntry {
    pub fn new(
        keyword: impl Into<String>,
        translation: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        DictEntry {
            keyword: keyword.into(),
            translation: translation.into(),
            description: description.into(),
        }
    }
}
