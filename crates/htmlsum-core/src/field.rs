//! Names of the fixed summary fields.

use serde::{Deserialize, Serialize};

/// One of the fixed fields every summary record carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Field {
    Title,
    Author,
    Description,
    Headline,
    FirstPara,
    LastModifiedMeta,
    LastModifiedFile,
    CreatedMeta,
    CreatedFile,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::Title,
        Field::Author,
        Field::Description,
        Field::Headline,
        Field::FirstPara,
        Field::LastModifiedMeta,
        Field::LastModifiedFile,
        Field::CreatedMeta,
        Field::CreatedFile,
    ];

    /// Record key for this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "TITLE",
            Self::Author => "AUTHOR",
            Self::Description => "DESCRIPTION",
            Self::Headline => "HEADLINE",
            Self::FirstPara => "FIRST_PARA",
            Self::LastModifiedMeta => "LAST_MODIFIED_META",
            Self::LastModifiedFile => "LAST_MODIFIED_FILE",
            Self::CreatedMeta => "CREATED_META",
            Self::CreatedFile => "CREATED_FILE",
        }
    }

    /// Look up a fixed field by its record key.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
