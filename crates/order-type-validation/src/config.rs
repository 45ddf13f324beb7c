//! Configuration for Order Type Validation

use crate::domain::RejectionCode;
use serde::{Deserialize, Serialize};

/// Message codes the presentation layer resolves into localized text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageCodes {
    pub missing_name: String,
    pub parent_among_descendants: String,
    pub duplicate_name: String,
    pub duplicate_concept_class: String,
}

impl Default for MessageCodes {
    fn default() -> Self {
        Self {
            missing_name: "error.name".to_string(),
            parent_among_descendants: "OrderType.parent.amongDescendants".to_string(),
            duplicate_name: "OrderType.duplicate.name".to_string(),
            duplicate_concept_class: "OrderType.duplicate".to_string(),
        }
    }
}

impl MessageCodes {
    /// Message code for `code`.
    pub fn code_for(&self, code: RejectionCode) -> &str {
        match code {
            RejectionCode::MissingName => &self.missing_name,
            RejectionCode::ParentAmongDescendants => &self.parent_among_descendants,
            RejectionCode::DuplicateName => &self.duplicate_name,
            RejectionCode::DuplicateConceptClass => &self.duplicate_concept_class,
        }
    }
}

/// Validation configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Message codes per rule
    pub codes: MessageCodes,
    /// Attach English fallback text to rejections
    pub include_default_messages: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            codes: MessageCodes::default(),
            include_default_messages: true,
        }
    }
}

impl ValidationConfig {
    /// Parse a JSON override; missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
