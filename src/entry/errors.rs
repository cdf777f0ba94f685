// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// A validation finding for one model property.
///
/// Serializes as a plain string (blocking) or as `{"warning": "..."}` (informational).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldError {
    Error(String),
    Warning { warning: String },
}

impl FieldError {
    pub fn is_blocking(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Error(message) => message,
            Self::Warning { warning } => warning,
        }
    }
}

/// Validation result of an entry; empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<SmolStr, FieldError>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(mut self, property: impl Into<SmolStr>, message: impl Into<String>) -> Self {
        self.0.insert(property.into(), FieldError::Error(message.into()));
        self
    }

    pub fn warning(mut self, property: impl Into<SmolStr>, message: impl Into<String>) -> Self {
        self.0.insert(
            property.into(),
            FieldError::Warning {
                warning: message.into(),
            },
        );
        self
    }

    pub fn insert(&mut self, property: impl Into<SmolStr>, error: FieldError) {
        self.0.insert(property.into(), error);
    }

    pub fn get(&self, property: &str) -> Option<&FieldError> {
        self.0.get(property)
    }

    /// Whether `property` carries a blocking error.
    pub fn blocks(&self, property: &str) -> bool {
        self.get(property).map_or(false, FieldError::is_blocking)
    }

    pub fn has_errors(&self) -> bool {
        self.0.values().any(FieldError::is_blocking)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SmolStr, &FieldError)> {
        self.0.iter()
    }

    pub fn extend(&mut self, other: ErrorMap) {
        self.0.extend(other.0);
    }
}

/// Programming or configuration errors; these are never user-facing validation results.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntryError {
    #[error("entry '{entry}' has no model property and no custom binding")]
    MissingModelProperty { entry: SmolStr },
    #[error("entry '{entry}' was asked to commit without a staged list action")]
    NothingStaged { entry: SmolStr },
    #[error("unknown entry '{entry}'")]
    UnknownEntry { entry: SmolStr },
}

#[cfg(test)]
mod tests {
    use super::ErrorMap;

    #[test]
    fn warnings_do_not_block() {
        let errors = ErrorMap::new().warning("name", "name is long");
        assert!(!errors.is_empty());
        assert!(!errors.has_errors());
        assert!(!errors.blocks("name"));
    }

    #[test]
    fn serializes_errors_and_warnings_differently() {
        let errors = ErrorMap::new()
            .error("id", "Id must not contain spaces.")
            .warning("name", "name is long");
        let json = serde_json::to_string(&errors).expect("serialize");
        assert_eq!(
            json,
            r#"{"id":"Id must not contain spaces.","name":{"warning":"name is long"}}"#
        );
    }
}
