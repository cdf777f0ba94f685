// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Panel configuration.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use thiserror::Error;

use crate::entry::ContainerSpec;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid panel config: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Tunables of the built-in editors; every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PanelConfig {
    /// Minimum visible rows of a resizable list box.
    pub list_min_size: usize,
    pub extension_container_type: SmolStr,
    /// Property of a business object holding its extension container.
    pub extension_container_property: SmolStr,
    /// Expression written into a business-key `camunda:In`.
    pub business_key_expression: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        let container = ContainerSpec::default();
        Self {
            list_min_size: crate::entry::DEFAULT_MIN_SIZE,
            extension_container_type: container.type_name,
            extension_container_property: container.property,
            business_key_expression: "#{caseExecution.caseBusinessKey}".to_owned(),
        }
    }
}

impl PanelConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn container(&self) -> ContainerSpec {
        ContainerSpec {
            type_name: self.extension_container_type.clone(),
            property: self.extension_container_property.clone(),
        }
    }
}
