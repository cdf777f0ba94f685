// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Composite editors: several entries reading and writing a nested structure together.

mod business_key;
mod extension;
mod field_injection;
mod listener;
mod mapping;
mod rule;

pub use business_key::business_key;
pub use extension::{add_entry, extension_elements, remove_entry, VALUES};
pub use field_injection::field_injection;
pub use listener::{listeners, LISTENER_EVENTS, LISTENER_TYPE};
pub use mapping::{filter_mappings, variable_mappings, MappingKind};
pub use rule::{rule_condition, RuleKind, CONDITION_BODY};

use crate::entry::{Entry, ListHandle, SelectedItem};

/// The entries of one composite editor, in display order.
pub struct Editor {
    pub entries: Vec<Box<dyn Entry>>,
    /// List boxes among `entries` whose selections must stay mutually exclusive.
    pub lists: Vec<ListHandle>,
    /// The item detail entries edit, when the editor is list-driven.
    pub selected: Option<SelectedItem>,
}
