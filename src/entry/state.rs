// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smol_str::SmolStr;

use super::context::Selection;
use super::values::Scalar;

/// An invalid value withheld from the model, shown once more on the next read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeldValue {
    pub property: SmolStr,
    pub value: Option<Scalar>,
}

/// A list interaction waiting for the next commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    Create { value: String },
    Remove { value: String, index: usize },
}

/// Host-side mirror of a rendered list box: its options, selection and visible rows.
///
/// This is the authority on which list entry is current; entries never cache it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListView {
    options: Vec<String>,
    selected: Option<usize>,
    size: usize,
}

impl ListView {
    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn set_size(&mut self, size: usize) {
        self.size = size;
    }

    /// Replaces the options, keeping the selected index while it is still in range.
    pub fn set_options(&mut self, options: Vec<String>) {
        self.options = options;
        if self.selected.map_or(false, |index| index >= self.options.len()) {
            self.selected = None;
        }
    }

    pub fn push(&mut self, option: String) -> usize {
        self.options.push(option);
        self.options.len() - 1
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index >= self.options.len() {
            return None;
        }
        self.selected = match self.selected {
            Some(selected) if selected == index => None,
            Some(selected) if selected > index => Some(selected - 1),
            other => other,
        };
        Some(self.options.remove(index))
    }

    /// Marks `index` selected. Out-of-range indices clear the selection.
    pub fn select(&mut self, index: usize) -> bool {
        let previous = self.selected;
        self.selected = (index < self.options.len()).then_some(index);
        previous != self.selected
    }

    /// Clears the selection, reporting whether anything was selected.
    pub fn deselect(&mut self) -> bool {
        self.selected.take().is_some()
    }

    pub fn selected(&self) -> Option<Selection> {
        let index = self.selected?;
        let value = self.options.get(index)?.clone();
        Some(Selection { value, index })
    }
}

/// Transient per-entry state owned by the rendering host.
///
/// Nothing here is part of the semantic graph. The held value and the pending action are
/// single-use: they are taken (not read) by the operation that consumes them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryState {
    pub(crate) held: Option<HeldValue>,
    pub(crate) pending: Option<PendingAction>,
    pub(crate) list: ListView,
}

impl EntryState {
    pub fn held(&self) -> Option<&HeldValue> {
        self.held.as_ref()
    }

    pub fn pending(&self) -> Option<&PendingAction> {
        self.pending.as_ref()
    }

    pub fn list(&self) -> &ListView {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListView {
        &mut self.list
    }
}
