// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Two-phase wiring of mutually exclusive list boxes.

use std::collections::BTreeMap;

use smol_str::SmolStr;
use tracing::debug;

use crate::entry::{EntryState, ListHandle, Selection, Selections};

/// Host-owned transient state of every entry, keyed by entry id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelState {
    entries: BTreeMap<SmolStr, EntryState>,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(&self, id: &str) -> Option<&EntryState> {
        self.entries.get(id)
    }

    pub fn entry_mut(&mut self, id: &str) -> &mut EntryState {
        self.entries.entry(SmolStr::new(id)).or_default()
    }

    /// The current selection of every list box.
    pub fn selections(&self) -> Selections {
        self.entries
            .iter()
            .filter_map(|(id, state)| {
                let selection = state.list().selected()?;
                Some((id.clone(), selection))
            })
            .collect()
    }

    pub fn selection(&self, list: &str) -> Option<Selection> {
        self.entry(list)?.list().selected()
    }

    /// Drops all transient state, e.g. when another element gets selected.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Sets of list boxes whose selections exclude each other.
///
/// Lists are built first and hand out [`ListHandle`]s; `wire` runs once all lists of a
/// set exist, so no list needs to know its siblings at construction time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiblingLists {
    sets: Vec<Vec<ListHandle>>,
}

impl SiblingLists {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wire(mut self, handles: impl IntoIterator<Item = ListHandle>) -> Self {
        let set: Vec<ListHandle> = handles.into_iter().collect();
        if set.len() > 1 {
            self.sets.push(set);
        }
        self
    }

    pub fn siblings_of<'a>(&'a self, list: &'a str) -> impl Iterator<Item = &'a ListHandle> + 'a {
        self.sets
            .iter()
            .filter(move |set| set.iter().any(|handle| handle.id() == list))
            .flat_map(|set| set.iter())
            .filter(move |handle| handle.id() != list)
    }

    /// Deselects the siblings of `list`; returns the ones that lost a selection.
    pub fn on_selection_change(&self, list: &str, state: &mut PanelState) -> Vec<ListHandle> {
        let mut deselected = Vec::new();
        for sibling in self.siblings_of(list) {
            if state.entry_mut(sibling.id()).list_mut().deselect() {
                deselected.push(sibling.clone());
            }
        }
        if !deselected.is_empty() {
            debug!(%list, deselected = deselected.len(), "deselected sibling lists");
        }
        deselected
    }
}

#[cfg(test)]
mod tests {
    use super::{PanelState, SiblingLists};
    use crate::entry::ListHandle;

    fn state_with(lists: &[(&str, Vec<&str>, usize)]) -> PanelState {
        let mut state = PanelState::new();
        for (id, options, selected) in lists {
            let list = state.entry_mut(id).list_mut();
            list.set_options(options.iter().map(|s| (*s).to_owned()).collect());
            list.select(*selected);
        }
        state
    }

    #[test]
    fn selecting_one_list_deselects_its_siblings() {
        let siblings = SiblingLists::new()
            .wire([ListHandle::new("inputs"), ListHandle::new("outputs")])
            .wire([ListHandle::new("listeners"), ListHandle::new("tasks")]);
        let mut state = state_with(&[
            ("inputs", vec!["a"], 0),
            ("outputs", vec!["b"], 0),
            ("listeners", vec!["c"], 0),
        ]);

        let deselected = siblings.on_selection_change("inputs", &mut state);

        assert_eq!(deselected, vec![ListHandle::new("outputs")]);
        assert!(state.selection("inputs").is_some());
        assert!(state.selection("outputs").is_none());
        assert!(state.selection("listeners").is_some());
    }

    #[test]
    fn lone_lists_have_no_siblings() {
        let siblings = SiblingLists::new().wire([ListHandle::new("listeners")]);
        assert_eq!(siblings.siblings_of("listeners").count(), 0);
    }

    #[test]
    fn selections_snapshot_every_list() {
        let state = state_with(&[("inputs", vec!["a", "b"], 1), ("outputs", vec!["c"], 5)]);
        let selections = state.selections();
        assert_eq!(selections.len(), 1);
        assert_eq!(selections["inputs"].value, "b");
    }
}
