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

use crate::model::{Element, Node, SemanticGraph};
use crate::util::IdGenerator;

/// The current entry of a list box: its option label and position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub value: String,
    pub index: usize,
}

/// Selections of every list box in the panel, keyed by list entry id.
pub type Selections = BTreeMap<SmolStr, Selection>;

static NO_SELECTIONS: Selections = BTreeMap::new();

/// What an entry may look at while reading or writing: the graph, the selected diagram
/// element, and the list selections of the rendered panel.
#[derive(Clone, Copy)]
pub struct EntryContext<'a> {
    graph: &'a dyn SemanticGraph,
    element: &'a Element,
    selections: &'a Selections,
}

impl<'a> EntryContext<'a> {
    pub fn new(graph: &'a dyn SemanticGraph, element: &'a Element) -> Self {
        Self {
            graph,
            element,
            selections: &NO_SELECTIONS,
        }
    }

    pub fn with_selections(mut self, selections: &'a Selections) -> Self {
        self.selections = selections;
        self
    }

    pub fn graph(&self) -> &'a dyn SemanticGraph {
        self.graph
    }

    pub fn element(&self) -> &'a Element {
        self.element
    }

    /// The element's own semantic node.
    pub fn business_object(&self) -> Option<&'a Node> {
        self.graph.node(self.element.business_object())
    }

    pub fn selection(&self, list: &str) -> Option<&'a Selection> {
        self.selections.get(list)
    }

    pub fn ids(&self) -> &'static IdGenerator {
        crate::util::ids()
    }
}
