// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Commands over the semantic graph.
//!
//! Entries never touch the graph: their `set` returns [`Command`]s, and the host submits
//! them as one [`CommandBatch`] to a [`CommandStack`]. A batch is applied in order and
//! atomically, so later commands may reference nodes created by earlier ones.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use smol_str::SmolStr;

use crate::model::{ElementId, Model, Node, NodeId, SemanticGraph, Value};

mod stack;

pub use stack::{CommandStack, UndoStack};

/// Property updates; `None` unsets the property.
pub type PropertyMap = BTreeMap<SmolStr, Option<Value>>;

/// The ordered commands returned by one `set`.
pub type Commands = SmallVec<[Command; 2]>;

/// A single-valued containment edge: `parent.property = child`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Containment {
    pub parent: NodeId,
    pub property: SmolStr,
}

impl Containment {
    pub fn new(parent: NodeId, property: impl Into<SmolStr>) -> Self {
        Self {
            parent,
            property: property.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "camelCase")]
pub enum Command {
    /// Adds a fresh node, optionally attaching it through a single-valued containment.
    CreateNode {
        node: NodeId,
        type_name: SmolStr,
        properties: PropertyMap,
        containment: Option<Containment>,
    },
    UpdateProperties {
        node: NodeId,
        properties: PropertyMap,
    },
    /// Moves `node` under `parent.containment`; `parent: None` detaches it.
    UpdateSemanticParent {
        node: NodeId,
        parent: Option<NodeId>,
        containment: SmolStr,
    },
    AddElementsToList {
        node: NodeId,
        property: SmolStr,
        elements: Vec<NodeId>,
        index: Option<usize>,
    },
    RemoveElementsFromList {
        node: NodeId,
        property: SmolStr,
        elements: Vec<NodeId>,
    },
}

impl Command {
    pub fn update_property(
        node: NodeId,
        property: impl Into<SmolStr>,
        value: Option<Value>,
    ) -> Self {
        let mut properties = PropertyMap::new();
        properties.insert(property.into(), value);
        Self::UpdateProperties { node, properties }
    }

    pub fn create_node(
        node: NodeId,
        type_name: impl Into<SmolStr>,
        properties: PropertyMap,
        containment: Option<Containment>,
    ) -> Self {
        Self::CreateNode {
            node,
            type_name: type_name.into(),
            properties,
            containment,
        }
    }

    pub fn attach(node: NodeId, parent: NodeId, containment: impl Into<SmolStr>) -> Self {
        Self::UpdateSemanticParent {
            node,
            parent: Some(parent),
            containment: containment.into(),
        }
    }

    pub fn detach(node: NodeId, containment: impl Into<SmolStr>) -> Self {
        Self::UpdateSemanticParent {
            node,
            parent: None,
            containment: containment.into(),
        }
    }

    pub fn add_to_list(node: NodeId, property: impl Into<SmolStr>, elements: Vec<NodeId>) -> Self {
        Self::AddElementsToList {
            node,
            property: property.into(),
            elements,
            index: None,
        }
    }

    pub fn remove_from_list(
        node: NodeId,
        property: impl Into<SmolStr>,
        elements: Vec<NodeId>,
    ) -> Self {
        Self::RemoveElementsFromList {
            node,
            property: property.into(),
            elements,
        }
    }

    /// The node this command primarily targets.
    pub fn node(&self) -> &NodeId {
        match self {
            Self::CreateNode { node, .. }
            | Self::UpdateProperties { node, .. }
            | Self::UpdateSemanticParent { node, .. }
            | Self::AddElementsToList { node, .. }
            | Self::RemoveElementsFromList { node, .. } => node,
        }
    }
}

/// Commands submitted together as one undoable user action.
///
/// `changed` names the element whose properties should be re-rendered afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandBatch {
    pub changed: ElementId,
    pub commands: Commands,
}

impl CommandBatch {
    pub fn new(changed: ElementId, commands: Commands) -> Self {
        Self { changed, commands }
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyResult {
    pub new_rev: u64,
    pub applied: usize,
    pub delta: Delta,
}

/// Nodes touched by an applied batch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Delta {
    pub added: Vec<NodeId>,
    pub removed: Vec<NodeId>,
    pub updated: Vec<NodeId>,
}

#[derive(Debug, Default)]
struct DeltaBuilder {
    added: BTreeSet<NodeId>,
    removed: BTreeSet<NodeId>,
    updated: BTreeSet<NodeId>,
}

impl DeltaBuilder {
    fn record_added(&mut self, node: &NodeId) {
        self.removed.remove(node);
        self.updated.remove(node);
        self.added.insert(node.clone());
    }

    fn record_removed(&mut self, node: &NodeId) {
        if self.added.remove(node) {
            return;
        }
        self.updated.remove(node);
        self.removed.insert(node.clone());
    }

    fn record_updated(&mut self, node: &NodeId) {
        if self.added.contains(node) || self.removed.contains(node) {
            return;
        }
        self.updated.insert(node.clone());
    }

    fn record_reattached(&mut self, node: &NodeId) {
        if self.removed.remove(node) {
            self.updated.insert(node.clone());
        } else {
            self.record_updated(node);
        }
    }

    fn finish(self) -> Delta {
        Delta {
            added: self.added.into_iter().collect(),
            removed: self.removed.into_iter().collect(),
            updated: self.updated.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApplyError {
    #[error("node not found (id={node})")]
    NodeNotFound { node: NodeId },
    #[error("node already exists (id={node})")]
    AlreadyExists { node: NodeId },
    #[error("property '{property}' of node {node} is not a list")]
    NotAList { node: NodeId, property: SmolStr },
    #[error("node {element} is not in list '{property}' of node {node}")]
    NotInList {
        node: NodeId,
        property: SmolStr,
        element: NodeId,
    },
}

/// Applies `commands` to `model` in order; on error the model is left untouched.
pub fn apply_commands(model: &mut Model, commands: &[Command]) -> Result<Delta, ApplyError> {
    if commands.is_empty() {
        return Ok(Delta::default());
    }

    let mut next = model.clone();
    let mut delta = DeltaBuilder::default();
    for command in commands {
        apply_command(&mut next, command, &mut delta)?;
    }

    *model = next;
    Ok(delta.finish())
}

// Extracted per-command implementation.
include!("ops_impl.rs");
