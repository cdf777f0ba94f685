// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use super::ids::{ElementId, NodeId};
use super::node::{Element, Node, Value};

/// Property name under which modeled nodes carry their document id.
pub const ID_PROPERTY: &str = "id";

/// Read-only query surface over the semantic graph.
///
/// Entries only ever read through this trait; every mutation goes through
/// [`crate::ops::Command`]s submitted to a [`crate::ops::CommandStack`].
pub trait SemanticGraph {
    fn node(&self, id: &NodeId) -> Option<&Node>;

    fn element(&self, id: &ElementId) -> Option<&Element>;

    /// The node currently registered under the document id `id`.
    fn id_owner(&self, id: &str) -> Option<&NodeId>;

    fn resolve(&self, node: &NodeId, property: &str) -> Option<&Value> {
        self.node(node)?.property(property)
    }

    /// Follows a single-valued relation, `None` when unset or dangling.
    fn related(&self, node: &NodeId, relation: &str) -> Option<&Node> {
        let target = self.node(node)?.node_property(relation)?;
        self.node(target)
    }

    /// Follows a list-valued relation, skipping dangling entries.
    fn related_list(&self, node: &NodeId, relation: &str) -> Vec<&Node> {
        let Some(source) = self.node(node) else {
            return Vec::new();
        };
        source
            .list_property(relation)
            .iter()
            .filter_map(|id| self.node(id))
            .collect()
    }
}

/// In-memory semantic graph.
///
/// Hosts that bring their own document model implement [`SemanticGraph`] instead; this
/// implementation backs [`crate::ops::UndoStack`] and the test suite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    nodes: BTreeMap<NodeId, Node>,
    elements: BTreeMap<ElementId, Element>,
    ids: BTreeMap<String, NodeId>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &BTreeMap<NodeId, Node> {
        &self.nodes
    }

    pub fn elements(&self) -> &BTreeMap<ElementId, Element> {
        &self.elements
    }

    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Inserts (or replaces) a node and claims its document id, if it has one.
    pub fn insert_node(&mut self, node: Node) {
        let old_id = self
            .nodes
            .get(node.id())
            .and_then(|previous| previous.str_property(ID_PROPERTY))
            .map(str::to_owned);
        if let Some(old_id) = old_id {
            self.release_id(&old_id, node.id().clone());
        }
        if let Some(doc_id) = node.str_property(ID_PROPERTY) {
            self.ids.insert(doc_id.to_owned(), node.id().clone());
        }
        self.nodes.insert(node.id().clone(), node);
    }

    pub fn insert_element(&mut self, element: Element) {
        self.elements.insert(element.id().clone(), element);
    }

    pub(crate) fn node_mut(&mut self, id: &NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// Sets a property on an existing node, keeping the id registry in sync.
    ///
    /// Returns `None` when the node does not exist, otherwise the previous value.
    pub(crate) fn set_property(
        &mut self,
        id: &NodeId,
        name: &str,
        value: Option<Value>,
    ) -> Option<Option<Value>> {
        let node = self.nodes.get_mut(id)?;
        let previous = node.set_property(name, value.clone());
        if name == ID_PROPERTY {
            if let Some(Value::Str(old_id)) = &previous {
                let old_id = old_id.clone();
                self.release_id(&old_id, id.clone());
            }
            if let Some(Value::Str(new_id)) = value {
                self.ids.insert(new_id, id.clone());
            }
        }
        Some(previous)
    }

    fn release_id(&mut self, doc_id: &str, owner: NodeId) {
        if self.ids.get(doc_id) == Some(&owner) {
            self.ids.remove(doc_id);
        }
    }
}

impl SemanticGraph for Model {
    fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    fn element(&self, id: &ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    fn id_owner(&self, id: &str) -> Option<&NodeId> {
        self.ids.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::{Model, SemanticGraph};
    use crate::model::{Node, NodeId, Value};

    fn node_id(value: &str) -> NodeId {
        NodeId::new(value).expect("node id")
    }

    #[test]
    fn insert_node_claims_document_id() {
        let mut model = Model::new();
        model.insert_node(Node::new(node_id("n1"), "cmmn:HumanTask").with_property("id", "Task_1"));
        assert_eq!(model.id_owner("Task_1"), Some(&node_id("n1")));
    }

    #[test]
    fn replacing_a_node_releases_its_old_document_id() {
        let mut model = Model::new();
        model.insert_node(Node::new(node_id("n1"), "cmmn:HumanTask").with_property("id", "Task_1"));
        model.insert_node(Node::new(node_id("n1"), "cmmn:HumanTask").with_property("id", "Task_2"));
        assert_eq!(model.id_owner("Task_1"), None);
        assert_eq!(model.id_owner("Task_2"), Some(&node_id("n1")));
    }

    #[test]
    fn changing_id_property_moves_registration() {
        let mut model = Model::new();
        model.insert_node(Node::new(node_id("n1"), "cmmn:HumanTask").with_property("id", "Task_1"));
        model.set_property(&node_id("n1"), "id", Some(Value::from("Task_2")));
        assert_eq!(model.id_owner("Task_1"), None);
        assert_eq!(model.id_owner("Task_2"), Some(&node_id("n1")));
    }

    #[test]
    fn related_skips_dangling_references() {
        let mut model = Model::new();
        model.insert_node(
            Node::new(node_id("n1"), "cmmn:PlanItem")
                .with_property("definitionRef", Value::Node(node_id("missing"))),
        );
        assert!(model.related(&node_id("n1"), "definitionRef").is_none());
        assert!(model.related_list(&node_id("n1"), "values").is_empty());
    }
}
