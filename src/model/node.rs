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

use super::ids::{ElementId, NodeId};

/// A property value held by a semantic node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    Str(String),
    Bool(bool),
    Node(NodeId),
    List(Vec<NodeId>),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_node(&self) -> Option<&NodeId> {
        match self {
            Self::Node(id) => Some(id),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[NodeId]> {
        match self {
            Self::List(ids) => Some(ids),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<NodeId> for Value {
    fn from(value: NodeId) -> Self {
        Self::Node(value)
    }
}

/// A node of the semantic (business object) graph.
///
/// `type_name` is the schema type, e.g. `cmmn:HumanTask` or `camunda:CaseExecutionListener`.
/// `parent` mirrors the containment edge pointing at this node, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    id: NodeId,
    type_name: SmolStr,
    properties: BTreeMap<SmolStr, Value>,
    parent: Option<NodeId>,
}

impl Node {
    pub fn new(id: NodeId, type_name: impl Into<SmolStr>) -> Self {
        Self {
            id,
            type_name: type_name.into(),
            properties: BTreeMap::new(),
            parent: None,
        }
    }

    pub fn with_property(mut self, name: impl Into<SmolStr>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn is(&self, type_name: &str) -> bool {
        self.type_name == type_name
    }

    pub fn properties(&self) -> &BTreeMap<SmolStr, Value> {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    pub fn str_property(&self, name: &str) -> Option<&str> {
        self.property(name).and_then(Value::as_str)
    }

    pub fn bool_property(&self, name: &str) -> Option<bool> {
        self.property(name).and_then(Value::as_bool)
    }

    pub fn node_property(&self, name: &str) -> Option<&NodeId> {
        self.property(name).and_then(Value::as_node)
    }

    /// Ordered children held in a list-valued property; empty when unset.
    pub fn list_property(&self, name: &str) -> &[NodeId] {
        self.property(name).and_then(Value::as_list).unwrap_or(&[])
    }

    /// Sets or removes (`None`) a property, returning the previous value.
    pub fn set_property(&mut self, name: impl Into<SmolStr>, value: Option<Value>) -> Option<Value> {
        let name = name.into();
        match value {
            Some(value) => self.properties.insert(name, value),
            None => self.properties.remove(&name),
        }
    }

    pub fn parent(&self) -> Option<&NodeId> {
        self.parent.as_ref()
    }

    pub fn set_parent(&mut self, parent: Option<NodeId>) {
        self.parent = parent;
    }
}

/// A diagram element (shape or connection) and the business object behind it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Element {
    id: ElementId,
    business_object: NodeId,
}

impl Element {
    pub fn new(id: ElementId, business_object: NodeId) -> Self {
        Self {
            id,
            business_object,
        }
    }

    pub fn id(&self) -> &ElementId {
        &self.id
    }

    pub fn business_object(&self) -> &NodeId {
        &self.business_object
    }
}

#[cfg(test)]
mod tests {
    use super::{Node, Value};
    use crate::model::NodeId;

    #[test]
    fn list_property_defaults_to_empty() {
        let node = Node::new(NodeId::new("n1").expect("id"), "cmmn:ExtensionElements");
        assert!(node.list_property("values").is_empty());
    }

    #[test]
    fn set_property_none_removes_attribute() {
        let mut node = Node::new(NodeId::new("n1").expect("id"), "cmmn:HumanTask")
            .with_property("assignee", "alice");
        let previous = node.set_property("assignee", None);
        assert_eq!(previous, Some(Value::from("alice")));
        assert!(node.property("assignee").is_none());
    }
}
