// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Per-command mutation helpers used by `apply_commands`.
/// Keeps `ops::mod` focused on the public command types and orchestration.
fn apply_command(
    model: &mut Model,
    command: &Command,
    delta: &mut DeltaBuilder,
) -> Result<(), ApplyError> {
    match command {
        Command::CreateNode {
            node,
            type_name,
            properties,
            containment,
        } => {
            if model.contains_node(node) {
                return Err(ApplyError::AlreadyExists { node: node.clone() });
            }
            if let Some(containment) = containment {
                require_node(model, &containment.parent)?;
            }

            let mut created = Node::new(node.clone(), type_name.clone());
            for (name, value) in properties {
                if let Some(value) = value {
                    created.set_property(name.clone(), Some(value.clone()));
                }
            }
            if let Some(containment) = containment {
                created.set_parent(Some(containment.parent.clone()));
            }
            model.insert_node(created);
            delta.record_added(node);

            if let Some(containment) = containment {
                link(model, &containment.parent, &containment.property, node);
                delta.record_updated(&containment.parent);
            }
            Ok(())
        }
        Command::UpdateProperties { node, properties } => {
            require_node(model, node)?;
            for (name, value) in properties {
                model.set_property(node, name, value.clone());
            }
            delta.record_updated(node);
            Ok(())
        }
        Command::UpdateSemanticParent {
            node,
            parent,
            containment,
        } => {
            let old_parent = require_node(model, node)?.parent().cloned();
            if let Some(parent) = parent {
                require_node(model, parent)?;
            }

            if let Some(old_parent) = &old_parent {
                let linked = model
                    .node(old_parent)
                    .and_then(|p| p.node_property(containment))
                    == Some(node);
                if linked {
                    model.set_property(old_parent, containment, None);
                    delta.record_updated(old_parent);
                }
            }

            match parent {
                Some(parent) => {
                    link(model, parent, containment, node);
                    if let Some(moved) = model.node_mut(node) {
                        moved.set_parent(Some(parent.clone()));
                    }
                    delta.record_updated(parent);
                    delta.record_reattached(node);
                }
                None => {
                    if let Some(detached) = model.node_mut(node) {
                        detached.set_parent(None);
                    }
                    delta.record_removed(node);
                }
            }
            Ok(())
        }
        Command::AddElementsToList {
            node,
            property,
            elements,
            index,
        } => {
            let mut list = list_property(model, node, property)?;
            for element in elements {
                require_node(model, element)?;
            }

            let at = index.unwrap_or(list.len()).min(list.len());
            list.splice(at..at, elements.iter().cloned());
            model.set_property(node, property, Some(Value::List(list)));
            for element in elements {
                if let Some(child) = model.node_mut(element) {
                    child.set_parent(Some(node.clone()));
                }
                delta.record_reattached(element);
            }
            delta.record_updated(node);
            Ok(())
        }
        Command::RemoveElementsFromList {
            node,
            property,
            elements,
        } => {
            let mut list = list_property(model, node, property)?;
            for element in elements {
                let Some(position) = list.iter().position(|id| id == element) else {
                    return Err(ApplyError::NotInList {
                        node: node.clone(),
                        property: property.clone(),
                        element: element.clone(),
                    });
                };
                list.remove(position);
            }

            let value = (!list.is_empty()).then_some(Value::List(list));
            model.set_property(node, property, value);
            for element in elements {
                if let Some(child) = model.node_mut(element) {
                    child.set_parent(None);
                }
                delta.record_removed(element);
            }
            delta.record_updated(node);
            Ok(())
        }
    }
}

fn require_node<'a>(model: &'a Model, node: &NodeId) -> Result<&'a Node, ApplyError> {
    model
        .node(node)
        .ok_or_else(|| ApplyError::NodeNotFound { node: node.clone() })
}

fn list_property(model: &Model, node: &NodeId, property: &str) -> Result<Vec<NodeId>, ApplyError> {
    match require_node(model, node)?.property(property) {
        None => Ok(Vec::new()),
        Some(Value::List(list)) => Ok(list.clone()),
        Some(_) => Err(ApplyError::NotAList {
            node: node.clone(),
            property: property.into(),
        }),
    }
}

fn link(model: &mut Model, parent: &NodeId, property: &str, child: &NodeId) {
    model.set_property(parent, property, Some(Value::Node(child.clone())));
}
