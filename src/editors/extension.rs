// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Items kept in a business object's extension container.

use smol_str::SmolStr;

use crate::entry::ContainerSpec;
use crate::model::{Node, NodeId, SemanticGraph};
use crate::ops::{Command, Commands, PropertyMap};

/// List property of a container holding its items.
pub const VALUES: &str = "values";

/// Items of `owner`'s container, optionally restricted to `type_name`.
pub fn extension_elements<'a>(
    graph: &'a dyn SemanticGraph,
    owner: &NodeId,
    container: &ContainerSpec,
    type_name: Option<&str>,
) -> Vec<&'a Node> {
    let Some(container) = graph.related(owner, &container.property) else {
        return Vec::new();
    };
    graph
        .related_list(container.id(), VALUES)
        .into_iter()
        .filter(|item| type_name.map_or(true, |type_name| item.is(type_name)))
        .collect()
}

/// Creates `node` and appends it to `container`.
pub fn add_entry(
    container: &NodeId,
    node: NodeId,
    type_name: impl Into<SmolStr>,
    properties: PropertyMap,
) -> Commands {
    let mut commands = Commands::new();
    commands.push(Command::create_node(node.clone(), type_name, properties, None));
    commands.push(Command::add_to_list(container.clone(), VALUES, vec![node]));
    commands
}

/// Removes `item` from `owner`'s container, detaching the container when it ends up empty.
pub fn remove_entry(
    graph: &dyn SemanticGraph,
    owner: &Node,
    container: &ContainerSpec,
    item: &NodeId,
) -> Commands {
    let mut commands = Commands::new();
    let Some(container_node) = graph.related(owner.id(), &container.property) else {
        return commands;
    };
    let values = container_node.list_property(VALUES);
    if !values.contains(item) {
        return commands;
    }
    commands.push(Command::remove_from_list(
        container_node.id().clone(),
        VALUES,
        vec![item.clone()],
    ));
    if values.len() == 1 && container_node.properties().len() == 1 {
        commands.push(Command::detach(
            container_node.id().clone(),
            container.property.clone(),
        ));
    }
    commands
}
