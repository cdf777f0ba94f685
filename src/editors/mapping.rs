// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Variable mappings (`camunda:In` / `camunda:Out`) of a case or process task.

use std::rc::Rc;

use super::business_key::BUSINESS_KEY;
use super::extension::{add_entry, extension_elements, remove_entry};
use super::listener::hidden_without;
use super::Editor;
use crate::config::PanelConfig;
use crate::entry::{
    ContainerSpec, EntryContext, EntryError, EntryOptions, ExtensionList, ExtensionListOptions,
    Projection, SelectedItem, TextField,
};
use crate::model::{Node, NodeId, SemanticGraph};
use crate::ops::PropertyMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingKind {
    In,
    Out,
}

impl MappingKind {
    pub fn type_name(self) -> &'static str {
        match self {
            Self::In => "camunda:In",
            Self::Out => "camunda:Out",
        }
    }

    pub fn list_id(self) -> &'static str {
        match self {
            Self::In => "inputs",
            Self::Out => "outputs",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::In => "In Mapping",
            Self::Out => "Out Mapping",
        }
    }
}

/// Variable mappings of `kind` in `owner`'s container; the business-key `In` is not one.
pub fn filter_mappings<'a>(
    graph: &'a dyn SemanticGraph,
    owner: &NodeId,
    container: &ContainerSpec,
    kind: MappingKind,
) -> Vec<&'a Node> {
    extension_elements(graph, owner, container, Some(kind.type_name()))
        .into_iter()
        .filter(|mapping| mapping.property(BUSINESS_KEY).is_none())
        .collect()
}

fn mapping_list(kind: MappingKind, config: &PanelConfig) -> ExtensionList {
    let container = config.container();
    let project: Projection = {
        let container = container.clone();
        Rc::new(move |cx: &EntryContext<'_>, target: Option<&Node>| -> Vec<NodeId> {
            let Some(target) = target else {
                return Vec::new();
            };
            filter_mappings(cx.graph(), target.id(), &container, kind)
                .into_iter()
                .map(|mapping| mapping.id().clone())
                .collect()
        })
    };
    let remove_from = container.clone();
    ExtensionList::new(
        ExtensionListOptions::new(
            kind.list_id(),
            project,
            move |cx, request| {
                let mapping = cx.ids().next_node_id("mapping", cx.graph());
                add_entry(request.container, mapping, kind.type_name(), PropertyMap::new())
            },
            move |cx, request| remove_entry(cx.graph(), request.target, &remove_from, request.node),
        )
        .label(kind.label())
        .container(Some(container))
        .display(|mapping| mapping.str_property("source").unwrap_or_default().to_owned())
        .resizable(config.list_min_size),
    )
}

/// In and out mapping lists plus the source/target fields of whichever mapping is selected.
///
/// `lists` holds both list handles; they belong in one sibling set.
pub fn variable_mappings(config: &PanelConfig) -> Result<Editor, EntryError> {
    let inputs = mapping_list(MappingKind::In, config);
    let outputs = mapping_list(MappingKind::Out, config);
    let item = SelectedItem::any_of([inputs.selected_item(), outputs.selected_item()]);

    let source = TextField::new(
        EntryOptions::new("mappingSource")
            .label("Source")
            .model_property("source")
            .selected(item.clone())
            .hide_entry(hidden_without(&item)),
    )?;
    let target = TextField::new(
        EntryOptions::new("mappingTarget")
            .label("Target")
            .model_property("target")
            .selected(item.clone())
            .hide_entry(hidden_without(&item)),
    )?;

    Ok(Editor {
        lists: vec![inputs.handle(), outputs.handle()],
        entries: vec![
            Box::new(inputs),
            Box::new(outputs),
            Box::new(source),
            Box::new(target),
        ],
        selected: Some(item),
    })
}

#[cfg(test)]
mod tests {
    use super::{filter_mappings, variable_mappings, MappingKind};
    use crate::config::PanelConfig;
    use crate::editors::Editor;
    use crate::entry::{
        ContainerSpec, Entry, EntryContext, EntryState, Scalar, Selection, Selections, Values,
    };
    use crate::model::fixtures::{nid, process_task_with_mappings};
    use crate::model::{Node, Value};
    use crate::ops::Command;

    fn entry<'e>(editor: &'e Editor, id: &str) -> &'e dyn Entry {
        editor
            .entries
            .iter()
            .find(|entry| entry.id() == id)
            .map(|entry| entry.as_ref())
            .expect("entry")
    }

    #[test]
    fn business_key_is_not_a_variable_mapping() {
        let (model, _) = process_task_with_mappings();
        let spec = ContainerSpec::default();

        let ins = filter_mappings(&model, &nid("n:ptask"), &spec, MappingKind::In);
        let outs = filter_mappings(&model, &nid("n:ptask"), &spec, MappingKind::Out);

        assert_eq!(ins.iter().map(|n| n.id()).collect::<Vec<_>>(), vec![&nid("n:in")]);
        assert_eq!(
            outs.into_iter().map(Node::id).cloned().collect::<Vec<_>>(),
            vec![nid("n:out")]
        );
    }

    #[test]
    fn lists_show_sources() {
        let (model, element) = process_task_with_mappings();
        let cx = EntryContext::new(&model, &element);
        let editor = variable_mappings(&PanelConfig::default()).expect("editor");

        let inputs = entry(&editor, "inputs").get(&cx, &mut EntryState::default());
        assert_eq!(inputs.get("inputs"), Some(&Scalar::List(vec!["orderId".to_owned()])));
        assert_eq!(editor.lists.len(), 2);
    }

    #[test]
    fn fields_edit_whichever_list_is_selected() {
        let (model, element) = process_task_with_mappings();
        let editor = variable_mappings(&PanelConfig::default()).expect("editor");
        let target = entry(&editor, "mappingTarget");

        let mut selections = Selections::new();
        selections.insert("outputs".into(), Selection { value: "result".to_owned(), index: 0 });
        let cx = EntryContext::new(&model, &element).with_selections(&selections);
        assert_eq!(
            target.get(&cx, &mut EntryState::default()),
            Values::new().with("target", "approved")
        );

        let mut selections = Selections::new();
        selections.insert("inputs".into(), Selection { value: "orderId".to_owned(), index: 0 });
        let cx = EntryContext::new(&model, &element).with_selections(&selections);
        let commands = target
            .set(&cx, &Values::new().with("target", "orderRef"), &mut EntryState::default())
            .expect("set");
        assert_eq!(
            commands.as_slice(),
            &[Command::update_property(nid("n:in"), "target", Some(Value::from("orderRef")))]
        );
    }

    #[test]
    fn fields_hide_without_any_selection() {
        let (model, element) = process_task_with_mappings();
        let editor = variable_mappings(&PanelConfig::default()).expect("editor");
        let cx = EntryContext::new(&model, &element);
        assert!(entry(&editor, "mappingSource").is_hidden(&cx));
    }
}
