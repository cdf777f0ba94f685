// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Case execution listeners: a list plus event, implementation type and value fields.

use std::rc::Rc;

use smol_str::SmolStr;

use super::extension::{add_entry, extension_elements, remove_entry};
use super::Editor;
use crate::config::PanelConfig;
use crate::entry::{
    Binding, EntryContext, EntryError, EntryOptions, ErrorMap, ExtensionList,
    ExtensionListOptions, Projection, SelectBox, SelectOption, SelectedItem, TextField, Values,
};
use crate::model::{Node, NodeId, Value};
use crate::ops::{Command, Commands, PropertyMap};

pub const LISTENER_TYPE: &str = "camunda:CaseExecutionListener";

pub const LISTENER_EVENTS: &[&str] = &[
    "create",
    "enable",
    "disable",
    "reenable",
    "start",
    "manualStart",
    "complete",
    "terminate",
    "exit",
    "parentTerminate",
    "occur",
    "suspend",
    "resume",
    "parentSuspend",
    "parentResume",
    "close",
    "reactivate",
];

/// Implementation properties; a listener carries exactly one of them.
const IMPLEMENTATIONS: [(&str, &str); 3] = [
    ("Java Class", "class"),
    ("Expression", "expression"),
    ("Delegate Expression", "delegateExpression"),
];

const TYPE_KEY: &str = "listenerType";
const VALUE_KEY: &str = "listenerValue";

fn implementation(listener: &Node) -> Option<&'static str> {
    IMPLEMENTATIONS
        .iter()
        .map(|(_, property)| *property)
        .find(|property| listener.property(property).is_some())
}

fn listener_label(listener: &Node) -> String {
    let event = listener.str_property("event").unwrap_or_default();
    match implementation(listener).and_then(|property| listener.str_property(property)) {
        Some(value) if !value.is_empty() => format!("{event} : {value}"),
        _ => event.to_owned(),
    }
}

/// Reports and switches the implementation type, carrying the value over.
struct ListenerType;

impl Binding for ListenerType {
    fn get(&self, _cx: &EntryContext<'_>, target: Option<&Node>) -> Values {
        match target.and_then(implementation) {
            Some(property) => Values::new().with(TYPE_KEY, property),
            None => Values::new().with_unset(TYPE_KEY),
        }
    }

    fn set(&self, _cx: &EntryContext<'_>, target: Option<&Node>, values: &Values) -> Commands {
        let Some(listener) = target else {
            return Commands::new();
        };
        let selected = values.non_empty(TYPE_KEY).unwrap_or(IMPLEMENTATIONS[0].1);
        let current = implementation(listener)
            .and_then(|property| listener.str_property(property))
            .unwrap_or_default();

        let properties: PropertyMap = IMPLEMENTATIONS
            .iter()
            .map(|(_, property)| {
                let value = (*property == selected).then(|| Value::from(current));
                (SmolStr::new(property), value)
            })
            .collect();
        let mut commands = Commands::new();
        commands.push(Command::UpdateProperties {
            node: listener.id().clone(),
            properties,
        });
        commands
    }
}

/// The value of whichever implementation property is present.
///
/// Writes keep an empty string: the attribute's presence is what encodes the type.
struct ListenerValue;

impl Binding for ListenerValue {
    fn get(&self, _cx: &EntryContext<'_>, target: Option<&Node>) -> Values {
        let value = target.and_then(|listener| {
            implementation(listener).and_then(|property| listener.str_property(property))
        });
        match value {
            Some(value) => Values::new().with(VALUE_KEY, value),
            None => Values::new().with_unset(VALUE_KEY),
        }
    }

    fn set(&self, _cx: &EntryContext<'_>, target: Option<&Node>, values: &Values) -> Commands {
        let Some(listener) = target else {
            return Commands::new();
        };
        let property = implementation(listener).unwrap_or(IMPLEMENTATIONS[0].1);
        let value = values.str(VALUE_KEY).unwrap_or_default();
        let mut commands = Commands::new();
        commands.push(Command::update_property(
            listener.id().clone(),
            property,
            Some(Value::from(value)),
        ));
        commands
    }

    fn validate(&self, _cx: &EntryContext<'_>, target: Option<&Node>, values: &Values) -> ErrorMap {
        if target.is_none() || values.non_empty(VALUE_KEY).is_some() {
            return ErrorMap::new();
        }
        ErrorMap::new().error(VALUE_KEY, "Must provide a value.")
    }
}

pub(crate) fn hidden_without(item: &SelectedItem) -> impl Fn(&EntryContext<'_>) -> bool + 'static {
    let item = item.clone();
    move |cx| item.node(cx).is_none()
}

/// Listener list of the selected element with its detail fields.
pub fn listeners(config: &PanelConfig) -> Result<Editor, EntryError> {
    let container = config.container();
    let project: Projection = {
        let container = container.clone();
        Rc::new(move |cx: &EntryContext<'_>, target: Option<&Node>| -> Vec<NodeId> {
            let Some(target) = target else {
                return Vec::new();
            };
            extension_elements(cx.graph(), target.id(), &container, Some(LISTENER_TYPE))
                .into_iter()
                .map(|listener| listener.id().clone())
                .collect()
        })
    };
    let remove_from = container.clone();
    let list = ExtensionList::new(
        ExtensionListOptions::new(
            "listeners",
            project,
            |cx, request| {
                let listener = cx.ids().next_node_id("listener", cx.graph());
                let mut properties = PropertyMap::new();
                properties.insert("event".into(), Some(Value::from(LISTENER_EVENTS[0])));
                properties.insert(IMPLEMENTATIONS[0].1.into(), Some(Value::from("")));
                add_entry(request.container, listener, LISTENER_TYPE, properties)
            },
            move |cx, request| remove_entry(cx.graph(), request.target, &remove_from, request.node),
        )
        .label("Listener")
        .container(Some(container))
        .display(listener_label)
        .resizable(config.list_min_size),
    );

    let item = list.selected_item();
    let events = LISTENER_EVENTS
        .iter()
        .map(|event| SelectOption::new(*event, *event))
        .collect::<Vec<_>>();
    let event = SelectBox::new(
        EntryOptions::new("listenerEvent")
            .label("Event")
            .model_property("event")
            .selected(item.clone())
            .hide_entry(hidden_without(&item)),
        events,
        false,
    )?;
    let kinds = IMPLEMENTATIONS
        .iter()
        .map(|(label, property)| SelectOption::new(*label, *property))
        .collect::<Vec<_>>();
    let kind = SelectBox::new(
        EntryOptions::new(TYPE_KEY)
            .label("Listener Type")
            .binding(ListenerType)
            .selected(item.clone())
            .hide_entry(hidden_without(&item)),
        kinds,
        false,
    )?;
    let value = TextField::new(
        EntryOptions::new(VALUE_KEY)
            .label("Value")
            .binding(ListenerValue)
            .selected(item.clone())
            .hide_entry(hidden_without(&item)),
    )?;

    Ok(Editor {
        lists: vec![list.handle()],
        entries: vec![Box::new(list), Box::new(event), Box::new(kind), Box::new(value)],
        selected: Some(item),
    })
}
