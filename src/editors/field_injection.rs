// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Fields injected into the selected listener.

use std::rc::Rc;

use smol_str::SmolStr;

use super::listener::hidden_without;
use super::Editor;
use crate::entry::{
    Binding, EntryContext, EntryError, EntryOptions, ErrorMap, ExtensionList,
    ExtensionListOptions, Projection, SelectBox, SelectOption, SelectedItem, Target, TextField,
    Values,
};
use crate::model::{Node, NodeId, Value};
use crate::ops::{Command, Commands, PropertyMap};

pub const FIELD_TYPE: &str = "camunda:Field";
/// List property of a listener holding its fields.
pub const FIELDS: &str = "fields";

const STRING_VALUE: &str = "stringValue";
const EXPRESSION: &str = "expression";
const TYPE_KEY: &str = "fieldType";
const VALUE_KEY: &str = "fieldValue";

fn value_property(field: &Node) -> &'static str {
    if field.property(EXPRESSION).is_some() {
        EXPRESSION
    } else {
        STRING_VALUE
    }
}

fn type_of(property: &str) -> &'static str {
    if property == EXPRESSION {
        "expression"
    } else {
        "string"
    }
}

struct FieldType;

impl Binding for FieldType {
    fn get(&self, _cx: &EntryContext<'_>, target: Option<&Node>) -> Values {
        match target {
            Some(field) => Values::new().with(TYPE_KEY, type_of(value_property(field))),
            None => Values::new().with_unset(TYPE_KEY),
        }
    }

    fn set(&self, _cx: &EntryContext<'_>, target: Option<&Node>, values: &Values) -> Commands {
        let Some(field) = target else {
            return Commands::new();
        };
        let (to, from) = match values.str(TYPE_KEY) {
            Some("expression") => (EXPRESSION, STRING_VALUE),
            _ => (STRING_VALUE, EXPRESSION),
        };
        let current = field.str_property(value_property(field)).unwrap_or_default();

        let mut properties = PropertyMap::new();
        properties.insert(SmolStr::new_static(from), None);
        properties.insert(SmolStr::new_static(to), Some(Value::from(current)));
        let mut commands = Commands::new();
        commands.push(Command::UpdateProperties {
            node: field.id().clone(),
            properties,
        });
        commands
    }
}

struct FieldValue;

impl Binding for FieldValue {
    fn get(&self, _cx: &EntryContext<'_>, target: Option<&Node>) -> Values {
        match target.and_then(|field| field.str_property(value_property(field))) {
            Some(value) => Values::new().with(VALUE_KEY, value),
            None => Values::new().with_unset(VALUE_KEY),
        }
    }

    fn set(&self, _cx: &EntryContext<'_>, target: Option<&Node>, values: &Values) -> Commands {
        let Some(field) = target else {
            return Commands::new();
        };
        let mut commands = Commands::new();
        commands.push(Command::update_property(
            field.id().clone(),
            value_property(field),
            values.non_empty(VALUE_KEY).map(Value::from),
        ));
        commands
    }
}

/// Field list of the listener selected through `listener`, with its detail fields.
///
/// Fields hang directly off the listener, so no container is involved.
pub fn field_injection(listener: SelectedItem) -> Result<Editor, EntryError> {
    let project: Projection = Rc::new(|_: &EntryContext<'_>, target: Option<&Node>| -> Vec<NodeId> {
        target.map(|listener| listener.list_property(FIELDS).to_vec()).unwrap_or_default()
    });
    let list = ExtensionList::new(
        ExtensionListOptions::new(
            "fields",
            project,
            |cx, request| {
                let field = cx.ids().next_node_id("field", cx.graph());
                let mut commands = Commands::new();
                commands.push(Command::create_node(field.clone(), FIELD_TYPE, PropertyMap::new(), None));
                commands.push(Command::add_to_list(request.container.clone(), FIELDS, vec![field]));
                commands
            },
            |_, request| {
                let mut commands = Commands::new();
                commands.push(Command::remove_from_list(
                    request.target.id().clone(),
                    FIELDS,
                    vec![request.node.clone()],
                ));
                commands
            },
        )
        .label("Fields")
        .target(Target::Selected(listener))
        .container(None)
        .display(|field| field.str_property("name").unwrap_or_default().to_owned()),
    );

    let item = list.selected_item();
    let name = TextField::new(
        EntryOptions::new("fieldName")
            .label("Field Name")
            .model_property("name")
            .selected(item.clone())
            .hide_entry(hidden_without(&item))
            .validator(|_, target, values| {
                if target.is_none() || values.non_empty("name").is_some() {
                    return ErrorMap::new();
                }
                ErrorMap::new().error("name", "Must provide a value.")
            }),
    )?;
    let kind = SelectBox::new(
        EntryOptions::new(TYPE_KEY)
            .label("Type")
            .binding(FieldType)
            .selected(item.clone())
            .hide_entry(hidden_without(&item)),
        vec![
            SelectOption::new("String", "string"),
            SelectOption::new("Expression", "expression"),
        ],
        false,
    )?;
    let value = TextField::new(
        EntryOptions::new(VALUE_KEY)
            .label("Value")
            .binding(FieldValue)
            .selected(item.clone())
            .hide_entry(hidden_without(&item)),
    )?;

    Ok(Editor {
        lists: vec![list.handle()],
        entries: vec![Box::new(list), Box::new(name), Box::new(kind), Box::new(value)],
        selected: Some(item),
    })
}
