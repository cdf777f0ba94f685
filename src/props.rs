// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The built-in entry catalog and the default panel layout.

use crate::config::PanelConfig;
use crate::editors::{
    business_key, field_injection, listeners, rule_condition, variable_mappings, RuleKind,
};
use crate::entry::{
    Checkbox, Choices, EntryContext, EntryError, EntryOptions, ErrorMap, Label, SelectBox,
    SelectOption, TextBox, TextField, ValidationAware,
};
use crate::model::{Node, ID_PROPERTY};
use crate::panel::{Group, Panel, SiblingLists, Tab};
use crate::util::is_id_valid;

const DEFINITION: &str = "definitionRef";

fn definition_is(cx: &EntryContext<'_>, type_name: &str) -> bool {
    cx.graph()
        .related(cx.element().business_object(), DEFINITION)
        .map_or(false, |definition| definition.is(type_name))
}

/// The element's document id. Invalid ids stay visible but never reach the model.
pub fn id_entry() -> Result<ValidationAware<TextField>, EntryError> {
    let field = TextField::new(
        EntryOptions::new("id")
            .label("Id")
            .model_property(ID_PROPERTY)
            .validator(|cx, target, values| {
                let Some(node) = target else {
                    return ErrorMap::new();
                };
                let value = values.str(ID_PROPERTY).unwrap_or_default();
                match is_id_valid(cx.graph(), node.id(), value) {
                    Ok(()) => ErrorMap::new(),
                    Err(err) => ErrorMap::new().error(ID_PROPERTY, err.to_string()),
                }
            }),
    )?;
    ValidationAware::new(field)
}

pub fn name_entry() -> Result<TextField, EntryError> {
    TextField::new(EntryOptions::new("name").label("Name").model_property("name"))
}

/// Assignee of the human task a plan item refers to.
pub fn assignee_entry() -> Result<TextField, EntryError> {
    TextField::new(
        EntryOptions::new("assignee")
            .label("Assignee")
            .model_property("assignee")
            .reference(DEFINITION)
            .hide_entry(|cx| !definition_is(cx, "cmmn:HumanTask")),
    )
}

pub fn blocking_entry() -> Result<Checkbox, EntryError> {
    Checkbox::new(
        EntryOptions::new("isBlocking")
            .label("Blocking")
            .model_property("isBlocking")
            .reference(DEFINITION)
            .enabled(|cx| !definition_is(cx, "cmmn:Milestone")),
    )
}

pub fn documentation_entry() -> Result<TextBox, EntryError> {
    TextBox::new(
        EntryOptions::new("documentation")
            .label("Documentation")
            .model_property("documentation")
            .show(|cx| cx.business_object().is_some()),
    )
}

/// How a case task resolves the case it calls.
pub fn case_binding_entry() -> Result<SelectBox, EntryError> {
    SelectBox::new(
        EntryOptions::new("caseBinding")
            .label("Binding")
            .model_property("caseBinding")
            .reference(DEFINITION)
            .enabled(|cx| definition_is(cx, "cmmn:CaseTask")),
        Choices::Static(vec![
            SelectOption::new("latest", "latest"),
            SelectOption::new("deployment", "deployment"),
            SelectOption::new("version", "version"),
        ]),
        true,
    )
}

pub fn definition_type_label() -> Label {
    Label::new("definitionType", |cx| {
        cx.graph()
            .related(cx.element().business_object(), DEFINITION)
            .map(Node::type_name)
            .unwrap_or_default()
            .to_owned()
    })
    .show_label(|cx| definition_is(cx, "cmmn:HumanTask") || definition_is(cx, "cmmn:CaseTask"))
}

/// General, listener and variable tabs with every built-in entry.
pub fn default_panel(config: &PanelConfig) -> Result<Panel, EntryError> {
    let listener_editor = listeners(config)?;
    let fields = listener_editor
        .selected
        .clone()
        .map(field_injection)
        .transpose()?;
    let mappings = variable_mappings(config)?;
    let siblings = SiblingLists::new().wire(mappings.lists.clone());

    let general = Tab::new("general", "General")
        .group(
            Group::new("general", "General")
                .entry(id_entry()?)
                .entry(name_entry()?)
                .entry(definition_type_label()),
        )
        .group(
            Group::new("details", "Details")
                .entry(assignee_entry()?)
                .entry(blocking_entry()?)
                .entry(case_binding_entry()?)
                .entry(documentation_entry()?),
        )
        .group(
            Group::new("rules", "Rules")
                .entry(rule_condition(RuleKind::Required, "Required Rule")?)
                .entry(rule_condition(RuleKind::Repetition, "Repetition Rule")?)
                .entry(rule_condition(RuleKind::ManualActivation, "Manual Activation Rule")?)
                .enabled(|cx, _| cx.business_object().map_or(false, |bo| bo.is("cmmn:PlanItem"))),
        );

    let mut listener_group = Group::new("listeners", "Listeners").editor(listener_editor);
    if let Some(fields) = fields {
        listener_group = listener_group.editor(fields);
    }
    let listeners_tab = Tab::new("listeners", "Listeners").group(listener_group);

    let variables = Tab::new("variables", "Variables").group(
        Group::new("variables", "Variables")
            .entry(business_key(config)?)
            .editor(mappings),
    );

    Ok(Panel::new(vec![general, listeners_tab, variables]).with_siblings(siblings))
}

#[cfg(test)]
mod tests {
    use super::{assignee_entry, case_binding_entry, default_panel, id_entry};
    use crate::config::PanelConfig;
    use crate::entry::{Entry, EntryContext, EntryState, SelectOption, Values};
    use crate::model::fixtures::{human_task_plan_item, process_task_with_mappings};

    #[test]
    fn id_rejects_duplicates_and_syntax_errors() {
        let (model, element) = human_task_plan_item();
        let cx = EntryContext::new(&model, &element);
        let id = id_entry().expect("id entry");
        let state = EntryState::default();

        let duplicate = id.validate(&cx, &Values::new().with("id", "Case_1"), &state);
        assert_eq!(
            duplicate.get("id").map(|e| e.message()),
            Some("Element must have an unique id.")
        );
        let prefixed = id.validate(&cx, &Values::new().with("id", "cmmn:Item"), &state);
        assert_eq!(prefixed.get("id").map(|e| e.message()), Some("Id must not contain prefix."));
        assert!(id.validate(&cx, &Values::new().with("id", "PlanItem_1"), &state).is_empty());
    }

    #[test]
    fn assignee_reads_through_the_definition() {
        let (model, element) = human_task_plan_item();
        let cx = EntryContext::new(&model, &element);
        let assignee = assignee_entry().expect("assignee");
        assert!(!assignee.is_hidden(&cx));
        assert_eq!(
            assignee.get(&cx, &mut EntryState::default()),
            Values::new().with_unset("assignee")
        );
    }

    #[test]
    fn case_binding_offers_a_blank_first() {
        let (model, element) = human_task_plan_item();
        let cx = EntryContext::new(&model, &element);
        let binding = case_binding_entry().expect("case binding");
        let choices = binding.choices(&cx).expect("choices");
        assert_eq!(choices.len(), 4);
        assert_eq!(choices[0], SelectOption::blank());
        assert!(binding.is_disabled(&cx));
    }

    #[test]
    fn default_panel_wires_mapping_siblings() {
        let panel = default_panel(&PanelConfig::default()).expect("panel");
        let siblings: Vec<_> = panel.siblings().siblings_of("inputs").collect();
        assert_eq!(siblings.len(), 1);
        assert_eq!(siblings[0].id(), "outputs");
        assert_eq!(panel.tabs().len(), 3);
    }

    #[test]
    fn default_panel_renders_a_process_task() {
        let (model, element) = process_task_with_mappings();
        let panel = default_panel(&PanelConfig::default()).expect("panel");
        let mut state = crate::panel::PanelState::new();

        let tabs = panel.render(&model, &element, &mut state);
        let variables = tabs.iter().find(|tab| tab.id == "variables").expect("variables tab");
        let business_key = variables.groups[0]
            .entries
            .iter()
            .find(|entry| entry.id == "businessKey")
            .expect("business key");
        assert_eq!(business_key.values, Values::new().with("businessKey", true));
        assert!(!business_key.hidden);
    }
}
