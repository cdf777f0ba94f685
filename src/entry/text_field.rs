// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::descriptor::{Descriptor, EntryOptions, ValueKind};
use super::gate::Negated;
use super::markup::{control_id, Markup, DISABLE_FLAG};
use super::{
    actions, ActionOutcome, Entry, EntryContext, EntryError, EntryState, ErrorMap, Surface, Values,
};
use crate::ops::Commands;

/// Single-line text input with a `clear` action.
pub struct TextField {
    descriptor: Descriptor,
    disabled: Negated,
    html: String,
}

impl TextField {
    pub fn new(options: EntryOptions) -> Result<Self, EntryError> {
        let (descriptor, predicates) = Descriptor::normalize(options, ValueKind::Text)?;
        let html = template(&descriptor);
        Ok(Self {
            descriptor,
            disabled: Negated::new(predicates.enabled),
            html,
        })
    }

    pub fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }
}

fn template(descriptor: &Descriptor) -> String {
    let control = control_id(descriptor.id());
    let mut markup = Markup::new();
    markup
        .label(descriptor.id(), descriptor.label())
        .open("div", &[("class", "cpp-field-wrapper")])
        .void(
            "input",
            &[
                ("id", control.as_str()),
                ("type", "text"),
                ("name", descriptor.control_name()),
                ("data-disable", DISABLE_FLAG),
            ],
        )
        .open(
            "button",
            &[("class", "clear"), ("data-action", actions::CLEAR)],
        )
        .text("X")
        .close("button")
        .close("div")
        .description(descriptor.description());
    markup.finish()
}

impl Entry for TextField {
    fn id(&self) -> &str {
        self.descriptor.id()
    }

    fn html(&self) -> &str {
        &self.html
    }

    fn model_property(&self) -> Option<&str> {
        self.descriptor.model_property()
    }

    fn get(&self, cx: &EntryContext<'_>, _state: &mut EntryState) -> Values {
        self.descriptor.get(cx)
    }

    fn set(
        &self,
        cx: &EntryContext<'_>,
        values: &Values,
        _state: &mut EntryState,
    ) -> Result<Commands, EntryError> {
        Ok(self.descriptor.set(cx, values))
    }

    fn validate(&self, cx: &EntryContext<'_>, values: &Values, _state: &EntryState) -> ErrorMap {
        self.descriptor.validate(cx, values)
    }

    fn is_disabled(&self, cx: &EntryContext<'_>) -> bool {
        self.disabled.holds(cx)
    }

    fn is_hidden(&self, cx: &EntryContext<'_>) -> bool {
        self.descriptor.is_hidden(cx)
    }

    fn action(
        &self,
        name: &str,
        cx: &EntryContext<'_>,
        _state: &mut EntryState,
        _surface: &mut dyn Surface,
    ) -> ActionOutcome {
        if name != actions::CLEAR || self.is_disabled(cx) {
            return ActionOutcome::default();
        }
        ActionOutcome::commit(Values::new().with(self.descriptor.control_name(), ""))
    }
}

#[cfg(test)]
mod tests {
    use super::TextField;
    use crate::entry::test_support::RecordingSurface;
    use crate::entry::{actions, Entry, EntryContext, EntryOptions, EntryState, Values};
    use crate::model::fixtures::{human_task_plan_item, nid};
    use crate::model::Value;
    use crate::ops::Command;

    fn assignee() -> TextField {
        TextField::new(EntryOptions::new("assignee").label("Assignee").model_property("assignee"))
            .expect("text field")
    }

    #[test]
    fn reads_missing_property_as_unset() {
        let (model, element) = human_task_plan_item();
        let cx = EntryContext::new(&model, &element);
        let values = assignee().get(&cx, &mut EntryState::default());
        assert_eq!(values, Values::new().with_unset("assignee"));
    }

    #[test]
    fn writes_through_the_business_object() {
        let (model, element) = human_task_plan_item();
        let cx = EntryContext::new(&model, &element);
        let commands = assignee()
            .set(&cx, &Values::new().with("assignee", "alice"), &mut EntryState::default())
            .expect("set");
        assert_eq!(
            commands.as_slice(),
            &[Command::update_property(nid("n:planItem"), "assignee", Some(Value::from("alice")))]
        );
    }

    #[test]
    fn clear_action_commits_an_empty_value() {
        let (model, element) = human_task_plan_item();
        let cx = EntryContext::new(&model, &element);
        let outcome = assignee().action(
            actions::CLEAR,
            &cx,
            &mut EntryState::default(),
            &mut RecordingSurface::default(),
        );
        assert_eq!(outcome.commit, Some(Values::new().with("assignee", "")));
        assert!(!outcome.selection_changed);
    }

    #[test]
    fn disabled_field_ignores_clear() {
        let (model, element) = human_task_plan_item();
        let cx = EntryContext::new(&model, &element);
        let field = TextField::new(
            EntryOptions::new("assignee").model_property("assignee").enabled(|_| false),
        )
        .expect("text field");

        assert!(field.is_disabled(&cx));
        let outcome = field.action(
            actions::CLEAR,
            &cx,
            &mut EntryState::default(),
            &mut RecordingSurface::default(),
        );
        assert_eq!(outcome.commit, None);
    }

    #[test]
    fn template_names_the_model_property() {
        let html = assignee().html().to_owned();
        assert!(html.contains(r#"name="assignee""#));
        assert!(html.contains(r#"data-disable="isDisabled""#));
        assert!(html.contains(r#"data-action="clear""#));
        assert!(html.starts_with(r#"<label for="cpp-assignee">Assignee</label>"#));
    }
}
