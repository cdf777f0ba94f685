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
use super::{Entry, EntryContext, EntryError, EntryState, ErrorMap, Values};
use crate::ops::Commands;

/// Boolean control. Writes always store a strict `bool`.
pub struct Checkbox {
    descriptor: Descriptor,
    disabled: Negated,
    html: String,
}

impl Checkbox {
    pub fn new(options: EntryOptions) -> Result<Self, EntryError> {
        let (descriptor, predicates) = Descriptor::normalize(options, ValueKind::Boolean)?;
        let control = control_id(descriptor.id());
        let mut markup = Markup::new();
        markup
            .void(
                "input",
                &[
                    ("id", control.as_str()),
                    ("type", "checkbox"),
                    ("name", descriptor.control_name()),
                    ("data-disable", DISABLE_FLAG),
                ],
            )
            .label(descriptor.id(), descriptor.label())
            .description(descriptor.description());
        Ok(Self {
            html: markup.finish(),
            descriptor,
            disabled: Negated::new(predicates.enabled),
        })
    }
}

impl Entry for Checkbox {
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
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::Checkbox;
    use crate::entry::{Entry, EntryContext, EntryOptions, EntryState, Scalar, Values};
    use crate::model::fixtures::{human_task_plan_item, nid};
    use crate::model::Value;
    use crate::ops::Command;

    fn blocking() -> Checkbox {
        Checkbox::new(EntryOptions::new("isBlocking").label("Is Blocking").model_property("isBlocking"))
            .expect("checkbox")
    }

    #[rstest]
    #[case(Some(Scalar::from("on")), true)]
    #[case(Some(Scalar::from(false)), false)]
    #[case(None, false)]
    fn set_stores_strict_booleans(#[case] submitted: Option<Scalar>, #[case] expected: bool) {
        let (model, element) = human_task_plan_item();
        let cx = EntryContext::new(&model, &element);
        let mut values = Values::new();
        values.insert("isBlocking", submitted);

        let commands = blocking()
            .set(&cx, &values, &mut EntryState::default())
            .expect("set");
        assert_eq!(
            commands.as_slice(),
            &[Command::update_property(
                nid("n:planItem"),
                "isBlocking",
                Some(Value::Bool(expected))
            )]
        );
    }

    #[test]
    fn enabled_predicate_is_inverted() {
        let (model, element) = human_task_plan_item();
        let cx = EntryContext::new(&model, &element);
        let enabled_when_named = Checkbox::new(
            EntryOptions::new("isBlocking")
                .model_property("isBlocking")
                .enabled(|cx| cx.business_object().and_then(|bo| bo.str_property("name")).is_some()),
        )
        .expect("checkbox");

        assert!(enabled_when_named.is_disabled(&cx));
        assert!(!blocking().is_disabled(&cx));
    }

    #[test]
    fn template_puts_the_label_after_the_box() {
        let checkbox = blocking();
        let html = checkbox.html();
        let input = html.find("<input").expect("input");
        let label = html.find("<label").expect("label");
        assert!(input < label);
        assert!(html.contains(r#"type="checkbox""#));
    }
}
