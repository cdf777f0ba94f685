// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::descriptor::{Descriptor, EntryOptions, ValueKind};
use super::gate::Negated;
use super::markup::{control_id, Markup, HIDE_FLAG};
use super::{Entry, EntryContext, EntryError, EntryState, ErrorMap, Values};
use crate::ops::Commands;

/// Multi-line text area. A `show` predicate gates visibility instead of enablement.
pub struct TextBox {
    descriptor: Descriptor,
    hidden: Negated,
    html: String,
}

impl TextBox {
    pub fn new(options: EntryOptions) -> Result<Self, EntryError> {
        let (descriptor, predicates) = Descriptor::normalize(options, ValueKind::Text)?;
        let control = control_id(descriptor.id());
        let mut markup = Markup::new();
        markup
            .open("div", &[("class", "cpp-textbox"), ("data-show", HIDE_FLAG)])
            .label(descriptor.id(), descriptor.label())
            .open(
                "textarea",
                &[("id", control.as_str()), ("name", descriptor.control_name())],
            )
            .close("textarea")
            .description(descriptor.description())
            .close("div");
        Ok(Self {
            html: markup.finish(),
            descriptor,
            hidden: Negated::new(predicates.show),
        })
    }
}

impl Entry for TextBox {
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

    fn is_hidden(&self, cx: &EntryContext<'_>) -> bool {
        self.descriptor.is_hidden(cx) || self.hidden.holds(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::TextBox;
    use crate::entry::{Entry, EntryContext, EntryOptions, EntryState, Values};
    use crate::model::fixtures::{human_task_plan_item, nid};
    use crate::ops::Command;

    #[test]
    fn show_predicate_gates_visibility_not_enablement() {
        let (model, element) = human_task_plan_item();
        let cx = EntryContext::new(&model, &element);
        let documentation = TextBox::new(
            EntryOptions::new("documentation")
                .model_property("documentation")
                .show(|cx| cx.business_object().map_or(false, |bo| bo.is("cmmn:HumanTask"))),
        )
        .expect("text box");

        assert!(documentation.is_hidden(&cx));
        assert!(!documentation.is_disabled(&cx));
        assert!(documentation.html().contains(r#"data-show="isHidden""#));
    }

    #[test]
    fn clearing_unsets_the_property() {
        let (model, element) = human_task_plan_item();
        let cx = EntryContext::new(&model, &element);
        let documentation =
            TextBox::new(EntryOptions::new("documentation").model_property("documentation"))
                .expect("text box");

        let commands = documentation
            .set(&cx, &Values::new().with("documentation", ""), &mut EntryState::default())
            .expect("set");
        assert_eq!(
            commands.as_slice(),
            &[Command::update_property(nid("n:planItem"), "documentation", None)]
        );
    }
}
