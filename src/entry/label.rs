// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smol_str::SmolStr;

use super::descriptor::Predicate;
use super::gate::Negated;
use super::markup::{Markup, HIDE_FLAG};
use super::{Entry, EntryContext, EntryError, EntryState, Values};
use crate::ops::Commands;

/// The key a label's text is reported under.
pub const LABEL_KEY: &str = "label";

/// Read-only computed text.
pub struct Label {
    id: SmolStr,
    text: Box<dyn Fn(&EntryContext<'_>) -> String>,
    hidden: Negated,
    html: String,
}

impl Label {
    pub fn new(
        id: impl Into<SmolStr>,
        text: impl Fn(&EntryContext<'_>) -> String + 'static,
    ) -> Self {
        let mut markup = Markup::new();
        markup
            .open(
                "label",
                &[("data-value", LABEL_KEY), ("data-show", HIDE_FLAG)],
            )
            .close("label");
        Self {
            id: id.into(),
            text: Box::new(text),
            hidden: Negated::default(),
            html: markup.finish(),
        }
    }

    pub fn show_label(mut self, predicate: impl Fn(&EntryContext<'_>) -> bool + 'static) -> Self {
        let predicate: Predicate = Box::new(predicate);
        self.hidden = Negated::new(Some(predicate));
        self
    }
}

impl Entry for Label {
    fn id(&self) -> &str {
        &self.id
    }

    fn html(&self) -> &str {
        &self.html
    }

    fn get(&self, cx: &EntryContext<'_>, _state: &mut EntryState) -> Values {
        Values::new().with(LABEL_KEY, (self.text)(cx))
    }

    /// Labels are read-only.
    fn set(
        &self,
        _cx: &EntryContext<'_>,
        _values: &Values,
        _state: &mut EntryState,
    ) -> Result<Commands, EntryError> {
        Ok(Commands::new())
    }

    fn is_hidden(&self, cx: &EntryContext<'_>) -> bool {
        self.hidden.holds(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::Label;
    use crate::entry::{Entry, EntryContext, EntryState, Values};
    use crate::model::fixtures::human_task_plan_item;

    #[test]
    fn text_is_recomputed_per_element() {
        let (model, element) = human_task_plan_item();
        let cx = EntryContext::new(&model, &element);
        let label = Label::new("definitionType", |cx| {
            cx.graph()
                .related(cx.element().business_object(), "definitionRef")
                .map(|definition| definition.type_name().to_owned())
                .unwrap_or_default()
        })
        .show_label(|cx| cx.business_object().is_some());

        assert_eq!(
            label.get(&cx, &mut EntryState::default()),
            Values::new().with("label", "cmmn:HumanTask")
        );
        assert!(!label.is_hidden(&cx));
        assert!(label.set(&cx, &Values::new(), &mut EntryState::default()).expect("set").is_empty());
    }
}
