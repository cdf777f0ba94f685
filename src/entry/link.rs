// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smol_str::SmolStr;
use tracing::debug;

use super::descriptor::Predicate;
use super::gate::Negated;
use super::markup::{Markup, HIDE_FLAG};
use super::{
    actions, ActionOutcome, Entry, EntryContext, EntryError, EntryState, Surface, Values,
};
use crate::ops::Commands;

/// Resolves the selector of the element a link should click.
pub type Lookup = Box<dyn Fn(&EntryContext<'_>) -> Option<String>>;

pub struct LinkOptions {
    pub id: SmolStr,
    pub label: String,
    pub lookup: Lookup,
    pub show_link: Option<Predicate>,
}

impl LinkOptions {
    pub fn new(
        id: impl Into<SmolStr>,
        label: impl Into<String>,
        lookup: impl Fn(&EntryContext<'_>) -> Option<String> + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            lookup: Box::new(lookup),
            show_link: None,
        }
    }

    pub fn show_link(mut self, predicate: impl Fn(&EntryContext<'_>) -> bool + 'static) -> Self {
        self.show_link = Some(Box::new(predicate));
        self
    }
}

/// A clickable action bound to no model property.
///
/// Clicking forwards a primary click to another part of the page and never commits.
pub struct Link {
    id: SmolStr,
    lookup: Lookup,
    hide_link: Negated,
    html: String,
}

impl Link {
    pub fn new(options: LinkOptions) -> Self {
        let mut markup = Markup::new();
        markup
            .open(
                "a",
                &[
                    ("class", "cpp-entry-link"),
                    ("data-action", actions::CLICK),
                    ("data-show", HIDE_FLAG),
                ],
            )
            .text(&options.label)
            .close("a");
        Self {
            id: options.id,
            lookup: options.lookup,
            hide_link: Negated::new(options.show_link),
            html: markup.finish(),
        }
    }
}

impl Entry for Link {
    fn id(&self) -> &str {
        &self.id
    }

    fn html(&self) -> &str {
        &self.html
    }

    fn get(&self, _cx: &EntryContext<'_>, _state: &mut EntryState) -> Values {
        Values::new()
    }

    fn set(
        &self,
        _cx: &EntryContext<'_>,
        _values: &Values,
        _state: &mut EntryState,
    ) -> Result<Commands, EntryError> {
        Ok(Commands::new())
    }

    fn is_hidden(&self, cx: &EntryContext<'_>) -> bool {
        self.hide_link.holds(cx)
    }

    fn action(
        &self,
        name: &str,
        cx: &EntryContext<'_>,
        _state: &mut EntryState,
        surface: &mut dyn Surface,
    ) -> ActionOutcome {
        if name == actions::CLICK {
            match (self.lookup)(cx) {
                Some(selector) => {
                    if !surface.click(&selector) {
                        debug!(entry = %self.id, %selector, "link target not found");
                    }
                }
                None => debug!(entry = %self.id, "link has no target"),
            }
        }
        ActionOutcome::default()
    }
}

#[cfg(test)]
mod tests {
    use super::{Link, LinkOptions};
    use crate::entry::test_support::RecordingSurface;
    use crate::entry::{actions, ActionOutcome, Entry, EntryContext, EntryState};
    use crate::model::fixtures::human_task_plan_item;

    fn to_definition() -> Link {
        Link::new(
            LinkOptions::new("definitionLink", "Open definition", |cx| {
                let bo = cx.business_object()?;
                let target = bo.node_property("definitionRef")?;
                Some(format!("[data-node=\"{}\"]", target.as_str()))
            })
            .show_link(|cx| cx.business_object().map_or(false, |bo| bo.is("cmmn:PlanItem"))),
        )
    }

    #[test]
    fn click_is_forwarded_and_never_commits() {
        let (model, element) = human_task_plan_item();
        let cx = EntryContext::new(&model, &element);
        let mut surface = RecordingSurface::default();

        let outcome =
            to_definition().action(actions::CLICK, &cx, &mut EntryState::default(), &mut surface);

        assert_eq!(outcome, ActionOutcome::default());
        assert_eq!(surface.clicks, vec![r#"[data-node="n:task"]"#.to_owned()]);
    }

    #[test]
    fn show_link_is_inverted_into_hidden() {
        let (model, element) = human_task_plan_item();
        let cx = EntryContext::new(&model, &element);
        assert!(!to_definition().is_hidden(&cx));

        let never = Link::new(LinkOptions::new("never", "Never", |_| None).show_link(|_| false));
        assert!(never.is_hidden(&cx));
        let mut surface = RecordingSurface::default();
        never.action(actions::CLICK, &cx, &mut EntryState::default(), &mut surface);
        assert!(surface.clicks.is_empty());
    }
}
