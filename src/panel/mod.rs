// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tabs and groups of entries, and the commit flow from user input to the command stack.

mod selection;

pub use selection::{PanelState, SiblingLists};

use serde::Serialize;
use smol_str::SmolStr;
use thiserror::Error;
use tracing::debug;

use crate::editors::Editor;
use crate::entry::{
    Entry, EntryContext, EntryError, ErrorMap, SelectOption, Surface, Values,
};
use crate::model::{Element, ElementId, SemanticGraph};
use crate::ops::{ApplyError, ApplyResult, CommandBatch, CommandStack};

#[derive(Debug, Error)]
pub enum PanelError {
    #[error(transparent)]
    Entry(#[from] EntryError),
    #[error(transparent)]
    Apply(#[from] ApplyError),
    #[error("unknown element '{element}'")]
    UnknownElement { element: ElementId },
}

pub type GroupPredicate = Box<dyn Fn(&EntryContext<'_>, &Group) -> bool>;

pub enum GroupLabel {
    Static(String),
    Computed(Box<dyn Fn(&EntryContext<'_>, &Group) -> String>),
}

pub struct Group {
    id: SmolStr,
    label: GroupLabel,
    entries: Vec<Box<dyn Entry>>,
    enabled: Option<GroupPredicate>,
}

impl Group {
    pub fn new(id: impl Into<SmolStr>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: GroupLabel::Static(label.into()),
            entries: Vec::new(),
            enabled: None,
        }
    }

    pub fn computed_label(
        mut self,
        label: impl Fn(&EntryContext<'_>, &Group) -> String + 'static,
    ) -> Self {
        self.label = GroupLabel::Computed(Box::new(label));
        self
    }

    pub fn enabled(mut self, predicate: impl Fn(&EntryContext<'_>, &Group) -> bool + 'static) -> Self {
        self.enabled = Some(Box::new(predicate));
        self
    }

    pub fn entry(mut self, entry: impl Entry + 'static) -> Self {
        self.entries.push(Box::new(entry));
        self
    }

    pub fn editor(mut self, editor: Editor) -> Self {
        self.entries.extend(editor.entries);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn entries(&self) -> &[Box<dyn Entry>] {
        &self.entries
    }

    pub fn label(&self, cx: &EntryContext<'_>) -> String {
        match &self.label {
            GroupLabel::Static(label) => label.clone(),
            GroupLabel::Computed(label) => label(cx, self),
        }
    }

    pub fn is_enabled(&self, cx: &EntryContext<'_>) -> bool {
        self.enabled.as_ref().map_or(true, |enabled| enabled(cx, self))
    }
}

pub struct Tab {
    id: SmolStr,
    label: String,
    groups: Vec<Group>,
}

impl Tab {
    pub fn new(id: impl Into<SmolStr>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            groups: Vec::new(),
        }
    }

    pub fn group(mut self, group: Group) -> Self {
        self.groups.push(group);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedEntry {
    pub id: String,
    pub html: String,
    pub values: Values,
    pub errors: ErrorMap,
    pub disabled: bool,
    pub hidden: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<SelectOption>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedGroup {
    pub id: String,
    pub label: String,
    pub enabled: bool,
    /// Every entry of the group is hidden.
    pub hidden: bool,
    pub entries: Vec<RenderedEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedTab {
    pub id: String,
    pub label: String,
    pub hidden: bool,
    pub groups: Vec<RenderedGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Nothing to submit.
    Unchanged,
    /// Blocking validation errors; nothing was submitted.
    Rejected(ErrorMap),
    /// The batch was applied. `errors` carries warnings, or the errors of an entry that
    /// keeps invalid input out of the model on its own.
    Applied { result: ApplyResult, errors: ErrorMap },
}

pub struct Panel {
    tabs: Vec<Tab>,
    siblings: SiblingLists,
}

impl Panel {
    pub fn new(tabs: Vec<Tab>) -> Self {
        Self {
            tabs,
            siblings: SiblingLists::default(),
        }
    }

    pub fn with_siblings(mut self, siblings: SiblingLists) -> Self {
        self.siblings = siblings;
        self
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn siblings(&self) -> &SiblingLists {
        &self.siblings
    }

    fn entry(&self, id: &str) -> Result<&dyn Entry, PanelError> {
        self.tabs
            .iter()
            .flat_map(|tab| tab.groups.iter())
            .flat_map(|group| group.entries.iter())
            .find(|entry| entry.id() == id)
            .map(|entry| entry.as_ref())
            .ok_or_else(|| {
                PanelError::Entry(EntryError::UnknownEntry {
                    entry: SmolStr::new(id),
                })
            })
    }

    /// Re-derives every entry from the live graph.
    pub fn render(
        &self,
        graph: &dyn SemanticGraph,
        element: &Element,
        state: &mut PanelState,
    ) -> Vec<RenderedTab> {
        let selections = state.selections();
        let cx = EntryContext::new(graph, element).with_selections(&selections);

        self.tabs
            .iter()
            .map(|tab| {
                let groups: Vec<RenderedGroup> = tab
                    .groups
                    .iter()
                    .map(|group| render_group(group, &cx, state))
                    .collect();
                RenderedTab {
                    id: tab.id.to_string(),
                    label: tab.label.clone(),
                    hidden: groups.iter().all(|group| group.hidden),
                    groups,
                }
            })
            .collect()
    }

    /// Validates `values`, runs the entry's `set` and submits the commands as one batch.
    pub fn commit(
        &self,
        stack: &mut dyn CommandStack,
        element: &ElementId,
        state: &mut PanelState,
        entry_id: &str,
        values: &Values,
    ) -> Result<CommitOutcome, PanelError> {
        let entry = self.entry(entry_id)?;
        let selections = state.selections();
        let (errors, commands) = {
            let graph = stack.graph();
            let element_ref = graph.element(element).ok_or_else(|| PanelError::UnknownElement {
                element: element.clone(),
            })?;
            let cx = EntryContext::new(graph, element_ref).with_selections(&selections);
            let entry_state = state.entry_mut(entry_id);

            let errors = entry.validate(&cx, values, entry_state);
            if errors.has_errors() && !entry.retains_invalid() {
                debug!(entry = %entry_id, "commit rejected");
                return Ok(CommitOutcome::Rejected(errors));
            }
            (errors, entry.set(&cx, values, entry_state)?)
        };

        if commands.is_empty() {
            return Ok(CommitOutcome::Unchanged);
        }
        debug!(entry = %entry_id, commands = commands.len(), "committing");
        let result = stack.execute(CommandBatch::new(element.clone(), commands))?;
        Ok(CommitOutcome::Applied { result, errors })
    }

    /// Dispatches a `data-action`, committing when the entry asks for it.
    pub fn action(
        &self,
        stack: &mut dyn CommandStack,
        element: &ElementId,
        state: &mut PanelState,
        entry_id: &str,
        action: &str,
        surface: &mut dyn Surface,
    ) -> Result<CommitOutcome, PanelError> {
        let entry = self.entry(entry_id)?;
        let selections = state.selections();
        let outcome = {
            let graph = stack.graph();
            let element_ref = graph.element(element).ok_or_else(|| PanelError::UnknownElement {
                element: element.clone(),
            })?;
            let cx = EntryContext::new(graph, element_ref).with_selections(&selections);
            entry.action(action, &cx, state.entry_mut(entry_id), surface)
        };

        if outcome.selection_changed {
            self.siblings.on_selection_change(entry_id, state);
        }
        match outcome.commit {
            Some(values) => self.commit(stack, element, state, entry_id, &values),
            None => Ok(CommitOutcome::Unchanged),
        }
    }

    /// Records a user selection in list `list`; returns whether it changed.
    pub fn select(&self, state: &mut PanelState, list: &str, index: usize) -> bool {
        let changed = state.entry_mut(list).list_mut().select(index);
        if changed {
            self.siblings.on_selection_change(list, state);
        }
        changed
    }
}

fn render_group(group: &Group, cx: &EntryContext<'_>, state: &mut PanelState) -> RenderedGroup {
    let entries: Vec<RenderedEntry> = group
        .entries
        .iter()
        .map(|entry| {
            let entry_state = state.entry_mut(entry.id());
            let values = entry.get(cx, entry_state);
            let errors = entry.validate(cx, &values, entry_state);
            RenderedEntry {
                id: entry.id().to_owned(),
                html: entry.html().to_owned(),
                disabled: entry.is_disabled(cx),
                hidden: entry.is_hidden(cx),
                choices: entry.choices(cx),
                values,
                errors,
            }
        })
        .collect();
    RenderedGroup {
        id: group.id.to_string(),
        label: group.label(cx),
        enabled: group.is_enabled(cx),
        hidden: entries.iter().all(|entry| entry.hidden),
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::{CommitOutcome, Group, Panel, PanelState, Tab};
    use crate::entry::test_support::RecordingSurface;
    use crate::entry::{actions, EntryOptions, ErrorMap, TextField, Values};
    use crate::model::fixtures::human_task_plan_item;
    use crate::model::Value;
    use crate::ops::{CommandStack, UndoStack};

    fn general() -> Panel {
        let name = TextField::new(EntryOptions::new("name").label("Name").model_property("name"))
            .expect("name");
        let assignee =
            TextField::new(EntryOptions::new("assignee").model_property("assignee").validator(
                |_, _, values| match values.str("assignee") {
                    Some("root") => ErrorMap::new().error("assignee", "Not allowed."),
                    _ => ErrorMap::new(),
                },
            ))
            .expect("assignee");
        let hidden = TextField::new(
            EntryOptions::new("hidden").model_property("hidden").hide_entry(|_| true),
        )
        .expect("hidden");

        Panel::new(vec![Tab::new("general", "General")
            .group(
                Group::new("details", "Details")
                    .entry(name)
                    .entry(assignee)
                    .computed_label(|cx, group| {
                        format!("{} ({})", group.id(), cx.element().id())
                    }),
            )
            .group(
                Group::new("secret", "Secret")
                    .entry(hidden)
                    .enabled(|cx, _| cx.business_object().is_none()),
            )])
    }

    #[test]
    fn render_reports_groups_and_entries() {
        let (model, element) = human_task_plan_item();
        let mut state = PanelState::new();

        let tabs = general().render(&model, &element, &mut state);

        assert_eq!(tabs.len(), 1);
        assert!(!tabs[0].hidden);
        let details = &tabs[0].groups[0];
        assert_eq!(details.label, "details (PlanItem_1)");
        assert!(details.enabled);
        assert_eq!(details.entries[1].values, Values::new().with_unset("assignee"));
        let secret = &tabs[0].groups[1];
        assert!(secret.hidden);
        assert!(!secret.enabled);
    }

    #[test]
    fn commit_applies_and_blocks() {
        let (model, element) = human_task_plan_item();
        let mut stack = UndoStack::new(model);
        let mut state = PanelState::new();
        let panel = general();

        let alice = Values::new().with("assignee", "alice");
        let applied = panel
            .commit(&mut stack, element.id(), &mut state, "assignee", &alice)
            .expect("commit");
        assert!(matches!(applied, CommitOutcome::Applied { .. }));
        assert_eq!(
            stack.graph().resolve(element.business_object(), "assignee"),
            Some(&Value::from("alice"))
        );

        let root = Values::new().with("assignee", "root");
        let rejected = panel
            .commit(&mut stack, element.id(), &mut state, "assignee", &root)
            .expect("commit");
        assert!(matches!(rejected, CommitOutcome::Rejected(errors) if errors.blocks("assignee")));
        assert_eq!(stack.rev(), 1);
    }

    #[test]
    fn clear_action_unsets_through_the_stack() {
        let (model, element) = human_task_plan_item();
        let mut stack = UndoStack::new(model);
        let mut state = PanelState::new();
        let panel = general();
        let name = Values::new().with("name", "Plan");
        panel
            .commit(&mut stack, element.id(), &mut state, "name", &name)
            .expect("commit");

        let outcome = panel
            .action(
                &mut stack,
                element.id(),
                &mut state,
                "name",
                actions::CLEAR,
                &mut RecordingSurface::default(),
            )
            .expect("action");

        assert!(matches!(outcome, CommitOutcome::Applied { .. }));
        assert!(stack.graph().resolve(element.business_object(), "name").is_none());
        assert!(stack.undo());
        assert_eq!(
            stack.graph().resolve(element.business_object(), "name"),
            Some(&Value::from("Plan"))
        );
    }

    #[test]
    fn unknown_entry_is_an_error() {
        let (model, element) = human_task_plan_item();
        let mut stack = UndoStack::new(model);
        let err = general()
            .commit(&mut stack, element.id(), &mut PanelState::new(), "nope", &Values::new())
            .expect_err("must fail");
        assert_eq!(err.to_string(), "unknown entry 'nope'");
    }
}
