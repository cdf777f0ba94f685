// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! List box over a collection projected out of the graph, with staged create/remove.

use smol_str::SmolStr;
use tracing::debug;

use super::context::Selection;
use super::descriptor::{Projection, SelectedItem, Target};
use super::markup::{control_id, Markup};
use super::state::PendingAction;
use super::{
    actions, ActionOutcome, Entry, EntryContext, EntryError, EntryState, Scalar, Surface, Values,
};
use crate::model::{Node, NodeId, ID_PROPERTY};
use crate::ops::{Command, Commands, Containment, PropertyMap};

pub const DEFAULT_MIN_SIZE: usize = 5;

/// The intermediate node new items are added to, created on first use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerSpec {
    pub type_name: SmolStr,
    /// Property of the list target holding the container.
    pub property: SmolStr,
}

impl Default for ContainerSpec {
    fn default() -> Self {
        Self {
            type_name: SmolStr::new_static("cmmn:ExtensionElements"),
            property: SmolStr::new_static("extensionElements"),
        }
    }
}

/// The container of `owner` described by `spec`, pushing its creation onto `commands`
/// when it does not exist yet.
pub fn ensure_container(
    cx: &EntryContext<'_>,
    owner: &Node,
    spec: &ContainerSpec,
    commands: &mut Commands,
) -> NodeId {
    if let Some(existing) = owner.node_property(&spec.property) {
        return existing.clone();
    }
    let container = cx.ids().next_node_id("container", cx.graph());
    commands.push(Command::create_node(
        container.clone(),
        spec.type_name.clone(),
        PropertyMap::new(),
        Some(Containment::new(owner.id().clone(), spec.property.clone())),
    ));
    container
}

/// Input of the create callback.
#[derive(Debug, Clone, Copy)]
pub struct CreateRequest<'a> {
    /// The node the list belongs to.
    pub target: &'a Node,
    /// Where the new item goes; may be created by a command earlier in the same batch.
    pub container: &'a NodeId,
    /// The generated value shown for the placeholder row, empty without id generation.
    pub value: &'a str,
}

/// Input of the remove callback.
#[derive(Debug, Clone, Copy)]
pub struct RemoveRequest<'a> {
    pub target: &'a Node,
    /// The item at the removed row.
    pub node: &'a NodeId,
    pub value: &'a str,
    pub index: usize,
}

pub type CreateFn = Box<dyn Fn(&EntryContext<'_>, CreateRequest<'_>) -> Commands>;
pub type RemoveFn = Box<dyn Fn(&EntryContext<'_>, RemoveRequest<'_>) -> Commands>;
pub type DisplayFn = Box<dyn Fn(&Node) -> String>;

pub struct ExtensionListOptions {
    pub id: SmolStr,
    pub label: Option<String>,
    pub target: Target,
    pub items: Projection,
    pub display: DisplayFn,
    pub container: Option<ContainerSpec>,
    pub create: CreateFn,
    pub remove: RemoveFn,
    pub id_prefix: Option<SmolStr>,
    pub resizable: bool,
    pub min_size: usize,
}

impl ExtensionListOptions {
    pub fn new(
        id: impl Into<SmolStr>,
        items: Projection,
        create: impl Fn(&EntryContext<'_>, CreateRequest<'_>) -> Commands + 'static,
        remove: impl Fn(&EntryContext<'_>, RemoveRequest<'_>) -> Commands + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            label: None,
            target: Target::BusinessObject,
            items,
            display: Box::new(default_display),
            container: Some(ContainerSpec::default()),
            create: Box::new(create),
            remove: Box::new(remove),
            id_prefix: None,
            resizable: false,
            min_size: DEFAULT_MIN_SIZE,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    pub fn display(mut self, display: impl Fn(&Node) -> String + 'static) -> Self {
        self.display = Box::new(display);
        self
    }

    /// `None` adds items to the list target itself.
    pub fn container(mut self, container: Option<ContainerSpec>) -> Self {
        self.container = container;
        self
    }

    /// Generates `{prefix}_...` values for new rows.
    pub fn id_prefix(mut self, prefix: impl Into<SmolStr>) -> Self {
        self.id_prefix = Some(prefix.into());
        self
    }

    /// Grows the visible rows with the item count, never below `min_size`.
    pub fn resizable(mut self, min_size: usize) -> Self {
        self.resizable = true;
        self.min_size = min_size;
        self
    }
}

fn default_display(node: &Node) -> String {
    node.str_property(ID_PROPERTY)
        .or_else(|| node.str_property("name"))
        .unwrap_or_default()
        .to_owned()
}

/// Identifies a list box for selection coordination.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListHandle(SmolStr);

impl ListHandle {
    pub fn new(id: impl Into<SmolStr>) -> Self {
        Self(id.into())
    }

    pub fn id(&self) -> &str {
        &self.0
    }
}

pub struct ExtensionList {
    options: ExtensionListOptions,
    html: String,
}

impl ExtensionList {
    pub fn new(options: ExtensionListOptions) -> Self {
        let control = control_id(&options.id);
        let mut markup = Markup::new();
        markup
            .label(&options.id, options.label.as_deref())
            .open("div", &[("class", "cpp-list-container")])
            .open(
                "select",
                &[
                    ("id", control.as_str()),
                    ("name", options.id.as_str()),
                    ("data-list-entry-container", ""),
                ],
            )
            .close("select")
            .open(
                "button",
                &[("class", "add"), ("data-action", actions::CREATE_ELEMENT)],
            )
            .text("+")
            .close("button")
            .open(
                "button",
                &[("class", "clear"), ("data-action", actions::REMOVE_ELEMENT)],
            )
            .text("-")
            .close("button")
            .close("div");
        Self {
            html: markup.finish(),
            options,
        }
    }

    pub fn handle(&self) -> ListHandle {
        ListHandle::new(self.options.id.clone())
    }

    /// Accessor for the node at this list's current selection.
    pub fn selected_item(&self) -> SelectedItem {
        SelectedItem::new(
            self.options.id.clone(),
            self.options.target.clone(),
            self.options.items.clone(),
        )
    }

    pub fn get_selected(&self, state: &EntryState) -> Option<Selection> {
        state.list.selected()
    }

    pub fn deselect(&self, state: &mut EntryState) -> bool {
        state.list.deselect()
    }

    /// Appends and selects a placeholder row and stages its creation.
    pub fn create_element(&self, cx: &EntryContext<'_>, state: &mut EntryState) -> ActionOutcome {
        let value = match &self.options.id_prefix {
            Some(prefix) => cx.ids().next_unclaimed(prefix, cx.graph()),
            None => String::new(),
        };
        let index = state.list.push(value.clone());
        let selection_changed = state.list.select(index);
        debug!(list = %self.options.id, %value, "staged create");
        state.pending = Some(PendingAction::Create { value });
        ActionOutcome {
            commit: Some(Values::new()),
            selection_changed,
        }
    }

    /// Drops the selected row and stages its removal; a no-op without a selection.
    pub fn remove_element(&self, state: &mut EntryState) -> ActionOutcome {
        let Some(Selection { value, index }) = state.list.selected() else {
            return ActionOutcome::default();
        };
        state.list.remove(index);
        debug!(list = %self.options.id, %value, index, "staged remove");
        state.pending = Some(PendingAction::Remove { value, index });
        ActionOutcome {
            commit: Some(Values::new()),
            selection_changed: true,
        }
    }

    fn create_commands(
        &self,
        cx: &EntryContext<'_>,
        target: &Node,
        value: &str,
    ) -> Commands {
        let mut commands = Commands::new();
        let container = match &self.options.container {
            None => target.id().clone(),
            Some(spec) => ensure_container(cx, target, spec, &mut commands),
        };
        let request = CreateRequest {
            target,
            container: &container,
            value,
        };
        commands.extend((self.options.create)(cx, request));
        commands
    }

    fn remove_commands(
        &self,
        cx: &EntryContext<'_>,
        target: &Node,
        value: &str,
        index: usize,
    ) -> Commands {
        let items = (self.options.items)(cx, Some(target));
        let Some(node) = items.get(index) else {
            debug!(list = %self.options.id, index, "removed row has no item");
            return Commands::new();
        };
        let request = RemoveRequest {
            target,
            node,
            value,
            index,
        };
        (self.options.remove)(cx, request)
    }
}

impl Entry for ExtensionList {
    fn id(&self) -> &str {
        &self.options.id
    }

    fn html(&self) -> &str {
        &self.html
    }

    /// Projects the items into row labels and syncs them into the list view.
    fn get(&self, cx: &EntryContext<'_>, state: &mut EntryState) -> Values {
        let target = self.options.target.resolve(cx);
        let labels: Vec<String> = (self.options.items)(cx, target)
            .iter()
            .map(|id| {
                cx.graph()
                    .node(id)
                    .map(|node| (self.options.display)(node))
                    .unwrap_or_default()
            })
            .collect();

        let size = if self.options.resizable {
            labels.len().max(self.options.min_size)
        } else {
            self.options.min_size
        };
        state.list.set_size(size);
        state.list.set_options(labels.clone());

        Values::new().with(self.options.id.clone(), Scalar::List(labels))
    }

    /// Drains the staged action into commands.
    fn set(
        &self,
        cx: &EntryContext<'_>,
        _values: &Values,
        state: &mut EntryState,
    ) -> Result<Commands, EntryError> {
        let pending = state.pending.take().ok_or_else(|| EntryError::NothingStaged {
            entry: self.options.id.clone(),
        })?;
        let Some(target) = self.options.target.resolve(cx) else {
            debug!(list = %self.options.id, "list target missing, dropping staged action");
            return Ok(Commands::new());
        };
        let commands = match pending {
            PendingAction::Create { value } => self.create_commands(cx, target, &value),
            PendingAction::Remove { value, index } => {
                self.remove_commands(cx, target, &value, index)
            }
        };
        Ok(commands)
    }

    fn action(
        &self,
        name: &str,
        cx: &EntryContext<'_>,
        state: &mut EntryState,
        _surface: &mut dyn Surface,
    ) -> ActionOutcome {
        match name {
            actions::CREATE_ELEMENT => self.create_element(cx, state),
            actions::REMOVE_ELEMENT => self.remove_element(state),
            _ => ActionOutcome::default(),
        }
    }
}
