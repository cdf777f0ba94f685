// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Normalizes raw entry options into a [`Descriptor`] with uniform get/set/validate.

use std::rc::Rc;

use smol_str::SmolStr;

use super::context::EntryContext;
use super::errors::{EntryError, ErrorMap};
use super::values::{Scalar, Values};
use crate::model::{Node, NodeId, Value};
use crate::ops::{Command, Commands};

/// A predicate over the current element.
pub type Predicate = Box<dyn Fn(&EntryContext<'_>) -> bool>;

/// A validation function; `target` is the resolved node the entry reads and writes.
pub type Validator = Box<dyn Fn(&EntryContext<'_>, Option<&Node>, &Values) -> ErrorMap>;

/// Projects the items of a list box out of the graph, in display order.
pub type Projection = Rc<dyn Fn(&EntryContext<'_>, Option<&Node>) -> Vec<NodeId>>;

/// Accessors binding an entry to the semantic graph.
///
/// `target` is the node the entry's descriptor resolved (the element's business object,
/// a referenced node, or the current item of a list); it is `None` when that node does
/// not exist, and implementations must cope with that.
pub trait Binding {
    fn get(&self, cx: &EntryContext<'_>, target: Option<&Node>) -> Values;

    fn set(&self, cx: &EntryContext<'_>, target: Option<&Node>, values: &Values) -> Commands;

    fn validate(&self, _cx: &EntryContext<'_>, _target: Option<&Node>, _values: &Values) -> ErrorMap {
        ErrorMap::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Boolean,
}

/// The default binding: one model property read and written as-is.
///
/// Text writes normalize `""` to unset so clearing a field removes the attribute.
/// Boolean writes store a strict `bool` coerced from the submitted value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyBinding {
    property: SmolStr,
    kind: ValueKind,
}

impl PropertyBinding {
    pub fn new(property: impl Into<SmolStr>, kind: ValueKind) -> Self {
        Self {
            property: property.into(),
            kind,
        }
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    fn write_value(&self, values: &Values) -> Option<Value> {
        match self.kind {
            ValueKind::Boolean => Some(Value::Bool(values.truthy(&self.property))),
            ValueKind::Text => match values.get(&self.property) {
                Some(Scalar::Bool(flag)) => Some(Value::Bool(*flag)),
                Some(Scalar::Str(text)) if !text.is_empty() => Some(Value::Str(text.clone())),
                _ => None,
            },
        }
    }
}

impl Binding for PropertyBinding {
    fn get(&self, _cx: &EntryContext<'_>, target: Option<&Node>) -> Values {
        let value = target.and_then(|node| node.property(&self.property));
        let scalar = match value {
            Some(Value::Str(text)) => Some(Scalar::Str(text.clone())),
            Some(Value::Bool(flag)) => Some(Scalar::Bool(*flag)),
            _ => None,
        };
        let mut values = Values::new();
        values.insert(self.property.clone(), scalar);
        values
    }

    fn set(&self, _cx: &EntryContext<'_>, target: Option<&Node>, values: &Values) -> Commands {
        let Some(target) = target else {
            return Commands::new();
        };
        let mut commands = Commands::new();
        commands.push(Command::update_property(
            target.id().clone(),
            self.property.clone(),
            self.write_value(values),
        ));
        commands
    }
}

/// Where an entry reads and writes.
#[derive(Clone)]
pub enum Target {
    /// The selected element's own node.
    BusinessObject,
    /// A node related to the business object through the named relation.
    Reference(SmolStr),
    /// The current item of one (or, for sibling lists, the first selected of several) list box.
    Selected(SelectedItem),
}

impl Target {
    pub fn resolve<'a>(&self, cx: &EntryContext<'a>) -> Option<&'a Node> {
        match self {
            Self::BusinessObject => cx.business_object(),
            Self::Reference(relation) => {
                let bo = cx.business_object()?;
                cx.graph().related(bo.id(), relation)
            }
            Self::Selected(item) => item.node(cx),
        }
    }
}

#[derive(Clone)]
struct ListSource {
    list: SmolStr,
    target: Box<Target>,
    project: Projection,
}

/// Accessor for "the item currently selected in list box X".
///
/// It re-runs the list's projection against the live graph and picks the selected index,
/// so it never holds on to graph state between renders.
#[derive(Clone)]
pub struct SelectedItem {
    sources: Vec<ListSource>,
}

impl SelectedItem {
    pub fn new(list: impl Into<SmolStr>, target: Target, project: Projection) -> Self {
        Self {
            sources: vec![ListSource {
                list: list.into(),
                target: Box::new(target),
                project,
            }],
        }
    }

    /// The first selection among `items`; used for mutually exclusive sibling lists.
    pub fn any_of(items: impl IntoIterator<Item = SelectedItem>) -> Self {
        Self {
            sources: items.into_iter().flat_map(|item| item.sources).collect(),
        }
    }

    pub fn node<'a>(&self, cx: &EntryContext<'a>) -> Option<&'a Node> {
        self.sources.iter().find_map(|source| {
            let selection = cx.selection(&source.list)?;
            let owner = source.target.resolve(cx);
            let items = (source.project)(cx, owner);
            let id = items.get(selection.index)?;
            cx.graph().node(id)
        })
    }

    /// Whether one of the lists this item follows has the id `list`.
    pub fn follows(&self, list: &str) -> bool {
        self.sources.iter().any(|source| source.list == list)
    }
}

/// Raw options of an entry before normalization.
pub struct EntryOptions {
    pub id: SmolStr,
    pub label: Option<String>,
    pub description: Option<String>,
    pub model_property: Option<SmolStr>,
    pub reference: Option<SmolStr>,
    pub selected: Option<SelectedItem>,
    pub binding: Option<Box<dyn Binding>>,
    pub validator: Option<Validator>,
    pub hide_entry: Option<Predicate>,
    pub enabled: Option<Predicate>,
    pub show: Option<Predicate>,
}

impl EntryOptions {
    pub fn new(id: impl Into<SmolStr>) -> Self {
        Self {
            id: id.into(),
            label: None,
            description: None,
            model_property: None,
            reference: None,
            selected: None,
            binding: None,
            validator: None,
            hide_entry: None,
            enabled: None,
            show: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn model_property(mut self, property: impl Into<SmolStr>) -> Self {
        self.model_property = Some(property.into());
        self
    }

    /// Read and write through the business object's `relation` instead of itself.
    pub fn reference(mut self, relation: impl Into<SmolStr>) -> Self {
        self.reference = Some(relation.into());
        self
    }

    /// Read and write the item currently selected in a list box.
    pub fn selected(mut self, item: SelectedItem) -> Self {
        self.selected = Some(item);
        self
    }

    pub fn binding(mut self, binding: impl Binding + 'static) -> Self {
        self.binding = Some(Box::new(binding));
        self
    }

    pub fn validator(
        mut self,
        validator: impl Fn(&EntryContext<'_>, Option<&Node>, &Values) -> ErrorMap + 'static,
    ) -> Self {
        self.validator = Some(Box::new(validator));
        self
    }

    pub fn hide_entry(mut self, predicate: impl Fn(&EntryContext<'_>) -> bool + 'static) -> Self {
        self.hide_entry = Some(Box::new(predicate));
        self
    }

    /// Enables the control only while `predicate` holds.
    pub fn enabled(mut self, predicate: impl Fn(&EntryContext<'_>) -> bool + 'static) -> Self {
        self.enabled = Some(Box::new(predicate));
        self
    }

    /// Shows the control only while `predicate` holds.
    pub fn show(mut self, predicate: impl Fn(&EntryContext<'_>) -> bool + 'static) -> Self {
        self.show = Some(Box::new(predicate));
        self
    }
}

/// A normalized entry: the target resolution plus one binding and validator.
pub struct Descriptor {
    id: SmolStr,
    label: Option<String>,
    description: Option<String>,
    model_property: Option<SmolStr>,
    target: Target,
    binding: Box<dyn Binding>,
    validator: Option<Validator>,
    hide_entry: Option<Predicate>,
}

impl Descriptor {
    /// Normalizes `options`, falling back to a [`PropertyBinding`] of `kind`.
    ///
    /// Returns the options' renderer-specific predicates (`enabled`, `show`) untouched
    /// alongside the descriptor.
    pub fn normalize(
        options: EntryOptions,
        kind: ValueKind,
    ) -> Result<(Self, RendererPredicates), EntryError> {
        let EntryOptions {
            id,
            label,
            description,
            model_property,
            reference,
            selected,
            binding,
            validator,
            hide_entry,
            enabled,
            show,
        } = options;

        let binding: Box<dyn Binding> = match (binding, &model_property) {
            (Some(binding), _) => binding,
            (None, Some(property)) => Box::new(PropertyBinding::new(property.clone(), kind)),
            (None, None) => return Err(EntryError::MissingModelProperty { entry: id }),
        };
        let target = match (selected, reference) {
            (Some(item), _) => Target::Selected(item),
            (None, Some(relation)) => Target::Reference(relation),
            (None, None) => Target::BusinessObject,
        };

        let descriptor = Self {
            id,
            label,
            description,
            model_property,
            target,
            binding,
            validator,
            hide_entry,
        };
        Ok((descriptor, RendererPredicates { enabled, show }))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn model_property(&self) -> Option<&str> {
        self.model_property.as_deref()
    }

    /// The control `name`: the model property, or the entry id for custom bindings.
    pub fn control_name(&self) -> &str {
        self.model_property.as_deref().unwrap_or(&self.id)
    }

    pub fn target_spec(&self) -> &Target {
        &self.target
    }

    pub fn target<'a>(&self, cx: &EntryContext<'a>) -> Option<&'a Node> {
        self.target.resolve(cx)
    }

    pub fn get(&self, cx: &EntryContext<'_>) -> Values {
        self.binding.get(cx, self.target(cx))
    }

    pub fn set(&self, cx: &EntryContext<'_>, values: &Values) -> Commands {
        self.binding.set(cx, self.target(cx), values)
    }

    pub fn validate(&self, cx: &EntryContext<'_>, values: &Values) -> ErrorMap {
        let target = self.target(cx);
        match &self.validator {
            Some(validator) => validator(cx, target, values),
            None => self.binding.validate(cx, target, values),
        }
    }

    pub fn is_hidden(&self, cx: &EntryContext<'_>) -> bool {
        self.hide_entry.as_ref().map_or(false, |hide| hide(cx))
    }
}

/// Predicates that only some renderers consume.
#[derive(Default)]
pub struct RendererPredicates {
    pub enabled: Option<Predicate>,
    pub show: Option<Predicate>,
}
