// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Entry fields: the two-way binding between one form control and the semantic graph.
//!
//! An [`Entry`] never mutates the graph. `get` reads the live graph through an
//! [`EntryContext`], `set` returns [`Commands`] for the host to submit, and every piece of
//! transient UI state lives in an [`EntryState`] the host owns and passes in.

mod checkbox;
mod context;
mod descriptor;
mod errors;
mod extension_list;
mod gate;
mod label;
mod link;
mod markup;
mod select_box;
mod state;
mod text_box;
mod text_field;
mod validation_aware;
mod values;

pub use checkbox::Checkbox;
pub use context::{EntryContext, Selection, Selections};
pub use descriptor::{
    Binding, Descriptor, EntryOptions, Predicate, Projection, PropertyBinding,
    RendererPredicates, SelectedItem, Target, Validator, ValueKind,
};
pub use errors::{EntryError, ErrorMap, FieldError};
pub use extension_list::{
    ensure_container, ContainerSpec, CreateRequest, ExtensionList, ExtensionListOptions,
    ListHandle, RemoveRequest, DEFAULT_MIN_SIZE,
};
pub use gate::Negated;
pub use label::Label;
pub use link::{Link, LinkOptions};
pub use select_box::{Choices, SelectBox, SelectOption};
pub use state::{EntryState, HeldValue, ListView, PendingAction};
pub use text_box::TextBox;
pub use text_field::TextField;
pub use validation_aware::ValidationAware;
pub use values::{Scalar, Values};

use crate::ops::Commands;

/// Action names dispatched through `data-action`.
pub mod actions {
    pub const CLEAR: &str = "clear";
    pub const CLICK: &str = "click";
    pub const CREATE_ELEMENT: &str = "createElement";
    pub const REMOVE_ELEMENT: &str = "removeElement";
}

/// What the host should do after an entry handled an action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionOutcome {
    /// Values to run through the regular validate/set/submit flow.
    pub commit: Option<Values>,
    /// The entry's list selection changed; sibling lists should be deselected.
    pub selection_changed: bool,
}

impl ActionOutcome {
    pub fn commit(values: Values) -> Self {
        Self {
            commit: Some(values),
            selection_changed: false,
        }
    }
}

/// The rendered page, as far as entries need to poke at it.
pub trait Surface {
    /// Synthesizes a primary click on the element matched by `selector`.
    ///
    /// Returns `false` when nothing matched.
    fn click(&mut self, selector: &str) -> bool;
}

/// One form field.
pub trait Entry {
    fn id(&self) -> &str;

    /// Markup template carrying `data-show`, `data-disable` and `data-action` hooks.
    fn html(&self) -> &str;

    /// The model property this entry binds, when it binds exactly one.
    fn model_property(&self) -> Option<&str> {
        None
    }

    /// Current values, re-derived from the live graph.
    fn get(&self, cx: &EntryContext<'_>, state: &mut EntryState) -> Values;

    /// Commands turning `values` into model state.
    fn set(
        &self,
        cx: &EntryContext<'_>,
        values: &Values,
        state: &mut EntryState,
    ) -> Result<Commands, EntryError>;

    fn validate(&self, _cx: &EntryContext<'_>, _values: &Values, _state: &EntryState) -> ErrorMap {
        ErrorMap::new()
    }

    fn is_disabled(&self, _cx: &EntryContext<'_>) -> bool {
        false
    }

    fn is_hidden(&self, _cx: &EntryContext<'_>) -> bool {
        false
    }

    /// Options of a select control, `None` for other controls.
    fn choices(&self, _cx: &EntryContext<'_>) -> Option<Vec<SelectOption>> {
        None
    }

    fn action(
        &self,
        _name: &str,
        _cx: &EntryContext<'_>,
        _state: &mut EntryState,
        _surface: &mut dyn Surface,
    ) -> ActionOutcome {
        ActionOutcome::default()
    }

    /// Whether `set` handles blocking validation errors itself instead of being skipped.
    fn retains_invalid(&self) -> bool {
        false
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Surface;

    #[derive(Debug, Default)]
    pub(crate) struct RecordingSurface {
        pub(crate) clicks: Vec<String>,
        pub(crate) present: Vec<String>,
    }

    impl Surface for RecordingSurface {
        fn click(&mut self, selector: &str) -> bool {
            self.clicks.push(selector.to_owned());
            self.present.iter().any(|candidate| candidate == selector)
        }
    }
}
