// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smol_str::SmolStr;
use tracing::debug;

use super::state::HeldValue;
use super::{
    ActionOutcome, Entry, EntryContext, EntryError, EntryState, ErrorMap, Surface, Values,
};
use crate::ops::Commands;

/// Keeps an invalid value out of the model while the control keeps showing it.
///
/// On a rejected `set` the submitted value is parked in [`EntryState`] and the entry
/// re-writes the committed value instead, which re-renders the field without touching
/// the model. The next `get` shows the parked value once and drains it.
pub struct ValidationAware<E> {
    inner: E,
    property: SmolStr,
}

impl<E: Entry> ValidationAware<E> {
    pub fn new(inner: E) -> Result<Self, EntryError> {
        let property = inner
            .model_property()
            .map(SmolStr::new)
            .ok_or_else(|| EntryError::MissingModelProperty {
                entry: SmolStr::new(inner.id()),
            })?;
        Ok(Self { inner, property })
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }
}

impl<E: Entry> Entry for ValidationAware<E> {
    fn id(&self) -> &str {
        self.inner.id()
    }

    fn html(&self) -> &str {
        self.inner.html()
    }

    fn model_property(&self) -> Option<&str> {
        Some(&self.property)
    }

    fn get(&self, cx: &EntryContext<'_>, state: &mut EntryState) -> Values {
        let mut values = self.inner.get(cx, state);
        if let Some(held) = state.held.take() {
            values.insert(held.property, held.value);
        }
        values
    }

    fn set(
        &self,
        cx: &EntryContext<'_>,
        values: &Values,
        state: &mut EntryState,
    ) -> Result<Commands, EntryError> {
        let errors = self.validate(cx, values, state);
        if !errors.blocks(&self.property) {
            state.held = None;
            return self.inner.set(cx, values, state);
        }

        debug!(entry = %self.inner.id(), property = %self.property, "holding invalid value");
        let committed = self.inner.get(cx, state);
        let value = if values.contains_key(&self.property) {
            values.get(&self.property).cloned()
        } else {
            state.held.as_ref().and_then(|held| held.value.clone())
        };
        state.held = Some(HeldValue {
            property: self.property.clone(),
            value,
        });
        self.inner.set(cx, &committed, state)
    }

    fn validate(&self, cx: &EntryContext<'_>, values: &Values, state: &EntryState) -> ErrorMap {
        match (values.contains_key(&self.property), state.held.as_ref()) {
            (false, Some(held)) if held.property == self.property => {
                let mut values = values.clone();
                values.insert(held.property.clone(), held.value.clone());
                self.inner.validate(cx, &values, state)
            }
            _ => self.inner.validate(cx, values, state),
        }
    }

    fn is_disabled(&self, cx: &EntryContext<'_>) -> bool {
        self.inner.is_disabled(cx)
    }

    fn is_hidden(&self, cx: &EntryContext<'_>) -> bool {
        self.inner.is_hidden(cx)
    }

    fn action(
        &self,
        name: &str,
        cx: &EntryContext<'_>,
        state: &mut EntryState,
        surface: &mut dyn Surface,
    ) -> ActionOutcome {
        self.inner.action(name, cx, state, surface)
    }

    fn retains_invalid(&self) -> bool {
        true
    }
}
