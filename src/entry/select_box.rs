// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::descriptor::{Descriptor, EntryOptions, ValueKind};
use super::gate::Negated;
use super::markup::{control_id, Markup, DISABLE_FLAG};
use super::{Entry, EntryContext, EntryError, EntryState, ErrorMap, Values};
use crate::ops::Commands;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    pub fn blank() -> Self {
        Self::new("", "")
    }
}

/// Where a select box gets its options.
pub enum Choices {
    Static(Vec<SelectOption>),
    /// Recomputed per element; `None` means the provider had nothing usable.
    Computed(Box<dyn Fn(&EntryContext<'_>) -> Option<Vec<SelectOption>>>),
}

impl Choices {
    pub fn computed(
        provider: impl Fn(&EntryContext<'_>) -> Option<Vec<SelectOption>> + 'static,
    ) -> Self {
        Self::Computed(Box::new(provider))
    }
}

impl From<Vec<SelectOption>> for Choices {
    fn from(options: Vec<SelectOption>) -> Self {
        Self::Static(options)
    }
}

/// Drop-down over a fixed or computed option list.
pub struct SelectBox {
    descriptor: Descriptor,
    disabled: Negated,
    choices: Choices,
    empty_parameter: bool,
    html: String,
}

impl SelectBox {
    /// `empty_parameter` prepends one blank option so the property can be unset.
    pub fn new(
        options: EntryOptions,
        choices: impl Into<Choices>,
        empty_parameter: bool,
    ) -> Result<Self, EntryError> {
        let (descriptor, predicates) = Descriptor::normalize(options, ValueKind::Text)?;
        let choices = choices.into();
        let html = template(&descriptor, &choices, empty_parameter);
        Ok(Self {
            descriptor,
            disabled: Negated::new(predicates.enabled),
            choices,
            empty_parameter,
            html,
        })
    }

    pub fn options(&self, cx: &EntryContext<'_>) -> Vec<SelectOption> {
        let listed = match &self.choices {
            Choices::Static(options) => Some(options.clone()),
            Choices::Computed(provider) => provider(cx),
        };
        with_blank(listed, self.empty_parameter)
    }
}

fn with_blank(listed: Option<Vec<SelectOption>>, empty_parameter: bool) -> Vec<SelectOption> {
    let mut options = listed.unwrap_or_else(|| vec![SelectOption::blank()]);
    if empty_parameter {
        options.insert(0, SelectOption::blank());
    }
    options
}

fn template(descriptor: &Descriptor, choices: &Choices, empty_parameter: bool) -> String {
    let control = control_id(descriptor.id());
    let mut markup = Markup::new();
    markup.label(descriptor.id(), descriptor.label());
    match choices {
        Choices::Static(options) => {
            markup.open(
                "select",
                &[
                    ("id", control.as_str()),
                    ("name", descriptor.control_name()),
                    ("data-disable", DISABLE_FLAG),
                ],
            );
            for option in with_blank(Some(options.clone()), empty_parameter) {
                markup
                    .open("option", &[("value", option.value.as_str())])
                    .text(&option.label)
                    .close("option");
            }
        }
        Choices::Computed(_) => {
            markup.open(
                "select",
                &[
                    ("id", control.as_str()),
                    ("name", descriptor.control_name()),
                    ("data-disable", DISABLE_FLAG),
                    ("data-options", "choices"),
                ],
            );
        }
    }
    markup.close("select").description(descriptor.description());
    markup.finish()
}

impl Entry for SelectBox {
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

    fn choices(&self, cx: &EntryContext<'_>) -> Option<Vec<SelectOption>> {
        Some(self.options(cx))
    }
}
