// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// A control value as exchanged with the rendering host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Str(String),
    /// Option labels of a list box, in display order.
    List(Vec<String>),
}

impl Scalar {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Form-submission truthiness: `"on"` is true, `""` and `false` are not.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(value) => *value,
            Self::Str(value) => !value.is_empty(),
            Self::List(items) => !items.is_empty(),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Model-property name to control value. A present key with `None` means "unset".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Values(BTreeMap<SmolStr, Option<Scalar>>);

impl Values {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<SmolStr>, value: impl Into<Scalar>) -> Self {
        self.insert(key, Some(value.into()));
        self
    }

    pub fn with_unset(mut self, key: impl Into<SmolStr>) -> Self {
        self.insert(key, None);
        self
    }

    pub fn insert(&mut self, key: impl Into<SmolStr>, value: Option<Scalar>) -> Option<Option<Scalar>> {
        self.0.insert(key.into(), value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Scalar> {
        self.0.get(key).and_then(Option::as_ref)
    }

    pub fn str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Scalar::as_str)
    }

    /// The value of `key` as a non-empty string; empty and missing both read as `None`.
    pub fn non_empty(&self, key: &str) -> Option<&str> {
        self.str(key).filter(|value| !value.is_empty())
    }

    pub fn truthy(&self, key: &str) -> bool {
        self.get(key).map_or(false, Scalar::is_truthy)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SmolStr, &Option<Scalar>)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<SmolStr>> FromIterator<(K, Option<Scalar>)> for Values {
    fn from_iter<I: IntoIterator<Item = (K, Option<Scalar>)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
