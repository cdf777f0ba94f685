// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Identifier helpers: document-id validation and escaping for rendered markup.

use std::sync::OnceLock;

use regex::Regex;

use crate::model::{NodeId, SemanticGraph};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    #[error("Id must not contain spaces.")]
    ContainsSpace,
    #[error("Id must not contain prefix.")]
    ContainsPrefix,
    #[error("Id must be a valid QName.")]
    InvalidQName,
    #[error("Element must have an unique id.")]
    NotUnique,
}

fn id_regex() -> &'static Regex {
    static ID: OnceLock<Regex> = OnceLock::new();
    ID.get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_.\-]*$").expect("valid id regex"))
}

fn qname_regex() -> &'static Regex {
    static QNAME: OnceLock<Regex> = OnceLock::new();
    QNAME.get_or_init(|| {
        Regex::new(r"^([A-Za-z_][A-Za-z0-9_.\-]*:)?[A-Za-z_][A-Za-z0-9_.\-]*$")
            .expect("valid qname regex")
    })
}

pub fn contains_space(value: &str) -> bool {
    value.chars().any(char::is_whitespace)
}

/// Checks the syntax of a document id: no whitespace, no namespace prefix, QName body.
pub fn validate_id(value: &str) -> Result<(), IdError> {
    if contains_space(value) {
        return Err(IdError::ContainsSpace);
    }
    if id_regex().is_match(value) {
        return Ok(());
    }
    if qname_regex().is_match(value) {
        return Err(IdError::ContainsPrefix);
    }
    Err(IdError::InvalidQName)
}

/// Checks that `value` may become the document id of `node`.
///
/// An id already held by `node` itself is accepted (subject to syntax).
pub fn is_id_valid(graph: &dyn SemanticGraph, node: &NodeId, value: &str) -> Result<(), IdError> {
    if value.is_empty() {
        return Err(IdError::NotUnique);
    }
    if let Some(owner) = graph.id_owner(value) {
        if owner != node {
            return Err(IdError::NotUnique);
        }
    }
    validate_id(value)
}
