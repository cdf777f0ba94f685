// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Semantic graph types.
//!
//! The graph is owned by the host editor; entries read it through [`SemanticGraph`] and
//! never mutate it directly.

#[cfg(test)]
pub(crate) mod fixtures;
pub mod graph;
pub mod ids;
pub mod node;

pub use graph::{Model, SemanticGraph, ID_PROPERTY};
pub use ids::{ElementId, Id, KeyError, NodeId};
pub use node::{Element, Node, Value};
