// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Casepanel: entry fields and data binding for CMMN properties panels.
//!
//! Entries read a [`model::SemanticGraph`], emit [`ops::Command`]s, and leave every
//! mutation to a [`ops::CommandStack`] the host owns.

pub mod config;
pub mod editors;
pub mod entry;
pub mod model;
pub mod ops;
pub mod panel;
pub mod props;
pub mod util;

pub use config::{ConfigError, PanelConfig};
pub use entry::{Entry, EntryContext, EntryState, ErrorMap, Values};
pub use panel::{CommitOutcome, Panel, PanelError, PanelState};
pub use props::default_panel;
