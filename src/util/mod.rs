// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pure helpers shared by entries: id syntax/uniqueness, id generation, escaping.

mod escape;
mod id_gen;
mod ids;

pub use escape::escape_html;
pub use id_gen::{ids, next_id, IdGenerator};
pub use ids::{contains_space, is_id_valid, validate_id, IdError};
