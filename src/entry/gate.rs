// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::context::EntryContext;
use super::descriptor::Predicate;

/// An "enabled"/"show" predicate read as its negation ("disabled"/"hidden").
///
/// Fields are configured with positive predicates while the rendered flags are negative;
/// the inversion happens here and nowhere else. An absent predicate never triggers.
#[derive(Default)]
pub struct Negated(Option<Predicate>);

impl Negated {
    pub fn new(predicate: Option<Predicate>) -> Self {
        Self(predicate)
    }

    pub fn holds(&self, cx: &EntryContext<'_>) -> bool {
        self.0.as_ref().map_or(false, |predicate| !predicate(cx))
    }
}
