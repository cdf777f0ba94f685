// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Cow;

fn entity(ch: char) -> Option<&'static str> {
    match ch {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escapes `& < > " '` for use in markup text and attribute values.
///
/// Input without any of those characters (including the empty string) is returned as-is.
pub fn escape_html(value: &str) -> Cow<'_, str> {
    let Some(first) = value.find(|ch| entity(ch).is_some()) else {
        return Cow::Borrowed(value);
    };

    let mut out = String::with_capacity(value.len() + 8);
    out.push_str(&value[..first]);
    for ch in value[first..].chars() {
        match entity(ch) {
            Some(escaped) => out.push_str(escaped),
            None => out.push(ch),
        }
    }
    Cow::Owned(out)
}
