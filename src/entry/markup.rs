// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Template building shared by the renderers.
//!
//! Templates are plain strings with a fixed attribute vocabulary the host binds against:
//! `name` is the model property, `data-disable` / `data-show` name the flag methods
//! (`isDisabled`, `isHidden`) and `data-action` names the action to dispatch.

use crate::util::escape_html;

pub(crate) const DISABLE_FLAG: &str = "isDisabled";
pub(crate) const HIDE_FLAG: &str = "isHidden";

pub(crate) fn control_id(entry: &str) -> String {
    format!("cpp-{entry}")
}

#[derive(Debug, Default)]
pub(crate) struct Markup {
    out: String,
}

impl Markup {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn open(&mut self, tag: &str, attrs: &[(&str, &str)]) -> &mut Self {
        self.tag(tag, attrs);
        self.out.push('>');
        self
    }

    pub(crate) fn void(&mut self, tag: &str, attrs: &[(&str, &str)]) -> &mut Self {
        self.tag(tag, attrs);
        self.out.push_str(" />");
        self
    }

    pub(crate) fn close(&mut self, tag: &str) -> &mut Self {
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push('>');
        self
    }

    pub(crate) fn text(&mut self, text: &str) -> &mut Self {
        self.out.push_str(&escape_html(text));
        self
    }

    /// `<label for=..>` pointing at the entry's control; skipped without a label.
    pub(crate) fn label(&mut self, entry: &str, label: Option<&str>) -> &mut Self {
        if let Some(label) = label {
            let target = control_id(entry);
            self.open("label", &[("for", target.as_str())]).text(label).close("label");
        }
        self
    }

    pub(crate) fn description(&mut self, description: Option<&str>) -> &mut Self {
        if let Some(description) = description {
            self.open("div", &[("class", "cpp-description")])
                .text(description)
                .close("div");
        }
        self
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }

    fn tag(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.out.push('<');
        self.out.push_str(tag);
        for (name, value) in attrs {
            self.out.push(' ');
            self.out.push_str(name);
            self.out.push_str("=\"");
            self.out.push_str(&escape_html(value));
            self.out.push('"');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Markup;

    #[test]
    fn escapes_text_and_attribute_values() {
        let mut markup = Markup::new();
        markup
            .open("div", &[("title", "a \"b\"")])
            .text("<x> & y")
            .close("div")
            .void("input", &[("name", "id")]);
        assert_eq!(
            markup.finish(),
            r#"<div title="a &quot;b&quot;">&lt;x&gt; &amp; y</div><input name="id" />"#
        );
    }

    #[test]
    fn label_targets_the_control() {
        let mut markup = Markup::new();
        markup.label("assignee", Some("Assignee")).label("other", None);
        assert_eq!(markup.finish(), r#"<label for="cpp-assignee">Assignee</label>"#);
    }
}
