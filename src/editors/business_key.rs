// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smol_str::SmolStr;

use super::extension::{add_entry, extension_elements, remove_entry};
use crate::config::PanelConfig;
use crate::entry::{
    ensure_container, Binding, Checkbox, ContainerSpec, EntryContext, EntryError, EntryOptions,
    Values,
};
use crate::model::{Node, Value};
use crate::ops::{Commands, PropertyMap};

pub const BUSINESS_KEY: &str = "businessKey";
const IN_TYPE: &str = "camunda:In";

/// The `camunda:In` carrying the business key, if any.
pub(crate) fn business_key_in<'a>(
    cx: &EntryContext<'a>,
    owner: &Node,
    container: &ContainerSpec,
) -> Option<&'a Node> {
    extension_elements(cx.graph(), owner.id(), container, Some(IN_TYPE))
        .into_iter()
        .find(|mapping| mapping.property(BUSINESS_KEY).is_some())
}

struct BusinessKey {
    container: ContainerSpec,
    expression: String,
}

impl Binding for BusinessKey {
    fn get(&self, cx: &EntryContext<'_>, target: Option<&Node>) -> Values {
        let present = target.map_or(false, |owner| {
            business_key_in(cx, owner, &self.container).is_some()
        });
        Values::new().with(BUSINESS_KEY, present)
    }

    fn set(&self, cx: &EntryContext<'_>, target: Option<&Node>, values: &Values) -> Commands {
        let Some(owner) = target else {
            return Commands::new();
        };
        let existing = business_key_in(cx, owner, &self.container);
        match (values.truthy(BUSINESS_KEY), existing) {
            (true, None) => {
                let mut commands = Commands::new();
                let container = ensure_container(cx, owner, &self.container, &mut commands);
                let mapping = cx.ids().next_node_id("in", cx.graph());
                let mut properties = PropertyMap::new();
                properties.insert(
                    SmolStr::new_static(BUSINESS_KEY),
                    Some(Value::from(self.expression.as_str())),
                );
                commands.extend(add_entry(&container, mapping, IN_TYPE, properties));
                commands
            }
            (false, Some(mapping)) => {
                remove_entry(cx.graph(), owner, &self.container, mapping.id())
            }
            _ => Commands::new(),
        }
    }
}

/// Checkbox toggling the business-key mapping of a case or process task.
pub fn business_key(config: &PanelConfig) -> Result<Checkbox, EntryError> {
    Checkbox::new(
        EntryOptions::new(BUSINESS_KEY)
            .label("Business Key")
            .binding(BusinessKey {
                container: config.container(),
                expression: config.business_key_expression.clone(),
            })
            .hide_entry(|cx| {
                !cx.business_object()
                    .map_or(false, |bo| bo.is("cmmn:ProcessTask") || bo.is("cmmn:CaseTask"))
            }),
    )
}

#[cfg(test)]
mod tests {
    use super::{business_key, BUSINESS_KEY};
    use crate::config::PanelConfig;
    use crate::editors::VALUES;
    use crate::entry::{Entry, EntryContext, EntryState, Values};
    use crate::model::fixtures::{human_task_plan_item, nid, process_task_with_mappings};
    use crate::model::{Element, ElementId, Model, Node, SemanticGraph};
    use crate::ops::{apply_commands, Command};

    fn toggle(model: &mut Model, element: &Element, on: bool) -> Vec<Command> {
        let checkbox = business_key(&PanelConfig::default()).expect("checkbox");
        let commands = {
            let cx = EntryContext::new(&*model, element);
            checkbox
                .set(&cx, &Values::new().with(BUSINESS_KEY, on), &mut EntryState::default())
                .expect("set")
        };
        apply_commands(model, &commands).expect("apply");
        commands.into_vec()
    }

    fn read(model: &Model, element: &Element) -> bool {
        let checkbox = business_key(&PanelConfig::default()).expect("checkbox");
        checkbox
            .get(&EntryContext::new(model, element), &mut EntryState::default())
            .truthy(BUSINESS_KEY)
    }

    #[test]
    fn reads_the_existing_mapping() {
        let (model, element) = process_task_with_mappings();
        assert!(read(&model, &element));
    }

    #[test]
    fn unchecking_keeps_other_mappings() {
        let (mut model, element) = process_task_with_mappings();
        let commands = toggle(&mut model, &element, false);

        assert_eq!(
            commands,
            vec![Command::remove_from_list(nid("n:ext"), VALUES, vec![nid("n:bk")])]
        );
        assert!(!read(&model, &element));
        assert_eq!(model.related_list(&nid("n:ext"), VALUES).len(), 2);
    }

    #[test]
    fn checking_creates_container_and_mapping() {
        let (mut model, _) = human_task_plan_item();
        model.insert_node(Node::new(nid("n:process"), "cmmn:ProcessTask"));
        let element = Element::new(ElementId::new("ProcessTask_9").expect("id"), nid("n:process"));

        let commands = toggle(&mut model, &element, true);
        assert_eq!(commands.len(), 3);
        assert!(read(&model, &element));

        let commands = toggle(&mut model, &element, false);
        assert_eq!(commands.len(), 2);
        assert!(matches!(&commands[1], Command::UpdateSemanticParent { parent: None, .. }));
        let process = model.node(&nid("n:process")).expect("process");
        assert!(process.property("extensionElements").is_none());
    }

    #[test]
    fn hidden_outside_called_tasks() {
        let (model, element) = human_task_plan_item();
        let checkbox = business_key(&PanelConfig::default()).expect("checkbox");
        assert!(checkbox.is_hidden(&EntryContext::new(&model, &element)));

        let (model, element) = process_task_with_mappings();
        assert!(!checkbox.is_hidden(&EntryContext::new(&model, &element)));
    }
}
