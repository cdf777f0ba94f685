// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Rule conditions on a plan item's control.
//!
//! The chain is `planItem.itemControl -> control.<rule> -> rule.condition`. Every link is
//! created on the first non-empty write and torn down again when the condition is
//! cleared. The control goes too once it would hold nothing but its id.

use smol_str::SmolStr;

use crate::entry::{Binding, EntryContext, EntryError, EntryOptions, TextField, Values};
use crate::model::{Node, Value, ID_PROPERTY};
use crate::ops::{Command, Commands, Containment, PropertyMap};

pub const ITEM_CONTROL: &str = "itemControl";
pub const CONDITION: &str = "condition";
/// Property of the condition expression holding its text.
pub const CONDITION_BODY: &str = "body";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Required,
    Repetition,
    ManualActivation,
}

impl RuleKind {
    /// The control property holding this rule.
    pub fn property(self) -> &'static str {
        match self {
            Self::Required => "requiredRule",
            Self::Repetition => "repetitionRule",
            Self::ManualActivation => "manualActivationRule",
        }
    }

    pub fn type_name(self) -> &'static str {
        match self {
            Self::Required => "cmmn:RequiredRule",
            Self::Repetition => "cmmn:RepetitionRule",
            Self::ManualActivation => "cmmn:ManualActivationRule",
        }
    }

    fn id_prefix(self) -> &'static str {
        match self {
            Self::Required => "RequiredRule",
            Self::Repetition => "RepetitionRule",
            Self::ManualActivation => "ManualActivationRule",
        }
    }
}

struct RuleCondition {
    kind: RuleKind,
    key: SmolStr,
}

struct Chain<'a> {
    control: Option<&'a Node>,
    rule: Option<&'a Node>,
    condition: Option<&'a Node>,
}

impl RuleCondition {
    fn chain<'a>(&self, cx: &EntryContext<'a>, owner: &Node) -> Chain<'a> {
        let graph = cx.graph();
        let control = graph.related(owner.id(), ITEM_CONTROL);
        let rule = control.and_then(|control| graph.related(control.id(), self.kind.property()));
        let condition = rule.and_then(|rule| graph.related(rule.id(), CONDITION));
        Chain {
            control,
            rule,
            condition,
        }
    }

    fn create(&self, cx: &EntryContext<'_>, owner: &Node, chain: &Chain<'_>, body: &str) -> Commands {
        let graph = cx.graph();
        let mut commands = Commands::new();

        let rule = match chain.rule {
            Some(rule) => rule.id().clone(),
            None => {
                let control = match chain.control {
                    Some(control) => control.id().clone(),
                    None => {
                        let control = cx.ids().next_node_id("control", graph);
                        let mut properties = PropertyMap::new();
                        properties.insert(
                            ID_PROPERTY.into(),
                            Some(Value::Str(cx.ids().next_unclaimed("PlanItemControl", graph))),
                        );
                        commands.push(Command::create_node(
                            control.clone(),
                            "cmmn:PlanItemControl",
                            properties,
                            Some(Containment::new(owner.id().clone(), ITEM_CONTROL)),
                        ));
                        control
                    }
                };

                let rule = cx.ids().next_node_id("rule", graph);
                let mut properties = PropertyMap::new();
                properties.insert(
                    ID_PROPERTY.into(),
                    Some(Value::Str(cx.ids().next_unclaimed(self.kind.id_prefix(), graph))),
                );
                commands.push(Command::create_node(
                    rule.clone(),
                    self.kind.type_name(),
                    properties,
                    None,
                ));
                commands.push(Command::attach(rule.clone(), control, self.kind.property()));
                rule
            }
        };

        let condition = cx.ids().next_node_id("condition", graph);
        let mut properties = PropertyMap::new();
        properties.insert(
            ID_PROPERTY.into(),
            Some(Value::Str(cx.ids().next_unclaimed("Expression", graph))),
        );
        properties.insert(CONDITION_BODY.into(), Some(Value::from(body)));
        commands.push(Command::create_node(
            condition,
            "cmmn:Expression",
            properties,
            Some(Containment::new(rule, CONDITION)),
        ));
        commands
    }

    fn teardown(&self, chain: &Chain<'_>) -> Commands {
        let mut commands = Commands::new();
        if let Some(condition) = chain.condition {
            commands.push(Command::update_property(condition.id().clone(), CONDITION_BODY, None));
            commands.push(Command::detach(condition.id().clone(), CONDITION));
        }
        if let Some(rule) = chain.rule {
            commands.push(Command::detach(rule.id().clone(), self.kind.property()));
            if let Some(control) = chain.control.filter(|control| self.only_holds_rule(control)) {
                commands.push(Command::detach(control.id().clone(), ITEM_CONTROL));
            }
        }
        commands
    }

    /// True when `control` has nothing but its id and this rule.
    fn only_holds_rule(&self, control: &Node) -> bool {
        control
            .properties()
            .keys()
            .all(|name| name == ID_PROPERTY || name == self.kind.property())
    }
}

impl Binding for RuleCondition {
    fn get(&self, cx: &EntryContext<'_>, target: Option<&Node>) -> Values {
        let body = target
            .and_then(|owner| self.chain(cx, owner).condition)
            .and_then(|condition| condition.str_property(CONDITION_BODY));
        match body {
            Some(body) => Values::new().with(self.key.clone(), body),
            None => Values::new().with_unset(self.key.clone()),
        }
    }

    fn set(&self, cx: &EntryContext<'_>, target: Option<&Node>, values: &Values) -> Commands {
        let Some(owner) = target else {
            return Commands::new();
        };
        let chain = self.chain(cx, owner);
        match (values.non_empty(&self.key), chain.condition) {
            (Some(body), Some(condition)) => {
                let mut commands = Commands::new();
                commands.push(Command::update_property(
                    condition.id().clone(),
                    CONDITION_BODY,
                    Some(Value::from(body)),
                ));
                commands
            }
            (Some(body), None) => self.create(cx, owner, &chain, body),
            (None, _) => self.teardown(&chain),
        }
    }
}

/// Text field editing the condition of a `kind` rule on the selected plan item.
pub fn rule_condition(kind: RuleKind, label: &str) -> Result<TextField, EntryError> {
    let key = SmolStr::new(kind.property());
    TextField::new(
        EntryOptions::new(key.clone())
            .label(label)
            .binding(RuleCondition { kind, key }),
    )
}
