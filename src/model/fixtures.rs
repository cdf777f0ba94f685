// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::graph::Model;
use super::ids::{ElementId, NodeId};
use super::node::{Element, Node, Value};

pub(crate) fn nid(value: &str) -> NodeId {
    NodeId::new(value).expect("node id")
}

fn eid(value: &str) -> ElementId {
    ElementId::new(value).expect("element id")
}

/// A plan item referencing a human task, with an (empty) item control.
///
/// Nodes: `n:case`, `n:planItem` -> `n:task` (`definitionRef`), `n:control` (`itemControl`).
/// The element `PlanItem_1` renders `n:planItem`.
pub(crate) fn human_task_plan_item() -> (Model, Element) {
    let mut model = Model::new();

    model.insert_node(Node::new(nid("n:case"), "cmmn:Case").with_property("id", "Case_1"));
    model.insert_node(
        Node::new(nid("n:task"), "cmmn:HumanTask")
            .with_property("id", "HumanTask_1")
            .with_property("name", "Review"),
    );
    let mut control =
        Node::new(nid("n:control"), "cmmn:PlanItemControl").with_property("id", "Control_1");
    control.set_parent(Some(nid("n:planItem")));
    model.insert_node(control);
    model.insert_node(
        Node::new(nid("n:planItem"), "cmmn:PlanItem")
            .with_property("id", "PlanItem_1")
            .with_property("definitionRef", Value::Node(nid("n:task")))
            .with_property("itemControl", Value::Node(nid("n:control"))),
    );

    let element = Element::new(eid("PlanItem_1"), nid("n:planItem"));
    model.insert_element(element.clone());
    (model, element)
}

/// A human task carrying one execution listener with one injected field.
///
/// Nodes: `n:task` -> `n:ext` (`extensionElements`) -> `n:listener` -> `n:field`.
/// The element `HumanTask_1` renders `n:task` directly.
pub(crate) fn human_task_with_listener() -> (Model, Element) {
    let mut model = Model::new();

    let mut field = Node::new(nid("n:field"), "camunda:Field")
        .with_property("name", "recipient")
        .with_property("stringValue", "ops");
    field.set_parent(Some(nid("n:listener")));
    let mut listener = Node::new(nid("n:listener"), "camunda:CaseExecutionListener")
        .with_property("event", "complete")
        .with_property("class", "org.example.Notify")
        .with_property("fields", Value::List(vec![nid("n:field")]));
    listener.set_parent(Some(nid("n:ext")));
    let mut ext = Node::new(nid("n:ext"), "cmmn:ExtensionElements")
        .with_property("values", Value::List(vec![nid("n:listener")]));
    ext.set_parent(Some(nid("n:task")));

    model.insert_node(field);
    model.insert_node(listener);
    model.insert_node(ext);
    model.insert_node(
        Node::new(nid("n:task"), "cmmn:HumanTask")
            .with_property("id", "HumanTask_1")
            .with_property("extensionElements", Value::Node(nid("n:ext"))),
    );

    let element = Element::new(eid("HumanTask_1"), nid("n:task"));
    model.insert_element(element.clone());
    (model, element)
}

/// A process task with a business-key `camunda:In`, one variable `camunda:In` and one
/// `camunda:Out`.
pub(crate) fn process_task_with_mappings() -> (Model, Element) {
    let mut model = Model::new();

    let mut business_key = Node::new(nid("n:bk"), "camunda:In")
        .with_property("businessKey", "#{caseExecution.caseBusinessKey}");
    business_key.set_parent(Some(nid("n:ext")));
    let mut input = Node::new(nid("n:in"), "camunda:In")
        .with_property("source", "orderId")
        .with_property("target", "order");
    input.set_parent(Some(nid("n:ext")));
    let mut output = Node::new(nid("n:out"), "camunda:Out")
        .with_property("source", "result")
        .with_property("target", "approved");
    output.set_parent(Some(nid("n:ext")));
    let mut ext = Node::new(nid("n:ext"), "cmmn:ExtensionElements").with_property(
        "values",
        Value::List(vec![nid("n:bk"), nid("n:in"), nid("n:out")]),
    );
    ext.set_parent(Some(nid("n:ptask")));

    model.insert_node(business_key);
    model.insert_node(input);
    model.insert_node(output);
    model.insert_node(ext);
    model.insert_node(
        Node::new(nid("n:ptask"), "cmmn:ProcessTask")
            .with_property("id", "ProcessTask_1")
            .with_property("extensionElements", Value::Node(nid("n:ext"))),
    );

    let element = Element::new(eid("ProcessTask_1"), nid("n:ptask"));
    model.insert_element(element.clone());
    (model, element)
}
