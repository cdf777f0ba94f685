// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::trace;

use crate::model::{NodeId, SemanticGraph};

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const MIN_WIDTH: usize = 7;

/// Sequential id source.
///
/// Suffixes are a base-36 rendering of a process-wide counter, zero-padded to seven
/// characters and growing past that width once the counter needs it, so two calls never
/// return the same suffix.
#[derive(Debug, Default)]
pub struct IdGenerator {
    counter: AtomicU64,
}

impl IdGenerator {
    pub const fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
        }
    }

    /// `{prefix}_{suffix}`, unique among ids produced by this generator.
    pub fn next(&self, prefix: &str) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        let id = format!("{prefix}_{}", encode(n));
        trace!(%id, "generated id");
        id
    }

    /// Like [`IdGenerator::next`], skipping ids already claimed in `graph`.
    pub fn next_unclaimed(&self, prefix: &str, graph: &dyn SemanticGraph) -> String {
        loop {
            let id = self.next(prefix);
            if graph.id_owner(&id).is_none() {
                return id;
            }
        }
    }

    /// A graph key not used by any node of `graph`.
    pub fn next_node_id(&self, prefix: &str, graph: &dyn SemanticGraph) -> NodeId {
        loop {
            let Ok(id) = NodeId::new(self.next(&format!("n:{prefix}"))) else {
                continue;
            };
            if graph.node(&id).is_none() {
                return id;
            }
        }
    }
}

fn encode(mut n: u64) -> String {
    let mut digits = Vec::with_capacity(MIN_WIDTH);
    loop {
        digits.push(ALPHABET[(n % 36) as usize]);
        n /= 36;
        if n == 0 {
            break;
        }
    }
    while digits.len() < MIN_WIDTH {
        digits.push(b'0');
    }
    digits.iter().rev().map(|&b| b as char).collect()
}

static IDS: IdGenerator = IdGenerator::new();

/// The process-wide generator.
pub fn ids() -> &'static IdGenerator {
    &IDS
}

/// Next process-unique id starting with `prefix`.
pub fn next_id(prefix: &str) -> String {
    IDS.next(prefix)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::{encode, next_id, IdGenerator};
    use crate::model::fixtures::{human_task_plan_item, nid};
    use crate::model::{Node, SemanticGraph};
    use crate::util::validate_id;

    #[test]
    fn encode_pads_and_grows() {
        assert_eq!(encode(0), "0000000");
        assert_eq!(encode(35), "000000z");
        assert_eq!(encode(36), "0000010");
        assert_eq!(encode(u64::MAX).len(), 13);
    }

    #[test]
    fn generated_ids_are_distinct_and_valid() {
        let ids = (0..500).map(|_| next_id("Listener")).collect::<BTreeSet<_>>();
        assert_eq!(ids.len(), 500);
        for id in &ids {
            assert!(id.starts_with("Listener_"));
            assert_eq!(validate_id(id), Ok(()));
        }
    }

    #[test]
    fn next_unclaimed_skips_ids_in_the_model() {
        let (mut model, _) = human_task_plan_item();
        let generator = IdGenerator::new();
        // First candidate.
        model.insert_node(
            Node::new(nid("n:taken"), "cmmn:Task").with_property("id", "Control_0000000"),
        );

        let id = generator.next_unclaimed("Control", &model);
        assert_eq!(id, "Control_0000001");

        let key = generator.next_node_id("rule", &model);
        assert!(model.node(&key).is_none());
    }
}
