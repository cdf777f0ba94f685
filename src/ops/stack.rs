// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Casepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use tracing::debug;

use super::{apply_commands, ApplyError, ApplyResult, CommandBatch, Delta};
use crate::model::{Model, SemanticGraph};

/// The host's command stack: the only authority allowed to mutate the semantic graph.
pub trait CommandStack {
    fn graph(&self) -> &dyn SemanticGraph;

    /// Applies every command of `batch` in order as a single undoable unit.
    fn execute(&mut self, batch: CommandBatch) -> Result<ApplyResult, ApplyError>;
}

#[derive(Debug, Clone)]
struct Executed {
    batch: CommandBatch,
    /// Model state on the other side of `batch`.
    snapshot: Model,
}

/// In-memory [`CommandStack`] over a [`Model`] with snapshot-based undo/redo.
#[derive(Debug, Clone, Default)]
pub struct UndoStack {
    model: Model,
    rev: u64,
    undo: Vec<Executed>,
    redo: Vec<Executed>,
}

impl UndoStack {
    pub fn new(model: Model) -> Self {
        Self {
            model,
            ..Self::default()
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Reverts the most recent batch. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(executed) = self.undo.pop() else {
            return false;
        };
        let after = std::mem::replace(&mut self.model, executed.snapshot);
        self.rev += 1;
        debug!(changed = %executed.batch.changed, rev = self.rev, "undo");
        self.redo.push(Executed {
            batch: executed.batch,
            snapshot: after,
        });
        true
    }

    /// Re-applies the most recently undone batch.
    pub fn redo(&mut self) -> bool {
        let Some(undone) = self.redo.pop() else {
            return false;
        };
        let before = std::mem::replace(&mut self.model, undone.snapshot);
        self.rev += 1;
        debug!(changed = %undone.batch.changed, rev = self.rev, "redo");
        self.undo.push(Executed {
            batch: undone.batch,
            snapshot: before,
        });
        true
    }
}

impl CommandStack for UndoStack {
    fn graph(&self) -> &dyn SemanticGraph {
        &self.model
    }

    fn execute(&mut self, batch: CommandBatch) -> Result<ApplyResult, ApplyError> {
        if batch.is_empty() {
            return Ok(ApplyResult {
                new_rev: self.rev,
                applied: 0,
                delta: Delta::default(),
            });
        }

        let before = self.model.clone();
        let delta = apply_commands(&mut self.model, &batch.commands)?;
        self.rev += 1;
        debug!(
            changed = %batch.changed,
            commands = batch.commands.len(),
            rev = self.rev,
            "batch applied"
        );

        let applied = batch.commands.len();
        self.undo.push(Executed {
            batch,
            snapshot: before,
        });
        self.redo.clear();
        Ok(ApplyResult {
            new_rev: self.rev,
            applied,
            delta,
        })
    }
}
