//! Patch application.
//!
//! # Responsibility
//! - Map `replace` paths onto mutable employee fields.
//! - Apply a batch in place, or all-or-nothing via a scratch copy.
//!
//! # Invariants
//! - Only `/nachname`, `/surname` and `/email` are replaceable.
//! - The first unsupported `replace` path stops the batch and is reported
//!   with its position.
//! - `add`/`remove` operations are counted and logged, never applied.

use crate::model::employee::Employee;
use crate::patch::{InvalidPatchOperation, PatchKind, PatchOperation};
use log::{debug, trace};

/// Mutable single-valued employee fields reachable by `replace`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchField {
    Surname,
    Email,
}

impl PatchField {
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/nachname" | "/surname" => Some(Self::Surname),
            "/email" => Some(Self::Email),
            _ => None,
        }
    }

    fn assign(self, employee: &mut Employee, value: &str) {
        match self {
            Self::Surname => employee.surname = value.to_string(),
            Self::Email => employee.email = value.to_string(),
        }
    }
}

/// Applies patch batches to employee records.
#[derive(Debug, Default, Clone, Copy)]
pub struct PatchEngine;

impl PatchEngine {
    pub fn new() -> Self {
        Self
    }

    /// Applies `operations` to `employee` in place.
    ///
    /// Stops at the first unsupported `replace` path. Replacements applied
    /// earlier in the same call stay applied; use [`PatchEngine::apply_atomic`]
    /// for all-or-nothing behavior.
    pub fn apply(
        &self,
        employee: &mut Employee,
        operations: &[PatchOperation],
    ) -> Result<(), InvalidPatchOperation> {
        for (index, operation) in operations.iter().enumerate() {
            if let PatchOperation::Replace { path, value } = operation {
                let field = PatchField::from_path(path).ok_or_else(|| InvalidPatchOperation {
                    kind: PatchKind::Replace,
                    path: path.clone(),
                    index,
                })?;
                field.assign(employee, value);
            }
        }
        trace!("event=patch_replace module=patch status=ok");

        let add_count = count_kind(operations, PatchKind::Add);
        let remove_count = count_kind(operations, PatchKind::Remove);
        debug!(
            "event=patch_apply module=patch status=ok ops={} add_ignored={add_count} remove_ignored={remove_count}",
            operations.len()
        );
        Ok(())
    }

    /// Applies `operations` to a scratch copy and commits only on success.
    pub fn apply_atomic(
        &self,
        employee: &mut Employee,
        operations: &[PatchOperation],
    ) -> Result<(), InvalidPatchOperation> {
        let mut scratch = employee.clone();
        self.apply(&mut scratch, operations)?;
        *employee = scratch;
        Ok(())
    }
}

fn count_kind(operations: &[PatchOperation], kind: PatchKind) -> usize {
    operations.iter().filter(|op| op.kind() == kind).count()
}
