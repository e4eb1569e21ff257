//! Field-level partial updates for employee records.
//!
//! # Responsibility
//! - Model patch operations as a tagged variant list.
//! - Apply a batch to an already fetched record.
//!
//! # Invariants
//! - `replace` operations run first, in their given relative order.
//! - `add`/`remove` are accepted but have no effect on single-valued fields.
//! - The engine never validates or persists; the write pipeline does.

mod engine;

pub use engine::{PatchEngine, PatchField};

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Operation category, ordered by processing priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PatchKind {
    Replace,
    Add,
    Remove,
}

impl Display for PatchKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Replace => "replace",
            Self::Add => "add",
            Self::Remove => "remove",
        };
        f.write_str(name)
    }
}

/// One patch instruction in JSON-Patch shape, e.g.
/// `{"op": "replace", "path": "/email", "value": "new@acme.de"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOperation {
    Replace { path: String, value: String },
    Add { path: String, value: String },
    Remove { path: String },
}

impl PatchOperation {
    pub fn replace(path: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Replace {
            path: path.into(),
            value: value.into(),
        }
    }

    pub fn add(path: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Add {
            path: path.into(),
            value: value.into(),
        }
    }

    pub fn remove(path: impl Into<String>) -> Self {
        Self::Remove { path: path.into() }
    }

    pub fn kind(&self) -> PatchKind {
        match self {
            Self::Replace { .. } => PatchKind::Replace,
            Self::Add { .. } => PatchKind::Add,
            Self::Remove { .. } => PatchKind::Remove,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Replace { path, .. } | Self::Add { path, .. } | Self::Remove { path } => path,
        }
    }
}

/// A `replace` targeted a path that is not a mutable single-valued field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidPatchOperation {
    pub kind: PatchKind,
    pub path: String,
    /// Position of the offending operation in the submitted batch.
    pub index: usize,
}

impl Display for InvalidPatchOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported {} path `{}` at operation #{}",
            self.kind, self.path, self.index
        )
    }
}

impl Error for InvalidPatchOperation {}
