//! Generic state container attached to shadow nodes.
//!
//! State is the side channel by which externally observed facts (typically a
//! native measurement) reach a node after the tree was described. A snapshot
//! is immutable; new facts arrive as a wholesale replacement carrying a higher
//! revision, never as a partial mutation.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Erased state snapshot. Any plain-data type qualifies.
pub trait StateData: Any + Send + Sync + fmt::Debug {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any + Send + Sync + fmt::Debug> StateData for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// One state snapshot plus its position in the owning family's update
/// sequence. Cloning shares the underlying data.
#[derive(Clone, Debug)]
pub struct NodeState {
    data: Arc<dyn StateData>,
    revision: u64,
}

impl NodeState {
    /// Wraps the state a node is born with, before any external update.
    pub fn initial(data: Arc<dyn StateData>) -> Self {
        Self { data, revision: 0 }
    }

    pub(crate) fn with_revision(data: Arc<dyn StateData>, revision: u64) -> Self {
        Self { data, revision }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn data(&self) -> &Arc<dyn StateData> {
        &self.data
    }

    /// Typed view of the snapshot, `None` when the snapshot holds a
    /// different type.
    pub fn downcast<T: StateData>(&self) -> Option<&T> {
        self.data.as_any().downcast_ref::<T>()
    }
}
