//! Node family: the stable identity shared by every revision of one view
//! instance, plus the most recently published state snapshot for it.

use std::fmt;
use std::sync::{Arc, RwLock};

use crate::node::ComponentName;
use crate::state::{NodeState, StateData};

/// Opaque identifier of one view instance, assigned by the host when the
/// instance first appears in the UI description.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct InstanceHandle(pub u32);

impl fmt::Display for InstanceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity record shared by all clones of a node. Nodes come and go as the
/// tree is re-cloned; the family persists for the lifetime of the view
/// instance and carries the newest state snapshot published for it.
pub struct NodeFamily {
    name: ComponentName,
    handle: InstanceHandle,
    most_recent_state: RwLock<Option<NodeState>>,
}

impl NodeFamily {
    pub fn new(name: ComponentName, handle: InstanceHandle) -> Self {
        Self {
            name,
            handle,
            most_recent_state: RwLock::new(None),
        }
    }

    pub fn component_name(&self) -> ComponentName {
        self.name
    }

    pub fn handle(&self) -> InstanceHandle {
        self.handle
    }

    /// Newest state snapshot published for this instance, if any.
    pub fn most_recent_state(&self) -> Option<NodeState> {
        self.most_recent_state
            .read()
            .expect("family state lock poisoned")
            .clone()
    }

    /// Wraps `data` as the next state revision and records it as this
    /// family's most recent snapshot.
    pub fn advance_state(&self, data: Arc<dyn StateData>) -> NodeState {
        let mut slot = self
            .most_recent_state
            .write()
            .expect("family state lock poisoned");
        let revision = slot.as_ref().map_or(1, |state| state.revision() + 1);
        let state = NodeState::with_revision(data, revision);
        *slot = Some(state.clone());
        state
    }
}
