//! State-update channel: the route by which external measurement sources
//! publish new state snapshots into the tree.
//!
//! Senders are cheap to clone and cross threads; the queue stays with the
//! tree-construction thread, which drains it between passes. An update only
//! becomes visible to adoption once the corresponding re-clone commits.

use std::sync::mpsc;
use std::sync::Arc;

use crate::family::InstanceHandle;
use crate::node::{ShadowNode, ShadowNodeFragment};
use crate::state::StateData;
use crate::tree::ShadowTree;
use crate::TreeError;

/// A state snapshot published for one view instance.
pub struct StateUpdate {
    pub handle: InstanceHandle,
    pub data: Arc<dyn StateData>,
}

pub fn state_update_channel() -> (StateUpdateSender, StateUpdateQueue) {
    let (tx, rx) = mpsc::channel();
    (StateUpdateSender { tx }, StateUpdateQueue { rx })
}

/// Producer half, handed to platform measurement code.
#[derive(Clone)]
pub struct StateUpdateSender {
    tx: mpsc::Sender<StateUpdate>,
}

impl StateUpdateSender {
    /// Publishes a new state snapshot for the node identified by `handle`.
    pub fn publish<T: StateData>(&self, handle: InstanceHandle, data: T) {
        let update = StateUpdate {
            handle,
            data: Arc::new(data),
        };
        if self.tx.send(update).is_err() {
            log::debug!("state update for node {handle} dropped; queue receiver is gone");
        }
    }
}

/// Consumer half, drained on the tree-construction thread.
pub struct StateUpdateQueue {
    rx: mpsc::Receiver<StateUpdate>,
}

impl StateUpdateQueue {
    pub fn try_next(&self) -> Option<StateUpdate> {
        self.rx.try_recv().ok()
    }
}

impl ShadowTree {
    /// Drains `queue`, committing one tree revision per applied update.
    ///
    /// Each update advances the target family's state revision and re-clones
    /// the spine with the new snapshot attached, which re-runs the component
    /// adoption hooks along the way. An update addressed to a handle no
    /// longer in the tree is dropped: the view unmounted while a measurement
    /// was in flight, a normal race rather than an error.
    pub fn apply_state_updates(&self, queue: &StateUpdateQueue) -> Result<usize, TreeError> {
        let mut applied = 0;
        while let Some(update) = queue.try_next() {
            let Some(node) = self.find(update.handle) else {
                log::debug!("dropping state update for unmounted node {}", update.handle);
                continue;
            };
            let state = node.family().advance_state(update.data);
            self.update_node(update.handle, &ShadowNodeFragment::with_state(state))?;
            applied += 1;
        }
        Ok(applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::ShadowNodeChildren;
    use crate::testing::{panel_node, test_registry, PanelState};
    use std::thread;

    #[test]
    fn published_updates_reach_the_committed_tree() {
        let registry = test_registry();
        let child = panel_node(&registry, InstanceHandle(2), ShadowNodeChildren::new());
        let root = panel_node(&registry, InstanceHandle(1), std::iter::once(child).collect());
        let tree = ShadowTree::new(registry, root);

        let (sender, queue) = state_update_channel();
        let producer = thread::spawn(move || {
            sender.publish(InstanceHandle(2), PanelState { generation: 3 });
        });
        producer.join().expect("producer thread");

        let applied = tree.apply_state_updates(&queue).expect("apply");
        assert_eq!(applied, 1);

        let node = tree.find(InstanceHandle(2)).expect("child");
        let state = node.state().expect("state");
        assert_eq!(state.revision(), 1);
        assert_eq!(
            state.downcast::<PanelState>(),
            Some(&PanelState { generation: 3 })
        );
        assert!(node.is_sealed());
    }

    #[test]
    fn updates_for_unmounted_instances_are_dropped() {
        let registry = test_registry();
        let root = panel_node(&registry, InstanceHandle(1), ShadowNodeChildren::new());
        let tree = ShadowTree::new(registry, root);

        let (sender, queue) = state_update_channel();
        sender.publish(InstanceHandle(42), PanelState { generation: 1 });
        sender.publish(InstanceHandle(1), PanelState { generation: 2 });

        let applied = tree.apply_state_updates(&queue).expect("apply");
        assert_eq!(applied, 1);
        assert_eq!(tree.revision(), 2);
    }

    #[test]
    fn each_applied_update_commits_a_revision() {
        let registry = test_registry();
        let root = panel_node(&registry, InstanceHandle(1), ShadowNodeChildren::new());
        let tree = ShadowTree::new(registry, root);

        let (sender, queue) = state_update_channel();
        sender.publish(InstanceHandle(1), PanelState { generation: 1 });
        sender.publish(InstanceHandle(1), PanelState { generation: 2 });

        let applied = tree.apply_state_updates(&queue).expect("apply");
        assert_eq!(applied, 2);
        assert_eq!(tree.revision(), 3);

        let state = tree
            .find(InstanceHandle(1))
            .expect("root")
            .state()
            .expect("state");
        assert_eq!(state.revision(), 2);
        assert_eq!(
            state.downcast::<PanelState>(),
            Some(&PanelState { generation: 2 })
        );
    }
}
