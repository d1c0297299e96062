//! Shadow tree: the committed, sealed node hierarchy, plus copy-on-write
//! updates that re-clone only the spine from the root to a changed node.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::descriptor::ComponentDescriptor;
use crate::family::InstanceHandle;
use crate::node::{ShadowNode, ShadowNodeChildren, ShadowNodeFragment, SharedShadowNode};
use crate::registry::ComponentDescriptorRegistry;
use crate::TreeError;

/// Committed shadow tree. The root and everything under it is sealed; any
/// change produces a new root sharing untouched subtrees with the old one.
pub struct ShadowTree {
    registry: Arc<ComponentDescriptorRegistry>,
    root: RwLock<SharedShadowNode>,
    revision: AtomicU64,
}

impl ShadowTree {
    /// Adopts `root` as the first committed revision, sealing its subtree.
    pub fn new(registry: Arc<ComponentDescriptorRegistry>, root: SharedShadowNode) -> Self {
        seal_subtree(&root);
        Self {
            registry,
            root: RwLock::new(root),
            revision: AtomicU64::new(1),
        }
    }

    pub fn root(&self) -> SharedShadowNode {
        Arc::clone(&self.root.read().expect("tree root lock poisoned"))
    }

    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::Acquire)
    }

    /// Seals `new_root`'s subtree and publishes it as the committed tree.
    pub fn commit(&self, new_root: SharedShadowNode) {
        seal_subtree(&new_root);
        *self.root.write().expect("tree root lock poisoned") = new_root;
        let revision = self.revision.fetch_add(1, Ordering::AcqRel) + 1;
        log::debug!("committed shadow tree r{revision}");
    }

    /// Finds the committed node for `handle`, if the instance is still
    /// mounted.
    pub fn find(&self, handle: InstanceHandle) -> Option<SharedShadowNode> {
        find_node(&self.root(), handle)
    }

    /// Clones the spine from the root down to `handle`, applying `fragment`
    /// at the target and running every affected node's adoption hook, then
    /// commits the resulting tree.
    pub fn update_node(
        &self,
        handle: InstanceHandle,
        fragment: &ShadowNodeFragment,
    ) -> Result<(), TreeError> {
        let root = self.root();
        let new_root = clone_spine(&self.registry, &root, handle, fragment)?
            .ok_or(TreeError::UnknownHandle { handle })?;
        self.commit(new_root);
        Ok(())
    }
}

/// Depth-first lookup by instance handle.
pub fn find_node(node: &SharedShadowNode, handle: InstanceHandle) -> Option<SharedShadowNode> {
    if node.handle() == handle {
        return Some(Arc::clone(node));
    }
    node.children()
        .iter()
        .find_map(|child| find_node(child, handle))
}

fn seal_subtree(node: &SharedShadowNode) {
    if node.is_sealed() {
        // Shared intact from an older committed tree.
        return;
    }
    for child in node.children() {
        seal_subtree(child);
    }
    node.seal();
}

fn clone_spine(
    registry: &ComponentDescriptorRegistry,
    node: &SharedShadowNode,
    handle: InstanceHandle,
    fragment: &ShadowNodeFragment,
) -> Result<Option<SharedShadowNode>, TreeError> {
    if node.handle() == handle {
        let descriptor = registry.descriptor(node.component_name())?;
        let clone = descriptor.clone_node(node.as_ref(), fragment);
        descriptor.adopt(&clone);
        return Ok(Some(clone));
    }

    for (index, child) in node.children().iter().enumerate() {
        let Some(new_child) = clone_spine(registry, child, handle, fragment)? else {
            continue;
        };
        let mut children: ShadowNodeChildren = node.children().iter().cloned().collect();
        children[index] = new_child;
        let descriptor = registry.descriptor(node.component_name())?;
        let clone =
            descriptor.clone_node(node.as_ref(), &ShadowNodeFragment::with_children(children));
        descriptor.adopt(&clone);
        return Ok(Some(clone));
    }

    Ok(None)
}
