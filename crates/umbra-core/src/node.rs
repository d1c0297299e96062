//! Shadow node: one immutable (once sealed) element of the shadow tree.
//!
//! Nodes are copy-on-write records. A clone shares the source's props, state,
//! and children by reference unless a [`ShadowNodeFragment`] overrides them,
//! and carries an incremented revision under the same [`NodeFamily`]. A node
//! stays mutable from construction until the tree it joins is committed;
//! after that every mutation path panics via the embedded [`Seal`].

use std::any::{self, Any};
use std::fmt;
use std::sync::{Arc, RwLock};

use smallvec::SmallVec;

use crate::family::{InstanceHandle, NodeFamily};
use crate::layoutable::LayoutableShadowNode;
use crate::seal::Seal;
use crate::state::NodeState;

/// Component type identifier, fixed at registration time.
pub type ComponentName = &'static str;

/// Shared ownership of an erased shadow node.
pub type SharedShadowNode = Arc<dyn ShadowNode>;

/// Ordered child list. Most nodes have only a handful of children.
pub type ShadowNodeChildren = SmallVec<[SharedShadowNode; 4]>;

/// Erased declarative props. Any plain-data type qualifies.
pub trait Props: Any + Send + Sync + fmt::Debug {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any + Send + Sync + fmt::Debug> Props for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Record shared by every concrete shadow node type.
pub struct ShadowNodeBase {
    family: Arc<NodeFamily>,
    revision: u32,
    props: Arc<dyn Props>,
    state: RwLock<Option<NodeState>>,
    children: ShadowNodeChildren,
    seal: Seal,
}

impl ShadowNodeBase {
    pub fn new(
        family: Arc<NodeFamily>,
        props: Arc<dyn Props>,
        state: Option<NodeState>,
        children: ShadowNodeChildren,
    ) -> Self {
        Self {
            family,
            revision: 0,
            props,
            state: RwLock::new(state),
            children,
            seal: Seal::new(),
        }
    }

    /// Copy-on-write clone: fields absent from `fragment` are shared with the
    /// source. The clone starts unsealed with an incremented revision.
    pub fn clone_with(&self, fragment: &ShadowNodeFragment) -> Self {
        Self {
            family: Arc::clone(&self.family),
            revision: self.revision + 1,
            props: fragment
                .props
                .clone()
                .unwrap_or_else(|| Arc::clone(&self.props)),
            state: RwLock::new(fragment.state.clone().or_else(|| self.state())),
            children: fragment
                .children
                .clone()
                .unwrap_or_else(|| self.children.clone()),
            seal: Seal::new(),
        }
    }

    pub fn family(&self) -> &Arc<NodeFamily> {
        &self.family
    }

    pub fn component_name(&self) -> ComponentName {
        self.family.component_name()
    }

    pub fn handle(&self) -> InstanceHandle {
        self.family.handle()
    }

    pub fn revision(&self) -> u32 {
        self.revision
    }

    pub fn props(&self) -> &Arc<dyn Props> {
        &self.props
    }

    /// Current state snapshot. Cheap: clones an `Arc` wrapper.
    pub fn state(&self) -> Option<NodeState> {
        self.state.read().expect("node state lock poisoned").clone()
    }

    pub(crate) fn set_state(&self, state: NodeState) {
        self.seal.ensure_unsealed("node state");
        *self.state.write().expect("node state lock poisoned") = Some(state);
    }

    /// Replaces this node's state with the family's most recent snapshot when
    /// that snapshot is newer. Part of generic adoption bookkeeping.
    pub(crate) fn progress_state(&self) {
        let Some(latest) = self.family.most_recent_state() else {
            return;
        };
        let newer = self
            .state()
            .map_or(true, |current| current.revision() < latest.revision());
        if newer {
            self.set_state(latest);
        }
    }

    pub fn children(&self) -> &[SharedShadowNode] {
        &self.children
    }

    pub fn seal(&self) {
        self.seal.seal();
    }

    pub fn is_sealed(&self) -> bool {
        self.seal.is_sealed()
    }

    /// Fatal assert for pre-seal-only operations; see [`Seal::ensure_unsealed`].
    pub fn ensure_unsealed(&self, what: &str) {
        self.seal.ensure_unsealed(what);
    }
}

/// A shadow node as seen by the generic tree pipeline.
///
/// Concrete node types embed a [`ShadowNodeBase`] and expose it through
/// [`ShadowNode::base`]; everything else is provided. `as_layoutable` is the
/// capability query for layout participation; nodes that never enter layout
/// keep the `None` default.
pub trait ShadowNode: Send + Sync + 'static {
    fn base(&self) -> &ShadowNodeBase;

    fn as_any(&self) -> &dyn Any;

    fn as_layoutable(&self) -> Option<&dyn LayoutableShadowNode> {
        None
    }

    fn component_name(&self) -> ComponentName {
        self.base().component_name()
    }

    fn family(&self) -> &Arc<NodeFamily> {
        self.base().family()
    }

    fn handle(&self) -> InstanceHandle {
        self.base().handle()
    }

    fn revision(&self) -> u32 {
        self.base().revision()
    }

    fn props(&self) -> &Arc<dyn Props> {
        self.base().props()
    }

    fn state(&self) -> Option<NodeState> {
        self.base().state()
    }

    fn children(&self) -> &[SharedShadowNode] {
        self.base().children()
    }

    fn seal(&self) {
        self.base().seal();
    }

    fn is_sealed(&self) -> bool {
        self.base().is_sealed()
    }
}

/// Overrides applied when cloning a node. Fields left `None` are shared with
/// the clone source.
#[derive(Clone, Default)]
pub struct ShadowNodeFragment {
    pub props: Option<Arc<dyn Props>>,
    pub state: Option<NodeState>,
    pub children: Option<ShadowNodeChildren>,
}

impl ShadowNodeFragment {
    pub fn with_props(props: Arc<dyn Props>) -> Self {
        Self {
            props: Some(props),
            ..Self::default()
        }
    }

    pub fn with_state(state: NodeState) -> Self {
        Self {
            state: Some(state),
            ..Self::default()
        }
    }

    pub fn with_children(children: ShadowNodeChildren) -> Self {
        Self {
            children: Some(children),
            ..Self::default()
        }
    }
}

/// Downcasts `node` to its concrete type. A mismatch means the construction
/// pipeline routed a node to the wrong descriptor, which is fatal.
pub fn downcast_node<N: ShadowNode>(node: &dyn ShadowNode) -> &N {
    node.as_any().downcast_ref::<N>().unwrap_or_else(|| {
        panic!(
            "expected a {} shadow node, found component {}",
            any::type_name::<N>(),
            node.component_name()
        )
    })
}
