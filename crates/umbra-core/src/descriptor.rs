//! Component descriptors: per-component-type construction, cloning, and
//! adoption policy.
//!
//! A descriptor is a stateless singleton resolved through the registry. The
//! construction pipeline invokes [`ComponentDescriptor::adopt`] exactly once
//! on every node it creates or clones, before the node re-enters the generic
//! tree pipeline; the hook is where a component reconciles declared props and
//! late-arriving state with the node's layout representation.

use std::marker::PhantomData;
use std::sync::Arc;

use crate::family::NodeFamily;
use crate::node::{
    ComponentName, Props, ShadowNode, ShadowNodeBase, ShadowNodeChildren, ShadowNodeFragment,
    SharedShadowNode,
};
use crate::state::{NodeState, StateData};

/// Per-component-type policy object controlling node construction, cloning,
/// and adoption.
pub trait ComponentDescriptor: Send + Sync {
    /// Component type identifier this descriptor serves.
    fn component_name(&self) -> ComponentName;

    /// Creates a fresh node with the component's default state attached.
    fn create(
        &self,
        family: Arc<NodeFamily>,
        props: Arc<dyn Props>,
        children: ShadowNodeChildren,
    ) -> SharedShadowNode;

    /// Clones `source`, applying `fragment` overrides. `source` must be a
    /// node of this descriptor's component type.
    fn clone_node(&self, source: &dyn ShadowNode, fragment: &ShadowNodeFragment)
        -> SharedShadowNode;

    /// Adoption hook, run once per node right after creation or cloning.
    /// Overriding implementations must end by delegating to [`adopt_base`]
    /// (directly or through an embedded generic descriptor) so that generic
    /// bookkeeping still happens for every component type.
    fn adopt(&self, node: &SharedShadowNode) {
        adopt_base(node);
    }
}

/// Generic adoption bookkeeping shared by all component types: asserts the
/// node is still mutable, then pulls in the family's most recent state
/// snapshot when it is newer than the one the node carries.
pub fn adopt_base(node: &SharedShadowNode) {
    node.base().ensure_unsealed("adopt");
    node.base().progress_state();
    log::trace!(
        "adopted {} node {} r{}",
        node.component_name(),
        node.handle(),
        node.revision()
    );
}

/// Links a concrete node type to its component identity so the generic
/// descriptor can build it.
pub trait ConcreteShadowNode: ShadowNode + Sized {
    const NAME: ComponentName;

    /// State snapshot type for this component. Its `Default` is the "nothing
    /// observed yet" value nodes are born with.
    type ConcreteState: StateData + Default;

    fn create(base: ShadowNodeBase) -> Self;

    /// Builds the clone from an already-cloned base, copying component-local
    /// data (notably layout metrics) from `self`.
    fn clone_with_base(&self, base: ShadowNodeBase) -> Self;
}

/// Descriptor implementation shared by ordinary components. Components with
/// adoption behavior of their own embed one of these and delegate the rest.
pub struct ConcreteComponentDescriptor<N> {
    marker: PhantomData<fn() -> N>,
}

impl<N> ConcreteComponentDescriptor<N> {
    pub const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<N> Default for ConcreteComponentDescriptor<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: ConcreteShadowNode> ComponentDescriptor for ConcreteComponentDescriptor<N> {
    fn component_name(&self) -> ComponentName {
        N::NAME
    }

    fn create(
        &self,
        family: Arc<NodeFamily>,
        props: Arc<dyn Props>,
        children: ShadowNodeChildren,
    ) -> SharedShadowNode {
        let state = NodeState::initial(Arc::new(N::ConcreteState::default()));
        let base = ShadowNodeBase::new(family, props, Some(state), children);
        Arc::new(N::create(base))
    }

    fn clone_node(
        &self,
        source: &dyn ShadowNode,
        fragment: &ShadowNodeFragment,
    ) -> SharedShadowNode {
        let concrete = source.as_any().downcast_ref::<N>().unwrap_or_else(|| {
            panic!(
                "{} descriptor asked to clone a {} node",
                N::NAME,
                source.component_name()
            )
        });
        let base = concrete.base().clone_with(fragment);
        Arc::new(concrete.clone_with_base(base))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::InstanceHandle;
    use crate::testing::{panel_node, test_registry, PanelShadowNode, PanelState};

    #[test]
    fn create_attaches_the_default_state() {
        let registry = test_registry();
        let node = panel_node(&registry, InstanceHandle(1), ShadowNodeChildren::new());

        let state = node.state().expect("initial state");
        assert_eq!(state.revision(), 0);
        assert_eq!(state.downcast::<PanelState>(), Some(&PanelState::default()));
    }

    #[test]
    fn clone_node_preserves_identity_and_bumps_revision() {
        let registry = test_registry();
        let node = panel_node(&registry, InstanceHandle(1), ShadowNodeChildren::new());
        let descriptor = ConcreteComponentDescriptor::<PanelShadowNode>::new();

        let clone = descriptor.clone_node(node.as_ref(), &ShadowNodeFragment::default());
        assert_eq!(clone.handle(), node.handle());
        assert_eq!(clone.revision(), 1);
        assert!(Arc::ptr_eq(clone.family(), node.family()));
    }

    #[test]
    #[should_panic(expected = "asked to clone a")]
    fn cloning_a_foreign_node_is_fatal() {
        let registry = test_registry();
        let node = panel_node(&registry, InstanceHandle(1), ShadowNodeChildren::new());
        let descriptor =
            ConcreteComponentDescriptor::<crate::testing::MarkerShadowNode>::new();
        descriptor.clone_node(node.as_ref(), &ShadowNodeFragment::default());
    }

    #[test]
    fn base_adoption_progresses_to_the_newest_family_state() {
        let registry = test_registry();
        let node = panel_node(&registry, InstanceHandle(1), ShadowNodeChildren::new());
        node.family()
            .advance_state(Arc::new(PanelState { generation: 4 }));

        adopt_base(&node);
        let state = node.state().expect("state");
        assert_eq!(state.revision(), 1);
        assert_eq!(
            state.downcast::<PanelState>(),
            Some(&PanelState { generation: 4 })
        );
    }

    #[test]
    #[should_panic(expected = "sealed shadow node: adopt")]
    fn adopting_a_sealed_node_is_fatal() {
        let registry = test_registry();
        let node = panel_node(&registry, InstanceHandle(1), ShadowNodeChildren::new());
        node.seal();
        adopt_base(&node);
    }
}
