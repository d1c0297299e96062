//! Minimal concrete components for exercising the runtime in tests.

use std::any::Any;
use std::sync::Arc;

use umbra_graphics::Size;

use crate::descriptor::{ConcreteComponentDescriptor, ConcreteShadowNode};
use crate::family::InstanceHandle;
use crate::layoutable::{LayoutMetrics, LayoutSlot, LayoutableShadowNode};
use crate::node::{
    ShadowNode, ShadowNodeBase, ShadowNodeChildren, SharedShadowNode,
};
use crate::registry::ComponentDescriptorRegistry;

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct PanelProps;

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct PanelState {
    pub generation: u32,
}

/// Layout-capable fixture node.
pub(crate) struct PanelShadowNode {
    base: ShadowNodeBase,
    layout: LayoutSlot,
}

impl ShadowNode for PanelShadowNode {
    fn base(&self) -> &ShadowNodeBase {
        &self.base
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_layoutable(&self) -> Option<&dyn LayoutableShadowNode> {
        Some(self)
    }
}

impl LayoutableShadowNode for PanelShadowNode {
    fn layout_metrics(&self) -> LayoutMetrics {
        self.layout.metrics()
    }

    fn set_size(&self, size: Size) {
        self.base.ensure_unsealed("layout size");
        self.layout.set_size(size);
    }
}

impl ConcreteShadowNode for PanelShadowNode {
    const NAME: &'static str = "Panel";
    type ConcreteState = PanelState;

    fn create(base: ShadowNodeBase) -> Self {
        Self {
            base,
            layout: LayoutSlot::new(),
        }
    }

    fn clone_with_base(&self, base: ShadowNodeBase) -> Self {
        Self {
            base,
            layout: self.layout.clone(),
        }
    }
}

/// Fixture node with no layout capability (an annotation-only node).
pub(crate) struct MarkerShadowNode {
    base: ShadowNodeBase,
}

impl ShadowNode for MarkerShadowNode {
    fn base(&self) -> &ShadowNodeBase {
        &self.base
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl ConcreteShadowNode for MarkerShadowNode {
    const NAME: &'static str = "Marker";
    type ConcreteState = ();

    fn create(base: ShadowNodeBase) -> Self {
        Self { base }
    }

    fn clone_with_base(&self, base: ShadowNodeBase) -> Self {
        Self { base }
    }
}

pub(crate) fn test_registry() -> Arc<ComponentDescriptorRegistry> {
    let mut registry = ComponentDescriptorRegistry::new();
    registry.register(Arc::new(ConcreteComponentDescriptor::<PanelShadowNode>::new()));
    registry.register(Arc::new(ConcreteComponentDescriptor::<MarkerShadowNode>::new()));
    Arc::new(registry)
}

pub(crate) fn panel_node(
    registry: &Arc<ComponentDescriptorRegistry>,
    handle: InstanceHandle,
    children: ShadowNodeChildren,
) -> SharedShadowNode {
    registry
        .build_node("Panel", handle, Arc::new(PanelProps::default()), children)
        .expect("build panel fixture")
}

pub(crate) fn marker_node(
    registry: &Arc<ComponentDescriptorRegistry>,
    handle: InstanceHandle,
) -> SharedShadowNode {
    registry
        .build_node(
            "Marker",
            handle,
            Arc::new(PanelProps::default()),
            ShadowNodeChildren::new(),
        )
        .expect("build marker fixture")
}
