//! Tab bar component. Like the toolbar, its height is decided by the native
//! widget, so the measured frame is adopted from state.

use std::any::Any;
use std::sync::Arc;

use umbra_core::{
    downcast_node, require_layoutable, ComponentDescriptor, ComponentName,
    ConcreteComponentDescriptor, ConcreteShadowNode, LayoutMetrics, LayoutSlot,
    LayoutableShadowNode, NodeFamily, Props, ShadowNode, ShadowNodeBase, ShadowNodeChildren,
    ShadowNodeFragment, SharedShadowNode,
};
use umbra_graphics::Size;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TabBarProps {
    pub selected_tab: usize,
    pub scrollable: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TabBarState {
    pub frame_size: Size,
}

pub struct TabBarShadowNode {
    base: ShadowNodeBase,
    layout: LayoutSlot,
}

impl TabBarShadowNode {
    pub fn measured_state(&self) -> TabBarState {
        let state = self
            .base
            .state()
            .unwrap_or_else(|| panic!("tab bar node {} has no state attached", self.handle()));
        state
            .downcast::<TabBarState>()
            .cloned()
            .unwrap_or_else(|| panic!("tab bar node {} carries foreign state", self.handle()))
    }
}

impl ShadowNode for TabBarShadowNode {
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

impl LayoutableShadowNode for TabBarShadowNode {
    fn layout_metrics(&self) -> LayoutMetrics {
        self.layout.metrics()
    }

    fn set_size(&self, size: Size) {
        self.base.ensure_unsealed("layout size");
        self.layout.set_size(size);
    }
}

impl ConcreteShadowNode for TabBarShadowNode {
    const NAME: &'static str = "TabBar";
    type ConcreteState = TabBarState;

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

pub struct TabBarComponentDescriptor {
    inner: ConcreteComponentDescriptor<TabBarShadowNode>,
}

impl TabBarComponentDescriptor {
    pub const fn new() -> Self {
        Self {
            inner: ConcreteComponentDescriptor::new(),
        }
    }
}

impl Default for TabBarComponentDescriptor {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentDescriptor for TabBarComponentDescriptor {
    fn component_name(&self) -> ComponentName {
        self.inner.component_name()
    }

    fn create(
        &self,
        family: Arc<NodeFamily>,
        props: Arc<dyn Props>,
        children: ShadowNodeChildren,
    ) -> SharedShadowNode {
        self.inner.create(family, props, children)
    }

    fn clone_node(
        &self,
        source: &dyn ShadowNode,
        fragment: &ShadowNodeFragment,
    ) -> SharedShadowNode {
        self.inner.clone_node(source, fragment)
    }

    fn adopt(&self, node: &SharedShadowNode) {
        let tab_bar = downcast_node::<TabBarShadowNode>(node.as_ref());
        let layoutable = require_layoutable(node.as_ref());

        let state = tab_bar.measured_state();
        if state.frame_size.width != 0.0 && state.frame_size.height != 0.0 {
            layoutable.set_size(state.frame_size);
        }

        self.inner.adopt(node);
    }
}
