//! Toolbar component: a native bar that measures itself on the platform's UI
//! thread and reports the result back through the state channel.
//!
//! The shadow tree cannot know the bar's height up front (it depends on
//! platform theme, font scale, and the native widget's own measure pass), so
//! the toolbar is described unsized and the measured frame arrives later as a
//! [`ToolbarState`] snapshot. The descriptor's adoption hook fuses that
//! snapshot into the node's layout facet on every construction/clone, before
//! the node is sealed into a committed tree.

use std::any::Any;
use std::sync::Arc;

use umbra_core::{
    downcast_node, require_layoutable, ComponentDescriptor, ComponentName,
    ConcreteComponentDescriptor, ConcreteShadowNode, LayoutMetrics, LayoutSlot,
    LayoutableShadowNode, NodeFamily, Props, ShadowNode, ShadowNodeBase, ShadowNodeChildren,
    ShadowNodeFragment, SharedShadowNode,
};
use umbra_graphics::{Color, Size};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToolbarProps {
    pub title: String,
    pub bar_tint_color: Option<Color>,
}

/// Externally measured facts about one toolbar instance. `Size::ZERO` in
/// either dimension means the native widget has not been measured yet.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToolbarState {
    pub frame_size: Size,
}

pub struct ToolbarShadowNode {
    base: ShadowNodeBase,
    layout: LayoutSlot,
}

impl ToolbarShadowNode {
    /// Typed snapshot of the measured state. A toolbar node carrying a
    /// different state type means the construction pipeline attached the
    /// wrong snapshot, which is fatal.
    pub fn measured_state(&self) -> ToolbarState {
        let state = self
            .base
            .state()
            .unwrap_or_else(|| panic!("toolbar node {} has no state attached", self.handle()));
        state
            .downcast::<ToolbarState>()
            .cloned()
            .unwrap_or_else(|| panic!("toolbar node {} carries foreign state", self.handle()))
    }
}

impl ShadowNode for ToolbarShadowNode {
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

impl LayoutableShadowNode for ToolbarShadowNode {
    fn layout_metrics(&self) -> LayoutMetrics {
        self.layout.metrics()
    }

    fn set_size(&self, size: Size) {
        self.base.ensure_unsealed("layout size");
        self.layout.set_size(size);
    }
}

impl ConcreteShadowNode for ToolbarShadowNode {
    const NAME: &'static str = "Toolbar";
    type ConcreteState = ToolbarState;

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

/// Descriptor for the toolbar component. Construction and cloning are the
/// generic policy; adoption additionally pushes a completed native
/// measurement into the node's layout facet.
pub struct ToolbarComponentDescriptor {
    inner: ConcreteComponentDescriptor<ToolbarShadowNode>,
}

impl ToolbarComponentDescriptor {
    pub const fn new() -> Self {
        Self {
            inner: ConcreteComponentDescriptor::new(),
        }
    }
}

impl Default for ToolbarComponentDescriptor {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentDescriptor for ToolbarComponentDescriptor {
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
        let toolbar = downcast_node::<ToolbarShadowNode>(node.as_ref());
        let layoutable = require_layoutable(node.as_ref());

        let state = toolbar.measured_state();
        // A zero dimension means "not measured yet": keep whatever size the
        // node already has rather than collapsing it.
        if state.frame_size.width != 0.0 && state.frame_size.height != 0.0 {
            log::trace!(
                "toolbar {} adopts measured size {}x{}",
                node.handle(),
                state.frame_size.width,
                state.frame_size.height
            );
            layoutable.set_size(state.frame_size);
        }

        self.inner.adopt(node);
    }
}
