//! Layout facet: the capability letting a shadow node participate in the
//! layout engine's size/position computation.

use std::sync::RwLock;

use umbra_graphics::{EdgeInsets, Rect, Size};

use crate::node::ShadowNode;

/// Layout-facing metadata of one node. The frame is relative to the parent.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct LayoutMetrics {
    pub frame: Rect,
    pub content_insets: EdgeInsets,
}

/// Capability view over a layout-capable shadow node.
///
/// `set_size` overrides the node's intrinsic size ahead of the layout pass
/// and is valid only while the owning node is unsealed; afterwards it panics.
pub trait LayoutableShadowNode {
    fn layout_metrics(&self) -> LayoutMetrics;

    fn set_size(&self, size: Size);
}

/// Interior-mutable layout storage embedded in layout-capable nodes.
///
/// The slot itself does not know about sealing; the owning node checks its
/// seal before writing (it owns the seal bit, the slot does not).
#[derive(Debug, Default)]
pub struct LayoutSlot {
    metrics: RwLock<LayoutMetrics>,
}

impl LayoutSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn metrics(&self) -> LayoutMetrics {
        *self.metrics.read().expect("layout metrics lock poisoned")
    }

    pub fn set_size(&self, size: Size) {
        let mut metrics = self.metrics.write().expect("layout metrics lock poisoned");
        metrics.frame.width = size.width;
        metrics.frame.height = size.height;
    }
}

impl Clone for LayoutSlot {
    fn clone(&self) -> Self {
        Self {
            metrics: RwLock::new(self.metrics()),
        }
    }
}

/// Capability-checked view of `node` as layout-capable.
///
/// Components whose nodes are layoutable by definition use this at adoption
/// time; a miss there means the component was wired up wrong, which is fatal.
pub fn require_layoutable(node: &dyn ShadowNode) -> &dyn LayoutableShadowNode {
    node.as_layoutable().unwrap_or_else(|| {
        panic!(
            "{} shadow node does not support layout",
            node.component_name()
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::InstanceHandle;
    use crate::node::ShadowNodeChildren;
    use crate::testing::{marker_node, panel_node, test_registry};

    #[test]
    fn set_size_rewrites_the_frame_dimensions_only() {
        let slot = LayoutSlot::new();
        slot.set_size(Size::new(120.0, 40.0));

        let metrics = slot.metrics();
        assert_eq!(metrics.frame.width, 120.0);
        assert_eq!(metrics.frame.height, 40.0);
        assert_eq!(metrics.frame.origin(), umbra_graphics::Point::ZERO);
    }

    #[test]
    fn cloned_slots_do_not_alias() {
        let slot = LayoutSlot::new();
        slot.set_size(Size::new(10.0, 10.0));
        let copy = slot.clone();
        slot.set_size(Size::new(99.0, 99.0));
        assert_eq!(copy.metrics().frame.width, 10.0);
    }

    #[test]
    fn require_layoutable_passes_for_layout_capable_nodes() {
        let registry = test_registry();
        let node = panel_node(&registry, InstanceHandle(1), ShadowNodeChildren::new());
        let layoutable = require_layoutable(node.as_ref());
        assert_eq!(layoutable.layout_metrics(), LayoutMetrics::default());
    }

    #[test]
    #[should_panic(expected = "does not support layout")]
    fn require_layoutable_on_incapable_node_is_fatal() {
        let registry = test_registry();
        let node = marker_node(&registry, InstanceHandle(1));
        require_layoutable(node.as_ref());
    }
}
