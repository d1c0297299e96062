//! Plain container view: the baseline layout-capable component.

use std::any::Any;

use umbra_core::{
    ConcreteComponentDescriptor, ConcreteShadowNode, LayoutMetrics, LayoutSlot,
    LayoutableShadowNode, ShadowNode, ShadowNodeBase,
};
use umbra_graphics::{Color, Size};

#[derive(Clone, Debug, PartialEq)]
pub struct ViewProps {
    pub background_color: Option<Color>,
    pub opacity: f32,
}

impl Default for ViewProps {
    fn default() -> Self {
        Self {
            background_color: None,
            opacity: 1.0,
        }
    }
}

pub struct ViewShadowNode {
    base: ShadowNodeBase,
    layout: LayoutSlot,
}

impl ShadowNode for ViewShadowNode {
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

impl LayoutableShadowNode for ViewShadowNode {
    fn layout_metrics(&self) -> LayoutMetrics {
        self.layout.metrics()
    }

    fn set_size(&self, size: Size) {
        self.base.ensure_unsealed("layout size");
        self.layout.set_size(size);
    }
}

impl ConcreteShadowNode for ViewShadowNode {
    const NAME: &'static str = "View";
    type ConcreteState = ();

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

/// Views need no adoption behavior of their own; the generic descriptor is
/// the whole policy.
pub type ViewComponentDescriptor = ConcreteComponentDescriptor<ViewShadowNode>;
