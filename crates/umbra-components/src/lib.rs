//! Built-in components for the Umbra shadow tree.
//!
//! Each component contributes a concrete shadow node type and the descriptor
//! the tree pipeline routes it through. The measured bar components (toolbar,
//! tab bar) are where late native measurements meet the declarative tree: see
//! their descriptors' adoption hooks.

mod tab_bar;
mod toolbar;
mod view;

pub use tab_bar::*;
pub use toolbar::*;
pub use view::*;

use std::sync::Arc;

use umbra_core::ComponentDescriptorRegistry;

/// Registers every built-in component descriptor. Hosts call this once while
/// assembling their registry at startup.
pub fn register_builtin_components(registry: &mut ComponentDescriptorRegistry) {
    registry.register(Arc::new(ViewComponentDescriptor::new()));
    registry.register(Arc::new(ToolbarComponentDescriptor::new()));
    registry.register(Arc::new(TabBarComponentDescriptor::new()));
}
