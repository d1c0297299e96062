//! Registry mapping component type names to their descriptors.
//!
//! Populated once at startup; from then on the registry is the only route by
//! which the tree pipeline reaches component policy, so a node declared with
//! a given component identifier is guaranteed to meet the matching
//! descriptor's type expectations.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::descriptor::ComponentDescriptor;
use crate::family::{InstanceHandle, NodeFamily};
use crate::node::{ComponentName, Props, ShadowNodeChildren, SharedShadowNode};
use crate::TreeError;

#[derive(Default)]
pub struct ComponentDescriptorRegistry {
    descriptors: FxHashMap<ComponentName, Arc<dyn ComponentDescriptor>>,
}

impl ComponentDescriptorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a descriptor under its component name. Registering two
    /// descriptors for one name is a startup wiring bug and fatal.
    pub fn register(&mut self, descriptor: Arc<dyn ComponentDescriptor>) {
        let name = descriptor.component_name();
        let previous = self.descriptors.insert(name, descriptor);
        assert!(previous.is_none(), "component {name} registered twice");
    }

    pub fn descriptor(&self, name: &str) -> Result<&Arc<dyn ComponentDescriptor>, TreeError> {
        self.descriptors
            .get(name)
            .ok_or_else(|| TreeError::UnknownComponent {
                name: name.to_string(),
            })
    }

    /// Node construction machinery keyed by component type name: builds the
    /// family and node, then runs the component's adoption hook.
    pub fn build_node(
        &self,
        name: &str,
        handle: InstanceHandle,
        props: Arc<dyn Props>,
        children: ShadowNodeChildren,
    ) -> Result<SharedShadowNode, TreeError> {
        let descriptor = self.descriptor(name)?;
        let family = Arc::new(NodeFamily::new(descriptor.component_name(), handle));
        let node = descriptor.create(family, props, children);
        descriptor.adopt(&node);
        Ok(node)
    }
}
