use std::sync::Arc;
use std::thread;

use umbra_components::{register_builtin_components, ToolbarProps, ToolbarState, ViewProps};
use umbra_core::{
    require_layoutable, state_update_channel, ComponentDescriptorRegistry, InstanceHandle,
    ShadowNodeChildren, ShadowTree,
};
use umbra_graphics::Size;

const ROOT: InstanceHandle = InstanceHandle(1);
const TOOLBAR: InstanceHandle = InstanceHandle(2);

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Umbra Headless Example ===");
    println!("Builds a shadow tree with an unmeasured toolbar, publishes a");
    println!("native measurement from a worker thread, and applies it.");
    println!();

    let mut registry = ComponentDescriptorRegistry::new();
    register_builtin_components(&mut registry);
    let registry = Arc::new(registry);

    let toolbar = registry
        .build_node(
            "Toolbar",
            TOOLBAR,
            Arc::new(ToolbarProps {
                title: "Inbox".to_string(),
                ..ToolbarProps::default()
            }),
            ShadowNodeChildren::new(),
        )
        .expect("build toolbar");
    let root = registry
        .build_node(
            "View",
            ROOT,
            Arc::new(ViewProps::default()),
            std::iter::once(toolbar).collect(),
        )
        .expect("build root");
    let tree = ShadowTree::new(Arc::clone(&registry), root);

    let before = require_layoutable(tree.find(TOOLBAR).expect("toolbar").as_ref())
        .layout_metrics()
        .frame;
    println!("before measurement: {}x{}", before.width, before.height);

    let (sender, queue) = state_update_channel();
    let measurer = thread::spawn(move || {
        // Stands in for the platform widget measuring itself on the UI thread.
        sender.publish(
            TOOLBAR,
            ToolbarState {
                frame_size: Size::new(360.0, 56.0),
            },
        );
    });
    measurer.join().expect("measurement thread");

    let applied = tree.apply_state_updates(&queue).expect("apply updates");
    log::info!("applied {applied} state update(s), tree now at r{}", tree.revision());

    let toolbar = tree.find(TOOLBAR).expect("toolbar");
    let after = require_layoutable(toolbar.as_ref()).layout_metrics().frame;
    println!("after measurement:  {}x{}", after.width, after.height);
}
