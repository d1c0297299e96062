//! Shadow tree runtime for Umbra.
//!
//! A shadow tree is an off-screen, declarative representation of a view
//! hierarchy. Trees are built and re-cloned off the platform's UI thread,
//! then committed; a committed (sealed) node is immutable and safe to share
//! across threads. This crate provides the node/descriptor/registry runtime
//! plus the state-update channel through which externally observed facts
//! (typically native view measurements) are adopted into freshly cloned
//! nodes before they are sealed.

mod descriptor;
mod family;
mod layoutable;
mod node;
mod registry;
mod seal;
mod state;
mod tree;
mod updates;

#[cfg(test)]
mod testing;

pub use descriptor::*;
pub use family::*;
pub use layoutable::*;
pub use node::*;
pub use registry::*;
pub use seal::*;
pub use state::*;
pub use tree::*;
pub use updates::*;

/// Recoverable tree-manipulation errors: bad input data, as opposed to the
/// fatal contract violations that panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    UnknownComponent { name: String },
    UnknownHandle { handle: InstanceHandle },
}

impl std::fmt::Display for TreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TreeError::UnknownComponent { name } => {
                write!(f, "no descriptor registered for component {name}")
            }
            TreeError::UnknownHandle { handle } => {
                write!(f, "node {handle} is not in the committed tree")
            }
        }
    }
}

impl std::error::Error for TreeError {}
