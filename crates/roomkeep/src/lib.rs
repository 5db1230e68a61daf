//! Top-level facade crate for roomkeep.
//!
//! Re-exports the policy/billing core and the gateway library so users can
//! depend on a single crate.

pub mod core {
    pub use roomkeep_core::*;
}

pub mod gateway {
    pub use roomkeep_gateway::*;
}
