//! # Ports
//!
//! - `inbound` - The contract API callers drive
//! - `outbound` - World state, time and transaction journal the contract depends on

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
