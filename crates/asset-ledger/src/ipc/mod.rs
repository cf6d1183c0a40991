//! # IPC Layer
//!
//! Named-function invocation of the ledger contract. A host hands over a
//! function name plus positional string arguments and receives a string
//! payload or a classified failure.

pub mod dispatcher;
pub mod payloads;

pub use dispatcher::*;
pub use payloads::*;
