pub mod audit;
pub mod codec;
pub mod entities;
pub mod errors;

pub use audit::*;
pub use codec::*;
pub use entities::*;
pub use errors::*;
