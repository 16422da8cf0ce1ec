//! Auth-domain identifiers and scope sets.

pub mod id;
pub mod scope;

pub use id::*;
pub use scope::*;
