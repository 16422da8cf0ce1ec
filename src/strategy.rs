//! Strategy-facing descriptors (data), issuer parsing, redirect routes, and the middleware
//! hand-off format.
//!
//! `descriptor` exposes the validated [`AuthStrategyDescriptor`] covering issuer-derived
//! endpoints, token policy, scopes, and PKCE. `redirect` holds the application routes the web
//! layer uses for unauthenticated requests. `middleware` renders both into the options shape
//! auth middlewares read.

pub mod descriptor;
pub mod issuer;
pub mod middleware;
pub mod redirect;

pub use descriptor::*;
pub use issuer::*;
pub use middleware::*;
pub use redirect::*;
