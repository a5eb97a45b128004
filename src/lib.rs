//! Session-level API for drawing routes on a map and querying shortest paths.
//!
//! The heavy lifting lives in `routegraph_core`; this crate ties the route
//! store, the latest compiled graph and the endpoint selection together the
//! way a map front-end drives them.

mod error;
mod session;

pub use error::SessionError;
pub use session::Session;
