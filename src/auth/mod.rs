//! Session authentication
//!
//! Server-side token store plus the route guard that resolves the session
//! cookie to a user id.

pub mod middleware;
pub mod session;

pub use middleware::{CurrentUser, require_session};
pub use session::SessionStore;

/// Cookie carrying the opaque session token
pub const SESSION_COOKIE: &str = "tastebook_session";
