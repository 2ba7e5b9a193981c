//! Presentation Layer

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AuthAppState;
pub use middleware::{AuthGateState, require_auth};
pub use router::{auth_router, auth_router_generic};
