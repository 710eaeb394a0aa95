//! Authentication
//!
//! JWT issuing/validation and the Axum middleware that guards the API.

pub mod jwt;
pub mod middleware;

pub use jwt::{Claims, CurrentUser, JwtError, JwtService};
pub use middleware::{require_admin, require_auth};
