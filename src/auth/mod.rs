//! Authentication and authorization module

pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{Claims, JwtService, TOKEN_TTL_SECS};
pub use middleware::{extract_token, jwt_auth_middleware, role_gate, AuthContext};
pub use password::PasswordHasher;
