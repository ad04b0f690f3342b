pub mod claims;
pub mod errors;
pub mod handler;

pub use claims::AccessClaims;
pub use claims::ACCESS_TOKEN_EXPIRE_MINUTES;
pub use errors::JwtError;
pub use handler::JwtHandler;
