//! Session token claims, verification, and development token minting.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::Claims;
pub use decoder::JwtIdentityVerifier;
pub use encoder::JwtEncoder;
