//! Authentication utilities library
//!
//! Provides the authentication infrastructure for the marketplace service:
//! - Password hashing (Argon2id)
//! - Access/refresh token issuance and validation (HMAC-signed JWTs)
//! - Token lifetime ("TTL") string parsing
//!
//! Access and refresh tokens are signed with two independent keys so that a
//! leaked key only compromises one token class. Keys and lifetimes are plain
//! constructor arguments: they are loaded once from configuration at startup
//! and never mutated afterwards.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! ```
//!
//! ## Tokens
//! ```
//! use auth::TokenIssuer;
//! use auth::ttl::parse_ttl;
//!
//! let issuer = TokenIssuer::new(
//!     b"access_key_at_least_32_bytes_long!!",
//!     b"refresh_key_at_least_32_bytes_long!",
//!     parse_ttl("15m").unwrap(),
//!     parse_ttl("24h").unwrap(),
//! );
//!
//! let tokens = issuer.create_token_pair("user123").unwrap();
//! let user_id = issuer.parse_access_token(&tokens.access_token).unwrap();
//! assert_eq!(user_id, "user123");
//! ```

pub mod password;
pub mod token;
pub mod ttl;

pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::IssuedTokens;
pub use token::TokenError;
pub use token::TokenIssuer;
pub use ttl::TtlError;
