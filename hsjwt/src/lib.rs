//! This crate issues and verifies compact JSON Web Tokens (JWT), [RFC7519][],
//! signed with HMAC using SHA-256 (HS256), [RFC7518][].
//!
//! Every token carries the header `{"alg":"HS256","typ":"JWT"}`. On the way
//! back in, the header's `alg` is checked against an allow-list holding
//! only HS256 before any signature is computed, so tokens naming `none`,
//! an asymmetric algorithm, or another HMAC strength are rejected as
//! [`UnsupportedAlgorithm`][error::UnsupportedAlgorithm] and never reach
//! the signature check. Signatures are compared in constant time.
//!
//! Nothing is held between calls. The shared secret is passed in on every
//! call, and the claims are opaque: checks on expiry, audience, or issuer
//! are left to the caller.
//!
//! JSON Web Encryption (JWE), [RFC7516][], and asymmetric algorithms are not
//! supported.
//!
//! [RFC7516]: https://tools.ietf.org/html/rfc7516
//! [RFC7518]: https://tools.ietf.org/html/rfc7518
//! [RFC7519]: https://tools.ietf.org/html/rfc7519
//!
//! # Example
//!
//! ```
//! use hsjwt::ClaimSet;
//!
//! let claims = ClaimSet::new()
//!     .with_claim("sub", "Aliri")
//!     .with_claim("admin", true);
//!
//! let token = hsjwt::sign("a key", &claims).unwrap();
//! let verified = hsjwt::parse("a key", token.as_str()).unwrap();
//! assert_eq!(verified, claims);
//!
//! let err = hsjwt::parse("another key", token.as_str()).unwrap_err();
//! assert!(err.is_signature_mismatch());
//! ```
//!
//! Tokens from elsewhere are held to the same rules:
//!
//! ```
//! let token = concat!(
//!     "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.",
//!     "eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IkpvaG4gRG9lIiwiaWF0IjoxNTE2MjM5MDIyfQ.",
//!     "SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c"
//! );
//!
//! let claims = hsjwt::parse("your-256-bit-secret", token).unwrap();
//! assert_eq!(claims.get_as::<String>("name").unwrap().as_deref(), Some("John Doe"));
//!
//! let unsigned = "eyJhbGciOiJub25lIn0.eyJzdWIiOiJBbGlyaSJ9.";
//! let err = hsjwt::parse("your-256-bit-secret", unsigned).unwrap_err();
//! assert_eq!(err.rejected_algorithm(), Some("none"));
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    unused_import_braces,
    unused_imports,
    unused_qualifications
)]
#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_must_use
)]

pub mod b64;
pub mod claims;
pub mod error;
pub mod hmac;
pub mod jwa;
pub mod jwt;

#[cfg(test)]
pub(crate) mod test;

#[doc(inline)]
pub use claims::ClaimSet;
#[doc(inline)]
pub use error::{SigningError, VerifyError};
#[doc(inline)]
pub use hmac::Hmac;
#[doc(inline)]
pub use jwt::{parse, sign, Jwt, JwtRef};
