//! Common errors

#![allow(missing_copy_implementations)]

use std::error::Error as StdError;

use thiserror::Error;

/// A token segment is not valid unpadded base64url
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid base64url segment")]
pub struct MalformedSegment {
    #[from]
    source: base64::DecodeError,
}

/// The JWT is malformed and cannot be split into header, payload, and signature sections
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
#[error("malformed JWT")]
pub struct MalformedJwt {
    _p: (),
}

pub(crate) const fn malformed_jwt() -> MalformedJwt {
    MalformedJwt { _p: () }
}

/// The JWT header section is malformed
#[derive(Debug, Error)]
#[error("malformed JWT header")]
pub struct MalformedJwtHeader {
    #[from]
    source: Box<dyn StdError + Send + Sync + 'static>,
}

pub(crate) fn malformed_jwt_header(
    source: impl Into<Box<dyn StdError + Send + Sync + 'static>>,
) -> MalformedJwtHeader {
    MalformedJwtHeader {
        source: source.into(),
    }
}

/// The JWT payload section is malformed
#[derive(Debug, Error)]
#[error("malformed JWT payload")]
pub struct MalformedJwtPayload {
    #[from]
    source: Box<dyn StdError + Send + Sync + 'static>,
}

pub(crate) fn malformed_jwt_payload(
    source: impl Into<Box<dyn StdError + Send + Sync + 'static>>,
) -> MalformedJwtPayload {
    MalformedJwtPayload {
        source: source.into(),
    }
}

/// The JWT header names a signing algorithm other than HS256
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("unsupported signing algorithm '{alg}'")]
pub struct UnsupportedAlgorithm {
    alg: String,
}

impl UnsupportedAlgorithm {
    /// The algorithm identifier exactly as it appeared in the header
    #[must_use]
    pub fn alg(&self) -> &str {
        &self.alg
    }
}

#[inline]
pub(crate) fn unsupported_algorithm(alg: impl Into<String>) -> UnsupportedAlgorithm {
    UnsupportedAlgorithm { alg: alg.into() }
}

/// The signature did not match
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("signature mismatch")]
pub struct SignatureMismatch {
    _p: (),
}

pub(crate) const fn signature_mismatch() -> SignatureMismatch {
    SignatureMismatch { _p: () }
}

/// The claims could not be represented as a JSON object
#[derive(Debug, Error)]
#[error("claims cannot be serialized as a JSON object")]
pub struct SerializationError {
    #[from]
    source: Box<dyn StdError + Send + Sync + 'static>,
}

pub(crate) fn serialization_error(
    source: impl Into<Box<dyn StdError + Send + Sync + 'static>>,
) -> SerializationError {
    SerializationError {
        source: source.into(),
    }
}

/// An error occurring while signing a JWT
#[derive(Debug, Error)]
pub enum SigningError {
    /// The claims could not be serialized
    #[error(transparent)]
    Serialization(#[from] SerializationError),
}

impl From<std::convert::Infallible> for SigningError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

/// An error occurring while verifying a JWT
///
/// Each failure is terminal for the token it was produced for. Nothing
/// partially decoded is returned alongside it.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// The JWT does not consist of exactly three `.`-separated segments
    #[error(transparent)]
    MalformedToken(#[from] MalformedJwt),

    /// The JWT header could not be decoded or parsed
    #[error(transparent)]
    MalformedHeader(#[from] MalformedJwtHeader),

    /// The JWT header declares an algorithm other than HS256
    #[error(transparent)]
    UnsupportedAlgorithm(#[from] UnsupportedAlgorithm),

    /// The signature does not match the header and payload under the given secret
    #[error(transparent)]
    InvalidSignature(#[from] SignatureMismatch),

    /// The JWT payload could not be decoded or is not a JSON object
    #[error(transparent)]
    MalformedPayload(#[from] MalformedJwtPayload),
}

impl VerifyError {
    /// Whether the token had the wrong number of segments
    #[must_use]
    pub fn is_malformed_token(&self) -> bool {
        matches!(self, Self::MalformedToken(_))
    }

    /// Whether the header could not be decoded
    #[must_use]
    pub fn is_malformed_header(&self) -> bool {
        matches!(self, Self::MalformedHeader(_))
    }

    /// Whether the header declared a rejected algorithm
    #[must_use]
    pub fn is_unsupported_algorithm(&self) -> bool {
        matches!(self, Self::UnsupportedAlgorithm(_))
    }

    /// Whether the error is due to a signature mismatch
    #[must_use]
    pub fn is_signature_mismatch(&self) -> bool {
        matches!(self, Self::InvalidSignature(_))
    }

    /// Whether the payload could not be decoded
    #[must_use]
    pub fn is_malformed_payload(&self) -> bool {
        matches!(self, Self::MalformedPayload(_))
    }

    /// The algorithm named by the header, if that is why the token was rejected
    #[must_use]
    pub fn rejected_algorithm(&self) -> Option<&str> {
        match self {
            Self::UnsupportedAlgorithm(e) => Some(e.alg()),
            _ => None,
        }
    }
}
