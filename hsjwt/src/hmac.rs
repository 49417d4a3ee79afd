//! HMAC-SHA256 signing and verification

use std::fmt;

use crate::{error, jwa};

/// Computes the HMAC-SHA256 of `message` under `secret`
#[must_use]
pub fn sign(secret: impl AsRef<[u8]>, message: &[u8]) -> Vec<u8> {
    let key = ring::hmac::Key::new(ring::hmac::HMAC_SHA256, secret.as_ref());
    ring::hmac::sign(&key, message).as_ref().to_owned()
}

/// Checks that `signature` is the HMAC-SHA256 of `message` under `secret`
///
/// The comparison runs in constant time with respect to the signature
/// contents. A signature of the wrong length is simply a mismatch.
#[must_use]
pub fn verify(secret: impl AsRef<[u8]>, message: &[u8], signature: &[u8]) -> bool {
    let key = ring::hmac::Key::new(ring::hmac::HMAC_SHA256, secret.as_ref());
    ring::hmac::verify(&key, message, signature).is_ok()
}

/// A JWS signer
pub trait Signer {
    /// The error returned on failure to sign
    type Error: fmt::Debug + fmt::Display + Sync + Send + 'static;

    /// Attempts to sign the data provided using the specified algorithm
    fn sign(&self, alg: jwa::Algorithm, data: &[u8]) -> Result<Vec<u8>, Self::Error>;
}

/// A JWS verifier
pub trait Verifier {
    /// Attempts to verify the data against the signature using the
    /// specified algorithm
    ///
    /// # Errors
    ///
    /// Returns an error if the signature does not match.
    fn verify(
        &self,
        alg: jwa::Algorithm,
        data: &[u8],
        signature: &[u8],
    ) -> Result<(), error::SignatureMismatch>;
}

/// HMAC shared secret
///
/// The secret is supplied by the caller and is never printed.
#[derive(Clone, PartialEq, Eq)]
#[must_use]
pub struct Hmac {
    secret: Vec<u8>,
}

impl fmt::Debug for Hmac {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Hmac { secret }")
    }
}

impl Hmac {
    /// HMAC using the provided secret
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    fn key(&self, alg: jwa::Algorithm) -> ring::hmac::Key {
        ring::hmac::Key::new(alg.into_ring_algorithm(), &self.secret)
    }
}

impl From<&'_ [u8]> for Hmac {
    fn from(secret: &[u8]) -> Self {
        Self::new(secret)
    }
}

impl From<&'_ str> for Hmac {
    fn from(secret: &str) -> Self {
        Self::new(secret)
    }
}

impl From<Vec<u8>> for Hmac {
    fn from(secret: Vec<u8>) -> Self {
        Self::new(secret)
    }
}

impl Signer for Hmac {
    type Error = std::convert::Infallible;

    fn sign(&self, alg: jwa::Algorithm, data: &[u8]) -> Result<Vec<u8>, Self::Error> {
        let digest = ring::hmac::sign(&self.key(alg), data);
        Ok(digest.as_ref().to_owned())
    }
}

impl Verifier for Hmac {
    fn verify(
        &self,
        alg: jwa::Algorithm,
        data: &[u8],
        signature: &[u8],
    ) -> Result<(), error::SignatureMismatch> {
        ring::hmac::verify(&self.key(alg), data, signature)
            .map_err(|_| error::signature_mismatch())
    }
}

impl<T> Signer for &'_ T
where
    T: Signer + ?Sized,
{
    type Error = T::Error;

    #[inline]
    fn sign(&self, alg: jwa::Algorithm, data: &[u8]) -> Result<Vec<u8>, Self::Error> {
        T::sign(&**self, alg, data)
    }
}

impl<T> Verifier for &'_ T
where
    T: Verifier + ?Sized,
{
    #[inline]
    fn verify(
        &self,
        alg: jwa::Algorithm,
        data: &[u8],
        signature: &[u8],
    ) -> Result<(), error::SignatureMismatch> {
        T::verify(&**self, alg, data, signature)
    }
}
