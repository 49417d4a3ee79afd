//! The claims carried in a token payload

use std::{collections::btree_map, collections::BTreeMap, iter::FromIterator};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::{error, hmac, jwt};

mod finite;

use finite::Finite;

/// A set of claims keyed by name
///
/// Claims are an unordered mapping from string names to arbitrary JSON
/// values: strings, numbers, booleans, null, arrays, or nested objects.
/// Each name appears at most once; inserting a claim under an existing
/// name replaces the previous value.
///
/// Claims are held sorted by name, so a given set always serializes to
/// the same bytes regardless of the order in which claims were added.
/// Order carries no meaning, and two sets with the same claims compare
/// equal.
///
/// This crate attaches no meaning to any claim. Checks on expiry,
/// audience, issuer, or anything else are left to the caller.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
#[must_use]
pub struct ClaimSet(BTreeMap<String, Value>);

impl ClaimSet {
    /// Constructs a new, empty claim set
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Constructs a claim set from any value that serializes as a JSON object
    ///
    /// # Errors
    ///
    /// Returns an error if `value` fails to serialize, contains a NaN or
    /// infinite float, or serializes to something other than a JSON object.
    pub fn from_serializable<T>(value: &T) -> Result<Self, error::SerializationError>
    where
        T: Serialize + ?Sized,
    {
        match serde_json::to_value(Finite(value)).map_err(error::serialization_error)? {
            Value::Object(map) => Ok(map.into_iter().collect()),
            other => Err(error::serialization_error(format!(
                "expected a JSON object, found {}",
                json_kind(&other)
            ))),
        }
    }

    /// Converts the claim set into a caller-defined type
    ///
    /// # Errors
    ///
    /// Returns an error if the claims do not match the shape of `T`.
    pub fn deserialize_into<T>(self) -> Result<T, serde_json::Error>
    where
        T: DeserializeOwned,
    {
        serde_json::from_value(Value::Object(self.0.into_iter().collect()))
    }

    /// Adds a claim, returning the updated set
    ///
    /// Conversion into [`Value`] maps a NaN or infinite float to `null`.
    /// Use [`try_with_claim`][Self::try_with_claim] to have such values
    /// rejected instead.
    pub fn with_claim(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Adds a claim from any serializable value, returning the updated set
    ///
    /// # Errors
    ///
    /// Returns an error if `value` fails to serialize or contains a NaN or
    /// infinite float.
    pub fn try_with_claim<T>(
        mut self,
        name: impl Into<String>,
        value: &T,
    ) -> Result<Self, error::SerializationError>
    where
        T: Serialize + ?Sized,
    {
        let value = serde_json::to_value(Finite(value)).map_err(error::serialization_error)?;
        self.0.insert(name.into(), value);
        Ok(self)
    }

    /// Adds a claim, returning the value previously held under that name
    ///
    /// As with [`with_claim`][Self::with_claim], a NaN or infinite float
    /// is stored as `null`.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(name.into(), value.into())
    }

    /// The value of the named claim
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// The named claim, deserialized into `T`
    ///
    /// Returns `None` if the claim is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the claim is present but is not a valid `T`.
    pub fn get_as<T>(&self, name: &str) -> Result<Option<T>, serde_json::Error>
    where
        T: DeserializeOwned,
    {
        self.0.get(name).map(T::deserialize).transpose()
    }

    /// Removes the named claim, returning its value
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.remove(name)
    }

    /// Whether the named claim is present
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// The number of claims in the set
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set holds no claims
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the claims by name
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.0.iter())
    }

    /// Produces a signed JWT carrying these claims
    ///
    /// # Errors
    ///
    /// Returns an error if a claim value cannot be serialized.
    pub fn sign<K>(&self, key: &K) -> Result<jwt::Jwt, error::SigningError>
    where
        K: hmac::Signer + ?Sized,
        error::SigningError: From<K::Error>,
    {
        jwt::Jwt::sign_claims(key, self)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// An iterator over the claims in a [`ClaimSet`]
#[derive(Clone, Debug)]
pub struct Iter<'a>(btree_map::Iter<'a, String, Value>);

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Value);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, v)| (k.as_str(), v))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a> IntoIterator for &'a ClaimSet {
    type Item = (&'a str, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for ClaimSet {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K, V> FromIterator<(K, V)> for ClaimSet
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K, V> Extend<(K, V)> for ClaimSet
where
    K: Into<String>,
    V: Into<Value>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.0
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::Result;
    use serde_json::json;

    use super::*;

    #[test]
    fn serialization_ignores_insertion_order() -> Result<()> {
        let a = ClaimSet::new()
            .with_claim("sub", "Aliri")
            .with_claim("admin", true)
            .with_claim("n", 3);
        let b = ClaimSet::new()
            .with_claim("n", 3)
            .with_claim("sub", "Aliri")
            .with_claim("admin", true);

        assert_eq!(a, b);
        assert_eq!(serde_json::to_string(&a)?, serde_json::to_string(&b)?);
        assert_eq!(
            serde_json::to_string(&a)?,
            r#"{"admin":true,"n":3,"sub":"Aliri"}"#
        );
        Ok(())
    }

    #[test]
    fn insert_replaces_existing_claim() {
        let mut claims = ClaimSet::new();
        assert_eq!(claims.insert("Some", "Value"), None);
        assert_eq!(claims.insert("Some", "Values"), Some(json!("Value")));
        assert_eq!(claims.len(), 1);
        assert_eq!(claims.get("Some"), Some(&json!("Values")));
    }

    #[test]
    fn holds_nested_values() -> Result<()> {
        let claims = ClaimSet::new()
            .with_claim("roles", json!(["read", "write"]))
            .with_claim("meta", json!({ "depth": { "level": 2 }, "none": null }));

        let round: ClaimSet = serde_json::from_str(&serde_json::to_string(&claims)?)?;
        assert_eq!(round, claims);
        assert_eq!(
            claims.get_as::<Vec<String>>("roles")?,
            Some(vec!["read".to_owned(), "write".to_owned()])
        );
        Ok(())
    }

    #[test]
    fn get_as_distinguishes_absent_from_mistyped() {
        let claims = ClaimSet::new().with_claim("exp", "soon");
        assert!(claims.get_as::<u64>("iat").unwrap().is_none());
        assert!(claims.get_as::<u64>("exp").is_err());
    }

    #[test]
    fn removes_claims() {
        let mut claims: ClaimSet = vec![("a", 1), ("b", 2)].into_iter().collect();
        assert!(claims.contains("a"));
        assert_eq!(claims.remove("a"), Some(json!(1)));
        assert!(!claims.contains("a"));
        assert_eq!(claims.remove("a"), None);
        assert_eq!(claims.len(), 1);
    }

    #[test]
    fn iterates_in_name_order() {
        let mut claims = ClaimSet::new();
        claims.extend(vec![("z", 1), ("a", 2), ("m", 3)]);
        let names: Vec<&str> = claims.iter().map(|(k, _)| k).collect();
        assert_eq!(names, ["a", "m", "z"]);
    }

    #[test]
    fn only_objects_deserialize() {
        assert!(serde_json::from_str::<ClaimSet>("[1, 2]").is_err());
        assert!(serde_json::from_str::<ClaimSet>(r#""claims""#).is_err());
        assert!(serde_json::from_str::<ClaimSet>("null").is_err());
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Session {
        sub: String,
        admin: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        exp: Option<u64>,
    }

    #[test]
    fn converts_to_and_from_caller_types() -> Result<()> {
        let session = Session {
            sub: "Aliri".into(),
            admin: false,
            exp: None,
        };

        let claims = ClaimSet::from_serializable(&session)?;
        assert_eq!(claims.len(), 2);
        assert_eq!(claims.get("sub"), Some(&json!("Aliri")));

        let back: Session = claims.deserialize_into()?;
        assert_eq!(back, session);
        Ok(())
    }

    #[derive(Serialize)]
    struct Reading {
        x: f64,
    }

    #[test]
    fn non_finite_floats_are_not_claims() {
        for x in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY].iter().copied() {
            assert!(ClaimSet::from_serializable(&Reading { x }).is_err(), "{}", x);
            assert!(ClaimSet::new().try_with_claim("x", &x).is_err(), "{}", x);
        }

        let mut nested = BTreeMap::new();
        nested.insert("x", vec![0.5, f64::NAN]);
        assert!(ClaimSet::from_serializable(&nested).is_err());
    }

    #[test]
    fn try_with_claim_accepts_finite_values() -> Result<()> {
        let claims = ClaimSet::new()
            .try_with_claim("x", &0.1)?
            .try_with_claim("roles", &["read", "write"])?;
        assert_eq!(claims.get("x"), Some(&json!(0.1)));
        assert_eq!(claims.get("roles"), Some(&json!(["read", "write"])));
        Ok(())
    }

    #[test]
    fn infallible_builder_maps_non_finite_to_null() {
        let claims = ClaimSet::new().with_claim("x", f64::NAN);
        assert_eq!(claims.get("x"), Some(&Value::Null));
    }

    #[test]
    fn non_object_values_are_not_claim_sets() {
        let err = ClaimSet::from_serializable(&vec![1, 2, 3]).unwrap_err();
        assert_eq!(
            std::error::Error::source(&err).map(ToString::to_string),
            Some("expected a JSON object, found an array".to_owned())
        );
        assert!(ClaimSet::from_serializable("text").is_err());
    }
}
