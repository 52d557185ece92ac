// src/polynomial/serialization.rs
//
// Polynomials are stored as {"terms": {"<exponent>": coefficient, ...}}.
// Loading goes through the usual constructor so zero coefficients in the
// input never end up stored.

use std::collections::BTreeMap;
use serde::de::DeserializeOwned;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use crate::polynomial::coefficient::Coefficient;
use crate::polynomial::polynomial::Polynomial;

impl<T: Serialize> Serialize for Polynomial<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Polynomial", 1)?;
        state.serialize_field("terms", &self.terms)?;
        state.end()
    }
}

#[derive(Deserialize)]
struct PolynomialRepr<T> {
    terms: BTreeMap<usize, T>,
}

impl<'de, T> Deserialize<'de> for Polynomial<T>
where
    T: Coefficient + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = PolynomialRepr::<T>::deserialize(deserializer)?;
        Ok(Polynomial::from_terms(repr.terms))
    }
}

pub fn to_json<T: Serialize>(polynomial: &Polynomial<T>) -> serde_json::Result<String> {
    serde_json::to_string(polynomial)
}

pub fn from_json<T>(input: &str) -> serde_json::Result<Polynomial<T>>
where
    T: Coefficient + DeserializeOwned,
{
    serde_json::from_str(input)
}
