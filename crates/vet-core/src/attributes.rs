//! # Typed Attribute Container
//!
//! Supplementary entity data (address, employment, SSN fragment, ...)
//! arrives as an open key-value mapping. Rather than reflecting over
//! arbitrary keys, the engine recognizes a **fixed enumerated key set**
//! ([`AttributeKey`]) and ignores everything else explicitly — the
//! ignored keys are returned to the caller so nothing is dropped
//! silently.
//!
//! Fraud indicator and financial rule definitions reference these keys,
//! which keeps the rule language closed and auditable.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A recognized supplementary attribute key.
///
/// Closed set: rule descriptors may only reference these keys. Adding a
/// variant requires updating `all()` and the string mappings — a compile
/// error guards against partial additions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKey {
    Address,
    City,
    PostalCode,
    Email,
    Phone,
    DateOfBirth,
    Nationality,
    Occupation,
    Employer,
    AnnualIncome,
    SsnFragment,
    SourceOfFunds,
    IncorporationDate,
    RegistrationCountry,
    Website,
    AccountAgeDays,
    TransactionVolume,
}

impl AttributeKey {
    /// All recognized keys.
    pub fn all() -> &'static [AttributeKey] {
        &[
            Self::Address,
            Self::City,
            Self::PostalCode,
            Self::Email,
            Self::Phone,
            Self::DateOfBirth,
            Self::Nationality,
            Self::Occupation,
            Self::Employer,
            Self::AnnualIncome,
            Self::SsnFragment,
            Self::SourceOfFunds,
            Self::IncorporationDate,
            Self::RegistrationCountry,
            Self::Website,
            Self::AccountAgeDays,
            Self::TransactionVolume,
        ]
    }

    /// Stable snake_case string form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::City => "city",
            Self::PostalCode => "postal_code",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::DateOfBirth => "date_of_birth",
            Self::Nationality => "nationality",
            Self::Occupation => "occupation",
            Self::Employer => "employer",
            Self::AnnualIncome => "annual_income",
            Self::SsnFragment => "ssn_fragment",
            Self::SourceOfFunds => "source_of_funds",
            Self::IncorporationDate => "incorporation_date",
            Self::RegistrationCountry => "registration_country",
            Self::Website => "website",
            Self::AccountAgeDays => "account_age_days",
            Self::TransactionVolume => "transaction_volume",
        }
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttributeKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or(())
    }
}

/// Typed attribute map with explicit handling of unrecognized keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeMap(BTreeMap<AttributeKey, serde_json::Value>);

impl AttributeMap {
    /// Empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a raw string-keyed mapping.
    ///
    /// Returns the typed map plus the list of keys that were not
    /// recognized (and therefore ignored). Callers are expected to log
    /// the ignored keys so incomplete rule coverage is visible in the
    /// audit trail.
    pub fn from_raw(raw: BTreeMap<String, serde_json::Value>) -> (Self, Vec<String>) {
        let mut map = BTreeMap::new();
        let mut ignored = Vec::new();
        for (key, value) in raw {
            match key.parse::<AttributeKey>() {
                Ok(typed) => {
                    map.insert(typed, value);
                }
                Err(()) => ignored.push(key),
            }
        }
        (Self(map), ignored)
    }

    /// Insert or replace a value.
    pub fn insert(&mut self, key: AttributeKey, value: serde_json::Value) {
        self.0.insert(key, value);
    }

    /// Look up a value.
    pub fn get(&self, key: AttributeKey) -> Option<&serde_json::Value> {
        self.0.get(&key)
    }

    /// Whether a key is present (with any value, including null).
    pub fn contains(&self, key: AttributeKey) -> bool {
        self.0.contains_key(&key)
    }

    /// Number of recognized attributes supplied.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no recognized attributes were supplied.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the supplied attributes in key order.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeKey, &serde_json::Value)> {
        self.0.iter().map(|(k, v)| (*k, v))
    }
}

impl FromIterator<(AttributeKey, serde_json::Value)> for AttributeMap {
    fn from_iter<I: IntoIterator<Item = (AttributeKey, serde_json::Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
