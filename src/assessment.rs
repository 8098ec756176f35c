//! The assessment record a questionnaire front end hands to the engine.

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};

use crate::reference::capability_score;

/// Inputs collected about one partner nation.
///
/// Every field has an empty default so a partially filled (or completely
/// empty) record is still valid input; the scoring path substitutes the
/// documented fallback for anything blank or unrecognised.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Assessment {
    #[serde(deserialize_with = "null_as_default")]
    pub regional_bureau: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(deserialize_with = "null_as_default")]
    pub partner_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub political_relationship: String,
    /// Display-only; scoring ignores it.
    #[serde(deserialize_with = "null_as_default")]
    pub diplomatic_objectives: BTreeSet<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub political_constraints: String,
    #[serde(deserialize_with = "null_as_default")]
    pub primary_threat: String,
    pub secondary_threat: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub threat_intensity: String,
    #[serde(deserialize_with = "null_as_default")]
    pub urgency: String,
    pub military_capability: Option<CapabilityInput>,
    pub institutional_strength: Option<CapabilityInput>,
    pub resource_capacity: Option<CapabilityInput>,
}

/// JSON `null` reads the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Assessment {
    /// The secondary threat, if it is actually a second threat: blank values
    /// and a repeat of the primary threat count as absent.  Codes compare
    /// exactly, like every other table lookup.
    pub fn secondary_threat(&self) -> Option<&str> {
        self.secondary_threat
            .as_deref()
            .filter(|code| !code.trim().is_empty() && *code != self.primary_threat)
    }

    pub fn military_score(&self) -> u8 {
        resolve_capability(self.military_capability.as_ref())
    }

    pub fn institutional_score(&self) -> u8 {
        resolve_capability(self.institutional_strength.as_ref())
    }

    pub fn resource_score(&self) -> u8 {
        resolve_capability(self.resource_capacity.as_ref())
    }
}

fn resolve_capability(input: Option<&CapabilityInput>) -> u8 {
    capability_score(input.and_then(CapabilityInput::reading))
}

/// A capability rating as submitted.  Form layers send `"4"`, typed callers
/// send `4`; both are accepted.  Any other JSON value is kept as `Other`
/// and reads as missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CapabilityInput {
    Level(i64),
    Fractional(f64),
    Text(String),
    Other(serde_json::Value),
}

impl CapabilityInput {
    /// Integer reading of the input, or `None` when it is not numeric.
    /// Fractions truncate and text uses its leading integer, so `"4 (est.)"`
    /// reads as 4.
    pub fn reading(&self) -> Option<i64> {
        match self {
            Self::Level(v) => Some(*v),
            Self::Fractional(v) if v.is_finite() => Some(v.trunc() as i64),
            Self::Fractional(_) => None,
            Self::Text(s) => leading_integer(s),
            Self::Other(_) => None,
        }
    }
}

impl From<u8> for CapabilityInput {
    fn from(value: u8) -> Self {
        Self::Level(i64::from(value))
    }
}

impl From<&str> for CapabilityInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|v| sign * v)
}
