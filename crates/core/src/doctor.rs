//! Feed record model and normalization
//!
//! The upstream directory feed is uncontrolled third-party data: any field may
//! be missing, empty, or carry decorations like currency symbols. Everything in
//! this module is total — a raw record always normalizes to a usable
//! [`DoctorRecord`], with absent or malformed fields degrading to defaults
//! (empty string / 0 / empty set) instead of errors.

use regex::Regex;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// How a doctor can be consulted. Membership test only, order is insignificant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsultationMode {
    #[serde(rename = "Video Consult")]
    VideoConsult,
    #[serde(rename = "In Clinic")]
    InClinic,
}

impl ConsultationMode {
    /// Display label, identical to the persisted `consultationType` value
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsultationMode::VideoConsult => "Video Consult",
            ConsultationMode::InClinic => "In Clinic",
        }
    }

    /// Parse a persisted `consultationType` value. Unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Video Consult" => Some(ConsultationMode::VideoConsult),
            "In Clinic" => Some(ConsultationMode::InClinic),
            _ => None,
        }
    }
}

/// Raw doctor entry as served by the feed. Every field is optional.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct RawDoctor {
    pub id: Option<String>,
    pub name: Option<String>,
    pub specialities: Option<Vec<RawSpeciality>>,
    pub fees: Option<String>,
    pub experience: Option<String>,
    pub video_consult: Option<bool>,
    pub in_clinic: Option<bool>,
    pub clinic: Option<RawClinic>,
    pub photo: Option<String>,
}

/// Tagged specialty object from the feed (`{"name": "Dentist"}`)
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct RawSpeciality {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct RawClinic {
    pub name: Option<String>,
    pub address: Option<RawAddress>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct RawAddress {
    pub locality: Option<String>,
    pub city: Option<String>,
}

/// Canonical doctor entry. Immutable after normalization.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DoctorRecord {
    pub id: String,
    pub name: String,
    pub specialties: Vec<String>,
    pub experience_years: u32,
    pub fee_amount: u32,
    pub consultation_modes: Vec<ConsultationMode>,
    pub location: String,
    pub city: String,
    pub clinic_name: String,
    pub photo: Option<String>,
}

/// Error type for feed payload parsing
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("invalid feed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("feed payload is not a JSON array")]
    NotAnArray,
}

/// Normalize one raw feed entry into a canonical record
///
/// Total by construction: every field falls back to a defined default, so a
/// partial record is kept rather than dropped.
pub fn normalize(raw: RawDoctor) -> DoctorRecord {
    let name = raw.name.unwrap_or_default();

    let specialties: Vec<String> = raw
        .specialities
        .unwrap_or_default()
        .into_iter()
        .filter_map(|s| s.name)
        .collect();

    let mut consultation_modes = Vec::new();
    if raw.video_consult.unwrap_or(false) {
        consultation_modes.push(ConsultationMode::VideoConsult);
    }
    if raw.in_clinic.unwrap_or(false) {
        consultation_modes.push(ConsultationMode::InClinic);
    }

    let (clinic_name, location, city) = match raw.clinic {
        Some(clinic) => {
            let (locality, city) = match clinic.address {
                Some(address) => (
                    address.locality.unwrap_or_default(),
                    address.city.unwrap_or_default(),
                ),
                None => (String::new(), String::new()),
            };
            (clinic.name.unwrap_or_default(), locality, city)
        }
        None => (String::new(), String::new(), String::new()),
    };

    let id = match raw.id {
        Some(id) if !id.is_empty() => id,
        // Deterministic fallback so identity survives a reload
        _ => fallback_id(&name, &clinic_name, &location),
    };

    DoctorRecord {
        id,
        name,
        specialties,
        experience_years: parse_experience_years(raw.experience.as_deref().unwrap_or("")),
        fee_amount: parse_fee(raw.fees.as_deref().unwrap_or("")),
        consultation_modes,
        location,
        city,
        clinic_name,
        photo: raw.photo,
    }
}

/// Parse a whole feed payload into normalized records
///
/// The payload must be a JSON array; individual entries that fail to
/// deserialize degrade to an all-defaults record instead of failing the load.
///
/// # Arguments
/// * `payload` - Raw response body from the feed endpoint
///
/// # Returns
/// The normalized records in feed order
pub fn parse_feed(payload: &str) -> Result<Vec<DoctorRecord>, FeedError> {
    let value: serde_json::Value = serde_json::from_str(payload)?;

    let entries = match value {
        serde_json::Value::Array(entries) => entries,
        _ => return Err(FeedError::NotAnArray),
    };

    Ok(entries
        .into_iter()
        .map(|entry| normalize(serde_json::from_value(entry).unwrap_or_default()))
        .collect())
}

/// Extract the fee in the smallest currency unit from decorated text
///
/// Strips every non-digit character ("₹ 500" -> 500). Missing or unparsable
/// text yields 0.
pub fn parse_fee(text: &str) -> u32 {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Extract the leading year count from experience text
///
/// The feed formats experience as free text like "13 Years of experience";
/// the first run of digits is the year count. Missing or unparsable text
/// yields 0.
pub fn parse_experience_years(text: &str) -> u32 {
    let re = Regex::new(r"\d+").unwrap();
    re.find(text)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Deterministic identifier for records the feed serves without an id
///
/// First 16 hex characters of SHA-256 over the record's stable display fields,
/// so the same record hashes to the same id on every load.
pub fn fallback_id(name: &str, clinic_name: &str, locality: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(name.as_bytes());
    hasher.update(b"\x1f");
    hasher.update(clinic_name.as_bytes());
    hasher.update(b"\x1f");
    hasher.update(locality.as_bytes());

    let hex: String = hasher
        .finalize()
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect();
    hex[..16].to_string()
}
