//! Total, stable ordering of a record set
//!
//! Exactly one sort key is active at a time. When none is selected the list
//! falls back to name order so output stays deterministic across loads.

use serde::{Deserialize, Serialize};

use crate::doctor::DoctorRecord;

/// Selected ordering, as persisted under the `sortBy` parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    #[serde(rename = "fees")]
    FeesAscending,
    #[serde(rename = "experience")]
    ExperienceDescending,
}

impl SortKey {
    /// Persisted `sortBy` value
    pub fn as_param(&self) -> &'static str {
        match self {
            SortKey::FeesAscending => "fees",
            SortKey::ExperienceDescending => "experience",
        }
    }

    /// Parse a persisted `sortBy` value. Unknown values yield `None`.
    pub fn from_param(param: &str) -> Option<Self> {
        match param.trim() {
            "fees" => Some(SortKey::FeesAscending),
            "experience" => Some(SortKey::ExperienceDescending),
            _ => None,
        }
    }
}

/// Order a record set by the selected key
///
/// Uses a stable sort, so ties keep the relative order the filter pipeline
/// produced. With no key selected records are ordered by `name` ascending,
/// case-sensitive byte-wise (the documented deterministic collation choice).
pub fn sort_doctors(mut doctors: Vec<DoctorRecord>, key: Option<SortKey>) -> Vec<DoctorRecord> {
    match key {
        Some(SortKey::FeesAscending) => doctors.sort_by_key(|doctor| doctor.fee_amount),
        Some(SortKey::ExperienceDescending) => {
            doctors.sort_by_key(|doctor| std::cmp::Reverse(doctor.experience_years))
        }
        None => doctors.sort_by(|a, b| a.name.cmp(&b.name)),
    }
    doctors
}
