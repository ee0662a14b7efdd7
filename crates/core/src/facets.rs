//! Specialty facet derivation
//!
//! The filter panel offers one checkbox per specialty present in the loaded
//! record set. The facet list is derived once per load; there is no
//! incremental update because the record set never changes within a session.

use std::collections::BTreeSet;

use crate::doctor::DoctorRecord;

/// Collect the distinct specialties across a record set
///
/// Returns the union of every record's specialties, deduplicated and in
/// ascending lexicographic order. Deterministic for a given input set.
pub fn extract_specialties(doctors: &[DoctorRecord]) -> Vec<String> {
    let set: BTreeSet<&str> = doctors
        .iter()
        .flat_map(|doctor| doctor.specialties.iter())
        .map(|specialty| specialty.as_str())
        .collect();

    set.into_iter().map(|specialty| specialty.to_string()).collect()
}
