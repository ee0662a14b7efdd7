//! Autocomplete candidates for partial name input
//!
//! Suggestions are keyed off raw keystrokes and never touch the query state;
//! only an explicit selection or commit feeds back into the search filter.

use crate::doctor::DoctorRecord;

/// Default number of suggestions shown under the search box
pub const DEFAULT_SUGGESTION_LIMIT: usize = 3;

/// Collect up to `limit` candidates for a partial name
///
/// Case-insensitive substring match against `name`, in the record set's
/// order — match or no match, no relevance ranking. Blank input yields no
/// suggestions, which is distinct from "show all".
pub fn suggest(doctors: &[DoctorRecord], partial: &str, limit: usize) -> Vec<DoctorRecord> {
    let partial = partial.trim().to_lowercase();
    if partial.is_empty() {
        return Vec::new();
    }

    doctors
        .iter()
        .filter(|doctor| doctor.name.to_lowercase().contains(&partial))
        .take(limit)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doctor(id: &str, name: &str) -> DoctorRecord {
        DoctorRecord {
            id: id.to_string(),
            name: name.to_string(),
            specialties: vec![],
            experience_years: 0,
            fee_amount: 0,
            consultation_modes: vec![],
            location: String::new(),
            city: String::new(),
            clinic_name: String::new(),
            photo: None,
        }
    }

    fn fixture() -> Vec<DoctorRecord> {
        vec![
            doctor("1", "Anand Verma"),
            doctor("2", "Kavita Iyer"),
            doctor("3", "Chandra Rao"),
            doctor("4", "Sanjay Anvekar"),
            doctor("5", "Hemant Anand"),
        ]
    }

    #[test]
    fn test_blank_input_yields_no_suggestions() {
        let doctors = fixture();

        assert!(suggest(&doctors, "", 3).is_empty());
        assert!(suggest(&doctors, "   ", 3).is_empty());
    }

    #[test]
    fn test_case_insensitive_match_in_record_order() {
        let doctors = fixture();

        let result = suggest(&doctors, "AN", 10);
        let names: Vec<&str> = result.iter().map(|d| d.name.as_str()).collect();

        assert_eq!(
            names,
            vec!["Anand Verma", "Chandra Rao", "Sanjay Anvekar", "Hemant Anand"]
        );
    }

    #[test]
    fn test_limit_caps_candidates() {
        let doctors = fixture();

        let result = suggest(&doctors, "an", DEFAULT_SUGGESTION_LIMIT);

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].id, "1");
        assert_eq!(result[1].id, "3");
        assert_eq!(result[2].id, "4");
    }

    #[test]
    fn test_no_match_yields_empty() {
        assert!(suggest(&fixture(), "zzz", 3).is_empty());
    }
}
