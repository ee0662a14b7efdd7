//! The composable filter pipeline
//!
//! Each filter dimension is an independently optional predicate; a record is
//! kept only when it satisfies all active predicates (AND across dimensions).
//! Within the specialty dimension a single shared specialty matches (OR).

use crate::doctor::DoctorRecord;
use crate::query::QueryState;

/// Select the records matching the active filters
///
/// Pure and stable: the result is a new sequence containing (clones of) a
/// subset of `doctors`, in the input's relative order. An inactive dimension
/// (empty search text, no consultation selection, no specialty selection)
/// matches every record.
pub fn filter_doctors(doctors: &[DoctorRecord], state: &QueryState) -> Vec<DoctorRecord> {
    let search = state.search.to_lowercase();

    doctors
        .iter()
        .filter(|doctor| search.is_empty() || doctor.name.to_lowercase().contains(&search))
        .filter(|doctor| match state.consultation {
            Some(mode) => doctor.consultation_modes.contains(&mode),
            None => true,
        })
        .filter(|doctor| {
            state.specialties.is_empty()
                || state
                    .specialties
                    .iter()
                    .any(|specialty| doctor.specialties.contains(specialty))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doctor::ConsultationMode;

    fn doctor(
        id: &str,
        name: &str,
        specialties: &[&str],
        modes: &[ConsultationMode],
    ) -> DoctorRecord {
        DoctorRecord {
            id: id.to_string(),
            name: name.to_string(),
            specialties: specialties.iter().map(|s| s.to_string()).collect(),
            experience_years: 0,
            fee_amount: 0,
            consultation_modes: modes.to_vec(),
            location: String::new(),
            city: String::new(),
            clinic_name: String::new(),
            photo: None,
        }
    }

    fn fixture() -> Vec<DoctorRecord> {
        vec![
            doctor(
                "1",
                "Anika Sharma",
                &["Dermatologist"],
                &[ConsultationMode::VideoConsult],
            ),
            doctor(
                "2",
                "Chandra Rao",
                &["Cardiologist"],
                &[ConsultationMode::InClinic],
            ),
            doctor(
                "3",
                "Hemant Anand",
                &["Dentist", "Cardiologist"],
                &[ConsultationMode::VideoConsult, ConsultationMode::InClinic],
            ),
        ]
    }

    fn ids(doctors: &[DoctorRecord]) -> Vec<&str> {
        doctors.iter().map(|d| d.id.as_str()).collect()
    }

    #[test]
    fn test_default_state_keeps_everything_in_order() {
        let doctors = fixture();
        let result = filter_doctors(&doctors, &QueryState::default());

        assert_eq!(ids(&result), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let doctors = fixture();
        let state = QueryState {
            search: "AN".to_string(),
            ..Default::default()
        };

        // "an" appears in "Anika Sharma", "Chandra Rao" and "Hemant Anand"
        assert_eq!(ids(&filter_doctors(&doctors, &state)), vec!["1", "2", "3"]);

        let state = QueryState {
            search: "anand".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_doctors(&doctors, &state)), vec!["3"]);
    }

    #[test]
    fn test_consultation_mode_membership() {
        let doctors = fixture();
        let state = QueryState {
            consultation: Some(ConsultationMode::InClinic),
            ..Default::default()
        };

        assert_eq!(ids(&filter_doctors(&doctors, &state)), vec!["2", "3"]);
    }

    #[test]
    fn test_specialty_filter_is_or_within_dimension() {
        let doctors = fixture();
        let state = QueryState {
            specialties: vec!["Cardiologist".to_string(), "Dermatologist".to_string()],
            ..Default::default()
        };

        // A record with only one of the selected specialties still matches
        assert_eq!(ids(&filter_doctors(&doctors, &state)), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_dimensions_combine_with_and() {
        let doctors = fixture();
        let state = QueryState {
            consultation: Some(ConsultationMode::InClinic),
            specialties: vec!["Dermatologist".to_string()],
            ..Default::default()
        };

        // The only Dermatologist is video-only, so nothing passes both
        assert!(filter_doctors(&doctors, &state).is_empty());
    }

    #[test]
    fn test_result_is_subset_of_input() {
        let doctors = fixture();
        let state = QueryState {
            search: "a".to_string(),
            ..Default::default()
        };

        for result in filter_doctors(&doctors, &state) {
            assert!(doctors.iter().any(|d| d.id == result.id));
        }
    }

    #[test]
    fn test_empty_record_set_yields_empty_result() {
        let state = QueryState {
            search: "anything".to_string(),
            ..Default::default()
        };

        assert!(filter_doctors(&[], &state).is_empty());
    }
}
