//! Canonical query state and its persisted encoding
//!
//! The combined search/filter/sort intent lives in one [`QueryState`] value
//! that round-trips through a flat list of string key/value pairs — the shape
//! of a URL query string after percent-decoding. The sync is one-way: state
//! mutations re-encode the pairs, and the pairs are only read back into state
//! when a store is constructed (initial load or external navigation).
//!
//! Decoding is lenient by policy: unknown keys and unparsable values are
//! skipped, never an error, so a mangled shared link still renders a page.

use serde::{Deserialize, Serialize};

use crate::doctor::ConsultationMode;
use crate::sort::SortKey;

/// Persisted parameter keys
const PARAM_SEARCH: &str = "search";
const PARAM_CONSULTATION: &str = "consultationType";
const PARAM_SPECIALTIES: &str = "specialties";
const PARAM_SPECIALTY: &str = "specialty";
const PARAM_SORT_BY: &str = "sortBy";

/// The combined search/filter/sort intent
///
/// Defaults mean "dimension inactive": empty search matches everything, no
/// consultation filter, no specialty filter, name-ascending fallback order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryState {
    pub search: String,
    pub consultation: Option<ConsultationMode>,
    pub specialties: Vec<String>,
    pub sort_by: Option<SortKey>,
}

/// A partial change to [`QueryState`]
///
/// `None` leaves a field unchanged; `Some` replaces it, with the empty value
/// (empty string, empty vec, inner `None`) clearing that filter dimension.
#[derive(Debug, Clone, Default)]
pub struct QueryStateUpdate {
    pub search: Option<String>,
    pub consultation: Option<Option<ConsultationMode>>,
    pub specialties: Option<Vec<String>>,
    pub sort_by: Option<Option<SortKey>>,
}

/// Parse persisted parameter pairs into a query state
///
/// Accepts the canonical comma-joined `specialties` key as well as repeated
/// `specialty` keys. Unknown keys and unparsable values are ignored.
pub fn decode(params: &[(String, String)]) -> QueryState {
    let mut state = QueryState::default();

    for (key, value) in params {
        match key.as_str() {
            PARAM_SEARCH => {
                if !value.is_empty() {
                    state.search = value.clone();
                }
            }
            PARAM_CONSULTATION => {
                if let Some(mode) = ConsultationMode::from_label(value) {
                    state.consultation = Some(mode);
                }
            }
            PARAM_SPECIALTIES => {
                for specialty in value.split(',') {
                    push_specialty(&mut state.specialties, specialty);
                }
            }
            PARAM_SPECIALTY => push_specialty(&mut state.specialties, value),
            PARAM_SORT_BY => {
                if let Some(key) = SortKey::from_param(value) {
                    state.sort_by = Some(key);
                }
            }
            // Unknown keys never fail the decode
            _ => {}
        }
    }

    state
}

/// Encode a query state as its canonical persisted pairs
///
/// Inactive dimensions are omitted entirely, so the default state encodes to
/// an empty list. Specialties are comma-joined under one key, which assumes
/// facet values contain no comma (true of the feed's specialty names); a
/// comma inside a value would read back as two separate specialties.
pub fn encode(state: &QueryState) -> Vec<(String, String)> {
    let mut params = Vec::new();

    if !state.search.is_empty() {
        params.push((PARAM_SEARCH.to_string(), state.search.clone()));
    }
    if let Some(mode) = state.consultation {
        params.push((PARAM_CONSULTATION.to_string(), mode.as_str().to_string()));
    }
    if !state.specialties.is_empty() {
        params.push((PARAM_SPECIALTIES.to_string(), state.specialties.join(",")));
    }
    if let Some(key) = state.sort_by {
        params.push((PARAM_SORT_BY.to_string(), key.as_param().to_string()));
    }

    params
}

fn push_specialty(specialties: &mut Vec<String>, specialty: &str) {
    if !specialty.is_empty() && !specialties.iter().any(|s| s == specialty) {
        specialties.push(specialty.to_string());
    }
}

/// Owner of the query state and its persisted form
///
/// The single source of truth for the derived view: construction reads the
/// persisted pairs once, and [`QueryStore::update`] is the only mutation entry
/// point. Every update re-encodes the pairs, so `params` always reflects
/// `state` and never the other way around.
#[derive(Debug, Clone, Default)]
pub struct QueryStore {
    state: QueryState,
    params: Vec<(String, String)>,
}

impl QueryStore {
    /// Build a store from persisted parameter pairs (initial load)
    ///
    /// The pairs are re-encoded immediately, so `params()` returns the
    /// canonical form even when the input used repeated `specialty` keys.
    pub fn from_params(params: &[(String, String)]) -> Self {
        let state = decode(params);
        let params = encode(&state);
        QueryStore { state, params }
    }

    pub fn from_state(state: QueryState) -> Self {
        let params = encode(&state);
        QueryStore { state, params }
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    /// The canonical persisted representation of the current state
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Merge a partial change and re-encode the persisted pairs
    pub fn update(&mut self, update: QueryStateUpdate) -> &QueryState {
        if let Some(search) = update.search {
            self.state.search = search;
        }
        if let Some(consultation) = update.consultation {
            self.state.consultation = consultation;
        }
        if let Some(specialties) = update.specialties {
            self.state.specialties = specialties;
        }
        if let Some(sort_by) = update.sort_by {
            self.state.sort_by = sort_by;
        }

        self.params = encode(&self.state);
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_decode_encode_round_trip() {
        let state = QueryState {
            search: "anika".to_string(),
            consultation: Some(ConsultationMode::InClinic),
            specialties: vec!["Dermatologist".to_string(), "Cardiologist".to_string()],
            sort_by: Some(SortKey::FeesAscending),
        };

        assert_eq!(decode(&encode(&state)), state);
    }

    #[test]
    fn test_default_state_encodes_to_empty_map() {
        let state = QueryState::default();

        assert_eq!(encode(&state), Vec::<(String, String)>::new());
        assert_eq!(decode(&[]), state);
    }

    #[test]
    fn test_decode_repeated_specialty_keys() {
        let params = pairs(&[
            ("specialty", "Dentist"),
            ("specialty", "Orthopaedic"),
            ("specialty", "Dentist"),
        ]);

        let state = decode(&params);

        assert_eq!(state.specialties, vec!["Dentist", "Orthopaedic"]);
    }

    #[test]
    fn test_decode_comma_joined_specialties() {
        let params = pairs(&[("specialties", "Dentist,Orthopaedic")]);

        assert_eq!(
            decode(&params).specialties,
            vec!["Dentist", "Orthopaedic"]
        );
    }

    #[test]
    fn test_decode_ignores_unknown_and_malformed() {
        let params = pairs(&[
            ("page", "3"),
            ("consultationType", "Telepathy"),
            ("sortBy", "rating"),
            ("search", "rao"),
        ]);

        let state = decode(&params);

        assert_eq!(state.search, "rao");
        assert_eq!(state.consultation, None);
        assert_eq!(state.sort_by, None);
    }

    #[test]
    fn test_encode_omits_empty_dimensions() {
        let state = QueryState {
            search: String::new(),
            consultation: None,
            specialties: vec![],
            sort_by: Some(SortKey::ExperienceDescending),
        };

        assert_eq!(encode(&state), pairs(&[("sortBy", "experience")]));
    }

    #[test]
    fn test_comma_inside_specialty_reads_back_as_two_entries() {
        // Documented limit of the comma-joined encoding; feed specialty
        // names contain no commas.
        let state = QueryState {
            specialties: vec!["Ear,Nose".to_string()],
            ..Default::default()
        };

        assert_eq!(decode(&encode(&state)).specialties, vec!["Ear", "Nose"]);
    }

    #[test]
    fn test_from_params_canonicalizes() {
        let store = QueryStore::from_params(&pairs(&[
            ("specialty", "Dentist"),
            ("specialty", "Orthopaedic"),
        ]));

        assert_eq!(
            store.params(),
            pairs(&[("specialties", "Dentist,Orthopaedic")])
        );
    }

    #[test]
    fn test_update_merges_and_leaves_omitted_fields() {
        let mut store = QueryStore::from_state(QueryState {
            search: "rao".to_string(),
            consultation: Some(ConsultationMode::VideoConsult),
            specialties: vec!["Dentist".to_string()],
            sort_by: None,
        });

        store.update(QueryStateUpdate {
            sort_by: Some(Some(SortKey::FeesAscending)),
            ..Default::default()
        });

        assert_eq!(store.state().search, "rao");
        assert_eq!(
            store.state().consultation,
            Some(ConsultationMode::VideoConsult)
        );
        assert_eq!(store.state().sort_by, Some(SortKey::FeesAscending));
    }

    #[test]
    fn test_update_with_empty_value_clears_dimension() {
        let mut store = QueryStore::from_state(QueryState {
            search: "rao".to_string(),
            consultation: Some(ConsultationMode::InClinic),
            specialties: vec!["Dentist".to_string()],
            sort_by: Some(SortKey::FeesAscending),
        });

        store.update(QueryStateUpdate {
            search: Some(String::new()),
            consultation: Some(None),
            specialties: Some(vec![]),
            sort_by: Some(None),
        });

        assert_eq!(store.state(), &QueryState::default());
        assert!(store.params().is_empty());
    }

    #[test]
    fn test_update_refreshes_persisted_pairs() {
        let mut store = QueryStore::default();

        store.update(QueryStateUpdate {
            search: Some("kumar".to_string()),
            ..Default::default()
        });

        assert_eq!(store.params(), pairs(&[("search", "kumar")]));
    }
}
