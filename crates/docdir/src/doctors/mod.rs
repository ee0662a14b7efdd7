use crate::prelude::{println, *};
use docdir_core::doctor::{parse_feed, DoctorRecord};

pub mod list;
pub mod specialties;
pub mod suggest;

// Re-export public data functions
pub use list::list_doctors_data;
pub use specialties::specialties_data;
pub use suggest::suggest_data;

// Re-export domain types from core
pub use docdir_core::doctor::ConsultationMode;
pub use docdir_core::sort::SortKey;

pub const FEED_URL: &str = "https://srijandubey.github.io/campus-api-mock/SRM-C1-25.json";

#[derive(Debug, clap::Parser)]
#[command(name = "doctors")]
#[command(about = "Doctor directory operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List doctors with filters and sorting applied
    #[clap(name = "list")]
    List(list::ListOptions),

    /// Autocomplete doctor names for partial input
    #[clap(name = "suggest")]
    Suggest(suggest::SuggestOptions),

    /// List the specialties present in the directory
    #[clap(name = "specialties")]
    Specialties(specialties::SpecialtiesOptions),
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Doctor feed: {}", global.feed_url);
        println!();
    }

    match app.command {
        Commands::List(options) => list::run(options, global).await,
        Commands::Suggest(options) => suggest::run(options, global).await,
        Commands::Specialties(options) => specialties::run(options, global).await,
    }
}

// Shared utility functions
pub async fn fetch_doctors(client: &reqwest::Client, url: &str) -> Result<Vec<DoctorRecord>> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| Error::Network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(Error::FeedFetch(f!("HTTP {}", response.status())).into());
    }

    let payload = response
        .text()
        .await
        .map_err(|e| Error::Network(e.to_string()))?;

    parse_feed(&payload).map_err(|e| Error::FeedFetch(e.to_string()).into())
}

/// Percent-decode a raw query string into the flat pairs the core consumes
pub fn parse_query_pairs(raw: &str) -> Vec<(String, String)> {
    raw.trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (percent_decode(key), percent_decode(value))
        })
        .collect()
}

/// Percent-encode flat pairs back into a query string
pub fn to_query_string(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(key, value)| f!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

fn percent_decode(text: &str) -> String {
    // '+' means space in query strings; urlencoding only handles %XX
    let text = text.replace('+', " ");
    match urlencoding::decode(&text) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_pairs_decodes_values() {
        let pairs = parse_query_pairs("search=rao&consultationType=Video%20Consult");

        assert_eq!(
            pairs,
            vec![
                ("search".to_string(), "rao".to_string()),
                ("consultationType".to_string(), "Video Consult".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_query_pairs_handles_plus_and_leading_question_mark() {
        let pairs = parse_query_pairs("?consultationType=In+Clinic");

        assert_eq!(
            pairs,
            vec![("consultationType".to_string(), "In Clinic".to_string())]
        );
    }

    #[test]
    fn test_parse_query_pairs_keeps_repeated_keys() {
        let pairs = parse_query_pairs("specialty=Dentist&specialty=Orthopaedic");

        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].1, "Dentist");
        assert_eq!(pairs[1].1, "Orthopaedic");
    }

    #[test]
    fn test_query_string_round_trip() {
        let params = vec![
            ("search".to_string(), "rao".to_string()),
            ("consultationType".to_string(), "In Clinic".to_string()),
            ("specialties".to_string(), "Dentist,Orthopaedic".to_string()),
        ];

        assert_eq!(parse_query_pairs(&to_query_string(&params)), params);
    }

    #[test]
    fn test_parse_query_pairs_empty_input() {
        assert!(parse_query_pairs("").is_empty());
        assert!(parse_query_pairs("?").is_empty());
    }
}
