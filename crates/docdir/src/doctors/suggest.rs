use crate::prelude::{println, *};
use colored::Colorize;
use docdir_core::doctor::DoctorRecord;
use docdir_core::suggest::{suggest, DEFAULT_SUGGESTION_LIMIT};

use super::fetch_doctors;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct SuggestOptions {
    /// Partial doctor name to complete
    pub partial: String,

    /// Maximum number of suggestions
    #[arg(short, long, default_value_t = DEFAULT_SUGGESTION_LIMIT)]
    pub limit: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, serde::Serialize)]
pub struct SuggestOutput {
    pub partial: String,
    pub suggestions: Vec<DoctorRecord>,
}

pub async fn run(options: SuggestOptions, global: crate::Global) -> Result<()> {
    let output = suggest_data(&global.feed_url, &options.partial, options.limit).await?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if output.suggestions.is_empty() {
        println!("{}", "No suggestions.".yellow());
    } else {
        for doctor in &output.suggestions {
            println!("Dr. {}", doctor.name.bold());
        }
    }

    Ok(())
}

/// Fetches the directory feed and returns autocomplete candidates
pub async fn suggest_data(feed_url: &str, partial: &str, limit: usize) -> Result<SuggestOutput> {
    let client = reqwest::Client::new();
    let doctors = fetch_doctors(&client, feed_url).await?;

    Ok(SuggestOutput {
        partial: partial.to_string(),
        suggestions: suggest(&doctors, partial, limit),
    })
}
