use crate::prelude::{println, *};
use colored::Colorize;
use docdir_core::facets::extract_specialties;

use super::fetch_doctors;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct SpecialtiesOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, serde::Serialize)]
pub struct SpecialtiesOutput {
    pub specialties: Vec<String>,
}

pub async fn run(options: SpecialtiesOptions, global: crate::Global) -> Result<()> {
    let output = specialties_data(&global.feed_url).await?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if output.specialties.is_empty() {
        println!("{}", "No specialties in the directory.".yellow());
    } else {
        for specialty in &output.specialties {
            println!("{specialty}");
        }
    }

    Ok(())
}

/// Fetches the directory feed and returns the available specialty facets
pub async fn specialties_data(feed_url: &str) -> Result<SpecialtiesOutput> {
    let client = reqwest::Client::new();
    let doctors = fetch_doctors(&client, feed_url).await?;

    Ok(SpecialtiesOutput {
        specialties: extract_specialties(&doctors),
    })
}
