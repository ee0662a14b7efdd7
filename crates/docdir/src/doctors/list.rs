use crate::prelude::{println, *};
use colored::Colorize;
use docdir_core::doctor::{ConsultationMode, DoctorRecord};
use docdir_core::filter::filter_doctors;
use docdir_core::query::{QueryStateUpdate, QueryStore};
use docdir_core::sort::{sort_doctors, SortKey};

use super::{fetch_doctors, parse_query_pairs, to_query_string};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ListOptions {
    /// Case-insensitive name filter
    #[arg(short, long)]
    pub search: Option<String>,

    /// Consultation mode: "Video Consult" or "In Clinic"
    #[arg(short, long)]
    pub consultation: Option<String>,

    /// Specialty filter; repeat the flag to select several (any match keeps a doctor)
    #[arg(long = "specialty", value_name = "SPECIALTY")]
    pub specialties: Vec<String>,

    /// Sort key: fees (low to high) or experience (high to low)
    #[arg(long, value_name = "KEY")]
    pub sort_by: Option<String>,

    /// Start from a persisted query string, e.g. "search=rao&sortBy=fees"
    #[arg(short, long, env = "DOCDIR_QUERY")]
    pub query: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Filtered, sorted view of the directory plus its shareable query string
#[derive(Debug, serde::Serialize)]
pub struct ListOutput {
    pub total: usize,
    pub query: String,
    pub doctors: Vec<DoctorRecord>,
}

pub async fn run(options: ListOptions, global: crate::Global) -> Result<()> {
    let store = build_store(&options)?;

    if global.verbose {
        println!("Fetching doctors...");
    }

    let output = list_doctors_data(&global.feed_url, &store).await?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_formatted(&output);
    }

    Ok(())
}

/// Fetches the directory feed and returns the filtered, sorted view
pub async fn list_doctors_data(feed_url: &str, store: &QueryStore) -> Result<ListOutput> {
    let client = reqwest::Client::new();
    let doctors = fetch_doctors(&client, feed_url).await?;

    let state = store.state();
    let visible = sort_doctors(filter_doctors(&doctors, state), state.sort_by);

    Ok(ListOutput {
        total: visible.len(),
        query: to_query_string(store.params()),
        doctors: visible,
    })
}

/// Build the query store from a persisted query string plus flag overrides
///
/// The `--query` string is decoded first (leniently, like a shared URL); the
/// explicit flags are then merged on top through the store's single update
/// entry point, so `--search ""` layered on a query string clears the search.
fn build_store(options: &ListOptions) -> Result<QueryStore> {
    let mut store = match &options.query {
        Some(query) => QueryStore::from_params(&parse_query_pairs(query)),
        None => QueryStore::default(),
    };

    // Flags, unlike persisted parameters, fail loudly on bad values
    let consultation = match &options.consultation {
        Some(label) => match ConsultationMode::from_label(label) {
            Some(mode) => Some(mode),
            None => {
                return Err(eyre!(
                    "Invalid consultation mode: {}. Valid modes: Video Consult, In Clinic",
                    label
                ))
            }
        },
        None => None,
    };

    let sort_by = match &options.sort_by {
        Some(param) => match SortKey::from_param(param) {
            Some(key) => Some(key),
            None => {
                return Err(eyre!(
                    "Invalid sort key: {}. Valid keys: fees, experience",
                    param
                ))
            }
        },
        None => None,
    };

    let mut update = QueryStateUpdate::default();
    if let Some(search) = &options.search {
        update.search = Some(search.clone());
    }
    if consultation.is_some() {
        update.consultation = Some(consultation);
    }
    if !options.specialties.is_empty() {
        update.specialties = Some(options.specialties.clone());
    }
    if sort_by.is_some() {
        update.sort_by = Some(sort_by);
    }
    store.update(update);

    Ok(store)
}

fn print_formatted(output: &ListOutput) {
    println!("Found {} doctor(s):\n", output.total);

    if output.doctors.is_empty() {
        println!("{}", "No doctors found matching your criteria.".yellow());
        return;
    }

    let mut table = crate::prelude::new_table();
    table.add_row(prettytable::row![
        "Name",
        "Specialties",
        "Exp",
        "Fee",
        "Modes",
        "Clinic"
    ]);

    for doctor in &output.doctors {
        let modes = doctor
            .consultation_modes
            .iter()
            .map(|mode| mode.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        let place = if doctor.location.is_empty() {
            doctor.clinic_name.clone()
        } else {
            f!("{}, {}", doctor.clinic_name, doctor.location)
        };

        table.add_row(prettytable::row![
            f!("Dr. {}", doctor.name),
            doctor.specialties.join(", "),
            f!("{} yrs", doctor.experience_years),
            f!("₹{}", doctor.fee_amount),
            modes,
            place
        ]);
    }

    table.printstd();

    if !output.query.is_empty() {
        println!();
        println!("{} ?{}", "Share:".green(), output.query.cyan());
    }
}
