use crate::prelude::{eprintln, *};
use axum::{
    extract::{RawQuery, State},
    routing::get,
    Json, Router,
};
use docdir_core::doctor::DoctorRecord;
use docdir_core::facets::extract_specialties;
use docdir_core::filter::filter_doctors;
use docdir_core::query::QueryStore;
use docdir_core::sort::sort_doctors;
use docdir_core::suggest::{suggest, DEFAULT_SUGGESTION_LIMIT};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::doctors::{fetch_doctors, parse_query_pairs, to_query_string};

#[derive(Debug, clap::Args, Clone)]
pub struct ServeOptions {
    /// Host to bind to
    #[arg(long, env = "DOCDIR_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "DOCDIR_PORT", default_value = "8080")]
    pub port: u16,
}

/// Record set for one server lifetime
///
/// The feed is fetched exactly once at startup; afterwards the set is
/// read-only, so handlers share it without locking. A failed fetch leaves the
/// set empty and keeps the error for the response bodies — restart to retry.
struct AppState {
    doctors: Vec<DoctorRecord>,
    specialties: Vec<String>,
    load_error: Option<String>,
}

#[derive(Debug, serde::Serialize)]
struct DoctorsResponse {
    total: usize,
    query: String,
    doctors: Vec<DoctorRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, serde::Serialize)]
struct SpecialtiesResponse {
    specialties: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, serde::Serialize)]
struct SuggestResponse {
    partial: String,
    suggestions: Vec<DoctorRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub async fn run(options: ServeOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!(
            "Starting docdir server on {}:{}...",
            options.host, options.port
        );
    }

    let client = reqwest::Client::new();
    let state = load_state(fetch_doctors(&client, &global.feed_url).await);

    if let Some(err) = &state.load_error {
        // Surfaced on every response instead of crashing the server
        eprintln!("Failed to load doctor feed: {err}");
    }

    if global.verbose {
        eprintln!(
            "Loaded {} doctors across {} specialties",
            state.doctors.len(),
            state.specialties.len()
        );
    }

    let addr = format!("{}:{}", options.host, options.port);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let shared_state = Arc::new(state);

    let app_router = Router::new()
        .route("/doctors", get(doctors_handler))
        .route("/specialties", get(specialties_handler))
        .route("/suggest", get(suggest_handler))
        .layer(cors)
        .with_state(shared_state);

    if global.verbose {
        eprintln!("Listening on http://{}", addr);
        eprintln!("Doctors endpoint: http://{}/doctors", addr);
    }

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    axum::serve(listener, app_router)
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

/// Build the server's record set from the startup fetch result
///
/// The failure branch keeps the record set empty and records the error for
/// the response bodies; every derivation then runs over the empty set.
fn load_state(result: Result<Vec<DoctorRecord>>) -> AppState {
    let (doctors, load_error) = match result {
        Ok(doctors) => (doctors, None),
        Err(err) => (Vec::new(), Some(err.to_string())),
    };

    let specialties = extract_specialties(&doctors);

    AppState {
        doctors,
        specialties,
        load_error,
    }
}

/// Filtered, sorted directory view driven by the request's literal query string
async fn doctors_handler(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Json<DoctorsResponse> {
    let pairs = parse_query_pairs(query.as_deref().unwrap_or(""));
    let store = QueryStore::from_params(&pairs);

    let query_state = store.state();
    let visible = sort_doctors(
        filter_doctors(&state.doctors, query_state),
        query_state.sort_by,
    );

    Json(DoctorsResponse {
        total: visible.len(),
        query: to_query_string(store.params()),
        doctors: visible,
        error: state.load_error.clone(),
    })
}

async fn specialties_handler(State(state): State<Arc<AppState>>) -> Json<SpecialtiesResponse> {
    Json(SpecialtiesResponse {
        specialties: state.specialties.clone(),
        error: state.load_error.clone(),
    })
}

async fn suggest_handler(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Json<SuggestResponse> {
    let pairs = parse_query_pairs(query.as_deref().unwrap_or(""));
    let (partial, limit) = suggest_params(&pairs);

    Json(SuggestResponse {
        suggestions: suggest(&state.doctors, &partial, limit),
        partial,
        error: state.load_error.clone(),
    })
}

/// Pull `q` and `limit` out of the request pairs, with lenient defaults
fn suggest_params(pairs: &[(String, String)]) -> (String, usize) {
    let mut partial = String::new();
    let mut limit = DEFAULT_SUGGESTION_LIMIT;

    for (key, value) in pairs {
        match key.as_str() {
            "q" => partial = value.clone(),
            "limit" => {
                if let Ok(parsed) = value.parse() {
                    limit = parsed;
                }
            }
            _ => {}
        }
    }

    (partial, limit)
}
