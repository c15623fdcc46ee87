//! Single binary web server: JSON API around the fixture generator.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 127.0.0.1), PORT (e.g. 8080). Log filter via RUST_LOG.

use actix_web::{get, post, web::Json, App, HttpResponse, HttpServer, Responder};
use cricket_fixtures::{
    export, generate_schedule, ScheduleError, ScheduleOptions, ScheduledMatch, Team,
    TournamentFormat,
};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Serialize)]
struct FormatInfo {
    format: TournamentFormat,
    min_teams: usize,
}

/// Body for schedule generation. `format` is the wire name, e.g. "round_robin".
#[derive(Deserialize)]
struct GenerateScheduleBody {
    format: String,
    teams: Vec<Team>,
    #[serde(default)]
    options: ScheduleOptions,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "cricket-fixtures",
    })
}

/// Supported formats and the team count each needs.
#[get("/api/formats")]
async fn api_formats() -> HttpResponse {
    let formats: Vec<FormatInfo> = TournamentFormat::ALL
        .into_iter()
        .map(|format| FormatInfo {
            format,
            min_teams: format.min_teams(),
        })
        .collect();
    HttpResponse::Ok().json(formats)
}

/// Generate a schedule and return the match records as JSON.
#[post("/api/schedules")]
async fn api_generate_schedule(body: Json<GenerateScheduleBody>) -> HttpResponse {
    match run_generation(&body) {
        Ok(matches) => HttpResponse::Ok().json(matches),
        Err(e) => error_response(&e),
    }
}

/// Generate a schedule and return it as CSV.
#[post("/api/schedules/csv")]
async fn api_generate_schedule_csv(body: Json<GenerateScheduleBody>) -> HttpResponse {
    let matches = match run_generation(&body) {
        Ok(m) => m,
        Err(e) => return error_response(&e),
    };
    match export::to_csv_string(&matches) {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .body(csv),
        Err(e) => {
            log::error!("CSV export failed: {}", e);
            HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": e.to_string() }))
        }
    }
}

fn run_generation(body: &GenerateScheduleBody) -> Result<Vec<ScheduledMatch>, ScheduleError> {
    let matches = generate_schedule(&body.format, &body.teams, &body.options)?;
    log::info!(
        "Generated {} {} matches for tournament {} ({} teams)",
        matches.len(),
        body.format,
        body.options.tournament_id,
        body.teams.len()
    );
    Ok(matches)
}

fn error_response(e: &ScheduleError) -> HttpResponse {
    log::warn!("Schedule request rejected: {}", e);
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(|| {
        App::new()
            .service(api_health)
            .service(api_formats)
            .service(api_generate_schedule)
            .service(api_generate_schedule_csv)
    })
    .bind(bind)?
    .run()
    .await
}
