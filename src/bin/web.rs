//! Single binary web server: bracket, status and team details as JSON.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! League data is read from WAFFLE_BOWL_DATA (default league.json).

use actix_web::{
    get, post,
    web::{Data, Path},
    App, HttpResponse, HttpServer, Responder,
};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use waffle_bowl::{refresh_bracket, team_details, AppConfig, CachedSource, LeagueSource, SnapshotSource};

/// Shared across workers: configuration and the cached league source.
struct AppState {
    config: AppConfig,
    source: CachedSource,
}

type State = Data<AppState>;

/// How often expired cache entries are dropped.
const CACHE_SWEEP_INTERVAL: Duration = Duration::from_secs(5 * 60);

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Path segment: team id (e.g. /api/teams/{team_id})
#[derive(Deserialize)]
struct TeamPath {
    team_id: String,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "waffle-bowl",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Full bracket with status. Errors come back as a null bracket so the page can show a placeholder.
#[get("/api/bracket")]
async fn api_bracket(state: State) -> HttpResponse {
    match refresh_bracket(&state.source, &state.config.bracket, state.config.fetch_timeout).await {
        Ok(view) => HttpResponse::Ok().json(view),
        Err(e) => {
            log::error!("Error refreshing bracket: {}", e);
            HttpResponse::Ok().json(serde_json::json!({
                "bracket": null,
                "status": null,
                "error": e.to_string(),
            }))
        }
    }
}

/// Status only (current round and message).
#[get("/api/bracket/status")]
async fn api_bracket_status(state: State) -> HttpResponse {
    match refresh_bracket(&state.source, &state.config.bracket, state.config.fetch_timeout).await {
        Ok(view) => HttpResponse::Ok().json(view.status),
        Err(e) => {
            log::error!("Error fetching bracket status: {}", e);
            HttpResponse::Ok().json(serde_json::json!({ "status": null, "error": e.to_string() }))
        }
    }
}

/// Team record and this week's roster.
#[get("/api/teams/{team_id}")]
async fn api_team_details(state: State, path: Path<TeamPath>) -> HttpResponse {
    let period = match state.source.current_period().await {
        Ok(p) => p,
        Err(e) => {
            log::error!("Error fetching current week: {}", e);
            return HttpResponse::Ok().json(serde_json::json!({ "team": null, "roster": null, "error": e.to_string() }));
        }
    };
    match team_details(&state.source, &state.config.bracket, &path.team_id, period).await {
        Ok(details) => HttpResponse::Ok().json(details),
        Err(e) => {
            log::error!("Error fetching team {} details: {}", path.team_id, e);
            HttpResponse::Ok().json(serde_json::json!({ "team": null, "roster": null, "error": e.to_string() }))
        }
    }
}

/// Drop all cached league data so the next request refetches.
#[post("/api/cache/refresh")]
async fn api_cache_refresh(state: State) -> HttpResponse {
    state.source.clear();
    HttpResponse::Ok().json(serde_json::json!({ "ok": true }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env().map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let schedule = config.bracket.schedule();
    log::info!(
        "League {} season {}: {}-team bracket, weeks {}/{}/{}, data from {}",
        config.league_id.as_deref().unwrap_or("(unset)"),
        config.season,
        config.bracket.entrant_count,
        schedule.quarterfinals,
        schedule.semifinals,
        schedule.final_round,
        config.data_path.display()
    );

    let host = config.host.clone();
    let port = config.port;
    log::info!("Starting server at http://{}:{}", host, port);

    let upstream: Arc<dyn LeagueSource> = Arc::new(SnapshotSource::new(config.data_path.clone()));
    let source = CachedSource::new(upstream, config.cache.clone());
    let state = Data::new(AppState { config, source });

    // Background task: periodically drop expired cache entries
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(CACHE_SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            let removed = state_cleanup.source.evict_expired();
            if removed > 0 {
                log::debug!("Evicted {} expired cache entr(ies)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(favicon)
            .service(api_bracket)
            .service(api_bracket_status)
            .service(api_team_details)
            .service(api_cache_refresh)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
