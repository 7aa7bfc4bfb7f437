//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_files::Files;
use actix_web::{
    get, post, put,
    web::{self, Data, Json, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use msl_auction_web::{
    advance_to_next_player, finalize_sale, list_directory, place_bid, search_player,
    AuctionSession, DirectoryFilter, ManagerRegistrationForm, PlayerRegistrationForm,
    RegistrationReceipt, SessionId, TeamId,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Per-session entry: auction data + last activity time (for auto-cleanup).
struct SessionEntry {
    session: AuctionSession,
    last_activity: Instant,
}

/// In-memory state: many auction sessions by ID. Entries are removed after inactivity.
type AppState = Data<RwLock<HashMap<SessionId, SessionEntry>>>;

/// Inactivity threshold: sessions not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

/// Simulated processing delay for registration submissions.
const REGISTRATION_DELAY: Duration = Duration::from_millis(1500);

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct PlaceBidBody {
    team_id: TeamId,
    increment: u32,
}

#[derive(Deserialize)]
struct SearchPlayerBody {
    player_id: String,
}

#[derive(Deserialize)]
struct UpdateLogoBody {
    logo: String,
}

#[derive(Deserialize)]
struct DirectoryQuery {
    filter: DirectoryFilter,
}

/// Path segment: session id (e.g. /api/auctions/{id})
#[derive(Deserialize)]
struct SessionPath {
    id: SessionId,
}

/// Path segments: session id and team id (e.g. /api/auctions/{id}/teams/{team_id}/logo)
#[derive(Deserialize)]
struct SessionTeamPath {
    id: SessionId,
    team_id: TeamId,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "msl-auction-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Create a new auction session (returns it with id; client stores id for subsequent requests).
#[post("/api/auctions")]
async fn api_create_auction(state: AppState) -> HttpResponse {
    let session = AuctionSession::new();
    let id = session.id;
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.insert(
        id,
        SessionEntry {
            session,
            last_activity: Instant::now(),
        },
    );
    HttpResponse::Ok().json(&g.get(&id).unwrap().session)
}

/// Get an auction session by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/auctions/{id}")]
async fn api_get_auction(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(&entry.session)
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No auction session" })),
    }
}

/// Raise the bid for a team on the current lot.
#[post("/api/auctions/{id}/bids")]
async fn api_place_bid(
    state: AppState,
    path: Path<SessionPath>,
    body: Json<PlaceBidBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => {
            return HttpResponse::NotFound().json(serde_json::json!({ "error": "No auction session" }))
        }
    };
    entry.last_activity = Instant::now();
    let s = &mut entry.session;
    match place_bid(s, body.team_id, body.increment) {
        Ok(()) => HttpResponse::Ok().json(s),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Put a registry player on the block by registration id.
#[post("/api/auctions/{id}/lot/search")]
async fn api_search_player(
    state: AppState,
    path: Path<SessionPath>,
    body: Json<SearchPlayerBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => {
            return HttpResponse::NotFound().json(serde_json::json!({ "error": "No auction session" }))
        }
    };
    entry.last_activity = Instant::now();
    let s = &mut entry.session;
    match search_player(s, body.player_id.trim()) {
        Ok(()) => HttpResponse::Ok().json(s),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Advance to the next player in registry order (wraps around).
#[post("/api/auctions/{id}/lot/next")]
async fn api_next_player(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => {
            return HttpResponse::NotFound().json(serde_json::json!({ "error": "No auction session" }))
        }
    };
    entry.last_activity = Instant::now();
    let s = &mut entry.session;
    advance_to_next_player(s);
    HttpResponse::Ok().json(s)
}

/// Hammer the current lot: sell to the leading team at the current bid.
#[post("/api/auctions/{id}/sold")]
async fn api_mark_sold(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => {
            return HttpResponse::NotFound().json(serde_json::json!({ "error": "No auction session" }))
        }
    };
    entry.last_activity = Instant::now();
    let s = &mut entry.session;
    match finalize_sale(s) {
        Ok(()) => HttpResponse::Ok().json(s),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Replace a team's logo (data URL from a local file upload).
#[put("/api/auctions/{id}/teams/{team_id}/logo")]
async fn api_update_team_logo(
    state: AppState,
    path: Path<SessionTeamPath>,
    body: Json<UpdateLogoBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => {
            return HttpResponse::NotFound().json(serde_json::json!({ "error": "No auction session" }))
        }
    };
    entry.last_activity = Instant::now();
    let s = &mut entry.session;
    match s.update_team_logo(path.team_id, body.logo.clone()) {
        Ok(()) => HttpResponse::Ok().json(s),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Sold/unsold partition of the player directory.
#[get("/api/auctions/{id}/directory")]
async fn api_directory(
    state: AppState,
    path: Path<SessionPath>,
    query: Query<DirectoryQuery>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => {
            return HttpResponse::NotFound().json(serde_json::json!({ "error": "No auction session" }))
        }
    };
    entry.last_activity = Instant::now();
    HttpResponse::Ok().json(list_directory(&entry.session, query.filter))
}

/// Session stats for the rosters header: total drafted, league size, leading team.
#[get("/api/auctions/{id}/stats")]
async fn api_stats(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => {
            return HttpResponse::NotFound().json(serde_json::json!({ "error": "No auction session" }))
        }
    };
    entry.last_activity = Instant::now();
    let s = &entry.session;
    HttpResponse::Ok().json(serde_json::json!({
        "total_drafted": s.total_players_drafted(),
        "league_size": s.teams.len(),
        "leading_team": s.leading_team_name(),
    }))
}

/// Submit a player registration. Nothing is persisted; after a fixed
/// processing delay the registrant gets an acceptance receipt.
#[post("/api/register/player")]
async fn api_register_player(body: Json<PlayerRegistrationForm>) -> HttpResponse {
    if let Err(e) = body.validate() {
        return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }));
    }
    actix_web::rt::time::sleep(REGISTRATION_DELAY).await;
    let receipt = RegistrationReceipt::issue();
    log::info!(
        "Player registration accepted: {} ({})",
        body.name.trim(),
        receipt.confirmation_code
    );
    HttpResponse::Ok().json(receipt)
}

/// Submit a manager registration. Same simulated processing as players.
#[post("/api/register/manager")]
async fn api_register_manager(body: Json<ManagerRegistrationForm>) -> HttpResponse {
    if let Err(e) = body.validate() {
        return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }));
    }
    actix_web::rt::time::sleep(REGISTRATION_DELAY).await;
    let receipt = RegistrationReceipt::issue();
    log::info!(
        "Manager registration accepted: {} ({})",
        body.name.trim(),
        receipt.confirmation_code
    );
    HttpResponse::Ok().json(receipt)
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

    let state = Data::new(RwLock::new(HashMap::<SessionId, SessionEntry>::new()));

    // Background task: every 30 minutes, remove sessions inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive auction session(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(web::JsonConfig::default().limit(4 * 1024 * 1024))
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_create_auction)
            .service(api_get_auction)
            .service(api_place_bid)
            .service(api_search_player)
            .service(api_next_player)
            .service(api_mark_sold)
            .service(api_update_team_logo)
            .service(api_directory)
            .service(api_stats)
            .service(api_register_player)
            .service(api_register_manager)
            .service(Files::new("/static", "static").show_files_listing())
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
