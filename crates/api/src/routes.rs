use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Router,
};
use glide_core::config::Settings;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::authorize;
use crate::error::ApiError;
use crate::handlers;
use crate::response::Payload;

#[derive(Debug, Clone)]
pub struct AppState {
    settings: Arc<Settings>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pub key: Option<String>,
    pub game: Option<String>,
    pub date: Option<String>,
}

impl Params {
    /// Build from raw query pairs. A repeated key keeps its first value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (name, value) in pairs {
            let slot = match name.as_str() {
                "key" => &mut params.key,
                "game" => &mut params.game,
                "date" => &mut params.date,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }

    pub fn game(&self) -> Option<&str> {
        self.game.as_deref().filter(|s| !s.is_empty())
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref().filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Health,
    Routes,
    Predictions,
    PredictionsCsv,
    /// Predictions CSV pinned to one game.
    GameCsv(&'static str),
    WeeklyReport,
    WeeklyReportCsv,
    HistoricalWeek,
    HistoricalCsv,
    Backtest,
    BacktestCsv,
    Archives,
    ArchivesCsv,
    ViewPredictions,
}

#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub path: &'static str,
    pub auth: bool,
    pub endpoint: Endpoint,
}

const fn open(path: &'static str, endpoint: Endpoint) -> Route {
    Route {
        path,
        auth: false,
        endpoint,
    }
}

const fn keyed(path: &'static str, endpoint: Endpoint) -> Route {
    Route {
        path,
        auth: true,
        endpoint,
    }
}

// Legacy paths point at the same endpoint as their canonical route.
pub const ROUTES: &[Route] = &[
    open("/", Endpoint::Health),
    open("/health", Endpoint::Health),
    open("/routes", Endpoint::Routes),
    keyed("/predictions", Endpoint::Predictions),
    keyed("/predictions_csv", Endpoint::PredictionsCsv),
    keyed("/predictions.csv", Endpoint::PredictionsCsv),
    keyed("/mega", Endpoint::GameCsv("Mega Millions")),
    keyed("/powerball", Endpoint::GameCsv("Powerball")),
    keyed("/nywin3", Endpoint::GameCsv("NY Win 3")),
    keyed("/nywin4", Endpoint::GameCsv("NY Win 4")),
    keyed("/glide_weekly_report", Endpoint::WeeklyReport),
    keyed("/predictions/data/glide_weekly_report.json", Endpoint::WeeklyReport),
    keyed("/weekly_report_csv", Endpoint::WeeklyReportCsv),
    keyed("/historical_week", Endpoint::HistoricalWeek),
    keyed("/weekly_report_for_week", Endpoint::HistoricalWeek),
    keyed("/glide_weekly_report_for_week", Endpoint::HistoricalWeek),
    keyed("/historical_csv", Endpoint::HistoricalCsv),
    keyed("/backtest", Endpoint::Backtest),
    keyed("/glide_backtest", Endpoint::Backtest),
    keyed("/backtest_csv", Endpoint::BacktestCsv),
    keyed("/archives", Endpoint::Archives),
    keyed("/archives_csv", Endpoint::ArchivesCsv),
    keyed("/glide_view_predictions", Endpoint::ViewPredictions),
];

pub fn route_paths() -> Vec<&'static str> {
    let mut paths: Vec<_> = ROUTES.iter().map(|r| r.path).collect();
    paths.sort_unstable();
    paths
}

pub fn build_router(state: AppState) -> Router {
    let mut router: Router<AppState> = Router::new();
    for &route in ROUTES {
        router = router.route(
            route.path,
            get(
                move |State(state): State<AppState>,
                      query: Result<Query<Vec<(String, String)>>, QueryRejection>| async move {
                    let params = match query {
                        Ok(Query(pairs)) => Params::from_pairs(pairs),
                        Err(rejection) => {
                            // Unreadable query: serve it as if no parameters were sent.
                            tracing::debug!(route = route.path, %rejection, "ignoring malformed query");
                            Params::default()
                        }
                    };
                    dispatch(&state, route, &params)
                },
            ),
        );
    }

    router
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn dispatch(state: &AppState, route: Route, params: &Params) -> Result<Payload, ApiError> {
    if route.auth && !authorize(state.settings.api_key(), params.key.as_deref()) {
        tracing::debug!(route = route.path, "unauthorized request");
        return Err(ApiError::Unauthorized);
    }
    handlers::run(route.endpoint, &state.settings.layout(), params)
}
