use axum::{
    extract::{Path, Query, State, WebSocketUpgrade},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use tracing::{info, instrument};

use super::socket::EventStream;
use super::types::{
    FiltersResponse, ItemsPerPageRequest, ItemsQuery, ProfileRequest, ProfilesResponse,
    RenameItemRequest, ShowAllRequest, ViewSettingsResponse,
};
use crate::shared::{AppError, AppState};
use crate::store::{GameStats, IndexedItem, ItemRecord, ItemsPage};
use crate::tracker::ConsumableFilter;

/// GET /stats
#[instrument(name = "get_stats", skip(state))]
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<GameStats>, AppError> {
    let stats = state.store.stats(&state.tables, Utc::now()).await?;
    Ok(Json(stats))
}

/// POST /stats/reset
#[instrument(name = "reset_stats", skip(state))]
pub async fn reset_stats(State(state): State<AppState>) -> Result<Json<GameStats>, AppError> {
    state.store.reset_statistics().await;
    let stats = state.store.stats(&state.tables, Utc::now()).await?;
    Ok(Json(stats))
}

/// GET /items?page=&per_page=
#[instrument(name = "get_items", skip(state))]
pub async fn get_items(
    State(state): State<AppState>,
    Query(query): Query<ItemsQuery>,
) -> Json<ItemsPage> {
    let page = state
        .store
        .items_page(query.page.unwrap_or_default(), query.per_page)
        .await;
    Json(page)
}

/// GET /items/all
#[instrument(name = "get_all_items", skip(state))]
pub async fn get_all_items(State(state): State<AppState>) -> Json<Vec<IndexedItem>> {
    Json(state.store.all_items().await)
}

/// PUT /items/:index/name
///
/// Returns only after the renamed log has been written (or the write failed).
#[instrument(name = "rename_item", skip(state, request))]
pub async fn rename_item(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(request): Json<RenameItemRequest>,
) -> Result<Json<ItemRecord>, AppError> {
    let record = state.store.rename_item(index, &request.name).await?;
    Ok(Json(record))
}

/// GET /items/export
#[instrument(name = "export_items", skip(state))]
pub async fn export_items(State(state): State<AppState>) -> Result<Response, AppError> {
    let body = state.store.export_items().await?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"items.txt\"",
            ),
        ],
        body,
    )
        .into_response())
}

/// PUT /settings/show-all
#[instrument(name = "set_show_all", skip(state))]
pub async fn set_show_all(
    State(state): State<AppState>,
    Json(request): Json<ShowAllRequest>,
) -> Json<ViewSettingsResponse> {
    let view = state.store.set_show_all(request.show_all).await;
    Json(ViewSettingsResponse {
        items_per_page: view.items_per_page,
        show_all: view.show_all,
    })
}

/// PUT /settings/items-per-page
#[instrument(name = "set_items_per_page", skip(state))]
pub async fn set_items_per_page(
    State(state): State<AppState>,
    Json(request): Json<ItemsPerPageRequest>,
) -> Json<ViewSettingsResponse> {
    let items_per_page = state.store.set_items_per_page(request.items_per_page).await;
    let show_all = state.store.read().await.view.show_all;
    Json(ViewSettingsResponse {
        items_per_page,
        show_all,
    })
}

/// GET /filters
#[instrument(name = "get_filters", skip(state))]
pub async fn get_filters(State(state): State<AppState>) -> Json<FiltersResponse> {
    let enabled = state.store.read().await.profile.filters_enabled;
    Json(FiltersResponse {
        enabled,
        categories: ConsumableFilter::categories(),
    })
}

/// POST /filters/toggle
#[instrument(name = "toggle_filters", skip(state))]
pub async fn toggle_filters(State(state): State<AppState>) -> Json<FiltersResponse> {
    let enabled = state.store.toggle_filters().await;
    Json(FiltersResponse {
        enabled,
        categories: ConsumableFilter::categories(),
    })
}

/// GET /profiles
#[instrument(name = "list_profiles", skip(state))]
pub async fn list_profiles(State(state): State<AppState>) -> Result<Json<ProfilesResponse>, AppError> {
    profiles_response(&state).await.map(Json)
}

/// POST /profiles
#[instrument(name = "create_profile", skip(state))]
pub async fn create_profile(
    State(state): State<AppState>,
    Json(request): Json<ProfileRequest>,
) -> Result<Json<ProfilesResponse>, AppError> {
    state.store.create_profile(&request.name).await?;
    profiles_response(&state).await.map(Json)
}

/// PUT /profiles/current
#[instrument(name = "switch_profile", skip(state))]
pub async fn switch_profile(
    State(state): State<AppState>,
    Json(request): Json<ProfileRequest>,
) -> Result<Json<ProfilesResponse>, AppError> {
    state.store.switch_profile(&request.name).await?;
    profiles_response(&state).await.map(Json)
}

/// DELETE /profiles/:name
#[instrument(name = "delete_profile", skip(state))]
pub async fn delete_profile(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ProfilesResponse>, AppError> {
    state.store.delete_profile(&name).await?;
    profiles_response(&state).await.map(Json)
}

/// GET /events
///
/// Upgrades to a websocket that streams every tracker event as JSON text.
pub async fn events_ws(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    let events = state.event_bus.subscribe();
    info!(subscribers = state.event_bus.subscriber_count(), "Event stream opened");

    ws.on_upgrade(move |socket| async move {
        if let Err(e) = EventStream::new(Box::new(socket), events).run().await {
            info!(error = ?e, "Event stream closed with error");
        }
    })
}

async fn profiles_response(state: &AppState) -> Result<ProfilesResponse, AppError> {
    Ok(ProfilesResponse {
        profiles: state.store.list_profiles().await?,
        current: state.store.current_profile_name().await,
    })
}
