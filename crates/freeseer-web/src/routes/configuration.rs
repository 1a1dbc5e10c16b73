//! `/configuration` endpoints.
//!
//! Only the plugin listing is backed by real data. The general, recording
//! and per-plugin documents are served as empty objects and PUT bodies are
//! accepted without being parsed or persisted; the settings they will carry
//! are owned by the recorder, not this API.
//!
//! All four `{plugins}` routes reject a category outside the catalog with 404.

use axum::{
    body::Bytes,
    extract::{
        Path,
        State,
    },
    http::StatusCode,
    routing::get,
    Json,
    Router,
};
use freeseer_plugin_api::PluginCategory;
use serde::{
    Deserialize,
    Serialize,
};
use serde_json::{
    Map,
    Value,
};

use crate::error::ApiResult;
use crate::state::AppState;

/// JSON object body for configuration documents
pub type ConfigurationDocument = Map<String, Value>;

#[derive(Debug, Serialize, Deserialize)]
pub struct PluginsResponse {
    pub plugins: Vec<String>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/general",
            get(get_general_configuration).put(put_general_configuration),
        )
        .route(
            "/recording",
            get(get_recording_configuration).put(put_recording_configuration),
        )
        .route("/recording/{plugins}", get(get_plugins).put(select_plugin))
        .route(
            "/recording/{plugins}/{plugin}",
            get(get_plugin).put(put_plugin),
        )
}

async fn get_general_configuration() -> Json<ConfigurationDocument> {
    tracing::debug!("GET /configuration/general");
    Json(ConfigurationDocument::new())
}

async fn put_general_configuration(body: Bytes) -> StatusCode {
    tracing::debug!(body_len = body.len(), "PUT /configuration/general");
    StatusCode::OK
}

async fn get_recording_configuration() -> Json<ConfigurationDocument> {
    tracing::debug!("GET /configuration/recording");
    Json(ConfigurationDocument::new())
}

async fn put_recording_configuration(body: Bytes) -> StatusCode {
    tracing::debug!(body_len = body.len(), "PUT /configuration/recording");
    StatusCode::OK
}

/// Names of the available plugins in the `plugins` category.
async fn get_plugins(
    State(state): State<AppState>, Path(plugins): Path<String>,
) -> ApiResult<Json<PluginsResponse>> {
    tracing::debug!(plugins = %plugins, "GET /configuration/recording/{}", plugins);

    let category: PluginCategory = plugins.parse()?;
    let available = state
        .context
        .plugin_manager
        .get_plugins_of_category(category)
        .into_iter()
        .map(|p| p.name)
        .collect();

    Ok(Json(PluginsResponse { plugins: available }))
}

async fn select_plugin(Path(plugins): Path<String>, body: Bytes) -> ApiResult<StatusCode> {
    tracing::debug!(
        plugins = %plugins,
        body_len = body.len(),
        "PUT /configuration/recording/{}",
        plugins
    );

    let _category: PluginCategory = plugins.parse()?;
    Ok(StatusCode::OK)
}

async fn get_plugin(
    State(state): State<AppState>, Path((plugins, plugin)): Path<(String, String)>,
) -> ApiResult<Json<ConfigurationDocument>> {
    tracing::debug!(
        plugins = %plugins,
        plugin = %plugin,
        "GET /configuration/recording/{}/{}",
        plugins,
        plugin
    );

    let category: PluginCategory = plugins.parse()?;
    note_unknown_plugin(&state, category, &plugin);
    Ok(Json(ConfigurationDocument::new()))
}

async fn put_plugin(
    State(state): State<AppState>, Path((plugins, plugin)): Path<(String, String)>, body: Bytes,
) -> ApiResult<StatusCode> {
    tracing::debug!(
        plugins = %plugins,
        plugin = %plugin,
        body_len = body.len(),
        "PUT /configuration/recording/{}/{}",
        plugins,
        plugin
    );

    let category: PluginCategory = plugins.parse()?;
    note_unknown_plugin(&state, category, &plugin);
    Ok(StatusCode::OK)
}

/// Plugin documents are placeholders, so a name missing from the catalog is
/// logged rather than rejected.
fn note_unknown_plugin(state: &AppState, category: PluginCategory, plugin: &str) {
    if state
        .context
        .plugin_manager
        .get_plugin(category, plugin)
        .is_none()
    {
        tracing::debug!(
            category = category.label(),
            plugin = %plugin,
            "Plugin not in catalog"
        );
    }
}
