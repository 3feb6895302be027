//! Axum-specific session status route.

use axum::{extract::State, response::IntoResponse};
use axum_extra::extract::CookieJar;
use sessiongate_adapters::handlers;
use sessiongate_core::SessionStore;

use super::error::RouteError;
use crate::{
    adapters::response_builder,
    state::{SessionStatusState, session_id_from_jar},
};

#[tracing::instrument(name = "Session status", skip_all)]
pub async fn session_status<S>(
    State(state): State<SessionStatusState<S>>,
    jar: CookieJar,
) -> Result<impl IntoResponse, RouteError>
where
    S: SessionStore + 'static,
{
    let session_id = session_id_from_jar(&jar, &state.session);

    let response =
        handlers::handle_session_status(&*state.use_case, session_id, response_builder()).await?;

    Ok(response)
}
