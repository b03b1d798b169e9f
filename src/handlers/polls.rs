use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::types::{Poll, PollId, PollInput};
use crate::{PollsError, router::PollsState};

/// GET /api/polls
pub async fn list_polls(State(state): State<PollsState>) -> Result<Json<Vec<Poll>>, PollsError> {
    Ok(Json(state.polls.list().await?))
}

/// GET /api/polls/{id}
pub async fn get_poll(
    State(state): State<PollsState>,
    Path(id): Path<PollId>,
) -> Result<Json<Poll>, PollsError> {
    state
        .polls
        .find(id)
        .await?
        .map(Json)
        .ok_or(PollsError::NotFound(id))
}

/// POST /api/polls -> 201 with the stored poll and a `Location` pointing at it.
pub async fn create_poll(
    State(state): State<PollsState>,
    Json(input): Json<PollInput>,
) -> Result<Response, PollsError> {
    let poll = state.polls.add(input).await?;
    let location = format!("/api/polls/{}", poll.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(poll),
    )
        .into_response())
}

/// PUT /api/polls/{id}
pub async fn update_poll(
    State(state): State<PollsState>,
    Path(id): Path<PollId>,
    Json(input): Json<PollInput>,
) -> Result<StatusCode, PollsError> {
    if state.polls.update(id, input).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(PollsError::NotFound(id))
    }
}

/// DELETE /api/polls/{id}
pub async fn delete_poll(
    State(state): State<PollsState>,
    Path(id): Path<PollId>,
) -> Result<StatusCode, PollsError> {
    if state.polls.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(PollsError::NotFound(id))
    }
}
