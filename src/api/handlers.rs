use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::types::MoviePayload;
use crate::db::{DbError, Movie, MovieKey};
use crate::server::AppState;

pub async fn list_movies(
    State(state): State<AppState>,
) -> Result<Json<Vec<Movie>>, (StatusCode, String)> {
    match state.db.list_movies().await {
        Ok(movies) => Ok(Json(movies)),
        Err(e) => Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string())),
    }
}

pub async fn create_movie(
    State(state): State<AppState>,
    payload: Result<Json<MoviePayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Movie>), (StatusCode, String)> {
    let Json(payload) = payload.map_err(|e| (StatusCode::BAD_REQUEST, e.body_text()))?;

    // Any client-supplied id is dropped here so the backend mints one.
    let fields = payload.into_fields();

    let movie = state
        .db
        .create_movie(&fields)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok((StatusCode::CREATED, Json(movie)))
}

pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<MoviePayload>, JsonRejection>,
) -> Response {
    let Ok(key) = MovieKey::parse(&id) else {
        return StatusCode::BAD_REQUEST.into_response();
    };

    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(e) => return (StatusCode::BAD_REQUEST, e.body_text()).into_response(),
    };
    let fields = payload.into_fields();

    match state.db.update_movie(&key, &fields).await {
        Ok(()) => {
            // Echo the submitted values instead of re-reading the record.
            let movie = Movie {
                id: key.to_string(),
                name: fields.name,
                director: fields.director,
                genre: fields.genre,
            };
            Json(movie).into_response()
        }
        Err(DbError::NotFound(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

pub async fn delete_movie(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let Ok(key) = MovieKey::parse(&id) else {
        return StatusCode::BAD_REQUEST.into_response();
    };

    match state.db.delete_movie(&key).await {
        Ok(()) => Json("Record deleted").into_response(),
        Err(DbError::NotFound(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
