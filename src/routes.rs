use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    AppState,
    error::{AppError, AppResult},
    models::{CreateMovie, Movie, MovieId},
};

/// Builds the full application router. `main` and the integration tests
/// both go through here, so they run the same middleware stack.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/movies", get(list_movies).post(create_movie))
        .route("/movies/{id}", get(get_movie).delete(delete_movie))
        .with_state(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}

async fn get_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<MovieId>,
) -> AppResult<Json<Movie>> {
    let movie = state.catalog.get(id).await?.ok_or(AppError::MovieNotFound)?;
    Ok(Json(movie.into()))
}

async fn list_movies(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<Movie>>> {
    let movies = state.catalog.list_all().await?;
    Ok(Json(movies.into_iter().map(Movie::from).collect()))
}

async fn create_movie(
    State(state): State<Arc<AppState>>,
    Json(input): Json<CreateMovie>,
) -> AppResult<(StatusCode, Json<Movie>)> {
    if input.name.is_empty() {
        return Err(AppError::Validation("name must not be empty".to_string()));
    }

    let movie = state.catalog.insert(input).await?;
    Ok((StatusCode::CREATED, Json(movie.into())))
}

async fn delete_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<MovieId>,
) -> AppResult<StatusCode> {
    if state.catalog.get(id).await?.is_none() {
        return Err(AppError::MovieNotFound);
    }

    // Not atomic with the check above: a racing delete wins and this
    // becomes a no-op.
    state.catalog.delete(id).await?;
    Ok(StatusCode::OK)
}
