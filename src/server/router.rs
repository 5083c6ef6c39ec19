use axum::{routing::get, Router};

use crate::server::{
    controller::modding_history::{
        discussions, events, index, kudosu, posts, votes_given, votes_received,
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/users/{user}/modding", get(index))
        .route("/api/users/{user}/modding/discussions", get(discussions))
        .route("/api/users/{user}/modding/events", get(events))
        .route("/api/users/{user}/modding/posts", get(posts))
        .route("/api/users/{user}/modding/votes-given", get(votes_given))
        .route("/api/users/{user}/modding/votes-received", get(votes_received))
        .route("/api/users/{user}/modding/kudosu", get(kudosu))
}
