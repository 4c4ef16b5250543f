use crate::infrastructure::state::AppState;
use crate::presentation::handlers::users;
use axum::{Router, routing::get};

/// User resource routes; every handler is gated on a valid token.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(users::list_users).post(users::create_user))
        .route("/me", get(users::get_me))
        .route(
            "/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
}
