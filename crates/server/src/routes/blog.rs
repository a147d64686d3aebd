use axum::{response::Redirect, routing::get, Json, Router};
use common::types::Message;

pub async fn read_blog() -> Json<Message> {
    Json(Message::new("This is the blog service"))
}

/// Only the trailing-slash path is canonical; the bare one redirects to it.
pub fn router() -> Router {
    Router::new()
        .route("/blog/", get(read_blog))
        .route("/blog", get(|| async { Redirect::temporary("/blog/") }))
}
