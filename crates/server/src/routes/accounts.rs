use axum::{routing::get, Json, Router};
use common::types::Message;

pub async fn read_accounts() -> Json<Message> {
    Json(Message::new("This is the accounts service"))
}

pub fn router() -> Router {
    Router::new()
        .route("/accounts", get(read_accounts))
        .route("/accounts/", get(read_accounts))
}
