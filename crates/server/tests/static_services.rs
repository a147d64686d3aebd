mod support;

use axum::http::{header, StatusCode};
use serde_json::json;

use server::routes;
use support::{cors, get};

#[tokio::test]
async fn accounts_answers_with_and_without_slash() {
    let app = routes::build_accounts_router(cors());
    for path in ["/accounts", "/accounts/"] {
        let res = get(&app, path).await;
        assert_eq!(res.status, StatusCode::OK, "path {path}");
        assert_eq!(res.json(), json!({"message": "This is the accounts service"}));
    }
    assert_eq!(get(&app, "/health").await.json(), json!({"status": "healthy", "service": "accounts"}));
}

#[tokio::test]
async fn blog_serves_trailing_slash_and_redirects_bare_path() {
    let app = routes::build_blog_router(cors());
    let res = get(&app, "/blog/").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json(), json!({"message": "This is the blog service"}));

    let res = get(&app, "/blog").await;
    assert_eq!(res.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(res.headers.get(header::LOCATION).unwrap(), "/blog/");
}

#[tokio::test]
async fn unknown_paths_are_404() {
    let app = routes::build_blog_router(cors());
    assert_eq!(get(&app, "/orders").await.status, StatusCode::NOT_FOUND);
}
