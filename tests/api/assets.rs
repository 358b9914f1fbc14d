use reqwest::StatusCode;

use crate::helpers::TestApp;

const NOT_FOUND_BODY: &str =
    "<h1>404 - Page Not Found</h1><p>The page you're looking for doesn't exist.</p>";

#[tokio::test]
async fn root_serves_the_index_document() {
    let app = TestApp::spawn(None).await;

    let res = app.get("/").await.expect("Failed to execute request");

    assert_eq!(StatusCode::OK, res.status());
    assert_eq!("text/html", res.headers()["content-type"]);

    let body = res.text().await.expect("Failed to read body");
    assert!(body.contains("PMC"));
}

#[tokio::test]
async fn stylesheet_is_served_with_css_content_type() {
    let app = TestApp::spawn(None).await;

    let res = app
        .get("/styles.css")
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::OK, res.status());
    assert_eq!("text/css", res.headers()["content-type"]);
}

#[tokio::test]
async fn get_contact_falls_through_to_the_static_page() {
    let app = TestApp::spawn(None).await;

    let res = app.get("/contact").await.expect("Failed to execute request");

    assert_eq!(StatusCode::OK, res.status());
    assert_eq!("text/html", res.headers()["content-type"]);

    let body = res.text().await.expect("Failed to read body");
    assert!(body.contains("<form"));
}

#[tokio::test]
async fn unknown_page_returns_fixed_not_found_body() {
    let app = TestApp::spawn(None).await;

    let res = app
        .get("/definitely-not-a-page")
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::NOT_FOUND, res.status());
    assert_eq!("text/html", res.headers()["content-type"]);
    assert_eq!(NOT_FOUND_BODY, res.text().await.expect("Failed to read body"));
}

#[tokio::test]
async fn parent_traversal_is_not_served() {
    let app = TestApp::spawn(None).await;

    let res = app
        .get("/..%2FCargo.toml")
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::NOT_FOUND, res.status());
}

#[tokio::test]
async fn public_prefixed_path_is_served() {
    let app = TestApp::spawn(None).await;

    let res = app
        .get("/public/styles.css")
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::OK, res.status());
    assert_eq!("text/css", res.headers()["content-type"]);
}
