use super::*;

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn base_routes_builds_without_leptos_configuration() {
    let _router: Router = base_routes();
}
