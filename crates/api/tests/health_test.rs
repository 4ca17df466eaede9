mod test_utils;

use pretty_assertions::assert_eq;
use serde_json::Value;

use test_utils::TestContext;

#[tokio::test]
async fn test_health_check() {
    let server = TestContext::new().server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_version() {
    let server = TestContext::new().server();

    let response = server.get("/version").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["name"], "salonslot-api");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
