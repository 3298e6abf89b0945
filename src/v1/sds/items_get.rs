#![forbid(unsafe_code)]

use poem_openapi::{ param::Path, OpenApi, payload::Json, Object };

// ***************************************************************************
//                          Request/Response Definiions
// ***************************************************************************
pub struct ItemsApi;

#[derive(Object)]
struct RespGetItem
{
    item_id: i32,
}

// ***************************************************************************
//                             OpenAPI Endpoint
// ***************************************************************************
#[OpenApi]
impl ItemsApi {
    #[oai(path = "/items/:item_id", method = "get")]
    async fn get_item(&self, item_id: Path<i32>) -> Json<RespGetItem> {
        // Echo the typed path parameter.  A non-integer value never reaches
        // this handler; parameter validation rejects it with a 400.
        Json(RespGetItem::new(item_id.0))
    }
}

// ***************************************************************************
//                          Request/Response Methods
// ***************************************************************************
impl RespGetItem {
    fn new(item_id: i32) -> Self {
        Self {item_id}
    }
}

// ***************************************************************************
//                                  Tests
// ***************************************************************************
#[cfg(test)]
mod tests {
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;
    use serde_json::json;

    use super::ItemsApi;

    #[tokio::test]
    async fn item_id_is_echoed() {
        let api = OpenApiService::new(ItemsApi, "test", "0.1.0");
        let cli = TestClient::new(api);
        let resp = cli.get("/items/5").send().await;
        resp.assert_status_is_ok();
        resp.assert_json(json!({"item_id": 5})).await;
    }

    #[tokio::test]
    async fn non_integer_item_id_is_rejected() {
        let api = OpenApiService::new(ItemsApi, "test", "0.1.0");
        let cli = TestClient::new(api);
        let resp = cli.get("/items/five").send().await;
        resp.assert_status(StatusCode::BAD_REQUEST);
    }
}
