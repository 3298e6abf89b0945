#![forbid(unsafe_code)]

use poem_openapi::{ param::Path, OpenApi, payload::Json, Object };

// ***************************************************************************
//                          Request/Response Definiions
// ***************************************************************************
pub struct BooksApi;

#[derive(Object)]
struct RespGetBook
{
    book_id: i32,
}

// ***************************************************************************
//                             OpenAPI Endpoint
// ***************************************************************************
#[OpenApi]
impl BooksApi {
    #[oai(path = "/books/:book_id", method = "get")]
    async fn get_book(&self, book_id: Path<i32>) -> Json<RespGetBook> {
        Json(RespGetBook::new(book_id.0))
    }
}

// ***************************************************************************
//                          Request/Response Methods
// ***************************************************************************
impl RespGetBook {
    fn new(book_id: i32) -> Self {
        Self {book_id}
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

    use super::BooksApi;

    #[tokio::test]
    async fn book_id_is_echoed() {
        let api = OpenApiService::new(BooksApi, "test", "0.1.0");
        let cli = TestClient::new(api);
        let resp = cli.get("/books/5").send().await;
        resp.assert_status_is_ok();
        resp.assert_json(json!({"book_id": 5})).await;
    }

    #[tokio::test]
    async fn non_integer_book_id_is_rejected() {
        let api = OpenApiService::new(BooksApi, "test", "0.1.0");
        let cli = TestClient::new(api);
        let resp = cli.get("/books/recent").send().await;
        resp.assert_status(StatusCode::BAD_REQUEST);
    }
}
