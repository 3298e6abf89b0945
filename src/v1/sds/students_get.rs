#![forbid(unsafe_code)]

use poem::Request;
use poem_openapi::{ OpenApi, payload::Json, Object, param::Query, ApiResponse };
use anyhow::Result;

use crate::utils::errors::HttpResult;
use crate::utils::records::{Student, STUDENT};
use crate::utils::sds_utils::{self, RequestDebug};
use log::error;

// ***************************************************************************
//                                Constants
// ***************************************************************************
const NOT_FOUND_MSG : &str = "Data not found";

// ***************************************************************************
//                          Request/Response Definiions
// ***************************************************************************
pub struct StudentsApi;

#[derive(Object)]
struct ReqGetStudents
{
    id: i32,
    name: Option<String>,
}

#[derive(Object, Debug)]
struct RespNotFound
{
    message: String,
}

// Implement the debug record trait for logging.
impl RequestDebug for ReqGetStudents {
    type Req = ReqGetStudents;
    fn get_request_info(&self) -> String {
        let mut s = String::with_capacity(255);
        s.push_str("  Request query parameters:");
        s.push_str("\n    id: ");
        s.push_str(&self.id.to_string());
        s.push_str("\n    name: ");
        s.push_str(self.name.as_deref().unwrap_or("<none>"));
        s
    }
}

// ------------------- HTTP Status Codes -------------------
#[derive(Debug, ApiResponse)]
enum SdsResponse {
    #[oai(status = 200)]
    Http200(Json<Student>),
    #[oai(status = 404)]
    Http404(Json<RespNotFound>),
    #[oai(status = 500)]
    Http500(Json<HttpResult>),
}

fn make_http_200(resp: Student) -> SdsResponse {
    SdsResponse::Http200(Json(resp))
}
fn make_http_404(msg: String) -> SdsResponse {
    SdsResponse::Http404(Json(RespNotFound {message: msg}))
}
fn make_http_500(msg: String) -> SdsResponse {
    SdsResponse::Http500(Json(HttpResult::new(500.to_string(), msg)))
}

// ***************************************************************************
//                             OpenAPI Endpoint
// ***************************************************************************
#[OpenApi]
impl StudentsApi {
    #[oai(path = "/students/", method = "get")]
    async fn get_student_api(&self, http_req: &Request, id: Query<i32>,
                             name: Query<Option<String>>) -> SdsResponse {
        // Package the request parameters.  Both are already validated; a
        // missing or non-integer id never reaches this handler.
        let req = ReqGetStudents {id: id.0, name: name.0};

        // -------------------- Process Request ----------------------
        // Process the request.
        match process(http_req, &req) {
            Ok(r) => r,
            Err(e) => {
                let msg = "ERROR: ".to_owned() + e.to_string().as_str();
                error!("{}", msg);
                make_http_500(msg)
            }
        }
    }
}

// ***************************************************************************
//                          Private Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// process:
// ---------------------------------------------------------------------------
/// Process the request.
fn process(http_req: &Request, req: &ReqGetStudents) -> Result<SdsResponse> {
    // Conditional logging depending on log level.
    sds_utils::debug_request(http_req, req);

    // Match the query parameters against the directory record.
    match lookup_student(req.id, req.name.as_deref()) {
        Some(student) => Ok(make_http_200(student.clone())),
        None => Ok(make_http_404(NOT_FOUND_MSG.to_string())),
    }
}

// ---------------------------------------------------------------------------
// lookup_student:
// ---------------------------------------------------------------------------
/** Match the query parameters against the directory record.  The rules are
 * evaluated in order: both parameters matching, then id alone, then name
 * alone.  The first rule that matches returns the record.
 */
fn lookup_student(id: i32, name: Option<&str>) -> Option<&'static Student> {
    let student = &*STUDENT;

    if let Some(name) = name {
        if student.id == id && student.name == name {
            return Some(student);
        }
    }
    if student.id == id {
        return Some(student);
    }
    if let Some(name) = name {
        if student.name == name {
            return Some(student);
        }
    }

    None
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

    use super::{lookup_student, StudentsApi};

    #[tokio::test]
    async fn both_parameters_matching_returns_record() {
        let api = OpenApiService::new(StudentsApi, "test", "0.1.0");
        let cli = TestClient::new(api);
        let resp = cli.get("/students/")
            .query("id", &1)
            .query("name", &"Jean")
            .send().await;
        resp.assert_status_is_ok();
        resp.assert_json(json!({"id": 1, "name": "Jean", "age": 25, "year": "3"})).await;
    }

    #[tokio::test]
    async fn id_alone_matching_returns_record() {
        let api = OpenApiService::new(StudentsApi, "test", "0.1.0");
        let cli = TestClient::new(api);

        // No name at all.
        let resp = cli.get("/students/").query("id", &1).send().await;
        resp.assert_status_is_ok();
        resp.assert_json(json!({"id": 1, "name": "Jean", "age": 25, "year": "3"})).await;

        // Mismatched name loses to a matching id.
        let resp = cli.get("/students/")
            .query("id", &1)
            .query("name", &"Maria")
            .send().await;
        resp.assert_status_is_ok();
        resp.assert_json(json!({"id": 1, "name": "Jean", "age": 25, "year": "3"})).await;
    }

    #[tokio::test]
    async fn name_alone_matching_returns_record() {
        let api = OpenApiService::new(StudentsApi, "test", "0.1.0");
        let cli = TestClient::new(api);
        let resp = cli.get("/students/")
            .query("id", &999)
            .query("name", &"Jean")
            .send().await;
        resp.assert_status_is_ok();
        resp.assert_json(json!({"id": 1, "name": "Jean", "age": 25, "year": "3"})).await;
    }

    #[tokio::test]
    async fn no_match_returns_not_found() {
        let api = OpenApiService::new(StudentsApi, "test", "0.1.0");
        let cli = TestClient::new(api);
        let resp = cli.get("/students/")
            .query("id", &999)
            .query("name", &"Maria")
            .send().await;
        resp.assert_status(StatusCode::NOT_FOUND);
        resp.assert_json(json!({"message": "Data not found"})).await;
    }

    #[tokio::test]
    async fn missing_id_is_rejected() {
        let api = OpenApiService::new(StudentsApi, "test", "0.1.0");
        let cli = TestClient::new(api);
        let resp = cli.get("/students/").send().await;
        resp.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn non_integer_id_is_rejected() {
        let api = OpenApiService::new(StudentsApi, "test", "0.1.0");
        let cli = TestClient::new(api);
        let resp = cli.get("/students/").query("id", &"one").send().await;
        resp.assert_status(StatusCode::BAD_REQUEST);
    }

    #[test]
    fn match_rules_evaluate_in_order() {
        assert!(lookup_student(1, Some("Jean")).is_some());
        assert!(lookup_student(1, None).is_some());
        assert!(lookup_student(1, Some("Maria")).is_some());
        assert!(lookup_student(999, Some("Jean")).is_some());
        assert!(lookup_student(999, None).is_none());
        assert!(lookup_student(999, Some("Maria")).is_none());
    }
}
