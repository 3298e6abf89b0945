#![forbid(unsafe_code)]

use lazy_static::lazy_static;
use log::info;
use poem::{listener::TcpListener, Route};
use poem_openapi::{payload::Json, Object, OpenApi, OpenApiService};

// SDS Utilities
use crate::utils::config::{init_log, init_runtime_context, RuntimeCtx, SDS_ARGS};
use crate::utils::errors::Errors;
use crate::v1::sds::books_get::BooksApi;
use crate::v1::sds::items_get::ItemsApi;
use crate::v1::sds::students_get::StudentsApi;
use crate::v1::sds::version::VersionApi;

// Modules
mod utils;
mod v1;

// ***************************************************************************
//                                Constants
// ***************************************************************************
const SERVER_NAME : &str = "SdsServer"; // for poem logging

// ***************************************************************************
//                             Static Variables
// ***************************************************************************
// Lazily initialize the parameters variable so that is has a 'static lifetime.
// We exit if we can't read our parameters or create our data directories.
lazy_static! {
    static ref RUNTIME_CTX: RuntimeCtx = init_runtime_context();
}

// ---------------------------------------------------------------------------
// main:
// ---------------------------------------------------------------------------
#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // --------------- Initialize SDS -----------------
    // Announce ourselves.
    println!("Starting sds_server!");

    // Initialize the server.
    sds_init();

    // Nothing left to do when only directory creation was requested.
    if SDS_ARGS.create_dirs_only {
        println!("Data directories created under {}.", RUNTIME_CTX.sds_dirs.root_dir);
        return Ok(());
    }

    // --------------- Main Loop Set Up ---------------
    // Assign base URL.
    let sds_url = format!("{}:{}",
        RUNTIME_CTX.parms.config.http_addr,
        RUNTIME_CTX.parms.config.http_port);

    // Create a tuple with the greeting endpoint and the imported lookup endpoints.
    let endpoints = (RootApi, ItemsApi, BooksApi, StudentsApi, VersionApi);
    let api_service =
        OpenApiService::new(endpoints, "SDS Server", "0.1.0").server(sds_url);

    // Allow the generated openapi specs to be retrieved from the server.
    let spec = api_service.spec_endpoint();
    let spec_yaml = api_service.spec_endpoint_yaml();

    // Create the routes and run the server.
    let addr = format!("{}{}", "0.0.0.0:", RUNTIME_CTX.parms.config.http_port);
    let ui = api_service.swagger_ui();
    let app = Route::new()
        .nest("/", api_service)
        .nest("/docs", ui)
        .at("/spec", spec)
        .at("/spec_yaml", spec_yaml);

    // ------------------ Main Loop -------------------
    poem::Server::new(TcpListener::bind(addr))
        .name(SERVER_NAME)
        .run(app)
        .await
}

// ***************************************************************************
//                             Private Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// sds_init:
// ---------------------------------------------------------------------------
/** Initialize all subsystems and data structures other than those needed
 * to configure the main loop processor.
 */
fn sds_init() {
    // Configure our log.
    init_log();

    // Force the reading of input parameters and initialization of runtime context.
    info!("{}", Errors::InputParms(format!("{:#?}", *RUNTIME_CTX)));

    // Log build info.
    print_version_info();
}

// ---------------------------------------------------------------------------
// print_version_info:
// ---------------------------------------------------------------------------
fn print_version_info() {
    // Log build info.
    info!("{}.", format!("\n*** Running SDS={}, RUSTC={}",
                        option_env!("CARGO_PKG_VERSION").unwrap_or("unknown"),
                        env!("RUSTC_VERSION")),
    );
}

// ***************************************************************************
//                             Root Endpoint
// ***************************************************************************
// Greeting structure.
struct RootApi;

#[derive(Object)]
struct RespHello
{
    message: String,
}

// ---------------------------------------------------------------------------
// root endpoint:
// ---------------------------------------------------------------------------
#[OpenApi]
impl RootApi {
    #[oai(path = "/", method = "get")]
    async fn index(&self) -> Json<RespHello> {
        Json(RespHello { message: "Hello World".to_string() })
    }
}

// ***************************************************************************
//                                  Tests
// ***************************************************************************
#[cfg(test)]
mod tests {
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;
    use serde_json::json;

    use super::RootApi;

    #[tokio::test]
    async fn root_returns_greeting() {
        let api = OpenApiService::new(RootApi, "test", "0.1.0");
        let cli = TestClient::new(api);
        let resp = cli.get("/").send().await;
        resp.assert_status_is_ok();
        resp.assert_json(json!({"message": "Hello World"})).await;
    }
}
