use actix_http::Request;
use actix_service::Service;
use actix_web::{
    body::MessageBody,
    dev::ServiceResponse,
    test::{self},
    Error,
};
use std::path::Path;
use tempfile::TempDir;

use avengers_api::db;
use avengers_api::server::api::state::App as AppState;
use avengers_api::server::app::init_app;

/// Create a fresh directory to hold a per-test SQLite database.
pub fn initialize_db_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Build the full application service against a database in `db_path`.
///
/// Goes through the production `init_app`, so routing, state injection and
/// migrations are the same as in a running server.
pub async fn initialize_app(
    db_path: &Path,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error> {
    let db = db::init::connect(db_path).await.unwrap();
    let state = AppState { db };
    test::init_service(init_app(&state)).await
}
