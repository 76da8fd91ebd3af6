//! Serve the Avengers CRUD API.
#![allow(clippy::exit)]
use crate::db;
use crate::server::api::routes;
use crate::server::api::state::{App as AppState, Global};
use crate::server::tracing::AvengersRootSpanBuilder;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::{App, Error, HttpServer};

use std::{io, path::Path, process};

use actix_http::body::MessageBody;
use actix_service::ServiceFactory;
use tracing_actix_web::TracingLogger;

/// Serve the Avengers CRUD API.
#[actix_web::main]
pub async fn serve(db_path: &Path, port: u16) -> io::Result<()> {
    let bind = "127.0.0.1";
    let message = "Running Avengers API with a database in";
    tracing::info!("{message} '{}' on http://{bind}:{port}.", db_path.display());

    let db = match db::init::connect(db_path).await {
        Ok(db) => db,
        Err(err) => {
            tracing::error!(
                "error: could not connect to database. Confirm that DATABASE_URL env var is set correctly."
            );
            tracing::error!("Error: {:?}", err);
            process::exit(1);
        }
    };

    let state = AppState { db };

    HttpServer::new(move || init_app(&state))
        .bind((bind, port))?
        .run()
        .await
}

/// Initialize the application and all routing at start-up time.
///
/// # Arguments
/// * `state` - The application state
pub fn init_app<T: Global + Clone + 'static>(
    state: &T,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<impl MessageBody>,
        Config = (),
        InitError = (),
        Error = Error,
    >,
> {
    let app = App::new().wrap(TracingLogger::<AvengersRootSpanBuilder>::new());
    routes::register_app(app, state)
}
