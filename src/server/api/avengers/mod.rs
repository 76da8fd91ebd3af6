//! Handlers for the avenger CRUD endpoints.
use actix_web::{web, HttpResponse, Responder};

use crate::db::models::avenger::{CreateAvenger, Manager as _};
use crate::server::errors::HTTPError;

use super::state::{App as AppState, Global as _};

/// Handler for listing all avengers.
///
/// Responds with a JSON array ordered ascending by id; an empty table yields
/// an empty array, not an error.
#[tracing::instrument(skip(data))]
pub async fn list(data: web::Data<AppState>) -> impl Responder {
    match data.db().find_all().await {
        Ok(avengers) => HttpResponse::Ok().json(avengers),
        Err(err) => {
            tracing::error!("Error listing avengers: {err}");
            HttpResponse::InternalServerError().body(HTTPError::InternalServerError.to_string())
        }
    }
}

/// Handler for creating an avenger.
///
/// Responds with the persisted row. The id is the database-generated key;
/// an id supplied by the caller is ignored.
#[tracing::instrument(skip(data))]
pub async fn create(
    data: web::Data<AppState>,
    payload: web::Json<CreateAvenger>,
) -> impl Responder {
    match data.db().create(&payload.name).await {
        Ok(avenger) => HttpResponse::Created().json(avenger),
        Err(err) => {
            tracing::error!("Error creating avenger '{}': {err}", payload.name);
            HttpResponse::InternalServerError().body(HTTPError::InternalServerError.to_string())
        }
    }
}

/// Handler for deleting an avenger by id.
///
/// Responds with an empty body whether or not the id existed; at most one
/// row is removed.
#[tracing::instrument(skip(data))]
pub async fn delete(data: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    let id = path.into_inner();
    match data.db().delete_by_id(id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => {
            tracing::error!("Error deleting avenger {id}: {err}");
            HttpResponse::InternalServerError().body(HTTPError::InternalServerError.to_string())
        }
    }
}
