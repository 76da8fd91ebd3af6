//! A central place to register App routes.
use crate::server::api::avengers;
use crate::server::api::state::Global;
use actix_service::ServiceFactory;
use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    web, App, Error,
};

/// Central place to register all the App routing.
///
/// The route table is explicit and built once at start-up:
/// * `GET /avengers` - list all avengers, ascending by id
/// * `POST /avengers` - create an avenger, responding with the persisted row
/// * `DELETE /avengers/{id}` - delete an avenger by id
#[tracing::instrument(skip(app, state))]
pub fn register_app<
    T: Global + Clone + 'static,
    U: MessageBody,
    V: ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<U>,
        Config = (),
        InitError = (),
        Error = Error,
    >,
>(
    app: App<V>,
    state: &T,
) -> App<V> {
    app.app_data(web::Data::new(state.clone()))
        .service(
            web::resource("/avengers")
                .route(web::get().to(avengers::list))
                .route(web::post().to(avengers::create)),
        )
        .service(web::resource("/avengers/{id}").route(web::delete().to(avengers::delete)))
}
