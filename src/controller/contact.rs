use actix_web::dev::HttpServiceFactory;
use actix_web::http::{header, Method};
use actix_web::{web, HttpResponse, HttpResponseBuilder};

use serde_json::json;

use crate::controller::assets;
use crate::dispatch::{DispatchError, Dispatcher};
use crate::domain::ContactForm;

const SENT_REDIRECT: &str = "/contact?sent=true";
const ERROR_REDIRECT: &str = "/contact?error=true";

/// Contact form endpoint for the embedded site server.
///
/// Only POST submits the form; every other method falls through to the
/// static contact page.
pub fn site_resource() -> impl HttpServiceFactory {
    web::resource("/contact")
        .route(web::post().to(submit))
        .default_service(web::to(assets::serve))
}

/// Standalone-handler variant of the submission endpoint, with permissive
/// CORS headers on every response
pub fn api_resource() -> impl HttpServiceFactory {
    web::resource("/api/contact")
        .route(web::post().to(api_submit))
        .route(web::method(Method::OPTIONS).to(api_preflight))
        .default_service(web::to(api_method_not_allowed))
}

/// Handle a contact form submission from the site
#[tracing::instrument(name = "Handle contact form submission", skip(dispatcher, form))]
async fn submit(dispatcher: web::Data<Dispatcher>, form: web::Form<ContactForm>) -> HttpResponse {
    // The submitter only ever sees a redirect with a success or error flag
    match dispatcher.dispatch(form.into_inner()).await {
        Ok(()) => redirect(SENT_REDIRECT),
        Err(e) => {
            tracing::error!("error processing form: {}", e);
            redirect(ERROR_REDIRECT)
        }
    }
}

#[tracing::instrument(name = "Handle contact API submission", skip(dispatcher, form))]
async fn api_submit(
    dispatcher: web::Data<Dispatcher>,
    form: web::Form<ContactForm>,
) -> HttpResponse {
    match dispatcher.dispatch(form.into_inner()).await {
        Ok(()) => cors(&mut HttpResponse::Found())
            .insert_header((header::LOCATION, SENT_REDIRECT))
            .finish(),
        Err(DispatchError::Validation(_)) => cors(&mut HttpResponse::BadRequest())
            .json(json!({ "error": "Missing required fields" })),
        Err(e) => {
            tracing::error!("error processing form: {}", e);
            cors(&mut HttpResponse::Found())
                .insert_header((header::LOCATION, ERROR_REDIRECT))
                .finish()
        }
    }
}

/// CORS preflight for the standalone handler
async fn api_preflight() -> HttpResponse {
    cors(&mut HttpResponse::Ok()).finish()
}

async fn api_method_not_allowed() -> HttpResponse {
    cors(&mut HttpResponse::MethodNotAllowed()).json(json!({ "error": "Method not allowed" }))
}

fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

fn cors(res: &mut HttpResponseBuilder) -> &mut HttpResponseBuilder {
    res.insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .insert_header((header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"))
        .insert_header((header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"))
}
