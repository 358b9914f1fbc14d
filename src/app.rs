use std::net::TcpListener;
use std::path::PathBuf;

use actix_web::dev::Server;
use actix_web::{get, HttpResponse, Responder};
use actix_web::{web, App, HttpServer};

use tracing_actix_web::TracingLogger;

use crate::controller::assets::{self, PublicDir};
use crate::controller::contact;
use crate::dispatch::Dispatcher;

/// Simple health-check endpoint
#[tracing::instrument(name = "Health check")]
#[get("/health_check")]
async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("I am alive")
}

/// Run the application on a specified TCP listener
pub fn run(
    listener: TcpListener,
    dispatcher: Dispatcher,
    public_dir: PathBuf,
) -> anyhow::Result<Server> {
    // Wrap application data
    let dispatcher = web::Data::new(dispatcher);
    let public_dir = web::Data::new(PublicDir(public_dir));

    // Start the server
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(dispatcher.clone())
            .app_data(public_dir.clone())
            .service(health_check)
            .service(contact::site_resource())
            .service(contact::api_resource())
            // Everything else is a static asset request
            .default_service(web::to(assets::serve))
    })
    .listen(listener)?
    .run();

    Ok(server)
}
