use actix_cors::Cors;
use actix_web::{dev::Server, http::header, middleware, web, App, HttpServer};
use tracing::info;

use crate::{
    configuration::Config,
    controller::{check_eligibility, compare_loans, index, loan_products, version},
    error::Error,
};

const JSON_BODY_LIMIT: usize = 4096;

pub async fn server_task(config: &Config) -> Result<(), Error> {
    let server = init_server(config.clone())?;
    info!(
        "Server running on http://{}:{}",
        config.server_host, config.port
    );
    server.await?;
    Ok(())
}

/// Routes and body handling shared by the running server and the tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(|err, _req| Error::InvalidBody(err.to_string()).into());

    cfg.app_data(json_config).service(index::index).service(
        web::scope("/api")
            .service(check_eligibility::index)
            .service(compare_loans::index)
            .service(loan_products::index)
            .service(version::index),
    );
}

fn cors(config: &Config) -> Cors {
    let cors_access_all = config.allows_any_origin();
    let allowed = config.allowed_origins.clone();

    Cors::default()
        .allowed_origin_fn(move |origin, _| {
            if cors_access_all {
                return true;
            }
            if let Ok(origin) = origin.to_str() {
                return allowed.iter().any(|item| item == origin);
            }
            false
        })
        .allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT])
        .allowed_header(header::CONTENT_TYPE)
}

fn init_server(config: Config) -> Result<Server, Error> {
    let host = config.server_host.to_owned();
    let port = config.port;

    let server = HttpServer::new(move || {
        App::new()
            .wrap(cors(&config))
            .wrap(middleware::Compress::default())
            .configure(configure)
    })
    .bind((host, port))?
    .run();
    Ok(server)
}
