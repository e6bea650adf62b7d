use actix_web::{
    HttpResponse, web::{self, Data},
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware, App, HttpServer, Result
};
use actix_cors::Cors;
use actix_governor::governor::middleware::NoOpMiddleware;
use actix_governor::{Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor};
use std::{io, time};

use crate::shared::util::config::{Config, GraphqlConfig, ServerConfig};

use crate::link::app as link_app;
use crate::link::handlers::memory_handler::new_store;
use crate::link::schema::{build_schema, LinkSchema};

use crate::shared::types::app as app_types;

/// Per client IP quota, shared by every worker
pub type RateLimit = GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware>;


pub async fn not_found() -> Result<HttpResponse> {
    let response = app_types::ErrorResponse{ error: "Resource not found".to_string() };
    Ok(HttpResponse::NotFound().json(response))
}

pub fn routes(app: &mut web::ServiceConfig, graphql: &GraphqlConfig) {
    app
        // GraphQL endpoint + IDE
        .service(web::resource(graphql.path.as_str())
            .route(web::post().to(link_app::graphql))
            .route(web::get().to(link_app::graphiql)));
}

pub fn rate_limit(server: &ServerConfig) -> io::Result<RateLimit> {
    GovernorConfigBuilder::default()
        .per_millisecond(server.request_quota_replenish_ms)
        .burst_size(server.request_quota)
        .finish()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput,
            "request_quota and request_quota_replenish_ms must be non-zero"))
}

pub fn build_app(schema: LinkSchema, graphql: GraphqlConfig, rate_limit: &RateLimit) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(Data::new(schema))
        .app_data(Data::new(graphql.clone()))
        .configure(|app| routes(app, &graphql))
        .wrap(Governor::new(rate_limit))
        .wrap(Cors::permissive())
        .wrap(middleware::NormalizePath::trim())
        .wrap(middleware::Logger::default())
        .default_service(web::route().to(not_found))
}

pub async fn start(config: Config) -> io::Result<()> {
    if config.server.log {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    // Created once, every worker shares the same links
    let schema = build_schema(new_store());
    let quota = rate_limit(&config.server)?;

    let graphql = config.graphql.clone();
    log::info!("starting HTTP server at http://{}:{}{}",
        config.server.ip, config.server.port, graphql.path);

    HttpServer::new(move || build_app(schema.clone(), graphql.clone(), &quota))
        .keep_alive(time::Duration::from_secs(30))
        .bind((config.server.ip.as_str(), config.server.port))?
        .run().await
}
