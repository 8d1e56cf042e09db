use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;

use prashna_server::{
    app_state::AppState,
    config::Config,
    handlers::{generate_questions, health_check, interactive_chat, reset_session, send_message},
    middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = AppState::new(config)
        .map_err(|err| std::io::Error::other(err.to_string()))?;

    info!("starting HTTP server at http://{host}:{port}");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Cors::permissive())
            .wrap(RequestIdMiddleware)
            .wrap(Logger::default())
            .service(generate_questions)
            .service(send_message)
            .service(interactive_chat)
            .service(reset_session)
            .service(health_check)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
