use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use wikiquiz_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = AppState::new(config)
        .await
        .map_err(|err| std::io::Error::other(err.to_string()))?;

    log::info!("starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        // The frontend is served from a different origin; preflight requests
        // get wildcard CORS with the methods and headers it sends.
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allow_any_header();

        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handlers::json_error_handler))
            .wrap(Logger::default())
            .wrap(cors)
            .service(handlers::generate_quiz)
            .service(handlers::list_quizzes)
            .service(handlers::get_quiz)
            .service(handlers::health_check)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
