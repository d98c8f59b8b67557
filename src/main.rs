use actix_cors::Cors;
use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpResponse, HttpServer, Responder, web};
use tracing_subscriber::EnvFilter;

use rusty_scorecard::args;
use rusty_scorecard::controller::scorecard::{
    ServerStart, create_scorecard, delete_scorecard, get_scorecard, health, json_error_handler,
    list_scorecards, root, scorecard_stats, update_scorecard,
};
use rusty_scorecard::controller::seed;
use rusty_scorecard::model::ScoreCardStore;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = args::args_checks();

    let store = ScoreCardStore::new();
    if args.seed_demo_data {
        seed::seed_sample_scorecards(&store).await;
    }

    let started = ServerStart(chrono::Utc::now());
    tracing::info!("listening on {}:{}", args.bind_host, args.bind_port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();
        App::new()
            .app_data(Data::new(store.clone()))
            .app_data(Data::new(started.clone()))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .wrap(cors)
            .route("/", web::get().to(root))
            .route("/health", web::get().to(health))
            .route("/ui", web::get().to(index))
            .route("/scorecards", web::post().to(create_scorecard))
            .route("/scorecards", web::get().to(list_scorecards))
            // registered ahead of the {id} routes so the literal segment wins
            .route("/scorecards/stats", web::get().to(scorecard_stats))
            .route("/scorecards/{id}", web::get().to(get_scorecard))
            .route("/scorecards/{id}", web::put().to(update_scorecard))
            .route("/scorecards/{id}", web::delete().to(delete_scorecard))
            .service(Files::new("/static", "./static")) // Serve the static files
    })
    .bind((args.bind_host, args.bind_port))?
    .run()
    .await?;
    Ok(())
}

async fn index() -> impl Responder {
    let markup = rusty_scorecard::view::index::render_index_template("Golf Scorecards".to_string());
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}
