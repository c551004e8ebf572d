use actix_cors::Cors;
use actix_web::{get, web::Data, App, HttpResponse, HttpServer, Responder};
use coin_feed::config::Config;
use coin_feed::fetcher::GetCoins;
use coin_feed::holder::CoinListHolder;
use coin_feed::repository::CoinRepository;
use coin_feed::routes;
use coin_feed::utils::{observer::start_log_observer, CoinMapper, CoinPaprika};
use std::io;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[get("/")]
async fn home() -> impl Responder {
    HttpResponse::Ok().body("Coin Feed Server")
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let api = CoinPaprika::init(&config.base_url, config.request_timeout)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    info!(url = api.coins_url(), "Coin source configured");

    let get_coins = GetCoins::new(CoinRepository::new(Arc::new(api), CoinMapper));
    let holder = CoinListHolder::new(&get_coins);
    tokio::spawn(start_log_observer(holder.subscribe()));

    let holder_data = Data::new(holder);
    let server = HttpServer::new(move || {
        App::new()
            .app_data(holder_data.clone())
            .wrap(Cors::permissive())
            .service(home)
            .configure(routes::coins::init)
    })
    .bind((config.host.as_str(), config.port))?
    .run();

    info!(host = %config.host, port = config.port, "Server listening");
    server.await?;

    Ok(())
}
