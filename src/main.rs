use mongodb::Client;

mod analysis;
mod model;
mod models;
mod repositories;
pub mod services;
pub mod settings;
pub mod utils;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    utils::init_logging().expect("Could not initialize logging.");

    let config = settings::Settings::new().expect("Could not load config file.");
    let client = Client::with_uri_str(&config.mongo.uri)
        .await
        .expect("Could not connect to database.");
    let database = client.database(&config.mongo.database);

    println!("[*] Starting services.");
    services::start_services(database, config)
        .await
        .expect("Could not start services.");
}
