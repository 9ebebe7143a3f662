use std::sync::Arc;

use async_trait::async_trait;
use mongodb::Database;
use tokio::sync::mpsc;

use crate::model::{self, SpendingClassifier};
use crate::settings::Settings;

mod http;
mod insight;

#[derive(Debug, thiserror::Error)]
enum ServiceError {
    #[error("Database error: {0}")]
    Database(String),
    #[error("No transactions found")]
    NotFound,
    #[error("Model inference error: {0}")]
    Model(String),
    #[error("Communication error: {0} - {1}")]
    Communication(String, String),
}

#[async_trait]
pub trait RequestHandler<T>: Send + Sync + 'static
where
    T: Send + 'static,
{
    async fn handle_request(&self, request: T);
}

#[async_trait]
pub trait Service<T, H>: Send + Sync + 'static
where
    T: Send + 'static,
    H: RequestHandler<T> + Clone + Send,
{
    async fn run(&mut self, handler: H, receiver: &mut mpsc::Receiver<T>) {
        while let Some(request) = receiver.recv().await {
            let handler = handler.clone();

            tokio::spawn(async move {
                handler.handle_request(request).await;
            });
        }
    }
}

pub async fn start_services(db: Database, settings: Settings) -> Result<(), anyhow::Error> {
    println!("[*] Loading spending classifier.");
    model::ensure_model_file(&settings.model.path, settings.model.url.as_deref()).await?;
    let classifier = Arc::new(SpendingClassifier::load(&settings.model.path)?);

    let (insight_tx, mut insight_rx) = mpsc::channel(512);

    println!("[*] Starting insight service.");
    let mut insight_service = insight::InsightService::new();
    let insight_db = db.clone();
    let insight_classifier = classifier.clone();
    tokio::spawn(async move {
        insight_service
            .run(
                insight::InsightRequestHandler::new(insight_db, insight_classifier),
                &mut insight_rx,
            )
            .await;
    });

    println!("[*] Starting HTTP server.");
    http::start_http_server(insight_tx, &settings.server).await?;

    Ok(())
}
