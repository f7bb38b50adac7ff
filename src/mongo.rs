// src/mongo.rs
use crate::error::LoadError;
use bson::Document;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};
use std::future::Future;
use tracing::debug;

const APP_NAME: &str = "jimo";

/// A client connection that is shut down explicitly once the import is over.
pub struct Connection {
    client: Client,
}

impl Connection {
    pub async fn open(uri: &str) -> Result<Self, LoadError> {
        let mut client_options = ClientOptions::parse(uri).await?;
        client_options.app_name = Some(APP_NAME.to_string());
        let client = Client::with_options(client_options)?;
        Ok(Self { client })
    }

    pub fn collection(&self, db: &str, collection: &str) -> Collection<Document> {
        self.client.database(db).collection::<Document>(collection)
    }

    /// Release pooled connections and background monitors.
    pub async fn close(self) {
        self.client.shutdown().await;
        debug!("connection closed");
    }
}

/// Destination for one batch of documents.
pub trait DocumentSink {
    /// Insert every document in one request and return how many were stored.
    fn insert_batch(&self, docs: Vec<Document>) -> impl Future<Output = Result<u64, LoadError>> + Send;
}

impl DocumentSink for Collection<Document> {
    async fn insert_batch(&self, docs: Vec<Document>) -> Result<u64, LoadError> {
        // insert_many refuses an empty batch
        if docs.is_empty() {
            return Ok(0);
        }
        let result = self.insert_many(docs).await?;
        Ok(result.inserted_ids.len() as u64)
    }
}
