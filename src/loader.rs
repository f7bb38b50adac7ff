// src/loader.rs
use crate::config::LoaderConfig;
use crate::error::LoadError;
use crate::mongo::{Connection, DocumentSink};
use crate::records::read_records;
use bson::Document;
use tracing::{debug, info};

/// Read the configured file and insert its documents into the target
/// collection with a single batch insert.
///
/// The file is read and checked in full before a connection is opened. The
/// connection is closed whether the insert succeeds or not. Returns the
/// number of inserted documents.
pub async fn load_and_insert(config: &LoaderConfig) -> Result<u64, LoadError> {
    let docs = read_batch(config)?;

    let connection = Connection::open(&config.db_uri).await?;
    debug!("connected to {}", config.redacted_uri());

    let result = {
        let collection = connection.collection(&config.db_name, &config.collection_name);
        store(config, &collection, docs).await
    };
    connection.close().await;

    result
}

/// Like [`load_and_insert`], but writes into a caller-supplied sink instead of
/// opening a connection from `config.db_uri`.
pub async fn load_into<S: DocumentSink>(config: &LoaderConfig, sink: &S) -> Result<u64, LoadError> {
    let docs = read_batch(config)?;
    store(config, sink, docs).await
}

/// Validate the input without touching the database. Returns how many
/// documents would be inserted.
pub fn dry_run(config: &LoaderConfig) -> Result<u64, LoadError> {
    let docs = read_batch(config)?;
    let count = docs.len() as u64;
    info!(
        "dry run: {} documents would be inserted into {}.{}",
        count, config.db_name, config.collection_name
    );
    Ok(count)
}

pub async fn insert_records<S: DocumentSink>(sink: &S, docs: Vec<Document>) -> Result<u64, LoadError> {
    sink.insert_batch(docs).await
}

async fn store<S: DocumentSink>(
    config: &LoaderConfig,
    sink: &S,
    docs: Vec<Document>,
) -> Result<u64, LoadError> {
    let count = insert_records(sink, docs).await?;
    info!(
        "inserted {} documents into {}.{}",
        count, config.db_name, config.collection_name
    );
    Ok(count)
}

fn read_batch(config: &LoaderConfig) -> Result<Vec<Document>, LoadError> {
    config.validate()?;
    let docs = read_records(&config.file_path, config.extended_json)?;
    debug!(
        "read {} documents from {}",
        docs.len(),
        config.file_path.display()
    );
    for (i, doc) in docs.iter().enumerate() {
        debug!("document {}: {:?}", i, doc);
    }
    Ok(docs)
}
