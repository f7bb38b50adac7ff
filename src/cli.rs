// src/cli.rs
use crate::config::LoaderConfig;
use crate::error::LoadError;
use clap::Parser;
use std::path::PathBuf;

/// Import a JSON array of documents into a MongoDB collection.
///
/// Flags override the environment, which overrides the optional config file.
/// Anything left unset falls back to the built-in defaults.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON file holding a top-level array of objects
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// MongoDB connection string
    #[arg(long, env = "MONGO_URI")]
    pub mongo_uri: Option<String>,

    /// Target database
    #[arg(long, env = "DB_NAME")]
    pub db: Option<String>,

    /// Target collection
    #[arg(long)]
    pub collection: Option<String>,

    /// YAML file with loader settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Decode documents as MongoDB Extended JSON ($oid, $date, ...)
    #[arg(long)]
    pub extended_json: bool,

    /// Read and check the input but do not write to the database
    #[arg(long)]
    pub dry_run: bool,

    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Merge defaults, the config file and command-line values.
    pub fn into_config(self) -> Result<LoaderConfig, LoadError> {
        let mut config = match &self.config {
            Some(path) => LoaderConfig::from_yaml_file(path)?,
            None => LoaderConfig::default(),
        };

        if let Some(input) = self.input {
            config.file_path = input;
        }
        if let Some(uri) = self.mongo_uri {
            config.db_uri = uri;
        }
        if let Some(db) = self.db {
            config.db_name = db;
        }
        if let Some(collection) = self.collection {
            config.collection_name = collection;
        }
        if self.extended_json {
            config.extended_json = true;
        }

        Ok(config)
    }
}
