//! Command handlers, plus the adapter wiring they share.

pub mod add;
pub mod completions;
pub mod config;
pub mod init;
pub mod list;
pub mod show;

use katalog_adapters::{InMemoryProductStore, JsonFileStore, TimestampIdGenerator, UuidIdGenerator};
use katalog_core::application::ports::{IdGenerator, ProductStore};
use tracing::debug;

use crate::{
    cli::GlobalArgs,
    config::{AppConfig, IdStrategy, StoreBackend},
};

/// Build the product store selected by configuration.
///
/// `--store` always means a JSON file, whatever `store.backend` says.
fn product_store(global: &GlobalArgs, config: &AppConfig) -> Box<dyn ProductStore> {
    match (config.store.backend, global.store.as_deref()) {
        (StoreBackend::Memory, None) => {
            debug!("Using in-memory product store");
            Box::new(InMemoryProductStore::new())
        }
        (_, override_path) => {
            let path = config.store_path(override_path);
            debug!(path = %path.display(), "Using JSON product store");
            Box::new(JsonFileStore::new(path))
        }
    }
}

fn id_generator(config: &AppConfig) -> Box<dyn IdGenerator> {
    match config.ids.strategy {
        IdStrategy::Uuid => Box::new(UuidIdGenerator::new()),
        IdStrategy::Timestamp => Box::new(TimestampIdGenerator::new()),
    }
}
