pub mod store;

use crate::SqliteSlotStore;

/// Fresh in-memory store with the schema already applied.
pub async fn memory_store() -> eyre::Result<SqliteSlotStore> {
    let store = SqliteSlotStore::connect("sqlite::memory:").await?;
    store.init_schema().await?;
    Ok(store)
}
