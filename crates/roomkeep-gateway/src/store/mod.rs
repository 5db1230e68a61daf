//! Record storage behind one data-access interface.
//!
//! Handlers and services only see `Store<T>`; backends (the in-memory one
//! here, a Postgres or document store elsewhere) implement it per record type.

pub mod memory;
pub mod records;

use async_trait::async_trait;
use roomkeep_core::error::Result;

pub use memory::MemoryStore;
pub use records::{BookingRecord, ReadingRecord, RoomRecord};

/// A storable row with a string id assigned by the store.
pub trait Record: Clone + Send + Sync + 'static {
    /// Id prefix and name used in errors (`room`, `booking`, ...).
    const KIND: &'static str;

    fn set_id(&mut self, id: String);
}

#[async_trait]
pub trait Store<T: Record>: Send + Sync {
    /// Missing ids fail with `NotFound`.
    async fn get(&self, id: &str) -> Result<T>;
    /// All rows in insertion order.
    async fn list(&self) -> Result<Vec<T>>;
    /// Assigns a fresh id and returns the stored row.
    async fn create(&self, record: T) -> Result<T>;
    async fn update(&self, id: &str, record: T) -> Result<T>;
    async fn delete(&self, id: &str) -> Result<()>;
}
