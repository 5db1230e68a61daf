use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use roomkeep_core::error::{Result, RoomkeepError};

use super::{Record, Store};

/// DashMap-backed store. Ids are `<kind>-<n>` with `n` increasing per store.
pub struct MemoryStore<T> {
    rows: DashMap<String, (u64, T)>,
    next_id: AtomicU64,
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self { rows: DashMap::new(), next_id: AtomicU64::new(1) }
    }
}

impl<T: Record> MemoryStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    fn not_found(id: &str) -> RoomkeepError {
        RoomkeepError::NotFound(format!("{} {id}", T::KIND))
    }
}

#[async_trait]
impl<T: Record> Store<T> for MemoryStore<T> {
    async fn get(&self, id: &str) -> Result<T> {
        self.rows
            .get(id)
            .map(|r| r.value().1.clone())
            .ok_or_else(|| Self::not_found(id))
    }

    async fn list(&self) -> Result<Vec<T>> {
        let mut rows: Vec<(u64, T)> = self.rows.iter().map(|r| r.value().clone()).collect();
        rows.sort_by_key(|(seq, _)| *seq);
        Ok(rows.into_iter().map(|(_, t)| t).collect())
    }

    async fn create(&self, mut record: T) -> Result<T> {
        let seq = self.next_id.fetch_add(1, Ordering::Relaxed);
        let id = format!("{}-{seq}", T::KIND);
        record.set_id(id.clone());
        self.rows.insert(id, (seq, record.clone()));
        Ok(record)
    }

    async fn update(&self, id: &str, mut record: T) -> Result<T> {
        let mut row = self.rows.get_mut(id).ok_or_else(|| Self::not_found(id))?;
        record.set_id(id.to_string());
        row.value_mut().1 = record.clone();
        Ok(record)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.rows.remove(id).map(|_| ()).ok_or_else(|| Self::not_found(id))
    }
}
