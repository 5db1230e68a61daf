//! Shared application state for the roomkeep gateway.

use std::sync::Arc;

use roomkeep_core::billing::BillingPolicy;
use roomkeep_core::error::Result;

use crate::config::GatewayConfig;
use crate::obs::GatewayMetrics;
use crate::session::{InMemorySessionStore, SessionStore};
use crate::store::{BookingRecord, MemoryStore, ReadingRecord, RoomRecord, Store};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    billing: BillingPolicy,
    sessions: Arc<dyn SessionStore>,
    rooms: Arc<dyn Store<RoomRecord>>,
    bookings: Arc<dyn Store<BookingRecord>>,
    readings: Arc<dyn Store<ReadingRecord>>,
    metrics: GatewayMetrics,
}

impl AppState {
    /// Build state with in-memory sessions (seeded from config) and stores.
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        cfg.validate()?;
        let sessions: Arc<dyn SessionStore> =
            Arc::new(InMemorySessionStore::from_seeds(&cfg.sessions));
        if cfg.sessions.is_empty() {
            tracing::warn!("no sessions configured; only public routes are reachable");
        }
        Ok(Self::with_backends(
            cfg,
            sessions,
            Arc::new(MemoryStore::<RoomRecord>::new()),
            Arc::new(MemoryStore::<BookingRecord>::new()),
            Arc::new(MemoryStore::<ReadingRecord>::new()),
        ))
    }

    /// Build state over caller-provided backends.
    pub fn with_backends(
        cfg: GatewayConfig,
        sessions: Arc<dyn SessionStore>,
        rooms: Arc<dyn Store<RoomRecord>>,
        bookings: Arc<dyn Store<BookingRecord>>,
        readings: Arc<dyn Store<ReadingRecord>>,
    ) -> Self {
        let billing = cfg.billing.policy();
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                billing,
                sessions,
                rooms,
                bookings,
                readings,
                metrics: GatewayMetrics::default(),
            }),
        }
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn billing_policy(&self) -> &BillingPolicy {
        &self.inner.billing
    }

    pub fn sessions(&self) -> &dyn SessionStore {
        self.inner.sessions.as_ref()
    }

    pub fn rooms(&self) -> &dyn Store<RoomRecord> {
        self.inner.rooms.as_ref()
    }

    pub fn bookings(&self) -> &dyn Store<BookingRecord> {
        self.inner.bookings.as_ref()
    }

    pub fn readings(&self) -> &dyn Store<ReadingRecord> {
        self.inner.readings.as_ref()
    }

    pub fn metrics(&self) -> &GatewayMetrics {
        &self.inner.metrics
    }
}
