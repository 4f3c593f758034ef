//! Shared dashboard state and refresh coordination
//!
//! Overlapping advisory cycles race: a rapid location change followed by
//! the periodic timer can put two requests in flight, and without
//! coordination the last one to resolve would win the surface regardless
//! of order. Each cycle therefore captures a generation ticket at start,
//! and a response publishes only while its ticket is still the latest
//! issued; superseded responses are discarded.

use crate::advisory::AdvisoryEngine;
use crate::render::DashboardView;
use crate::DengueWatchError;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

/// Ticket identifying one advisory cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Latest-wins publish gate over the shared dashboard view
pub struct GenerationGate {
    latest: AtomicU64,
    view: RwLock<DashboardView>,
}

impl GenerationGate {
    #[must_use]
    pub fn new(initial: DashboardView) -> Self {
        Self {
            latest: AtomicU64::new(0),
            view: RwLock::new(initial),
        }
    }

    /// Issue a ticket for a new cycle, superseding all earlier ones
    pub fn begin(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Publish a view if its ticket is still the latest issued.
    ///
    /// Returns false when the response was superseded and discarded.
    pub async fn publish(&self, ticket: Ticket, view: DashboardView) -> bool {
        if ticket.0 != self.latest.load(Ordering::SeqCst) {
            return false;
        }
        let mut guard = self.view.write().await;
        // Re-check under the lock so a newer publish cannot be overwritten
        if ticket.0 != self.latest.load(Ordering::SeqCst) {
            return false;
        }
        *guard = view;
        true
    }

    /// Snapshot of the most recently published view
    pub async fn current(&self) -> DashboardView {
        self.view.read().await.clone()
    }
}

/// Engine, selected location, and published view behind one handle
pub struct DashboardState {
    engine: AdvisoryEngine,
    gate: GenerationGate,
    location: RwLock<String>,
}

impl DashboardState {
    #[must_use]
    pub fn new(engine: AdvisoryEngine, initial_location: String) -> Self {
        Self {
            engine,
            gate: GenerationGate::new(DashboardView::unavailable()),
            location: RwLock::new(initial_location),
        }
    }

    /// Currently selected location
    pub async fn selected_location(&self) -> String {
        self.location.read().await.clone()
    }

    /// Change the selected location and refresh immediately
    pub async fn set_location(&self, location: &str) -> crate::Result<()> {
        if location.trim().is_empty() {
            return Err(DengueWatchError::validation("Location cannot be empty"));
        }
        {
            let mut guard = self.location.write().await;
            *guard = location.trim().to_string();
        }
        info!("Location changed to '{}'", location.trim());
        self.refresh().await;
        Ok(())
    }

    /// Run one advisory cycle for the selected location and publish the
    /// result, unless a newer cycle superseded this one while it was in
    /// flight. A failed fetch publishes the fixed unavailable view.
    #[instrument(skip(self))]
    pub async fn refresh(&self) {
        let location = self.selected_location().await;
        let ticket = self.gate.begin();

        let view = match self.engine.compute(&location).await {
            Ok(model) => DashboardView::from_model(&model),
            Err(failure) => {
                warn!("Advisory fetch failed for '{}': {}", location, failure);
                DashboardView::unavailable()
            }
        };

        if !self.gate.publish(ticket, view).await {
            debug!("Discarding superseded advisory for '{}'", location);
        }
    }

    /// Latest published dashboard view
    pub async fn view(&self) -> DashboardView {
        self.gate.current().await
    }
}

/// Re-invoke the engine on a fixed interval for the selected location.
///
/// The first tick fires immediately, which doubles as the initial load.
pub async fn run_periodic_refresh(state: Arc<DashboardState>, interval_minutes: u64) {
    let mut interval = tokio::time::interval(Duration::from_secs(interval_minutes * 60));
    loop {
        interval.tick().await;
        state.refresh().await;
    }
}
