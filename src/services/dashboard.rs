//! Dashboard session wiring.
//!
//! Connects the pieces the way the UI does: a row activated in the schedule
//! table drives the chart input, registered selection listeners are notified
//! with the new record (or `None` on clear), and rendering adapters are
//! re-rendered from the derived frame. Also hosts the resize listener
//! registry with scoped acquisition/release.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::adapters::{AdapterError, ChartAdapter};
use crate::api::{ChartAxes, ChartFrame};
use crate::models::schedule::ScheduleRecord;
use crate::services::series;
use crate::services::table::{TableView, TableViewState};
use crate::store::LocalStore;

type SelectionListener = Box<dyn Fn(Option<&ScheduleRecord>) + Send + Sync>;

/// One dashboard instance: the immutable store, a table view state over the
/// schedule rows, one chart axis configuration, and the selection listeners.
pub struct DashboardSession {
    store: LocalStore,
    table: TableViewState,
    axes: ChartAxes,
    listeners: Vec<SelectionListener>,
    resize: ResizeHub,
}

impl DashboardSession {
    pub fn new(store: LocalStore) -> Self {
        Self {
            store,
            table: TableViewState::new(),
            axes: ChartAxes::default(),
            listeners: Vec::new(),
            resize: ResizeHub::new(),
        }
    }

    /// Session over the embedded sample dataset.
    pub fn with_sample_data() -> anyhow::Result<Self> {
        Ok(Self::new(LocalStore::with_sample_data()?))
    }

    pub fn store(&self) -> &LocalStore {
        &self.store
    }

    pub fn table(&self) -> &TableViewState {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut TableViewState {
        &mut self.table
    }

    pub fn axes(&self) -> &ChartAxes {
        &self.axes
    }

    /// Axis ranges are per chart instance; changing them only affects frames
    /// derived from this session.
    pub fn set_axes(&mut self, axes: ChartAxes) {
        self.axes = axes;
    }

    /// Register a selection listener. Listeners receive the newly active
    /// record, or `None` when the selection is cleared.
    pub fn on_selection(
        &mut self,
        listener: impl Fn(Option<&ScheduleRecord>) + Send + Sync + 'static,
    ) {
        self.listeners.push(Box::new(listener));
    }

    /// Single-select a schedule row: selecting the active row again clears
    /// the selection, selecting another row replaces it. Notifies listeners
    /// and returns the new active record.
    pub fn select_row(&mut self, id: i64) -> Option<&ScheduleRecord> {
        let active = self.table.activate_row(id);
        let record = active.and_then(|id| self.store.schedule_by_id(id));
        log::debug!("selection changed: {:?}", active);
        for listener in &self.listeners {
            listener(record);
        }
        record
    }

    /// The record currently driving the chart.
    pub fn active_record(&self) -> Option<&ScheduleRecord> {
        self.table
            .active()
            .and_then(|id| self.store.schedule_by_id(id))
    }

    /// Chart input for the active record. With nothing selected the first
    /// fixture record is plotted, matching the dashboard's default chart; an
    /// entirely empty store yields an empty frame.
    pub fn chart_frame(&self) -> ChartFrame {
        match self.active_record().or_else(|| self.store.schedules().first()) {
            Some(record) => series::chart_frame(record, &self.axes),
            None => series::empty_frame(),
        }
    }

    /// Render the current frame through an adapter.
    pub fn render_to(&self, adapter: &mut dyn ChartAdapter) -> Result<(), AdapterError> {
        adapter.render(&self.chart_frame())
    }

    /// Derived view of the schedule table.
    pub fn table_view(&self) -> TableView<'_, ScheduleRecord> {
        self.table.view(self.store.schedules())
    }

    pub fn resize(&self) -> &ResizeHub {
        &self.resize
    }
}

// ---------------------------------------------------------------------------
// Resize listener registry
// ---------------------------------------------------------------------------

type ResizeListener = Arc<dyn Fn(u32) + Send + Sync>;

/// Registry of viewport-resize listeners.
///
/// Subscriptions are scoped: dropping the returned [`ResizeGuard`]
/// unregisters the listener, so a torn-down component cannot leak its
/// callback. Repeated notifications with an unchanged width are ignored.
#[derive(Clone)]
pub struct ResizeHub {
    inner: Arc<HubInner>,
}

struct HubInner {
    listeners: RwLock<HashMap<u64, ResizeListener>>,
    last_width: RwLock<Option<u32>>,
    next_id: AtomicU64,
}

impl ResizeHub {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(HubInner {
                listeners: RwLock::new(HashMap::new()),
                last_width: RwLock::new(None),
                next_id: AtomicU64::new(1),
            }),
        }
    }

    /// Register a listener for the guard's lifetime.
    #[must_use = "dropping the guard unsubscribes the listener"]
    pub fn subscribe(&self, listener: impl Fn(u32) + Send + Sync + 'static) -> ResizeGuard {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner.listeners.write().insert(id, Arc::new(listener));
        ResizeGuard {
            id,
            hub: Arc::clone(&self.inner),
        }
    }

    /// Publish a new layout width. Idempotent: an unchanged width does not
    /// re-invoke listeners.
    ///
    /// Listener handles are cloned out before invocation so no hub lock is
    /// held while a callback runs: a listener may subscribe to or notify the
    /// same hub.
    pub fn notify(&self, width: u32) {
        {
            let mut last = self.inner.last_width.write();
            if *last == Some(width) {
                return;
            }
            *last = Some(width);
        }
        let listeners: Vec<ResizeListener> =
            self.inner.listeners.read().values().cloned().collect();
        for listener in &listeners {
            listener(width);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.read().len()
    }
}

impl Default for ResizeHub {
    fn default() -> Self {
        Self::new()
    }
}

/// Unregisters its listener on drop.
pub struct ResizeGuard {
    id: u64,
    hub: Arc<HubInner>,
}

impl Drop for ResizeGuard {
    fn drop(&mut self) {
        self.hub.listeners.write().remove(&self.id);
    }
}
