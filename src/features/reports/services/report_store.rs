use chrono::{DateTime, Datelike, Utc};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, Weak};

use crate::features::reports::models::{NewReport, Report};
use crate::shared::constants::{REPORT_ID_PREFIX, STATUS_UNDER_REVIEW};

type Listener = Arc<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct ListenerRegistry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Handle returned by [`ReportStore::subscribe`].
///
/// Dropping the handle keeps the listener registered; call
/// [`Subscription::unsubscribe`] to remove it.
#[must_use = "dropping a Subscription does not unsubscribe; keep it to call unsubscribe()"]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<ListenerRegistry>>,
}

impl Subscription {
    /// Remove exactly this registration. Other listeners are untouched.
    pub fn unsubscribe(self) {
        if let Some(registry) = self.registry.upgrade() {
            lock(&registry).listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

fn lock(registry: &Mutex<ListenerRegistry>) -> MutexGuard<'_, ListenerRegistry> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

/// In-process grievance store with synchronous change notification.
///
/// Records are held most-recent-first for the lifetime of the process.
/// Listeners are invoked after the write lock is released, in registration
/// order, so a listener may read the store.
pub struct ReportStore {
    reports: RwLock<Vec<Report>>,
    registry: Arc<Mutex<ListenerRegistry>>,
}

impl ReportStore {
    pub fn new() -> Self {
        Self::with_seed(Vec::new())
    }

    /// Create a store pre-populated with `reports` (expected most-recent-first)
    pub fn with_seed(reports: Vec<Report>) -> Self {
        Self {
            reports: RwLock::new(reports),
            registry: Arc::new(Mutex::new(ListenerRegistry::default())),
        }
    }

    /// Insert a new report at the front and notify listeners.
    ///
    /// Returns the generated reference number.
    pub fn add(&self, data: NewReport) -> String {
        let now = Utc::now();

        let id = {
            let mut reports = self.reports.write().unwrap_or_else(PoisonError::into_inner);
            let id = generate_report_id(now, |candidate| {
                reports.iter().any(|r| r.id == candidate)
            });
            let report = Report::from_new(id.clone(), data, STATUS_UNDER_REVIEW, now.date_naive());
            reports.insert(0, report);
            id
        };

        tracing::info!("Report submitted: id={}", id);

        self.notify();
        id
    }

    /// Snapshot of all reports, most recent first
    pub fn list(&self) -> Vec<Report> {
        self.reports
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.reports
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Register a listener invoked after every mutation.
    ///
    /// Each call creates an independent registration, even for the same closure.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let mut registry = lock(&self.registry);
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Arc::new(listener)));

        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    fn notify(&self) {
        let listeners: Vec<Listener> = lock(&self.registry)
            .listeners
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in listeners {
            listener();
        }
    }
}

impl Default for ReportStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Build `GR-<year>-<suffix>` from the last three digits of the epoch millisecond.
///
/// The suffix repeats every second, so it is advanced past any id for which
/// `taken` returns true. Uniqueness holds only within this process.
fn generate_report_id(now: DateTime<Utc>, taken: impl Fn(&str) -> bool) -> String {
    let year = now.year();
    let mut suffix = now.timestamp_millis().rem_euclid(1000);

    loop {
        let id = format!("{}-{}-{:03}", REPORT_ID_PREFIX, year, suffix);
        if !taken(&id) {
            return id;
        }
        suffix += 1;
    }
}
