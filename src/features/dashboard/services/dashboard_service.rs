use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use crate::features::dashboard::dtos::{CategoryCountDto, DashboardSummaryDto, HotspotDto};
use crate::features::reports::models::{Report, ReportCategory, ReportSeverity};
use crate::features::reports::{ReportStore, Subscription};
use crate::shared::constants::{HOTSPOT_LIMIT, STATUS_RESOLVED};

#[derive(Default)]
struct SummaryCache {
    /// Bumped on every store change so a summary computed from an older
    /// snapshot is never cached.
    generation: AtomicU64,
    summary: RwLock<Option<DashboardSummaryDto>>,
}

impl SummaryCache {
    fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        *self
            .summary
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }

    fn get(&self) -> Option<DashboardSummaryDto> {
        self.summary
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Aggregates the live report store for the dashboard
///
/// The computed summary is cached until the store reports a change.
pub struct DashboardService {
    store: Arc<ReportStore>,
    cache: Arc<SummaryCache>,
    subscription: Option<Subscription>,
}

impl DashboardService {
    pub fn new(store: Arc<ReportStore>) -> Self {
        let cache = Arc::new(SummaryCache::default());

        let listener_cache = Arc::clone(&cache);
        let subscription = store.subscribe(move || listener_cache.invalidate());

        Self {
            store,
            cache,
            subscription: Some(subscription),
        }
    }

    /// Get the dashboard summary, computing it if the cache is stale
    pub fn summary(&self) -> DashboardSummaryDto {
        if let Some(summary) = self.cache.get() {
            return summary;
        }

        let generation = self.cache.generation.load(Ordering::SeqCst);
        let summary = compute_summary(&self.store.list(), Utc::now());

        let mut cached = self
            .cache
            .summary
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if self.cache.generation.load(Ordering::SeqCst) == generation {
            *cached = Some(summary.clone());
        }

        tracing::debug!(
            "Dashboard summary recomputed: total_reports={}",
            summary.total_reports
        );
        summary
    }
}

impl Drop for DashboardService {
    fn drop(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }
}

/// Build the summary for `reports`
pub fn compute_summary(reports: &[Report], generated_at: DateTime<Utc>) -> DashboardSummaryDto {
    let total_reports = reports.len() as i64;
    let resolved = reports
        .iter()
        .filter(|r| r.status == STATUS_RESOLVED)
        .count() as i64;
    let critical_issues = reports
        .iter()
        .filter(|r| r.severity_level() == Some(ReportSeverity::Critical))
        .count() as i64;

    let mut by_location: HashMap<&str, i64> = HashMap::new();
    for report in reports.iter().filter(|r| r.status != STATUS_RESOLVED) {
        *by_location.entry(report.location.as_str()).or_default() += 1;
    }
    let mut hotspots: Vec<HotspotDto> = by_location
        .into_iter()
        .map(|(location, issues)| HotspotDto {
            location: location.to_string(),
            issues,
        })
        .collect();
    hotspots.sort_by(|a, b| b.issues.cmp(&a.issues).then_with(|| a.location.cmp(&b.location)));
    hotspots.truncate(HOTSPOT_LIMIT);

    let by_category = ReportCategory::ALL
        .iter()
        .map(|category| CategoryCountDto {
            category: *category,
            label: category.label().to_string(),
            count: reports
                .iter()
                .filter(|r| r.category_kind() == *category)
                .count() as i64,
        })
        .collect();

    DashboardSummaryDto {
        total_reports,
        active_cases: total_reports - resolved,
        resolved,
        critical_issues,
        hotspots,
        by_category,
        generated_at,
    }
}
