use crate::Store;
use insureflow_core::rules::metrics;
use insureflow_core::rules::{MonthBucket, PolicyBreakdown, StatusCount};

/// Read-only dashboard derivations. Every call recomputes over current
/// state; there is no cache to invalidate.
pub struct AnalyticsView<'a> {
    store: &'a Store,
}

impl<'a> AnalyticsView<'a> {
    pub(crate) fn new(store: &'a Store) -> Self {
        Self { store }
    }

    pub fn lead_count(&self) -> usize {
        self.store.with_leads(|leads| leads.len())
    }

    pub fn total_closed_revenue(&self) -> f64 {
        self.store.with_leads(metrics::total_closed_revenue)
    }

    pub fn pipeline_value(&self) -> f64 {
        self.store.with_leads(metrics::pipeline_value)
    }

    pub fn active_deal_count(&self) -> usize {
        self.store.with_leads(metrics::active_deal_count)
    }

    pub fn conversion_rate(&self) -> f64 {
        self.store.with_leads(metrics::conversion_rate)
    }

    pub fn status_distribution(&self) -> Vec<StatusCount> {
        self.store.with_leads(metrics::status_distribution)
    }

    pub fn policy_breakdown(&self) -> Vec<PolicyBreakdown> {
        self.store.with_leads(metrics::policy_breakdown)
    }

    pub fn revenue_time_series(&self, now_utc: i64, months_back: usize) -> Vec<MonthBucket> {
        self.store
            .with_leads(|leads| metrics::revenue_time_series(leads, now_utc, months_back))
    }
}
