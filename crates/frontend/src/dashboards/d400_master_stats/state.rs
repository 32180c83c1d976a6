//! Load state of the master statistics view.
//!
//! The view fails open: a failed load never blocks rendering. It keeps the
//! last loaded statistics, or the all-zero fallback when nothing was loaded.

use contracts::dashboards::d400_master_stats::{AggregatedStats, MasterStatsResponse};

use crate::shared::api_client::ApiError;
use crate::shared::number_format::{format_count, percentage};

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load master data.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Completed,
    Failed,
}

#[derive(Debug, Clone)]
pub struct StatsView {
    stats: Option<AggregatedStats>,
    status: LoadStatus,
    error: Option<String>,
    latest_seq: u64,
    alive: bool,
}

impl Default for StatsView {
    fn default() -> Self {
        Self {
            stats: None,
            status: LoadStatus::Loading,
            error: None,
            latest_seq: 0,
            alive: true,
        }
    }
}

impl StatsView {
    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Nothing to show yet: first load still in flight
    pub fn is_initial_load(&self) -> bool {
        self.status == LoadStatus::Loading && self.stats.is_none()
    }

    /// Rendering shows zeros, not live values
    pub fn is_fallback(&self) -> bool {
        self.stats.is_none()
    }

    pub fn display_stats(&self) -> AggregatedStats {
        self.stats.clone().unwrap_or_default()
    }

    /// Banner text while the last load failed
    pub fn banner_message(&self) -> Option<String> {
        if self.status != LoadStatus::Failed {
            return None;
        }
        let error = self.error.as_deref().unwrap_or(LOAD_FAILED_MESSAGE);
        let shown = if self.is_fallback() {
            "Showing default values (0)."
        } else {
            "Showing the last loaded values."
        };
        Some(format!("Could not fetch live data. {} Error: {}", shown, error))
    }

    pub fn begin_load(&mut self) -> u64 {
        self.latest_seq += 1;
        self.status = LoadStatus::Loading;
        self.latest_seq
    }

    /// Returns `false` when the response was stale and ignored.
    pub fn complete(&mut self, seq: u64, result: Result<MasterStatsResponse, ApiError>) -> bool {
        if !self.alive || seq != self.latest_seq {
            log::debug!("Discarding stale stats response (seq {}, latest {})", seq, self.latest_seq);
            return false;
        }
        match result {
            Ok(response) => {
                self.status = LoadStatus::Completed;
                self.error = None;
                if let Some(stats) = response.stats {
                    self.stats = Some(stats);
                }
            }
            // redirect in progress
            Err(ApiError::Unauthorized) => {}
            Err(e) => {
                log::error!("Master stats fetch failed: {}", e);
                self.status = LoadStatus::Failed;
                self.error = Some(LOAD_FAILED_MESSAGE.to_string());
            }
        }
        true
    }

    pub fn teardown(&mut self) {
        self.alive = false;
    }
}

/// `"{count} ({pct}%)"` for a data-quality row
pub fn quality_label(count: u64, total: u64) -> String {
    format!("{} ({}%)", format_count(count), percentage(count, total))
}

/// Two-column rows for the ranked tables, name falling back to "Unknown"
pub fn ranked_rows<'a, I>(items: I) -> Vec<Vec<String>>
where
    I: IntoIterator<Item = (Option<&'a str>, u64)>,
{
    items
        .into_iter()
        .map(|(name, count)| vec![name.unwrap_or("Unknown").to_string(), format_count(count)])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d400_master_stats::CityCount;

    fn response(total_records: u64) -> MasterStatsResponse {
        MasterStatsResponse {
            status: Some("success".into()),
            task_id: None,
            stats: Some(AggregatedStats {
                total_records,
                ..Default::default()
            }),
        }
    }

    #[test]
    fn test_failure_renders_zero_fallback_with_banner() {
        let mut view = StatsView::default();
        assert!(view.is_initial_load());
        let seq = view.begin_load();
        view.complete(seq, Err(ApiError::Http { status: 500 }));

        assert_eq!(view.status(), LoadStatus::Failed);
        assert!(!view.is_initial_load());
        assert!(view.is_fallback());
        assert_eq!(view.display_stats(), AggregatedStats::default());
        assert_eq!(
            view.banner_message().unwrap(),
            "Could not fetch live data. Showing default values (0). Error: Failed to load master data."
        );
        assert_eq!(format_count(view.display_stats().total_records), "0");
    }

    #[test]
    fn test_failure_after_success_keeps_previous_stats() {
        let mut view = StatsView::default();
        let seq = view.begin_load();
        view.complete(seq, Ok(response(1234567)));
        assert_eq!(view.banner_message(), None);

        let seq = view.begin_load();
        view.complete(seq, Err(ApiError::NetworkUnavailable("refused".into())));
        assert_eq!(view.display_stats().total_records, 1234567);
        assert!(view.banner_message().unwrap().contains("last loaded values"));
    }

    #[test]
    fn test_response_without_stats_keeps_fallback() {
        let mut view = StatsView::default();
        let seq = view.begin_load();
        view.complete(
            seq,
            Ok(MasterStatsResponse {
                status: Some("pending".into()),
                task_id: Some("t1".into()),
                stats: None,
            }),
        );
        assert_eq!(view.status(), LoadStatus::Completed);
        assert!(view.is_fallback());
        assert_eq!(view.banner_message(), None);
    }

    #[test]
    fn test_stale_and_torn_down_responses_are_ignored() {
        let mut view = StatsView::default();
        let first = view.begin_load();
        let second = view.begin_load();
        assert!(view.complete(second, Ok(response(10))));
        assert!(!view.complete(first, Ok(response(99))));
        assert_eq!(view.display_stats().total_records, 10);

        let third = view.begin_load();
        view.teardown();
        assert!(!view.complete(third, Ok(response(50))));
        assert_eq!(view.display_stats().total_records, 10);
    }

    #[test]
    fn test_quality_label() {
        assert_eq!(quality_label(25, 100), "25 (25%)");
        assert_eq!(quality_label(5, 0), "5 (0%)");
        assert_eq!(quality_label(0, 0), "0 (0%)");
        assert_eq!(quality_label(1234567, 2469134), "1,234,567 (50%)");
    }

    #[test]
    fn test_ranked_rows() {
        let cities = vec![
            CityCount { city: Some("Pune".into()), count: 12000 },
            CityCount { city: None, count: 3 },
        ];
        let rows = ranked_rows(cities.iter().map(|c| (c.city.as_deref(), c.count)));
        assert_eq!(rows, vec![vec!["Pune", "12,000"], vec!["Unknown", "3"]]);
    }
}
