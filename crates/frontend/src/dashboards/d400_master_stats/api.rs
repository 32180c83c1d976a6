use contracts::dashboards::d400_master_stats::MasterStatsResponse;
use serde::Serialize;

use crate::shared::api_client::{build_path, get_json, ApiError};

const STATS_PATH: &str = "/master-dashboard-stats";

#[derive(Serialize)]
struct StatsQuery<'a> {
    task_id: &'a str,
}

/// `/master-dashboard-stats`, with `?task_id=` only when a task is given
pub fn stats_path(task_id: Option<&str>) -> Result<String, ApiError> {
    let query = task_id
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|task_id| StatsQuery { task_id });
    build_path(STATS_PATH, query.as_ref())
}

/// Aggregated master-data statistics, optionally for one scrape task
pub async fn get_master_stats(task_id: Option<&str>) -> Result<MasterStatsResponse, ApiError> {
    let path = stats_path(task_id)?;
    get_json::<MasterStatsResponse, ()>(&path, None).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_path() {
        assert_eq!(stats_path(None).unwrap(), "/master-dashboard-stats");
        assert_eq!(stats_path(Some("")).unwrap(), "/master-dashboard-stats");
        assert_eq!(
            stats_path(Some("abc-123")).unwrap(),
            "/master-dashboard-stats?task_id=abc-123"
        );
    }
}
