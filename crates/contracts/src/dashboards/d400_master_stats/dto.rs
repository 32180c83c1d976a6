use serde::{Deserialize, Serialize};

use crate::shared::lenient::count;

/// Envelope returned by `GET /master-dashboard-stats[?task_id=]`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MasterStatsResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "crate::shared::lenient::opt_string")]
    pub task_id: Option<String>,
    #[serde(default)]
    pub stats: Option<AggregatedStats>,
}

/// Precomputed master-data statistics.
///
/// `Default` is the all-zero fallback rendered when the live query fails, so
/// every field is always defined. Partial payloads fill the gaps with zeros.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregatedStats {
    #[serde(deserialize_with = "count")]
    pub total_records: u64,
    #[serde(deserialize_with = "count")]
    pub total_products: u64,
    #[serde(deserialize_with = "count")]
    pub total_cities: u64,
    #[serde(deserialize_with = "count")]
    pub total_areas: u64,
    #[serde(deserialize_with = "count")]
    pub total_categories: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub city_match_status: CityMatchStatus,
    #[serde(deserialize_with = "null_as_default")]
    pub missing_values: MissingValues,
    #[serde(deserialize_with = "null_as_default")]
    pub source_stats: Vec<SourceStat>,
    #[serde(deserialize_with = "null_as_default")]
    pub city_counts: Vec<CityCount>,
    #[serde(deserialize_with = "null_as_default")]
    pub category_counts: Vec<CategoryCount>,
    #[serde(deserialize_with = "null_as_default")]
    pub top_city_categories: Vec<CityCategoryCount>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CityMatchStatus {
    #[serde(deserialize_with = "count")]
    pub matched: u64,
    #[serde(deserialize_with = "count")]
    pub unmatched: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissingValues {
    #[serde(deserialize_with = "count")]
    pub missing_phone: u64,
    #[serde(deserialize_with = "count")]
    pub missing_email: u64,
    #[serde(deserialize_with = "count")]
    pub missing_address: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceStat {
    pub source: Option<String>,
    #[serde(deserialize_with = "count")]
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CityCount {
    pub city: Option<String>,
    #[serde(deserialize_with = "count")]
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryCount {
    pub category: Option<String>,
    #[serde(deserialize_with = "count")]
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CityCategoryCount {
    pub city: Option<String>,
    pub category: Option<String>,
    #[serde(deserialize_with = "count")]
    pub count: u64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_payload_deserializes() {
        let raw = json!({
            "status": "COMPLETED",
            "stats": {
                "total_records": 1520,
                "total_cities": 12,
                "total_areas": 40,
                "total_categories": 9,
                "city_match_status": { "matched": 1500, "unmatched": 20 },
                "missing_values": { "missing_phone": 300, "missing_email": 900, "missing_address": 0 },
                "city_counts": [{ "city": "Pune", "count": 800 }],
                "category_counts": [{ "category": "atm", "count": 700 }],
                "source_stats": [{ "source": "justdial", "count": 1520 }],
                "top_city_categories": [{ "city": "Pune", "category": "atm", "count": 410 }]
            }
        });
        let response: MasterStatsResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(response.status.as_deref(), Some("COMPLETED"));
        let stats = response.stats.unwrap();
        assert_eq!(stats.total_records, 1520);
        assert_eq!(stats.city_match_status.unmatched, 20);
        assert_eq!(stats.missing_values.missing_email, 900);
        assert_eq!(stats.top_city_categories[0].count, 410);
        assert_eq!(stats.total_products, 0);
    }

    #[test]
    fn test_task_scoped_payload_fills_missing_sections() {
        // Task reports carry only the base counters.
        let raw = json!({
            "task_id": 42,
            "status": "COMPLETED",
            "stats": {
                "total_records": 10,
                "city_match_status": null,
                "missing_values": { "missing_phone": 2 }
            }
        });
        let response: MasterStatsResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(response.task_id.as_deref(), Some("42"));
        let stats = response.stats.unwrap();
        assert_eq!(stats.total_records, 10);
        assert_eq!(stats.city_match_status, CityMatchStatus::default());
        assert_eq!(stats.missing_values.missing_phone, 2);
        assert_eq!(stats.missing_values.missing_address, 0);
        assert!(stats.city_counts.is_empty());
    }

    #[test]
    fn test_envelope_without_stats_deserializes() {
        let response: MasterStatsResponse =
            serde_json::from_value(json!({ "status": "ERROR" })).unwrap();
        assert_eq!(response.stats, None);
    }
}
