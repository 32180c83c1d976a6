use contracts::dashboards::d401_overview::{MapProduct, OverviewCounts};

use crate::shared::api_client::{get_json, ApiError};

/// Distinct counts over the live product list
pub async fn get_overview_counts() -> Result<OverviewCounts, ApiError> {
    let products = get_json::<Vec<MapProduct>, ()>("/googlemap_data", None).await?;
    log::debug!("Loaded {} map products", products.len());
    Ok(OverviewCounts::from_products(&products))
}
