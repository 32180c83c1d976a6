use contracts::domain::a004_heyplaces::aggregate::PlaceRecord;
use leptos::prelude::*;

use crate::shared::remote_list::{remote_list_page, Column, FailureMessages, ListEntity, ListRow};

impl ListRow for PlaceRecord {
    const COLUMNS: &'static [Column] = &[
        Column::new("name", "Business Name", 220.0),
        Column::new("category", "Category", 160.0),
        Column::new("number", "Contact No", 140.0),
        Column::new("city", "City", 120.0),
        Column::new("website", "Website", 200.0),
        Column::new("source", "Source", 110.0),
        Column::new("address", "Address", 320.0),
    ];
    const FIELDS: &'static [&'static str] = &[
        "id",
        "name",
        "address",
        "number",
        "website",
        "category",
        "city",
        "source",
    ];

    fn cell(&self, key: &str) -> Option<String> {
        match key {
            "id" => self.id.map(|v| v.to_string()),
            "name" => self.name.clone(),
            "category" => self.category.clone(),
            "number" => self.number.clone(),
            "city" => self.city.clone(),
            "website" => self.website.clone(),
            "source" => self.source.clone(),
            "address" => self.address.clone(),
            _ => None,
        }
    }
}

pub struct PlacesListEntity;

impl ListEntity for PlacesListEntity {
    type Row = PlaceRecord;

    const PAGE_ID: &'static str = "a004_heyplaces--list";
    const TITLE: &'static str = "HeyPlaces Listings";
    const RECORD_NOUN: &'static str = "business";
    const ENDPOINT: &'static str = "/heyplaces/fetch-data";
    const EXPORT_TAG: &'static str = "HeyPlaces";
    const SHEET_NAME: &'static str = "HeyPlaces_Data";
    const SEARCH_PLACEHOLDER: &'static str = "Search business name...";
    const EMPTY_MESSAGE: &'static str = "No listings found.";
    const LOADING_MESSAGE: &'static str = "Loading Listings...";
    const MESSAGES: FailureMessages = FailureMessages {
        offline: "Backend offline. Ensure the API server is running.",
        fetch_failed: "Failed to fetch HeyPlaces data.",
    };
}

#[component]
pub fn PlacesList() -> impl IntoView {
    remote_list_page::<PlacesListEntity>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_fields_cover_every_record_field() {
        let value = serde_json::to_value(PlaceRecord::default()).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        let mut fields = PlaceRecord::FIELDS.to_vec();
        keys.sort_unstable();
        fields.sort_unstable();
        assert_eq!(keys, fields);
    }
}
