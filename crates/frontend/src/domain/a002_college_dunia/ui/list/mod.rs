use contracts::domain::a002_college_dunia::aggregate::InstitutionRecord;
use leptos::prelude::*;

use crate::shared::remote_list::{remote_list_page, Column, FailureMessages, ListEntity, ListRow};

impl ListRow for InstitutionRecord {
    const COLUMNS: &'static [Column] = &[
        Column::new("name", "Institution Name", 220.0),
        Column::new("address", "Address", 320.0),
        Column::new("number", "Contact No", 140.0),
        Column::new("category", "Category", 160.0),
        Column::new("city", "City", 120.0),
        Column::new("area", "Area", 140.0),
        Column::new("avg_fees", "Avg Fees", 120.0),
    ];
    const FIELDS: &'static [&'static str] = &[
        "id",
        "name",
        "address",
        "number",
        "category",
        "city",
        "area",
        "avg_fees",
        "rating",
        "website",
        "email",
    ];

    fn cell(&self, key: &str) -> Option<String> {
        match key {
            "id" => self.id.map(|v| v.to_string()),
            "rating" => self.rating.map(|v| v.to_string()),
            "website" => self.website.clone(),
            "email" => self.email.clone(),
            "name" => self.name.clone(),
            "address" => self.address.clone(),
            "number" => self.number.clone(),
            "category" => self.category.clone(),
            "city" => self.city.clone(),
            "area" => self.area.clone(),
            "avg_fees" => self.avg_fees.clone(),
            _ => None,
        }
    }
}

pub struct CollegeDuniaListEntity;

impl ListEntity for CollegeDuniaListEntity {
    type Row = InstitutionRecord;

    const PAGE_ID: &'static str = "a002_college_dunia--list";
    const TITLE: &'static str = "College Dunia Data Master";
    const RECORD_NOUN: &'static str = "college";
    const ENDPOINT: &'static str = "/college-dunia/fetch-data";
    const EXPORT_TAG: &'static str = "CollegeDunia";
    const SHEET_NAME: &'static str = "CollegeDunia_Data";
    const SEARCH_PLACEHOLDER: &'static str = "Search institution...";
    const EMPTY_MESSAGE: &'static str = "No college records found.";
    const LOADING_MESSAGE: &'static str = "Fetching College Data...";
    const MESSAGES: FailureMessages = FailureMessages {
        offline: "Backend offline. Ensure Flask port 8000 is running.",
        fetch_failed: "Failed to fetch College Dunia data.",
    };

    fn subtitle(total_count: u64) -> String {
        format!("Records: {} total", total_count)
    }
}

#[component]
pub fn CollegeDuniaList() -> impl IntoView {
    remote_list_page::<CollegeDuniaListEntity>()
}
