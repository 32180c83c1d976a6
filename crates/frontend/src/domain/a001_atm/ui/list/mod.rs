use contracts::domain::a001_atm::aggregate::AtmRecord;
use leptos::prelude::*;

use crate::shared::remote_list::{remote_list_page, Column, FailureMessages, ListEntity, ListRow};

impl ListRow for AtmRecord {
    const COLUMNS: &'static [Column] = &[
        Column::new("name", "ATM / Bank Name", 250.0),
        Column::new("bank_name", "Bank", 150.0),
        Column::new("city", "City", 120.0),
        Column::new("state", "State", 140.0),
        Column::new("pincode", "Pincode", 100.0),
        Column::new("address", "Address", 350.0),
    ];
    const FIELDS: &'static [&'static str] = &[
        "id",
        "name",
        "bank_name",
        "city",
        "state",
        "pincode",
        "address",
        "country",
        "category",
    ];

    fn cell(&self, key: &str) -> Option<String> {
        match key {
            "id" => self.id.map(|v| v.to_string()),
            "country" => self.country.clone(),
            "category" => self.category.clone(),
            "name" => self.name.clone(),
            "bank_name" => self.bank_name.clone(),
            "city" => self.city.clone(),
            "state" => self.state.clone(),
            "pincode" => self.pincode.clone(),
            "address" => self.address.clone(),
            _ => None,
        }
    }
}

pub struct AtmListEntity;

impl ListEntity for AtmListEntity {
    type Row = AtmRecord;

    const PAGE_ID: &'static str = "a001_atm--list";
    const TITLE: &'static str = "ATM Data Master";
    const RECORD_NOUN: &'static str = "verified ATM";
    const ENDPOINT: &'static str = "/atm/fetch-data";
    const EXPORT_TAG: &'static str = "ATM";
    const SHEET_NAME: &'static str = "ATM_Data";
    const SEARCH_PLACEHOLDER: &'static str = "Search ATM name...";
    const EMPTY_MESSAGE: &'static str = "No ATM records found.";
    const LOADING_MESSAGE: &'static str = "Loading ATM Data...";
    const MESSAGES: FailureMessages = FailureMessages {
        offline: "Backend offline. Check Docker logs for ImportError.",
        fetch_failed: "Failed to fetch ATM data. Check backend routes.",
    };
}

#[component]
pub fn AtmList() -> impl IntoView {
    remote_list_page::<AtmListEntity>()
}
