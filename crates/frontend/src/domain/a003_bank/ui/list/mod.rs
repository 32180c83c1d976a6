use contracts::domain::a003_bank::aggregate::BankRecord;
use leptos::prelude::*;

use crate::shared::remote_list::{remote_list_page, Column, FailureMessages, ListEntity, ListRow};

impl ListRow for BankRecord {
    const COLUMNS: &'static [Column] = &[
        Column::new("bank", "Bank", 180.0),
        Column::new("branch", "Branch", 160.0),
        Column::new("ifsc", "IFSC", 120.0),
        Column::new("micr", "MICR", 110.0),
        Column::new("city", "City", 120.0),
        Column::new("state", "State", 140.0),
        Column::new("contact", "Contact", 130.0),
        Column::new("address", "Address", 320.0),
    ];
    const FIELDS: &'static [&'static str] = &[
        "id",
        "bank",
        "ifsc",
        "micr",
        "branch",
        "address",
        "city",
        "state",
        "contact",
    ];

    fn cell(&self, key: &str) -> Option<String> {
        match key {
            "id" => self.id.map(|v| v.to_string()),
            "bank" => self.bank.clone(),
            "branch" => self.branch.clone(),
            "ifsc" => self.ifsc.clone(),
            "micr" => self.micr.clone(),
            "city" => self.city.clone(),
            "state" => self.state.clone(),
            "contact" => self.contact.clone(),
            "address" => self.address.clone(),
            _ => None,
        }
    }
}

pub struct BankListEntity;

impl ListEntity for BankListEntity {
    type Row = BankRecord;

    const PAGE_ID: &'static str = "a003_bank--list";
    const TITLE: &'static str = "Bank Branch Master";
    const RECORD_NOUN: &'static str = "bank branch";
    const ENDPOINT: &'static str = "/bank/fetch-data";
    const EXPORT_TAG: &'static str = "Bank";
    const SHEET_NAME: &'static str = "Bank_Data";
    const SEARCH_PLACEHOLDER: &'static str = "Search bank, branch or IFSC...";
    const EMPTY_MESSAGE: &'static str = "No bank records found.";
    const LOADING_MESSAGE: &'static str = "Loading Bank Data...";
    const MESSAGES: FailureMessages = FailureMessages {
        offline: "Backend offline. Ensure the API server is running.",
        fetch_failed: "Failed to fetch bank data.",
    };
}

#[component]
pub fn BankList() -> impl IntoView {
    remote_list_page::<BankListEntity>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_column_maps_to_a_field() {
        let record = BankRecord {
            bank: Some("HDFC Bank".into()),
            ifsc: Some("HDFC0000001".into()),
            micr: Some("400240002".into()),
            branch: Some("Fort".into()),
            address: Some("Fort, Mumbai".into()),
            city: Some("Mumbai".into()),
            state: Some("Maharashtra".into()),
            contact: Some("02212345678".into()),
            ..Default::default()
        };
        assert!(record.display_row().iter().all(|v| v != "-"));
    }

    #[test]
    fn test_export_fields_cover_every_record_field() {
        let value = serde_json::to_value(BankRecord::default()).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        let mut fields = BankRecord::FIELDS.to_vec();
        keys.sort_unstable();
        fields.sort_unstable();
        assert_eq!(keys, fields);
    }
}
