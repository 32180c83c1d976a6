use serde::{Deserialize, Serialize};

/// ATM location as returned by `/atm/fetch-data`.
///
/// The backend maps its `bank` column onto `name`; `bank_name` and `pincode`
/// are only present for some sources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AtmRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "crate::shared::lenient::opt_string")]
    pub pincode: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_row_deserializes() {
        let raw = r#"{
            "id": 7,
            "name": "SBI ATM",
            "address": "MG Road",
            "city": "Pune",
            "state": "Maharashtra",
            "country": "India",
            "category": "atm",
            "pincode": 411001
        }"#;
        let rec: AtmRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(rec.id, Some(7));
        assert_eq!(rec.name.as_deref(), Some("SBI ATM"));
        assert_eq!(rec.pincode.as_deref(), Some("411001"));
        assert_eq!(rec.bank_name, None);
    }
}
