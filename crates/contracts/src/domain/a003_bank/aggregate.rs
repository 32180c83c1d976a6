use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BankRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub bank: Option<String>,
    #[serde(default)]
    pub ifsc: Option<String>,
    #[serde(default, deserialize_with = "crate::shared::lenient::opt_string")]
    pub micr: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "crate::shared::lenient::opt_string")]
    pub contact: Option<String>,
}
