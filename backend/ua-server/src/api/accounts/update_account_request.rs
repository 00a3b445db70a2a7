use ua_core::AccountChanges;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// Only `name` and `birth_date` are applied. Other fields (email, password)
/// are ignored, so they cannot change through this route.
#[derive(Debug, Deserialize)]
pub struct UpdateAccountRequest {
    #[serde(default)]
    pub name: Option<String>,

    /// Absent leaves the date alone, `null` clears it.
    #[serde(default, deserialize_with = "deserialize_present")]
    pub birth_date: Option<Option<NaiveDate>>,
}

/// Only called when the key is present, so `null` becomes `Some(None)`.
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Option<NaiveDate>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Some(Option::deserialize(deserializer)?))
}

impl From<UpdateAccountRequest> for AccountChanges {
    fn from(r: UpdateAccountRequest) -> Self {
        Self {
            name: r.name,
            birth_date: r.birth_date,
        }
    }
}
