use ua_service::Registration;

use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,

    /// `YYYY-MM-DD`
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
}

impl From<RegisterRequest> for Registration {
    fn from(r: RegisterRequest) -> Self {
        Self {
            name: r.name,
            email: r.email,
            password: r.password,
            birth_date: r.birth_date,
        }
    }
}
