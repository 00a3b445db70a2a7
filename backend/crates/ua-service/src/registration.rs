use std::fmt;

use chrono::NaiveDate;

/// Input to [`AccountWorkflow::register`](crate::AccountWorkflow::register).
#[derive(Clone)]
pub struct Registration {
    pub name: String,
    pub email: String,
    /// Plaintext, dropped once hashed
    pub password: String,
    pub birth_date: Option<NaiveDate>,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("birth_date", &self.birth_date)
            .finish()
    }
}
