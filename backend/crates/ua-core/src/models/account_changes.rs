use chrono::NaiveDate;

/// Partial update of an account. Only the display name and birth date are
/// mutable; `None` leaves the stored value untouched.
///
/// `birth_date` distinguishes "leave alone" (`None`) from "clear"
/// (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountChanges {
    pub name: Option<String>,
    pub birth_date: Option<Option<NaiveDate>>,
}

impl AccountChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.birth_date.is_none()
    }
}
