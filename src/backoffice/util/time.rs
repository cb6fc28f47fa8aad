pub(crate) mod helper {
    #[cfg(not(test))]
    pub use super::get_utc_now;
    #[cfg(test)]
    pub use super::mock_chrono::{get_utc_now, set_utc_now};
}

/// Order dates are sent as the UTC calendar date, e.g. `2024-05-01`.
pub(crate) fn today_iso() -> String {
    helper::get_utc_now().format("%Y-%m-%d").to_string()
}


#[cfg(not(test))]
pub fn get_utc_now() -> chrono::DateTime<chrono::Utc> {
    chrono::Utc::now()
}
