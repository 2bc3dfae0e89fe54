//! Embedded reference data.
//!
//! [`STATIC_MUNICIPALITIES`] backs catalog resolution when the remote catalog is
//! unreachable or yields nothing; [`mock_summary`] provides last-resort output
//! when the live data fetch fails. Both are compiled in and read-only.

mod mock_demographics;
mod municipalities;

pub use mock_demographics::{mock_summary, MockDemographicRecord, MOCK_DEMOGRAPHICS};
pub use municipalities::{search_static, STATIC_MUNICIPALITIES};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mock_id_is_in_static_table() {
        for record in MOCK_DEMOGRAPHICS {
            let entry = STATIC_MUNICIPALITIES
                .iter()
                .find(|entry| entry.id == record.id);
            assert!(entry.is_some(), "mock id {} missing from static table", record.id);
            assert_eq!(entry.unwrap().name, record.name);
        }
    }
}
