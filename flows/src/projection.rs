//! Transaction browsing projection — category filter, substring search,
//! date grouping.
//!
//! Pure and synchronous: the projection is recomputed from the current
//! filter values and the fixed record set on every call. The record set is
//! tiny, so there is no caching.

/// One transaction. Read-only reference data; the fixed set lives in
/// [`crate::data`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionRecord {
    pub id: u32,
    pub merchant: &'static str,
    /// Raw statement code, e.g. `NETFLIX.COM`.
    pub code: &'static str,
    pub category: &'static str,
    /// Signed amount in pence; negative for spending.
    pub amount_pence: i64,
    /// Display date, e.g. `Today, 9:30 AM` or `Jan 28`.
    pub date: &'static str,
    pub icon: &'static str,
    pub location: &'static str,
}

impl TransactionRecord {
    /// The grouping key: the date portion before the first comma.
    pub fn date_key(&self) -> &'static str {
        self.date.split(',').next().unwrap_or(self.date)
    }

    /// The time portion after the comma, or the whole date when there is
    /// none.
    pub fn time_of_day(&self) -> &'static str {
        self.date.split(", ").nth(1).unwrap_or(self.date)
    }

    /// `-£4.50` / `+£12.00`.
    pub fn format_amount(&self) -> String {
        let sign = if self.amount_pence < 0 { "-" } else { "+" };
        let abs = self.amount_pence.unsigned_abs();
        format!("{}£{}.{:02}", sign, abs / 100, abs % 100)
    }
}

/// The pseudo-category matching every record.
pub const ALL_CATEGORY: &str = "All";

/// Filter chips shown above the list, `All` first.
pub const CATEGORIES: [&str; 5] = [
    ALL_CATEGORY,
    "Food & Drink",
    "Transport",
    "Shopping",
    "Entertainment",
];

/// Filter `records` by category and case-insensitive substring search
/// (merchant name or category), then group by date key. Groups appear in
/// first-occurrence order of each distinct key — never sorted.
pub fn project<'a>(
    records: &'a [TransactionRecord],
    category: &str,
    search: &str,
) -> Vec<(&'static str, Vec<&'a TransactionRecord>)> {
    let needle = search.trim().to_lowercase();
    let mut groups: Vec<(&'static str, Vec<&'a TransactionRecord>)> = Vec::new();

    for record in records {
        let matches_category = category == ALL_CATEGORY || record.category == category;
        let matches_search = needle.is_empty()
            || record.merchant.to_lowercase().contains(&needle)
            || record.category.to_lowercase().contains(&needle);
        if !(matches_category && matches_search) {
            continue;
        }

        let key = record.date_key();
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, members)) => members.push(record),
            None => groups.push((key, vec![record])),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SAMPLE_TRANSACTIONS;

    #[test]
    fn test_category_filter() {
        let groups = project(&SAMPLE_TRANSACTIONS, "Transport", "");
        let records: Vec<_> = groups.iter().flat_map(|(_, r)| r).collect();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.category == "Transport"));
        // Uber is from today, TfL from Jan 27 — two distinct groups in
        // first-occurrence order.
        assert_eq!(groups[0].0, "Today");
        assert_eq!(groups[1].0, "Jan 27");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let groups = project(&SAMPLE_TRANSACTIONS, ALL_CATEGORY, "net");
        let records: Vec<_> = groups.iter().flat_map(|(_, r)| r).collect();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].merchant, "Netflix");
    }

    #[test]
    fn test_search_matches_category_too() {
        let groups = project(&SAMPLE_TRANSACTIONS, ALL_CATEGORY, "entertainment");
        let records: Vec<_> = groups.iter().flat_map(|(_, r)| r).collect();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_groups_in_first_occurrence_order() {
        let groups = project(&SAMPLE_TRANSACTIONS, ALL_CATEGORY, "");
        let keys: Vec<_> = groups.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["Today", "Yesterday", "Jan 28", "Jan 27", "Jan 26"]);
    }

    #[test]
    fn test_projection_is_pure() {
        let a = project(&SAMPLE_TRANSACTIONS, "Shopping", "tesco");
        let b = project(&SAMPLE_TRANSACTIONS, "Shopping", "tesco");
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_search_and_all_category_passes_everything() {
        let groups = project(&SAMPLE_TRANSACTIONS, ALL_CATEGORY, "");
        let total: usize = groups.iter().map(|(_, r)| r.len()).sum();
        assert_eq!(total, SAMPLE_TRANSACTIONS.len());
    }

    #[test]
    fn test_amount_formatting() {
        let starbucks = &SAMPLE_TRANSACTIONS[0];
        assert_eq!(starbucks.format_amount(), "-£4.50");
        assert_eq!(starbucks.date_key(), "Today");
        assert_eq!(starbucks.time_of_day(), "9:30 AM");

        let amazon = SAMPLE_TRANSACTIONS.iter().find(|r| r.merchant == "Amazon").unwrap();
        assert_eq!(amazon.date_key(), "Jan 28");
        assert_eq!(amazon.time_of_day(), "Jan 28");
    }
}
