//! Keyword counts bucketed by year and month
//!
//! Years are derived from the data with [`year_span`] rather than listed by
//! hand, so a dataset that grows past the last known year is still covered.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::ops::RangeInclusive;

use crate::models::Record;

/// Month labels in calendar order
pub const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Year -> 12 monthly counts (index = month - 1)
pub type TimeSeries = BTreeMap<i32, [u64; 12]>;

/// Inclusive range of years between the earliest and latest record
///
/// Returns `None` for an empty record set.
pub fn year_span(records: &[Record]) -> Option<RangeInclusive<i32>> {
    let first = records.iter().map(Record::year).min()?;
    let last = records.iter().map(Record::year).max()?;
    Some(first..=last)
}

/// Monthly document frequency of `keyword` for each requested year
///
/// Matching runs against `normalized_text`. Years not in `years` are absent
/// from the result; requested years without data get twelve zeros.
pub fn counts_by_year_month<I>(records: &[Record], keyword: &str, years: I) -> TimeSeries
where
    I: IntoIterator<Item = i32>,
{
    let mut series: TimeSeries = years.into_iter().map(|year| (year, [0; 12])).collect();

    for record in records {
        if let Some(months) = series.get_mut(&record.year()) {
            if record.normalized_text().contains(keyword) {
                months[record.month() as usize - 1] += 1;
            }
        }
    }

    tracing::debug!(keyword, years = series.len(), "Built monthly timeline");
    series
}

/// Yearly document frequency of `keyword` for each requested year
pub fn counts_by_year<I>(records: &[Record], keyword: &str, years: I) -> BTreeMap<i32, u64>
where
    I: IntoIterator<Item = i32>,
{
    let wanted: BTreeSet<i32> = years.into_iter().collect();
    let mut counts: BTreeMap<i32, u64> = wanted.iter().map(|&year| (year, 0)).collect();

    for record in records {
        if let Some(count) = counts.get_mut(&record.year()) {
            if record.normalized_text().contains(keyword) {
                *count += 1;
            }
        }
    }

    counts
}

/// Collapse a monthly series into yearly totals
pub fn yearly_totals(series: &TimeSeries) -> BTreeMap<i32, u64> {
    series
        .iter()
        .map(|(&year, months)| (year, months.iter().sum()))
        .collect()
}

/// A record that mentions a keyword
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mention {
    pub index: usize,
    #[serde(rename = "Date")]
    pub date: NaiveDateTime,
}

/// Every record whose normalized text contains `keyword`, in input order
pub fn keyword_mentions(records: &[Record], keyword: &str) -> Vec<Mention> {
    records
        .iter()
        .filter(|record| record.normalized_text().contains(keyword))
        .map(|record| Mention {
            index: record.index(),
            date: record.timestamp(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(i: usize, text: &str, y: i32, m: u32, d: u32) -> Record {
        let ts = NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        Record::new(i, text, ts)
    }

    fn sample() -> Vec<Record> {
        vec![
            record(0, "Obama should resign", 2011, 4, 27),
            record(1, "obama again", 2011, 4, 28),
            record(2, "Obamacare is a disaster", 2013, 10, 1),
            record(3, "FAKE NEWS!", 2017, 1, 11),
            record(4, "Fake news media and Obama", 2017, 2, 16),
            record(5, "Make America Great Again", 2015, 6, 16),
        ]
    }

    #[test]
    fn test_year_span_from_data() {
        assert_eq!(year_span(&sample()), Some(2011..=2017));
        assert_eq!(year_span(&[]), None);
    }

    #[test]
    fn test_counts_by_year_month() {
        let records = sample();
        let series = counts_by_year_month(&records, "obama", 2011..=2017);

        assert_eq!(series.len(), 7);
        assert_eq!(series[&2011][3], 2);
        assert_eq!(series[&2013][9], 1);
        assert_eq!(series[&2017][1], 1);
        assert_eq!(series[&2012], [0; 12]);
    }

    #[test]
    fn test_unrequested_years_absent() {
        let series = counts_by_year_month(&sample(), "obama", [2017]);
        assert_eq!(series.keys().copied().collect::<Vec<_>>(), vec![2017]);
    }

    #[test]
    fn test_counts_by_year() {
        let records = sample();
        let counts = counts_by_year(&records, "fake news", 2015..=2017);

        assert_eq!(counts[&2015], 0);
        assert_eq!(counts[&2016], 0);
        assert_eq!(counts[&2017], 2);
        assert!(!counts.contains_key(&2011));
    }

    #[test]
    fn test_monthly_sums_match_yearly() {
        let records = sample();
        let span = year_span(&records).unwrap();
        let monthly = counts_by_year_month(&records, "obama", span.clone());
        let yearly = counts_by_year(&records, "obama", span);

        assert_eq!(yearly_totals(&monthly), yearly);
        for months in monthly.values() {
            assert_eq!(months.len(), 12);
        }
    }

    #[test]
    fn test_keyword_mentions() {
        let mentions = keyword_mentions(&sample(), "great");
        assert_eq!(mentions.len(), 1);
        assert_eq!(mentions[0].index, 5);
        assert_eq!(mentions[0].date.to_string(), "2015-06-16 09:30:00");
    }
}
