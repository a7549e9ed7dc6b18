//! Flat-file export of analysis results
//!
//! CSV files are what the visualization tool imports; JSON is written for
//! anything else that wants the full structure. Parent directories are
//! created as needed.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::analytics::{BucketedKeyword, CountTable, Mention, TaggedRecord, TimeSeries};
use crate::analytics::timeline::MONTHS;
use crate::error::Result;

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Serialize each row as one CSV record under an explicit header
///
/// The header is written even when `rows` is empty, so an empty result
/// still carries its columns. `header` must name the fields of `T` in order.
pub fn write_csv<T: Serialize>(
    path: &Path,
    header: &[&str],
    rows: impl IntoIterator<Item = T>,
) -> Result<usize> {
    ensure_parent(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(header)?;

    let mut written = 0;
    for row in rows {
        writer.serialize(row)?;
        written += 1;
    }
    writer.flush()?;

    tracing::debug!(path = %path.display(), rows = written, "Wrote CSV");
    Ok(written)
}

pub const COUNT_COLUMNS: [&str; 2] = ["keyword", "count"];
pub const BUCKET_COLUMNS: [&str; 3] = ["keyword", "count", "group"];
pub const TAG_COLUMNS: [&str; 4] = ["index", "Date", "pos_col", "neg_col"];
pub const MENTION_COLUMNS: [&str; 2] = ["index", "Date"];
pub const YEAR_COLUMNS: [&str; 2] = ["year", "count"];

/// Columns: `keyword,count`
pub fn write_counts_csv(path: &Path, table: &CountTable) -> Result<usize> {
    write_csv(path, &COUNT_COLUMNS, table.iter())
}

/// Columns: `keyword,count,group`
pub fn write_buckets_csv(path: &Path, bucketed: &[BucketedKeyword]) -> Result<usize> {
    write_csv(path, &BUCKET_COLUMNS, bucketed)
}

/// Columns: `index,Date,pos_col,neg_col`
pub fn write_tags_csv(path: &Path, tagged: &[TaggedRecord]) -> Result<usize> {
    write_csv(path, &TAG_COLUMNS, tagged)
}

/// Columns: `index,Date`
pub fn write_mentions_csv(path: &Path, mentions: &[Mention]) -> Result<usize> {
    write_csv(path, &MENTION_COLUMNS, mentions)
}

#[derive(Serialize)]
struct YearRow {
    year: i32,
    count: u64,
}

/// Columns: `year,count`
pub fn write_yearly_csv(path: &Path, counts: &BTreeMap<i32, u64>) -> Result<usize> {
    write_csv(
        path,
        &YEAR_COLUMNS,
        counts.iter().map(|(&year, &count)| YearRow { year, count }),
    )
}

/// Columns: `year,jan,...,dec,total`
pub fn write_timeline_csv(path: &Path, series: &TimeSeries) -> Result<usize> {
    ensure_parent(path)?;
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec!["year"];
    header.extend(MONTHS);
    header.push("total");
    writer.write_record(&header)?;

    for (year, months) in series {
        let total: u64 = months.iter().sum();
        let row: Vec<String> = std::iter::once(year.to_string())
            .chain(months.iter().map(u64::to_string))
            .chain(std::iter::once(total.to_string()))
            .collect();
        writer.write_record(&row)?;
    }
    writer.flush()?;

    tracing::debug!(path = %path.display(), years = series.len(), "Wrote timeline CSV");
    Ok(series.len())
}

/// Pretty-printed JSON of any serializable result
pub fn write_json<T: ?Sized + Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, serde_json::to_vec_pretty(value)?)?;
    tracing::debug!(path = %path.display(), "Wrote JSON");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{BucketLabel, KeywordCount};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_write_counts_csv() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("counts.csv");
        let table: CountTable = vec![("obama", 2670), ("jeb", 150)].into_iter().collect();

        let rows = write_counts_csv(&path, &table).unwrap();
        assert_eq!(rows, 2);

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "keyword,count\nobama,2670\njeb,150\n");
    }

    #[test]
    fn test_write_buckets_csv_creates_parent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/out/countries.csv");
        let bucketed = vec![BucketedKeyword {
            keyword: "china".to_string(),
            count: 400,
            group: BucketLabel::Over300,
        }];

        write_buckets_csv(&path, &bucketed).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "keyword,count,group\nchina,400,Over 301\n");
    }

    #[test]
    fn test_write_tags_csv_columns() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tags.csv");
        let tagged = vec![TaggedRecord {
            index: 0,
            date: NaiveDate::from_ymd_opt(2016, 11, 8)
                .unwrap()
                .and_hms_opt(23, 0, 0)
                .unwrap(),
            is_positive: true,
            is_negative: false,
        }];

        write_tags_csv(&path, &tagged).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "index,Date,pos_col,neg_col\n0,2016-11-08T23:00:00,true,false\n"
        );
    }

    #[test]
    fn test_write_timeline_csv() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("timeline.csv");
        let mut series = TimeSeries::new();
        let mut months = [0; 12];
        months[0] = 3;
        months[11] = 1;
        series.insert(2016, months);

        write_timeline_csv(&path, &series).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next(),
            Some("year,jan,feb,mar,apr,may,jun,jul,aug,sep,oct,nov,dec,total")
        );
        assert_eq!(lines.next(), Some("2016,3,0,0,0,0,0,0,0,0,0,0,1,4"));
    }

    #[test]
    fn test_write_yearly_csv() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("yearly.csv");
        let counts: BTreeMap<i32, u64> = [(2015, 4), (2016, 0)].into_iter().collect();

        write_yearly_csv(&path, &counts).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "year,count\n2015,4\n2016,0\n");
    }

    #[test]
    fn test_empty_results_keep_header() {
        let dir = TempDir::new().unwrap();

        let path = dir.path().join("counts.csv");
        assert_eq!(write_counts_csv(&path, &CountTable::new()).unwrap(), 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), "keyword,count\n");

        let path = dir.path().join("countries.csv");
        assert_eq!(write_buckets_csv(&path, &[]).unwrap(), 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), "keyword,count,group\n");

        let path = dir.path().join("tags.csv");
        assert_eq!(write_tags_csv(&path, &[]).unwrap(), 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), "index,Date,pos_col,neg_col\n");

        let path = dir.path().join("mentions.csv");
        assert_eq!(write_mentions_csv(&path, &[]).unwrap(), 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), "index,Date\n");

        let path = dir.path().join("yearly.csv");
        assert_eq!(write_yearly_csv(&path, &BTreeMap::new()).unwrap(), 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), "year,count\n");

        let path = dir.path().join("timeline.csv");
        assert_eq!(write_timeline_csv(&path, &TimeSeries::new()).unwrap(), 0);
        assert!(fs::read_to_string(&path).unwrap().starts_with("year,jan,"));
    }

    #[test]
    fn test_write_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ranked.json");
        let ranked = vec![KeywordCount::new("russia", 80)];

        write_json(&path, &ranked).unwrap();
        let parsed: Vec<KeywordCount> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, ranked);
    }
}
