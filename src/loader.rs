//! flat-file loaders for fee schedules and rate tables
//!
//! Both sources are comma-separated rows; lines starting with `#` are
//! comments. Fee rows are `year,month,base,payment_percent,institution_percent`
//! and rate rows are `rate,YYYYMMDD,YYYYMMDD`.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, Trim};
use rust_decimal::Decimal;

use crate::decimal::Rate;
use crate::errors::{FineError, Result};
use crate::rates::{RateEntry, RateTable};
use crate::schedule::{FeeEntry, FeeSchedule};
use crate::types::parse_compact_date;

const FEE_ROW: &str = "fee";
const RATE_ROW: &str = "rate";

/// read a fee schedule from a file
pub fn load_fee_schedule<P: AsRef<Path>>(path: P) -> Result<FeeSchedule> {
    read_fee_schedule(File::open(path)?)
}

/// read a fee schedule from any reader
pub fn read_fee_schedule<R: Read>(source: R) -> Result<FeeSchedule> {
    let mut reader = csv_reader(source);
    let mut entries = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record_line(&record);
        entries.push(FeeEntry::from_components(
            parse_field(&record, 0, line, FEE_ROW)?,
            parse_field(&record, 1, line, FEE_ROW)?,
            parse_field::<Decimal>(&record, 2, line, FEE_ROW)?,
            parse_field::<Decimal>(&record, 3, line, FEE_ROW)?,
            parse_field::<Decimal>(&record, 4, line, FEE_ROW)?,
        ));
    }
    Ok(FeeSchedule::new(entries))
}

/// read a rate table from a file
pub fn load_rate_table<P: AsRef<Path>>(path: P) -> Result<RateTable> {
    read_rate_table(File::open(path)?)
}

/// read a rate table from any reader
pub fn read_rate_table<R: Read>(source: R) -> Result<RateTable> {
    let mut reader = csv_reader(source);
    let mut entries = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record_line(&record);
        let rate = Rate::from_decimal(parse_field(&record, 0, line, RATE_ROW)?);
        let from = parse_date_field(&record, 1, line, RATE_ROW)?;
        let to = parse_date_field(&record, 2, line, RATE_ROW)?;
        entries.push(RateEntry::new(rate, from, to)?);
    }
    Ok(RateTable::new(entries))
}

fn csv_reader<R: Read>(source: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(false)
        .comment(Some(b'#'))
        .trim(Trim::All)
        .flexible(true)
        .from_reader(source)
}

fn record_line(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

fn field<'r>(
    record: &'r StringRecord,
    index: usize,
    line: u64,
    kind: &'static str,
) -> Result<&'r str> {
    record.get(index).ok_or_else(|| FineError::MalformedRow {
        kind,
        line,
        message: format!("missing column {index}"),
    })
}

fn parse_field<T>(record: &StringRecord, index: usize, line: u64, kind: &'static str) -> Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = field(record, index, line, kind)?;
    raw.parse().map_err(|e| FineError::MalformedRow {
        kind,
        line,
        message: format!("column {index} {raw:?}: {e}"),
    })
}

fn parse_date_field(
    record: &StringRecord,
    index: usize,
    line: u64,
    kind: &'static str,
) -> Result<chrono::NaiveDate> {
    parse_compact_date(field(record, index, line, kind)?).map_err(|e| FineError::MalformedRow {
        kind,
        line,
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Money;
    use crate::schedule::Cadence;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use std::io::Cursor;

    #[test]
    fn test_read_fee_schedule() {
        let source = "\
# year,month,base,payment_percent,institution_percent
2009,4,2223,0.6,0.2
2009,5,2223,0.6,0.2
2009,6,2430,0.6,0.2
";
        let schedule = read_fee_schedule(Cursor::new(source)).unwrap();
        assert_eq!(schedule.entries().len(), 3);
        assert_eq!(schedule.cadence(), Cadence::Monthly);

        let first = schedule.entries()[0];
        assert_eq!(first.year, 2009);
        assert_eq!(first.month, 4);
        // 2223 * 0.6 * 0.2
        assert_eq!(first.amount, Money::from_decimal(dec!(266.76)));
    }

    #[test]
    fn test_read_rate_table() {
        let source = "\
# rate,effective_from,effective_to
0.0005,20090501,20090630
0.0006,20090701,20091231
";
        let table = read_rate_table(Cursor::new(source)).unwrap();
        assert_eq!(table.entries().len(), 2);

        let first = table.entries()[0];
        assert_eq!(first.rate.as_decimal(), dec!(0.0005));
        assert_eq!(first.effective_from, NaiveDate::from_ymd_opt(2009, 5, 1).unwrap());
        assert_eq!(first.effective_to, NaiveDate::from_ymd_opt(2009, 6, 30).unwrap());
    }

    #[test]
    fn test_malformed_number_reports_line() {
        let source = "2009,4,2223,0.6,0.2\n2009,x,2223,0.6,0.2\n";
        let err = read_fee_schedule(Cursor::new(source));
        match err {
            Err(FineError::MalformedRow { kind, line, .. }) => {
                assert_eq!(kind, "fee");
                assert_eq!(line, 2);
            }
            other => panic!("expected malformed row, got {other:?}"),
        }
    }

    #[test]
    fn test_short_row_reports_missing_column() {
        let source = "0.0005,20090501\n";
        let err = read_rate_table(Cursor::new(source));
        assert!(matches!(err, Err(FineError::MalformedRow { kind: "rate", .. })));
    }

    #[test]
    fn test_malformed_date_is_rejected() {
        let source = "0.0005,2009-05-01,20091231\n";
        let err = read_rate_table(Cursor::new(source));
        assert!(matches!(err, Err(FineError::MalformedRow { .. })));
    }

    #[test]
    fn test_inverted_rate_interval_is_rejected() {
        let source = "0.0005,20091231,20090501\n";
        let err = read_rate_table(Cursor::new(source));
        assert!(matches!(err, Err(FineError::InvalidRateInterval { .. })));
    }
}
