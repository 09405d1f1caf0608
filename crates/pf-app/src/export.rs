//! CSV export of recorded series for external plotting.

use std::io::Write;

use pf_sim::SimRecord;

use crate::error::AppResult;

/// CSV header row.
pub const CSV_HEADER: &str = "time_s,output,control";

/// Write `time_s,output,control` rows to `out`.
pub fn write_series_csv<W: Write>(record: &SimRecord, mut out: W) -> AppResult<()> {
    writeln!(out, "{CSV_HEADER}")?;
    for (t, y, u) in record.samples() {
        writeln!(out, "{},{},{}", t, y, u)?;
    }
    out.flush()?;
    Ok(())
}

/// Render the series as a CSV string.
pub fn series_csv(record: &SimRecord) -> AppResult<String> {
    let mut buf = Vec::new();
    write_series_csv(record, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_has_header_and_one_row_per_sample() {
        let record = SimRecord {
            t: vec![0.0, 0.5],
            y: vec![0.0, 0.25],
            u: vec![3.0, -10.0],
        };
        let csv = series_csv(&record).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines, vec![CSV_HEADER, "0,0,3", "0.5,0.25,-10"]);
    }
}
