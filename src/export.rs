//! CSV rendering of a generated schedule, for import into spreadsheets or bulk loaders.

use std::io::{self, Write};

use csv::{Writer, WriterBuilder};

use crate::models::ScheduledMatch;

const HEADER: [&str; 7] = [
    "tournament_id",
    "type",
    "team1_id",
    "team2_id",
    "venue",
    "date",
    "status",
];

/// Write a header row, then one row per match in schedule order.
pub fn write_csv<W: Write>(writer: W, matches: &[ScheduledMatch]) -> Result<(), csv::Error> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
    write_records(&mut wtr, matches)?;
    wtr.flush()?;
    Ok(())
}

/// [`write_csv`] into a `String`.
pub fn to_csv_string(matches: &[ScheduledMatch]) -> Result<String, csv::Error> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(Vec::new());
    write_records(&mut wtr, matches)?;
    let bytes = wtr.into_inner().map_err(|e| csv::Error::from(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| csv::Error::from(io::Error::new(io::ErrorKind::InvalidData, e)))
}

fn write_records<W: Write>(
    wtr: &mut Writer<W>,
    matches: &[ScheduledMatch],
) -> Result<(), csv::Error> {
    wtr.write_record(HEADER)?;
    for m in matches {
        let date = m.date.format("%Y-%m-%dT%H:%M:%S").to_string();
        wtr.write_record([
            m.tournament_id.as_str(),
            m.match_type.as_str(),
            m.team1_id.as_str(),
            m.team2_id.as_str(),
            m.venue.as_str(),
            date.as_str(),
            m.status.as_str(),
        ])?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ScheduleOptions, ScheduledMatch};
    use chrono::NaiveDate;

    #[test]
    fn header_then_rows_with_quoted_venue() {
        let options = ScheduleOptions {
            start_date: "2025-03-01".into(),
            venue: "Lord's, London".into(),
            tournament_id: "t-9".into(),
            ..ScheduleOptions::default()
        };
        let date = NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap();
        let matches = vec![ScheduledMatch::new(&options, "a", "b", date)];

        let out = to_csv_string(&matches).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "tournament_id,type,team1_id,team2_id,venue,date,status");
        assert_eq!(
            lines[1],
            "t-9,T20,a,b,\"Lord's, London\",2025-03-01T14:00:00,upcoming"
        );
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn empty_schedule_is_header_only() {
        let out = to_csv_string(&[]).unwrap();
        assert_eq!(out.trim_end(), "tournament_id,type,team1_id,team2_id,venue,date,status");
    }
}
