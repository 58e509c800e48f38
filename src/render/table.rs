use crate::error::{Result, TrialError};
use crate::model::TrialRecord;

pub const HEADER: [&str; 5] = ["identifier", "titulo", "estado", "fase", "ubicacion"];

/// Header row plus one row per record, `\n` terminated. The header is always
/// written, even for zero records.
pub fn render(records: &[TrialRecord]) -> Result<Vec<u8>> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(HEADER).map_err(render_error)?;
    for r in records {
        wtr.write_record([&r.id, &r.title, &r.status, &r.phase, &r.location])
            .map_err(render_error)?;
    }
    wtr.into_inner().map_err(|e| TrialError::Render {
        format: "csv",
        message: e.to_string(),
    })
}

fn render_error(e: csv::Error) -> TrialError {
    TrialError::Render {
        format: "csv",
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(id: &str, title: &str) -> TrialRecord {
        TrialRecord {
            id: id.into(),
            title: title.into(),
            status: "ongoing".into(),
            phase: "3".into(),
            location: "unknown".into(),
        }
    }

    #[test]
    fn zero_records_is_header_only() {
        let out = String::from_utf8(render(&[]).unwrap()).unwrap();
        assert_eq!(out, "identifier,titulo,estado,fase,ubicacion\n");
    }

    #[test]
    fn one_row_per_record_in_order() {
        let records = vec![rec("NCT1", "First"), rec("NCT2", "Second"), rec("NCT3", "Third")];
        let out = String::from_utf8(render(&records).unwrap()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), records.len() + 1);
        assert_eq!(lines[0], "identifier,titulo,estado,fase,ubicacion");
        assert_eq!(lines[1], "NCT1,First,ongoing,3,unknown");
        assert_eq!(lines[3], "NCT3,Third,ongoing,3,unknown");
    }

    #[test]
    fn titles_with_commas_are_quoted() {
        let out = String::from_utf8(render(&[rec("NCT9", "Drug A, Drug B")]).unwrap()).unwrap();
        assert_eq!(out.lines().nth(1), Some("NCT9,\"Drug A, Drug B\",ongoing,3,unknown"));

        let mut reader = csv::Reader::from_reader(out.as_bytes());
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][1], "Drug A, Drug B");
    }
}
