use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};

use super::model::{CellValue, UploadedTable};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load an uploaded CSV from disk.
pub fn load_csv(path: &Path) -> Result<UploadedTable> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening CSV {}", path.display()))?;
    read_csv(file)
}

/// CSV layout: header row with column names, one record per line.
///
/// Header names are kept verbatim. The expected weather columns carry
/// leading/trailing spaces (`"humidity "`, `"         winddirection"`), so no
/// trimming is applied to the header. Cell values are trimmed before their
/// type is guessed.
///
/// Records shorter than the header are padded with nulls; longer records are
/// an error.
pub fn read_csv<R: Read>(source: R) -> Result<UploadedTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::None)
        .flexible(true)
        .from_reader(source);

    let columns: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        if record.len() > columns.len() {
            bail!(
                "CSV row {row_no}: {} fields but the header has {} columns",
                record.len(),
                columns.len()
            );
        }
        let mut cells: Vec<CellValue> = record.iter().map(guess_cell_type).collect();
        cells.resize(columns.len(), CellValue::Null);
        rows.push(cells);
    }

    let table = UploadedTable::new(columns, rows)?;
    Ok(table)
}

fn guess_cell_type(raw: &str) -> CellValue {
    let s = raw.trim();
    if s.is_empty() {
        return CellValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return CellValue::Float(f);
    }
    if s == "true" || s == "false" {
        return CellValue::Bool(s == "true");
    }
    CellValue::Text(raw.to_string())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn keeps_header_whitespace() {
        let csv = "pressure,humidity ,         winddirection\n1010,50,180\n";
        let table = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(
            table.columns,
            vec!["pressure", "humidity ", "         winddirection"]
        );
    }

    #[test]
    fn infers_cell_types() {
        let csv = "a,b,c,d,e\n1, 2.5 ,yes,,true\n";
        let table = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(
            table.rows[0],
            vec![
                CellValue::Integer(1),
                CellValue::Float(2.5),
                CellValue::Text("yes".into()),
                CellValue::Null,
                CellValue::Bool(true),
            ]
        );
    }

    #[test]
    fn header_only_file_is_an_empty_table() {
        let table = read_csv("a,b\n".as_bytes()).unwrap();
        assert_eq!(table.columns.len(), 2);
        assert!(table.is_empty());
    }

    #[test]
    fn short_rows_are_padded_with_nulls() {
        let table = read_csv("a,b,note\n1,2,x\n3,4\n5\n".as_bytes()).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(
            table.rows[1],
            vec![CellValue::Integer(3), CellValue::Integer(4), CellValue::Null]
        );
        assert_eq!(
            table.rows[2],
            vec![CellValue::Integer(5), CellValue::Null, CellValue::Null]
        );
    }

    #[test]
    fn long_rows_are_an_error() {
        let err = read_csv("a,b\n1,2\n3,4,5\n".as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("CSV row 1"));
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "x,y").unwrap();
        writeln!(file, "1,2").unwrap();
        writeln!(file, "3,4").unwrap();
        let table = load_csv(file.path()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[1][1], CellValue::Integer(4));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_csv(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(format!("{err:#}").contains("here.csv"));
    }
}
