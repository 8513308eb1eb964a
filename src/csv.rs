// src/csv.rs
use std::io::{self, Write};

use crate::data::DataSet;

/// UTF-8 byte-order mark; lets spreadsheet apps pick the right encoding.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

const SEP: char = ',';

fn needs_quotes(field: &str) -> bool {
    field.contains(SEP) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", SEP)?; } else { first = false; }
        if needs_quotes(cell) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Stream a whole dataset: optional BOM, optional header row, then rows.
pub fn write_export<W: Write>(
    mut w: W,
    ds: &DataSet,
    include_headers: bool,
    bom: bool,
) -> io::Result<()> {
    if bom {
        w.write_all(UTF8_BOM)?;
    }
    if include_headers {
        if let Some(h) = &ds.headers {
            write_row(&mut w, h)?;
        }
    }
    for r in &ds.rows {
        write_row(&mut w, r)?;
    }
    w.flush()
}

/// Export text without BOM (clipboard / stdout previews).
pub fn to_export_string(ds: &DataSet, include_headers: bool) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_export(&mut buf, ds, include_headers, false);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| s!(*c)).collect()
    }

    #[test]
    fn quotes_only_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &row(&["plain", "a,b", "say \"hi\"", "two\nlines"])).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "plain,\"a,b\",\"say \"\"hi\"\"\",\"two\nlines\"\n"
        );
    }

    #[test]
    fn bom_precedes_header() {
        let ds = DataSet { headers: Some(row(&["No", "Title"])), rows: vec![row(&["1", "커피"])] };
        let mut buf = Vec::new();
        write_export(&mut buf, &ds, true, true).unwrap();
        assert!(buf.starts_with(UTF8_BOM));
        assert_eq!(std::str::from_utf8(&buf[3..]).unwrap(), "No,Title\n1,커피\n");
    }

    #[test]
    fn string_export_can_skip_headers() {
        let ds = DataSet { headers: Some(row(&["No"])), rows: vec![row(&["1"]), row(&["2"])] };
        assert_eq!(to_export_string(&ds, false), "1\n2\n");
    }
}
