use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use caderno_core::{dates, LedgerRow};

use crate::error::SheetError;
use crate::profile::ImportProfile;

/// Reads the ledger sheet into rows. The first row after the skip count is
/// the header; the detail column is located there by name, everything else
/// by fixed position.
pub fn read_ledger(path: &Path, profile: &ImportProfile) -> Result<Vec<LedgerRow>, SheetError> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook.worksheet_range(&profile.ledger_sheet)?;

    let mut sheet_rows = range.rows().skip(profile.ledger_skip_rows);
    let header = sheet_rows
        .next()
        .ok_or_else(|| SheetError::NoDataRows(profile.ledger_sheet.clone()))?;

    let detail_header = profile.columns.detail_header.as_str();
    let detail_column = header
        .iter()
        .position(|cell| cell_text(cell).as_deref() == Some(detail_header))
        .ok_or_else(|| SheetError::MissingColumn(detail_header.to_string()))?;

    let columns = &profile.columns;
    let mut rows = Vec::new();
    for cells in sheet_rows {
        if cells.iter().all(|c| matches!(c, Data::Empty)) {
            continue;
        }
        rows.push(LedgerRow {
            date: cell_at(cells, columns.date_column).and_then(cell_date),
            group: cell_at(cells, columns.group_column).and_then(cell_text),
            category: cell_at(cells, columns.category_column).and_then(cell_text),
            detail: cell_at(cells, detail_column).and_then(cell_text),
            memo: cell_at(cells, columns.memo_column).and_then(cell_text),
            amount: cell_at(cells, columns.amount_column).and_then(cell_number),
        });
    }

    tracing::debug!(rows = rows.len(), sheet = %profile.ledger_sheet, "read ledger sheet");
    if rows.is_empty() {
        return Err(SheetError::NoDataRows(profile.ledger_sheet.clone()));
    }
    Ok(rows)
}

/// Reads the reference category column in sheet order. Absent cells come
/// back as `None` so the reference preprocessor can skip them without
/// disturbing the order of the rest.
pub fn read_reference(
    path: &Path,
    profile: &ImportProfile,
) -> Result<Vec<Option<String>>, SheetError> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook.worksheet_range(&profile.reference_sheet)?;

    let values = range
        .rows()
        .skip(profile.reference_skip_rows + 1) // header row included
        .map(|cells| cell_at(cells, profile.reference_column).and_then(cell_text))
        .collect();

    Ok(values)
}

fn cell_at(cells: &[Data], index: usize) -> Option<&Data> {
    cells.get(index)
}

fn cell_text(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        Data::DateTimeIso(s) => s.trim().to_string(),
        _ => return None,
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn cell_date(cell: &Data) -> Option<chrono::NaiveDate> {
    match cell {
        Data::DateTime(dt) => dt.as_datetime().map(|d| d.date()),
        Data::String(s) => dates::parse_flexible(s),
        Data::DateTimeIso(s) => dates::parse_flexible(s),
        _ => None,
    }
}

fn cell_number(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => parse_number_text(s),
        _ => None,
    }
}

/// Brazilian exports write "1.234,56"; plain text cells write "1234.56".
fn parse_number_text(s: &str) -> Option<f64> {
    let s = s.trim().replace(['R', '$', ' '], "");
    let normalized = if s.contains(',') {
        s.replace('.', "").replace(',', ".")
    } else {
        s
    };
    normalized.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_text_trims_and_drops_blank() {
        assert_eq!(cell_text(&Data::String("  Aluguel ".into())), Some("Aluguel".into()));
        assert_eq!(cell_text(&Data::String("   ".into())), None);
        assert_eq!(cell_text(&Data::Empty), None);
    }

    #[test]
    fn cell_date_parses_text_dates() {
        assert_eq!(
            cell_date(&Data::String("15/01/2024".into())),
            chrono::NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        assert_eq!(cell_date(&Data::Float(42.0)), None);
    }

    #[test]
    fn parses_brazilian_number_text() {
        assert_eq!(parse_number_text("1.234,56"), Some(1234.56));
        assert_eq!(parse_number_text("R$ 99,90"), Some(99.90));
        assert_eq!(parse_number_text("1234.56"), Some(1234.56));
        assert_eq!(parse_number_text("abc"), None);
    }
}
