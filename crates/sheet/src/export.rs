use std::io::Write;
use std::path::Path;

use caderno_core::{dates, LedgerRow};
use rust_xlsxwriter::{Format, Workbook};

use crate::error::SheetError;

/// Column layout of the cleaned per-group table. The three date columns all
/// carry the transaction date; the last four stay blank for manual entry in
/// the downstream accounting import.
pub const OUTPUT_HEADERS: [&str; 10] = [
    "Data de Competência",
    "Data de Vencimento",
    "Data de Pagamento",
    "Valor",
    "Categoria",
    "Descrição",
    "Cliente/Fornecedor",
    "CNPJ/CPF",
    "Centro de Custo",
    "Observações",
];

fn description_for(row: &LedgerRow) -> Option<&str> {
    row.memo.as_deref().or(row.detail.as_deref())
}

/// Writes one group's rows as an xlsx workbook with a single `Dados` sheet,
/// date columns formatted dd/mm/yyyy.
pub fn write_group_xlsx(path: &Path, rows: &[&LedgerRow]) -> Result<(), SheetError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Dados")?;

    let date_format = Format::new().set_num_format("dd/mm/yyyy");

    for (col, header) in OUTPUT_HEADERS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        if let Some(date) = row.date {
            for col in 0..3u16 {
                worksheet.write_datetime_with_format(r, col, &date, &date_format)?;
            }
        }
        if let Some(amount) = row.amount {
            worksheet.write_number(r, 3, amount)?;
        }
        if let Some(category) = &row.category {
            worksheet.write_string(r, 4, category)?;
        }
        if let Some(description) = description_for(row) {
            worksheet.write_string(r, 5, description)?;
        }
    }

    workbook.save(path)?;
    Ok(())
}

/// CSV rendition of the same table, dates pre-formatted as dd/mm/yyyy text.
pub fn write_group_csv<W: Write>(writer: W, rows: &[&LedgerRow]) -> Result<(), SheetError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(OUTPUT_HEADERS)?;

    for row in rows {
        let date = row.date.map(dates::format_br).unwrap_or_default();
        let amount = row.amount.map(|v| v.to_string()).unwrap_or_default();
        csv_writer.write_record([
            date.as_str(),
            date.as_str(),
            date.as_str(),
            amount.as_str(),
            row.category.as_deref().unwrap_or(""),
            description_for(row).unwrap_or(""),
            "",
            "",
            "",
            "",
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

pub fn write_group_csv_path(path: &Path, rows: &[&LedgerRow]) -> Result<(), SheetError> {
    let file = std::fs::File::create(path)?;
    write_group_csv(file, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_row() -> LedgerRow {
        LedgerRow {
            date: NaiveDate::from_ymd_opt(2024, 1, 15),
            group: Some("Caixa".to_string()),
            category: Some("CAT002 - Pagamento de fornecedor".to_string()),
            detail: Some("Pagamento de fornecedor".to_string()),
            memo: None,
            amount: Some(1234.56),
        }
    }

    #[test]
    fn csv_has_header_and_formatted_dates() {
        let row = sample_row();
        let mut buffer = Vec::new();
        write_group_csv(&mut buffer, &[&row]).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with("Data de Competência,"));
        let data = lines.next().unwrap();
        assert!(data.starts_with("15/01/2024,15/01/2024,15/01/2024,1234.56,"));
        assert!(data.contains("Pagamento de fornecedor"));
    }

    #[test]
    fn csv_memo_preferred_over_detail() {
        let mut row = sample_row();
        row.memo = Some("Limpo".to_string());
        let mut buffer = Vec::new();
        write_group_csv(&mut buffer, &[&row]).unwrap();

        let mut reader = csv::Reader::from_reader(buffer.as_slice());
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(record.get(5), Some("Limpo"));
    }

    #[test]
    fn csv_blank_cells_for_missing_fields() {
        let row = LedgerRow::default();
        let mut buffer = Vec::new();
        write_group_csv(&mut buffer, &[&row]).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let data = text.lines().nth(1).unwrap();
        assert_eq!(data, ",,,,,,,,,");
    }
}
