use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::SheetError;

/// Zero-based column positions in the ledger sheet. The detail column is
/// located by header name instead of position — it is the one column the
/// upstream export labels reliably.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMapping {
    pub date_column: usize,
    pub group_column: usize,
    pub category_column: usize,
    pub memo_column: usize,
    pub amount_column: usize,
    pub detail_header: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            date_column: 1,
            group_column: 2,
            category_column: 3,
            memo_column: 5,
            amount_column: 9,
            detail_header: "Detalhe".to_string(),
        }
    }
}

/// Where to find the ledger rows and the reference category column inside
/// the workbook. Defaults mirror the standard export layout: ledger data
/// headed at row 9 of `Planilha1`, reference categories in column B of
/// `Página1` headed at row 5.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportProfile {
    pub ledger_sheet: String,
    /// Rows above the ledger header row.
    pub ledger_skip_rows: usize,
    pub reference_sheet: String,
    /// Rows above the reference header row.
    pub reference_skip_rows: usize,
    pub reference_column: usize,
    pub columns: ColumnMapping,
    /// Detail labels dropped before matching (balances, internal transfers).
    pub excluded_labels: Vec<String>,
}

impl Default for ImportProfile {
    fn default() -> Self {
        Self {
            ledger_sheet: "Planilha1".to_string(),
            ledger_skip_rows: 8,
            reference_sheet: "Página1".to_string(),
            reference_skip_rows: 4,
            reference_column: 1,
            columns: ColumnMapping::default(),
            excluded_labels: vec![
                "Transferência entre Disponíveis - Saída".to_string(),
                "Transferência entre Disponíveis - Entrada".to_string(),
                "Saldo Inicial".to_string(),
            ],
        }
    }
}

impl ImportProfile {
    pub fn from_toml(toml_content: &str) -> Result<Self, SheetError> {
        Ok(toml::from_str(toml_content)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, SheetError> {
        Self::from_toml(&std::fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_upstream_layout() {
        let profile = ImportProfile::default();
        assert_eq!(profile.ledger_sheet, "Planilha1");
        assert_eq!(profile.ledger_skip_rows, 8);
        assert_eq!(profile.reference_skip_rows, 4);
        assert_eq!(profile.columns.detail_header, "Detalhe");
        assert_eq!(profile.columns.amount_column, 9);
        assert_eq!(profile.excluded_labels.len(), 3);
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let profile = ImportProfile::from_toml(
            r#"
            ledger_sheet = "Extrato"
            ledger_skip_rows = 0

            [columns]
            detail_header = "Histórico"
            "#,
        )
        .unwrap();
        assert_eq!(profile.ledger_sheet, "Extrato");
        assert_eq!(profile.ledger_skip_rows, 0);
        assert_eq!(profile.columns.detail_header, "Histórico");
        // Untouched fields keep their defaults.
        assert_eq!(profile.reference_sheet, "Página1");
        assert_eq!(profile.columns.date_column, 1);
    }

    #[test]
    fn invalid_toml_is_rejected() {
        assert!(matches!(
            ImportProfile::from_toml("ledger_skip_rows = \"nine\""),
            Err(SheetError::InvalidProfile(_))
        ));
    }
}
