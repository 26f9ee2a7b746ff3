use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One transaction row from the ledger sheet. Spreadsheet exports leave
/// cells blank routinely, so every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LedgerRow {
    pub date: Option<NaiveDate>,
    /// Account / cost-center grouping key ("Disponível"). One output file
    /// is written per distinct value.
    pub group: Option<String>,
    pub category: Option<String>,
    /// Free-text memo fed to the reconciliation engine.
    pub detail: Option<String>,
    /// Pre-existing clean description; preferred over `detail` on output.
    pub memo: Option<String>,
    pub amount: Option<f64>,
}

/// Excludes known non-transactional row labels (opening balances, internal
/// transfers) before the rows reach the matching engine.
#[derive(Debug, Clone)]
pub struct RowFilter {
    labels: Vec<String>,
}

impl Default for RowFilter {
    fn default() -> Self {
        Self::new(
            [
                "Transferência entre Disponíveis - Saída",
                "Transferência entre Disponíveis - Entrada",
                "Saldo Inicial",
            ]
            .map(String::from)
            .to_vec(),
        )
    }
}

impl RowFilter {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// Exact label comparison on the detail column, like the upstream
    /// export's own row labels — no trimming or case folding.
    pub fn is_excluded(&self, row: &LedgerRow) -> bool {
        match &row.detail {
            Some(detail) => self.labels.iter().any(|l| l == detail),
            None => false,
        }
    }

    pub fn retain(&self, rows: Vec<LedgerRow>) -> Vec<LedgerRow> {
        rows.into_iter().filter(|r| !self.is_excluded(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_with_detail(detail: &str) -> LedgerRow {
        LedgerRow {
            detail: Some(detail.to_string()),
            ..LedgerRow::default()
        }
    }

    #[test]
    fn default_filter_excludes_balance_and_transfer_rows() {
        let filter = RowFilter::default();
        assert!(filter.is_excluded(&row_with_detail("Saldo Inicial")));
        assert!(filter.is_excluded(&row_with_detail(
            "Transferência entre Disponíveis - Saída"
        )));
        assert!(!filter.is_excluded(&row_with_detail("Pagamento de fornecedor")));
    }

    #[test]
    fn filter_is_exact_not_substring() {
        let filter = RowFilter::default();
        assert!(!filter.is_excluded(&row_with_detail("Saldo Inicial 2024")));
    }

    #[test]
    fn rows_without_detail_are_kept() {
        let filter = RowFilter::default();
        assert!(!filter.is_excluded(&LedgerRow::default()));
    }

    #[test]
    fn retain_drops_excluded_rows() {
        let filter = RowFilter::default();
        let rows = vec![
            row_with_detail("Saldo Inicial"),
            row_with_detail("Aluguel"),
        ];
        let kept = filter.retain(rows);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].detail.as_deref(), Some("Aluguel"));
    }
}
