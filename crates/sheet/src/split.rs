use std::collections::BTreeMap;
use std::sync::OnceLock;

use caderno_core::LedgerRow;
use regex::Regex;

/// Partitions rows by their group (account/cost-center) value. Rows with a
/// blank group are dropped; groups come back sorted so batch output is
/// deterministic.
pub fn split_by_group(rows: &[LedgerRow]) -> Vec<(String, Vec<&LedgerRow>)> {
    let mut groups: BTreeMap<String, Vec<&LedgerRow>> = BTreeMap::new();
    for row in rows {
        if let Some(group) = row.group.as_deref().map(str::trim).filter(|g| !g.is_empty()) {
            groups.entry(group.to_string()).or_default().push(row);
        }
    }
    groups.into_iter().collect()
}

/// Makes a group name safe to use as a file name.
pub fn sanitize_filename(name: &str) -> String {
    static FORBIDDEN: OnceLock<Regex> = OnceLock::new();
    let re = FORBIDDEN.get_or_init(|| Regex::new(r#"[<>:"/\\|?*]"#).unwrap());
    re.replace_all(name, "_").into_owned()
}
