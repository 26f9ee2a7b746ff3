pub mod dates;
pub mod row;

pub use dates::{format_br, parse_flexible};
pub use row::{LedgerRow, RowFilter};
