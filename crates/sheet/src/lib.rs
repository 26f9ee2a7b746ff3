pub mod error;
pub mod export;
pub mod profile;
pub mod split;
pub mod xlsx;

pub use error::SheetError;
pub use export::{write_group_csv, write_group_csv_path, write_group_xlsx, OUTPUT_HEADERS};
pub use profile::{ColumnMapping, ImportProfile};
pub use split::{sanitize_filename, split_by_group};
pub use xlsx::{read_ledger, read_reference};
