pub mod error;
pub mod schema;
pub mod table;

pub use error::{MedTabError, Result};
pub use schema::{Gender, columns};
pub use table::{CellValue, Table};
