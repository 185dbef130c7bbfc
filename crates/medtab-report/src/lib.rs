pub mod charts;
pub mod summary;

pub use charts::{CHART_FILES, render_all};
pub use summary::{category_counts, numeric_column, split_blood_pressure};
