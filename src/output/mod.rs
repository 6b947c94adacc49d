pub mod export;
pub mod preview;

pub use export::{export_file_name, render_csv, write_csv};
pub use preview::render_preview;

/// Rows shown in the console preview after an export
pub const PREVIEW_ROWS: usize = 5;
