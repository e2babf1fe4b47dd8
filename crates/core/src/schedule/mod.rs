//! 12-month payment schedule building and CSV export.

pub mod error;
pub mod export;
pub mod service;
pub mod types;


pub use error::ExportError;
pub use export::{export_file_name, export_to_file};
pub use service::{SCHEDULE_MONTHS, build_schedule};
pub use types::ScheduleRow;
