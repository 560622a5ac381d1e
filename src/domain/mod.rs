//! Records shown on the dashboard pages and the fixed catalog they come from

mod catalog;
mod error;
mod records;

pub use catalog::{Catalog, StatsSummary};
pub use error::DomainError;
pub use records::{format_size, weekday_label, Document, Metric, Percent, Profile, ViolationRecord};
