//! Command implementations

pub mod cost;
pub mod generate;
pub mod list;
pub mod report;

pub use cost::Cost;
pub use generate::Generate;
pub use list::List;
pub use report::Report;
