mod entry;
mod general;
mod month;

pub use entry::Entry;
pub use general::General;
pub use month::MonthFile;
