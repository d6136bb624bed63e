mod entry;
pub use entry::*;
mod iban;
pub use iban::*;
mod sheet;
pub use sheet::*;
