use std::fmt;
use std::fmt::Debug;

use crate::timesheet::TimeSheet;

/// A check that must pass before a sheet may be exported.
///
/// Verifiers collect every violation they find instead of stopping at
/// the first one, so the user can fix all of them in one go.
pub trait Verifier {
    type Error: fmt::Display + Debug + Sync + Send + 'static;
    type Errors: IntoIterator<Item = Self::Error>;

    fn verify(&self, sheet: &TimeSheet) -> Result<(), Self::Errors>;
}
