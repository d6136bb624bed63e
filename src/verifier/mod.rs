use crate::timesheet::TimeSheet;

mod verifier;
mod verify_entries;
mod verify_header;

pub use verifier::Verifier;
pub use verify_entries::*;
pub use verify_header::*;

pub struct DefaultVerifier;

impl Verifier for DefaultVerifier {
    type Error = anyhow::Error;
    type Errors = Vec<Self::Error>;

    fn verify(&self, sheet: &TimeSheet) -> Result<(), Self::Errors> {
        let mut errors = Vec::new();

        if let Err(header_errors) = VerifyHeader.verify(sheet) {
            errors.extend(header_errors.into_iter().map(Into::into));
        }

        if let Err(entry_errors) = VerifyEntries.verify(sheet) {
            errors.extend(entry_errors.into_iter().map(Into::into));
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(())
    }
}
