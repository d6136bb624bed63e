use thiserror::Error;

use crate::timesheet::TimeSheet;
use crate::verifier::Verifier;

pub struct VerifyHeader;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvalidHeader {
    #[error("the employee name must not be empty")]
    EmptyName,
    #[error("the year {year} does not have four digits")]
    UnusualYear { year: crate::time::Year },
}

impl Verifier for VerifyHeader {
    type Error = InvalidHeader;
    type Errors = Vec<Self::Error>;

    fn verify(&self, sheet: &TimeSheet) -> Result<(), Self::Errors> {
        let mut errors = Vec::new();

        if sheet.employee_name().trim().is_empty() {
            errors.push(InvalidHeader::EmptyName);
        }

        // the template prints the last two digits and expects a
        // four digit year
        if !(1000..=9999).contains(&sheet.year().as_usize()) {
            errors.push(InvalidHeader::UnusualYear { year: sheet.year() });
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(())
    }
}
