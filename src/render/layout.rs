use crate::time::DecimalHours;
use crate::timesheet::{TimeSheet, WorkEntry};

/// Where a single semantic field is drawn on the template and how big.
///
/// Coordinates are absolute pixels on the template image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub x: f64,
    pub y: f64,
    pub point_size: u32,
}

const fn field(x: f64, y: f64, point_size: u32) -> FieldSpec {
    FieldSpec { x, y, point_size }
}

/// A piece of text placed at an absolute position.
#[derive(Debug, Clone, PartialEq)]
pub struct TextField {
    pub x: f64,
    pub y: f64,
    pub point_size: u32,
    pub text: String,
}

impl TextField {
    fn new(spec: FieldSpec, text: impl Into<String>) -> Self {
        Self {
            x: spec.x,
            y: spec.y,
            point_size: spec.point_size,
            text: text.into(),
        }
    }
}

/// The fixed coordinate table of the timesheet template.
///
/// This is configuration, not computation: both template variants share
/// it, and nothing here is ever mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    name: FieldSpec,
    iban: FieldSpec,
    month: FieldSpec,
    year: FieldSpec,
    table_x: [f64; 4],
    table_point_size: u32,
    y_start: f64,
    y_delta: f64,
    total_hours: FieldSpec,
}

impl Layout {
    pub const DEFAULT: Self = Self {
        name: field(840.0, 965.0, 115),
        iban: field(1800.0, 1280.0, 115),
        month: field(500.0, 1910.0, 115),
        year: field(1610.0, 1930.0, 95),
        table_x: [230.0, 945.0, 1805.0, 2510.0],
        table_point_size: 118,
        y_start: 2650.0,
        y_delta: 185.3,
        total_hours: field(1790.0, 6795.0, 160),
    };

    /// The y coordinate of the table row with the given index.
    ///
    /// Computed from the index in one step, so that no floating point
    /// error accumulates over the rows.
    #[must_use]
    pub fn row_y(&self, index: usize) -> f64 {
        self.y_start + index as f64 * self.y_delta
    }

    fn row_cells(entry: &WorkEntry) -> [String; 4] {
        let date = entry.date();

        [
            format!(
                "{:02}.{:02}. {}",
                date.day(),
                date.month(),
                date.week_day().abbreviation()
            ),
            format!("{}-{}", entry.start(), entry.end()),
            format!("{} hrs", DecimalHours::new(entry.work_duration())),
            entry.location().to_string(),
        ]
    }

    /// Maps the whole sheet onto placed text fields, top to bottom in
    /// entry order.
    #[must_use]
    pub fn lay_out(&self, sheet: &TimeSheet) -> Vec<TextField> {
        let mut fields = vec![
            TextField::new(self.name, sheet.employee_name()),
            TextField::new(self.iban, sheet.iban().to_string()),
            TextField::new(self.month, sheet.month().name()),
            TextField::new(self.year, format!("{:02}", sheet.year().as_usize() % 100)),
        ];

        for (index, entry) in sheet.entries().enumerate() {
            let y = self.row_y(index);

            for (x, text) in self.table_x.into_iter().zip(Self::row_cells(entry)) {
                fields.push(TextField {
                    x,
                    y,
                    point_size: self.table_point_size,
                    text,
                });
            }
        }

        fields.push(TextField::new(
            self.total_hours,
            format!("{} h", DecimalHours::new(sheet.total_work_duration())),
        ));

        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::time::{Month, Year};
    use crate::{date, time_stamp};

    fn sheet() -> TimeSheet {
        let mut sheet = TimeSheet::new(
            "Erika Musterfrau",
            "DE02120300000000202051".parse().unwrap(),
            Month::June,
            Year::new(2025),
            true,
        );

        sheet
            .push_entry(WorkEntry::new(
                date!(2025:06:02),
                time_stamp!(09:00),
                time_stamp!(17:30),
                "workshop",
            ))
            .unwrap();
        sheet
            .push_entry(WorkEntry::new(
                date!(2025:06:04),
                time_stamp!(08:00),
                time_stamp!(18:00),
                "lab",
            ))
            .unwrap();

        sheet
    }

    #[test]
    fn test_row_y_does_not_accumulate() {
        let layout = Layout::DEFAULT;

        assert_eq!(layout.row_y(0), 2650.0);
        assert_eq!(layout.row_y(5), 2650.0 + 5.0 * 185.3);
        assert_eq!(layout.row_y(5), 3576.5);
        assert_eq!(layout.row_y(21), 2650.0 + 21.0 * 185.3);
    }

    #[test]
    fn test_header_fields() {
        let fields = Layout::DEFAULT.lay_out(&sheet());

        assert_eq!(fields[0].text, "Erika Musterfrau");
        assert_eq!((fields[0].x, fields[0].y), (840.0, 965.0));
        assert_eq!(fields[1].text, "DE02 1203 0000 0000 2020 51");
        assert_eq!(fields[2].text, "Juni");
        assert_eq!((fields[2].x, fields[2].y), (500.0, 1910.0));
        assert_eq!(fields[3].text, "25");
        assert_eq!(fields[3].point_size, 95);
    }

    #[test]
    fn test_table_rows() {
        let fields = Layout::DEFAULT.lay_out(&sheet());

        // 4 header fields, then 4 cells per row
        let first_row = &fields[4..8];
        assert_eq!(first_row[0].text, "02.06. Mo");
        assert_eq!(first_row[1].text, "09:00-17:30");
        assert_eq!(first_row[2].text, "8,00 hrs");
        assert_eq!(first_row[3].text, "workshop");
        assert!(first_row.iter().all(|f| f.y == 2650.0));
        assert_eq!(
            first_row.iter().map(|f| f.x).collect::<Vec<_>>(),
            vec![230.0, 945.0, 1805.0, 2510.0]
        );

        let second_row = &fields[8..12];
        assert_eq!(second_row[0].text, "04.06. Mi");
        assert_eq!(second_row[2].text, "9,25 hrs");
        assert!(second_row.iter().all(|f| f.y == 2650.0 + 185.3));
    }

    #[test]
    fn test_total_hours_field() {
        let fields = Layout::DEFAULT.lay_out(&sheet());
        let total = fields.last().unwrap();

        // 480 + 555 minutes of work
        assert_eq!(total.text, "17,25 h");
        assert_eq!((total.x, total.y), (1790.0, 6795.0));
        assert_eq!(total.point_size, 160);

        // 4 header fields + 2 rows * 4 cells + the total
        assert_eq!(fields.len(), 4 + 2 * 4 + 1);
    }
}
