/// Frame rows taken by everything above the process table.
const RESERVED_ROWS: f64 = 28.0;
/// Terminal rows per table row (text line plus rule, rounded up).
const ROWS_PER_PROCESS: f64 = 2.2;

/// Sizing derived from the live terminal dimensions, recomputed every cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Label width, bar width and history depth, in characters.
    pub char_budget:  usize,
    /// How many process rows fit; `0` replaces the table with a notice.
    pub process_rows: usize,
}

impl Layout {
    pub fn compute(columns: u16, rows: u16) -> Self {
        let spare = (f64::from(rows) - RESERVED_ROWS) / ROWS_PER_PROCESS;
        Self {
            char_budget:  usize::from(columns) / 3,
            process_rows: spare.max(0.0).floor() as usize,
        }
    }

    /// Width of the Name, CPU and Memory columns.
    pub fn short_column(&self) -> usize {
        (self.char_budget as f64 / 1.2 / 3.0).floor() as usize
    }

    /// Width of the Command column.
    pub fn command_column(&self) -> usize {
        (self.char_budget as f64 / 1.2).floor() as usize
    }

    pub fn table_widths(&self) -> Vec<usize> {
        let short = self.short_column();
        vec![short, short, short, self.command_column()]
    }
}
