use crate::label::fit;

/// Box-drawn table with fixed column widths and a rule between every row.
///
/// Cells wider than their column are cut with [`fit`].
#[derive(Debug, Clone)]
pub struct Table {
    widths: Vec<usize>,
    rows:   Vec<Vec<String>>,
}

impl Table {
    pub fn new(widths: Vec<usize>) -> Self {
        Self { widths, rows: Vec::new() }
    }

    /// Append a row; missing cells render blank, extra cells are dropped.
    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    pub fn lines(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.rows.len() * 2 + 1);
        out.push(self.rule('┌', '┬', '┐'));
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                out.push(self.rule('├', '┼', '┤'));
            }
            out.push(self.row_line(row));
        }
        out.push(self.rule('└', '┴', '┘'));
        out
    }

    fn rule(&self, left: char, join: char, right: char) -> String {
        let body: Vec<String> = self.widths.iter().map(|w| "─".repeat(w + 2)).collect();
        let join = join.to_string();
        format!("{left}{}{right}", body.join(join.as_str()))
    }

    fn row_line(&self, row: &[String]) -> String {
        let cells: Vec<String> = self
            .widths
            .iter()
            .enumerate()
            .map(|(i, &w)| format!(" {} ", fit(row.get(i).map_or("", String::as_str), w)))
            .collect();
        format!("│{}│", cells.join("│"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_rule_between_rows() {
        let mut t = Table::new(vec![4, 5]);
        t.push_row(["Name", "CPU"]);
        t.push_row(["bash", "1.0%"]);
        assert_eq!(
            t.lines(),
            vec![
                "┌──────┬───────┐",
                "│ Name │ CPU   │",
                "├──────┼───────┤",
                "│ bash │ 1.0%  │",
                "└──────┴───────┘",
            ]
        );
    }

    #[test]
    fn every_line_has_the_same_width() {
        let mut t = Table::new(vec![3, 8]);
        t.push_row(["firefox", "x"]);
        t.push_row(["a"]);
        let widths: Vec<usize> = t.lines().iter().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{widths:?}");
    }
}
