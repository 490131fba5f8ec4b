/// Plain-text table with left-aligned, upper-cased headers
///
/// Columns are as wide as their widest cell and separated by two spaces.
/// There are no borders, and trailing whitespace is trimmed from every line.
pub(crate) struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    const COLUMN_GAP: &'static str = "  ";

    pub(crate) fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_uppercase()).collect(),
            rows: Vec::new(),
        }
    }

    pub(crate) fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (index, cell) in row.iter().enumerate() {
                let width = cell.chars().count();
                match widths.get_mut(index) {
                    Some(current) => *current = (*current).max(width),
                    None => widths.push(width),
                }
            }
        }
        widths
    }

    fn render_line(cells: &[String], widths: &[usize], output: &mut String) {
        let mut line = String::new();
        for (index, width) in widths.iter().enumerate() {
            if index > 0 {
                line.push_str(Self::COLUMN_GAP);
            }
            let cell = cells.get(index).map(String::as_str).unwrap_or("");
            line.push_str(cell);
            let padding = width.saturating_sub(cell.chars().count());
            line.extend(std::iter::repeat(' ').take(padding));
        }
        output.push_str(line.trim_end());
        output.push('\n');
    }

    pub(crate) fn render(&self) -> String {
        let widths = self.column_widths();
        let mut output = String::new();
        Self::render_line(&self.headers, &widths, &mut output);
        for row in &self.rows {
            Self::render_line(row, &widths, &mut output);
        }
        output
    }
}
