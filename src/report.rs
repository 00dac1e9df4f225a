//! Tabular summaries printed at the end of a backup run.
//!
//! A [`ResultTable`] collects one row per backed-up item and renders them as a
//! titled table with per-column alignment. The file and database summaries
//! differ only in their [`TableLayout`], so both are the same type.

use tabled::{
    builder::Builder,
    settings::{
        Alignment, Modify, Panel, Style,
        object::{Cell, Columns},
        style::HorizontalLine,
    },
};

/// Horizontal alignment of a column's cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

impl From<Align> for Alignment {
    fn from(align: Align) -> Self {
        match align {
            Align::Left => Self::left(),
            Align::Right => Self::right(),
        }
    }
}

/// Title, header and alignment directives for a [`ResultTable`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableLayout {
    /// Heading shown above the column labels
    pub title: String,

    /// Column labels, in display order
    pub header: Vec<String>,

    /// Alignment per column, keyed by header label; unlisted columns keep the default
    pub alignments: Vec<(String, Align)>,
}

impl TableLayout {
    /// Build a layout from borrowed labels.
    #[must_use]
    pub fn new(title: &str, header: &[&str], alignments: &[(&str, Align)]) -> Self {
        Self {
            title: title.to_string(),
            header: header.iter().map(ToString::to_string).collect(),
            alignments: alignments
                .iter()
                .map(|(column, align)| ((*column).to_string(), *align))
                .collect(),
        }
    }

    /// Layout for the file backup summary.
    #[must_use]
    pub fn file_backup() -> Self {
        Self::new(
            "File Backup Status",
            &["Path", "Source Size", "Destination Size", "Status"],
            &[
                ("Path", Align::Left),
                ("Source Size", Align::Right),
                ("Destination Size", Align::Right),
            ],
        )
    }

    /// Layout for the database backup summary.
    #[must_use]
    pub fn database_backup() -> Self {
        Self::new(
            "Database Backup Status",
            &["Type", "Container", "Database", "Size", "Status"],
            &[
                ("Type", Align::Left),
                ("Container", Align::Left),
                ("Database", Align::Left),
                ("Size", Align::Right),
            ],
        )
    }

    /// Column index and alignment for every directive naming a known column.
    fn column_alignments(&self) -> impl Iterator<Item = (usize, Align)> + '_ {
        self.alignments.iter().filter_map(|(column, align)| {
            self.header
                .iter()
                .position(|label| label == column)
                .map(|index| (index, *align))
        })
    }
}

/// Rows accumulated during a run, rendered once at the end.
///
/// Each row should have as many values as the layout has columns; this is
/// not checked.
#[derive(Clone, Debug)]
pub struct ResultTable {
    layout: TableLayout,
    rows: Vec<Vec<String>>,
}

impl ResultTable {
    /// Create an empty table with the given layout.
    #[must_use]
    pub const fn new(layout: TableLayout) -> Self {
        Self {
            layout,
            rows: Vec::new(),
        }
    }

    /// Create an empty file backup summary.
    #[must_use]
    pub fn file_backup() -> Self {
        Self::new(TableLayout::file_backup())
    }

    /// Create an empty database backup summary.
    #[must_use]
    pub fn database_backup() -> Self {
        Self::new(TableLayout::database_backup())
    }

    /// Append a row after all rows added so far.
    pub fn add_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    /// Title, header and alignments this table renders with.
    #[must_use]
    pub const fn layout(&self) -> &TableLayout {
        &self.layout
    }

    /// Rows added so far, in insertion order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows, not counting title or header.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no rows have been added.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table, or `None` if no rows were added.
    #[must_use]
    pub fn render(&self) -> Option<String> {
        if self.rows.is_empty() {
            return None;
        }

        let mut builder = Builder::default();
        builder.push_record(self.layout.header.iter().cloned());
        for row in &self.rows {
            builder.push_record(row.iter().cloned());
        }

        let mut table = builder.build();

        for (index, align) in self.layout.column_alignments() {
            table.with(Modify::new(Columns::single(index)).with(Alignment::from(align)));
        }

        // Row 0 is the title, row 1 the column labels; rule under both.
        let style = Style::rounded().remove_horizontals().horizontals([
            (1, HorizontalLine::inherit(Style::modern_rounded())),
            (2, HorizontalLine::inherit(Style::modern_rounded())),
        ]);

        table
            .with(Panel::header(self.layout.title.as_str()))
            .with(Modify::new(Cell::new(0, 0)).with(Alignment::center()))
            .with(style);

        Some(table.to_string())
    }

    /// Print the rendered table to stdout; prints nothing if there are no rows.
    pub fn print(self) {
        if let Some(table) = self.render() {
            println!("{table}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_backup_layout() {
        let layout = TableLayout::file_backup();

        assert_eq!(layout.title, "File Backup Status");
        assert_eq!(
            layout.header,
            vec!["Path", "Source Size", "Destination Size", "Status"]
        );
        assert_eq!(
            layout.column_alignments().collect::<Vec<_>>(),
            vec![(0, Align::Left), (1, Align::Right), (2, Align::Right)]
        );
    }

    #[test]
    fn test_database_backup_layout() {
        let layout = TableLayout::database_backup();

        assert_eq!(layout.title, "Database Backup Status");
        assert_eq!(layout.header.len(), 5);
        assert_eq!(
            layout.column_alignments().collect::<Vec<_>>(),
            vec![
                (0, Align::Left),
                (1, Align::Left),
                (2, Align::Left),
                (3, Align::Right)
            ]
        );
    }

    #[test]
    fn test_alignment_for_unknown_column_is_ignored() {
        let layout = TableLayout::new("T", &["A", "B"], &[("C", Align::Right), ("B", Align::Right)]);
        assert_eq!(
            layout.column_alignments().collect::<Vec<_>>(),
            vec![(1, Align::Right)]
        );
    }

    #[test]
    fn test_empty_table_renders_nothing() {
        let table = ResultTable::file_backup();

        assert!(table.is_empty());
        assert_eq!(table.render(), None);
    }

    #[test]
    fn test_render_contains_title_header_and_rows_in_order() {
        let mut table = ResultTable::database_backup();
        table.add_row(["mysql", "db-main", "shop", "12.00 MB", "OK"]);
        table.add_row(["postgres", "db-aux", "analytics", "3.40 GB", "OK"]);
        table.add_row(["mongodb", "db-docs", "events", "empty", "FAILED"]);

        let rendered = table.render().unwrap();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(table.len(), 3);
        assert!(lines.iter().any(|l| l.contains("Database Backup Status")));
        assert!(lines.iter().any(|l| l.contains("Container") && l.contains("Size")));

        let position = |needle: &str| lines.iter().position(|l| l.contains(needle)).unwrap();
        assert!(position("Database Backup Status") < position("Container"));
        assert!(position("Container") < position("shop"));
        assert!(position("shop") < position("analytics"));
        assert!(position("analytics") < position("events"));
    }

    #[test]
    fn test_render_has_one_line_per_row() {
        let mut table = ResultTable::file_backup();
        for i in 0..4 {
            table.add_row([format!("/srv/data-{i}"), "1.00 KB".into(), "1.00 KB".into(), "OK".into()]);
        }

        let rendered = table.render().unwrap();
        let data_lines = rendered.lines().filter(|l| l.contains("/srv/data-")).count();

        assert_eq!(data_lines, 4);
    }

    #[test]
    fn test_rules_separate_title_header_and_rows() {
        let mut table = ResultTable::file_backup();
        table.add_row(["/a", "1.00 KB", "1.00 KB", "OK"]);
        table.add_row(["/b", "2.00 KB", "2.00 KB", "OK"]);

        let rendered = table.render().unwrap();
        let lines: Vec<&str> = rendered.lines().collect();
        let is_rule = |line: &str| line.starts_with('├') && line.ends_with('┤');

        let title = lines.iter().position(|l| l.contains("File Backup Status")).unwrap();
        let header = lines.iter().position(|l| l.contains("Source Size")).unwrap();
        let first_row = lines.iter().position(|l| l.contains("/a")).unwrap();

        assert!(is_rule(lines[title + 1]));
        assert_eq!(header, title + 2);
        assert!(is_rule(lines[header + 1]));
        assert_eq!(first_row, header + 2);
        assert!(!is_rule(lines[first_row + 1]));
        assert!(lines[0].starts_with('╭'));
        assert!(lines[lines.len() - 1].starts_with('╰'));
    }

    #[test]
    fn test_right_aligned_size_column() {
        let mut table = ResultTable::file_backup();
        table.add_row(["/a", "1.00 KB", "1.00 KB", "OK"]);
        table.add_row(["/b", "100.00 GB", "100.00 GB", "OK"]);

        let rendered = table.render().unwrap();
        let row = rendered.lines().find(|l| l.contains("/a")).unwrap();
        let cells: Vec<&str> = row.split('│').collect();

        // cells[0] is the left border, cells[2] is "Source Size"
        assert!(cells[2].starts_with("  "));
        assert!(cells[2].ends_with("1.00 KB "));
    }
}
