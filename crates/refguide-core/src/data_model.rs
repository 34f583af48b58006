//! Data Model: Section, Table, Row, Lines, SectionProof
use serde::{Deserialize, Serialize};

/// One printed section: a heading followed by tables and line groups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Topic id that produced this section
    pub id: String,
    pub title: String,
    /// Parenthesised remark printed after the title
    pub note: Option<String>,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Table(Table),
    Lines(Lines),
}

/// Fixed-width table; `widths[i]` is the minimum width of column `i`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub widths: Vec<usize>,
    pub rows: Vec<Row>,
}

/// A label cell followed by value cells, already formatted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub cells: Vec<String>,
}

/// Free-form lines under an optional heading
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lines {
    pub heading: Option<String>,
    pub lines: Vec<String>,
}

/// Runner record for a written section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionProof {
    pub id: String,
    /// BLAKE3 of the rendered text ("blake3:<hex>")
    pub digest: String,
    pub deterministic: bool,
    pub rows: usize,
    pub latency_us: u64,
}

impl Section {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            note: None,
            blocks: Vec::new(),
        }
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn table(mut self, table: Table) -> Self {
        self.blocks.push(Block::Table(table));
        self
    }

    pub fn lines(mut self, lines: Lines) -> Self {
        self.blocks.push(Block::Lines(lines));
        self
    }

    /// Table rows plus free-form lines
    pub fn row_count(&self) -> usize {
        self.blocks
            .iter()
            .map(|b| match b {
                Block::Table(t) => t.rows.len(),
                Block::Lines(l) => l.lines.len(),
            })
            .sum()
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Table(t) => Some(t),
            Block::Lines(_) => None,
        })
    }

    /// First table row whose label cell equals `label`
    pub fn find_row(&self, label: &str) -> Option<&Row> {
        self.tables()
            .flat_map(|t| t.rows.iter())
            .find(|r| r.label() == label)
    }

    /// First free-form line containing `needle`
    pub fn find_line(&self, needle: &str) -> Option<&str> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Lines(l) => Some(l),
                Block::Table(_) => None,
            })
            .flat_map(|l| l.lines.iter())
            .map(|s| s.as_str())
            .find(|s| s.contains(needle))
    }
}

impl Table {
    /// Columns as `(header, width)` pairs
    pub fn new(columns: &[(&str, usize)]) -> Self {
        Self {
            headers: columns.iter().map(|(h, _)| h.to_string()).collect(),
            widths: columns.iter().map(|(_, w)| *w).collect(),
            rows: Vec::new(),
        }
    }

    pub fn row(mut self, cells: Vec<String>) -> Self {
        self.push_row(cells);
        self
    }

    pub fn push_row(&mut self, cells: Vec<String>) {
        self.rows.push(Row { cells });
    }

    /// Declared widths, each grown to its widest header or cell (in chars)
    pub fn fitted_widths(&self) -> Vec<usize> {
        let mut widths = self.widths.clone();
        let all_cells = std::iter::once(&self.headers).chain(self.rows.iter().map(|r| &r.cells));
        for cells in all_cells {
            for (i, cell) in cells.iter().enumerate() {
                let len = cell.chars().count();
                match widths.get_mut(i) {
                    Some(w) => *w = (*w).max(len),
                    None => widths.push(len),
                }
            }
        }
        widths
    }
}

impl Row {
    pub fn label(&self) -> &str {
        self.cells.first().map(|s| s.as_str()).unwrap_or("")
    }

    pub fn cell(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(|s| s.as_str())
    }
}

impl Lines {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn titled(heading: impl Into<String>) -> Self {
        Self {
            heading: Some(heading.into()),
            lines: Vec::new(),
        }
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }
}
