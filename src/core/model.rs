//! Format-neutral table model
//!
//! Both conversion directions meet here: parsers build a [`Table`], normalize
//! it, and hand it to exactly one generator.
//!
//! After [`Table::normalize`]:
//! - every row has exactly [`Table::column_count`] cells
//! - `alignments.len()` equals the column count
//! - merged cells no longer exist (parsers expand spans before normalizing)

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Column alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Parse a CSS / HTML alignment keyword (`left`, `center`, `right`, ...)
    ///
    /// Unknown keywords fall back to `Left`.
    pub fn from_keyword(keyword: &str) -> Self {
        let keyword = keyword.trim().to_ascii_lowercase();
        ALIGN_KEYWORDS
            .get(keyword.as_str())
            .copied()
            .unwrap_or_default()
    }

    /// CSS `text-align` value
    pub fn as_css(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

static ALIGN_KEYWORDS: phf::Map<&'static str, Alignment> = phf::phf_map! {
    "left" => Alignment::Left,
    "start" => Alignment::Left,
    "justify" => Alignment::Left,
    "center" => Alignment::Center,
    "middle" => Alignment::Center,
    "-webkit-center" => Alignment::Center,
    "right" => Alignment::Right,
    "end" => Alignment::Right,
};

/// A single table cell
///
/// Spans are only meaningful while a parser is expanding merged source cells;
/// the normalized model always carries `colspan == rowspan == 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    /// Plain text content, never containing a newline
    pub content: String,
    pub colspan: usize,
    pub rowspan: usize,
}

impl Cell {
    pub fn new(content: impl Into<String>) -> Self {
        Self::with_span(content, 1, 1)
    }

    /// Spans below 1 are clamped to 1.
    pub fn with_span(content: impl Into<String>, colspan: usize, rowspan: usize) -> Self {
        Cell {
            content: content.into(),
            colspan: colspan.max(1),
            rowspan: rowspan.max(1),
        }
    }

    /// Create an empty filler cell
    pub fn empty() -> Self {
        Cell::new(String::new())
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::empty()
    }
}

/// A table row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Row {
    pub is_header: bool,
    pub cells: Vec<Cell>,
}

impl Row {
    /// Create a data row
    pub fn new(cells: Vec<Cell>) -> Self {
        Row {
            is_header: false,
            cells,
        }
    }

    /// Create a header row
    pub fn header(cells: Vec<Cell>) -> Self {
        Row {
            is_header: true,
            cells,
        }
    }

    pub fn push(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// Number of grid columns this row occupies (sum of colspans)
    pub fn width(&self) -> usize {
        self.cells.iter().map(|c| c.colspan).sum()
    }
}

/// Complete table structure
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Table {
    /// Per-column alignment, indexed by column position
    pub alignments: Vec<Alignment>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(rows: Vec<Row>) -> Self {
        Self::with_alignments(rows, Vec::new())
    }

    pub fn with_alignments(rows: Vec<Row>, alignments: Vec<Alignment>) -> Self {
        Table { alignments, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Maximum over all rows of the sum of colspans; 0 for an empty table
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Row::width).max().unwrap_or(0)
    }

    /// Alignment of column `col`, `Left` when unset
    pub fn alignment(&self, col: usize) -> Alignment {
        self.alignments.get(col).copied().unwrap_or_default()
    }

    /// Number of leading rows flagged as header
    pub fn header_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_header).count()
    }

    /// Pad short rows with empty cells and fit `alignments` to the column count.
    ///
    /// Idempotent.
    pub fn normalize(&mut self) -> &mut Self {
        let columns = self.column_count();

        for row in &mut self.rows {
            let missing = columns - row.width();
            row.cells.extend(std::iter::repeat_with(Cell::empty).take(missing));
        }

        self.alignments.resize(columns, Alignment::Left);
        self
    }
}

/// Column count of `table` (see [`Table::column_count`])
pub fn get_column_count(table: &Table) -> usize {
    table.column_count()
}

/// Normalize `table` in place and return it (see [`Table::normalize`])
pub fn normalize_table(table: &mut Table) -> &mut Table {
    table.normalize()
}
