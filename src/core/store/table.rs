use serde::{Deserialize, Serialize};

use crate::core::store::model::CellValue;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableColumn {
    pub id: String,
    pub header: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableCell {
    pub id: String,
    pub value: CellValue,
    pub editable: bool,
    #[serde(skip)]
    pub(super) _guard: (),
}

/// Row striping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowColor {
    White,
    Slate,
}

impl RowColor {
    /// Even rows are white, odd rows slate.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            RowColor::White
        } else {
            RowColor::Slate
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    pub id: String,
    pub cells: Vec<TableCell>,
    pub bg_color: RowColor,
    #[serde(skip)]
    pub(super) _guard: (),
}

impl TableRow {
    pub fn cell(&self, cell_id: &str) -> Option<&TableCell> {
        self.cells.iter().find(|c| c.id == cell_id)
    }
}

/// The grid. Every row has exactly one cell per column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableViewData {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<TableRow>,
}

impl TableViewData {
    pub fn row(&self, row_id: &str) -> Option<&TableRow> {
        self.rows.iter().find(|r| r.id == row_id)
    }

    pub fn stats(&self) -> TableStats {
        let total_rows = self.rows.len();
        let total_columns = self.columns.len();
        TableStats {
            total_rows,
            total_columns,
            total_cells: total_rows * total_columns,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableStats {
    pub total_rows: usize,
    pub total_columns: usize,
    pub total_cells: usize,
}

/// Build the row at `row_index` with cells numbered row-major from 1.
pub(super) fn numbered_row(
    row_id: String,
    row_index: usize,
    column_count: usize,
    cell_id: impl Fn(usize) -> String,
) -> TableRow {
    let cells = (0..column_count)
        .map(|col| TableCell {
            id: cell_id(col),
            value: CellValue::from(row_index * column_count + col + 1),
            editable: true,
            _guard: (),
        })
        .collect();
    TableRow {
        id: row_id,
        cells,
        bg_color: RowColor::for_index(row_index),
        _guard: (),
    }
}

pub trait TableRepository {
    fn table(&self) -> &TableViewData;
    /// Row, column and cell counts of the grid as it is right now.
    fn table_stats(&self) -> TableStats;
    /// Append a row continuing the numbering, returning its id.
    fn add_table_row(&mut self) -> String;
    /// Returns false, and changes nothing, when either id is unknown.
    fn update_table_cell(&mut self, row_id: &str, cell_id: &str, value: CellValue) -> bool;
}
