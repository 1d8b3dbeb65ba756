//! Binary member by frame matrices.

use std::collections::{BTreeSet, HashSet};
use std::fs::File;
use std::io;
use std::path::Path;

use vnframes_foundation::{Error, Result};
use vnframes_model::class_of_member;

use crate::corpus::FrameStrings;

/// Header of the member column.
pub const MEMBER_HEADER: &str = "member";

/// One member row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatrixRow {
    /// Row key, `verb#class-id`, a bare verb, or a class id.
    pub member: String,
    /// One cell per column.
    pub cells: Vec<bool>,
}

/// A binary matrix of members against frame strings.
///
/// Columns are sorted; rows keep the order they were built in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameMatrix {
    columns: Vec<String>,
    rows: Vec<MatrixRow>,
}

impl FrameMatrix {
    /// Creates a matrix from columns and rows.
    ///
    /// # Errors
    ///
    /// Returns an internal error if a row's width does not match the columns.
    pub fn new(columns: Vec<String>, rows: Vec<MatrixRow>) -> Result<Self> {
        if let Some(row) = rows.iter().find(|row| row.cells.len() != columns.len()) {
            return Err(Error::internal(format!(
                "row '{}' has {} cells for {} columns",
                row.member,
                row.cells.len(),
                columns.len()
            )));
        }
        Ok(Self { columns, rows })
    }

    /// Builds a matrix whose columns are every frame string, sorted.
    #[must_use]
    pub fn from_frame_strings(frame_strings: FrameStrings) -> Self {
        let columns: Vec<String> = frame_strings
            .iter()
            .flat_map(|(_, frames)| frames.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let rows = frame_strings
            .into_iter()
            .map(|(member, frames)| MatrixRow {
                cells: columns.iter().map(|column| frames.contains(column)).collect(),
                member,
            })
            .collect();
        Self { columns, rows }
    }

    /// Returns the frame columns.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the rows.
    #[must_use]
    pub fn rows(&self) -> &[MatrixRow] {
        &self.rows
    }

    /// Returns the row keys in order.
    #[must_use]
    pub fn members(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.member.as_str()).collect()
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the cell for a member and column, if both exist.
    #[must_use]
    pub fn get(&self, member: &str, column: &str) -> Option<bool> {
        let at = self.columns.binary_search_by(|c| c.as_str().cmp(column)).ok()?;
        let row = self.rows.iter().find(|row| row.member == member)?;
        Some(row.cells[at])
    }

    /// Collapses members to classes, keeping the first row of each class.
    ///
    /// Rows are re-keyed by class id. A row whose key names no class is
    /// treated as its own class.
    #[must_use]
    pub fn shorten(&self) -> Self {
        let mut seen = HashSet::new();
        let rows = self
            .rows
            .iter()
            .filter_map(|row| {
                let class = class_of_member(&row.member).unwrap_or(&row.member);
                seen.insert(class.to_string()).then(|| MatrixRow {
                    member: class.to_string(),
                    cells: row.cells.clone(),
                })
            })
            .collect();
        Self {
            columns: self.columns.clone(),
            rows,
        }
    }

    /// Returns every distinct `PP.`-qualified token of the columns, sorted.
    #[must_use]
    pub fn dot_qualifiers(&self) -> Vec<String> {
        self.columns
            .iter()
            .flat_map(|column| column.split_whitespace())
            .filter(|token| token.contains("PP."))
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Writes the matrix as CSV with a `member` header and 0/1 cells.
    ///
    /// # Errors
    ///
    /// Returns a CSV error if writing fails.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<()> {
        let mut writer = csv::Writer::from_writer(writer);
        writer
            .write_record(std::iter::once(MEMBER_HEADER).chain(self.columns.iter().map(String::as_str)))
            .map_err(Error::csv)?;
        for row in &self.rows {
            let cells = row.cells.iter().map(|&cell| if cell { "1" } else { "0" });
            writer
                .write_record(std::iter::once(row.member.as_str()).chain(cells))
                .map_err(Error::csv)?;
        }
        writer.flush().map_err(Error::csv)?;
        Ok(())
    }

    /// Writes the matrix to a CSV file.
    ///
    /// # Errors
    ///
    /// Returns an I/O or CSV error.
    pub fn save_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| Error::io(path.display().to_string(), e))?;
        self.write_csv(file)
            .map_err(|e| e.in_source(path.display().to_string()))
    }

    /// Reads a matrix written by [`FrameMatrix::write_csv`].
    ///
    /// # Errors
    ///
    /// Returns a CSV error if the data is malformed or a cell is not 0/1.
    pub fn read_csv<R: io::Read>(reader: R) -> Result<Self> {
        let mut reader = csv::Reader::from_reader(reader);
        let headers = reader.headers().map_err(Error::csv)?.clone();
        let columns: Vec<String> = headers.iter().skip(1).map(str::to_string).collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(Error::csv)?;
            let member = record.get(0).unwrap_or_default().to_string();
            let cells = record
                .iter()
                .skip(1)
                .map(|cell| match cell {
                    "1" => Ok(true),
                    "0" => Ok(false),
                    other => Err(Error::csv(format!("cell '{other}' of '{member}' is not 0 or 1"))),
                })
                .collect::<Result<Vec<_>>>()?;
            rows.push(MatrixRow { member, cells });
        }
        Self::new(columns, rows)
    }

    /// Reads a matrix from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns an I/O or CSV error.
    pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io(path.display().to_string(), e))?;
        Self::read_csv(file).map_err(|e| e.in_source(path.display().to_string()))
    }
}
