//! Finest-grained frame strings mapped to their coarser variants.

use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::Path;

use tracing::info;
use vnframes_engine::annotate::frame_warning;
use vnframes_engine::{FormatEngine, FrameFormat};
use vnframes_foundation::{Diagnostics, Error, Result, WarningKind};
use vnframes_model::Frame;

use crate::corpus::Corpus;

/// The format every row is keyed by.
pub const FINEST_FORMAT: FrameFormat = FrameFormat::ExSt;

/// The coarser formats, in column order.
pub const VARIANT_FORMATS: [FrameFormat; 8] = [
    FrameFormat::GtNs,
    FrameFormat::CxNs,
    FrameFormat::ExCx,
    FrameFormat::CxTr,
    FrameFormat::EtCx,
    FrameFormat::CxSs,
    FrameFormat::ExSs,
    FrameFormat::CxSt,
];

/// Rows of `ex-st` strings with one variant per coarser format.
#[derive(Clone, Debug, Default)]
pub struct FrameVariantTable {
    rows: Vec<(String, Vec<String>)>,
    index: HashMap<String, usize>,
}

impl FrameVariantTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the table over every distinct frame of a corpus.
    ///
    /// # Errors
    ///
    /// Returns the first format derivation error.
    pub fn from_corpus(
        corpus: &Corpus,
        engine: &FormatEngine<'_>,
        diagnostics: &mut Diagnostics,
    ) -> Result<Self> {
        let mut table = Self::new();
        for frame in corpus.unique_frames() {
            table.add_frame(frame, engine, diagnostics)?;
        }
        info!(rows = table.len(), "built frame variant table");
        Ok(table)
    }

    /// Adds the rows of one frame.
    ///
    /// Multi-valued variants are paired by position with the sorted `ex-st`
    /// strings. If their counts differ the frame is skipped with a warning.
    /// A string already in the table keeps its row unless the new row's
    /// first variant is shorter.
    ///
    /// # Errors
    ///
    /// Returns the first format derivation error.
    pub fn add_frame(
        &mut self,
        frame: &Frame,
        engine: &FormatEngine<'_>,
        diagnostics: &mut Diagnostics,
    ) -> Result<()> {
        let mut finest = engine.format(frame, FINEST_FORMAT, diagnostics)?;
        finest.sort();

        let mut variants = Vec::with_capacity(VARIANT_FORMATS.len());
        for format in VARIANT_FORMATS {
            let mut rendered = engine.format(frame, format, diagnostics)?;
            rendered.sort();
            if rendered.len() > 1 && rendered.len() != finest.len() {
                diagnostics.push(frame_warning(
                    frame,
                    WarningKind::VariantMismatch,
                    format!(
                        "{format} has {} strings for {} {FINEST_FORMAT} strings",
                        rendered.len(),
                        finest.len()
                    ),
                ));
                return Ok(());
            }
            variants.push(rendered);
        }

        for (i, key) in finest.into_iter().enumerate() {
            let row: Vec<String> = variants
                .iter()
                .map(|rendered| {
                    if rendered.len() > 1 {
                        rendered[i].clone()
                    } else {
                        rendered.first().cloned().unwrap_or_default()
                    }
                })
                .collect();
            self.insert(key, row);
        }
        Ok(())
    }

    fn insert(&mut self, key: String, row: Vec<String>) {
        match self.index.get(&key) {
            Some(&at) => {
                let existing = &mut self.rows[at].1;
                if *existing != row && first_len(&row) < first_len(existing) {
                    *existing = row;
                }
            }
            None => {
                self.index.insert(key.clone(), self.rows.len());
                self.rows.push((key, row));
            }
        }
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

    /// Returns the variants of an `ex-st` string.
    #[must_use]
    pub fn get(&self, finest: &str) -> Option<&[String]> {
        self.index.get(finest).map(|&at| self.rows[at].1.as_slice())
    }

    /// Returns the rows in first-seen order.
    #[must_use]
    pub fn rows(&self) -> &[(String, Vec<String>)] {
        &self.rows
    }

    /// Writes the table as CSV, one `ex-st` string per row.
    ///
    /// # Errors
    ///
    /// Returns a CSV error if writing fails.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<()> {
        let mut writer = csv::Writer::from_writer(writer);
        writer
            .write_record(
                std::iter::once(FINEST_FORMAT)
                    .chain(VARIANT_FORMATS)
                    .map(FrameFormat::name),
            )
            .map_err(Error::csv)?;
        for (key, row) in &self.rows {
            writer
                .write_record(std::iter::once(key).chain(row))
                .map_err(Error::csv)?;
        }
        writer.flush().map_err(Error::csv)?;
        Ok(())
    }

    /// Writes the table to a CSV file.
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
}

fn first_len(row: &[String]) -> usize {
    row.first().map_or(0, String::len)
}
