//! The generation pipeline: load, derive, write.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;
use vnframes_corpus::{
    ClusterLabels, Corpus, DEFAULT_EXCLUDED_ROLE, FrameMatrix, FrameVariantTable, OutputLayout,
    ShortClusterLabels, save_json, save_list,
};
use vnframes_engine::{FormatEngine, FrameFormat};
use vnframes_foundation::{Diagnostics, Error, ErrorKind, PosKind, PrepositionClassHierarchy, Result};
use vnframes_parser::{ClassHierarchyLoader, LoadReport};

use crate::config::RunConfig;

/// Size of one generated matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatrixSummary {
    /// The format.
    pub format: FrameFormat,
    /// Number of member rows.
    pub members: usize,
    /// Number of frame columns.
    pub columns: usize,
}

/// What a run produced.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Class files that loaded.
    pub files_loaded: usize,
    /// Class files that failed, with the reason.
    pub failures: Vec<(PathBuf, Error)>,
    /// Member entries in the corpus.
    pub verbs: usize,
    /// One entry per generated format.
    pub matrices: Vec<MatrixSummary>,
    /// Every file written, in order.
    pub written: Vec<PathBuf>,
}

impl RunReport {
    fn wrote(&mut self, path: PathBuf) {
        self.written.push(path);
    }

    /// Counts class files rejected over an invalid noun phrase token.
    ///
    /// Under [`NounPhraseRule::Exclusive`](vnframes_model::NounPhraseRule::Exclusive)
    /// these include every file with a noun phrase carrying both kinds of
    /// restriction.
    #[must_use]
    pub fn noun_phrase_rejections(&self) -> usize {
        self.failures
            .iter()
            .filter(|(_, e)| {
                matches!(
                    e.kind,
                    ErrorKind::InvalidToken {
                        pos: PosKind::NounPhrase,
                        ..
                    }
                )
            })
            .count()
    }
}

/// Loads the preposition class reference, if one is configured.
///
/// # Errors
///
/// Returns an error if the reference cannot be read or parsed.
pub fn load_reference(path: Option<&Path>) -> Result<Option<PrepositionClassHierarchy>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let hierarchy = PrepositionClassHierarchy::from_json_file(path)?;
    info!(path = %path.display(), classes = hierarchy.len(), "loaded preposition classes");
    Ok(Some(hierarchy))
}

/// Runs a full generation.
///
/// Every configured format gets a matrix, a column list, and (if enabled) a
/// shortened matrix. The member, WordNet and cluster label files are written
/// once, from the last format's matrix.
///
/// # Errors
///
/// Returns the first fatal error: an unreadable reference or resource
/// directory, a format derivation error, or a failed write. Class files that
/// fail to parse are reported, not fatal.
pub fn run(config: &RunConfig, diagnostics: &mut Diagnostics) -> Result<RunReport> {
    let hierarchy = load_reference(config.selrestr_reference.as_deref())?;
    let engine = hierarchy
        .as_ref()
        .map_or_else(FormatEngine::new, FormatEngine::with_hierarchy);

    let loader = ClassHierarchyLoader::new().with_noun_phrase_rule(config.noun_phrase_rule);
    let LoadReport {
        classes,
        failures,
        files_loaded,
    } = loader.load_dir(&config.resource_dir, diagnostics)?;
    let corpus = Corpus::from_classes(classes);

    let mut report = RunReport {
        files_loaded,
        failures,
        verbs: corpus.len(),
        ..RunReport::default()
    };

    fs::create_dir_all(&config.out_dir)
        .map_err(|e| Error::io(config.out_dir.display().to_string(), e))?;
    let layout = OutputLayout::new(&config.out_dir, config.verbs_only);

    let mut last = None;
    for &format in &config.formats {
        let matrix = corpus.to_matrix(&engine, format, config.verbs_only, diagnostics)?;
        report.matrices.push(MatrixSummary {
            format,
            members: matrix.len(),
            columns: matrix.columns().len(),
        });

        let path = layout.matrix(format);
        matrix.save_csv(&path)?;
        report.wrote(path);

        let short = if config.short {
            let short = matrix.shorten();
            let path = layout.short_matrix(format);
            short.save_csv(&path)?;
            report.wrote(path);
            Some(short)
        } else {
            None
        };

        let path = layout.columns(format);
        save_list(&path, matrix.columns())?;
        report.wrote(path);

        last = Some((matrix, short));
    }

    let Some((matrix, short)) = last else {
        info!("no formats generated; skipping member and label files");
        return Ok(report);
    };

    let path = layout.nontopics();
    save_list(&path, corpus.verbs_lacking_role(DEFAULT_EXCLUDED_ROLE))?;
    report.wrote(path);

    let members = matrix.members();
    let path = layout.members();
    save_list(&path, &members)?;
    report.wrote(path);

    let path = layout.wordnet_map();
    save_json(&path, &corpus.wordnet_map())?;
    report.wrote(path);

    let short_members = short.as_ref().map(FrameMatrix::members);
    if let Some(short_members) = &short_members {
        let path = layout.short_members();
        save_list(&path, short_members)?;
        report.wrote(path);
    }

    if config.verbs_only {
        info!("verbs-only rows carry no class ids; skipping cluster labels");
    } else {
        write_labels(&layout, &members, short_members.as_deref(), &mut report)?;
    }

    if config.variants {
        let table = FrameVariantTable::from_corpus(&corpus, &engine, diagnostics)?;
        let path = layout.variants();
        table.save_csv(&path)?;
        report.wrote(path);
    }

    info!(
        formats = report.matrices.len(),
        files = report.written.len(),
        warnings = diagnostics.len(),
        "generation complete"
    );
    Ok(report)
}

fn write_labels(
    layout: &OutputLayout,
    members: &[&str],
    short_members: Option<&[&str]>,
    report: &mut RunReport,
) -> Result<()> {
    let labels = ClusterLabels::from_members(members)?;
    for (path, list) in [
        (layout.toplevel_labels(), &labels.toplevel),
        (layout.subclass_labels(), &labels.subclass),
        (layout.integer_labels(), &labels.integer),
    ] {
        save_list(&path, list.iter().map(ToString::to_string))?;
        report.wrote(path);
    }

    if let Some(short_members) = short_members {
        let labels = ShortClusterLabels::from_classes(short_members)?;
        for (path, list) in [
            (layout.short_toplevel_labels(), &labels.toplevel),
            (layout.short_integer_labels(), &labels.integer),
        ] {
            save_list(&path, list.iter().map(ToString::to_string))?;
            report.wrote(path);
        }
    }
    Ok(())
}

/// Reads every distinct `PP.`-qualified token from a previously written
/// `gt-ns` matrix.
///
/// # Errors
///
/// Returns an error if the matrix cannot be read.
pub fn dot_qualifiers(config: &RunConfig) -> Result<Vec<String>> {
    let layout = OutputLayout::new(&config.out_dir, config.verbs_only);
    let matrix = FrameMatrix::load_csv(layout.matrix(FrameFormat::GtNs))?;
    Ok(matrix.dot_qualifiers())
}
