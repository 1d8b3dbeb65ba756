//! Configuration for a generation run.

use std::path::PathBuf;

use vnframes_engine::FrameFormat;
use vnframes_model::NounPhraseRule;

/// Default directory of VerbNet class files.
pub const DEFAULT_RESOURCE_DIR: &str = "./new_vn/";

/// Default output directory.
pub const DEFAULT_OUT_DIR: &str = "./parsed/";

/// Default location of the preposition class reference.
pub const DEFAULT_SELRESTR_REFERENCE: &str = "./parsed/prep_literals.json";

/// Configuration for a generation run.
///
/// Controls which formats are generated, where inputs are read from, and
/// which companion files are written.
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Formats to generate, in order. The last one feeds the member and
    /// cluster label files.
    pub formats: Vec<FrameFormat>,

    /// Directory of class files.
    pub resource_dir: PathBuf,

    /// Directory every output is written to.
    pub out_dir: PathBuf,

    /// Preposition class reference (JSON). `None` runs without one, which
    /// only works for formats that need no expansion.
    pub selrestr_reference: Option<PathBuf>,

    /// Key rows by bare verb instead of `verb#class-id`.
    pub verbs_only: bool,

    /// Also write shortened matrices and their label files.
    pub short: bool,

    /// Also write the `frames.csv` variant table.
    pub variants: bool,

    /// How noun phrase restrictions are checked while loading.
    pub noun_phrase_rule: NounPhraseRule,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            formats: Vec::new(),
            resource_dir: PathBuf::from(DEFAULT_RESOURCE_DIR),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            selrestr_reference: Some(PathBuf::from(DEFAULT_SELRESTR_REFERENCE)),
            verbs_only: false,
            short: true,
            variants: false,
            noun_phrase_rule: NounPhraseRule::Exclusive,
        }
    }
}

impl RunConfig {
    /// Creates a configuration that generates every format.
    #[must_use]
    pub fn all_formats() -> Self {
        Self {
            formats: FrameFormat::ALL.to_vec(),
            ..Self::default()
        }
    }

    /// Builder method to set the formats.
    #[must_use]
    pub fn with_formats<I: IntoIterator<Item = FrameFormat>>(mut self, formats: I) -> Self {
        self.formats = formats.into_iter().collect();
        self
    }

    /// Builder method to set the resource directory.
    #[must_use]
    pub fn with_resource_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.resource_dir = dir.into();
        self
    }

    /// Builder method to set the output directory.
    #[must_use]
    pub fn with_out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = dir.into();
        self
    }

    /// Builder method to set or clear the preposition class reference.
    #[must_use]
    pub fn with_selrestr_reference(mut self, path: Option<PathBuf>) -> Self {
        self.selrestr_reference = path;
        self
    }

    /// Builder method to enable/disable verbs-only rows.
    #[must_use]
    pub fn with_verbs_only(mut self, verbs_only: bool) -> Self {
        self.verbs_only = verbs_only;
        self
    }

    /// Builder method to enable/disable shortened output.
    #[must_use]
    pub fn with_short(mut self, short: bool) -> Self {
        self.short = short;
        self
    }

    /// Builder method to enable/disable the variant table.
    #[must_use]
    pub fn with_variants(mut self, variants: bool) -> Self {
        self.variants = variants;
        self
    }

    /// Builder method to set the noun phrase rule.
    #[must_use]
    pub fn with_noun_phrase_rule(mut self, rule: NounPhraseRule) -> Self {
        self.noun_phrase_rule = rule;
        self
    }
}
