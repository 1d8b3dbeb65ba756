//! vnframes CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use vnframes_corpus::OutputLayout;
use vnframes_engine::FrameFormat;
use vnframes_foundation::{Diagnostics, Result};
use vnframes_model::NounPhraseRule;
use vnframes_runtime::{
    DEFAULT_OUT_DIR, DEFAULT_RESOURCE_DIR, DEFAULT_SELRESTR_REFERENCE, RunConfig, build_reference,
    dot_qualifiers, run, save_reference,
};

/// Column list harvested when building a reference.
const HARVEST_FORMAT: FrameFormat = FrameFormat::ExNs;

#[derive(Parser)]
#[command(name = "vnframes")]
#[command(version)]
#[command(about = "Parse VerbNet class files and write member by frame matrices")]
struct Cli {
    /// Formats to generate (gt-ns, cx-st, ex-st, ...)
    #[arg(required_unless_present_any = ["all", "dot_qualifiers", "build_reference"])]
    formats: Vec<String>,

    /// Generate every format
    #[arg(short = 'A', long, conflicts_with = "formats")]
    all: bool,

    /// Key rows by bare verb instead of verb#class-id
    #[arg(long)]
    verbs_only: bool,

    /// Don't write shortened matrices and labels
    #[arg(long)]
    no_short: bool,

    /// JSON preposition class reference
    #[arg(short, long, default_value = DEFAULT_SELRESTR_REFERENCE)]
    selrestr_reference: PathBuf,

    /// Directory of VerbNet class files
    #[arg(short, long, default_value = DEFAULT_RESOURCE_DIR)]
    resources: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    out: PathBuf,

    /// Also write the frames.csv variant table
    #[arg(long)]
    variants: bool,

    /// Allow noun phrases with both selectional and syntactic restrictions
    #[arg(long)]
    permissive_np: bool,

    /// Print the PP qualifiers of the written gt-ns matrix and exit
    #[arg(short, long)]
    dot_qualifiers: bool,

    /// Build the preposition class reference and exit
    #[arg(long)]
    build_reference: bool,

    /// isa(literal,class) listing used by --build-reference
    #[arg(long, requires = "build_reference")]
    isa: Option<PathBuf>,
}

impl Cli {
    fn formats(&self) -> Result<Vec<FrameFormat>> {
        if self.all {
            return Ok(FrameFormat::ALL.to_vec());
        }
        self.formats.iter().map(|name| name.parse()).collect()
    }

    fn config(&self) -> Result<RunConfig> {
        let rule = if self.permissive_np {
            NounPhraseRule::Permissive
        } else {
            NounPhraseRule::Exclusive
        };
        Ok(RunConfig::default()
            .with_formats(self.formats()?)
            .with_resource_dir(&self.resources)
            .with_out_dir(&self.out)
            .with_selrestr_reference(Some(self.selrestr_reference.clone()))
            .with_verbs_only(self.verbs_only)
            .with_short(!self.no_short)
            .with_variants(self.variants)
            .with_noun_phrase_rule(rule))
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match execute(&Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: &Cli) -> Result<()> {
    if cli.build_reference {
        let columns = OutputLayout::new(&cli.out, cli.verbs_only).columns(HARVEST_FORMAT);
        let columns = columns.exists().then_some(columns);
        let hierarchy = build_reference(cli.isa.as_deref(), columns.as_deref())?;
        return save_reference(&hierarchy, &cli.selrestr_reference);
    }

    if cli.dot_qualifiers {
        let config = RunConfig::default()
            .with_out_dir(&cli.out)
            .with_verbs_only(cli.verbs_only);
        for qualifier in dot_qualifiers(&config)? {
            println!("{qualifier}");
        }
        return Ok(());
    }

    let config = cli.config()?;
    let mut diagnostics = Diagnostics::new();
    let report = run(&config, &mut diagnostics)?;

    for (path, e) in &report.failures {
        warn!(file = %path.display(), error = %e, "class file not loaded");
    }
    if !report.failures.is_empty() {
        warn!(
            failed = report.failures.len(),
            loaded = report.files_loaded,
            "some class files were not loaded"
        );
    }
    let rejected = report.noun_phrase_rejections();
    if rejected > 0 && config.noun_phrase_rule == NounPhraseRule::Exclusive {
        warn!(
            files = rejected,
            "noun phrase tokens rejected; --permissive-np accepts noun phrases with both restriction kinds"
        );
    }
    for (kind, count) in diagnostics.summary() {
        warn!(kind = %kind, count, "data-quality warnings");
    }
    info!(
        files = report.written.len(),
        out = %config.out_dir.display(),
        "done"
    );
    Ok(())
}
