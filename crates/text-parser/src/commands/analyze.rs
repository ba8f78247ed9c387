//! Analyze command: language, entities, sentiment and lemma alternatives.

use std::fmt;
use std::io::{self, Write};

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::{OwoColorize, Stream};
use tracing::{debug, instrument};

use text_parser_core::config::Config;
use text_parser_core::{AnalysisReport, BuiltinBackend, pipeline};

/// Input and backend options for analysis.
#[derive(Args, Debug, Default)]
pub struct AnalyzeArgs {
    /// Text to analyze; multiple words are joined with spaces.
    #[arg(value_name = "TEXT", conflicts_with = "file")]
    pub text: Vec<String>,

    /// Read the text from FILE (`-` for stdin).
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<Utf8PathBuf>,

    /// Word-embedding table (word2vec/GloVe text format).
    #[arg(long, value_name = "FILE")]
    pub embeddings: Option<Utf8PathBuf>,

    /// Number of embedding neighbors listed per lemma.
    #[arg(long, value_name = "N")]
    pub neighbors: Option<usize>,

    /// Classify each capitalized word on its own instead of joining names.
    #[arg(long)]
    pub no_join_names: bool,
}

impl AnalyzeArgs {
    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply_to(&self, config: &Config) -> Config {
        let mut config = config.clone();
        if let Some(ref path) = self.embeddings {
            config.embeddings_path = Some(path.clone());
        }
        if let Some(count) = self.neighbors {
            config.neighbor_count = count;
        }
        if self.no_join_names {
            config.join_names = false;
        }
        config
    }

    /// The text to analyze, read from `--file` or joined from the arguments.
    pub fn input(&self, max_bytes: Option<usize>) -> anyhow::Result<String> {
        match self.file.as_deref() {
            Some(path) if path.as_str() == "-" => super::read_stdin(max_bytes),
            Some(path) => super::read_input_file(path, max_bytes),
            None => Ok(self.text.join(" ")),
        }
    }
}

/// Analyze the input and print the report.
#[instrument(name = "cmd_analyze", skip_all, fields(file = ?args.file))]
pub fn cmd_analyze(args: AnalyzeArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let config = args.apply_to(config);
    let text = args.input(config.input_limit())?;
    debug!(
        text_len = text.len(),
        embeddings = ?config.embeddings_path,
        neighbor_count = config.neighbor_count,
        join_names = config.join_names,
        "executing analyze command"
    );

    let backend = BuiltinBackend::from_config(&config);
    let report = pipeline::analyze(&backend, &text);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if global_json {
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        render_report(&report, &mut out, true)?;
    }
    out.flush()?;
    Ok(())
}

/// Write the plain-text report.
///
/// With `styled`, headings are bold when stdout supports color.
pub fn render_report(report: &AnalysisReport, out: &mut impl Write, styled: bool) -> io::Result<()> {
    let heading = |text| Heading { text, styled };

    writeln!(out)?;
    writeln!(out, "{} {}", heading("Detected language:"), report.language)?;
    writeln!(out)?;

    if !report.entities.is_empty() {
        writeln!(out, "{}", heading("Found the following entities:"))?;
        for entity in &report.entities {
            writeln!(out, "\t{entity}")?;
        }
        writeln!(out)?;
    }

    writeln!(out, "{} {:?}", heading("Sentiment analysis:"), report.sentiment)?;
    writeln!(out)?;

    writeln!(out, "{}", heading("Found the following alternatives:"))?;
    for alternative in &report.alternatives {
        let descriptions: Vec<String> =
            alternative.neighbors.iter().map(ToString::to_string).collect();
        writeln!(out, "\t{}:  {}", alternative.lemma, format_and_list(&descriptions))?;
    }
    Ok(())
}

struct Heading<'a> {
    text: &'a str,
    styled: bool,
}

impl fmt::Display for Heading<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.styled {
            write!(f, "{}", self.text.if_supports_color(Stream::Stdout, |t| t.bold()))
        } else {
            f.write_str(self.text)
        }
    }
}

/// Join items English-style: `a`, `a and b`, `a, b, and c`.
pub fn format_and_list(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [one] => one.clone(),
        [first, second] => format!("{first} and {second}"),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    }
}
