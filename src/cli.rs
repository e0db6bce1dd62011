//! Command-line interface wiring for summarist.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{debug, info, instrument};

use crate::backends::{self, GenerationParams, Request};
use crate::config::Settings;
use crate::dispatch;

/// Model attempted when none is given on the command line.
pub const DEFAULT_MODEL: &str = "mlx-community/gemma-3-1b-it-8bit";

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Summarize a text file with local LLM backends",
    long_about = None
)]
pub struct Cli {
    /// Path to a UTF-8 text file to summarize.
    #[arg(required_unless_present = "text")]
    pub file: Option<PathBuf>,
    /// Model identifier (Hugging Face repository id).
    #[arg(default_value = DEFAULT_MODEL)]
    pub model: String,
    /// Maximum number of tokens to generate.
    #[arg(default_value_t = 256, value_parser = parse_positive)]
    pub max_tokens: usize,
    /// Sampling temperature in [0, 1]; 0 selects greedy decoding.
    #[arg(default_value_t = 0.3, value_parser = parse_unit_interval)]
    pub temperature: f64,
    /// Nucleus sampling mass in [0, 1].
    #[arg(default_value_t = 0.8, value_parser = parse_unit_interval)]
    pub top_p: f64,
    /// Summarize this string instead of reading a file.
    #[arg(long, conflicts_with = "file")]
    pub text: Option<String>,
    /// Route accelerated-namespace models through the Metal backend.
    #[arg(long)]
    pub use_mlx: bool,
    /// Enable debug-level diagnostics on the error stream.
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Read the input, probe backends, and run the dispatcher.
    #[instrument(skip(self, settings), fields(model = %self.model))]
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        let text = self.input_text()?;
        if text.trim().is_empty() {
            bail!("Input text is empty. Nothing to summarize.");
        }

        let deps = backends::probe();
        debug!(?deps, "probed backend availability");

        let request = Request {
            text,
            model: self.model.clone(),
            use_mlx: self.use_mlx,
            params: GenerationParams {
                max_tokens: self.max_tokens,
                temperature: self.temperature,
                top_p: self.top_p,
            },
        };

        let summary = dispatch::summarize(&settings, &request, deps).await?;
        info!(chars = summary.len(), "summary produced");
        println!("{summary}");
        Ok(())
    }

    fn input_text(&self) -> Result<String> {
        match (&self.text, &self.file) {
            (Some(text), _) => Ok(text.clone()),
            (None, Some(path)) => std::fs::read_to_string(path)
                .with_context(|| format!("reading input file {}", path.display())),
            (None, None) => bail!("either FILE or --text is required"),
        }
    }
}

fn parse_positive(raw: &str) -> Result<usize, String> {
    let value: usize = raw
        .parse()
        .map_err(|_| format!("`{raw}` is not an integer"))?;
    if value == 0 {
        return Err("must be at least 1".into());
    }
    Ok(value)
}

fn parse_unit_interval(raw: &str) -> Result<f64, String> {
    let value: f64 = raw.parse().map_err(|_| format!("`{raw}` is not a number"))?;
    if !(0.0..=1.0).contains(&value) {
        return Err("must be within [0, 1]".into());
    }
    Ok(value)
}
