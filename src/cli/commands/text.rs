//! Text commands: analyze, rephrase, grammar, summarize and transform.
//!
//! These run the engine locally and never touch the essay archive.

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{
    AnalysisReport, Config, EssayInput, GrammarCorrection, RephraseStyles, Summary, ToneTarget,
    ToneTransform,
};
use crate::services::rewrite;
use crate::services::ScoringEngine;

#[derive(Args, Debug, Default)]
pub struct TextArgs {
    /// Essay text; read from --file or stdin when omitted
    #[arg(conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the essay from a file
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

impl TextArgs {
    /// Resolve the essay from the argument, the file or stdin, in that order.
    pub fn read(&self) -> Result<EssayInput> {
        if let Some(text) = &self.text {
            return Ok(EssayInput::new(text.as_str()));
        }

        if let Some(path) = &self.file {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read essay from {}", path.display()))?;
            return Ok(EssayInput::new(text));
        }

        let mut stdin = io::stdin();
        if stdin.is_terminal() {
            anyhow::bail!("No essay given: pass text, --file, or pipe it on stdin");
        }
        let mut text = String::new();
        stdin
            .read_to_string(&mut text)
            .context("Failed to read essay from stdin")?;
        Ok(EssayInput::new(text))
    }
}

#[derive(Args, Debug, Default)]
pub struct TransformArgs {
    #[command(flatten)]
    pub input: TextArgs,

    /// Target tone (formal, casual, concise); defaults to formal
    #[arg(short, long)]
    pub tone: Option<String>,
}

impl CommandOutput for AnalysisReport {
    fn to_human(&self) -> String {
        let mut lines = vec![
            format!("{}", style("Essay analysis").bold()),
            format!("  Clarity:     {:>3}/100", self.clarity),
            format!("  Impact:      {:>3}/100", self.impact),
            format!("  Readability: {:>3}/100", self.readability),
            format!("  Tone:        {}", self.tone),
            format!(
                "  Words: {}  Sentences: {}  Avg words/sentence: {}",
                self.metrics.word_count,
                self.metrics.sentence_count,
                self.metrics.avg_words_per_sentence
            ),
            String::new(),
            format!("{}", style("Suggestions").bold()),
        ];
        lines.extend(self.suggestions.iter().map(|s| format!("  - {s}")));
        lines.join("\n")
    }
}

impl CommandOutput for RephraseStyles {
    fn to_human(&self) -> String {
        [
            ("Formal", &self.formal),
            ("Creative", &self.creative),
            ("Concise", &self.concise),
        ]
        .iter()
        .map(|(name, text)| format!("{}\n{text}", style(name).bold()))
        .collect::<Vec<_>>()
        .join("\n\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "rephrased": self })
    }
}

impl CommandOutput for GrammarCorrection {
    fn to_human(&self) -> String {
        format!("{}\n\n{}", self.corrected, style(&self.message).dim())
    }
}

impl CommandOutput for Summary {
    fn to_human(&self) -> String {
        self.summary.clone()
    }
}

impl CommandOutput for ToneTransform {
    fn to_human(&self) -> String {
        self.transformed.clone()
    }
}

pub fn analyze(args: &TextArgs, config: &Config, json_mode: bool) -> Result<()> {
    let input = args.read()?;
    let engine = ScoringEngine::from_config(config.scoring.clone());
    output(&engine.analyze(input.as_str()), json_mode);
    Ok(())
}

pub fn rephrase(args: &TextArgs, json_mode: bool) -> Result<()> {
    let input = args.read()?;
    output(&rewrite::rephrase(input.as_str())?, json_mode);
    Ok(())
}

pub fn grammar(args: &TextArgs, json_mode: bool) -> Result<()> {
    let input = args.read()?;
    output(&rewrite::correct_grammar(input.as_str())?, json_mode);
    Ok(())
}

pub fn summarize(args: &TextArgs, json_mode: bool) -> Result<()> {
    let input = args.read()?;
    output(&rewrite::summarize(input.as_str()), json_mode);
    Ok(())
}

pub fn transform(args: &TransformArgs, json_mode: bool) -> Result<()> {
    let input = args.input.read()?;
    let target = ToneTarget::resolve(args.tone.as_deref());
    if target.is_none() {
        tracing::warn!(tone = ?args.tone, "unrecognised tone, text left unchanged");
    }
    output(&rewrite::transform_tone(input.as_str(), target)?, json_mode);
    Ok(())
}
