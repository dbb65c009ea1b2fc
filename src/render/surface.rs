//! Rendering seam and the CLI surface.
//!
//! The wizard core hands the surface immutable state snapshots and display
//! models; the surface never mutates wizard state. Swapping the CLI for a
//! GUI toolkit means implementing [`Surface`], nothing else.

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::wizard::WizardState;

use super::visual::{ScoreBand, VisualModel};

/// Opaque rendering layer consumed by the session loop.
#[async_trait]
pub trait Surface: Send {
    /// Draw the current step's fields and navigation hints.
    async fn show_step(&mut self, state: &WizardState);
    /// Surface a recoverable error banner.
    async fn show_error(&mut self, message: &str);
    /// Indicate that a scoring request is in flight.
    async fn show_pending(&mut self);
    /// Draw a scored result.
    async fn show_result(&mut self, model: &VisualModel);
    /// Read the next raw command line from the user, `None` on EOF.
    async fn read_command(&mut self) -> Option<String>;
}

const GAUGE_WIDTH: usize = 25;

/// A stdin/stdout surface for local use.
pub struct CliSurface {
    lines: Lines<BufReader<Stdin>>,
}

impl CliSurface {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    /// Terminal color for a band's semantic palette name.
    fn ansi(band: ScoreBand) -> &'static str {
        match band.color() {
            "success" => "\x1b[32m",
            "warning" => "\x1b[33m",
            _ => "\x1b[31m",
        }
    }
}

impl Default for CliSurface {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Surface for CliSurface {
    async fn show_step(&mut self, state: &WizardState) {
        let step = state.step;
        println!();
        println!("Step {}/4: {}", step.index() + 1, step.title());
        for field in step.fields() {
            let value = state.profile.get(*field);
            let shown = if value.is_empty() { "(not provided)" } else { value };
            let marker = if field.is_required() { " *" } else { "" };
            println!("  {:<28} {} = {}", format!("{}{marker}", field.label()), field.key(), shown);
        }
        if step.is_final() {
            println!("  Commands: <field> <value>, back, submit, quit");
        } else if step.back().is_none() {
            println!("  Commands: <field> <value>, next, quit");
        } else {
            println!("  Commands: <field> <value>, next, back, quit");
        }
    }

    async fn show_error(&mut self, message: &str) {
        eprintln!("⚠️  {message}");
    }

    async fn show_pending(&mut self) {
        eprintln!("⏳ Calculating credit score...");
    }

    async fn show_result(&mut self, model: &VisualModel) {
        let filled = (model.fraction * GAUGE_WIDTH as f64).round() as usize;
        let bar = format!("{}{}", "#".repeat(filled), "-".repeat(GAUGE_WIDTH - filled));
        let color = Self::ansi(model.band);

        println!();
        println!("  Credit Score: {color}{} ({}){reset}", model.score, model.band, reset = "\x1b[0m");
        println!("  [{color}{bar}\x1b[0m]");

        if !model.improvements.is_empty() {
            println!();
            println!("  Improvement Recommendations");
            for improvement in &model.improvements {
                println!(
                    "  • {}: {} (Impact: {})",
                    improvement.timeframe, improvement.action, improvement.impact
                );
                for step in &improvement.steps {
                    println!("      ✅ {step}");
                }
            }
        }
    }

    async fn read_command(&mut self) -> Option<String> {
        eprint!("> ");
        match self.lines.next_line().await {
            Ok(Some(line)) => Some(line),
            Ok(None) => None, // EOF
            Err(e) => {
                tracing::error!("Error reading stdin: {}", e);
                None
            }
        }
    }
}
