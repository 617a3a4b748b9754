//! Prompting technique catalogues
//!
//! Each technique pairs a fixed set of example prompts with the sampling
//! adjustments that suit it. Running a technique sends every example in
//! order and prints prompt and completion side by side.

pub mod chain_of_thought;
pub mod few_shot;
pub mod zero_shot;

use crate::core::client::BedrockClient;
use crate::models::ModelParams;
use std::io::{self, Write};
use tracing::error;

/// Width of the rule printed under each prompt
const RULE_WIDTH: usize = 80;

/// A canned prompt
#[derive(Debug, Clone, Copy)]
pub struct Example {
    pub name: &'static str,
    pub prompt: &'static str,
    /// Per-example temperature override
    pub temperature: Option<f64>,
}

impl Example {
    pub const fn new(name: &'static str, prompt: &'static str) -> Self {
        Self {
            name,
            prompt,
            temperature: None,
        }
    }

    pub const fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Parameters for this example, starting from the technique's
    pub fn params(&self, technique: &ModelParams) -> ModelParams {
        match self.temperature {
            Some(temperature) => technique.clone().with_temperature(temperature),
            None => technique.clone(),
        }
    }
}

/// Supported prompting techniques
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Technique {
    /// Direct questions without examples
    ZeroShot,
    /// Learning from provided examples
    FewShot,
    /// Step-by-step reasoning
    ChainOfThought,
}

impl Technique {
    pub const ALL: [Technique; 3] = [
        Technique::ZeroShot,
        Technique::FewShot,
        Technique::ChainOfThought,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Technique::ZeroShot => "Zero-Shot",
            Technique::FewShot => "Few-Shot",
            Technique::ChainOfThought => "Chain-of-Thought",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Technique::ZeroShot | Technique::FewShot => "🎯",
            Technique::ChainOfThought => "🧠",
        }
    }

    pub fn examples(&self) -> &'static [Example] {
        match self {
            Technique::ZeroShot => zero_shot::EXAMPLES,
            Technique::FewShot => few_shot::EXAMPLES,
            Technique::ChainOfThought => chain_of_thought::EXAMPLES,
        }
    }

    /// Adjust the default parameters for this technique
    pub fn params(&self, base: &ModelParams) -> ModelParams {
        let params = base.clone();
        match self {
            // focused answers
            Technique::ZeroShot => params.with_temperature(0.3),
            Technique::FewShot => params.with_temperature(0.5).with_max_tokens(800),
            // room for the reasoning steps
            Technique::ChainOfThought => params.with_temperature(0.4).with_max_tokens(1000),
        }
    }
}

/// Send every example of `technique` and print the completions to `out`
///
/// A failing example is logged and skipped. Returns the number of examples
/// that completed.
pub async fn run_technique<W: Write>(
    client: &BedrockClient,
    technique: Technique,
    base: &ModelParams,
    out: &mut W,
) -> io::Result<usize> {
    writeln!(
        out,
        "=== {} PROMPTING EXAMPLES ===\n",
        technique.title().to_uppercase()
    )?;

    let params = technique.params(base);
    let mut completed = 0;

    for example in technique.examples() {
        writeln!(
            out,
            "{} {} Prompting: {}",
            technique.icon(),
            technique.title(),
            example.name
        )?;
        writeln!(out, "Prompt: {}", example.prompt)?;
        writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
        out.flush()?;

        match client
            .invoke_model(example.prompt, &example.params(&params))
            .await
        {
            Ok(response) => {
                writeln!(out, "Response: {}\n", response.completion)?;
                completed += 1;
            }
            Err(e) => error!("Error in {}: {}", example.name, e),
        }
    }

    Ok(completed)
}
