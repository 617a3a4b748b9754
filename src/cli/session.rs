//! Menu-driven session
//!
//! A [`Session`] reads menu choices and prompts from any `BufRead` and
//! writes everything the user sees to any `Write`, so the whole flow can be
//! scripted in tests. End of input is treated as a request to exit.

use crate::cli::menu::{self, MenuChoice};
use crate::core::client::BedrockClient;
use crate::models::ModelParams;
use crate::prompting::{self, Technique};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead, Write};
use std::time::Duration;
use tracing::info;

const SECTION_WIDTH: usize = 80;
const INTERACTIVE_WIDTH: usize = 50;

pub struct Session<'a, R, W> {
    client: &'a BedrockClient,
    params: ModelParams,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    /// Create a session sending prompts through `client`, with `params` as
    /// the defaults every technique adjusts
    pub fn new(client: &'a BedrockClient, params: ModelParams, input: R, output: W) -> Self {
        Self {
            client,
            params,
            input,
            output,
        }
    }

    /// Run the main menu loop until the user exits or input ends
    pub async fn run(&mut self) -> io::Result<()> {
        menu::write_welcome(&mut self.output)?;

        loop {
            menu::write_menu(&mut self.output)?;
            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                return Ok(());
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Technique(technique)) => self.run_technique(technique).await?,
                Some(MenuChoice::RunAll) => self.run_all().await?,
                Some(MenuChoice::Interactive) => self.interactive().await?,
                Some(MenuChoice::Exit) => {
                    writeln!(
                        self.output,
                        "👋 Thank you for using the Bedrock Prompt Engineering Demo!"
                    )?;
                    return Ok(());
                }
                None => writeln!(self.output, "❌ Invalid choice. Please try again.")?,
            }

            writeln!(self.output, "\nPress Enter to continue...")?;
            self.output.flush()?;
            if self.read_line()?.is_none() {
                return Ok(());
            }
        }
    }

    /// Read one line, trimmed; `None` at end of input
    ///
    /// Invalid UTF-8 is replaced rather than rejected.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }

    async fn run_technique(&mut self, technique: Technique) -> io::Result<()> {
        info!("Running {} examples", technique.title());
        writeln!(self.output, "\n{}", "=".repeat(SECTION_WIDTH))?;
        prompting::run_technique(self.client, technique, &self.params, &mut self.output).await?;
        writeln!(self.output, "{}", "=".repeat(SECTION_WIDTH))
    }

    async fn run_all(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n🌟 Running all prompting technique examples...")?;

        for (i, technique) in Technique::ALL.into_iter().enumerate() {
            if i > 0 {
                writeln!(self.output, "\n⏳ Pausing between techniques...")?;
            }
            self.run_technique(technique).await?;
        }

        writeln!(self.output, "\n✅ All examples completed!")
    }

    async fn interactive(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n💬 Interactive Mode - Enter your own prompts!")?;
        writeln!(self.output, "Type 'exit' to return to main menu")?;
        writeln!(self.output, "{}", "-".repeat(INTERACTIVE_WIDTH))?;

        loop {
            write!(self.output, "\n🤖 Enter your prompt: ")?;
            self.output.flush()?;

            let Some(prompt) = self.read_line()? else {
                writeln!(self.output)?;
                return Ok(());
            };
            if prompt.eq_ignore_ascii_case("exit") {
                return Ok(());
            }
            if prompt.is_empty() {
                writeln!(self.output, "❌ Please enter a valid prompt.")?;
                continue;
            }

            writeln!(self.output, "\n🔄 Processing your request...")?;
            self.output.flush()?;

            let spinner = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
                spinner.set_style(style);
            }
            spinner.set_message("Waiting for the model...");
            spinner.enable_steady_tick(Duration::from_millis(120));
            let result = self.client.invoke_model(&prompt, &self.params).await;
            spinner.finish_and_clear();

            match result {
                Ok(response) => {
                    writeln!(self.output, "\n🎯 Response:\n{}", response.completion)?;
                    writeln!(self.output, "{}", "-".repeat(INTERACTIVE_WIDTH))?;
                }
                Err(e) => writeln!(self.output, "❌ Error: {}", e)?,
            }
        }
    }
}
