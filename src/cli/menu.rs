//! Main menu entries and their rendering

use crate::prompting::Technique;
use std::io::{self, Write};

/// Width of the banner rules
pub const BANNER_WIDTH: usize = 60;

/// An entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Technique(Technique),
    RunAll,
    Interactive,
    Exit,
}

impl MenuChoice {
    /// Parse the number typed at the menu prompt
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Technique(Technique::ZeroShot)),
            "2" => Some(MenuChoice::Technique(Technique::FewShot)),
            "3" => Some(MenuChoice::Technique(Technique::ChainOfThought)),
            "4" => Some(MenuChoice::RunAll),
            "5" => Some(MenuChoice::Interactive),
            "6" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

pub fn write_welcome<W: Write>(out: &mut W) -> io::Result<()> {
    let rule = "=".repeat(BANNER_WIDTH);
    writeln!(out, "🚀 Welcome to the Bedrock Prompt Engineering Demo!")?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "This application demonstrates three key prompting techniques:")?;
    writeln!(out, "• Zero-Shot Prompting: Direct questions without examples")?;
    writeln!(out, "• Few-Shot Prompting: Learning from provided examples")?;
    writeln!(out, "• Chain-of-Thought: Step-by-step reasoning process")?;
    writeln!(out, "{}", rule)
}

pub fn write_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n📋 Main Menu:")?;
    writeln!(out, "1. 🎯 Zero-Shot Prompting Examples")?;
    writeln!(out, "2. 🎪 Few-Shot Prompting Examples")?;
    writeln!(out, "3. 🧠 Chain-of-Thought Prompting Examples")?;
    writeln!(out, "4. 🌟 Run All Examples")?;
    writeln!(out, "5. 💬 Interactive Mode")?;
    writeln!(out, "6. 🚪 Exit")?;
    write!(out, "\nEnter your choice (1-6): ")?;
    out.flush()
}
