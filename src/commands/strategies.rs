//! Strategies command - list the extraction strategies.

use anyhow::Result;
use clap::Args;

use acrotext::{Analyzer, InputKind};

use super::CommandExecutor;

/// List the extraction strategies in report order.
#[derive(Args, Debug)]
pub struct StrategiesCommand {}

impl CommandExecutor for StrategiesCommand {
    fn execute(&self) -> Result<()> {
        for (i, strategy) in Analyzer::new().strategies().iter().enumerate() {
            let input = match strategy.input_kind() {
                InputKind::Lines => "lines",
                InputKind::Text => "text",
            };
            println!("{}. {} [{}]", i + 1, strategy, input);
        }
        Ok(())
    }
}
