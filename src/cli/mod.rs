//! CLI module for RecipeMaster
//!
//! Provides subcommands for the two ways to run the application:
//! - `serve`: API + UI server
//! - `generate`: one-shot recipe generation to stdout

pub mod generate;
pub mod serve;

use clap::{Parser, Subcommand};

/// RecipeMaster - AI-powered recipe generation
#[derive(Parser)]
#[command(name = "recipemaster")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API + UI server
    Serve,

    /// Generate a single recipe and print it to stdout
    Generate(generate::GenerateArgs),
}
