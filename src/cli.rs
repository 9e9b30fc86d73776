use clap::{Parser, Subcommand};

/// A command-line companion for DIVE
///
/// Provides quick access to DIVE learning material from your terminal.
#[derive(Parser, Debug)]
#[command(name = "dive", version, author)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Suppress all non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the DIVE tutorial YouTube playlist
    ///
    /// Launches your default web browser (or the YouTube application) on a
    /// curated playlist of tutorial videos covering DIVE's features, with
    /// step-by-step instructions and demonstrations. Opening the browser is
    /// best-effort: if the system has no handler for the URL the failure is
    /// logged and the command still exits successfully.
    Tutorial,
}
