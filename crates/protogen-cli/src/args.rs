//! Command-line argument definitions for the protogen CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, profile selection,
//! configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the protogen tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input API definition (JSON)
    #[arg(help = "Path to the API definition file")]
    pub input: String,

    /// Path to the output proto file
    #[arg(short, long, default_value = "out.proto")]
    pub output: String,

    /// Path to a profile file (JSON)
    #[arg(short, long)]
    pub profile: Option<String>,

    /// Name of the profile to use; the first profile in the file by default
    #[arg(long)]
    pub profile_name: Option<String>,

    /// Proto package name, overriding the one from the profile
    #[arg(long)]
    pub package: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
