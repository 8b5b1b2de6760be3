//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Mirror test structure enforcement tool.
#[derive(Debug, Parser)]
#[command(name = "pytest-mirror")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate placeholder tests for modules without one
    Generate(GenerateArgs),

    /// Report modules without a mirrored test
    Validate(ValidateArgs),

    /// Test-runner startup check: generate or fail on missing tests
    Check(CheckArgs),
}

/// Arguments for the `generate` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct GenerateArgs {
    /// Path to the main package directory (default: first subdir in ./src or ./)
    #[arg(long, value_name = "DIR")]
    pub package_dir: Option<PathBuf>,

    /// Path to the tests directory (default: ./tests)
    #[arg(long, value_name = "DIR")]
    pub tests_dir: Option<PathBuf>,
}

/// Arguments for the `validate` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ValidateArgs {
    /// Path to the main package directory (default: first subdir in ./src or ./)
    #[arg(long, value_name = "DIR")]
    pub package_dir: Option<PathBuf>,

    /// Path to the tests directory (default: ./tests)
    #[arg(long, value_name = "DIR")]
    pub tests_dir: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Package directory to mirror (default: $PYTEST_MIRROR_PACKAGE_DIR, then auto-detect)
    #[arg(long = "mirror-package-dir", value_name = "DIR")]
    pub package_dir: Option<PathBuf>,

    /// Tests directory (default: $PYTEST_MIRROR_TESTS_DIR, then ./tests)
    #[arg(long = "mirror-tests-dir", value_name = "DIR")]
    pub tests_dir: Option<PathBuf>,

    /// Disable automatic generation of missing test stubs
    #[arg(long = "mirror-no-generate")]
    pub no_generate: bool,
}
