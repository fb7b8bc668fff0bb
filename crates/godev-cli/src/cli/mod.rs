//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "godev",
    bin_name = "godev",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "A modern Go development kit",
    long_about = "godev scaffolds Go projects, checks the local toolchain, \
                  and runs the usual lint, test and install chores.",
    after_help = "EXAMPLES:\n\
        \x20 godev init my-service --repo github.com/acme/my-service\n\
        \x20 godev doctor\n\
        \x20 godev test unit --html\n\
        \x20 godev completions bash > /usr/share/bash-completion/completions/godev",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a Go project in a new or existing directory.
    #[command(
        about = "Initialize a Go project",
        after_help = "EXAMPLES:\n\
            \x20 godev init                       # current directory\n\
            \x20 godev init my-service\n\
            \x20 godev init ../tools/cli --repo github.com/acme/cli -y"
    )]
    Init(InitArgs),

    /// Check the module file, the Go toolchain and the recommended tools.
    #[command(
        about = "Diagnose the development environment",
        after_help = "EXAMPLES:\n\
            \x20 godev doctor\n\
            \x20 godev doctor --output-format json"
    )]
    Doctor,

    /// Format, lint and tidy the module in the current directory.
    #[command(
        about = "Format and lint the project",
        after_help = "EXAMPLES:\n\
            \x20 godev lint"
    )]
    Lint,

    /// Run tests.
    #[command(about = "Run tests", subcommand)]
    Test(TestCommands),

    /// Install Go tools.
    #[command(about = "Manage Go tools", subcommand)]
    Tools(ToolsCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 godev completions bash > ~/.local/share/bash-completion/completions/godev\n\
            \x20 godev completions zsh  > ~/.zfunc/_godev\n\
            \x20 godev completions fish > ~/.config/fish/completions/godev.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the godev configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 godev config init\n\
            \x20 godev config get version.timeout_secs\n\
            \x20 godev config list"
    )]
    Config(ConfigCommands),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `godev init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Directory to initialize. A plain name creates `./name`; omitted means
    /// the current directory.
    #[arg(value_name = "PROJECT", help = "Project name or path")]
    pub name: Option<PathBuf>,

    /// Module path, skipping the repository prompt.
    #[arg(
        long = "repo",
        value_name = "REPOSITORY",
        help = "Module path, e.g. github.com/you/project"
    )]
    pub repo: Option<String>,

    /// Answer the confirmation prompt affirmatively.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Continue without asking when the directory is not empty"
    )]
    pub yes: bool,
}

// ── test ──────────────────────────────────────────────────────────────────────

/// Subcommands for `godev test`.
#[derive(Debug, Subcommand)]
pub enum TestCommands {
    /// Run `go test` over every package.
    #[command(after_help = "EXAMPLES:\n\
            \x20 godev test unit\n\
            \x20 godev test unit -v -c\n\
            \x20 godev test unit --html")]
    Unit(UnitTestArgs),
}

/// Arguments for `godev test unit`.
#[derive(Debug, Args)]
pub struct UnitTestArgs {
    #[arg(short = 'v', long = "verbose", help = "Pass -v to go test")]
    pub verbose: bool,

    #[arg(short = 'c', long = "cover", help = "Write a coverage profile")]
    pub cover: bool,

    /// Implies `--cover`.
    #[arg(long = "html", help = "Render and open an HTML coverage report")]
    pub html: bool,
}

// ── tools ─────────────────────────────────────────────────────────────────────

/// Subcommands for `godev tools`.
#[derive(Debug, Subcommand)]
pub enum ToolsCommands {
    /// Install one package, or every recommended tool when none is given.
    #[command(after_help = "EXAMPLES:\n\
            \x20 godev tools install\n\
            \x20 godev tools install golang.org/x/tools/gopls\n\
            \x20 godev tools install honnef.co/go/tools/cmd/staticcheck@2025.1")]
    Install(InstallArgs),
}

/// Arguments for `godev tools install`.
#[derive(Debug, Args)]
pub struct InstallArgs {
    /// `@latest` is appended when no version is given.
    #[arg(value_name = "PACKAGE", help = "Package path to install")]
    pub package: Option<String>,

    #[arg(short = 'y', long = "yes", help = "Install without asking")]
    pub yes: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `godev completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `godev config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Write a configuration file populated with the defaults.
    Init {
        /// Overwrite an existing file.
        #[arg(short = 'f', long = "force")]
        force: bool,
    },
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `version.timeout_secs`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
