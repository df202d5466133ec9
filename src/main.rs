//! Governance layer for AI-assisted code generation.
//!
//! `sentinel init` scaffolds `.sentinel/rules.yml`; `sentinel create`
//! runs the rules → branch-gate → generate → audit pipeline and prints
//! the results.

use std::path::Path;

use anyhow::Result;
use clap::{Parser, Subcommand};

use sentinel::io::init::{InitOutcome, init_sentinel};
use sentinel::io::settings::Settings;
use sentinel::pipeline::{GenerationResult, run_create};
use sentinel::{exit_codes, logging};

#[derive(Parser)]
#[command(
    name = "sentinel",
    version,
    about = "Governance layer for AI-assisted code generation"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a local .sentinel directory with example rules.
    Init,
    /// Generate code following sentinel governance rules.
    Create {
        /// What you want to generate.
        prompt: String,
        /// AI provider: mock | copilot (defaults to SENTINEL_AI_PROVIDER).
        #[arg(short, long)]
        provider: Option<String>,
        /// Branch type used to leave a protected branch (e.g. feature).
        #[arg(short = 'b', long)]
        branch_type: Option<String>,
        /// Branch name used to leave a protected branch.
        #[arg(short = 'n', long)]
        branch_name: Option<String>,
    },
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let root = Path::new(".");
    match cli.command {
        Command::Init => cmd_init(root),
        Command::Create {
            prompt,
            provider,
            branch_type,
            branch_name,
        } => cmd_create(
            root,
            &prompt,
            provider.as_deref(),
            branch_type.as_deref(),
            branch_name.as_deref(),
        ),
    }
}

fn cmd_init(root: &Path) -> Result<()> {
    match init_sentinel(root)? {
        InitOutcome::Created => println!("Created .sentinel/ with example rules."),
        InitOutcome::AlreadyExists => println!(".sentinel/ already exists. Skipping."),
    }
    Ok(())
}

fn cmd_create(
    root: &Path,
    prompt: &str,
    provider: Option<&str>,
    branch_type: Option<&str>,
    branch_name: Option<&str>,
) -> Result<()> {
    let settings = Settings::load(root);
    let label = provider.unwrap_or(&settings.ai_provider);
    let result = run_create(root, prompt, label, &settings, branch_type, branch_name)?;
    print_result(&result);
    Ok(())
}

fn print_result(result: &GenerationResult) {
    println!("=== Generated Tests ===");
    println!("{}", result.test_code);
    println!("=== Generated Code ===");
    println!("{}", result.code);
    println!("=== Security Audit ===");
    for finding in &result.findings {
        println!("{finding}");
    }
}
