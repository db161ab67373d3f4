//! Enigma - rotor cipher
//! Command-line interface for encrypting and decrypting text

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::*;
use enigma_core::{MachineConfig, encrypt_text};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_CONFIG_FILE: &str = "enigma.toml";

#[derive(Parser)]
#[command(name = "enigma")]
#[command(author = "Enigma Contributors")]
#[command(version = "2026.10.16")]
#[command(about = "Enigma - electromechanical rotor cipher", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text (running it again on the ciphertext decrypts it)
    Encrypt {
        /// Text to encrypt; prompts for a line when omitted
        #[arg(value_name = "TEXT")]
        text: Option<String>,

        /// Machine configuration (.toml); the built-in preset when omitted
        #[arg(short, long, value_name = "CONFIG")]
        config: Option<PathBuf>,
    },

    /// Write the built-in machine configuration to a file
    Init {
        /// Output configuration file
        #[arg(short, long, value_name = "OUTPUT", default_value = DEFAULT_CONFIG_FILE)]
        output: PathBuf,
    },

    /// Show the machine configuration
    Info {
        /// Machine configuration (.toml); the built-in preset when omitted
        #[arg(short, long, value_name = "CONFIG")]
        config: Option<PathBuf>,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "enigma=info,enigma_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Encrypt { text, config } => encrypt_command(text, config.as_deref()),
        Commands::Init { output } => init_command(&output),
        Commands::Info { config } => info_command(config.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

// ============================================================================
// Commands
// ============================================================================

fn encrypt_command(text: Option<String>, config: Option<&Path>) -> Result<()> {
    let config = load_config(config)?;

    let text = match text {
        Some(text) => text,
        None => prompt_line("Please enter some text to encrypt: ")?,
    };

    println!("{}", encrypt_line(&config, &text)?);
    Ok(())
}

fn init_command(output: &Path) -> Result<()> {
    if output.exists() {
        bail!("{} already exists", output.display());
    }

    let content = MachineConfig::preset()?.to_toml_string()?;
    fs::write(output, content).with_context(|| format!("Failed to write {}", output.display()))?;

    println!("{} {}", "   Created".green().bold(), output.display().to_string().cyan());
    Ok(())
}

fn info_command(config: Option<&Path>) -> Result<()> {
    let config = load_config(config)?;
    let machine = config.build()?;

    println!("{}", "Enigma - electromechanical rotor cipher".bold());
    println!();
    println!("  {} {:?}", "Alphabet:".bold(), config.alphabet);
    println!("  {} {}", "Symbols: ".bold(), machine.alphabet_size());
    println!("  {} {}", "Rotors:  ".bold(), machine.rotor_count());
    for (index, rotor) in machine.rotors().iter().enumerate() {
        println!(
            "    • rotor {} starts at {}",
            index.to_string().cyan(),
            rotor.starting_position()
        );
    }
    println!();
    println!("{}", "The cipher is its own inverse: encrypt the ciphertext with".italic());
    println!("{}", "the same configuration to recover the plaintext.".italic());
    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

/// Loads the configuration at `path`, or the built-in preset.
fn load_config(path: Option<&Path>) -> Result<MachineConfig> {
    match path {
        Some(path) => {
            tracing::info!("loading machine config from {}", path.display());
            MachineConfig::from_file(path)
                .with_context(|| format!("Invalid machine config {}", path.display()))
        }
        None => Ok(MachineConfig::preset()?),
    }
}

/// Encrypts one line on a freshly assembled machine.
fn encrypt_line(config: &MachineConfig, text: &str) -> Result<String> {
    let alphabet = config.alphabet()?;
    let mut machine = config.build()?;
    encrypt_text(&mut machine, &alphabet, text).context("Failed to encrypt text")
}

fn prompt_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
