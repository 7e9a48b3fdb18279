//! `aescfb` command line.
//!
//! ```text
//! aescfb [-q] <key> <input> [output]      encrypt (default output: <input>_encrypted)
//! aescfb -d [-q] <key> <input> [output]   decrypt (default output: <input> minus _encrypted)
//! ```

use aescfb::aliases::Passphrase;
use aescfb::progress::percent;
use aescfb::{default_output_path, transform_file, Mode, ProgressSink};
use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "aescfb",
    version,
    about = "Streaming AES-256-CFB file encryption"
)]
struct Cli {
    /// Decrypt instead of encrypt
    #[arg(short = 'd')]
    decrypt: bool,

    /// Hide the progress line
    #[arg(short, long)]
    quiet: bool,

    /// Passphrase, any bytes (first 32 are used, shorter ones are zero-padded)
    key: OsString,

    /// File to read
    input: PathBuf,

    /// File to write
    output: Option<PathBuf>,
}

struct BarProgress(ProgressBar);

impl ProgressSink for BarProgress {
    fn update(&mut self, processed: u64, total: u64) {
        self.0.set_length(total);
        self.0.set_position(processed);
        self.0.set_message(format!("{:.2}%", percent(processed, total)));
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn make_progress_bar(quiet: bool) -> Result<ProgressBar> {
    if quiet {
        return Ok(ProgressBar::hidden());
    }
    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::with_template("progress: {msg:>7} [{bar:40.cyan/blue}] {bytes}/{total_bytes}")
            .map_err(|e| anyhow::anyhow!("invalid progress template: {e}"))?
            .progress_chars("=> "),
    );
    Ok(pb)
}

fn run(cli: Cli) -> Result<()> {
    let mode = if cli.decrypt {
        Mode::Decrypt
    } else {
        Mode::Encrypt
    };
    let output = cli
        .output
        .unwrap_or_else(|| default_output_path(mode, &cli.input));
    let passphrase = Passphrase::new(cli.key.into_encoded_bytes());

    let verb = match mode {
        Mode::Encrypt => "Encrypting",
        Mode::Decrypt => "Decrypting",
    };
    println!("{verb} {}", cli.input.display());

    let mut progress = BarProgress(make_progress_bar(cli.quiet)?);
    let result = transform_file(mode, &passphrase, &cli.input, &output, &mut progress);
    progress.0.finish_and_clear();
    let report = result.with_context(|| format!("{mode} failed for {}", cli.input.display()))?;

    tracing::info!(
        %mode,
        bytes = report.bytes_processed,
        output = %output.display(),
        "done"
    );
    match mode {
        Mode::Encrypt => println!("Encryption complete: {}", output.display()),
        Mode::Decrypt => println!("Decryption complete: {}", output.display()),
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help / --version
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    init_tracing();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
