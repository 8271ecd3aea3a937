//! Read command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, InputSet, OpenInput};
use crate::output::{JsonFormatter, LineRecord, OutputFormat, OutputFormatter, TextFormatter};
use anyhow::{Context, Result};
use clap::Args;
use linestash_core::{ByteSource, LineReader, ReaderConfig};
use std::io;
use std::path::PathBuf;

/// Arguments for the read command
#[derive(Debug, Args)]
pub struct ReadArgs {
    /// Input files or patterns (supports glob, `-` for stdin)
    #[arg(value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Bytes requested per underlying read
    #[arg(short = 'c', long, value_name = "BYTES", env = "LINESTASH_CHUNK_SIZE")]
    pub chunk_size: Option<usize>,

    /// Take one line from each input in turn instead of one input after another
    #[arg(short = 'i', long)]
    pub interleave: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Prefix text lines with the name of their input
    #[arg(short, long)]
    pub prefix: bool,

    /// Configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Settings after merging flags, config file and defaults
#[derive(Debug, Clone, PartialEq)]
pub struct ReadSettings {
    /// Reader configuration
    pub reader: ReaderConfig,
    /// Output format
    pub format: OutputFormat,
    /// Prefix text lines with their input
    pub prefix: bool,
    /// Round-robin across inputs
    pub interleave: bool,
}

impl ReadArgs {
    /// Execute the read command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting line reading");
        log::debug!("Arguments: {:?}", self);

        let settings = self.settings()?;
        let paths = resolve_patterns(&self.input)?;
        let inputs = InputSet::open(&paths)?;

        let mut formatter: Box<dyn OutputFormatter> = match settings.format {
            OutputFormat::Text => {
                Box::new(TextFormatter::new(io::stdout().lock(), settings.prefix))
            }
            OutputFormat::Json => Box::new(JsonFormatter::new(io::stdout().lock())),
        };

        let total = emit_lines(
            inputs.source(),
            inputs.inputs(),
            &settings,
            formatter.as_mut(),
        )?;
        formatter.finish()?;

        log::info!("Read {} lines from {} inputs", total, inputs.inputs().len());
        Ok(())
    }

    /// Merge flags over the config file over the defaults
    pub fn settings(&self) -> Result<ReadSettings> {
        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let reader = ReaderConfig::new(self.chunk_size.unwrap_or(config.reader.chunk_size));
        reader
            .validate()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        Ok(ReadSettings {
            reader,
            format: self.format.unwrap_or(config.output.format),
            prefix: self.prefix || config.output.prefix,
            interleave: self.interleave,
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running under tests
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

/// Feed every line of `inputs` to `formatter`, returning the line count
pub fn emit_lines<S: ByteSource>(
    source: S,
    inputs: &[OpenInput],
    settings: &ReadSettings,
    formatter: &mut dyn OutputFormatter,
) -> Result<usize> {
    let mut reader = LineReader::with_config(source, settings.reader);
    let mut counts = vec![0usize; inputs.len()];
    let mut total = 0;

    let mut emit = |index: usize, reader: &mut LineReader<S>| -> Result<bool> {
        let input = &inputs[index];
        let line = reader
            .next_line(input.descriptor)
            .map_err(|e| CliError::ReadError {
                path: input.name.clone(),
                reason: e.to_string(),
            })?;
        let Some(line) = line else {
            log::debug!("{}: end of input after {} lines", input.name, counts[index]);
            return Ok(false);
        };

        counts[index] += 1;
        total += 1;
        formatter
            .format_line(&LineRecord {
                file: &input.name,
                number: counts[index],
                bytes: &line,
            })
            .with_context(|| format!("Failed to write line from {}", input.name))?;
        Ok(true)
    };

    if settings.interleave {
        let mut active: Vec<usize> = (0..inputs.len()).collect();
        while !active.is_empty() {
            let mut still_active = Vec::with_capacity(active.len());
            for index in active {
                if emit(index, &mut reader)? {
                    still_active.push(index);
                }
            }
            active = still_active;
        }
    } else {
        for index in 0..inputs.len() {
            while emit(index, &mut reader)? {}
        }
    }

    Ok(total)
}
