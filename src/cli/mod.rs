//! CLI Module
//!
//! Command-line interface for kitgen.

pub mod commands;

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::KitConfig;
use crate::error::{KitError, Result};
use crate::kit::NameNormalization;

/// kitgen - Build Hydrogen drum kits from folders of samples
#[derive(Parser, Debug)]
#[command(name = "kitgen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a drum kit and install it for Hydrogen
    #[command(name = "generate")]
    Generate {
        #[command(flatten)]
        source: SourceArgs,

        /// Folder to create the kit in (default: Hydrogen's drumkits folder)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the instruments and layers a kit would get, as JSON
    #[command(name = "plan")]
    Plan {
        #[command(flatten)]
        source: SourceArgs,
    },
}

/// Audio formats accepted on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioFormat {
    Wav,
    Flac,
}

impl AudioFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            AudioFormat::Wav => ".wav",
            AudioFormat::Flac => ".flac",
        }
    }
}

/// Where the samples are and how to turn them into a kit.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Folder containing the samples
    pub folder: PathBuf,

    /// Name of the drum kit
    pub name: String,

    /// Max layers per instrument, 0 for no limit (default: 16)
    #[arg(long)]
    pub layers: Option<usize>,

    /// File format to look for (default: wav)
    #[arg(long = "from", value_enum)]
    pub input_format: Option<AudioFormat>,

    /// Output file format (requires SoX)
    #[arg(long = "to", value_enum)]
    pub output_format: Option<AudioFormat>,

    /// Overlap between neighbouring velocity layers (default: 1/3)
    #[arg(long)]
    pub interleave: Option<f64>,

    /// How folder paths become instrument names
    /// (separator-to-space or strip-non-word)
    #[arg(long)]
    pub naming: Option<NameNormalization>,

    /// JSON file with kit settings; flags override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl SourceArgs {
    /// Resolve the settings for this run.
    pub fn kit_config(&self) -> Result<KitConfig> {
        let mut config = match &self.config {
            Some(path) => KitConfig::from_file(path)?,
            None => KitConfig::default(),
        };

        if let Some(layers) = self.layers {
            config.max_layers = NonZeroUsize::new(layers);
        }
        if let Some(format) = self.input_format {
            config.input_extension = format.extension().to_string();
        }
        if let Some(format) = self.output_format {
            config.output_extension = Some(format.extension().to_string());
        }
        if let Some(interleave) = self.interleave {
            config.interleave = interleave;
        }
        if let Some(naming) = self.naming {
            config.naming = naming;
        }

        config.validate()
    }

    /// The kit name, checked to be usable as a folder name.
    pub fn kit_name(&self) -> Result<&str> {
        let name = self.name.trim();
        if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
            return Err(KitError::InvalidConfig {
                reason: format!("'{}' cannot be used as a kit name", self.name),
            });
        }
        Ok(name)
    }
}
