pub mod toml_config;

use crate::domain::model::Principle;
use crate::domain::product::{Color, ProductType, Size};
use crate::utils::error::Result;
use clap::Parser;
use toml_config::SamplerConfig;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "solid-sampler")]
#[command(about = "Runs small demonstrations of four SOLID design principles")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Principles to demonstrate (comma separated); all when omitted
    #[arg(short, long, value_delimiter = ',')]
    pub principle: Vec<Principle>,

    /// Override the directory the journal is saved in
    #[arg(long)]
    pub output_path: Option<String>,

    /// Override whether the journal file is created when missing
    #[arg(long)]
    pub overwrite: Option<bool>,

    /// Extra product query: color
    #[arg(long)]
    pub color: Option<Color>,

    /// Extra product query: size
    #[arg(long)]
    pub size: Option<Size>,

    /// Extra product query: type
    #[arg(long = "type")]
    pub kind: Option<ProductType>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    /// Show what would run without running it
    #[arg(long)]
    pub dry_run: bool,
}

impl CliConfig {
    /// Loads the file configuration (or defaults) and applies command line
    /// overrides on top.
    pub fn resolve(&self) -> Result<SamplerConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                SamplerConfig::from_file(path)?
            }
            None => SamplerConfig::default(),
        };

        if let Some(output_path) = &self.output_path {
            config.journal.output_path = output_path.clone();
        }
        if let Some(overwrite) = self.overwrite {
            config.journal.overwrite = overwrite;
        }
        if let Some(color) = self.color {
            config.query.color = Some(color);
        }
        if let Some(size) = self.size {
            config.query.size = Some(size);
        }
        if let Some(kind) = self.kind {
            config.query.kind = Some(kind);
        }

        Ok(config)
    }

    /// Requested principles in canonical order, without duplicates.
    pub fn principles(&self) -> Vec<Principle> {
        if self.principle.is_empty() {
            return Principle::ALL.to_vec();
        }
        Principle::ALL
            .into_iter()
            .filter(|p| self.principle.contains(p))
            .collect()
    }
}
