use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use zoo::domain::config::{AdmissionMode, ZooConfig};

/// Command-line arguments. Flags override the configuration file.
#[derive(Debug, Parser)]
#[command(name = "zoo")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Keeps track of the animals and inventory of a zoo")]
pub struct Args {
    /// Configuration file; `zoo.toml` (or .json/.yaml) in the working directory is used when present
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory for rolling log files
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Minimum log level (error, warn, info, debug, trace)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Start with an empty inventory
    #[arg(long)]
    pub no_seed: bool,

    /// How candidate animals are assessed
    #[arg(short, long, value_enum)]
    pub admission: Option<AdmissionArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AdmissionArg {
    /// Ask the vet for every animal
    Interactive,
    /// Admit every animal
    Approve,
    /// Refuse every animal
    Reject,
}

impl From<AdmissionArg> for AdmissionMode {
    fn from(arg: AdmissionArg) -> Self {
        match arg {
            AdmissionArg::Interactive => Self::Interactive,
            AdmissionArg::Approve => Self::Approve,
            AdmissionArg::Reject => Self::Reject,
        }
    }
}

impl Args {
    /// Folds the command-line overrides into `cfg`.
    pub fn apply(&self, cfg: &mut ZooConfig) {
        if let Some(dir) = &self.log_dir {
            cfg.logging.directory = Some(dir.clone());
        }
        if let Some(level) = &self.log_level {
            cfg.logging.level.clone_from(level);
        }
        if self.no_seed {
            cfg.inventory.seed.clear();
        }
        if let Some(mode) = self.admission {
            cfg.admission.mode = mode.into();
        }
    }
}
