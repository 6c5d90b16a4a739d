use anyhow::Context;

use crate::base;
use crate::cli;

/// Write a config file in the current directory
#[derive(clap::Parser)]
pub struct Init {
    /// Restore an existing config to defaults
    #[arg(long)]
    reset_config: bool,
}

fn initial_config() -> base::Config {
    base::Config {
        use_colored_output: true,
        use_unicode_symbols: true,
        ..Default::default()
    }
}

impl Init {
    pub fn run(&self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        let path = fs.path::<base::Config>();
        let existed = path.is_file();

        let config = if self.reset_config || !existed {
            initial_config()
        } else {
            fs.read::<base::Config>()
                .with_context(|| format!("failed to read '{}'", path.display()))?
        };
        fs.write(&config)
            .with_context(|| format!("failed to write '{}'", path.display()))?;

        Ok(if !existed {
            cli::Output::Str(format!("Config initialized in '{}'", fs.dir().display()))
        } else if self.reset_config {
            cli::Output::Str("Config reset to defaults.".to_string())
        } else {
            cli::Output::Str(format!("Config reinitialized in '{}'", fs.dir().display()))
        })
    }
}
