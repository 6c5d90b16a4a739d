use anyhow::Context;

use crate::base;
use crate::cli;

/// Sales analytics dashboard
#[derive(clap::Parser)]
#[command(color = clap::ColorChoice::Never)]
pub struct Root {
    /// Sales CSV to read instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    data: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Init(cli::cmds::init::Init),
    Options(cli::cmds::options::Options),
    Summary(cli::cmds::summary::Summary),
    Trend(cli::cmds::trend::Trend),
    Regions(cli::cmds::regions::Regions),
    Export(cli::cmds::export::Export),
}

impl Root {
    pub fn run(self, fs: &base::Fs, session: &base::Session) -> anyhow::Result<cli::Output> {
        if let Commands::Init(cmd) = self.command {
            return cmd.run(fs);
        }

        let config = fs
            .read::<base::Config>()
            .with_context(|| format!("failed to read '{}'", fs.path::<base::Config>().display()))?;
        let path = fs.resolve(self.data.as_ref().unwrap_or(&config.data_path));
        let table = session
            .load(&path)
            .with_context(|| format!("failed to load '{}'", path.display()))?;

        match self.command {
            Commands::Init(_) => unreachable!(),
            Commands::Options(cmd) => cmd.run(&table),
            Commands::Summary(cmd) => cmd.run(&table, &config),
            Commands::Trend(cmd) => cmd.run(&table, &config),
            Commands::Regions(cmd) => cmd.run(&table, &config),
            Commands::Export(cmd) => cmd.run(&table, &config, fs),
        }
    }
}
