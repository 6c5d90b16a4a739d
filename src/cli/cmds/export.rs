use anyhow::Context;

use crate::base;
use crate::cli;

/// Write the filtered data and its roll-ups to a spreadsheet
#[derive(clap::Parser)]
pub struct Export {
    #[command(flatten)]
    filter_opts: cli::sharedopts::FilterOpts,

    /// Where to write the workbook [default: from config]
    #[arg(short, long, value_name = "PATH")]
    output: Option<std::path::PathBuf>,
}

impl Export {
    pub fn run(
        &self,
        table: &base::Table,
        config: &base::Config,
        fs: &base::Fs,
    ) -> anyhow::Result<cli::Output> {
        let view = base::filter(table, &self.filter_opts.to_state(table));
        let bytes = base::export(&view)?;
        let path = fs.resolve(self.output.as_ref().unwrap_or(&config.report_path));
        std::fs::write(&path, bytes)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        tracing::info!(path = %path.display(), mime = base::MIME_TYPE, "saved report");
        Ok(cli::Output::Str(format!(
            "Exported {} transactions to '{}'",
            view.len(),
            path.display()
        )))
    }
}
