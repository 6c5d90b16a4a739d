use crate::base;
use crate::cli;

/// Chart sales per region
#[derive(clap::Parser)]
pub struct Regions {
    #[command(flatten)]
    filter_opts: cli::sharedopts::FilterOpts,
}

impl Regions {
    pub fn run(&self, table: &base::Table, config: &base::Config) -> anyhow::Result<cli::Output> {
        let view = base::filter(table, &self.filter_opts.to_state(table));
        Ok(cli::Output::Barchart(base::barchart::Config {
            charset: cli::util::charset_from_config(config),
            currency_symbol: config.currency_symbol.clone(),
            term_width: cli::util::term_width(),
            rows: base::group_by(&view, base::Dimension::Region).sorted_by_key(),
        }))
    }
}
