use crate::base;
use crate::cli;

/// Chart revenue per month
#[derive(clap::Parser)]
pub struct Trend {
    #[command(flatten)]
    filter_opts: cli::sharedopts::FilterOpts,
}

impl Trend {
    pub fn run(&self, table: &base::Table, config: &base::Config) -> anyhow::Result<cli::Output> {
        let view = base::filter(table, &self.filter_opts.to_state(table));
        Ok(cli::Output::Barchart(base::barchart::Config {
            charset: cli::util::charset_from_config(config),
            currency_symbol: config.currency_symbol.clone(),
            term_width: cli::util::term_width(),
            rows: base::monthly_series(&view),
        }))
    }
}
