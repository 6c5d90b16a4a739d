use crate::base;
use crate::cli;

/// Show headline figures and the best selling products
#[derive(clap::Parser)]
pub struct Summary {
    #[command(flatten)]
    filter_opts: cli::sharedopts::FilterOpts,

    /// Number of products to list [default: from config]
    #[arg(short = 'n', long, value_name = "N")]
    top: Option<usize>,
}

impl Summary {
    pub fn run(&self, table: &base::Table, config: &base::Config) -> anyhow::Result<cli::Output> {
        let top_n = self.top.unwrap_or(config.top_products);
        let view = base::filter(table, &self.filter_opts.to_state(table));
        let dashboard = base::Dashboard::compute(&view, top_n);
        Ok(cli::Output::Summary(base::kpiprinter::Config {
            charset: cli::util::charset_from_config(config),
            currency_symbol: config.currency_symbol.clone(),
            kpis: dashboard.kpis,
            top_products: dashboard.top_products,
        }))
    }
}
