use crate::base;
use crate::cli;

/// List the dates, regions and categories in the data
#[derive(clap::Parser)]
pub struct Options {}

impl Options {
    pub fn run(&self, table: &base::Table) -> anyhow::Result<cli::Output> {
        if table.is_empty() {
            return Ok(cli::Output::Str("No transactions.".to_string()));
        }
        let options = table.options();
        Ok(cli::Output::Str(format!(
            "Dates: {}\nRegions: {}\nCategories: {}",
            options.dates,
            options.regions.join(", "),
            options.categories.join(", "),
        )))
    }
}
