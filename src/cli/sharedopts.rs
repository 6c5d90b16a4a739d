use crate::base;

pub const INTERVAL_HELP: &str = "Date range of interest [default: everything]";
pub const INTERVAL_HELP_LONG: &str = "Date range of interest

Must be in the format 'A:B'. Each of 'A' or 'B' is either a date (yyyy-mm-dd) or a month (yyyy-mm). Both are optional; a missing 'A' means the earliest date and a missing 'B' means the latest. A month on the left starts on its first day and a month on the right ends on its last day.

The following shorthands are also available:
yyyy-mm-dd = yyyy-mm-dd:yyyy-mm-dd
yyyy-mm = yyyy-mm:yyyy-mm";

/// Options narrowing the transactions a command looks at.
#[derive(clap::Args)]
pub struct FilterOpts {
    #[arg(
        default_value = ":",
        hide_default_value = true,
        help = INTERVAL_HELP,
        long_help = INTERVAL_HELP_LONG,
    )]
    pub interval: base::Interval,

    /// Regions to include [default: all]
    ///
    /// Use commas to separate multiple regions. Names must match exactly.
    #[arg(short, long, value_name = "REGIONS", value_delimiter = ',')]
    pub regions: Option<Vec<String>>,

    /// Categories to include [default: all]
    ///
    /// Use commas to separate multiple categories. Names must match exactly.
    #[arg(short, long, value_name = "CATEGORIES", value_delimiter = ',')]
    pub categories: Option<Vec<String>>,
}

impl FilterOpts {
    /// Builds the selection against `table`. Omitted regions or categories
    /// select every one present in the table.
    pub fn to_state(&self, table: &base::Table) -> base::FilterState {
        let mut state = base::FilterState::all(table).with_interval(self.interval);
        if let Some(regions) = &self.regions {
            state = state.with_regions(regions.iter().cloned());
        }
        if let Some(categories) = &self.categories {
            state = state.with_categories(categories.iter().cloned());
        }
        state
    }
}
