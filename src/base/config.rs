/// Application config.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Config {
    /// Sales CSV, relative to the working directory.
    pub data_path: std::path::PathBuf,
    pub report_path: std::path::PathBuf,
    pub top_products: usize,
    /// Printed in front of money amounts.
    pub currency_symbol: String,
    pub use_colored_output: bool,
    pub use_unicode_symbols: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: "data/sales_cleaned.csv".into(),
            report_path: crate::base::FILE_NAME.into(),
            top_products: 5,
            currency_symbol: String::new(),
            use_colored_output: false,
            use_unicode_symbols: false,
        }
    }
}

impl std::fmt::Display for Config {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string_pretty(self).map_err(|_| std::fmt::Error)?;
        writeln!(f, "{}", s)
    }
}

impl std::str::FromStr for Config {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl TryFrom<&str> for Config {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
