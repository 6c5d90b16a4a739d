use crate::base;

/// Output of a successful command invocation, to be written to stdout.
#[derive(Debug, PartialEq)]
pub enum Output {
    Str(String),
    Summary(base::kpiprinter::Config),
    Barchart(base::barchart::Config),
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::Str(s) => {
                if s.ends_with('\n') {
                    write!(f, "{}", s)
                } else {
                    writeln!(f, "{}", s)
                }
            }
            Output::Summary(config) => {
                if config.kpis.total_orders == 0 {
                    writeln!(f, "No transactions.")
                } else {
                    write!(f, "{}", config.to_kpiprinter())
                }
            }
            Output::Barchart(config) => {
                if config.rows.is_empty() {
                    writeln!(f, "No transactions.")
                } else {
                    write!(f, "{}", config.to_barchart())
                }
            }
        }
    }
}
