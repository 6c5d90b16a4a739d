use rust_decimal::Decimal;

use crate::base;

/// The headline figures shown for one filtered view.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub kpis: base::Kpis,
    /// Best selling products, largest first.
    pub top_products: Vec<(String, Decimal)>,
}

impl Dashboard {
    pub fn compute(view: &base::Table, top_n: usize) -> Self {
        Self {
            kpis: base::summarize(view),
            top_products: base::group_by(view, base::Dimension::Product).top(top_n),
        }
    }
}
