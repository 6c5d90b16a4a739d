use rust_decimal::Decimal;

use crate::base;

/// Headline metrics of a view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kpis {
    pub total_revenue: Decimal,
    /// Number of distinct non-empty order ids.
    pub total_orders: usize,
    /// Exact quotient of revenue over orders. Zero when there are no orders.
    pub avg_order_value: Decimal,
    /// `None` when growth is undefined, see [`base::mom_growth`].
    pub mom_growth: Option<f64>,
}

pub fn summarize(view: &base::Table) -> Kpis {
    let monthly = group_by(view, base::Dimension::Month);
    let total_revenue = monthly.sum();
    let total_orders = view
        .iter()
        .map(base::Record::order_id)
        .filter(|id| !id.is_empty())
        .collect::<std::collections::HashSet<_>>()
        .len();
    let avg_order_value = match total_orders {
        0 => Decimal::ZERO,
        n => total_revenue / Decimal::from(n),
    };
    Kpis {
        total_revenue,
        total_orders,
        avg_order_value,
        mom_growth: base::mom_growth(&monthly.sorted_by_key()),
    }
}

/// Sums sales per distinct value of `dim`, keys in first-seen order.
pub fn group_by(view: &base::Table, dim: base::Dimension) -> base::Rollup<String> {
    view.iter()
        .map(|r| (r.key(dim).to_string(), r.sales()))
        .collect()
}

/// Sales per month bucket, oldest first.
pub fn monthly_series(view: &base::Table) -> Vec<(String, Decimal)> {
    group_by(view, base::Dimension::Month).sorted_by_key()
}
