use rust_decimal::Decimal;

use crate::base;

pub struct Kpiprinter<'a> {
    charset: &'a base::Charset,
    headline: [(&'static str, String); 4],
    top_products: Vec<(&'a str, String)>,
    alignment_charlen: usize,
}

#[derive(Debug, PartialEq)]
pub struct Config {
    pub charset: base::Charset,
    pub currency_symbol: String,
    pub kpis: base::Kpis,
    /// Largest first.
    pub top_products: Vec<(String, Decimal)>,
}

fn charlen(s: &str) -> usize {
    s.chars().count()
}

impl Config {
    pub fn to_kpiprinter(&'_ self) -> Kpiprinter<'_> {
        let money = |v: Decimal| format!("{}{}", self.currency_symbol, base::Cents::from(v));
        let growth = match self.kpis.mom_growth {
            Some(pct) => format!("{:.2}%", pct),
            None => "N/A".to_string(),
        };
        let headline = [
            ("Total Revenue", money(self.kpis.total_revenue)),
            (
                "Total Orders",
                base::util::group_thousands(self.kpis.total_orders as u64),
            ),
            ("Average Order Value", money(self.kpis.avg_order_value)),
            ("MoM Revenue Growth", growth),
        ];
        let top_products = self
            .top_products
            .iter()
            .map(|(product, v)| (product.as_str(), money(*v)))
            .collect::<Vec<_>>();

        let alignment_charlen = headline
            .iter()
            .map(|(label, value)| (*label, value))
            .chain(top_products.iter().map(|(label, value)| (*label, value)))
            .map(|(label, value)| {
                charlen(label)
                    + base::util::BOUNDING_SPACES_COUNT
                    + base::util::MIN_DASHES_COUNT
                    + charlen(value)
            })
            .max()
            .unwrap_or_default();

        Kpiprinter {
            charset: &self.charset,
            headline,
            top_products,
            alignment_charlen,
        }
    }
}

impl Kpiprinter<'_> {
    fn draw(&self, w: &mut impl std::fmt::Write, label: &str, value: &str) -> std::fmt::Result {
        let dash_count = self.alignment_charlen
            - charlen(label)
            - base::util::BOUNDING_SPACES_COUNT
            - charlen(value);
        w.write_str(label)?;
        w.write_char(' ')?;
        for _ in 0..dash_count {
            w.write_char(self.charset.dash)?;
        }
        w.write_char(' ')?;
        writeln!(w, "{}", value)
    }
}

impl std::fmt::Display for Kpiprinter<'_> {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (label, value) in &self.headline {
            self.draw(f, label, value)?;
        }
        if !self.top_products.is_empty() {
            writeln!(f)?;
            writeln!(f, "Top Products by Sales")?;
            for (label, value) in &self.top_products {
                self.draw(f, label, value)?;
            }
        }
        Ok(())
    }
}
