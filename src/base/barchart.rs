use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::base;

/// Horizontal bar chart with one labeled bar per row.
pub struct Barchart<'a> {
    charset: &'a base::Charset,
    currency_symbol: &'a str,
    rows: &'a [(String, Decimal)],
    label_charlen: usize,
    max_val: Decimal,
    max_barlen: usize,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub currency_symbol: String,
    pub term_width: usize,
    /// Drawn top to bottom in this order.
    pub rows: Vec<(String, Decimal)>,
}

impl Config {
    pub fn to_barchart(&'_ self) -> Barchart<'_> {
        let label_charlen = self
            .rows
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or_default();
        let max_val = self
            .rows
            .iter()
            .map(|&(_, v)| v.abs())
            .max()
            .unwrap_or_default();
        let max_barlen = self
            .term_width
            .max(base::util::MIN_TERM_WIDTH)
            .saturating_sub(label_charlen)
            .saturating_sub(base::util::BOUNDING_SPACES_COUNT)
            .saturating_sub(1) // axis
            .saturating_sub(
                self.currency_symbol.chars().count() + base::Cents::from(max_val).charlen(),
            );

        Barchart {
            charset: &self.charset,
            currency_symbol: &self.currency_symbol,
            rows: &self.rows,
            label_charlen,
            max_val,
            max_barlen,
        }
    }
}

impl Barchart<'_> {
    fn barlen(&self, val: Decimal) -> usize {
        if self.max_val.is_zero() {
            return 0;
        }
        let ratio = (val.abs() / self.max_val).to_f64().unwrap_or_default();
        let x = ratio * (self.max_barlen as f64);
        self.max_barlen.min(x.round() as usize)
    }

    fn draw(
        &self,
        w: &mut impl std::fmt::Write,
        (label, val): &(String, Decimal),
    ) -> std::fmt::Result {
        write!(
            w,
            "{:<width$} {}",
            label,
            self.charset.chart_axis,
            width = self.label_charlen
        )?;
        let barlen = self.barlen(*val);
        if barlen > 0 {
            let mut bars = self.charset.chart_bar.to_string().repeat(barlen);
            if self.charset.color {
                bars = colored::Colorize::green(bars.as_str()).to_string();
            }
            w.write_str(&bars)?;
            w.write_char(' ')?;
        }
        writeln!(w, "{}{}", self.currency_symbol, base::Cents::from(*val))
    }
}

impl std::fmt::Display for Barchart<'_> {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.rows.iter().try_for_each(|row| self.draw(f, row))
    }
}
