use rust_decimal::Decimal;

use crate::base;

/// A single sales line item. Several records may share an order id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    order_id: String,
    date: base::Date,
    product: String,
    category: String,
    region: String,
    sales: Decimal,
    month: String,
    extra: Vec<String>,
}

impl Record {
    /// Creates a record whose month bucket is derived from `date`.
    pub fn new(
        order_id: impl Into<String>,
        date: base::Date,
        product: impl Into<String>,
        category: impl Into<String>,
        region: impl Into<String>,
        sales: Decimal,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            date,
            product: product.into(),
            category: category.into(),
            region: region.into(),
            sales,
            month: date.month_key(),
            extra: Vec::new(),
        }
    }

    /// Replaces the month bucket with a value taken verbatim from the source.
    pub fn with_month(self, month: impl Into<String>) -> Self {
        Self {
            month: month.into(),
            ..self
        }
    }

    /// Sets values of source columns that the pipeline does not interpret.
    pub fn with_extra(self, extra: Vec<String>) -> Self {
        Self { extra, ..self }
    }

    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    pub fn date(&self) -> base::Date {
        self.date
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn sales(&self) -> Decimal {
        self.sales
    }

    pub fn month(&self) -> &str {
        &self.month
    }

    pub fn extra(&self) -> &[String] {
        &self.extra
    }

    /// Returns the value of the categorical column `dim`.
    pub fn key(&self, dim: base::Dimension) -> &str {
        match dim {
            base::Dimension::Product => self.product(),
            base::Dimension::Category => self.category(),
            base::Dimension::Region => self.region(),
            base::Dimension::Month => self.month(),
        }
    }
}
