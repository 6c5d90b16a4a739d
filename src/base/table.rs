use crate::base;

/// Source columns the pipeline interprets.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
)]
pub enum Field {
    #[strum(to_string = "OrderID", serialize = "Order ID")]
    OrderId,
    #[strum(to_string = "OrderDate", serialize = "Order Date")]
    OrderDate,
    Product,
    Category,
    Region,
    Sales,
    #[strum(to_string = "order_month")]
    OrderMonth,
}

impl Field {
    /// Columns a source must provide.
    pub const REQUIRED: [Self; 6] = [
        Self::OrderId,
        Self::OrderDate,
        Self::Product,
        Self::Category,
        Self::Region,
        Self::Sales,
    ];
}

/// What a table column holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Field(Field),
    /// Index into [`base::Record::extra`].
    Extra(usize),
}

/// Column layout of a table: header text paired with what each column holds,
/// in source order. The month bucket column is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columns(Vec<(String, Column)>);

impl Default for Columns {
    /// The required columns followed by the month bucket, named canonically.
    fn default() -> Self {
        Self(
            <Field as strum::IntoEnumIterator>::iter()
                .map(|f| (f.to_string(), Column::Field(f)))
                .collect(),
        )
    }
}

impl Columns {
    pub fn new(columns: Vec<(String, Column)>) -> Self {
        Self(columns)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Column)> {
        self.0.iter().map(|(name, col)| (name.as_str(), *col))
    }

    /// Returns the header text used for `field`, falling back to its canonical
    /// name.
    pub fn name_of(&self, field: Field) -> std::borrow::Cow<'_, str> {
        self.iter()
            .find(|&(_, col)| col == Column::Field(field))
            .map(|(name, _)| name.into())
            .unwrap_or_else(|| field.to_string().into())
    }
}

/// Distinct values available for filtering, with the dates the data spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    pub dates: base::Interval,
    pub regions: Vec<String>,
    pub categories: Vec<String>,
}

/// In-memory sales table. Row order is the source order. Filtered views are
/// tables too, sharing the column layout of the table they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: std::sync::Arc<Columns>,
    records: Vec<base::Record>,
}

impl Default for Table {
    fn default() -> Self {
        Self::new(Columns::default(), Vec::new())
    }
}

impl Table {
    pub fn new(columns: Columns, records: Vec<base::Record>) -> Self {
        Self {
            columns: std::sync::Arc::new(columns),
            records,
        }
    }

    pub fn columns(&self) -> &Columns {
        &self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &base::Record> {
        self.records.iter()
    }

    /// Returns a new table with the same columns holding the records that
    /// satisfy `pred`, in their original order.
    pub fn select<P>(&self, mut pred: P) -> Self
    where
        P: FnMut(&base::Record) -> bool,
    {
        Self {
            columns: self.columns.clone(),
            records: self.records.iter().filter(|r| pred(r)).cloned().collect(),
        }
    }

    pub fn spanned_interval(&self) -> base::Interval {
        self.iter().fold(base::Interval::EMPTY, |acc, r| base::Interval {
            start: acc.start.min(r.date()),
            end: acc.end.max(r.date()),
        })
    }

    pub fn options(&self) -> FilterOptions {
        let distinct = |dim: base::Dimension| {
            let mut v = self.iter().map(|r| r.key(dim)).collect::<Vec<_>>();
            v.sort_unstable();
            v.dedup();
            v.into_iter().map(String::from).collect::<Vec<_>>()
        };
        FilterOptions {
            dates: self.spanned_interval(),
            regions: distinct(base::Dimension::Region),
            categories: distinct(base::Dimension::Category),
        }
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a base::Record;
    type IntoIter = std::slice::Iter<'a, base::Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl std::str::FromStr for Table {
    type Err = base::LoadError;

    /// Parses CSV text with a header row.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        base::load_from_reader(s.as_bytes())
    }
}

impl TryFrom<&str> for Table {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
