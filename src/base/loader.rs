use rust_decimal::Decimal;

use crate::base;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("invalid date '{value}' at line {line}")]
    InvalidDate {
        line: u64,
        value: String,
        source: base::date::ParseError,
    },
    #[error("invalid sales amount '{value}' at line {line}")]
    InvalidSales { line: u64, value: String },
    #[error("negative sales amount at line {line}")]
    NegativeSales { line: u64 },
}

/// Parses a sales amount at full precision. Comma thousands separators and
/// scientific notation are accepted.
fn parse_sales(s: &str) -> Option<Decimal> {
    let s = s.replace(',', "");
    if s.contains(['e', 'E']) {
        Decimal::from_scientific(&s).ok()
    } else {
        s.parse::<Decimal>().ok()
    }
}

/// Where each interpreted field sits in a source row.
struct Positions {
    order_id: usize,
    date: usize,
    product: usize,
    category: usize,
    region: usize,
    sales: usize,
    month: Option<usize>,
    extra: Vec<usize>,
}

impl Positions {
    /// Matches header names to fields. The first column matching a field wins;
    /// later duplicates and unknown columns are carried as extras.
    fn from_headers(headers: &csv::StringRecord) -> Result<(base::Columns, Self), LoadError> {
        let mut found = std::collections::HashMap::<base::Field, usize>::new();
        let mut columns = Vec::with_capacity(headers.len() + 1);
        let mut extra = Vec::new();
        for (i, name) in headers.iter().enumerate() {
            let column = match name.parse::<base::Field>() {
                Ok(field) if !found.contains_key(&field) => {
                    found.insert(field, i);
                    base::Column::Field(field)
                }
                _ => {
                    extra.push(i);
                    base::Column::Extra(extra.len() - 1)
                }
            };
            columns.push((name.to_string(), column));
        }

        let missing = base::Field::REQUIRED
            .iter()
            .filter(|f| !found.contains_key(f))
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        if !missing.is_empty() {
            return Err(LoadError::MissingColumns(missing));
        }

        let month = found.get(&base::Field::OrderMonth).copied();
        if month.is_none() {
            columns.push((
                base::Field::OrderMonth.to_string(),
                base::Column::Field(base::Field::OrderMonth),
            ));
        }
        let pos = |f: base::Field| found[&f];
        let positions = Self {
            order_id: pos(base::Field::OrderId),
            date: pos(base::Field::OrderDate),
            product: pos(base::Field::Product),
            category: pos(base::Field::Category),
            region: pos(base::Field::Region),
            sales: pos(base::Field::Sales),
            month,
            extra,
        };
        Ok((base::Columns::new(columns), positions))
    }

    fn parse(&self, row: &csv::StringRecord, line: u64) -> Result<base::Record, LoadError> {
        let cell = |i: usize| row.get(i).unwrap_or_default();

        let raw_date = cell(self.date);
        let date = raw_date
            .parse::<base::Date>()
            .map_err(|source| LoadError::InvalidDate {
                line,
                value: raw_date.to_string(),
                source,
            })?;
        let raw_sales = cell(self.sales);
        let sales = parse_sales(raw_sales).ok_or_else(|| LoadError::InvalidSales {
            line,
            value: raw_sales.to_string(),
        })?;
        if sales < Decimal::ZERO {
            return Err(LoadError::NegativeSales { line });
        }

        let mut r = base::Record::new(
            cell(self.order_id),
            date,
            cell(self.product),
            cell(self.category),
            cell(self.region),
            sales,
        );
        // An empty cell in a provided month column falls back to the derived
        // bucket.
        if let Some(month) = self.month.map(cell).filter(|s| !s.is_empty()) {
            r = r.with_month(month);
        }
        if !self.extra.is_empty() {
            r = r.with_extra(self.extra.iter().map(|&i| cell(i).to_string()).collect());
        }
        Ok(r)
    }
}

/// Reads a CSV sales table with a header row from `reader`.
pub fn load_from_reader<R>(reader: R) -> Result<base::Table, LoadError>
where
    R: std::io::Read,
{
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = rdr.headers()?.clone();
    let (columns, positions) = Positions::from_headers(&headers)?;

    let mut records = Vec::new();
    for (i, row) in rdr.records().enumerate() {
        let row = row?;
        // Header is line 1.
        let line = row.position().map_or(i as u64 + 2, csv::Position::line);
        records.push(positions.parse(&row, line)?);
    }
    Ok(base::Table::new(columns, records))
}

/// Reads a CSV sales table from the file at `path`.
pub fn load<P>(path: P) -> Result<base::Table, LoadError>
where
    P: AsRef<std::path::Path>,
{
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let table = load_from_reader(std::io::BufReader::new(file))?;
    tracing::info!(path = %path.display(), rows = table.len(), "loaded sales table");
    Ok(table)
}
