use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::ExcelDateTime;
use rust_xlsxwriter::Format;
use rust_xlsxwriter::Workbook;
use rust_xlsxwriter::Worksheet;

use crate::base;

pub const MIME_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Suggested name for a saved report.
pub const FILE_NAME: &str = "sales_report.xlsx";

/// Report sheets, in workbook order.
pub const SHEET_NAMES: [&str; 4] = ["raw_data", "product_sales", "category_sales", "region_sales"];

const DATE_FORMAT: &str = "yyyy-mm-dd";
const SALES_FORMAT: &str = "#,##0.00";

#[derive(Debug, thiserror::Error)]
#[error("failed to build report: {0}")]
pub struct ExportError(#[from] rust_xlsxwriter::XlsxError);

struct Formats {
    header: Format,
    date: Format,
    sales: Format,
}

impl Formats {
    fn new() -> Self {
        Self {
            header: Format::new().set_bold(),
            date: Format::new().set_num_format(DATE_FORMAT),
            sales: Format::new().set_num_format(SALES_FORMAT),
        }
    }
}

/// Builds the report workbook for `view` and returns its bytes.
///
/// The first sheet holds the view's rows with all of its columns. The others
/// hold the sales roll-ups per product, category and region, each ordered by
/// key.
pub fn export(view: &base::Table) -> Result<Vec<u8>, ExportError> {
    let formats = Formats::new();
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet().set_name(SHEET_NAMES[0])?;
    write_raw_data(sheet, view, &formats)?;

    let dims = [
        base::Dimension::Product,
        base::Dimension::Category,
        base::Dimension::Region,
    ];
    for (name, dim) in SHEET_NAMES[1..].iter().zip(dims) {
        let sheet = workbook.add_worksheet().set_name(*name)?;
        write_rollup(sheet, view, dim, &formats)?;
    }

    let bytes = workbook.save_to_buffer()?;
    tracing::info!(rows = view.len(), bytes = bytes.len(), "built sales report");
    Ok(bytes)
}

fn number(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

fn write_header<'a, I>(sheet: &mut Worksheet, names: I, formats: &Formats) -> Result<(), ExportError>
where
    I: IntoIterator<Item = &'a str>,
{
    for (col, name) in names.into_iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, name, &formats.header)?;
    }
    sheet.set_freeze_panes(1, 0)?;
    Ok(())
}

fn write_raw_data(
    sheet: &mut Worksheet,
    view: &base::Table,
    formats: &Formats,
) -> Result<(), ExportError> {
    let columns = view.columns();
    write_header(sheet, columns.iter().map(|(name, _)| name), formats)?;

    for (i, record) in view.iter().enumerate() {
        let row = i as u32 + 1;
        for (j, (_, column)) in columns.iter().enumerate() {
            let col = j as u16;
            match column {
                base::Column::Field(base::Field::OrderId) => {
                    sheet.write_string(row, col, record.order_id())?;
                }
                base::Column::Field(base::Field::OrderDate) => {
                    write_date(sheet, row, col, record.date(), formats)?;
                }
                base::Column::Field(base::Field::Product) => {
                    sheet.write_string(row, col, record.product())?;
                }
                base::Column::Field(base::Field::Category) => {
                    sheet.write_string(row, col, record.category())?;
                }
                base::Column::Field(base::Field::Region) => {
                    sheet.write_string(row, col, record.region())?;
                }
                base::Column::Field(base::Field::Sales) => {
                    sheet.write_number_with_format(
                        row,
                        col,
                        number(record.sales()),
                        &formats.sales,
                    )?;
                }
                base::Column::Field(base::Field::OrderMonth) => {
                    sheet.write_string(row, col, record.month())?;
                }
                base::Column::Extra(k) => {
                    if let Some(value) = record.extra().get(k) {
                        sheet.write_string(row, col, value)?;
                    }
                }
            }
        }
    }
    Ok(())
}

/// Writes a real spreadsheet date where the format allows one, text otherwise.
fn write_date(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    date: base::Date,
    formats: &Formats,
) -> Result<(), ExportError> {
    let dt = u16::try_from(date.year())
        .ok()
        .and_then(|y| ExcelDateTime::from_ymd(y, date.month(), date.day()).ok());
    match dt {
        Some(dt) => sheet.write_datetime_with_format(row, col, &dt, &formats.date)?,
        None => sheet.write_string(row, col, date.to_string())?,
    };
    Ok(())
}

fn write_rollup(
    sheet: &mut Worksheet,
    view: &base::Table,
    dim: base::Dimension,
    formats: &Formats,
) -> Result<(), ExportError> {
    let columns = view.columns();
    let key_name = columns.name_of(dim.field());
    let sales_name = columns.name_of(base::Field::Sales);
    write_header(sheet, [&*key_name, &*sales_name], formats)?;

    for (i, (key, sales)) in base::group_by(view, dim).sorted_by_key().iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, key)?;
        sheet.write_number_with_format(row, 1, number(*sales), &formats.sales)?;
    }
    Ok(())
}
