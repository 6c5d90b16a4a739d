use crate::base;

/// Sheet names paired with their cells rendered as text, in workbook order.
type Sheets = Vec<(String, Vec<Vec<String>>)>;

/// The expected or actual contents of a working directory. Unset fields
/// correspond to nonexistent files.
#[derive(Debug, PartialEq, Default)]
pub struct State {
    config: Option<base::Config>,
    data: Option<String>,
    /// Workbooks in the directory, keyed by file name.
    reports: std::collections::BTreeMap<String, Sheets>,
}

fn data_path(fs: &base::Fs) -> std::path::PathBuf {
    fs.resolve(base::Config::default().data_path)
}

fn cell_text(cell: &calamine::Data) -> String {
    match cell {
        calamine::Data::Empty => String::new(),
        calamine::Data::String(s) => s.clone(),
        calamine::Data::Float(f) => f.to_string(),
        calamine::Data::Int(i) => i.to_string(),
        calamine::Data::DateTime(dt) => dt.as_f64().to_string(),
        other => format!("{:?}", other),
    }
}

fn read_report(path: &std::path::Path) -> Sheets {
    use calamine::Reader;

    let mut wb: calamine::Xlsx<_> = calamine::open_workbook(path).unwrap();
    wb.sheet_names()
        .into_iter()
        .map(|name| {
            let range = wb.worksheet_range(&name).unwrap();
            let rows = range
                .rows()
                .map(|row| row.iter().map(cell_text).collect())
                .collect();
            (name, rows)
        })
        .collect()
}

impl State {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory's [`base::Config`].
    pub fn with_config<T>(mut self, config: T) -> Self
    where
        T: TryInto<base::Config> + std::fmt::Debug,
        <T as TryInto<base::Config>>::Error: std::fmt::Debug,
    {
        self.config = Some(config.try_into().unwrap());
        self
    }

    /// Sets the contents of the sales CSV at the default data path.
    pub fn with_data(mut self, s: &str) -> Self {
        self.data = Some(s.to_string());
        self
    }

    /// Sets the sheets of the workbook at the default report path.
    pub fn with_report(self, sheets: &[(&str, &[&[&str]])]) -> Self {
        self.with_report_at(base::FILE_NAME, sheets)
    }

    /// Sets the sheets of the workbook named `file_name` in the directory.
    pub fn with_report_at(mut self, file_name: &str, sheets: &[(&str, &[&[&str]])]) -> Self {
        let sheets = sheets
            .iter()
            .map(|(name, rows)| {
                let rows = rows
                    .iter()
                    .map(|row| row.iter().map(|s| s.to_string()).collect())
                    .collect();
                (name.to_string(), rows)
            })
            .collect();
        self.reports.insert(file_name.to_string(), sheets);
        self
    }

    /// Reads the directory's files from `fs`.
    pub fn from_fs(fs: &base::Fs) -> Self {
        let config = fs
            .path::<base::Config>()
            .exists()
            .then(|| fs.read::<base::Config>().unwrap());
        let data = data_path(fs);
        let reports = std::fs::read_dir(fs.dir())
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "xlsx"))
            .map(|path| {
                let name = path.file_name().unwrap().to_string_lossy().into_owned();
                (name, read_report(&path))
            })
            .collect();
        Self {
            config,
            data: data
                .exists()
                .then(|| std::fs::read_to_string(&data).unwrap()),
            reports,
        }
    }
}

/// Representation of a working directory's file contents. Unset fields
/// correspond to nonexistent files.
#[derive(Default)]
pub struct StrState<'a> {
    config: Option<&'a str>,
    data: Option<&'a str>,
}

impl<'a> StrState<'a> {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the [`base::Config`] file contents.
    pub fn with_config(mut self, s: &'a str) -> Self {
        self.config = Some(s);
        self
    }

    /// Sets the contents of the sales CSV at the default data path. The text
    /// is written verbatim and may be malformed.
    pub fn with_data(mut self, s: &'a str) -> Self {
        self.data = Some(s);
        self
    }

    /// Writes string contents verbatim to `fs`. Panics if the config is not a
    /// valid serialization.
    pub fn to_fs(&self, fs: &base::Fs) {
        if let Some(s) = self.config {
            let obj = s.parse::<base::Config>();
            assert!(obj.is_ok(), "{:?}", obj);
            std::fs::write(fs.path::<base::Config>(), s).unwrap();
        }
        if let Some(s) = self.data {
            let path = data_path(fs);
            if let Some(dir) = path.parent() {
                std::fs::create_dir_all(dir).unwrap();
            }
            std::fs::write(path, s).unwrap();
        }
    }

    pub fn to_state(&self) -> State {
        let mut os = State::new();
        if let Some(s) = self.config {
            os = os.with_config(s);
        }
        if let Some(s) = self.data {
            os = os.with_data(s);
        }
        os
    }
}
