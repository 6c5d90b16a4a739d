use crate::base;

/// The user's current selection. Immutable once built; each interaction
/// builds a fresh one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    interval: base::Interval,
    regions: std::collections::BTreeSet<String>,
    categories: std::collections::BTreeSet<String>,
}

impl FilterState {
    pub fn new<R, C>(interval: base::Interval, regions: R, categories: C) -> Self
    where
        R: IntoIterator,
        R::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            interval,
            regions: regions.into_iter().map(Into::into).collect(),
            categories: categories.into_iter().map(Into::into).collect(),
        }
    }

    /// Selects everything in `table`: its full date span and every region and
    /// category it contains.
    pub fn all(table: &base::Table) -> Self {
        let options = table.options();
        Self::new(options.dates, options.regions, options.categories)
    }

    pub fn with_interval(self, interval: base::Interval) -> Self {
        Self { interval, ..self }
    }

    pub fn with_regions<I>(self, regions: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            regions: regions.into_iter().map(Into::into).collect(),
            ..self
        }
    }

    pub fn with_categories<I>(self, categories: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
            ..self
        }
    }

    pub fn matches(&self, r: &base::Record) -> bool {
        self.interval.contains(r.date())
            && self.regions.contains(r.region())
            && self.categories.contains(r.category())
    }
}

/// Returns the records of `table` matching `state`, in their original order.
/// Empty region or category selections and inverted date ranges match
/// nothing.
pub fn filter(table: &base::Table, state: &FilterState) -> base::Table {
    let view = table.select(|r| state.matches(r));
    tracing::debug!(
        interval = %state.interval,
        rows = table.len(),
        kept = view.len(),
        "applied filter"
    );
    view
}
