use crate::base;

/// Interval defined by the inclusive bound of two dates. If `start` is greater
/// than `end`, the interval is considered empty. All empty intervals are
/// equivalent.
#[derive(Debug, Clone, Copy, Eq)]
pub struct Interval {
    pub start: base::Date,
    pub end: base::Date,
}

impl PartialEq for Interval {
    fn eq(&self, other: &Self) -> bool {
        self.is_empty() && other.is_empty() || self.start == other.start && self.end == other.end
    }
}

impl std::hash::Hash for Interval {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        let interval = if self.is_empty() { Self::EMPTY } else { *self };
        interval.start.hash(state);
        interval.end.hash(state);
    }
}

impl Interval {
    pub const EMPTY: Self = Self {
        start: base::Date::MAX,
        end: base::Date::MIN,
    };

    pub fn is_empty(self) -> bool {
        self.start > self.end
    }

    pub fn contains(self, dt: base::Date) -> bool {
        self.start <= dt && dt <= self.end
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Date(#[from] base::date::ParseError),
    #[error("invalid left side")]
    Left(#[source] base::date::ParseError),
    #[error("invalid right side")]
    Right(#[source] base::date::ParseError),
}

/// Parses `yyyy-mm` into the first and last day of that month.
fn parse_month(s: &str) -> Option<(base::Date, base::Date)> {
    let (y, m) = s.split_once('-')?;
    if y.len() != 4 || m.len() != 2 {
        return None;
    }
    let first = base::Date::from_ymd(y.parse().ok()?, m.parse().ok()?, 1)?;
    Some((first, first.last_of_month()))
}

impl std::str::FromStr for Interval {
    type Err = ParseError;

    /// Accepts `A:B`, where either side may be omitted and each side is a
    /// date or a `yyyy-mm` month, or a single date or month.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = match s.split_once(':') {
            Some((left, right)) => (
                if left.is_empty() {
                    base::Date::MIN
                } else if let Some((first, _)) = parse_month(left) {
                    first
                } else {
                    left.parse::<base::Date>().map_err(Self::Err::Left)?
                },
                if right.is_empty() {
                    base::Date::MAX
                } else if let Some((_, last)) = parse_month(right) {
                    last
                } else {
                    right.parse::<base::Date>().map_err(Self::Err::Right)?
                },
            ),
            None => match parse_month(s) {
                Some(bounds) => bounds,
                None => {
                    let dt = s.parse::<base::Date>()?;
                    (dt, dt)
                }
            },
        };
        Ok(Self { start, end })
    }
}

impl TryFrom<&str> for Interval {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2015-03-30:2015-03-30", "2015-03-30", "2015-03-30")]
    #[case("2015-03-30:2020-03-30", "2015-03-30", "2020-03-30")]
    #[case("2015-03-30", "2015-03-30", "2015-03-30")]
    #[case("2024-02", "2024-02-01", "2024-02-29")]
    #[case("2024-01:2024-03", "2024-01-01", "2024-03-31")]
    #[case("2024-01:2024-03-15", "2024-01-01", "2024-03-15")]
    #[case(":2015-04-03", base::Date::MIN, "2015-04-03")]
    #[case("2015-03-20:", "2015-03-20", base::Date::MAX)]
    #[case(":", base::Date::MIN, base::Date::MAX)]
    fn test_from_str(#[case] s: &str, #[case] start: base::Date, #[case] end: base::Date) {
        assert_eq!(s.parse::<Interval>().unwrap(), Interval { start, end })
    }

    #[rstest]
    #[case("")]
    #[case(":a")]
    #[case("a")]
    #[case("a:2015-03-30")]
    #[case("2024-13")]
    #[case("12345-01-01")]
    #[case("12345-01-01:")]
    fn test_from_str_failing(#[case] s: &str) {
        assert!(s.parse::<Interval>().is_err())
    }

    #[rstest]
    #[case(":", "2015-03-30", true)]
    #[case("2015-03-30", "2015-03-30", true)]
    #[case("2015-03-01:2015-03-29", "2015-03-30", false)]
    #[case("2015-03-31:2015-04-29", "2015-03-30", false)]
    #[case("2015-04-01:2015-03-01", "2015-03-15", false)]
    fn test_contains(#[case] interval: Interval, #[case] dt: base::Date, #[case] want: bool) {
        assert_eq!(interval.contains(dt), want);
    }
}
