/// A date type without time or timezone information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date(time::Date);

impl Date {
    pub const MIN: Self = Self(time::Date::MIN);

    pub const MAX: Self = Self(time::Date::MAX);

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u8 {
        self.0.month().into()
    }

    pub fn day(self) -> u8 {
        self.0.day()
    }

    pub fn from_ymd(year: i32, month: u8, day: u8) -> Option<Self> {
        let month = time::Month::try_from(month).ok()?;
        time::Date::from_calendar_date(year, month, day)
            .ok()
            .map(Self)
    }

    /// Returns the calendar month containing this date, formatted as
    /// `yyyy-mm`. Used as the bucket key for monthly aggregation.
    pub fn month_key(self) -> String {
        format!("{:04}-{:02}", self.year(), self.month())
    }

    pub fn last_of_month(self) -> Self {
        let (y, m) = (self.year(), self.month());
        Self::from_ymd(
            y,
            m,
            if m == 2 && y % 4 == 0 && (y % 100 != 0 || y % 400 == 0) {
                29
            } else {
                [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31][m as usize]
            },
        )
        .expect("final day of month should be computed correctly")
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,
    #[error(transparent)]
    BadFormat(#[from] time::error::Parse),
}

impl std::str::FromStr for Date {
    type Err = ParseError;

    /// Parses a string to a date. Inputs must be in one of the following formats:
    /// - `yyyy-mm-dd`, optionally followed by a time part separated by `T` or
    ///   a space, which is ignored
    /// - `m/d/yyyy`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Self::Err::Empty);
        }
        if s.contains('/') {
            let fmt = time::macros::format_description!(
                "[month padding:none]/[day padding:none]/[year]"
            );
            return Ok(Self(time::Date::parse(s, fmt)?));
        }
        let date_part = match s.find(['T', ' ']) {
            Some(i) => &s[..i],
            None => s,
        };
        let fmt = time::macros::format_description!("[year]-[month]-[day]");
        Ok(Self(time::Date::parse(date_part, fmt)?))
    }
}

impl TryFrom<&str> for Date {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("2015-03-30", Date::from_ymd(2015, 3, 30).unwrap())]
    #[case("1900-01-01", Date::from_ymd(1900, 1, 1).unwrap())]
    #[case("9999-12-31", Date::from_ymd(9999, 12, 31).unwrap())]
    fn test_iso8601_conv(#[case] s: &str, #[case] dt: Date) {
        assert_eq!(s.parse::<Date>().unwrap(), dt);
        assert_eq!(dt.to_string(), s);
    }

    #[rstest]
    #[case("2024-01-05", Date::from_ymd(2024, 1, 5))]
    #[case(" 2024-01-05 ", Date::from_ymd(2024, 1, 5))]
    #[case("2024-01-05 00:00:00", Date::from_ymd(2024, 1, 5))]
    #[case("2024-01-05T13:45:00Z", Date::from_ymd(2024, 1, 5))]
    #[case("1/5/2024", Date::from_ymd(2024, 1, 5))]
    #[case("12/31/2023", Date::from_ymd(2023, 12, 31))]
    #[case("", None)]
    #[case("2024-13-01", None)]
    #[case("2023-02-29", None)]
    #[case("2024/01/05", None)]
    #[case("05.01.2024", None)]
    #[case("yesterday", None)]
    fn test_from_str(#[case] s: &str, #[case] want: Option<Date>) {
        assert_eq!(s.parse::<Date>().ok(), want)
    }

    #[rstest]
    #[case("2024-01-05", "2024-01")]
    #[case("2024-12-31", "2024-12")]
    #[case("0987-03-01", "0987-03")]
    fn test_month_key(#[case] dt: Date, #[case] want: &str) {
        assert_eq!(dt.month_key(), want);
    }

    #[rstest]
    #[case("2015-03-30", "2015-03-31")]
    #[case("1700-02-15", "1700-02-28")]
    #[case("1704-02-15", "1704-02-29")]
    #[case("2000-02-15", "2000-02-29")]
    #[case("2001-02-15", "2001-02-28")]
    #[case("3000-04-15", "3000-04-30")]
    #[case("3000-12-15", "3000-12-31")]
    fn test_last_of_month(#[case] dt: Date, #[case] last: Date) {
        assert_eq!(dt.last_of_month(), last);
    }
}
