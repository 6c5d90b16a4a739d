use crate::base;

/// Categorical column that sales can be grouped on.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::Display,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Dimension {
    Product,
    Category,
    Region,
    Month,
}

impl Dimension {
    /// The source column holding this dimension's values.
    pub fn field(self) -> base::Field {
        match self {
            Self::Product => base::Field::Product,
            Self::Category => base::Field::Category,
            Self::Region => base::Field::Region,
            Self::Month => base::Field::OrderMonth,
        }
    }
}
