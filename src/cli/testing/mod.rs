mod case;
mod resultmatcher;
mod state;

pub use case::Case;
pub use case::Invocation;
pub use case::MutCase;
pub(crate) use case::generate_testcases;
pub use resultmatcher::ResultMatcher;
pub use state::State;
pub use state::StrState;

/// Two orders over two months, three line items.
pub const SCENARIO: &str = "\
OrderID,OrderDate,Product,Category,Region,Sales
O1,2024-01-05,WidgetA,Cat1,East,100
O1,2024-01-05,WidgetB,Cat1,East,50
O2,2024-02-10,WidgetA,Cat1,West,200
";
