use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Directed edge of the rate graph: `1 from == rate to`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Rate {
    pub from: String,
    pub to: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub rate: Decimal,
}

impl Rate {
    pub fn new(from: impl Into<String>, to: impl Into<String>, rate: Decimal) -> Self {
        Rate {
            from: from.into(),
            to: to.into(),
            rate,
        }
    }
}
