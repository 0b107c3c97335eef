/// Currency every transaction is reported in
pub const REPORTING_CURRENCY: &str = "EUR";

/// Decimal precision for converted amounts and totals
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
