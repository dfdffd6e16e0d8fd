pub mod alert_kind;
pub mod currency;
