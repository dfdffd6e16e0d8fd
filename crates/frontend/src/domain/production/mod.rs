pub mod edit;
pub mod total;

pub use edit::edit_production;
pub use total::calculate_total;
