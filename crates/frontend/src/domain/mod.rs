pub mod product_type;
pub mod production;
