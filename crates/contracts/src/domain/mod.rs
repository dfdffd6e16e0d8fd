pub mod product_type;
