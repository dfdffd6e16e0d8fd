pub mod api;
pub mod delete;

pub use delete::delete_product;
