pub mod alerts;
pub mod bootstrap;
pub mod currency;
pub mod dom;
pub mod error;
pub mod export;
pub mod globals;
pub mod messages;
pub mod number_format;
pub mod number_inputs;
pub mod style;
