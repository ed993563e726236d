//! Currency module - supported currencies and display formatting.

mod currency_model;


pub use currency_model::{format_amount, parse_amount, Currency};
