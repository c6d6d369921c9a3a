pub mod geo;
pub mod parse;
pub mod validate;
