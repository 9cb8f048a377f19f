pub mod error;
pub mod keyed;
pub mod options;
pub mod typed;
