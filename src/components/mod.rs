//! Reusable building blocks of the console pages. Each component turns
//! plain input into a serialisable view the templates draw as-is.

pub mod nav;
pub mod table;
pub mod tags;
