//! Domain types describing the records managed by the console.

pub mod types;

pub mod entity;
pub mod listing;

pub mod careers;
pub mod catalog;
pub mod content;
pub mod partners;
pub mod srm;
