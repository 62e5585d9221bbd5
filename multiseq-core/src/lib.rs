#[macro_use]
mod par;

pub mod analysis;
pub mod config;
pub mod error;
pub mod io;
pub mod report;
pub mod seq;
