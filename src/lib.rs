pub mod app;
pub mod cache;
pub mod cli;
pub mod config;
pub mod output;
pub mod paging;
pub mod utils;
pub mod window;

pub use window::{compute_pagination_window, PageButton, WindowError};

#[cfg(test)]
mod tests;
