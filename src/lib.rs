pub mod app;
pub mod cli;
pub mod config;
pub mod dom;
pub mod filter;
pub mod loader;
pub mod menu;
pub mod output;
pub mod page;
pub mod render;
pub mod runner;

#[cfg(test)]
mod tests;
