//! menutree library exports

pub mod core;
pub mod demo;
pub mod tui;

#[cfg(test)]
pub mod test_support;
