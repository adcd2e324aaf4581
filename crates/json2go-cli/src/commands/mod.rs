pub mod check;
pub mod generate;
pub mod input;

#[cfg(test)]
mod commands_tests;
