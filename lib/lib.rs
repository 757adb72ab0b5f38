/// Checkers domain types and rules.
pub mod checkers;
