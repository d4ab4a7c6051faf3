//! Per-feature evaluators.
//!
//! Each evaluator is a total function of the rule tables plus either the
//! reference time or the question text, and returns its answers in display
//! order with its tips last.

pub mod assistance;
pub mod greetings;
pub mod helpers;
pub mod messages;
pub mod parking;
pub mod snacks;

#[cfg(test)]
mod tests;
