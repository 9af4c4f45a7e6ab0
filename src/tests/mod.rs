//! Test suite for the grid facade
//!
//! Tests are grouped by concern: core model behavior, iteration helpers,
//! kind views, script-shaped usage examples, end-to-end scenarios, and
//! property-based invariants.

#[cfg(test)]
mod integration;
#[cfg(test)]
mod property_tests;
