//! Unit tests for the ebver CLI
//!
//! These tests use mocked ports or a stub HTTP listener on localhost and
//! never reach a real AWS endpoint.

mod architecture;
mod check_command;
