//! Modernize AI agent code written with Semantic Kernel or AutoGen to
//! Microsoft Agent Framework.
//!
//! The core is three pure operations: [`analysis::classify`] detects the
//! source framework and its idioms, [`render::generate_modernized_code`]
//! renders a replacement listing, and [`guides::get_migration_guide`]
//! returns a static migration guide. [`mcp`] and [`api`] expose them as
//! tools over MCP and REST.

pub mod analysis;
pub mod api;
pub mod config;
pub mod framework;
pub mod guides;
pub mod mcp;
pub mod render;
pub mod tools;
