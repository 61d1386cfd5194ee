//! Amur: scaffolding generator for Koa + Mongoose + GraphQL applications.
//!
//! The generation engine lives in [`generator`]. The CLI front end
//! (`cli`, `commands`) and the post-generation collaborators ([`post_gen`])
//! sit around it.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod generator;
pub mod git;
pub mod post_gen;

#[cfg(test)]
pub(crate) mod test_support;
