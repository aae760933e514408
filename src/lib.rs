/// Handles argument parsing and scaffold run orchestration.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Enumerated user choices and their validation.
pub mod choices;

/// Narrow interface for invoking external commands.
pub mod command;

/// Template tree materialization and placeholder substitution.
pub mod templates;

/// Package manifest field merging.
pub mod manifest;

/// Social login secret collection and env file generation.
pub mod auth;

/// Django backend scaffolding steps.
pub mod backend;

/// React frontend scaffolding steps.
pub mod frontend;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Constants used throughout the application.
pub mod constants;
