//! The root module for the style50 package when compiled as a library.
//! This module mainly holds the declarations of this package's other modules.
//!
//! The python binding lives in the `style50-py` crate, and it is exposed in python
//! as `style50.run` in the python path.

// project specific modules/crates
pub mod cli;
pub mod config;
pub mod error;
pub mod linter;
pub mod logger;
pub mod run;
