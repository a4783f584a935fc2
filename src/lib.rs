//! Dynamic package versions for Python projects.
//!
//! Resolves a project's version at build time from one configured source:
//! the `__version__` literal in the package's `__init__.py`, the git tag on
//! HEAD, or a text file optionally narrowed by a regular expression. The
//! source is selected by the `[tool.poetry-version]` section of
//! `pyproject.toml`.

pub mod app;
pub mod config;
pub mod core;
pub mod plugin;
pub mod strategy;
