//! Scaffolds Python bot projects: asks a few questions, writes a
//! `requirements.txt`, a `main.py` and a `README.md`, then installs the
//! dependencies.

pub mod answers;
pub mod args;
pub mod case;
pub mod install;
pub mod log;
pub mod scaffold;
pub mod template;
