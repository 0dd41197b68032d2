/* ************************************************************************ **
** This file is part of qecell, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Binaries of qecell, and the glue between them and `qecell-lattice`.

#[macro_use] extern crate failure;
#[macro_use] extern crate serde_derive;
#[macro_use] extern crate log;

#[cfg(test)]
#[macro_use] extern crate pretty_assertions;

pub type FailResult<T> = Result<T, failure::Error>;

#[macro_use]
mod config;
mod cmd;
mod ui {
    pub mod cli_deserialize;
    pub mod logging;
}

pub mod entry_points;

pub use crate::config::{YamlRead, Input};
pub use crate::cmd::{CellOutput, IbravOutput, run_ibrav, run_latgen};
