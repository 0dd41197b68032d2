/* ************************************************************************ **
** This file is part of qecell, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::cell::RefCell;
use std::fmt;

use log::Level;

/// Where the library sends messages that are not errors in their own right.
///
/// Functions that take a sink never install or configure a logger.
pub trait Diagnostics {
    fn report(&self, level: Level, args: fmt::Arguments<'_>);

    fn error(&self, args: fmt::Arguments<'_>) { self.report(Level::Error, args) }
    fn warn(&self, args: fmt::Arguments<'_>) { self.report(Level::Warn, args) }
    fn info(&self, args: fmt::Arguments<'_>) { self.report(Level::Info, args) }
    fn debug(&self, args: fmt::Arguments<'_>) { self.report(Level::Debug, args) }
}

/// Forwards everything to the `log` facade.
#[derive(Debug, Copy, Clone)]
pub struct LogDiagnostics {
    pub target: &'static str,
}

impl LogDiagnostics {
    pub const DEFAULT_TARGET: &'static str = "qecell::lattice";
}

impl Default for LogDiagnostics {
    fn default() -> Self { LogDiagnostics { target: Self::DEFAULT_TARGET } }
}

impl Diagnostics for LogDiagnostics {
    fn report(&self, level: Level, args: fmt::Arguments<'_>)
    { log::log!(target: self.target, level, "{}", args) }
}

/// Keeps every message in memory.
#[derive(Debug, Default)]
pub struct Collector {
    messages: RefCell<Vec<(Level, String)>>,
}

impl Collector {
    pub fn new() -> Self { Default::default() }

    pub fn messages(&self) -> Vec<(Level, String)>
    { self.messages.borrow().clone() }

    /// Messages at `level` or more severe.
    pub fn at_least(&self, level: Level) -> Vec<String> {
        self.messages.borrow().iter()
            .filter(|&&(lvl, _)| lvl <= level)
            .map(|(_, msg)| msg.clone())
            .collect()
    }

    pub fn into_messages(self) -> Vec<(Level, String)>
    { self.messages.into_inner() }
}

impl Diagnostics for Collector {
    fn report(&self, level: Level, args: fmt::Arguments<'_>)
    { self.messages.borrow_mut().push((level, args.to_string())) }
}

/// Drops everything.
#[derive(Debug, Copy, Clone, Default)]
pub struct Silent;

impl Diagnostics for Silent {
    fn report(&self, _: Level, _: fmt::Arguments<'_>) {}
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    #[test]
    fn collector() {
        let diag = Collector::new();
        {
            let sink: &dyn Diagnostics = &diag;
            sink.info(format_args!("classified as {}", 14));
            sink.error(format_args!("mismatch"));
            sink.debug(format_args!("noise"));
        }
        assert_eq!(diag.at_least(Level::Warn), vec!["mismatch".to_string()]);
        assert_eq!(diag.at_least(Level::Info).len(), 2);
        assert_eq!(diag.into_messages()[0], (Level::Info, "classified as 14".to_string()));
    }

    #[test]
    fn silent_and_log_accept_anything() {
        Silent.warn(format_args!("{}", 1));
        LogDiagnostics::default().debug(format_args!("{}", 2));
        assert_eq!(LogDiagnostics::default().target, "qecell::lattice");
    }
}
