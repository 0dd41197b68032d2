/* ************************************************************************ **
** This file is part of qecell, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;
use crate::config::YamlRead;
use crate::ui::logging::GlobalLogger;

use clap::{App, Arg, ArgMatches};
use path_abs::PathFile;
use qecell_lattice::Settings;

/// A group of command line arguments that knows how to add itself to a clap `App`
/// and how to read itself back out of the matches.
///
/// Groups combine as tuples, so that a binary can write
///
/// ```ignore
/// let (app, de) = CliDeserialize::augment_clap_app(app);
/// let matches = app.get_matches();
/// let (LogArgs(logger), ConfigArgs(settings)) = de.resolve_args(&matches)?;
/// ```
pub trait CliDeserialize: Sized {
    fn augment_clap_app<'a, 'b>(app: App<'a, 'b>) -> (App<'a, 'b>, ClapDeserializer<Self>)
    {
        let app = Self::_augment_clap_app(app);
        (app, ClapDeserializer(Default::default()))
    }

    /// Don't use this. Call 'augment_clap_app' instead.
    fn _augment_clap_app<'a, 'b>(app: App<'a, 'b>) -> App<'a, 'b>;
    /// Don't use this. Call 'resolve_args' on the ClapDeserializer instead.
    fn _resolve_args(matches: &ArgMatches<'_>) -> FailResult<Self>;
}

/// Returned by `augment_clap_app`; the only way to get at the arguments afterwards.
pub struct ClapDeserializer<A>(std::marker::PhantomData<A>);

impl<A: CliDeserialize> ClapDeserializer<A> {
    /// This may read files named by the arguments.
    pub fn resolve_args(self, matches: &ArgMatches<'_>) -> FailResult<A>
    { A::_resolve_args(matches) }
}

macro_rules! impl_tuple {
    ($($T:ident)+) => {
        impl<$($T: CliDeserialize),+> CliDeserialize for ($($T,)+) {
            fn _augment_clap_app<'a, 'b>(app: App<'a, 'b>) -> App<'a, 'b> {
                $( let app = $T::_augment_clap_app(app); )+
                app
            }

            fn _resolve_args(matches: &ArgMatches<'_>) -> FailResult<Self>
            { Ok(($($T::_resolve_args(matches)?,)+)) }
        }
    };
}

impl_tuple!{ A }
impl_tuple!{ A B }
impl_tuple!{ A B C }

//--------------------------------------------------------------------------

/// `-v` and `--log`.
pub struct LogArgs(pub GlobalLogger);

impl CliDeserialize for LogArgs {
    fn _augment_clap_app<'a, 'b>(app: App<'a, 'b>) -> App<'a, 'b> {
        app.args(&[
            Arg::with_name("verbose")
                .short("v").long("verbose").multiple(true)
                .help("show more log output (may be repeated)"),
            Arg::with_name("log")
                .long("log").takes_value(true).value_name("LOGFILE")
                .help("also write the log to this file"),
        ])
    }

    fn _resolve_args(m: &ArgMatches<'_>) -> FailResult<Self> {
        let mut logger = GlobalLogger::default();
        logger.verbosity(m.occurrences_of("verbose"));
        if let Some(path) = m.value_of("log") {
            logger.path(path);
        }
        Ok(LogArgs(logger))
    }
}

/// `--config`, for the numerical settings.
pub struct ConfigArgs(pub Settings);

impl CliDeserialize for ConfigArgs {
    fn _augment_clap_app<'a, 'b>(app: App<'a, 'b>) -> App<'a, 'b> {
        app.args(&[
            Arg::with_name("config")
                .short("c").long("config").takes_value(true).value_name("CONFIG")
                .help("\
                    settings yaml, with any of the keys 'classify-digits', \
                    'compare-digits' and 'report-digits'\
                "),
        ])
    }

    fn _resolve_args(m: &ArgMatches<'_>) -> FailResult<Self> {
        let settings = match m.value_of("config") {
            Some(path) => Settings::from_reader(PathFile::new(path)?.open_read()?)?,
            None => Settings::default(),
        };
        settings.validate()?;
        Ok(ConfigArgs(settings))
    }
}
