/* ************************************************************************ **
** This file is part of qecell, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;
use crate::cmd;
use crate::config::{Input, YamlRead};
use crate::ui::cli_deserialize::{CliDeserialize, ConfigArgs, LogArgs};

use std::ffi::OsStr;
use std::io::Write;
use clap::{App, Arg};
use path_abs::PathFile;

fn wrap_result_main<F>(main: F)
where F: FnOnce() -> FailResult<()>,
{
    main().unwrap_or_else(|e| {
        for cause in e.iter_chain() {
            error!("{}", cause);
        }

        if std::env::var_os("RUST_BACKTRACE") == Some(OsStr::new("1").to_owned()) {
            error!("{}", e.backtrace());
        }
        std::process::exit(1);
    });
}

fn print_json<T: serde::Serialize>(value: &T) -> FailResult<()> {
    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

// -------------------------------------------------------------------------------------

pub fn qecell_ibrav() {
    wrap_result_main(|| {
        let (app, de) = CliDeserialize::augment_clap_app({
            App::new("qecell-ibrav")
                .about("Find the ibrav and celldm of a cell.")
                .args(&[
                    Arg::with_name("input").required(true).value_name("INPUT")
                        .help("yaml or json file with 'cell' and optionally 'bravais-index' and 'alt-axes'"),
                ])
        });
        let matches = app.get_matches();
        let (LogArgs(mut logger), ConfigArgs(settings)) = de.resolve_args(&matches)?;
        logger.apply()?;

        let input = match matches.value_of("input") {
            Some(path) => PathFile::new(path)?,
            None => bail!("missing INPUT"),
        };
        let input = Input::from_reader(input.open_read()?)?;
        trace!("settings: {:?}", settings);

        let output = cmd::run_ibrav(&input, &settings)?;
        print_json(&output)
    });
}

pub fn qecell_latgen() {
    wrap_result_main(|| {
        let (app, de) = CliDeserialize::augment_clap_app({
            App::new("qecell-latgen")
                .about("Build the lattice vectors of an ibrav and celldm.")
                .args(&[
                    Arg::with_name("ibrav")
                        .long("ibrav").required(true).takes_value(true).allow_hyphen_values(true)
                        .value_name("IBRAV")
                        .help("signed Bravais index (e.g. -13 or 91)"),
                    Arg::with_name("celldm")
                        .long("celldm").required(true).takes_value(true).allow_hyphen_values(true)
                        .value_name("C1,...,C6")
                        .help("comma-separated celldm; trailing zeros may be omitted"),
                ])
        });
        let matches = app.get_matches();
        let LogArgs(mut logger) = de.resolve_args(&matches)?;
        logger.apply()?;

        let ibrav: i32 = match matches.value_of("ibrav") {
            Some(s) => s.trim().parse()?,
            None => bail!("missing --ibrav"),
        };
        let celldm = match matches.value_of("celldm") {
            Some(s) => parse_celldm(s)?,
            None => bail!("missing --celldm"),
        };

        let output = cmd::run_latgen(ibrav, &celldm)?;
        print_json(&output)
    });
}

fn parse_celldm(s: &str) -> FailResult<Vec<f64>> {
    s.split(',')
        .map(|word| {
            let word = word.trim();
            word.parse::<f64>()
                .map_err(|e| format_err!("bad celldm value {:?}: {}", word, e))
        })
        .collect()
}
