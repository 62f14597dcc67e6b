mod grid;
mod holidays;
mod numeral;
mod svg;
mod theme;
use crate::holidays::HolidayTable;
use crate::numeral::Radix;
use crate::svg::SvgCalendar;
use anyhow::Context;
use flexi_logger::Logger;
use lexopt::{Arg, Parser, ValueExt};
use std::io::{self, Write};

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run {
        year: i32,
        radix: Radix,
        table: HolidayTable,
    },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut year = None;
        let mut radix = Radix::default();
        let mut table = HolidayTable::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Long("base") => radix = parser.value()?.parse()?,
                Arg::Long("holidays") => table = parser.value()?.parse()?,
                Arg::Value(value) if year.is_none() => year = Some(value.parse()?),
                _ => return Err(arg.unexpected()),
            }
        }
        let Some(year) = year else {
            return Err("missing required argument: YEAR".into());
        };
        Ok(Command::Run { year, radix, table })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run { year, radix, table } => {
                log::debug!("Using the {table} holiday table");
                let calendar = SvgCalendar::new(year, radix)?.holiday_table(table);
                let mut out = io::stdout().lock();
                writeln!(out, "{calendar}").context("failed to write calendar")?;
                out.flush().context("failed to flush standard output")?;
                Ok(())
            }
            Command::Help => {
                println!("Usage: basecal [--base <BASE>] [--holidays <TABLE>] <YEAR>");
                println!();
                println!("Render a one-page SVG wall calendar with numbers in an arbitrary base");
                println!();
                println!("Options:");
                println!("  --base <BASE>       Numeral base, 2 or more [default: 8]");
                println!("  --holidays <TABLE>  Holiday table: public, public-ru [default: public]");
                println!("  -h, --help          Display this help message and exit");
                println!("  -V, --version       Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    let _logger = Logger::try_with_env_or_str("warn")
        .and_then(|logger| logger.log_to_stderr().start())
        .context("failed to initialize logging")?;
    Command::from_parser(Parser::from_env())?.run()
}
