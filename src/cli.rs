use super::VERSION;
use clap::{App, Arg, ArgMatches};
use std::path::PathBuf;

pub const DEFAULT_WIDTH: &str = "1600";
pub const DEFAULT_HEIGHT: &str = "800";

/// Settings for one plotting run.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotArgs {
    pub csvin: PathBuf,
    pub svgout: PathBuf,
    pub utc: bool,
    pub size: (u32, u32),
    pub verbose: bool,
}

fn app() -> App<'static, 'static> {
    let arg_csvin = Arg::with_name("input_csvfile")
        .help("name of the semicolon separated csv file (timestamp;value)")
        .short("f")
        .long("csvfile")
        .takes_value(true)
        .required(true);
    let arg_svgout = Arg::with_name("output_svgfile")
        .help("name of the output svg file, defaults to the csv name with svg extension")
        .short("o")
        .long("svgfile")
        .takes_value(true);
    let arg_utc = Arg::with_name("utc")
        .help("read and label the timestamps as UTC instead of local time")
        .long("utc")
        .takes_value(false);
    let arg_width = Arg::with_name("width")
        .help("width of the svg in pixels")
        .long("width")
        .takes_value(true)
        .validator(is_pixels)
        .default_value(DEFAULT_WIDTH);
    let arg_height = Arg::with_name("height")
        .help("height of the svg in pixels")
        .long("height")
        .takes_value(true)
        .validator(is_pixels)
        .default_value(DEFAULT_HEIGHT);
    let arg_verbose = Arg::with_name("verbose")
        .help("print debug information")
        .short("v")
        .long("verbose")
        .takes_value(false);
    App::new("hr_chart")
        .version(VERSION.unwrap_or("unknown"))
        .about("cli app to plot the heart-rate time series of a csv file")
        .arg(arg_csvin)
        .arg(arg_svgout)
        .arg(arg_utc)
        .arg(arg_width)
        .arg(arg_height)
        .arg(arg_verbose)
}

fn is_pixels(v: String) -> Result<(), String> {
    match v.parse::<u32>() {
        Ok(p) if p > 0 => Ok(()),
        _ => Err(format!("{} is not a positive number of pixels", v)),
    }
}

fn from_matches(cli_args: &ArgMatches) -> PlotArgs {
    let csvin = PathBuf::from(cli_args.value_of("input_csvfile").unwrap_or_default());
    let svgout = match cli_args.value_of("output_svgfile") {
        Some(p) => PathBuf::from(p),
        None => {
            let mut svgout = csvin.clone();
            svgout.set_extension("svg");
            svgout
        }
    };
    let pixels = |name: &str, default: &str| -> u32 {
        cli_args
            .value_of(name)
            .unwrap_or(default)
            .parse::<u32>()
            .unwrap_or_else(|_| default.parse().unwrap_or(1))
    };
    PlotArgs {
        csvin,
        svgout,
        utc: cli_args.is_present("utc"),
        size: (
            pixels("width", DEFAULT_WIDTH),
            pixels("height", DEFAULT_HEIGHT),
        ),
        verbose: cli_args.is_present("verbose"),
    }
}

/// Takes the CLI arguments that control the plotting of the heart-rate series.
pub fn parse_cli() -> PlotArgs {
    from_matches(&app().get_matches())
}

/// Same as parse_cli, from an explicit argument list.
pub fn parse_cli_from<I, T>(args: I) -> Result<PlotArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli_args = app().get_matches_from_safe(args)?;
    Ok(from_matches(&cli_args))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_name_from_csv_name() {
        let args = parse_cli_from(vec!["hr_chart", "-f", "data/hr.csv"]).unwrap();
        assert_eq!(args.csvin, PathBuf::from("data/hr.csv"));
        assert_eq!(args.svgout, PathBuf::from("data/hr.svg"));
        assert_eq!(args.size, (1600, 800));
        assert!(!args.utc);
        assert!(!args.verbose);
    }

    #[test]
    fn all_options() {
        let args = parse_cli_from(vec![
            "hr_chart", "--csvfile", "hr.csv", "-o", "out.svg", "--utc", "--width", "800",
            "--height", "400", "-v",
        ])
        .unwrap();
        assert_eq!(args.svgout, PathBuf::from("out.svg"));
        assert_eq!(args.size, (800, 400));
        assert!(args.utc);
        assert!(args.verbose);
    }

    #[test]
    fn csvfile_is_required() {
        assert!(parse_cli_from(vec!["hr_chart"]).is_err());
    }

    #[test]
    fn rejects_zero_width() {
        assert!(parse_cli_from(vec!["hr_chart", "-f", "hr.csv", "--width", "0"]).is_err());
    }
}
