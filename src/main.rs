use clap::{Arg, ArgMatches, Command};
use tracing::{error, info};

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use pixlr::config::{self, SortConfig};
use pixlr::{io, Error};

fn main() -> ExitCode {
    init_tracing();
    let matches = Command::new("pixlr")
        .version(clap::crate_version!())
        .about(clap::crate_description!())
        .arg(
            Arg::new("input")
                .help("The input image to sort.")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .args([
            arg_output(),
            arg_threshold(),
            arg_percent(),
            arg_method(),
            arg_direction(),
        ])
        .get_matches();
    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    // arguments are validated before any file is touched
    let config = sort_config(matches)?;
    let input = matches
        .get_one::<PathBuf>("input")
        .map(PathBuf::as_path)
        .unwrap_or_else(|| Path::new(""));
    let output = matches
        .get_one::<PathBuf>("output")
        .cloned()
        .unwrap_or_else(|| io::default_output(input));

    let image = io::open(input)?;
    let sorted = pixlr::transform_with(&image, &config);
    io::save(&sorted, &output)?;
    info!(output = %output.display(), "wrote sorted image");
    Ok(())
}

fn sort_config(matches: &ArgMatches) -> Result<SortConfig, Error> {
    let mut sort = SortConfig::default();
    if let Some(threshold) = matches.get_one::<String>("threshold") {
        sort.threshold = config::parse_threshold(threshold)?;
    } else if let Some(percent) = matches.get_one::<String>("percent") {
        sort.threshold = config::threshold_from_percent(percent)?;
    }
    if let Some(method) = matches.get_one::<String>("method") {
        sort.method = method.parse()?;
    }
    if let Some(direction) = matches.get_one::<String>("direction") {
        sort.direction = direction.parse()?;
    }
    Ok(sort)
}

fn arg_output() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .help("A file path to save the output image to.")
        .long_help(
            "A file path to save the output image to.\n\
             \n\
             The format follows the extension, png and jpeg are supported. \
             Defaults to the input path with `.sorted` inserted before the extension.",
        )
        .value_parser(clap::value_parser!(PathBuf))
}

fn arg_threshold() -> Arg {
    Arg::new("threshold")
        .short('t')
        .long("threshold")
        .help("The sort intensity, an integer from 0 to 255. [default: 100]")
        .long_help(
            "The sort intensity, an integer from 0 to 255.\n\
             \n\
             Pixels whose value lies strictly inside a band around 0.5 of width threshold/255 \
             are eligible, and runs are cut wherever eligibility flips. \
             A threshold of 0 leaves the image untouched. [default: 100]",
        )
        .conflicts_with("percent")
}

fn arg_percent() -> Arg {
    Arg::new("percent")
        .short('p')
        .long("percent")
        .help("The sort intensity as a percentage from 0 to 100.")
        .long_help(
            "The sort intensity as a percentage from 0 to 100.\n\
             \n\
             Converted to a threshold by truncating percent * 2.55.",
        )
}

fn arg_method() -> Arg {
    Arg::new("method")
        .short('m')
        .long("method")
        .help("The pixel value used to cut and sort runs. [default: luminosity]")
        .long_help(
            "The pixel value used to cut and sort runs.\n\
             \n\
             luminosity: the mean of the color channels.\n\
             hue: the hue angle in radians.\n\
             saturation: the spread between the strongest and weakest channel. \
             [default: luminosity]",
        )
}

fn arg_direction() -> Arg {
    Arg::new("direction")
        .short('d')
        .long("direction")
        .help("Whether rows or columns are sorted. [default: columns]")
        .long_help(
            "Whether rows or columns are sorted.\n\
             \n\
             rows (horizontal) sorts every row left to right, columns (vertical) \
             sorts every column top to bottom. [default: columns]",
        )
}
