use std::io::BufRead;
use std::path::PathBuf;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use numtext::config::Settings;
use numtext::error::Error;
use numtext::logging::LogOutputFormat;
use numtext::IntType;
use tracing_attributes::instrument;

/// Command line arguments for numtext.
#[derive(Debug, Parser)]
#[clap(name = "numtext", version, about = "Strict decimal integer conversion")]
struct CliArgs {
    /// Optional path to the configuration file. If not provided, defaults
    /// and environment variables are used.
    #[clap(short = 'c', long, required = false)]
    config: Option<PathBuf>,

    /// Overrides the log output format from the configuration.
    #[clap(short = 'o', long = "output-format")]
    output_format: Option<LogOutputFormat>,

    #[clap(subcommand)]
    command: CliCommand,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Validate decimal inputs and print them in canonical form
    Canonical(CanonicalArgs),
    /// Print the smallest and largest value of an integer type
    Bounds(BoundsArgs),
}

#[derive(Debug, Args)]
struct CanonicalArgs {
    /// The integer type to decode into. Defaults to `codec.default_type`.
    #[clap(short = 't', long = "type")]
    int_type: Option<IntType>,

    /// The inputs to convert. Lines from stdin are used when none are given.
    inputs: Vec<String>,
}

#[derive(Debug, Args)]
struct BoundsArgs {
    /// The integer type. Defaults to `codec.default_type`.
    #[clap(short = 't', long = "type")]
    int_type: Option<IntType>,
}

fn main() -> Result<(), Error> {
    // Parse the command line arguments.
    let args = CliArgs::parse();

    // Load the configuration file and/or environment variables.
    let settings = Settings::new(args.config.as_ref())?;

    // The command line flag wins over the configured format.
    let format = args.output_format.unwrap_or(settings.logging.format);
    let pretty = matches!(format, LogOutputFormat::Pretty);
    numtext::logging::setup_logging(&settings.logging.directives, pretty);

    match args.command {
        CliCommand::Canonical(command) => {
            let int_type = command.int_type.unwrap_or(settings.codec.default_type);
            if command.inputs.is_empty() {
                let lines = std::io::stdin().lock().lines();
                run_canonical(int_type, lines)
            } else {
                run_canonical(int_type, command.inputs.into_iter().map(Ok))
            }
        }
        CliCommand::Bounds(command) => {
            let int_type = command.int_type.unwrap_or(settings.codec.default_type);
            let (min, max) = int_type.bounds();
            tracing::debug!(int_type = int_type.name(), "printing bounds");
            println!("{min}");
            println!("{max}");
            Ok(())
        }
    }
}

/// Prints the canonical form of every input, logging the ones that are
/// rejected. Fails if at least one input was rejected.
#[instrument(skip(int_type, inputs), fields(int_type = int_type.name()))]
fn run_canonical<I>(int_type: IntType, inputs: I) -> Result<(), Error>
where
    I: IntoIterator<Item = std::io::Result<String>>,
{
    let mut total = 0;
    let mut rejected = 0;

    for input in inputs {
        let input = input?;
        total += 1;

        match int_type.canonical(&input) {
            Ok(text) => println!("{text}"),
            Err(error) => {
                rejected += 1;
                tracing::warn!(%input, %error, kind = %error.kind(), "rejected input");
            }
        }
    }

    tracing::info!(total, rejected, "finished converting inputs");

    if rejected > 0 {
        return Err(Error::RejectedInputs { rejected, total });
    }

    Ok(())
}
