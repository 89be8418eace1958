use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser as ClapParser, Subcommand};

use extractor::config::DEFAULT_OUTPUT;
use extractor::{extract_text, ExtractConfigBuilder, LoggerConfig};

#[derive(ClapParser, Debug)]
#[command(
    name = "farm-to-console",
    version,
    about = "farm-to-console: A command-line Harvest Moon DS data editing tool."
)]
struct Cli {
    /// More logging (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract text from a Harvest Moon DS MessageData.bin file into a JSON format.
    ExtractText(ExtractTextArgs),
}

#[derive(Args, Debug)]
struct ExtractTextArgs {
    /// The source MessageData.bin to extract text from.
    #[arg(long, required = true)]
    source: PathBuf,

    /// The filename of the JSON file containing the extracted text.
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Whether to overwrite the output file if it exists.
    #[arg(long)]
    overwrite: bool,

    /// Indent the JSON output.
    #[arg(long)]
    pretty: bool,

    /// Print the resolved configuration as JSON and exit.
    #[arg(long)]
    dump_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let logger_config = LoggerConfig::from_verbosity(cli.verbose, cli.quiet);

    match cli.command {
        Command::ExtractText(args) => {
            let config = ExtractConfigBuilder::new(args.source)
                .with_output(args.output)
                .with_overwrite(args.overwrite)
                .with_pretty(args.pretty)
                .with_logger_config(logger_config)
                .get();

            if args.dump_config {
                println!("{}", serde_json::to_string_pretty(&config)?);
                return Ok(());
            }

            config.logger_config.init();
            extract_text(&config)?;
        }
    }

    Ok(())
}
