//! Grep-style driver for the `streamscan` library.

mod input_output;
mod logging;

use clap::Parser;

use crate::input_output::InputArgs;
use crate::logging::LogArgs;
use streamscan::{ScanConfig, ScanPattern};

/// Scan a stream for regular expression matches.
///
/// Prints one `offset:value` line per match; offsets are global byte
/// positions in the stream.
#[derive(clap::Parser, Debug)]
pub struct Args {
    /// The pattern to search for.
    pub pattern: String,

    /// Force the fancy (back-reference / look-around) engine.
    #[clap(long)]
    pub fancy: bool,

    /// Case-insensitive matching.
    #[clap(short = 'i', long)]
    pub ignore_case: bool,

    /// Print only the count of matches.
    #[clap(short = 'c', long)]
    pub count: bool,

    /// Maximum byte length of a match.
    #[clap(long, default_value_t = ScanConfig::DEFAULT_MAX_MATCH_SIZE)]
    pub max_match_size: usize,

    /// Byte capacity of the scan window.
    #[clap(long, default_value_t = ScanConfig::DEFAULT_BUFFER_SIZE)]
    pub buffer_size: usize,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    log_args: LogArgs,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    args.log_args.setup_logging(1)?;

    let mut pattern = args.pattern.clone();
    if args.ignore_case {
        pattern = format!("(?i){pattern}");
    }
    let pattern = if args.fancy {
        ScanPattern::Fancy(pattern)
    } else {
        ScanPattern::Adaptive(pattern)
    };

    let regex = pattern.compile()?;
    log::debug!(
        "compiled {:?} for the {} engine",
        regex.as_str(),
        if regex.is_fancy() { "fancy" } else { "basic" },
    );

    let config = ScanConfig::new()
        .with_max_match_size(args.max_match_size)
        .with_buffer_size(args.buffer_size);

    let reader = args.input.open_reader()?;

    let mut total = 0usize;
    regex.for_each_match(reader, &config, |m| {
        total += 1;
        if !args.count {
            println!("{}:{}", m.index(), m.value());
        }
        true
    })?;

    if args.count {
        println!("{total}");
    }

    Ok(())
}
