pub mod bench;
pub mod chronometer;
pub mod configuration;
pub mod logger;
pub mod thread_pool;

use self::{bench::bench, configuration::Configuration, logger::Logger};
use base_x::{Codec, Options};
use std::{
    env,
    io::{self, BufRead, Write},
    process::exit,
};

/// Lowercase base16 in padded mode: two digits per byte, leading zero bytes included.
const HEX: &str = "0123456789abcdef";

const USAGE: &str = "Usage: base-x <encode|decode|bench>

  encode  read hex lines from stdin, print them encoded
  decode  read encoded lines from stdin, print them as hex
  bench   encode and decode generated inputs, print a JSON report

Environment: ALPHABET or PRESET (default base58), RFC4648, THREADS, BATCH_SIZE, ITERATIONS, INPUT_SIZE, SEED";

/// Applies `f` to every stdin line, printing results and logging failures. Returns the number of failures.
fn transform(logger: &Logger, f: impl Fn(&str) -> Result<String, String>) -> io::Result<usize> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    let mut failures = 0;
    for (index, line) in io::stdin().lock().lines().enumerate() {
        let line = line?;
        match f(line.trim()) {
            Ok(output) => writeln!(stdout, "{}", output)?,
            Err(message) => {
                logger.log(format!("Line {}: {}", index + 1, message));
                failures += 1;
            }
        }
    }
    Ok(failures)
}

fn encode(codec: &Codec, hex: &Codec, line: &str) -> Result<String, String> {
    // Padded decode strips trailing `=`, so only hex digits get this far.
    if let Some((index, character)) = line.char_indices().find(|(_, character)| !character.is_ascii_hexdigit()) {
        return Err(format!("Non-hex character {:?} at index {}", character, index));
    }
    if line.len() % 2 != 0 {
        return Err("Odd number of hex digits".to_string());
    }
    let input = hex.decode(line.to_ascii_lowercase()).map_err(|error| error.to_string())?;
    codec.encode(input).map_err(|error| error.to_string())
}

fn decode(codec: &Codec, hex: &Codec, line: &str) -> Result<String, String> {
    let output = codec.decode(line).map_err(|error| error.to_string())?;
    hex.encode(output).map_err(|error| error.to_string())
}

fn run(command: &str, configuration: &Configuration, logger: &Logger) -> Result<usize, Box<dyn std::error::Error>> {
    let codec = Codec::with_options(configuration.alphabet(), configuration.options())?;
    let hex = Codec::with_options(HEX, Options { rfc4648: true })?;
    match command {
        "encode" => Ok(transform(logger, |line| encode(&codec, &hex, line))?),
        "decode" => Ok(transform(logger, |line| decode(&codec, &hex, line))?),
        "bench" => {
            let measurements = bench(configuration, logger)?;
            println!("{}", serde_json::to_string_pretty(&measurements)?);
            Ok(measurements.iter().filter(|measurement| measurement.failures() > 0).count())
        }
        _ => Err(USAGE.into()),
    }
}

fn main() {
    let logger = Logger::new("base-x");
    let command = env::args().nth(1).unwrap_or_default();
    let configuration = match Configuration::new() {
        Ok(configuration) => configuration,
        Err(message) => {
            logger.log(message);
            exit(2);
        }
    };
    match run(&command, &configuration, &logger) {
        Ok(0) => {}
        Ok(failures) => {
            logger.log(format!("{} failures", failures));
            exit(1);
        }
        Err(error) => {
            logger.log(error);
            exit(2);
        }
    }
}
