//! Command implementations for the Bandolier CLI.

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::env::{EnvResolver, EnvSource, EnvValue, ProcessEnv};
use crate::error::Result;
use crate::number::{to_float, words_to_number};
use crate::paths::{Paths, PathsConfig};
use crate::strings::strip_slashes;

/// Execute a CLI command against the process environment and print the result.
pub fn execute_command(args: BandolierArgs) -> Result<()> {
    let result = run_command(&args.command, &EnvResolver::new(ProcessEnv))?;
    output_result(&result, &args)
}

/// Run a command without printing.
pub fn run_command<S: EnvSource>(
    command: &Command,
    resolver: &EnvResolver<S>,
) -> Result<CommandOutput> {
    match command {
        Command::WordsToNumber(a) => Ok(parse_words(a)),
        Command::ToFloat(a) => Ok(parse_float(a)),
        Command::Env(a) => Ok(read_env(a, resolver)),
        Command::CurlPath(a) => curl_path(a, resolver),
        Command::StripSlashes(a) => Ok(CommandOutput::Text(TextResult {
            input: a.value.clone(),
            output: strip_slashes(&a.value),
        })),
    }
}

fn parse_words(args: &WordsToNumberArgs) -> CommandOutput {
    let input = args.phrase.join(" ");
    let value = words_to_number(&input);
    CommandOutput::Number(NumberResult { input, value })
}

fn parse_float(args: &ToFloatArgs) -> CommandOutput {
    CommandOutput::Number(NumberResult {
        input: args.value.clone(),
        value: to_float(&args.value),
    })
}

fn read_env<S: EnvSource>(args: &EnvArgs, resolver: &EnvResolver<S>) -> CommandOutput {
    let is_set = resolver.source().var(&args.name).is_some();
    let default = EnvValue::from(args.default.clone());
    CommandOutput::Env(EnvResult {
        name: args.name.clone(),
        is_set,
        value: resolver.get(&args.name, default),
    })
}

fn curl_path<S: EnvSource>(args: &CurlPathArgs, resolver: &EnvResolver<S>) -> Result<CommandOutput> {
    let config = match &args.config {
        Some(path) => {
            info!("Loading paths config from: {}", path.display());
            PathsConfig::from_file(path)?
        }
        None => PathsConfig::default(),
    };

    let paths = Paths::new(EnvResolver::new(resolver.source()), config);
    Ok(CommandOutput::Text(TextResult {
        input: args.path.clone(),
        output: paths.curl_path(&args.path),
    }))
}
