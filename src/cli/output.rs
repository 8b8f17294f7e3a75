//! Output formatting for CLI commands.

use serde::Serialize;

use crate::cli::args::{BandolierArgs, OutputFormat};
use crate::env::EnvValue;
use crate::error::Result;

/// Result of parsing a number phrase.
#[derive(Debug, Serialize, PartialEq)]
pub struct NumberResult {
    pub input: String,
    pub value: f64,
}

/// Result of an environment lookup.
#[derive(Debug, Serialize, PartialEq)]
pub struct EnvResult {
    pub name: String,
    pub is_set: bool,
    pub value: EnvValue,
}

/// Result of a string transformation.
#[derive(Debug, Serialize, PartialEq)]
pub struct TextResult {
    pub input: String,
    pub output: String,
}

/// Anything a command can print.
#[derive(Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum CommandOutput {
    Number(NumberResult),
    Env(EnvResult),
    Text(TextResult),
}

/// Output a result in the specified format.
pub fn output_result(result: &CommandOutput, args: &BandolierArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            println!("{}", render_human(result, args.verbosity()));
        }
        OutputFormat::Json => {
            println!("{}", render_json(result, args.pretty)?);
        }
    }
    Ok(())
}

/// Render a result the way `output_result` prints it in human mode.
pub fn render_human(result: &CommandOutput, verbosity: u8) -> String {
    match result {
        CommandOutput::Number(n) if verbosity > 1 => format!("{} = {}", n.input, n.value),
        CommandOutput::Number(n) => n.value.to_string(),
        CommandOutput::Env(e) if verbosity > 1 => {
            let source = if e.is_set { "environment" } else { "default" };
            format!("{} = {} ({source})", e.name, e.value)
        }
        CommandOutput::Env(e) => e.value.to_string(),
        CommandOutput::Text(t) if verbosity > 1 => format!("{} -> {}", t.input, t.output),
        CommandOutput::Text(t) => t.output.clone(),
    }
}

/// Render a result as JSON.
pub fn render_json(result: &CommandOutput, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_human_number() {
        let result = CommandOutput::Number(NumberResult {
            input: "one hundred".to_string(),
            value: 100.0,
        });
        assert_eq!(render_human(&result, 1), "100");
        assert_eq!(render_human(&result, 2), "one hundred = 100");
    }

    #[test]
    fn test_render_human_env() {
        let result = CommandOutput::Env(EnvResult {
            name: "DEBUG".to_string(),
            is_set: false,
            value: EnvValue::Null,
        });
        assert_eq!(render_human(&result, 1), "null");
        assert_eq!(render_human(&result, 2), "DEBUG = null (default)");
    }

    #[test]
    fn test_render_json() {
        let result = CommandOutput::Env(EnvResult {
            name: "DEBUG".to_string(),
            is_set: true,
            value: EnvValue::Bool(true),
        });
        assert_eq!(
            render_json(&result, false).unwrap(),
            r#"{"name":"DEBUG","is_set":true,"value":true}"#
        );
    }
}
