//! Command-line parsing.
//!
//! Arguments are parsed by hand: the surface is a handful of subcommands
//! and `--flag=value` options.

use std::path::PathBuf;

use stak_diagnostic::emitter::ColorMode;

use crate::Input;

/// Environment variable supplying the default step limit for `run`.
pub const MAX_STEPS_ENV: &str = "STAK_MAX_STEPS";

/// What the user asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Compile and execute, printing the final stack.
    Run(Input),
    /// Compile only.
    Check(Input),
    /// Print the compiled program in canonical form.
    Dump(Input),
    /// Describe an error code.
    Explain(String),
    Help,
    Version,
}

/// A parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    pub color: ColorMode,
    /// Step limit for `run`; `None` means unlimited.
    pub max_steps: Option<u64>,
}

/// Malformed command line.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("missing command")]
    MissingCommand,
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("`{0}` needs a program: a file path, `-` for stdin, or `-e <source>`")]
    MissingInput(&'static str),
    #[error("`{0}` takes a single program")]
    ExtraInput(&'static str),
    #[error("`explain` needs an error code, e.g. `stakc explain E6001`")]
    MissingErrorCode,
    #[error("unknown option `{0}`")]
    UnknownFlag(String),
    #[error("invalid value `{value}` for `{flag}`")]
    InvalidValue { flag: &'static str, value: String },
}

/// Parse `args` (without the program name).
///
/// `env_max_steps` is the value of [`MAX_STEPS_ENV`], if set; an explicit
/// `--max-steps` overrides it.
pub fn parse_args(args: &[String], env_max_steps: Option<&str>) -> Result<Invocation, UsageError> {
    let Some((command, rest)) = args.split_first() else {
        return Err(UsageError::MissingCommand);
    };

    let mut color = ColorMode::Auto;
    let mut max_steps = match env_max_steps {
        Some(value) => Some(parse_steps(MAX_STEPS_ENV, value)?),
        None => None,
    };
    let mut input: Option<Input> = None;
    let mut positional: Vec<&str> = Vec::new();

    let mut i = 0;
    while i < rest.len() {
        let arg = rest[i].as_str();
        if let Some(value) = arg.strip_prefix("--color=") {
            color = ColorMode::from_flag(value).ok_or_else(|| UsageError::InvalidValue {
                flag: "--color",
                value: value.to_owned(),
            })?;
        } else if let Some(value) = arg.strip_prefix("--max-steps=") {
            max_steps = Some(parse_steps("--max-steps", value)?);
        } else if arg == "-e" {
            let Some(source) = rest.get(i + 1) else {
                return Err(UsageError::MissingInput(input_command_name(command)));
            };
            set_input(&mut input, Input::Inline(source.clone()), command)?;
            i += 1;
        } else if arg == "-" {
            set_input(&mut input, Input::Stdin, command)?;
        } else if arg.starts_with('-') && arg.len() > 1 {
            return Err(UsageError::UnknownFlag(arg.to_owned()));
        } else {
            positional.push(arg);
        }
        i += 1;
    }

    let command = match command.as_str() {
        "run" | "check" | "dump" => {
            let name = input_command_name(command);
            for path in positional {
                set_input(&mut input, Input::File(PathBuf::from(path)), command)?;
            }
            let input = input.ok_or(UsageError::MissingInput(name))?;
            match name {
                "run" => Command::Run(input),
                "check" => Command::Check(input),
                _ => Command::Dump(input),
            }
        }
        "explain" | "--explain" => {
            let code = positional.first().ok_or(UsageError::MissingErrorCode)?;
            Command::Explain((*code).to_owned())
        }
        "help" | "--help" | "-h" => Command::Help,
        "version" | "--version" | "-V" => Command::Version,
        other => return Err(UsageError::UnknownCommand(other.to_owned())),
    };

    Ok(Invocation {
        command,
        color,
        max_steps,
    })
}

fn input_command_name(command: &str) -> &'static str {
    match command {
        "run" => "run",
        "check" => "check",
        _ => "dump",
    }
}

fn set_input(slot: &mut Option<Input>, input: Input, command: &str) -> Result<(), UsageError> {
    if slot.is_some() {
        return Err(UsageError::ExtraInput(input_command_name(command)));
    }
    *slot = Some(input);
    Ok(())
}

/// `0` disables the limit.
fn parse_steps(flag: &'static str, value: &str) -> Result<u64, UsageError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| UsageError::InvalidValue {
            flag,
            value: value.to_owned(),
        })
}

/// Usage text for `stakc help`.
pub fn usage() -> String {
    let mut text = String::new();
    text.push_str("stak: a small stack-based instruction language\n\n");
    text.push_str("Usage: stakc <command> [options]\n\n");
    text.push_str("Commands:\n");
    text.push_str("  run <program>        Compile and execute, printing the final stack\n");
    text.push_str("  check <program>      Compile only and report errors\n");
    text.push_str("  dump <program>       Print the compiled program in canonical form\n");
    text.push_str("  explain <code>       Explain an error code (e.g., E6001)\n");
    text.push_str("  help                 Show this help message\n");
    text.push_str("  version              Show version information\n\n");
    text.push_str("A program is a file path, `-` for stdin, or `-e <source>`.\n\n");
    text.push_str("Options:\n");
    text.push_str("  --max-steps=<n>      Abort `run` after n instructions (0: no limit)\n");
    text.push_str("  --color=<mode>       auto, always or never\n\n");
    text.push_str("Environment:\n");
    text.push_str("  STAK_MAX_STEPS       Default for --max-steps\n");
    text.push_str("  RUST_LOG             Tracing filter, e.g. stak_eval=trace\n");
    text
}
