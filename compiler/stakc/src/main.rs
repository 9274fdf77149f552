//! stak CLI

use std::io::IsTerminal;
use std::process::ExitCode;

use stak_diagnostic::emitter::ColorMode;
use stakc::cli::{self, Command, Invocation, MAX_STEPS_ENV};
use stakc::commands::{
    check_source, dump_source, explain_code, format_stack, report, run_source,
};
use stakc::{Input, Source};

fn main() -> ExitCode {
    stakc::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        print!("{}", cli::usage());
        return ExitCode::SUCCESS;
    }

    let env_max_steps = std::env::var(MAX_STEPS_ENV).ok();
    let invocation = match cli::parse_args(&args, env_max_steps.as_deref()) {
        Ok(invocation) => invocation,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("Run `stakc help` for usage.");
            return ExitCode::from(2);
        }
    };

    dispatch(invocation)
}

fn dispatch(invocation: Invocation) -> ExitCode {
    let Invocation {
        command,
        color,
        max_steps,
    } = invocation;

    match command {
        Command::Run(input) => {
            let Some(source) = load(&input) else {
                return ExitCode::FAILURE;
            };
            match run_source(&source, max_steps) {
                Ok(stack) => {
                    println!("{}", format_stack(&stack));
                    ExitCode::SUCCESS
                }
                Err(diag) => fail(&diag, &source, color),
            }
        }
        Command::Check(input) => {
            let Some(source) = load(&input) else {
                return ExitCode::FAILURE;
            };
            match check_source(&source) {
                Ok(count) => {
                    eprintln!("{}: ok ({count} instruction{})", source.name, plural_s(count));
                    ExitCode::SUCCESS
                }
                Err(diag) => fail(&diag, &source, color),
            }
        }
        Command::Dump(input) => {
            let Some(source) = load(&input) else {
                return ExitCode::FAILURE;
            };
            match dump_source(&source) {
                Ok(text) => {
                    print!("{text}");
                    ExitCode::SUCCESS
                }
                Err(diag) => fail(&diag, &source, color),
            }
        }
        Command::Explain(code) => {
            if let Some(text) = explain_code(&code) {
                println!("{text}");
                ExitCode::SUCCESS
            } else {
                eprintln!("Unknown error code: {code}");
                eprintln!();
                eprintln!("Codes have the format EXXXX where X is a digit.");
                eprintln!("Examples: E0001, E1002, E6001");
                ExitCode::FAILURE
            }
        }
        Command::Help => {
            print!("{}", cli::usage());
            ExitCode::SUCCESS
        }
        Command::Version => {
            println!("stakc {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
    }
}

fn load(input: &Input) -> Option<Source> {
    match Source::load(input) {
        Ok(source) => Some(source),
        Err(err) => {
            match input {
                Input::File(path) => eprintln!("error: cannot read '{}': {err}", path.display()),
                _ => eprintln!("error: cannot read program: {err}"),
            }
            None
        }
    }
}

fn fail(diagnostic: &stak_diagnostic::Diagnostic, source: &Source, color: ColorMode) -> ExitCode {
    tracing::debug!(
        code = %diagnostic.code,
        runtime = diagnostic.is_runtime(),
        "{} failed",
        source.name
    );
    let is_tty = std::io::stderr().is_terminal();
    report(diagnostic, source, color, is_tty, std::io::stderr());
    ExitCode::FAILURE
}

fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
