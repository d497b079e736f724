//! binary path data dump tool
//!
//! Parses the path data given on the command line and prints the resulting
//! commands, either normalized or as the calls made on a drawing target.

use clap::Parser;
use path_data::{parse_with, ArityError, DrawCommand, DrawingSink, NormalizingSink, PathCommand};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The path data, as in the `d` attribute of an SVG path element.
    data: String,

    /// Which commands to print
    #[arg(short, long, value_enum, default_value_t)]
    mode: Mode,

    /// Print the commands as a JSON array
    #[arg(long)]
    json: bool,
}

#[derive(clap::ValueEnum, Copy, Clone, Default, Debug, PartialEq)]
enum Mode {
    /// Absolute move, line, cubic and arc commands.
    #[default]
    Normalize,
    /// Canvas drawing calls, with arcs converted to ellipses.
    Draw,
}

/// The commands produced by one run.
#[derive(Debug, PartialEq)]
enum Output {
    Normalized(Vec<PathCommand>),
    Drawn(Vec<DrawCommand>),
}

impl Output {
    fn render(&self, json: bool) -> Result<String, serde_json::Error> {
        if json {
            return match self {
                Output::Normalized(commands) => serde_json::to_string_pretty(commands),
                Output::Drawn(commands) => serde_json::to_string_pretty(commands),
            };
        }
        let lines: Vec<String> = match self {
            Output::Normalized(commands) => commands.iter().map(|c| format!("{c:?}")).collect(),
            Output::Drawn(commands) => commands.iter().map(|c| format!("{c:?}")).collect(),
        };
        Ok(lines.join("\n"))
    }
}

fn run(data: &str, mode: Mode) -> Result<(Output, Vec<ArityError>), path_data::Error> {
    match mode {
        Mode::Normalize => {
            let mut sink = NormalizingSink::new();
            let arity_errors = parse_with(data, &mut sink)?;
            Ok((Output::Normalized(sink.into_commands()), arity_errors))
        }
        Mode::Draw => {
            let mut commands = Vec::new();
            let arity_errors = parse_with(data, &mut DrawingSink::new(&mut commands))?;
            Ok((Output::Drawn(commands), arity_errors))
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let (output, arity_errors) = match run(&args.data, args.mode) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    for e in &arity_errors {
        eprintln!("skipped: {e}");
    }
    match output.render(args.json) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("failed to serialize output: {e}");
            std::process::exit(1);
        }
    }
}
