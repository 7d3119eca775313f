// Command-line interface for polyconf
//
// Converts a configuration document between HCL, JSON and YAML. The conversion itself
// lives in the polyconf-babel crate; this binary only wires flags, configuration files,
// logging and the input/output streams around it.
//
// Usage:
//  polyconf --to <format> [--from <format>] [--iam] [<input>] [-o <output>]
//  polyconf --list-formats
//
// The source format defaults to AUTO, which tries JSON, then YAML, then HCL. The target
// format is required and can never be AUTO. Input defaults to stdin and output to stdout.
//
// Flag validation happens before any stream is touched: a bad --from/--to prints usage
// and exits with clap's usage status. Read, parse and write failures exit with status 1.

use clap::{Arg, ArgAction, Command, ValueHint};
use polyconf_babel::{convert, ConvertError, ConvertOptions, Format, RunConfig};
use polyconf_config::{Loader, PolyconfConfig};
use std::fs;
use std::io::{self, IsTerminal, Read};
use tracing::Level;

/// Parse a --from value. Every format name is accepted, including AUTO.
fn parse_source_format(raw: &str) -> Result<Format, String> {
    raw.parse::<Format>()
        .map_err(|_| "From format must be one of <JSON|YAML|HCL|AUTO>".to_string())
}

/// Parse a --to value. AUTO is a detection request, not a destination.
fn parse_target_format(raw: &str) -> Result<Format, String> {
    match raw.parse::<Format>() {
        Ok(format) if format.is_concrete() => Ok(format),
        _ => Err("To format must be one of <JSON|YAML|HCL>".to_string()),
    }
}

fn build_cli() -> Command {
    Command::new("polyconf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert configuration documents between HCL, JSON and YAML")
        .long_about(
            "polyconf reads one document, detects or parses its format, and writes it\n\
            back out in another format.\n\n\
            Formats:\n  \
            - JSON\n  \
            - YAML (alias YML)\n  \
            - HCL  (alias TF)\n  \
            - AUTO (source only): try JSON, then YAML, then HCL\n\n\
            Examples:\n  \
            polyconf --to YAML < package.json             # JSON to YAML on stdout\n  \
            polyconf --from TF --to JSON main.tf          # Explicit source format\n  \
            polyconf --to HCL values.yaml -o values.hcl   # Write to a file",
        )
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Input file (defaults to stdin; '-' also reads stdin)")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("from")
                .long("from")
                .value_name("FORMAT")
                .help("Source format, <JSON|YAML|HCL|AUTO>")
                .long_help(
                    "Source format to convert from.\n\n\
                    Accepts JSON, YAML, YML, HCL, TF or AUTO (case-insensitive).\n\
                    AUTO tries JSON, then YAML, then HCL and keeps the first that parses.",
                )
                .default_value("AUTO")
                .value_parser(parse_source_format)
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .value_name("FORMAT")
                .help("Target format, <JSON|YAML|HCL> (required)")
                .required_unless_present("list-formats")
                .value_parser(parse_target_format)
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("iam")
                .long("iam")
                .help("Translate an IAM policy to HCL (not implemented; has no effect)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("PATH")
                .help("Output file path (defaults to stdout)")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a polyconf.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log more on stderr (-v info, -vv debug, -vvv trace)")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List supported formats and their aliases")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    init_logging(matches.get_count("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    let from = *matches
        .get_one::<Format>("from")
        .expect("from has a default");
    let to = *matches.get_one::<Format>("to").expect("to is required");
    let run = RunConfig::new(from, to, matches.get_flag("iam")).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(2);
    });

    let input = matches.get_one::<String>("input").map(|s| s.as_str());
    let output = matches.get_one::<String>("output").map(|s| s.as_str());
    handle_convert_command(input, output, &run, &ConvertOptions::from(&config));
}

/// Handle the conversion (the only real command)
fn handle_convert_command(
    input: Option<&str>,
    output: Option<&str>,
    run: &RunConfig,
    options: &ConvertOptions,
) {
    if let Err(e) = run_conversion(input, output, run, options) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_conversion(
    input: Option<&str>,
    output: Option<&str>,
    run: &RunConfig,
    options: &ConvertOptions,
) -> Result<(), ConvertError> {
    let source: Box<dyn Read> = match input {
        None | Some("-") => Box::new(io::stdin().lock()),
        Some(path) => Box::new(
            fs::File::open(path)
                .map_err(|e| ConvertError::Io(format!("unable to open '{path}': {e}")))?,
        ),
    };

    match output {
        // Buffered so that a failed conversion never creates or truncates the file.
        Some(path) => {
            let mut buffer = Vec::new();
            convert(source, &mut buffer, run, options)?;
            fs::write(path, buffer)
                .map_err(|e| ConvertError::Io(format!("unable to write '{path}': {e}")))
        }
        None => convert(source, &mut io::stdout().lock(), run, options).map(|_| ()),
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Formats:\n");
    for format in Format::CONCRETE {
        let description = format.codec().map(|codec| codec.description()).unwrap_or("");
        println!(
            "  {:<6}{:<12}{description}",
            format.name(),
            format.aliases().join(", ")
        );
    }
    println!(
        "  {:<6}{:<12}Source only: try JSON, then YAML, then HCL",
        Format::Auto.name(),
        Format::Auto.aliases().join(", ")
    );
}

fn load_cli_config(explicit_path: Option<&str>) -> PolyconfConfig {
    let loader = Loader::new().with_optional_file("polyconf.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

// Logs go to stderr: stdout carries the converted document.
fn init_logging(verbosity: u8) {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_max_level(level_for(verbosity))
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        build_cli().debug_assert();
    }

    #[test]
    fn source_format_accepts_auto_and_aliases() {
        assert_eq!(parse_source_format("AUTO"), Ok(Format::Auto));
        assert_eq!(parse_source_format("TF"), Ok(Format::Hcl));
        assert_eq!(parse_source_format("yml"), Ok(Format::Yaml));
        assert!(parse_source_format("TOML").is_err());
    }

    #[test]
    fn target_format_rejects_auto() {
        assert_eq!(parse_target_format("JSON"), Ok(Format::Json));
        assert_eq!(
            parse_target_format("AUTO"),
            Err("To format must be one of <JSON|YAML|HCL>".to_string())
        );
    }

    #[test]
    fn to_is_required() {
        let result = build_cli().try_get_matches_from(["polyconf", "--from", "JSON"]);
        assert!(result.is_err());
    }

    #[test]
    fn from_defaults_to_auto() {
        let matches = build_cli()
            .try_get_matches_from(["polyconf", "--to", "yaml"])
            .expect("valid arguments");
        assert_eq!(matches.get_one::<Format>("from"), Some(&Format::Auto));
        assert_eq!(matches.get_one::<Format>("to"), Some(&Format::Yaml));
        assert!(!matches.get_flag("iam"));
    }

    #[test]
    fn list_formats_does_not_need_a_target() {
        let matches = build_cli()
            .try_get_matches_from(["polyconf", "--list-formats"])
            .expect("valid arguments");
        assert!(matches.get_flag("list-formats"));
    }

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_for(0), Level::WARN);
        assert_eq!(level_for(2), Level::DEBUG);
        assert_eq!(level_for(7), Level::TRACE);
    }

    #[test]
    fn failed_conversion_leaves_output_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("broken.json");
        let output = dir.path().join("out.yaml");
        fs::write(&input, "a = 1").unwrap();
        let run = RunConfig::new(Format::Json, Format::Yaml, false).unwrap();

        let result = run_conversion(
            input.to_str(),
            output.to_str(),
            &run,
            &ConvertOptions::default(),
        );

        assert!(matches!(result, Err(ConvertError::ParseError { .. })));
        assert!(!output.exists());
    }

    #[test]
    fn converts_file_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("values.json");
        let output = dir.path().join("values.yaml");
        fs::write(&input, r#"{"a": 1}"#).unwrap();
        let run = RunConfig::new(Format::Auto, Format::Yaml, false).unwrap();

        run_conversion(input.to_str(), output.to_str(), &run, &ConvertOptions::default())
            .unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "a: 1\n");
    }

    #[test]
    fn default_config_gives_default_options() {
        let config = load_cli_config(None);
        assert_eq!(ConvertOptions::from(&config), ConvertOptions::default());
    }
}
