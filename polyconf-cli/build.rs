use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the format names accepted by Format::from_str in polyconf-babel
// We need to duplicate this here since build scripts can't access the library crate
const SOURCE_FORMATS: &[&str] = &["AUTO", "JSON", "YAML", "YML", "HCL", "TF"];
const TARGET_FORMATS: &[&str] = &["JSON", "YAML", "YML", "HCL", "TF"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("polyconf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert configuration documents between HCL, JSON and YAML")
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
                .default_value("AUTO")
                .value_parser(clap::builder::PossibleValuesParser::new(SOURCE_FORMATS)),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .value_name("FORMAT")
                .help("Target format, <JSON|YAML|HCL> (required)")
                .required_unless_present("list-formats")
                .value_parser(clap::builder::PossibleValuesParser::new(TARGET_FORMATS)),
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
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "polyconf", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "polyconf", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "polyconf", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
