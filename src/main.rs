use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{arg, crate_version, value_parser, ArgMatches, Command};

fn cli() -> Command {
    Command::new("thompson")
        .version(crate_version!())
        .about("Check whether a string is in the language of a regular expression")
        .long_about(
            "Compiles REGEX to an NFA using Thompson's construction and \
             simulates it on STRING.\n\n\
             REGEX is written over the symbols `0`, `1` and `e` (the empty \
             string) with `+` for union, `*` for the Kleene star, `.` for \
             concatenation (which may be left out) and parentheses.",
        )
        // Keep options sorted alphabetically by their long name.
        .arg(arg!(<REGEX>).help("Regular expression to compile"))
        .arg(arg!(<STRING>).help("String to test against the regular expression"))
        .arg(arg!(--"dot").help("Print the NFA in the Graphviz dot format"))
        .arg(
            arg!(-o --"output" <OUTPUT_PATH>)
                .help("Write the description of the NFA as JSON to this file")
                .value_parser(value_parser!(PathBuf)),
        )
}

fn exec(args: &ArgMatches) -> anyhow::Result<()> {
    let regex = args
        .get_one::<String>("REGEX")
        .context("missing REGEX")?
        .trim();
    let input = args.get_one::<String>("STRING").context("missing STRING")?;

    let nfa = thompson::compile(regex)
        .with_context(|| format!("can not compile `{}`", regex))?;

    if let Some(output_path) = args.get_one::<PathBuf>("output") {
        let json = nfa.to_json()?;
        fs::write(output_path, json)
            .with_context(|| format!("can not write `{}`", output_path.display()))?;
        println!("NFA has been written to {}", output_path.display());
    }

    if args.get_flag("dot") {
        println!("{}", nfa);
    }

    if thompson::simulate(&nfa, input) {
        println!("{:?} is a valid string in L({})", input, regex);
    } else {
        println!("{:?} is NOT a valid string in L({})", input, regex);
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    exec(&cli().get_matches())
}
