// Also pulled into build.rs with include!, so this file may only depend on clap.
use clap::{value_parser, Arg, ArgAction, Command};

pub const DEFAULT_LINE_WIDTH: &str = "60";

// Flags shared by both tools.
fn with_output_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("line-width")
            .long("line-width")
            .value_name("N")
            .default_value(DEFAULT_LINE_WIDTH)
            .value_parser(value_parser!(usize))
            .help("Residues per output line, 0 writes each sequence on one line"),
    )
    .arg(
        Arg::new("verbose")
            .short('v')
            .long("verbose")
            .action(ArgAction::Count)
            .help("Log more to stderr (-v info, -vv debug). RUST_LOG overrides this."),
    )
}

pub fn build_extract_first_cli() -> Command {
    let cmd = Command::new("extract_first")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Print the first record of a fasta file, renamed after the OG group label in the file path")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .value_name("FASTA")
                .required(true)
                .help("Input fasta file. The path must contain a group label such as OG1234"),
        );
    with_output_args(cmd)
}

pub fn build_extract_subset_cli() -> Command {
    let cmd = Command::new("extract_subset")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Print the records of a fasta file whose identifier occurs as a substring of WANTED")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .value_name("FASTA")
                .required(true)
                .help("Input fasta file"),
        )
        .arg(
            Arg::new("wanted")
                .value_name("WANTED")
                .required(true)
                .help("String searched for each record identifier, e.g. \"seq1seq3\""),
        );
    with_output_args(cmd)
}
