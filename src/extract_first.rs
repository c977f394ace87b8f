use og_seqtools::*;
use og_seqtools::cli::build_extract_first_cli;
use og_seqtools::errors::ExtractError;
use og_seqtools::fasta_writer::FastaWriter;
use og_seqtools::group_label::find_group_label;

use log::info;
use std::io;
use std::process::ExitCode;

fn run(infile: &str, line_width: usize) -> Result<(), ExtractError> {
    // Resolve the label first so a badly named file fails before any reading
    let label = find_group_label(infile).ok_or_else(|| ExtractError::NoGroupLabel(infile.to_owned()))?;
    info!("Group label of {} is {}", infile, label);

    let reader = open_reader(infile)?;
    let mut writer = FastaWriter::new(io::stdout().lock(), line_width);
    extract_first(reader.records(), label, &mut writer)?;
    writer.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let matches = build_extract_first_cli().get_matches();
    init_logger(matches.get_count("verbose"));

    let infile = matches.get_one::<String>("input").expect("input is a required argument");
    let line_width = *matches.get_one::<usize>("line-width").expect("line-width has a default value");

    exit_status(run(infile, line_width))
}
