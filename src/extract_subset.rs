use og_seqtools::*;
use og_seqtools::cli::build_extract_subset_cli;
use og_seqtools::errors::ExtractError;
use og_seqtools::fasta_writer::FastaWriter;

use log::debug;
use std::io;
use std::process::ExitCode;

fn run(infile: &str, wanted: &str, line_width: usize) -> Result<(), ExtractError> {
    debug!("Keeping records whose identifier occurs in '{}'", wanted);

    let reader = open_reader(infile)?;
    let mut writer = FastaWriter::new(io::stdout().lock(), line_width);
    extract_subset(reader.records(), wanted, &mut writer)?;
    writer.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let matches = build_extract_subset_cli().get_matches();
    init_logger(matches.get_count("verbose"));

    let infile = matches.get_one::<String>("input").expect("input is a required argument");
    let wanted = matches.get_one::<String>("wanted").expect("wanted is a required argument");
    let line_width = *matches.get_one::<usize>("line-width").expect("line-width has a default value");

    exit_status(run(infile, wanted, line_width))
}
