use bio::io::fasta;
use flate2::read::MultiGzDecoder;
use log::{debug, info};

pub mod cli;
pub mod errors;
pub mod fasta_writer;
pub mod group_label;
pub mod header;

use std::fs::File;
use std::io;
use std::io::{BufRead, BufReader, Read, Write};
use std::process::ExitCode;

use errors::ExtractError;
use fasta_writer::FastaWriter;
use header::full_description;

const GZ_MAGIC: [u8; 2] = [0x1F, 0x8B];

pub type FastaReader = fasta::Reader<BufReader<Box<dyn Read>>>;

// Logs go to stderr. RUST_LOG takes precedence over the -v count.
pub fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

// Opens a plain or gzipped fasta file. Residues are read as they are, without
// any case or alphabet normalization.
pub fn open_reader(infile: &str) -> Result<FastaReader, ExtractError> {
    let mut input = BufReader::new(File::open(infile)?);
    let is_gzipped = input.fill_buf()?.starts_with(&GZ_MAGIC);
    debug!("Opening {} (gzipped: {})", infile, is_gzipped);

    let input: Box<dyn Read> = if is_gzipped {
        Box::new(MultiGzDecoder::new(input))
    } else {
        Box::new(input)
    };
    Ok(fasta::Reader::new(input))
}

// Writes the first record of the input under the name `label`, with the
// description removed.
pub fn extract_first<I, W>(records: I, label: &str, writer: &mut FastaWriter<W>) -> Result<(), ExtractError>
where
    I: IntoIterator<Item = io::Result<fasta::Record>>,
    W: Write,
{
    let rec = match records.into_iter().next() {
        Some(rec) => rec.map_err(ExtractError::from_read)?,
        None => return Err(ExtractError::EmptyInput),
    };

    debug!("Renaming '{}' to {}", rec.id(), label);
    writer.write_record(label.as_bytes(), b"", rec.seq())?;
    Ok(())
}

// Writes every record whose identifier occurs somewhere in `wanted`, in input
// order. This is substring containment, not membership in a list of
// identifiers: with wanted = "seq12" the records seq1, seq12 and eq1 all pass.
// Returns the number of records written.
pub fn extract_subset<I, W>(records: I, wanted: &str, writer: &mut FastaWriter<W>) -> Result<usize, ExtractError>
where
    I: IntoIterator<Item = io::Result<fasta::Record>>,
    W: Write,
{
    let mut n_read = 0_usize;
    let mut n_written = 0_usize;
    for rec in records {
        let rec = rec.map_err(ExtractError::from_read)?;
        n_read += 1;

        if wanted.contains(rec.id()) {
            let description = full_description(rec.id(), rec.desc());
            writer.write_record(rec.id().as_bytes(), description.as_bytes(), rec.seq())?;
            n_written += 1;
        }
    }

    info!("Wrote {} of {} records", n_written, n_read);
    Ok(n_written)
}

// Maps the outcome of a run to the process exit status. A closed stdout is a
// normal way for a pipeline to end, so it exits quietly with success.
pub fn exit_status(result: Result<(), ExtractError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_broken_pipe() => {
            debug!("Output closed by the reader, stopping: {}", e);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
