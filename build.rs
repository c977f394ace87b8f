use clap_complete::{generate_to, Shell};
use std::env;
use std::io::Error;

include!("src/cli.rs");

// Writes shell completion scripts for both binaries into OUT_DIR.
fn main() -> Result<(), Error> {
    println!("cargo:rerun-if-changed=src/cli.rs");

    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let commands = [
        (build_extract_first_cli(), "extract_first"),
        (build_extract_subset_cli(), "extract_subset"),
    ];

    for (mut cmd, bin_name) in commands {
        for shell in [Shell::Bash, Shell::Zsh, Shell::Fish] {
            generate_to(shell, &mut cmd, bin_name, &outdir)?;
        }
    }

    Ok(())
}
