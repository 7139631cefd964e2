use clap::Parser;
use pamscan::{design_guides, format_report, TargetSeq};
use pamscan_core::{Sequence, Summarizable};

/// Scan a DNA sequence for CRISPR-Cas9 guide candidates next to NGG PAM sites.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Target DNA sequence (A/C/G/T, case-insensitive, at least 23 bp).
    sequence: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let target = TargetSeq::new(cli.sequence.as_bytes())?;
    let candidates = design_guides(&target)?;

    println!("{}", target.summary());
    println!("Length: {} bp\n", target.len());
    print!("{}", format_report(&candidates));

    Ok(())
}
