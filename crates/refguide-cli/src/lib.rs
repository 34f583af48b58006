//! Entry points shared by the reference guide binaries.
//!
//! Every binary prints a fixed list of guides to standard output.
//! Diagnostics go to standard error; an unwritable output stream ends
//! the process with status 1.

use refguide_core::{GuideError, SectionProof, REFGUIDE_VERSION};
use refguide_out::TemplateLayout;
use refguide_topics::Guide;
use std::io::Write;
use std::process::ExitCode;
use tracing::Level;

/// Install the stderr `fmt` subscriber at `INFO`
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();
}

/// Print each guide in order, returning one proof per section written.
pub fn run_guides<W: Write + ?Sized>(
    guides: &[Guide],
    out: &mut W,
) -> Result<Vec<SectionProof>, GuideError> {
    let layout = TemplateLayout::new()?;
    let mut proofs = Vec::new();
    for guide in guides {
        let runner = guide.runner();
        proofs.extend(runner.run(&guide.context(), &layout, out)?);
    }
    Ok(proofs)
}

/// Body of every binary: log setup, locked stdout, exit status.
pub fn main_for(guides: &[Guide]) -> ExitCode {
    init_logging();
    tracing::info!(version = REFGUIDE_VERSION, guides = guides.len(), "refguide starting");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match run_guides(guides, &mut out) {
        Ok(proofs) => {
            tracing::info!(sections = proofs.len(), "all guides written");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "guide output failed");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_guide_proofs() {
        let mut out = Vec::new();
        let proofs = run_guides(&[Guide::DataStructures], &mut out).unwrap();
        assert_eq!(proofs.len(), Guide::DataStructures.topics().len());
        assert!(proofs.iter().all(|p| p.id.starts_with("structures.")));
    }

    #[test]
    fn test_no_guides_writes_nothing() {
        let mut out = Vec::new();
        let proofs = run_guides(&[], &mut out).unwrap();
        assert!(proofs.is_empty());
        assert!(out.is_empty());
    }
}
