//! Prints all three reference guides in order.
use refguide_topics::Guide;
use std::process::ExitCode;

fn main() -> ExitCode {
    refguide_cli::main_for(&Guide::ALL)
}
