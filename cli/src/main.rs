use crate::cli::run_cli;
use buildinfo_real_adapter::version_store;

pub mod cli;

fn main() {
    match run_cli() {
        Ok(()) => {}
        Err(e) => {
            eprintln!(
                "ERROR running buildinfo ({}):\n{:?}\n",
                version_store().display_version(),
                e
            );
            std::process::exit(1);
        }
    }
}
