use clap::error::ErrorKind;
use clap::Parser;

mod cli;
mod domain;
mod services;

use cli::Cli;
use services::normalize::{collect_suffixes, into_sorted};
use services::output::print_out;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                let _ = err.print();
                std::process::exit(0);
            }
            eprintln!("usage: missing-redirects <del_paths_file>");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(&cli) {
        eprintln!("missing-redirects: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let suffixes = collect_suffixes(&cli.del_paths)?;
    let sorted = into_sorted(suffixes);
    print_out(cli.json, &sorted, |s| s.clone())?;
    Ok(())
}
