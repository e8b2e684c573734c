//! Download demo content for the Adritian theme

use adritian_tools::cli::{self, DownloadContentArgs};
use adritian_tools::commands;
use adritian_tools::ui::ConsoleReporter;

fn main() {
    let args: DownloadContentArgs = cli::parse_or_exit();
    let reporter = ConsoleReporter::new(args.quiet);

    if let Err(e) = commands::download::run(args, &reporter) {
        cli::report_error(&reporter, &e);
        std::process::exit(1);
    }
}
