//! Copy the Adritian example site content into ./content

use adritian_tools::cli::{self, CopyExampleContentArgs};
use adritian_tools::commands;
use adritian_tools::ui::ConsoleReporter;

fn main() {
    let args: CopyExampleContentArgs = cli::parse_or_exit();
    let reporter = ConsoleReporter::new(args.quiet);

    if let Err(e) = commands::example::run(args, &reporter) {
        cli::report_error(&reporter, &e);
        std::process::exit(1);
    }
}
