//! Merge an icon-font export into the Adritian theme

use adritian_tools::cli::{self, UpdateFontArgs};
use adritian_tools::commands;
use adritian_tools::ui::ConsoleReporter;

fn main() {
    let args: UpdateFontArgs = cli::parse_or_exit();
    let reporter = ConsoleReporter::new(args.quiet);

    if let Err(e) = commands::font::run(args, &reporter) {
        cli::report_error(&reporter, &e);
        std::process::exit(1);
    }
}
