// Entry point for the `annotations` command.
//
// Prints the warning and error annotations of every job in the workflow run.
// Configuration errors and API failures exit with a non-zero code; a run
// without jobs exits 0.

use annotations_common::logging;
use annotations_reporter::{app, CommandSettings};
use clap::Parser;

fn main() {
    let settings = CommandSettings::parse();

    // Build the async runtime
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to build Tokio runtime");

    let exit_code = runtime.block_on(async move {
        logging::init();
        app::run(&settings, std::io::stdout()).await
    });

    std::process::exit(exit_code);
}
