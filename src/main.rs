//! bmx binary entry point.

use buildmatrix::cli;
use buildmatrix::ui::output;

fn main() {
    if let Err(err) = cli::run() {
        output::error(format!("{:#}", err));
        std::process::exit(1);
    }
}
