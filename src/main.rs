//! clearmind main entrypoint.

use clearmind::run;
use clearmind::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(e);
        std::process::exit(1);
    }
}
