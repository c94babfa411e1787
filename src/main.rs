//! logdesk main entrypoint.

use logdesk::run;
use logdesk::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
