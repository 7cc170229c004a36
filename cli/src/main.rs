use moodle_intercom::argparse::parse_args;
use moodle_intercom::{commands, utils};

fn main() {
    dotenv::dotenv().ok();

    let cli = parse_args();
    utils::init_logger(cli.verbose);

    if let Err(e) = commands::handle_command(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
