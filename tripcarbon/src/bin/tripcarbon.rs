use clap::Parser;
use tripcarbon::app::TripcarbonApp;

fn main() {
    env_logger::init();
    let args = TripcarbonApp::parse();
    if let Err(error) = args.op.run() {
        log::error!("{}", error);
        std::process::exit(1);
    }
}
