use export_probe::{report, ProbeConfig};
use log::LevelFilter;
use simple_logger::SimpleLogger;

fn main() {
    // Logs go to stderr and stay quiet unless RUST_LOG asks otherwise, so
    // stdout only carries the report
    if let Err(e) = SimpleLogger::new().with_level(LevelFilter::Warn).env().init() {
        eprintln!("unable to initialize logging: {}", e);
    }

    // Unsupported platforms and an unknown executable location abort here,
    // before anything is loaded or printed
    let run = match ProbeConfig::new().run() {
        Ok(run) => run,
        Err(e) => panic!("{}", e),
    };
    report(&run);
    // Load and symbol failures are diagnostics, not process failures: the
    // exit status stays 0 either way
}
