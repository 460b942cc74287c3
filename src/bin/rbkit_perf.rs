//! rbkit-perf: red-black tree benchmarks
//!
//! Prints gnuplot data blocks on stdout, one per bench. Logs go to stderr.
//!
//! ## Configuration
//! - First argument: path to a YAML config file (optional)
//! - RBKIT_CONFIG: path to a YAML config file (optional)
//! - RBKIT__PERF__*: overrides, e.g. `RBKIT__PERF__NODES=1000000`
//! - RBKIT_LOG: log filter (default: info)
//!
//! ```text
//! rbkit-perf > perf.dat
//! gnuplot -e "plot 'perf.dat' index 0 with lines"
//! ```

use std::io::{self, BufWriter};

use tracing::info;

use rbkit::config::Config;
use rbkit::perf::Runner;
use rbkit::utils::bootstrap::init_tracing;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let path = std::env::args().nth(1);
    let config = Config::load(path.as_deref())?;
    info!(
        nodes = config.perf.nodes,
        report_every = config.perf.report_every,
        seed = ?config.perf.seed,
        verify = config.perf.verify,
        "starting benchmarks"
    );

    let stdout = io::stdout();
    let mut runner = Runner::new(config.perf, BufWriter::new(stdout.lock()));
    let reports = runner.run()?;
    info!(benches = reports.len(), "benchmarks complete");
    Ok(())
}
