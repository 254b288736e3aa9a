use modbus_coil_reader::tcp::Config;
use modbus_coil_reader::util::Expect;
use modbus_coil_reader::reader::exit_status;
use modbus_coil_reader::run;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use std::io;
use std::process::ExitCode;
use tokio::runtime::Builder;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Switch on verbose output.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    #[command(flatten)]
    config: Config,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .panic(|e| format!("Failed to create runtime. [{}]", e));

    let target = args.config.target();
    let address = args.config.address;
    let result = runtime
        .block_on(run(args.config, &mut io::stdout().lock()))
        .with_context(|| format!("Failed to read coil {} from {}", address, target));

    if let Err(e) = &result {
        eprintln!("{:#}", e);
    }
    ExitCode::from(exit_status(&result))
}
