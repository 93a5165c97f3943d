use jhlj_runner::{Command, run};

fn print_help() {
    eprintln!(
        r#"JHLJ - Jensen Huang Leather Jacket Index report

USAGE:
    jhlj --records <PATH> [OPTIONS]

OPTIONS:
    --records <PATH>    JSON array of daily records (any order)
    --config <PATH>     Load configuration from JSON file
    --compact           Print the report on a single line
    --help              Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG            Log level filter (default: info)

EXAMPLES:
    # Report with the default configuration
    jhlj --records daily_index.json

    # Track sold prices instead of asking prices
    jhlj --records daily_index.json --config sold.json
"#
    );
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match Command::parse(std::env::args().skip(1)) {
        Ok(Command::Help) => {
            print_help();
            return;
        }
        Ok(Command::Run(args)) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_help();
            std::process::exit(2);
        }
    };

    match run(&args) {
        Ok(report) => println!("{}", report),
        Err(e) => {
            log::error!("[Runner] {}", e);
            std::process::exit(1);
        }
    }
}
