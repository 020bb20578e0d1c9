use std::io::Write;
use std::process;

use gh_search_docs::logging::initialize_logging;
use gh_search_docs::{CliOutput, Context, parse_args, parse_failure, run_parsed};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let output = match parse_args(&args) {
        Ok(cli) => {
            cli.color.apply();
            if let Err(err) = initialize_logging(cli.debug) {
                eprintln!("Warning: failed to initialize logging: {err}");
            }
            run_parsed(&cli, &Context::live())
        }
        Err(err) => parse_failure(&err),
    };

    emit(&output);
    process::exit(output.exit_code);
}

fn emit(output: &CliOutput) {
    // A closed pipe (e.g. `| head`) is not worth reporting
    let mut stderr = std::io::stderr().lock();
    let _ = stderr.write_all(output.stderr.as_bytes());

    let mut stdout = std::io::stdout().lock();
    let _ = stdout.write_all(output.stdout.as_bytes());
    let _ = stdout.flush();
}
