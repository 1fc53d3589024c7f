use std::process::ExitCode;

use clap::Parser;

use oc_migrate::check::report::{print_lines, render_error, render_report};
use oc_migrate::check::run_check;
use oc_migrate::cli::Cli;
use oc_migrate::error::CheckError;
use oc_migrate::logging;
use oc_migrate::version::registries::{NpmIndex, OcRegistry, build_client};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Help and version requests are not errors; clap prints them and exits 0
        Err(err) if !err.use_stderr() => err.exit(),
        Err(_) => {
            print_lines(&[render_error(CheckError::usage())], true);
            return ExitCode::FAILURE;
        }
    };

    logging::init(cli.verbose);
    let color = !cli.no_color;

    match run(&cli, color) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_lines(&[render_error(format!("{err:#}"))], color);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, color: bool) -> anyhow::Result<()> {
    let config = cli.config();
    let client = build_client()?;
    let index = NpmIndex::new(client.clone(), &config.index_url);
    let registry = OcRegistry::new(client, &config.registry_url);

    let report = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run_check(&index, &registry, &config))?;

    print_lines(&render_report(&report, &config.cutoff), color);
    Ok(())
}
