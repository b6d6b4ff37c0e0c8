use chattbot::addargs::parse_add_args;
use chattbot::config::BotConfig;
use chattbot::describe;
use chattbot::error::Result;
use chattbot::exec::{Executor, ShellRunner};
use chattbot::paths::BotPaths;
use chattbot::resolve::resolve;
use chattbot::validate::check_arguments;
use clap::Parser;
use colored::*;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let paths = BotPaths::discover()?;
    let config = BotConfig::load(paths.home()).unwrap_or_default();
    let verbose = cli.verbose || config.verbose;

    let resolved = resolve(&cli.action_type, &cli.request)?;
    let kwargs = parse_add_args(&cli.add_args)?;
    if verbose {
        println!(
            "{}",
            format!(
                "Resolved action_type='{}', request='{}'",
                resolved.action_type(),
                resolved.request()
            )
            .dimmed()
        );
    }

    if cli.describe {
        println!("{}", describe::render(&resolved));
        return Ok(());
    }

    check_arguments(resolved.request(), &kwargs)?;

    let runner = ShellRunner::new(config.shell.clone());
    let mut executor = Executor::new(runner, paths, verbose);
    executor.execute(&resolved, &kwargs)?;
    Ok(())
}
