mod adapters;
mod cli;
mod config;
mod core;
mod logging;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let args = Cli::parse();

    logging::init_logging(args.verbose, args.quiet);
    cli::output::set_quiet(args.quiet);

    let config = args.config.as_deref();
    let as_user = args.as_user.as_deref();

    let result = match &args.command {
        Commands::View {
            category,
            filters,
            compact,
        } => cli::commands::view::execute(config, as_user, category, filters, *compact),
        Commands::Download {
            category,
            filters,
            output,
        } => cli::commands::download::execute(config, as_user, category, filters, output),
        Commands::Pattern => cli::commands::pattern::execute(config),
    };

    if let Err(e) = result {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
