use anyhow::Result;
use clap::Parser;
use shelfscope::cli::{Cli, Commands};
use shelfscope::commands::{
    handle_categories, handle_list, handle_show, handle_summary, init_config, GlobalOptions,
    ListConfig, ShowConfig, SummaryConfig,
};
use shelfscope::observability::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    let global = GlobalOptions {
        config: cli.config,
        plain: cli.plain,
    };

    match cli.command {
        Commands::List {
            snapshot,
            search,
            status,
            category,
            sort,
            direction,
            limit,
            format,
            output,
        } => handle_list(
            ListConfig {
                snapshot,
                search,
                status,
                category,
                sort,
                direction,
                limit,
                format,
                output,
            },
            &global,
        ),
        Commands::Show {
            snapshot,
            id,
            format,
        } => handle_show(
            ShowConfig {
                snapshot,
                id,
                format,
            },
            &global,
        ),
        Commands::Summary {
            snapshot,
            top_flags,
            format,
            output,
        } => handle_summary(
            SummaryConfig {
                snapshot,
                top_flags,
                format,
                output,
            },
            &global,
        ),
        Commands::Categories { snapshot } => handle_categories(&snapshot),
        Commands::Init { force } => init_config(force),
    }
}
