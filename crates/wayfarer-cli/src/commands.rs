use crate::args::{Cli, Commands, VisitCommand};
use crate::config::{resolve_data_dir, Config};
use crate::handlers;
use crate::store::Store;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref());
    let store = Store::open(&data_dir);
    let config = Config::load_from(&data_dir.join("config.toml"))?;

    let catalog_path = cli
        .catalog
        .clone()
        .or_else(|| config.catalog.as_ref().map(|p| store.resolve_catalog_path(p)));
    let catalog = store.load_catalog(catalog_path.as_deref())?;

    match cli.command {
        Commands::Mark { code, status } => handlers::mark::handle(&store, &code, status.into()),

        Commands::Visit { command } => match command {
            VisitCommand::Add {
                code,
                year,
                month,
                day,
                depart_year,
                depart_month,
                depart_day,
                transport,
                note,
            } => handlers::visit::handle_add(
                &store,
                handlers::visit::AddArgs {
                    code,
                    year,
                    month,
                    day,
                    depart_year,
                    depart_month,
                    depart_day,
                    transport: transport.map(Into::into),
                    note,
                },
            ),
            VisitCommand::Remove { code, id } => {
                handlers::visit::handle_remove(&store, &code, &id)
            }
        },

        Commands::History => handlers::history::handle(&store, &catalog, cli.format),
        Commands::Stats => handlers::stats::handle(&store, &catalog, cli.format),
        Commands::Visas => handlers::visas::handle(&store, &catalog, cli.format),
        Commands::Export { out } => handlers::export::handle(&store, out.as_deref()),
        Commands::Import { file, dry_run } => handlers::import::handle(&store, &file, dry_run),
    }
}
