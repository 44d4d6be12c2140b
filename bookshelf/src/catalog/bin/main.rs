use std::path::PathBuf;
use clap::Parser;
use tracing::info;
use bookshelf::catalog::controller::Menu;
use bookshelf::catalog::factory;
use bookshelf::core::controller::AppState;
use bookshelf::core::domain::{Configuration, DEFAULT_CATALOG_FILE};
use bookshelf::core::repository::RepositoryStore;
use bookshelf::utils::console::{ConsoleUserInput, ConsoleUserOutput};
use bookshelf::utils::logs::setup_tracing;

#[derive(Parser, Debug)]
#[command(name = "catalog")]
#[command(version)]
#[command(about = "Personal book catalog with title, author, ISBN and keyword search")]
struct Cli {
    /// JSON document holding the catalog
    #[arg(short, long, env = "BOOKSHELF_FILE", default_value = DEFAULT_CATALOG_FILE)]
    file: PathBuf,

    /// Where the catalog is persisted: `json` or `memory`
    #[arg(short, long, default_value_t = RepositoryStore::JsonFile)]
    store: RepositoryStore,
}

fn main() {
    setup_tracing();
    let cli = Cli::parse();

    let state = AppState::new(Configuration::new(&cli.file), cli.store);
    info!(file = %state.config.catalog_file.display(), store = %state.store, "starting catalog");

    let catalog_svc = factory::create_catalog_service(&state);
    let mut menu = Menu::new(ConsoleUserInput::stdin(), ConsoleUserOutput::stdout(), catalog_svc);
    menu.show();
}
