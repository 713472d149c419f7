use search_hub::tui::{runner, App};
use search_hub::{logging, Cli, SearchPanel};
use std::process;

fn main() {
    let cli = Cli::parse_args();

    if let Err(err) = cli.validate() {
        report(&err);
        process::exit(2);
    }

    if cli.debug {
        match logging::init_debug_logging() {
            Ok(path) => eprintln!("Debug log: {}", path.display()),
            Err(err) => report(&err),
        }
    }

    let mut panel = SearchPanel::with_system_clock(cli.mode, cli.delay());
    panel.set_query(cli.initial_query());
    if cli.submit {
        panel.submit_search();
    }

    let mut app = App::new(panel);
    if let Err(err) = runner::run(&mut app) {
        log::error!("{}", err);
        report(&err);
        process::exit(1);
    }
}

fn report(err: &search_hub::SearchError) {
    eprintln!("{}", err);
    if let Some(suggestion) = err.get_recovery_suggestion() {
        eprintln!("{}", suggestion);
    }
}
