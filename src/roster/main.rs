use clap::Parser;
use roster::api::RosterApi;
use roster::cli::menu::Menu;
use roster::error::Result;
use roster::store::RecordStore;
use std::io;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    if cli.plain {
        colored::control::set_override(false);
        console::set_colors_enabled(false);
    }

    let api = RosterApi::new(RecordStore::new());
    let stdin = io::stdin();
    let mut menu = Menu::new(api, stdin.lock(), io::stdout());
    menu.run()
}
