use std::io::{BufRead, Write};

use clap::Parser;
use eyre::Result;

mod commands;
mod state;

use commands::{Outcome, SessionCommand};
use state::SessionState;

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("Surveillance des Effets Secondaires du Venetoclax");
    println!(
        "Entrez les résultats des paramètres cliniques et biologiques pour chaque jour.\n\
         Tapez `help` pour la liste des commandes, `quit` pour terminer la session."
    );

    let mut state = SessionState::default();
    let stdin = std::io::stdin();
    let mut line = String::new();

    loop {
        print!("venewatch> ");
        std::io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF ends the session
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match SessionCommand::try_parse_from(trimmed.split_whitespace()) {
            Ok(command) => match commands::dispatch(command, &mut state) {
                Ok(Outcome::Continue) => {}
                Ok(Outcome::Quit) => break,
                // A failed command is terminal for that action only; the
                // session and its history stay usable.
                Err(e) => eprintln!("Erreur : {e}"),
            },
            Err(e) => {
                let _ = e.print();
            }
        }
    }

    Ok(())
}
