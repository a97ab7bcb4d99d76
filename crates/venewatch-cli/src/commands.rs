use std::path::PathBuf;

use clap::{Parser, Subcommand};

use venewatch_analysis::{evaluate, evaluate_history, summarize};
use venewatch_cli::config;
use venewatch_cli::entry::EntryForm;
use venewatch_core::models::PARAMETERS;
use venewatch_export::pdf::generate_pdf;
use venewatch_export::render::render_report;
use venewatch_export::ReportModel;
use venewatch_mail::{Mailer, MailerConfig};

use crate::state::{CachedReport, SessionState};

/// In-session command grammar, parsed per input line.
#[derive(Debug, Parser)]
#[command(name = "venewatch", no_binary_name = true)]
pub enum SessionCommand {
    /// Enregistrer les mesures d'une journée
    Add(EntryForm),

    /// Afficher l'historique des données enregistrées
    History,

    /// Analyse des effets secondaires sur tout l'historique
    Analysis,

    /// Générer le rapport PDF vers un fichier
    Report { path: PathBuf },

    /// Envoyer le rapport PDF par email
    Send {
        /// Adresse du destinataire
        #[arg(long)]
        to: String,

        #[arg(long, default_value = "Rapport de surveillance Venetoclax")]
        subject: String,
    },

    /// Configuration de l'envoi d'email
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Terminer la session (l'historique est perdu)
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Afficher la configuration email (mot de passe masqué)
    Show,

    /// Enregistrer la configuration SMTP
    Set {
        #[arg(long)]
        smtp_host: String,

        #[arg(long, default_value_t = 465)]
        smtp_port: u16,

        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,

        /// Adresse d'expéditeur
        #[arg(long)]
        from: String,
    },
}

pub enum Outcome {
    Continue,
    Quit,
}

/// Run one command against the session. An `Err` is terminal for this
/// command only; the caller keeps the session and history intact.
pub fn dispatch(command: SessionCommand, state: &mut SessionState) -> eyre::Result<Outcome> {
    match command {
        SessionCommand::Add(form) => add(form, state)?,
        SessionCommand::History => history(state),
        SessionCommand::Analysis => analysis(state),
        SessionCommand::Report { path } => report(path, state)?,
        SessionCommand::Send { to, subject } => send(&to, &subject, state)?,
        SessionCommand::Config(cmd) => config_command(cmd)?,
        SessionCommand::Quit => return Ok(Outcome::Quit),
    }
    Ok(Outcome::Continue)
}

fn add(form: EntryForm, state: &mut SessionState) -> eyre::Result<()> {
    let errors = form.validate();
    if !errors.is_empty() {
        for e in &errors {
            println!("  {e}");
        }
        return Err(eyre::eyre!(
            "saisie refusée : {} champ(s) hors bornes",
            errors.len()
        ));
    }

    let record = form.to_record();
    let anomalies = evaluate(&record, PARAMETERS);
    state.history.append(record);
    state.last_report = None;

    println!(
        "Les données ont été enregistrées avec succès ! ({} enregistrement(s))",
        state.history.len()
    );
    if anomalies.is_empty() {
        println!("  Aucune anomalie pour ce jour.");
    } else {
        for a in &anomalies {
            println!("  Anomalie — {a}");
        }
    }
    Ok(())
}

fn history(state: &SessionState) {
    if state.history.is_empty() {
        println!("Aucune donnée enregistrée.");
        return;
    }
    for record in state.history.all() {
        println!("Jour {} — saisi le {}", record.day, record.recorded_at);
        for def in PARAMETERS {
            if let Some(value) = record.reading(def.id) {
                println!("  {}: {} {}", def.label, value, def.unit);
            }
        }
    }
}

fn analysis(state: &SessionState) {
    if state.history.is_empty() {
        println!("Aucune donnée enregistrée.");
        return;
    }

    let lists = evaluate_history(&state.history, PARAMETERS);
    for (record, anomalies) in state.history.all().iter().zip(&lists) {
        if anomalies.is_empty() {
            println!("Jour {} : aucune anomalie", record.day);
        } else {
            println!("Jour {} :", record.day);
            for a in anomalies {
                println!("  {a}");
            }
        }
    }

    let summary = summarize(&lists, PARAMETERS);
    if summary.is_empty() {
        println!("Aucune anomalie critique détectée.");
    } else {
        println!(
            "Paramètres critiques détectés : {}. Veuillez consulter un médecin.",
            summary.join(", ")
        );
    }
}

/// Build the report artifacts if the cache is empty, then return them.
fn ensure_report(state: &mut SessionState) -> eyre::Result<&CachedReport> {
    if state.last_report.is_none() {
        let model = ReportModel::from_history(&state.history, PARAMETERS)?;
        let body = render_report(&model)?;
        let pdf = generate_pdf(&model)?;
        state.last_report = Some(CachedReport { pdf, body });
    }
    state
        .last_report
        .as_ref()
        .ok_or_else(|| eyre::eyre!("report cache unexpectedly empty"))
}

fn report(path: PathBuf, state: &mut SessionState) -> eyre::Result<()> {
    let cached = ensure_report(state)?;
    std::fs::write(&path, &cached.pdf)?;
    println!("Rapport écrit : {}", path.display());
    Ok(())
}

fn send(to: &str, subject: &str, state: &mut SessionState) -> eyre::Result<()> {
    if !config::has_config() {
        return Err(eyre::eyre!(
            "envoi impossible : configuration email absente (voir `config set`)"
        ));
    }
    let mail_config: MailerConfig = config::load_config()?;

    // Generate (or reuse) the report before contacting the server; a
    // transport failure leaves it cached for retry.
    let cached = ensure_report(state)?;
    let pdf = cached.pdf.clone();
    let body = cached.body.clone();

    Mailer::new(mail_config).send_report(to, subject, &body, pdf)?;
    println!("Rapport envoyé à {to}");
    Ok(())
}

fn config_command(command: ConfigCommand) -> eyre::Result<()> {
    match command {
        ConfigCommand::Show => {
            if !config::has_config() {
                println!("Aucune configuration email.");
                return Ok(());
            }
            let info = config::config_info(&config::load_config()?);
            println!("Serveur SMTP : {}:{}", info.smtp_host, info.smtp_port);
            println!("Utilisateur  : {}", info.username_hint);
            println!("Expéditeur   : {}", info.from_address);
        }
        ConfigCommand::Set {
            smtp_host,
            smtp_port,
            username,
            password,
            from,
        } => {
            config::save_config(&MailerConfig {
                smtp_host,
                smtp_port,
                username,
                password,
                from_address: from,
            })?;
            println!("Configuration enregistrée.");
        }
    }
    Ok(())
}
