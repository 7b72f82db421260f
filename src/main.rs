use anyhow::Result;
use clap::Parser;
use log::{debug, error, info, warn};

use retrieve_bankmail::cli::Args;
use retrieve_bankmail::config::Config;
use retrieve_bankmail::credentials;
use retrieve_bankmail::logging;
use retrieve_bankmail::mail_retriever::MailRetriever;

#[tokio::main]
async fn main() -> Result<()> {
    // Charger le fichier .env s'il existe
    dotenv::dotenv().ok();

    // Parser les arguments CLI
    let args = Args::parse();

    // Initialiser le logging, une seule fois par run
    let level = logging::resolve_log_level(args.log_level.as_deref(), args.debug, args.verbose);
    logging::init(level);

    if let Some(name) = &args.log_level {
        if logging::parse_level(name).is_none() {
            warn!("niveau de log inconnu '{}', niveau {} utilisé", name, level);
        }
    }
    debug!("niveau de log configuré : {}", level);

    // Charger la configuration
    let config = Config::new()?;

    // Résoudre les credentials avant toute action navigateur
    let creds = match credentials::resolve() {
        Ok(creds) => creds,
        Err(e) => {
            error!("Impossible de se connecter sans PAN et mot de passe : {}", e);
            return Err(e.into());
        }
    };

    info!("🚀 Démarrage de la récupération du bankmail");

    let retriever = MailRetriever::new(config, args.show_browser, args.limit);

    match retriever.retrieve(&creds).await {
        Ok(count) => {
            info!("✅ Récupération terminée avec succès. {} message(s) récupéré(s).", count);
            Ok(())
        }
        Err(e) => {
            error!("❌ Erreur lors de la récupération du bankmail : {}", e);
            Err(e)
        }
    }
}
