use clap::Parser;

/// Arguments de ligne de commande pour retrieve-bankmail
#[derive(Parser, Debug)]
#[command(name = "retrieve-bankmail")]
#[command(about = "Récupère le bankmail depuis Bankwest Online Banking")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Logging verbeux (progression au niveau info)
    #[arg(short, long)]
    pub verbose: bool,

    /// Logging de debug
    #[arg(short, long)]
    pub debug: bool,

    /// Affiche le navigateur pendant l'automatisation
    #[arg(short = 's', long)]
    pub show_browser: bool,

    /// Limite du nombre de messages à récupérer (par défaut: tous)
    #[arg(short = 'l', long, value_parser = clap::value_parser!(u64).range(1..))]
    pub limit: Option<u64>,

    /// Forcer manuellement le niveau de log (error, warn, info, debug, trace)
    #[arg(short = 'g', long)]
    pub log_level: Option<String>,
}
