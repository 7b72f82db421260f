use log::LevelFilter;

/// Tente de parser un nom de niveau de log (insensible à la casse).
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    name.trim().parse::<LevelFilter>().ok()
}

/// Résout le niveau de log à partir des options de la ligne de commande.
///
/// Précédence : `--log-level` explicite > `--debug` > `--verbose` > défaut
/// (warn). Un nom de niveau inconnu est ignoré et la résolution continue
/// avec le reste de la chaîne.
pub fn resolve_log_level(log_level: Option<&str>, debug: bool, verbose: bool) -> LevelFilter {
    if let Some(name) = log_level {
        if let Some(level) = parse_level(name) {
            return level;
        }
    }

    if debug {
        LevelFilter::Debug
    } else if verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    }
}

/// Initialise le logger du process. À appeler une seule fois par run,
/// avant toute action réseau ou navigateur.
pub fn init(level: LevelFilter) {
    env_logger::Builder::new().filter_level(level).init();
}
