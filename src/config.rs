use anyhow::Result;
use serde::Deserialize;

/// Placeholder substitué par l'identifiant du message dans l'URL de lecture
pub const MSGID_PLACEHOLDER: &str = "{msgid}";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub bank: BankConfig,
    pub webdriver: WebdriverConfig,
    pub data_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BankConfig {
    pub login_url: String,
    pub mail_url: String,
    pub message_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WebdriverConfig {
    pub url: String,
}

impl Config {
    pub fn new() -> Result<Self> {
        // Configuration chargée depuis les variables d'environnement,
        // avec les URLs Bankwest en valeurs par défaut
        let config = Config {
            bank: BankConfig {
                login_url: std::env::var("BANKMAIL_LOGIN_URL")
                    .unwrap_or_else(|_| "https://ibs.bankwest.com.au/Session/PersonalLogin".to_string()),
                mail_url: std::env::var("BANKMAIL_MAIL_URL")
                    .unwrap_or_else(|_| "https://ibs.bankwest.com.au/SecureMailWeb/MailPage.aspx?app=cm".to_string()),
                message_url: std::env::var("BANKMAIL_MESSAGE_URL")
                    .unwrap_or_else(|_| "https://ibs.bankwest.com.au/SecureMailWeb/ReadMailPage.aspx?msgid={msgid}&status=R".to_string()),
            },
            webdriver: WebdriverConfig {
                url: std::env::var("WEBDRIVER_URL")
                    .unwrap_or_else(|_| "http://localhost:4444".to_string()),
            },
            data_dir: std::env::var("DATA_DIR")
                .unwrap_or_else(|_| "./bankmail".to_string()),
        };

        if !config.bank.message_url.contains(MSGID_PLACEHOLDER) {
            anyhow::bail!(
                "BANKMAIL_MESSAGE_URL doit contenir le placeholder {}",
                MSGID_PLACEHOLDER
            );
        }

        Ok(config)
    }
}

impl BankConfig {
    /// Construit l'URL de lecture d'un message donné
    pub fn message_url_for(&self, message_id: &str) -> String {
        self.message_url.replace(MSGID_PLACEHOLDER, message_id)
    }
}
