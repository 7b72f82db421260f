use anyhow::{Context, Result};
use fantoccini::elements::Element;
use fantoccini::{Client, ClientBuilder, Locator};
use log::{debug, info};
use serde_json::json;

use crate::config::{BankConfig, WebdriverConfig};
use crate::credentials::Credential;

// Sélecteurs CSS de l'interface Bankwest
const PAN_INPUT: &str = "input[name=\"PAN\"]";
const PASSWORD_INPUT: &str = "input[name=\"Password\"]";
const LOGIN_BUTTON: &str = "button[name=\"button\"]";
const LOGOUT_BUTTON: &str = ".logoutButton";
const MAIL_COLUMN: &str = "#leftColumn";
const MESSAGE_ROWS: &str = ".MasterTable_default > tbody > tr";
const MESSAGE_BODY: &str = "span[id$=\"lblBody\"]";

/// Un message bankmail tel que listé dans la messagerie sécurisée
#[derive(Debug, Clone)]
pub struct BankMessage {
    pub id: String,
    pub subject: String,
    pub sender: String,
    pub date: String,
    pub content: Option<String>,
}

impl BankMessage {
    /// Journalise le message au niveau info
    pub fn log(&self) {
        info!("ID: {}", self.id);
        info!("From: {}", self.sender);
        info!("Subject: {}", self.subject);
        info!("Date: {}", self.date);
        if let Some(content) = &self.content {
            info!("Content: {}", content);
        }
    }
}

pub struct BankClient {
    client: Client,
    bank: BankConfig,
}

impl BankClient {
    /// Ouvre une session WebDriver, headless sauf si show_browser
    pub async fn connect(
        webdriver: &WebdriverConfig,
        bank: BankConfig,
        show_browser: bool,
    ) -> Result<Self> {
        info!("Connexion au serveur WebDriver {}", webdriver.url);

        let mut chrome_args = vec!["--disable-gpu", "--window-size=1280,1024"];
        if !show_browser {
            chrome_args.push("--headless=new");
        }

        let mut capabilities = serde_json::map::Map::new();
        capabilities.insert(
            "goog:chromeOptions".to_string(),
            json!({ "args": chrome_args }),
        );

        let client = ClientBuilder::native()
            .capabilities(capabilities)
            .connect(&webdriver.url)
            .await
            .context("Impossible de se connecter au serveur WebDriver")?;

        Ok(BankClient { client, bank })
    }

    /// Effectue la séquence de login Bankwest
    pub async fn login(&self, credentials: &Credential) -> Result<()> {
        debug!("chargement de {}", self.bank.login_url);
        self.client
            .goto(&self.bank.login_url)
            .await
            .context("Impossible de charger la page de login")?;

        self.client
            .wait()
            .for_element(Locator::Css(PAN_INPUT))
            .await
            .context("Champ PAN introuvable sur la page de login")?
            .send_keys(&credentials.pan)
            .await
            .context("Impossible de saisir le PAN")?;

        self.client
            .find(Locator::Css(PASSWORD_INPUT))
            .await
            .context("Champ mot de passe introuvable")?
            .send_keys(&credentials.password)
            .await
            .context("Impossible de saisir le mot de passe")?;

        self.client
            .find(Locator::Css(LOGIN_BUTTON))
            .await
            .context("Bouton de login introuvable")?
            .click()
            .await
            .context("Impossible de cliquer sur le bouton de login")?;

        // La page authentifiée est reconnue par son bouton de déconnexion
        debug!("attente de la fin du login");
        self.client
            .wait()
            .for_element(Locator::Css(LOGOUT_BUTTON))
            .await
            .context("Login échoué : la page authentifiée n'est jamais apparue")?;

        info!("Login réussi");
        Ok(())
    }

    /// Navigue vers la messagerie sécurisée
    pub async fn open_mail_page(&self) -> Result<()> {
        debug!("navigation vers la page de messagerie {}", self.bank.mail_url);
        self.client
            .goto(&self.bank.mail_url)
            .await
            .context("Impossible de charger la page de messagerie")?;

        self.client
            .wait()
            .for_element(Locator::Css(MAIL_COLUMN))
            .await
            .context("La page de messagerie ne s'est jamais chargée")?;

        Ok(())
    }

    /// Énumère les messages listés, bornés par la limite éventuelle
    pub async fn list_messages(&self, limit: Option<u64>) -> Result<Vec<BankMessage>> {
        let rows = self
            .client
            .find_all(Locator::Css(MESSAGE_ROWS))
            .await
            .context("Impossible d'énumérer les lignes de la messagerie")?;

        let total = rows.len();
        let rows = apply_limit(rows, limit);
        debug!("{} message(s) listé(s), {} retenu(s)", total, rows.len());

        let mut messages = Vec::with_capacity(rows.len());
        for row in &rows {
            messages.push(scrape_row(row).await?);
        }

        Ok(messages)
    }

    /// Récupère le corps d'un message
    pub async fn fetch_content(&self, message_id: &str) -> Result<String> {
        let url = self.bank.message_url_for(message_id);
        debug!("chargement du message {}", message_id);
        self.client
            .goto(&url)
            .await
            .context("Impossible de charger la page du message")?;

        let body = self
            .client
            .wait()
            .for_element(Locator::Css(MESSAGE_BODY))
            .await
            .context("Le corps du message ne s'est jamais chargé")?;

        let raw = body
            .html(true)
            .await
            .context("Impossible de lire le corps du message")?;

        Ok(normalize_body(&raw))
    }

    /// Termine la session WebDriver
    pub async fn close(self) -> Result<()> {
        debug!("fermeture de la session navigateur");
        self.client
            .close()
            .await
            .context("Impossible de fermer la session navigateur")?;
        Ok(())
    }
}

/// Applique la limite éventuelle à une liste de messages
pub fn apply_limit<T>(items: Vec<T>, limit: Option<u64>) -> Vec<T> {
    match limit {
        Some(limit) => items.into_iter().take(limit as usize).collect(),
        None => items,
    }
}

/// Extrait les métadonnées d'une ligne du tableau des messages
async fn scrape_row(row: &Element) -> Result<BankMessage> {
    let subject = row
        .find(Locator::Css("a > div"))
        .await
        .context("Sujet introuvable dans la ligne de message")?
        .text()
        .await
        .context("Impossible de lire le sujet")?;

    let cells = row
        .find_all(Locator::Css("td"))
        .await
        .context("Cellules introuvables dans la ligne de message")?;
    if cells.len() < 5 {
        anyhow::bail!("Ligne de message incomplète : {} cellule(s)", cells.len());
    }

    let date = cells[2]
        .text()
        .await
        .context("Impossible de lire la date")?;
    let sender = cells[4]
        .find(Locator::Css("div"))
        .await
        .context("Expéditeur introuvable dans la ligne de message")?
        .text()
        .await
        .context("Impossible de lire l'expéditeur")?;

    let id = row
        .find(Locator::Css("td > input"))
        .await
        .context("Identifiant introuvable dans la ligne de message")?
        .attr("value")
        .await
        .context("Impossible de lire l'identifiant")?
        .ok_or_else(|| anyhow::anyhow!("Ligne de message sans attribut value"))?;

    Ok(BankMessage {
        id,
        subject,
        sender,
        date,
        content: None,
    })
}

/// Normalise le HTML du corps d'un message : les <br> deviennent des
/// sauts de ligne, les autres balises sont supprimées
pub fn normalize_body(raw: &str) -> String {
    let br_regex = regex::Regex::new(r"(?i)<br\s*/?>").unwrap();
    let tag_regex = regex::Regex::new(r"<[^>]+>").unwrap();

    let with_breaks = br_regex.replace_all(raw, "\n");
    let text = tag_regex.replace_all(&with_breaks, "");
    text.trim().to_string()
}
