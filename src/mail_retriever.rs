use anyhow::{Context, Result};
use log::{debug, error, info, warn};

use crate::bank_client::BankClient;
use crate::config::Config;
use crate::credentials::{self, Credential};
use crate::mail_store::MailStore;

/// Orchestration de la récupération du bankmail
pub struct MailRetriever {
    config: Config,
    show_browser: bool,
    limit: Option<u64>,
}

impl MailRetriever {
    pub fn new(config: Config, show_browser: bool, limit: Option<u64>) -> Self {
        MailRetriever {
            config,
            show_browser,
            limit,
        }
    }

    /// Exécute la séquence complète et retourne le nombre de messages
    /// récupérés. La session navigateur est fermée sur tous les chemins
    /// de sortie.
    pub async fn retrieve(&self, credentials: &Credential) -> Result<usize> {
        // 1. Ouvrir la session navigateur
        let client = BankClient::connect(
            &self.config.webdriver,
            self.config.bank.clone(),
            self.show_browser,
        )
        .await
        .context("Impossible d'ouvrir la session navigateur")?;

        let result = self.retrieve_with_client(&client, credentials).await;

        if let Err(e) = client.close().await {
            warn!("Fermeture de la session navigateur échouée : {}", e);
        }

        result
    }

    async fn retrieve_with_client(
        &self,
        client: &BankClient,
        credentials: &Credential,
    ) -> Result<usize> {
        // 2. Login — en cas d'échec, purger les entrées du trousseau pour
        //    que le prochain run redemande la saisie
        if let Err(e) = client.login(credentials).await {
            error!("Login échoué : {}", e);
            credentials::clear_stored(&credentials.pan);
            return Err(e).context("Login Bankwest échoué");
        }

        // 3. Naviguer vers la messagerie
        client
            .open_mail_page()
            .await
            .context("Impossible d'ouvrir la messagerie")?;

        // 4. Énumérer les messages (bornés par la limite éventuelle)
        let mut messages = client.list_messages(self.limit).await?;
        info!("{} message(s) à récupérer", messages.len());

        // 5. Récupérer le contenu et sauvegarder chaque message
        let store = MailStore::new(&self.config.data_dir);
        for message in &mut messages {
            let content = client
                .fetch_content(&message.id)
                .await
                .with_context(|| format!("Impossible de récupérer le message {}", message.id))?;
            message.content = Some(content);
            message.log();

            let path = store
                .save_message(message)
                .with_context(|| format!("Impossible de sauvegarder le message {}", message.id))?;
            debug!("message {} sauvegardé dans {:?}", message.id, path);
        }

        info!("Récupération terminée : {} message(s)", messages.len());
        Ok(messages.len())
    }
}
