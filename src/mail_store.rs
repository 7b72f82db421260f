use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::info;
use regex::Regex;

use crate::bank_client::BankMessage;

/// Persists retrieved messages as one file per message under the data
/// directory.
pub struct MailStore {
    data_dir: PathBuf,
}

impl MailStore {
    pub fn new(data_dir: &str) -> Self {
        MailStore {
            data_dir: PathBuf::from(data_dir),
        }
    }

    /// Writes a message to disk, creating the data directory if needed.
    /// Returns the path of the written file.
    pub fn save_message(&self, message: &BankMessage) -> Result<PathBuf> {
        fs::create_dir_all(&self.data_dir)
            .context("Unable to create data directory")?;

        let file_path = self.data_dir.join(build_filename(message));

        fs::write(&file_path, render_message(message))
            .context("Unable to write message file")?;

        info!("Message saved: {:?}", file_path);
        Ok(file_path)
    }
}

/// Stored layout: a small header block followed by the body.
fn render_message(message: &BankMessage) -> String {
    format!(
        "ID: {}\nFrom: {}\nDate: {}\nSubject: {}\n\n{}\n",
        message.id,
        message.sender,
        message.date,
        message.subject,
        message.content.as_deref().unwrap_or("")
    )
}

/// Builds the stored filename, date-prefixed when the scraped date
/// parses (Bankwest lists dates as dd/mm/yyyy).
pub fn build_filename(message: &BankMessage) -> String {
    let subject = sanitize_subject(&message.subject);
    match NaiveDate::parse_from_str(message.date.trim(), "%d/%m/%Y") {
        Ok(date) => format!("{}_{}_{}.txt", date.format("%Y%m%d"), message.id, subject),
        Err(_) => format!("{}_{}.txt", message.id, subject),
    }
}

/// Keeps subjects filesystem-safe: any run of characters outside
/// [A-Za-z0-9._-] becomes a single underscore.
pub fn sanitize_subject(subject: &str) -> String {
    let unsafe_chars = Regex::new(r"[^A-Za-z0-9._-]+").unwrap();
    let cleaned = unsafe_chars.replace_all(subject.trim(), "_");
    let cleaned = cleaned.trim_matches('_');

    if cleaned.is_empty() {
        "message".to_string()
    } else {
        cleaned.to_string()
    }
}
