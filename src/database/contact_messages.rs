// ABOUTME: Contact form submissions with field validation and persistence
// ABOUTME: Validates name, email, subject, and message before inserting into contact_messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use recipe_core::constants::contact;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use std::sync::LazyLock;
use tracing::info;

static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok());

/// Contact form as submitted by the browser
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactMessageForm {
    /// Sender name
    #[serde(default)]
    pub name: String,
    /// Sender email
    #[serde(default)]
    pub email: String,
    /// Optional subject line
    #[serde(default)]
    pub subject: String,
    /// Message body
    #[serde(default)]
    pub message: String,
}

/// A validation failure tied to one form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Form field name
    pub field: &'static str,
    /// Message shown next to the field
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl ContactMessageForm {
    /// Check every field and collect all failures
    #[must_use]
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(FieldError::new("name", "Name is required"));
        } else if name.chars().count() > contact::MAX_NAME_LEN {
            errors.push(FieldError::new(
                "name",
                format!("Name must be at most {} characters", contact::MAX_NAME_LEN),
            ));
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(FieldError::new("email", "Email is required"));
        } else if email.chars().count() > contact::MAX_EMAIL_LEN {
            errors.push(FieldError::new(
                "email",
                format!("Email must be at most {} characters", contact::MAX_EMAIL_LEN),
            ));
        } else if !is_valid_email(email) {
            errors.push(FieldError::new("email", "Invalid Email Format"));
        }

        if self.subject.trim().chars().count() > contact::MAX_SUBJECT_LEN {
            errors.push(FieldError::new(
                "subject",
                format!(
                    "Subject must be at most {} characters",
                    contact::MAX_SUBJECT_LEN
                ),
            ));
        }

        if self.message.trim().is_empty() {
            errors.push(FieldError::new("message", "Message is required"));
        }

        errors
    }
}

fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(email))
}

/// A stored contact message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    /// Store-assigned id
    pub id: i64,
    /// Sender name
    pub name: String,
    /// Sender email
    pub email: String,
    /// Subject, absent when left blank
    pub subject: Option<String>,
    /// Message body
    pub message: String,
    /// When the message was received
    pub date_sent: DateTime<Utc>,
}

/// Contact message database operations manager
#[derive(Clone)]
pub struct ContactMessagesManager {
    pool: SqlitePool,
}

impl ContactMessagesManager {
    /// Create a new contact message manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Validate and store a contact message
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` listing the failed fields, or a database error
    /// if the insert fails.
    pub async fn create(&self, form: &ContactMessageForm) -> AppResult<ContactMessage> {
        let errors = form.validate();
        if !errors.is_empty() {
            let fields = errors
                .iter()
                .map(|e| e.field)
                .collect::<Vec<_>>()
                .join(", ");
            return Err(AppError::invalid_input(format!(
                "Invalid contact form fields: {fields}"
            )));
        }

        let subject = Some(form.subject.trim()).filter(|s| !s.is_empty());
        let date_sent = Utc::now().trunc_subsecs(6);
        let result = sqlx::query(
            r"
            INSERT INTO contact_messages (name, email, subject, message, date_sent)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(form.name.trim())
        .bind(form.email.trim())
        .bind(subject)
        .bind(form.message.trim())
        .bind(date_sent.to_rfc3339_opts(SecondsFormat::Micros, true))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::database(format!("Failed to save contact message: {e}")).with_source(e)
        })?;

        let id = result.last_insert_rowid();
        info!(contact.id = id, "Contact message received");

        Ok(ContactMessage {
            id,
            name: form.name.trim().to_owned(),
            email: form.email.trim().to_owned(),
            subject: subject.map(ToOwned::to_owned),
            message: form.message.trim().to_owned(),
            date_sent,
        })
    }

    /// List stored messages, newest first
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails or a row cannot be decoded.
    pub async fn list(&self, limit: i64) -> AppResult<Vec<ContactMessage>> {
        let rows = sqlx::query(
            r"
            SELECT id, name, email, subject, message, date_sent
            FROM contact_messages
            ORDER BY date_sent DESC, id DESC
            LIMIT $1
            ",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::database(format!("Failed to list contact messages: {e}")).with_source(e)
        })?;

        rows.iter().map(row_to_contact_message).collect()
    }
}

fn row_to_contact_message(row: &SqliteRow) -> AppResult<ContactMessage> {
    let date_sent_str: String = row.get("date_sent");
    let date_sent = DateTime::parse_from_rfc3339(&date_sent_str)
        .map_err(|e| {
            AppError::database(format!("Invalid date_sent '{date_sent_str}': {e}")).with_source(e)
        })?
        .with_timezone(&Utc);

    Ok(ContactMessage {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        subject: row.get("subject"),
        message: row.get("message"),
        date_sent,
    })
}
