// ABOUTME: Contact page routes rendering the form and storing validated submissions
// ABOUTME: Invalid submissions re-render the form with field errors; CSRF failures are rejected
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::database::ContactMessageForm;
use crate::errors::AppError;
use crate::middleware::validate_csrf;
use crate::resources::ServerResources;
use crate::session::SessionContext;
use crate::views::{ContactPage, PageRenderer};
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Form, Router};
use serde::Deserialize;
use std::sync::Arc;
use tracing::error;

/// Contact form as posted, including the CSRF field
#[derive(Debug, Default, Deserialize)]
pub struct ContactSubmission {
    /// Sender name
    #[serde(default)]
    pub name: String,
    /// Sender email
    #[serde(default)]
    pub email: String,
    /// Optional subject
    #[serde(default)]
    pub subject: String,
    /// Message body
    #[serde(default)]
    pub message: String,
    /// CSRF token
    pub csrf_token: Option<String>,
}

impl From<ContactSubmission> for ContactMessageForm {
    fn from(submission: ContactSubmission) -> Self {
        Self {
            name: submission.name,
            email: submission.email,
            subject: submission.subject,
            message: submission.message,
        }
    }
}

/// Contact routes implementation
pub struct ContactRoutes;

impl ContactRoutes {
    /// Create contact routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/contact",
                get(Self::handle_contact_page).post(Self::handle_contact_submit),
            )
            .with_state(resources)
    }

    /// Handle GET /contact
    async fn handle_contact_page(Extension(session): Extension<SessionContext>) -> Html<String> {
        Html(PageRenderer::contact(
            &ContactPage {
                form: &ContactMessageForm::default(),
                errors: &[],
                sent: false,
            },
            session.csrf_token(),
        ))
    }

    /// Handle POST /contact
    async fn handle_contact_submit(
        State(resources): State<Arc<ServerResources>>,
        Extension(session): Extension<SessionContext>,
        method: Method,
        headers: HeaderMap,
        Form(submission): Form<ContactSubmission>,
    ) -> Result<Response, AppError> {
        validate_csrf(&session, &method, &headers, submission.csrf_token.as_deref())?;

        let form = ContactMessageForm::from(submission);
        let errors = form.validate();
        if !errors.is_empty() {
            let page = ContactPage {
                form: &form,
                errors: &errors,
                sent: false,
            };
            return Ok(Html(PageRenderer::contact(&page, session.csrf_token())).into_response());
        }

        match resources.database.contact_messages().create(&form).await {
            Ok(_) => {
                let page = ContactPage {
                    form: &ContactMessageForm::default(),
                    errors: &[],
                    sent: true,
                };
                Ok(Html(PageRenderer::contact(&page, session.csrf_token())).into_response())
            }
            Err(e) => {
                error!(error = %e, "Failed to store contact message");
                Ok((
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(PageRenderer::error(
                        "Message not sent",
                        "We couldn't save your message. Please try again later.",
                        session.csrf_token(),
                    )),
                )
                    .into_response())
            }
        }
    }
}
