//! services/whatsapp_dispatcher.rs
//! Capacidad de envío de mensajes WhatsApp: Twilio real o mock, según
//! haya credenciales al arrancar.

use std::sync::Arc;

use futures::future::BoxFuture;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

use crate::config::app_config::TwilioConfig;

/// Prefijo de los SID sintéticos del mock; Twilio usa `SM...`/`MM...`.
pub const MOCK_SID_PREFIX: &str = "mock_sid_";

#[derive(Debug, Clone, PartialEq)]
pub struct OutboundMessage {
    pub from: String,
    pub to: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DispatchReceipt {
    pub sid: String,
    /// true si no se envió nada realmente
    pub mocked: bool,
}

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("respuesta inválida del proveedor: {0}")]
    InvalidResponse(String),
}

pub trait MessageDispatcher: Send + Sync {
    fn dispatch<'a>(
        &'a self,
        message: &'a OutboundMessage,
    ) -> BoxFuture<'a, Result<DispatchReceipt, DispatchError>>;
}

/// Elige la implementación según las credenciales configuradas.
pub fn dispatcher_from_config(config: &TwilioConfig) -> Arc<dyn MessageDispatcher> {
    match config.credentials() {
        Some((account_sid, auth_token)) => {
            log::info!("(whatsapp) Usando Twilio en {}", config.api_base);
            Arc::new(TwilioDispatcher::new(
                Client::new(),
                &config.api_base,
                account_sid,
                auth_token,
            ))
        }
        None => {
            log::warn!("Twilio credentials not found; WhatsApp messages will be mocked");
            Arc::new(MockDispatcher)
        }
    }
}

#[derive(Clone)]
pub struct TwilioDispatcher {
    http_client: Client,
    api_base: String,
    account_sid: String,
    auth_token: String,
}

#[derive(Deserialize)]
struct TwilioMessage {
    sid: String,
}

#[derive(Deserialize)]
struct TwilioErrorBody {
    message: String,
}

impl TwilioDispatcher {
    pub fn new(http_client: Client, api_base: &str, account_sid: &str, auth_token: &str) -> Self {
        Self {
            http_client,
            api_base: api_base.trim_end_matches('/').to_string(),
            account_sid: account_sid.to_string(),
            auth_token: auth_token.to_string(),
        }
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.api_base, self.account_sid
        )
    }

    async fn create_message(
        &self,
        message: &OutboundMessage,
    ) -> Result<DispatchReceipt, DispatchError> {
        let resp = self
            .http_client
            .post(self.messages_url())
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&[
                ("From", message.from.as_str()),
                ("To", message.to.as_str()),
                ("Body", message.body.as_str()),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body_txt = resp.text().await?;
            // Twilio responde {"code":..., "message": "..."}; si no, el body crudo
            let message = serde_json::from_str::<TwilioErrorBody>(&body_txt)
                .map(|b| b.message)
                .unwrap_or(body_txt);
            return Err(DispatchError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let created = resp
            .json::<TwilioMessage>()
            .await
            .map_err(|e| DispatchError::InvalidResponse(e.to_string()))?;

        Ok(DispatchReceipt {
            sid: created.sid,
            mocked: false,
        })
    }
}

impl MessageDispatcher for TwilioDispatcher {
    fn dispatch<'a>(
        &'a self,
        message: &'a OutboundMessage,
    ) -> BoxFuture<'a, Result<DispatchReceipt, DispatchError>> {
        Box::pin(self.create_message(message))
    }
}

/// Dispatcher de desarrollo: nunca falla y no envía nada.
#[derive(Clone, Copy, Debug, Default)]
pub struct MockDispatcher;

impl MessageDispatcher for MockDispatcher {
    fn dispatch<'a>(
        &'a self,
        message: &'a OutboundMessage,
    ) -> BoxFuture<'a, Result<DispatchReceipt, DispatchError>> {
        Box::pin(async move {
            log::info!("Mock WhatsApp message - Would send to {}", message.to);
            Ok(DispatchReceipt {
                sid: format!("{}{}", MOCK_SID_PREFIX, Uuid::new_v4()),
                mocked: true,
            })
        })
    }
}
