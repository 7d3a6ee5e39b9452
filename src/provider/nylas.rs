//! Nylas v3 implementation of `CalendarProvider`

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{
    Calendar, CalendarEvent, CalendarProvider, DataEnvelope, EventQuery, NewEvent, ProviderError,
    ProviderResponse, TokenGrant,
};
use crate::core::AppConfig;

#[derive(Serialize)]
struct CodeExchangeRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    code: &'a str,
    redirect_uri: &'a str,
    grant_type: &'static str,
}

#[derive(Clone, Debug)]
pub struct NylasClient {
    client: Client,
    api_uri: String,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    scope: Option<String>,
}

impl NylasClient {
    pub fn new(config: &AppConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        // The API key doubles as the client secret for v3 applications
        let client_secret = if config.nylas_client_secret.is_empty() {
            config.nylas_api_key.clone()
        } else {
            config.nylas_client_secret.clone()
        };

        Ok(Self {
            client,
            api_uri: config.nylas_api_uri.trim_end_matches('/').to_string(),
            client_id: config.nylas_client_id.clone(),
            client_secret,
            redirect_uri: config.nylas_redirect_uri.clone(),
            scope: config.nylas_scope.clone(),
        })
    }

    fn grant_url(&self, resource: &str) -> String {
        format!("{}/v3/grants/me/{}", self.api_uri, resource)
    }

    async fn get_data<T: DeserializeOwned>(
        &self,
        url: &str,
        access_token: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, ProviderError> {
        tracing::debug!("GET {} {:?}", url, query);
        let res = self
            .client
            .get(url)
            .bearer_auth(access_token)
            .header("Accept", "application/json")
            .query(query)
            .send()
            .await?;
        let status = res.status();
        let text = res.text().await?;
        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body: text,
            });
        }
        let envelope: DataEnvelope<T> = serde_json::from_str(&text)?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl CalendarProvider for NylasClient {
    fn authorization_url(&self) -> String {
        let mut url = format!(
            "{}/v3/connect/auth?client_id={}&redirect_uri={}&response_type=code&access_type=online",
            self.api_uri,
            urlencoding::encode(&self.client_id),
            urlencoding::encode(&self.redirect_uri),
        );
        if let Some(scope) = &self.scope {
            url.push_str(&format!("&scope={}", urlencoding::encode(scope)));
        }
        url
    }

    async fn exchange_code(&self, code: &str) -> Result<TokenGrant, ProviderError> {
        let url = format!("{}/v3/connect/token", self.api_uri);
        let body = CodeExchangeRequest {
            client_id: &self.client_id,
            client_secret: &self.client_secret,
            code,
            redirect_uri: &self.redirect_uri,
            grant_type: "authorization_code",
        };
        let res = self.client.post(&url).json(&body).send().await?;
        let status = res.status();
        let text = res.text().await?;
        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body: text,
            });
        }
        let grant: TokenGrant = serde_json::from_str(&text)?;
        tracing::debug!("Exchanged code for grant {}", grant.grant_id);
        Ok(grant)
    }

    async fn list_calendars(&self, access_token: &str) -> Result<Vec<Calendar>, ProviderError> {
        self.get_data(&self.grant_url("calendars"), access_token, &[])
            .await
    }

    async fn list_events(
        &self,
        access_token: &str,
        query: &EventQuery,
    ) -> Result<Vec<CalendarEvent>, ProviderError> {
        let params = [
            ("calendar_id", query.calendar_id.clone()),
            ("start", query.start.to_string()),
            ("end", query.end.to_string()),
        ];
        self.get_data(&self.grant_url("events"), access_token, &params)
            .await
    }

    async fn create_event(
        &self,
        access_token: &str,
        calendar_id: &str,
        event: &NewEvent,
    ) -> Result<ProviderResponse, ProviderError> {
        let url = self.grant_url("events");
        tracing::debug!("POST {} calendar_id={}", url, calendar_id);
        let res = self
            .client
            .post(&url)
            .bearer_auth(access_token)
            .header("Accept", "application/json")
            .query(&[("calendar_id", calendar_id)])
            .json(event)
            .send()
            .await?;
        let status = res.status().as_u16();
        let body = res.text().await?;
        Ok(ProviderResponse { status, body })
    }
}
