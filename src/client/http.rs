//! HTTP client implementation for the BlueLink API.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::api::VehiclesService;
use crate::auth::Session;
use crate::models::envelope::Envelope;
use crate::models::{VehicleInfo, Vin};
use crate::{Credentials, Error, Result};

use super::config::ClientConfig;

/// Account-level servlet (vehicle listing).
pub(crate) const ACCOUNT_PATH: &str = "/bin/common/MyAccountServlet";
/// Servlet handling most remote commands.
pub(crate) const REMOTE_ACTION_PATH: &str = "/bin/common/remoteAction";
/// Servlet serving the maintenance timeline (odometer).
pub(crate) const VEHICLE_HEALTH_PATH: &str = "/bin/common/VehicleHealthServlet";

/// The main client for interacting with the BlueLink API.
///
/// The client owns the HTTP transport, the [`Session`], and the one-shot
/// vehicle cache. It is cheap to clone (all clones share the same session).
///
/// # Example
///
/// ```no_run
/// use bluelink_rs::{BlueLinkClient, Credentials};
///
/// # async fn example() -> bluelink_rs::Result<()> {
/// let client = BlueLinkClient::new(Credentials::new("me@example.com", "pw", "1234"))?;
/// client.login().await?;
///
/// for (vin, vehicle) in client.vehicles().list().await? {
///     println!("{} - {}", vehicle.model(), vin);
/// }
/// # Ok(())
/// # }
/// ```
pub struct BlueLinkClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) session: Session,
    pub(crate) config: ClientConfig,
    /// Vehicles fetched once per client, keyed by VIN. Plain data only;
    /// handles are built per access so the cache holds no client reference.
    pub(crate) vehicle_cache: RwLock<Option<HashMap<Vin, VehicleInfo>>>,
}

impl BlueLinkClient {
    /// Create an unauthenticated client with the default configuration.
    ///
    /// No network I/O happens until [`login`](Self::login) is called.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create an unauthenticated client with a custom configuration.
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        // The vendor's CSRF exchange is cookie-based, so the client keeps a
        // cookie store for the lifetime of the session.
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .cookie_store(true)
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                session: Session::new(credentials),
                config,
                vehicle_cache: RwLock::new(None),
            }),
        })
    }

    /// Authenticate against the vendor with the stored credentials.
    ///
    /// Three round trips against the vendor: CSRF bootstrap, CSRF
    /// validation, then the credential form. On success the session token
    /// is stored and every subsequent command is authenticated with it; on
    /// failure ([`Error::Authentication`]) the client stays
    /// unauthenticated. Re-calling re-authenticates, but callers should
    /// log in once per logical session.
    pub async fn login(&self) -> Result<()> {
        self.inner
            .session
            .login(&self.inner.http, &self.inner.config.base_url)
            .await
    }

    /// Get the vehicles service (account listing and VIN lookup).
    pub fn vehicles(&self) -> VehiclesService {
        VehiclesService::new(self.inner.clone())
    }

    /// Get a reference to the session.
    pub fn session(&self) -> &Session {
        &self.inner.session
    }

    /// Whether a login has succeeded on this client.
    pub async fn is_authenticated(&self) -> bool {
        self.inner.session.is_authenticated().await
    }
}

impl ClientInner {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Issue an authenticated remote command for one vehicle.
    ///
    /// The session token is checked before the request is built, so an
    /// unauthenticated call fails with [`Error::AuthenticationRequired`]
    /// and never reaches the network.
    pub(crate) async fn vehicle_command(
        &self,
        servlet_path: &str,
        action: &str,
        vehicle: &VehicleInfo,
        extra: Vec<(&'static str, String)>,
    ) -> Result<Envelope> {
        let mut form = self.session.command_form().await?;
        form.push(("vin", vehicle.vin.as_str().to_string()));
        form.push(("url", self.config.base_url.clone()));
        form.push(("gen", "2".to_string()));
        form.push(("regId", vehicle.registration_id.clone()));
        form.push(("service", action.to_string()));
        form.extend(extra);
        self.post_form(servlet_path, action, &form).await
    }

    /// Issue an authenticated account-level request.
    pub(crate) async fn account_request(&self, action: &str) -> Result<Envelope> {
        let mut form = self.session.account_form().await?;
        form.push((
            "url",
            format!("{}/us/en/page/dashboard.html", self.config.base_url),
        ));
        form.push(("service", action.to_string()));
        self.post_form(ACCOUNT_PATH, action, &form).await
    }

    /// POST a vendor form and decode the response envelope.
    ///
    /// This is the single decode boundary: a non-2xx status or a failure
    /// marker inside the envelope both surface as [`Error::Api`]; an
    /// undecodable body surfaces as [`Error::Json`].
    async fn post_form(
        &self,
        path: &str,
        action: &str,
        form: &[(&'static str, String)],
    ) -> Result<Envelope> {
        tracing::debug!(action, path, "sending BlueLink request");
        let response = self
            .http
            .post(self.url(path))
            .header("csrf-token", "undefined")
            .header("x-requested-with", "XMLHttpRequest")
            .form(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Api {
                action: action.to_string(),
                message: format!("responded with status code {status}"),
            });
        }

        let body = response.text().await?;
        let envelope: Envelope = serde_json::from_str(&body)?;
        Ok(envelope)
    }
}

impl Clone for BlueLinkClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for BlueLinkClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlueLinkClient")
            .field("config", &self.inner.config)
            .field("session", &self.inner.session)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_vehicle() -> VehicleInfo {
        VehicleInfo {
            vin: Vin::new("KMHL14JA5MA123456"),
            nickname: "Sonata".to_string(),
            model: "Sonata SEL".to_string(),
            year: 2021,
            registration_id: "REG-1".to_string(),
            has_bluelink: true,
        }
    }

    #[tokio::test]
    async fn test_command_before_login_never_reaches_network() {
        // Nothing listens on this address; reaching the network would
        // surface a Transport error rather than AuthenticationRequired.
        let client = BlueLinkClient::with_config(
            Credentials::new("me@example.com", "pw", "1234"),
            ClientConfig::default().with_base_url("http://127.0.0.1:9"),
        )
        .unwrap();

        let result = client
            .inner
            .vehicle_command(REMOTE_ACTION_PATH, "remotelock", &test_vehicle(), Vec::new())
            .await;
        assert!(matches!(result, Err(Error::AuthenticationRequired)));
    }
}
