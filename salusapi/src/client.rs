use crate::api;
use crate::config::{ClientConfig, Endpoints};
use crate::credentials::Credentials;
use crate::devices::{check_target_temperature, Device, DeviceReading};
use crate::error::Result;
use crate::transport::{HttpTransport, Transport};

/// The main interface to get data from the salus web service.
///
/// The session token is requested on first use and then kept for the lifetime
/// of the client. Nothing is retried: if the token expired, call
/// [`SalusClient::get_token_from_api`] (or [`SalusClient::invalidate_token`])
/// and try again. Methods take `&mut self`, share a client between threads
/// only behind a lock.
pub struct SalusClient<T = HttpTransport> {
    credentials: Credentials,
    endpoints: Endpoints,
    transport: T,
    token: Option<String>,
}

impl SalusClient<HttpTransport> {
    /// Fails if the credentials are malformed, no request is made.
    pub fn new(user: impl ToString, password: impl ToString) -> Result<Self> {
        Self::with_config(user, password, ClientConfig::default())
    }

    pub fn with_config(
        user: impl ToString,
        password: impl ToString,
        config: ClientConfig,
    ) -> Result<Self> {
        let credentials = Credentials::new(user, password)?;
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(credentials, config.endpoints, transport))
    }
}

impl<T: Transport> SalusClient<T> {
    pub fn with_transport(credentials: Credentials, endpoints: Endpoints, transport: T) -> Self {
        SalusClient {
            credentials,
            endpoints,
            transport,
            token: None,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Logs in and keeps the returned token, replacing the current one.
    pub fn get_token_from_api(&mut self) -> Result<String> {
        let token = api::get_token(&self.transport, &self.endpoints, &self.credentials)?;
        self.token = Some(token.clone());
        Ok(token)
    }

    /// The current token, logs in if there is none yet.
    pub fn token(&mut self) -> Result<String> {
        match &self.token {
            Some(token) => Ok(token.clone()),
            None => self.get_token_from_api(),
        }
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Forgets the token, the next request will log in again.
    pub fn invalidate_token(&mut self) {
        self.token = None;
    }

    /// Returns all thermostats of the account in the order the service lists
    /// them.
    pub fn get_devices(&mut self) -> Result<Vec<Device>> {
        let token = self.token()?;
        api::fetch_devices(&self.transport, &self.endpoints, &token)
    }

    pub fn get_device_reading(&mut self, device_id: impl AsRef<str>) -> Result<DeviceReading> {
        let token = self.token()?;
        api::fetch_device_reading(&self.transport, &self.endpoints, device_id.as_ref(), &token)
    }

    /// Url of the readings document of `device_id` for this client's host.
    pub fn readings_url(&self, device_id: &str, token: &str) -> String {
        self.endpoints.readings_url(device_id, token)
    }

    /// Sets the target temperature (°C) of `device_id`.
    pub fn set_target_temperature(
        &mut self,
        device_id: impl AsRef<str>,
        celsius: f64,
    ) -> Result<()> {
        let celsius = check_target_temperature(celsius)?;
        let token = self.token()?;
        api::set_target_temperature(
            &self.transport,
            &self.endpoints,
            device_id.as_ref(),
            &token,
            celsius,
        )
    }
}

// -=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-
