use std::time::Duration;

use reqwest::Url;

use crate::error::{Result, SalusError};

pub const DEFAULT_BASE_URL: &str = "https://salus-it500.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const LOGIN_PATH: &str = "/public/login.php";
const DEVICES_PATH: &str = "/public/devices.php";
const READINGS_PATH: &str = "/public/ajax_device_values.php";
const SET_PATH: &str = "/includes/set.php";

/// The urls of the salus web service. Everything is derived from one base url
/// so that a client can be pointed at another host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: Url,
}

impl Default for Endpoints {
    fn default() -> Self {
        Endpoints {
            base: Url::parse(DEFAULT_BASE_URL).unwrap(),
        }
    }
}

impl Endpoints {
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url)
            .map_err(|err| SalusError::InvalidUrl(format!("{}: {}", base_url, err)))?;
        if base.cannot_be_a_base() {
            return Err(SalusError::InvalidUrl(format!(
                "{} cannot be used as base url",
                base_url
            )));
        }
        Ok(Endpoints { base })
    }

    pub fn base_url(&self) -> &str {
        self.base.as_str()
    }

    fn url(&self, path: &str) -> Url {
        let mut url = self.base.clone();
        let prefix = self.base.path().trim_end_matches('/');
        url.set_path(&format!("{}{}", prefix, path));
        url.set_query(None);
        url
    }

    pub fn login_url(&self) -> String {
        self.url(LOGIN_PATH).into()
    }

    pub fn devices_url(&self) -> String {
        self.url(DEVICES_PATH).into()
    }

    pub fn set_url(&self) -> String {
        self.url(SET_PATH).into()
    }

    /// Url of the json document with the current values of `device_id`.
    pub fn readings_url(&self, device_id: &str, token: &str) -> String {
        let mut url = self.url(READINGS_PATH);
        url.query_pairs_mut()
            .append_pair("devId", device_id)
            .append_pair("token", token);
        url.into()
    }
}

/// `url` without its query string. The query of authenticated requests
/// carries the session token, so only this form goes into logs and errors.
pub(crate) fn without_query(url: &str) -> &str {
    url.split_once('?').map_or(url, |(path, _)| path)
}

/// Settings for [`crate::SalusClient`] and [`crate::HttpTransport`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoints: Endpoints,
    /// Applies to the whole request, there is no other timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            endpoints: Endpoints::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
