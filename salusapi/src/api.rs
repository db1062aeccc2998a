use tracing::{debug, info};

use crate::config::{without_query, Endpoints};
use crate::credentials::Credentials;
use crate::devices::{check_target_temperature, Device, DeviceReading};
use crate::error::{Result, SalusError};
use crate::salus_html;
use crate::salus_json;
use crate::transport::{HttpResponse, Transport};

/// Url of the readings document of `device_id` on salus-it500.com.
pub fn readings_url(device_id: &str, token: &str) -> String {
    Endpoints::default().readings_url(device_id, token)
}

fn ensure_success(url: &str, response: HttpResponse) -> Result<String> {
    if !response.status.is_success() {
        return Err(SalusError::ApiRequest {
            url: without_query(url).to_string(),
            status: response.status,
        });
    }
    Ok(response.body)
}

// -=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-

/// Logs in and returns the session token. The login endpoint answers with the
/// bare token as body.
pub(crate) fn get_token(
    transport: &impl Transport,
    endpoints: &Endpoints,
    credentials: &Credentials,
) -> Result<String> {
    let url = endpoints.login_url();
    let response = transport.post_form(
        &url,
        &[
            ("IDemail", credentials.username()),
            ("password", credentials.password()),
            ("login", "Login"),
        ],
    )?;

    if !response.status.is_success() {
        return Err(SalusError::LoginError(format!(
            "login for user {} failed with status {}",
            credentials.username(),
            response.status
        )));
    }

    let token = response.body.trim();
    if token.is_empty() {
        return Err(SalusError::LoginError(format!(
            "login for user {} did not return a token",
            credentials.username()
        )));
    }

    info!("[salus api] logged in as {}", credentials.username());
    Ok(token.to_string())
}

/// Requests & parses the [`Device`]s of the account.
pub(crate) fn fetch_devices(
    transport: &impl Transport,
    endpoints: &Endpoints,
    token: &str,
) -> Result<Vec<Device>> {
    let url = endpoints.devices_url();
    let response = transport.get(&url, &[("token", token)])?;
    let html = ensure_success(&url, response)?;
    let devices = salus_html::parse_devices(&html)?;
    info!("[salus api] found {} devices", devices.len());
    Ok(devices)
}

/// Requests & parses the current [`DeviceReading`] of `device_id`.
pub(crate) fn fetch_device_reading(
    transport: &impl Transport,
    endpoints: &Endpoints,
    device_id: &str,
    token: &str,
) -> Result<DeviceReading> {
    let url = endpoints.readings_url(device_id, token);
    let response = transport.get(&url, &[])?;
    let json = ensure_success(&url, response)?;
    let reading = salus_json::parse_device_reading(&json)?;
    debug!("[salus api] device {}: {}", device_id, reading);
    Ok(reading)
}

/// Changes the target temperature of `device_id`. Only values the thermostat
/// can be set to are sent.
pub(crate) fn set_target_temperature(
    transport: &impl Transport,
    endpoints: &Endpoints,
    device_id: &str,
    token: &str,
    celsius: f64,
) -> Result<()> {
    let celsius = check_target_temperature(celsius)?;
    let url = endpoints.set_url();
    let temperature = format!("{:.1}", celsius);
    let response = transport.post_form(
        &url,
        &[
            ("token", token),
            ("devId", device_id),
            ("tempUnit", "0"),
            ("current_tempZ1_set", "1"),
            ("current_tempZ1", temperature.as_str()),
        ],
    )?;
    ensure_success(&url, response)?;
    info!(
        "[salus api] set target temperature of {} to {}",
        device_id, temperature
    );
    Ok(())
}

// -=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::*;
    use crate::transport::mock::MockTransport;

    const TOKEN: &str = "12345-1512904488";

    fn credentials() -> Credentials {
        Credentials::new("test@example.com", "password").unwrap()
    }

    #[test]
    fn readings_url_uses_salus_host() {
        assert_eq!(
            readings_url("12345678", TOKEN),
            "https://salus-it500.com/public/ajax_device_values.php?devId=12345678&token=12345-1512904488"
        );
    }

    #[test]
    fn login_posts_credentials_as_form() {
        let endpoints = Endpoints::default();
        let transport = MockTransport::default()
            .on_post(endpoints.login_url(), HttpResponse::ok(format!("{}\n", TOKEN)));

        let token = get_token(&transport, &endpoints, &credentials()).unwrap();
        assert_eq!(token, TOKEN);

        let requests = transport.requests_to(&endpoints.login_url());
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].param("IDemail"), Some("test@example.com"));
        assert_eq!(requests[0].param("password"), Some("password"));
    }

    #[test]
    fn login_rejected() {
        let endpoints = Endpoints::default();
        let transport = MockTransport::default().on_post(
            endpoints.login_url(),
            HttpResponse::new(StatusCode::UNAUTHORIZED, "denied"),
        );
        let err = get_token(&transport, &endpoints, &credentials()).unwrap_err();
        assert!(matches!(err, SalusError::LoginError(_)), "{:?}", err);
    }

    #[test]
    fn login_without_token() {
        let endpoints = Endpoints::default();
        let transport =
            MockTransport::default().on_post(endpoints.login_url(), HttpResponse::ok("  \n"));
        let err = get_token(&transport, &endpoints, &credentials()).unwrap_err();
        assert!(matches!(err, SalusError::LoginError(_)), "{:?}", err);
    }

    #[test]
    fn devices_request_sends_token() {
        let endpoints = Endpoints::default();
        let transport = MockTransport::default().on_get(
            endpoints.devices_url(),
            HttpResponse::ok(include_str!("../tests/fixtures/devices_response.html")),
        );
        let devices = fetch_devices(&transport, &endpoints, TOKEN).unwrap();
        assert_eq!(devices, vec![Device::new("12345678", "Device Name")]);

        let requests = transport.requests_to(&endpoints.devices_url());
        assert_eq!(requests[0].param("token"), Some(TOKEN));
    }

    #[test]
    fn devices_request_failed() {
        let endpoints = Endpoints::default();
        let transport = MockTransport::default().on_get(
            endpoints.devices_url(),
            HttpResponse::new(StatusCode::INTERNAL_SERVER_ERROR, ""),
        );
        let err = fetch_devices(&transport, &endpoints, TOKEN).unwrap_err();
        assert!(
            matches!(err, SalusError::ApiRequest { status, .. } if status == StatusCode::INTERNAL_SERVER_ERROR)
        );
    }

    #[test]
    fn reading_request() {
        let endpoints = Endpoints::default();
        let transport = MockTransport::default().on_get(
            readings_url("12345678", TOKEN),
            HttpResponse::ok(include_str!("../tests/fixtures/device_readings.json")),
        );
        let reading = fetch_device_reading(&transport, &endpoints, "12345678", TOKEN).unwrap();
        assert_eq!(reading, DeviceReading::new(23.5, 24.5, true, 9.0));
    }

    #[test]
    fn failed_reading_does_not_leak_token() {
        let endpoints = Endpoints::default();
        let transport = MockTransport::default();
        let err = fetch_device_reading(&transport, &endpoints, "12345678", TOKEN).unwrap_err();
        match &err {
            SalusError::ApiRequest { url, status } => {
                assert_eq!(*status, StatusCode::NOT_FOUND);
                assert_eq!(
                    url,
                    "https://salus-it500.com/public/ajax_device_values.php"
                );
            }
            other => panic!("unexpected error {:?}", other),
        }
        assert!(!err.to_string().contains(TOKEN));
    }

    #[test]
    fn set_temperature_posts_form() {
        let endpoints = Endpoints::default();
        let transport = MockTransport::default().on_post(endpoints.set_url(), HttpResponse::ok(""));
        set_target_temperature(&transport, &endpoints, "12345678", TOKEN, 21.5).unwrap();

        let requests = transport.requests_to(&endpoints.set_url());
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.param("token"), Some(TOKEN));
        assert_eq!(request.param("devId"), Some("12345678"));
        assert_eq!(request.param("current_tempZ1_set"), Some("1"));
        assert_eq!(request.param("current_tempZ1"), Some("21.5"));
    }

    #[test]
    fn set_temperature_out_of_range() {
        let endpoints = Endpoints::default();
        let transport = MockTransport::default();
        for celsius in [4.9, 35.5, f64::NAN, f64::INFINITY] {
            let err = set_target_temperature(&transport, &endpoints, "12345678", TOKEN, celsius)
                .unwrap_err();
            assert!(err.is_validation_error());
        }
        assert!(transport.requests.borrow().is_empty());
    }
}
