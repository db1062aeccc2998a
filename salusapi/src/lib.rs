//! Library for interfacing with the Salus iT500 thermostat web service
//! <https://salus-it500.com>.
//!
//! It is used by the `salusctrl` utility.
//!
//! ## Example
//!
//! ### List devices and print their readings
//!
//! ```no_run
//! # fn main() -> salusapi::Result<()> {
//! let mut client = salusapi::SalusClient::new("me@example.com", "password")?;
//!
//! for device in client.get_devices()? {
//!     let reading = client.get_device_reading(device.id())?;
//!     println!("{}: {}", device.name(), reading);
//! }
//! # Ok(())
//! # }
//! ```

pub(crate) mod api;
pub(crate) mod client;
pub mod config;
pub(crate) mod credentials;
pub(crate) mod devices;
pub mod error;
pub(crate) mod salus_html;
pub(crate) mod salus_json;
pub mod transport;

pub use api::readings_url;
pub use client::SalusClient;
pub use config::{ClientConfig, Endpoints};
pub use credentials::Credentials;
pub use devices::{
    Device, DeviceReading, MAX_TARGET_TEMPERATURE, MIN_TARGET_TEMPERATURE, NO_TEMPERATURE,
};
pub use error::{Result, SalusError};
pub use salus_html::parse_devices;
pub use salus_json::parse_device_reading;
pub use transport::{HttpResponse, HttpTransport, Transport};
