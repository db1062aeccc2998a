use serde::Deserialize;
use tracing::warn;

use crate::devices::{DeviceReading, NO_TEMPERATURE};
use crate::error::{Result, SalusError};

/// Marker the service sends instead of a value when a thermostat has not
/// reported yet.
const NO_DATA: &str = "--";

// response of ajax_device_values.php

/// A single value of the readings document. The service sends almost
/// everything as strings, but we also take plain json values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub(crate) enum Field {
    Null,
    Flag(bool),
    Number(f64),
    Text(String),
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawReading {
    #[serde(rename = "CH1currentRoomTemp")]
    pub current_room_temp: Field,
    #[serde(rename = "CH1currentSetPoint")]
    pub current_set_point: Field,
    #[serde(rename = "CH1heatOnOffStatus")]
    pub heat_on_off_status: Field,
    #[serde(rename = "frost")]
    pub frost: Field,
}

impl Field {
    fn is_no_data(&self) -> bool {
        match self {
            Field::Null => true,
            Field::Text(text) => text.trim() == NO_DATA,
            _ => false,
        }
    }

    /// Temperature in °C, [`NO_TEMPERATURE`] for "no data".
    pub(crate) fn temperature(&self, key: &str) -> Result<f64> {
        if self.is_no_data() {
            warn!("no data for {}, using {}", key, NO_TEMPERATURE);
            return Ok(NO_TEMPERATURE);
        }
        match self {
            Field::Number(num) if num.is_finite() => Ok(*num),
            Field::Text(text) => text
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|num| num.is_finite())
                .ok_or_else(|| {
                    SalusError::ParserError(format!("{} is not a number: {:?}", key, text))
                }),
            other => Err(SalusError::ParserError(format!(
                "{} is not a number: {:?}",
                key, other
            ))),
        }
    }

    /// On/off status, `false` for "no data".
    pub(crate) fn flag(&self, key: &str) -> Result<bool> {
        if self.is_no_data() {
            warn!("no data for {}, assuming off", key);
            return Ok(false);
        }
        match self {
            Field::Flag(flag) => Ok(*flag),
            Field::Number(num) if *num == 1.0 => Ok(true),
            Field::Number(num) if *num == 0.0 => Ok(false),
            Field::Text(text) => match text.trim().to_lowercase().as_str() {
                "1" | "true" | "on" => Ok(true),
                "0" | "false" | "off" => Ok(false),
                _ => Err(SalusError::ParserError(format!(
                    "{} is not an on/off value: {:?}",
                    key, text
                ))),
            },
            other => Err(SalusError::ParserError(format!(
                "{} is not an on/off value: {:?}",
                key, other
            ))),
        }
    }
}

// -=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-

pub fn parse_device_reading(json: &str) -> Result<DeviceReading> {
    let raw: RawReading = serde_json::from_str(json)?;
    Ok(DeviceReading::new(
        raw.current_room_temp.temperature("CH1currentRoomTemp")?,
        raw.current_set_point.temperature("CH1currentSetPoint")?,
        raw.heat_on_off_status.flag("CH1heatOnOffStatus")?,
        raw.frost.temperature("frost")?,
    ))
}
