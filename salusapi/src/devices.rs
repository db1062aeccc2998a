use crate::error::{Result, SalusError};

/// Value used for temperatures the service reported as "no data".
pub const NO_TEMPERATURE: f64 = -99.0;

/// Lowest target temperature the thermostat accepts, in °C.
pub const MIN_TARGET_TEMPERATURE: f64 = 5.0;
/// Highest target temperature the thermostat accepts, in °C.
pub const MAX_TARGET_TEMPERATURE: f64 = 35.0;

/// Fails for temperatures the thermostat cannot be set to.
pub(crate) fn check_target_temperature(celsius: f64) -> Result<f64> {
    if !(MIN_TARGET_TEMPERATURE..=MAX_TARGET_TEMPERATURE).contains(&celsius) {
        return Err(SalusError::InvalidTemperature(celsius));
    }
    Ok(celsius)
}

/// A thermostat registered with the salus account.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Device {
    id: String,
    name: String,
}

impl Device {
    pub fn new(id: impl ToString, name: impl ToString) -> Self {
        Device {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    /// The vendor assigned device id (`devId`).
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Device {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "id={:?} name={:?}", self.id, self.name)
    }
}

// -=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-

/// Snapshot of the values of one thermostat. Temperatures are in °C, values
/// the service did not report are [`NO_TEMPERATURE`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceReading {
    current_temperature: f64,
    current_target_temperature: f64,
    heat_on: bool,
    frost_temperature: f64,
}

impl DeviceReading {
    pub fn new(
        current_temperature: f64,
        current_target_temperature: f64,
        heat_on: bool,
        frost_temperature: f64,
    ) -> Self {
        DeviceReading {
            current_temperature,
            current_target_temperature,
            heat_on,
            frost_temperature,
        }
    }

    pub fn current_temperature(&self) -> f64 {
        self.current_temperature
    }

    pub fn current_target_temperature(&self) -> f64 {
        self.current_target_temperature
    }

    /// True while the thermostat calls for heat.
    pub fn heat_on(&self) -> bool {
        self.heat_on
    }

    /// Frost protection threshold. This is an installer setting and not shown
    /// in the regular salus UI.
    pub fn frost_temperature(&self) -> f64 {
        self.frost_temperature
    }

    pub fn has_current_temperature(&self) -> bool {
        self.current_temperature != NO_TEMPERATURE
    }

    pub fn state(&self) -> &'static str {
        if self.heat_on {
            "heating"
        } else {
            "idle"
        }
    }
}

impl std::fmt::Display for DeviceReading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "current={:.1}°C target={:.1}°C state={} frost={:.1}°C",
            self.current_temperature,
            self.current_target_temperature,
            self.state(),
            self.frost_temperature
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn devices_equal_iff_both_fields_match() {
        let dev = Device::new("12345678", "Device Name");
        assert_eq!(dev, Device::new("12345678", "Device Name"));
        assert_ne!(dev, Device::new("12345678", "Other Name"));
        assert_ne!(dev, Device::new("87654321", "Device Name"));
    }

    #[test]
    fn display_reading() {
        let reading = DeviceReading::new(23.5, 24.5, true, 9.0);
        assert_eq!(
            reading.to_string(),
            "current=23.5°C target=24.5°C state=heating frost=9.0°C"
        );
    }

    #[test]
    fn target_temperature_range() {
        assert_eq!(check_target_temperature(5.0).unwrap(), 5.0);
        assert_eq!(check_target_temperature(35.0).unwrap(), 35.0);
        for celsius in [4.9, 35.1, f64::NAN, f64::NEG_INFINITY] {
            assert!(matches!(
                check_target_temperature(celsius),
                Err(SalusError::InvalidTemperature(_))
            ));
        }
    }

    #[test]
    fn missing_current_temperature() {
        let reading = DeviceReading::new(NO_TEMPERATURE, 21.0, false, 5.0);
        assert!(!reading.has_current_temperature());
        assert_eq!(reading.state(), "idle");
    }
}
