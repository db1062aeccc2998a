//! Prints the readings of all thermostats of an account.
//!
//! ```bash
//! cargo run --example print-readings -- me@example.com my_password
//! ```

use std::env::args;

fn main() -> salusapi::Result<()> {
    let mut args = args().skip(1);
    let user = args
        .next()
        .expect("Expected username to be provided on the command line");
    let password = args
        .next()
        .expect("Expected password to be provided on the command line");

    let mut client = salusapi::SalusClient::new(user, password)?;

    for device in client.get_devices()? {
        let reading = client.get_device_reading(device.id())?;
        println!("{} ({}): {}", device.name(), device.id(), reading);
    }
    Ok(())
}
