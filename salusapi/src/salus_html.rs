//! Scraping of the `devices.php` page.
//!
//! The page has no machine readable device list. Every device shows up as a
//! link to its control page whose text is the unit code followed by the name
//! the user gave the device:
//!
//! ```html
//! <a class="deviceIcon online " href="control.php?devId=12345678">STA000123456 Device Name</a>
//! ```

use lazy_static::lazy_static;
use regex::Regex;

use crate::devices::Device;
use crate::error::{Result, SalusError};

lazy_static! {
    static ref DEVICE_LINK: Regex = Regex::new(
        r#"(?is)<a\b[^>]*\bhref\s*=\s*"[^"]*[?&](?:amp;)?devId=([^"&]+)[^"]*"[^>]*>(.*?)</a\s*>"#
    )
    .unwrap();
    static ref TAG: Regex = Regex::new(r"<[^>]*>").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

/// Splits a device label into unit code and name. A label without a name is
/// used as the name itself.
fn split_label(label: &str) -> (&str, &str) {
    match label.split_once(' ') {
        Some((code, name)) if !name.trim().is_empty() => (code, name.trim()),
        _ => (label, label),
    }
}

/// Parses all devices of the devices page in document order.
///
/// A page without any device link is treated as an error: an account always
/// has at least one device and an empty result usually means the page layout
/// changed or the token was rejected.
pub fn parse_devices(html: &str) -> Result<Vec<Device>> {
    let devices: Vec<Device> = DEVICE_LINK
        .captures_iter(html)
        .map(|cap| {
            let id = decode_entities(cap[1].trim());
            let label = decode_entities(&TAG.replace_all(&cap[2], " "));
            let label = WHITESPACE.replace_all(label.trim(), " ");
            let (_code, name) = split_label(&label);
            Device::new(id, name)
        })
        .collect();

    if devices.is_empty() {
        return Err(SalusError::ParserError(
            "devices page does not contain any device link".to_string(),
        ));
    }

    Ok(devices)
}
