use prettytable::{format, Cell, Row, Table};
use salusapi::{Device, DeviceReading, NO_TEMPERATURE};

fn create_table() -> Table {
    let mut table = Table::new();
    let fmt = format::FormatBuilder::new()
        .padding(1, 1)
        .separator(
            format::LinePosition::Title,
            format::LineSeparator::new('-', '+', '+', '+'),
        )
        .column_separator('|')
        .build();
    table.set_format(fmt);
    table
}

fn title(name: &str) -> Cell {
    Cell::new_align(name, format::Alignment::CENTER)
}

pub(crate) fn format_temperature(celsius: f64) -> String {
    if celsius == NO_TEMPERATURE {
        "-".to_string()
    } else {
        format!("{:.1}", celsius)
    }
}

// -=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-

pub(crate) fn device_table(devices: &[Device]) -> Table {
    let mut table = create_table();
    table.set_titles(Row::new(vec![title("id"), title("name")]));
    for device in devices {
        table.add_row(Row::new(vec![
            Cell::new(device.id()),
            Cell::new(device.name()),
        ]));
    }
    table
}

pub(crate) fn reading_table(readings: &[(Device, DeviceReading)]) -> Table {
    let mut table = create_table();
    table.set_titles(Row::new(vec![
        title("id"),
        title("name"),
        title("current (°C)"),
        title("target (°C)"),
        title("state"),
        title("frost (°C)"),
    ]));
    for (device, reading) in readings {
        let right = |text: String| Cell::new_align(&text, format::Alignment::RIGHT);
        table.add_row(Row::new(vec![
            Cell::new(device.id()),
            Cell::new(device.name()),
            right(format_temperature(reading.current_temperature())),
            right(format_temperature(reading.current_target_temperature())),
            Cell::new(reading.state()),
            right(format_temperature(reading.frost_temperature())),
        ]));
    }
    table
}
