use crate::resources::{AircraftCatalog, AirportCatalog, MenuSelection};

/// Marker put in front of the highlighted entry.
const CURSOR: &str = "> ";

pub fn main_menu_lines() -> Vec<String> {
    [
        "Simple Flight Simulator",
        "",
        "Press ENTER or SPACE to start",
        "",
        "Features:",
        "- 5 Different Aircraft Models",
        "- 5 International Airports",
        "- Arcade Flight Physics",
        "- Multiple Camera Views",
        "- Full Flight Instruments",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

pub fn aircraft_select_lines(catalog: &AircraftCatalog, selected: usize) -> Vec<String> {
    let mut lines = vec!["Select Aircraft".to_string(), String::new()];
    for index in 0..catalog.len() {
        let Some(spec) = catalog.get_index(index) else {
            continue;
        };
        if index == selected {
            lines.push(format!("{}{}", CURSOR, spec.name));
            lines.push(format!("    Max Speed: {:.0} knots", spec.max_speed));
            lines.push(format!("    Cruise Speed: {:.0} knots", spec.cruise_speed));
            lines.push(format!("    Max Altitude: {:.0} feet", spec.max_altitude));
            lines.push(format!("    Wingspan: {:.1} feet", spec.wingspan));
        } else {
            lines.push(format!("  {}", spec.name));
        }
    }
    lines.push(String::new());
    lines.push("Use UP/DOWN arrows to select, ENTER to confirm".to_string());
    lines
}

pub fn airport_select_lines(airports: &AirportCatalog, selection: &MenuSelection) -> Vec<String> {
    let mut lines = vec!["Select Airports".to_string(), String::new()];
    let departure = airports.get_index(selection.departure);
    let destination = airports.get_index(selection.destination);

    lines.push("Departure Airport:".to_string());
    if let Some(airport) = &departure {
        lines.push(format!("{}{} - {}", CURSOR, airport.code, airport.name));
    }
    lines.push(String::new());
    lines.push("Destination Airport:".to_string());
    if let Some(airport) = &destination {
        lines.push(format!("{}{} - {}", CURSOR, airport.code, airport.name));
    }

    if let (Some(departure), Some(destination)) = (&departure, &destination) {
        if departure.code != destination.code {
            lines.push(String::new());
            lines.push(format!(
                "Distance: {:.0} nautical miles",
                departure.distance_to(destination)
            ));
        }
    }

    lines.extend([
        String::new(),
        "UP/DOWN: Change departure airport".to_string(),
        "LEFT/RIGHT: Change destination airport".to_string(),
        "ENTER: Start flight".to_string(),
    ]);
    lines
}

pub fn pause_lines() -> Vec<String> {
    [
        "PAUSED",
        "",
        "ESC - Resume Flight",
        "BACKSPACE - Main Menu",
        "C - Change Camera View",
        "H - Toggle HUD",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
