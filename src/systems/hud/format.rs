use crate::components::{Airport, AircraftSpec, AircraftState, CameraComponent, FlightInfo};
use crate::utils::{bearing_between, WORLD_UNITS_TO_NM};

/// Severity of a HUD line, least to most urgent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tone {
    #[default]
    Normal,
    Good,
    Warning,
    Danger,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HudLine {
    pub text: String,
    pub tone: Tone,
}

impl HudLine {
    pub fn new(text: impl Into<String>) -> Self {
        Self::toned(text, Tone::Normal)
    }

    pub fn toned(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

/// Most urgent tone among `lines`.
pub fn panel_tone(lines: &[HudLine]) -> Tone {
    lines.iter().map(|line| line.tone).max().unwrap_or_default()
}

pub fn panel_text(lines: &[HudLine]) -> String {
    lines
        .iter()
        .map(|line| line.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn primary_flight_lines(aircraft: &AircraftState, info: &FlightInfo) -> Vec<HudLine> {
    let mut lines = vec![HudLine::new(format!("IAS: {:.0} kts", aircraft.speed))];
    if aircraft.is_stall_warning() {
        lines.push(HudLine::toned("STALL WARNING", Tone::Danger));
    }
    lines.extend([
        HudLine::new(format!("ALT: {:.0} ft", aircraft.altitude)),
        HudLine::new(format!("HDG: {:.0}°", aircraft.heading)),
        HudLine::new(format!("VS: {:.0}", info.vertical_speed)),
        HudLine::new(format!(
            "PITCH: {:+.1}°  ROLL: {:+.1}°",
            aircraft.pitch, aircraft.roll
        )),
        HudLine::new(format!("PHASE: {}", info.phase)),
    ]);
    if info.mach_number > 0.0 {
        lines.push(HudLine::new(format!("MACH: {:.2}", info.mach_number)));
    }
    lines
}

pub fn fuel_tone(fuel_percent: f64) -> Tone {
    if fuel_percent < 10.0 {
        Tone::Danger
    } else if fuel_percent < 25.0 {
        Tone::Warning
    } else {
        Tone::Normal
    }
}

pub fn engine_lines(aircraft: &AircraftState) -> Vec<HudLine> {
    let fuel_percent = aircraft.fuel_percent();
    vec![
        HudLine::new(format!("THR: {:.0}%", aircraft.throttle)),
        HudLine::toned(format!("FUEL: {:.1}%", fuel_percent), fuel_tone(fuel_percent)),
        if aircraft.engine_on {
            HudLine::toned("ENG: ON", Tone::Good)
        } else {
            HudLine::toned("ENG: OFF", Tone::Danger)
        },
        if aircraft.gear_down {
            HudLine::toned("GEAR: DOWN", Tone::Good)
        } else {
            HudLine::new("GEAR: UP")
        },
    ]
}

/// Hours and whole minutes to cover `distance` nm at `speed` kt.
pub fn eta(distance: f64, speed: f64) -> Option<(u64, u64)> {
    if speed <= 0.0 {
        return None;
    }
    let hours = distance / speed;
    let minutes = hours.fract() * 60.0;
    Some((hours.trunc() as u64, minutes.trunc() as u64))
}

pub fn navigation_lines(aircraft: &AircraftState, destination: &Airport) -> Vec<HudLine> {
    let distance = (destination.position - aircraft.position).norm() * WORLD_UNITS_TO_NM;
    let bearing = bearing_between(
        aircraft.position.x,
        aircraft.position.y,
        destination.position.x,
        destination.position.y,
    );

    let mut lines = vec![
        HudLine::new(format!("DEST: {} - {}", destination.code, destination.name)),
        HudLine::new(format!("DIST: {:.1} nm", distance)),
        HudLine::new(format!("BRG: {:.0}°", bearing)),
    ];
    if let Some((hours, minutes)) = eta(distance, aircraft.speed) {
        lines.push(HudLine::new(format!("ETA: {}h {}m", hours, minutes)));
    }
    lines
}

pub fn aircraft_info_lines(spec: &AircraftSpec) -> Vec<HudLine> {
    vec![
        HudLine::new(spec.name.clone()),
        HudLine::new(format!("Max Speed: {:.0} kts", spec.max_speed)),
    ]
}

pub fn controls_help_lines() -> Vec<HudLine> {
    [
        "CONTROLS:",
        "W/S - Pitch Up/Down",
        "A/D - Yaw Left/Right",
        "Q/E - Roll Left/Right",
        "R/F - Throttle Up/Down",
        "SPACE/G - Toggle Gear",
        "C - Change Camera",
        "+/- - Zoom",
        "H - Toggle HUD",
        "ESC - Pause",
    ]
    .into_iter()
    .map(HudLine::new)
    .collect()
}

pub fn camera_info_lines(camera: &CameraComponent, aircraft: &AircraftState) -> Vec<HudLine> {
    let mut lines: Vec<HudLine> = camera
        .view_info(aircraft)
        .into_iter()
        .map(|(label, value)| HudLine::new(format!("{}: {}", label, value)))
        .collect();
    lines.push(HudLine::new("C - Change View"));
    lines
}
