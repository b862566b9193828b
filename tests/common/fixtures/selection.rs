use simflight::resources::MenuSelection;

/// Boeing 737 from JFK to LHR.
pub fn jfk_to_lhr() -> MenuSelection {
    MenuSelection {
        aircraft: 0,
        departure: 0,
        destination: 2,
    }
}

/// Cessna 172 from LAX to NRT.
pub fn cessna_from_lax() -> MenuSelection {
    MenuSelection {
        aircraft: 3,
        departure: 1,
        destination: 4,
    }
}
