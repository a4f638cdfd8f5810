//! Physical quantities measured by NMEA 2000 fields

/// A named physical quantity with its SI unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalQuantity {
    pub name: &'static str,
    pub description: &'static str,
    pub unit: &'static str,
    pub abbreviation: &'static str,
    pub url: Option<&'static str>,
}

const fn pq(
    name: &'static str,
    description: &'static str,
    unit: &'static str,
    abbreviation: &'static str,
    url: Option<&'static str>,
) -> PhysicalQuantity {
    PhysicalQuantity {
        name,
        description,
        unit,
        abbreviation,
        url,
    }
}

pub static PHYSICAL_QUANTITIES: &[PhysicalQuantity] = &[
    pq("ELECTRICAL_CURRENT", "Electrical current", "Ampere", "A", Some("https://en.wikipedia.org/wiki/Electric_current")),
    pq("ELECTRICAL_CHARGE", "Electrical charge", "Coulomb", "C", Some("https://en.wikipedia.org/wiki/Electric_charge")),
    pq("ELECTRICAL_ENERGY", "Electrical energy", "Kilo Watt Hour", "kWh", Some("https://en.wikipedia.org/wiki/Electrical_energy")),
    pq("ELECTRICAL_POWER", "Electrical power", "Watt", "W", Some("https://en.wikipedia.org/wiki/Electric_power")),
    pq("ELECTRICAL_APPARENT_POWER", "Electrical apparent power", "Volt Ampere", "VA", Some("https://en.wikipedia.org/wiki/AC_power")),
    pq("ELECTRICAL_REACTIVE_POWER", "Electrical reactive power", "Volt Ampere Reactive", "VAR", Some("https://en.wikipedia.org/wiki/AC_power")),
    pq("POTENTIAL_DIFFERENCE", "Potential difference", "Volt", "V", Some("https://en.wikipedia.org/wiki/Voltage")),
    pq("POWER_FACTOR", "Power factor", "Cos Phi", "Cos Phi", Some("https://en.wikipedia.org/wiki/Power_factor")),
    pq("LENGTH", "Length", "meter", "m", Some("https://en.wikipedia.org/wiki/Length")),
    pq("DISTANCE", "Distance", "meter", "m", Some("https://en.wikipedia.org/wiki/Distance")),
    pq("SPEED", "Speed", "meter per second", "m/s", Some("https://en.wikipedia.org/wiki/Speed")),
    pq("ANGLE", "Angle", "radian", "rad", Some("https://en.wikipedia.org/wiki/Radian")),
    pq("ANGULAR_VELOCITY", "Angular velocity", "radians per second", "rad/s", Some("https://en.wikipedia.org/wiki/Angular_velocity")),
    pq("VOLUME", "Volume", "liter", "L", Some("https://en.wikipedia.org/wiki/Volume")),
    pq("VOLUMETRIC_FLOW", "Volumetric flow", "liter per hour", "L/h", Some("https://en.wikipedia.org/wiki/Volumetric_flow_rate")),
    pq("MAGNETIC_FIELD", "Magnetic field", "Tesla", "T", Some("https://en.wikipedia.org/wiki/Magnetic_field")),
    pq("FREQUENCY", "Frequency", "Hertz", "Hz", Some("https://en.wikipedia.org/wiki/Frequency")),
    pq("DATE", "Date", "days", "d", Some("https://en.wikipedia.org/wiki/Calendar_date")),
    pq("TIME", "Time", "second", "s", Some("https://en.wikipedia.org/wiki/Time_in_physics")),
    pq("DURATION", "Time duration", "second", "s", Some("https://en.wikipedia.org/wiki/Time_in_physics")),
    pq("GEOGRAPHICAL_LATITUDE", "Latitude", "degree", "deg", Some("https://en.wikipedia.org/wiki/Latitude")),
    pq("GEOGRAPHICAL_LONGITUDE", "Longitude", "degree", "deg", Some("https://en.wikipedia.org/wiki/Longitude")),
    pq("TEMPERATURE", "Temperature", "Kelvin", "K", Some("https://en.wikipedia.org/wiki/Temperature")),
    pq("PRESSURE", "Pressure", "Pascal", "Pa", Some("https://en.wikipedia.org/wiki/Pressure")),
    pq("PRESSURE_RATE", "Pressure rate", "Pascal per hour", "Pa/hr", Some("https://en.wikipedia.org/wiki/Pressure")),
    pq("CONCENTRATION", "Concentration of one substance in another", "parts per million", "ppm", Some("https://en.wikipedia.org/wiki/Concentration")),
    pq("SIGNAL_TO_NOISE_RATIO", "Signal-to-noise ratio", "decibel", "dB", Some("https://en.wikipedia.org/wiki/Signal-to-noise_ratio")),
    pq("ROTATIONAL_SPEED", "Rotational speed", "revolutions per minute", "rpm", Some("https://en.wikipedia.org/wiki/Rotational_speed")),
];

/// Find a physical quantity by its identifier
pub fn find_physical_quantity(name: &str) -> Option<&'static PhysicalQuantity> {
    PHYSICAL_QUANTITIES.iter().find(|pq| pq.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_unique() {
        for (i, a) in PHYSICAL_QUANTITIES.iter().enumerate() {
            for b in &PHYSICAL_QUANTITIES[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_find() {
        let t = find_physical_quantity("TEMPERATURE").unwrap();
        assert_eq!(t.abbreviation, "K");
        assert!(find_physical_quantity("WARP_FACTOR").is_none());
    }
}
