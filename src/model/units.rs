use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Physical dimension of a unit-bearing property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// Distances, sizes and wavelengths
    Length,
    /// Exposure times and intervals
    Time,
    /// Environmental temperature
    Temperature,
    /// Light source power
    Power,
    /// Detector read-out rate and repetition rates
    Frequency,
    /// Detector voltage
    ElectricPotential,
    /// Air pressure
    Pressure,
    /// Rotation angles
    Angle,
}

macro_rules! units {
    ($( $(#[$doc:meta])* $variant:ident => $symbol:literal, $dimension:ident; )*) => {
        /// Unit of measurement attached to a [`Quantity`].
        ///
        /// Units are recorded, never converted between.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(into = "String", try_from = "String")]
        pub enum Unit {
            $( $(#[$doc])* $variant, )*
        }

        impl Unit {
            /// Every supported unit
            pub const ALL: &'static [Unit] = &[$( Unit::$variant, )*];

            /// Symbol as written in OME-XML unit attributes
            pub fn symbol(self) -> &'static str {
                match self {
                    $( Unit::$variant => $symbol, )*
                }
            }

            /// Dimension this unit measures
            pub fn dimension(self) -> Dimension {
                match self {
                    $( Unit::$variant => Dimension::$dimension, )*
                }
            }

            /// Look a unit up by its symbol.
            pub fn from_symbol(symbol: &str) -> Option<Unit> {
                match symbol {
                    $( $symbol => Some(Unit::$variant), )*
                    // ASCII spelling of the micro sign
                    "um" => Some(Unit::Micrometer),
                    "us" => Some(Unit::Microsecond),
                    "uW" => Some(Unit::Microwatt),
                    _ => None,
                }
            }
        }
    };
}

units! {
    /// m
    Meter => "m", Length;
    /// cm
    Centimeter => "cm", Length;
    /// mm
    Millimeter => "mm", Length;
    /// µm, the OME default for lengths
    Micrometer => "µm", Length;
    /// nm, the OME default for wavelengths
    Nanometer => "nm", Length;
    /// Å
    Angstrom => "Å", Length;
    /// Image pixels
    Pixel => "pixel", Length;
    /// Stage reference frame units
    ReferenceFrame => "reference frame", Length;
    /// s, the OME default for times
    Second => "s", Time;
    /// ms
    Millisecond => "ms", Time;
    /// µs
    Microsecond => "µs", Time;
    /// ns
    Nanosecond => "ns", Time;
    /// min
    Minute => "min", Time;
    /// h
    Hour => "h", Time;
    /// °C, the OME default for temperatures
    Celsius => "°C", Temperature;
    /// K
    Kelvin => "K", Temperature;
    /// °F
    Fahrenheit => "°F", Temperature;
    /// W
    Watt => "W", Power;
    /// mW, the OME default for light source power
    Milliwatt => "mW", Power;
    /// µW
    Microwatt => "µW", Power;
    /// Hz
    Hertz => "Hz", Frequency;
    /// kHz
    Kilohertz => "kHz", Frequency;
    /// MHz, the OME default for read-out rates
    Megahertz => "MHz", Frequency;
    /// V, the OME default for voltages
    Volt => "V", ElectricPotential;
    /// mV
    Millivolt => "mV", ElectricPotential;
    /// kV
    Kilovolt => "kV", ElectricPotential;
    /// Pa
    Pascal => "Pa", Pressure;
    /// kPa
    Kilopascal => "kPa", Pressure;
    /// atm
    Atmosphere => "atm", Pressure;
    /// bar
    Bar => "bar", Pressure;
    /// mbar, the OME default for air pressure
    Millibar => "mbar", Pressure;
    /// Torr
    Torr => "Torr", Pressure;
    /// deg, the OME default for angles
    Degree => "deg", Angle;
    /// rad
    Radian => "rad", Angle;
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.symbol().to_string()
    }
}

impl TryFrom<String> for Unit {
    type Error = String;

    fn try_from(symbol: String) -> Result<Self, Self::Error> {
        Unit::from_symbol(&symbol).ok_or_else(|| format!("unknown unit '{symbol}'"))
    }
}

/// A numeric value with its unit of measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    /// Magnitude
    pub value: f64,
    /// Unit the magnitude is expressed in
    pub unit: Unit,
}

impl Quantity {
    /// Create a quantity from a magnitude and unit
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Length in micrometers
    pub fn micrometers(value: f64) -> Self {
        Self::new(value, Unit::Micrometer)
    }

    /// Length in nanometers
    pub fn nanometers(value: f64) -> Self {
        Self::new(value, Unit::Nanometer)
    }

    /// Time in seconds
    pub fn seconds(value: f64) -> Self {
        Self::new(value, Unit::Second)
    }

    /// Time in milliseconds
    pub fn milliseconds(value: f64) -> Self {
        Self::new(value, Unit::Millisecond)
    }

    /// Temperature in degrees Celsius
    pub fn celsius(value: f64) -> Self {
        Self::new(value, Unit::Celsius)
    }

    /// Dimension of the quantity's unit
    pub fn dimension(&self) -> Dimension {
        self.unit.dimension()
    }
}

/// `<value> <symbol>`, e.g. `0.65 µm`
impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

impl FromStr for Quantity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (value, symbol) = s
            .split_once(char::is_whitespace)
            .ok_or_else(|| format!("expected '<value> <unit>', got '{s}'"))?;
        let value = value
            .parse::<f64>()
            .map_err(|e| format!("invalid magnitude '{value}': {e}"))?;
        let symbol = symbol.trim();
        let unit = Unit::from_symbol(symbol).ok_or_else(|| format!("unknown unit '{symbol}'"))?;
        Ok(Self::new(value, unit))
    }
}
