//! Enumerated attribute types of the schema.
//!
//! Enumeration-typed properties are stored as their schema literal
//! (`"uint16"`, `"XYZCT"`) and exposed to typed accessors as Rust enums.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::{FromMetadataValue, MetadataValue};

macro_rules! ome_enum {
    ($(#[$doc:meta])* $name:ident { $( $variant:ident => $literal:literal ),* $(,)? }) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[doc = concat!("`", $literal, "`")]
                #[serde(rename = $literal)]
                $variant,
            )*
        }

        impl $name {
            /// Every literal allowed by the schema, in schema order
            pub const VALUES: &'static [&'static str] = &[$( $literal, )*];

            /// Schema literal of this value
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $literal, )*
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        /// Matches schema literals case-insensitively.
        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                $(
                    if s.eq_ignore_ascii_case($literal) {
                        return Ok($name::$variant);
                    }
                )*
                Err(format!("'{}' is not a valid {}", s, stringify!($name)))
            }
        }

        impl From<$name> for MetadataValue {
            fn from(value: $name) -> Self {
                MetadataValue::Text(value.as_str().to_string())
            }
        }

        impl FromMetadataValue for $name {
            fn from_value(value: MetadataValue) -> Option<Self> {
                match value {
                    MetadataValue::Text(s) => s.parse().ok(),
                    _ => None,
                }
            }
        }
    };
}

ome_enum! {
    /// Storage type of one pixel sample
    PixelType {
        Int8 => "int8",
        Int16 => "int16",
        Int32 => "int32",
        Uint8 => "uint8",
        Uint16 => "uint16",
        Uint32 => "uint32",
        Float => "float",
        Double => "double",
        Complex => "complex",
        DoubleComplex => "double-complex",
        Bit => "bit",
    }
}

impl PixelType {
    /// Size of one sample in bytes (`bit` rounds up to one byte)
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelType::Int8 | PixelType::Uint8 | PixelType::Bit => 1,
            PixelType::Int16 | PixelType::Uint16 => 2,
            PixelType::Int32 | PixelType::Uint32 | PixelType::Float => 4,
            PixelType::Double | PixelType::Complex => 8,
            PixelType::DoubleComplex => 16,
        }
    }
}

ome_enum! {
    /// Rasterization order of the Z, C and T dimensions
    DimensionOrder {
        Xyzct => "XYZCT",
        Xyztc => "XYZTC",
        Xyctz => "XYCTZ",
        Xyczt => "XYCZT",
        Xytcz => "XYTCZ",
        Xytzc => "XYTZC",
    }
}

ome_enum! {
    /// Microscopy technique used for a channel
    AcquisitionMode {
        WideField => "WideField",
        LaserScanningConfocalMicroscopy => "LaserScanningConfocalMicroscopy",
        SpinningDiskConfocal => "SpinningDiskConfocal",
        SlitScanConfocal => "SlitScanConfocal",
        MultiPhotonMicroscopy => "MultiPhotonMicroscopy",
        StructuredIllumination => "StructuredIllumination",
        SingleMoleculeImaging => "SingleMoleculeImaging",
        TotalInternalReflection => "TotalInternalReflection",
        FluorescenceLifetime => "FluorescenceLifetime",
        SpectralImaging => "SpectralImaging",
        FluorescenceCorrelationSpectroscopy => "FluorescenceCorrelationSpectroscopy",
        NearFieldScanningOpticalMicroscopy => "NearFieldScanningOpticalMicroscopy",
        SecondHarmonicGenerationImaging => "SecondHarmonicGenerationImaging",
        Palm => "PALM",
        Storm => "STORM",
        Sted => "STED",
        Tirf => "TIRF",
        Fsm => "FSM",
        Lcm => "LCM",
        Other => "Other",
        BrightField => "BrightField",
        SweptFieldConfocal => "SweptFieldConfocal",
        Spim => "SPIM",
    }
}

ome_enum! {
    /// Contrast method of a channel
    ContrastMethod {
        Brightfield => "Brightfield",
        Phase => "Phase",
        Dic => "DIC",
        HoffmanModulation => "HoffmanModulation",
        ObliqueIllumination => "ObliqueIllumination",
        PolarizedLight => "PolarizedLight",
        Darkfield => "Darkfield",
        Fluorescence => "Fluorescence",
        Other => "Other",
    }
}

ome_enum! {
    /// Illumination geometry of a channel
    IlluminationType {
        Transmitted => "Transmitted",
        Epifluorescence => "Epifluorescence",
        Oblique => "Oblique",
        NonLinear => "NonLinear",
        Other => "Other",
    }
}

ome_enum! {
    /// Detector technology
    DetectorType {
        Ccd => "CCD",
        IntensifiedCcd => "IntensifiedCCD",
        AnalogVideo => "AnalogVideo",
        Pmt => "PMT",
        Photodiode => "Photodiode",
        Spectroscopy => "Spectroscopy",
        LifetimeImaging => "LifetimeImaging",
        CorrelationSpectroscopy => "CorrelationSpectroscopy",
        Ftir => "FTIR",
        Emccd => "EMCCD",
        Apd => "APD",
        Cmos => "CMOS",
        Ebccd => "EBCCD",
        Other => "Other",
    }
}

ome_enum! {
    /// Objective optical correction
    Correction {
        Uv => "UV",
        PlanApo => "PlanApo",
        PlanFluor => "PlanFluor",
        SuperFluor => "SuperFluor",
        VioletCorrected => "VioletCorrected",
        Achro => "Achro",
        Achromat => "Achromat",
        Fluor => "Fluor",
        Fl => "Fl",
        Fluar => "Fluar",
        Neofluar => "Neofluar",
        Fluotar => "Fluotar",
        Apo => "Apo",
        PlanNeofluar => "PlanNeofluar",
        Other => "Other",
    }
}

ome_enum! {
    /// Objective immersion medium
    Immersion {
        Oil => "Oil",
        Water => "Water",
        WaterDipping => "WaterDipping",
        Air => "Air",
        Multi => "Multi",
        Glycerol => "Glycerol",
        Other => "Other",
    }
}

ome_enum! {
    /// Optical filter kind
    FilterType {
        Dichroic => "Dichroic",
        LongPass => "LongPass",
        ShortPass => "ShortPass",
        BandPass => "BandPass",
        MultiPass => "MultiPass",
        NeutralDensity => "NeutralDensity",
        Tuneable => "Tuneable",
        Other => "Other",
    }
}

ome_enum! {
    /// Laser technology
    LaserType {
        Excimer => "Excimer",
        Gas => "Gas",
        MetalVapor => "MetalVapor",
        SolidState => "SolidState",
        Dye => "Dye",
        Semiconductor => "Semiconductor",
        FreeElectron => "FreeElectron",
        Other => "Other",
    }
}

ome_enum! {
    /// Laser gain medium
    LaserMedium {
        Cu => "Cu",
        Ag => "Ag",
        ArFl => "ArFl",
        ArCl => "ArCl",
        KrFl => "KrFl",
        XeFl => "XeFl",
        XeCl => "XeCl",
        XeBr => "XeBr",
        N => "N",
        Ar => "Ar",
        Kr => "Kr",
        Xe => "Xe",
        HeNe => "HeNe",
        HeCd => "HeCd",
        Co => "CO",
        Co2 => "CO2",
        H2o => "H2O",
        HFl => "HFl",
        NdGlass => "NdGlass",
        NdYag => "NdYAG",
        ErGlass => "ErGlass",
        ErYag => "ErYAG",
        HoYlf => "HoYLF",
        HoYag => "HoYAG",
        Ruby => "Ruby",
        TiSapphire => "TiSapphire",
        Alexandrite => "Alexandrite",
        Rhodamine6g => "Rhodamine6G",
        CoumarinC30 => "CoumarinC30",
        GaAs => "GaAs",
        GaAlAs => "GaAlAs",
        EMinus => "EMinus",
        Other => "Other",
    }
}

ome_enum! {
    /// Laser pulse mode
    Pulse {
        Cw => "CW",
        Single => "Single",
        QSwitched => "QSwitched",
        Repetitive => "Repetitive",
        ModeLocked => "ModeLocked",
        Other => "Other",
    }
}

ome_enum! {
    /// Arc lamp fill
    ArcType {
        Hg => "Hg",
        Xe => "Xe",
        HgXe => "HgXe",
        Other => "Other",
    }
}

ome_enum! {
    /// Microscope stand configuration
    MicroscopeType {
        Upright => "Upright",
        Inverted => "Inverted",
        Dissection => "Dissection",
        Electrophysiology => "Electrophysiology",
        Other => "Other",
    }
}

ome_enum! {
    /// Plate row/column labelling
    NamingConvention {
        Letter => "letter",
        Number => "number",
    }
}

ome_enum! {
    /// Medium between objective and sample
    Medium {
        Air => "Air",
        Oil => "Oil",
        Water => "Water",
        Glycerol => "Glycerol",
        Other => "Other",
    }
}

ome_enum! {
    /// Detector binning
    Binning {
        OneByOne => "1x1",
        TwoByTwo => "2x2",
        FourByFour => "4x4",
        EightByEight => "8x8",
        Other => "Other",
    }
}

ome_enum! {
    /// Experiment category
    ExperimentType {
        Fp => "FP",
        Fret => "FRET",
        TimeLapse => "TimeLapse",
        FourDPlus => "FourDPlus",
        Screen => "Screen",
        Immunocytochemistry => "Immunocytochemistry",
        Immunofluorescence => "Immunofluorescence",
        Fish => "FISH",
        Electrophysiology => "Electrophysiology",
        IonImaging => "IonImaging",
        Colocalization => "Colocalization",
        PgiDocumentation => "PGIDocumentation",
        FluorescenceLifetime => "FluorescenceLifetime",
        SpectralImaging => "SpectralImaging",
        Photobleaching => "Photobleaching",
        Other => "Other",
    }
}
