use std::fmt;

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::from_u32(0xFFFFFF);

    pub const fn from_u32(value: u32) -> Self {
        Color {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    pub fn to_hex_string(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

/// Fallback for project types outside [`KnownType`].
pub const DEFAULT_TYPE_COLOR: Color = Color::from_u32(0x1E90FF);

/// Project types with a dedicated palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownType {
    Desalination,
    WastewaterTreatment,
    WaterDistribution,
    RuralWaterAccess,
    IrrigationSystems,
    GroundwaterManagement,
    WaterStorage,
    FloodManagement,
    WaterRecycling,
    SmartWaterNetworks,
}

impl KnownType {
    pub const ALL: [KnownType; 10] = [
        KnownType::Desalination,
        KnownType::WastewaterTreatment,
        KnownType::WaterDistribution,
        KnownType::RuralWaterAccess,
        KnownType::IrrigationSystems,
        KnownType::GroundwaterManagement,
        KnownType::WaterStorage,
        KnownType::FloodManagement,
        KnownType::WaterRecycling,
        KnownType::SmartWaterNetworks,
    ];

    pub fn label(self) -> &'static str {
        use KnownType::*;
        match self {
            Desalination => "Desalination",
            WastewaterTreatment => "Wastewater Treatment",
            WaterDistribution => "Water Distribution",
            RuralWaterAccess => "Rural Water Access",
            IrrigationSystems => "Irrigation Systems",
            GroundwaterManagement => "Groundwater Management",
            WaterStorage => "Water Storage",
            FloodManagement => "Flood Management",
            WaterRecycling => "Water Recycling",
            SmartWaterNetworks => "Smart Water Networks",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|known| known.label() == label)
    }

    pub fn color(self) -> Color {
        use KnownType::*;
        let value = match self {
            Desalination => 0xFF6B35,
            WastewaterTreatment => 0x4ECDC4,
            WaterDistribution => 0x45B7D1,
            RuralWaterAccess => 0x96CEB4,
            IrrigationSystems => 0xFECA57,
            GroundwaterManagement => 0xA55EEA,
            WaterStorage => 0x26C6DA,
            FloodManagement => 0xFF7043,
            WaterRecycling => 0x66BB6A,
            SmartWaterNetworks => 0x42A5F5,
        };
        Color::from_u32(value)
    }
}

/// Marker and pie-slice color for a project type.
pub fn type_color(project_type: &str) -> Color {
    KnownType::from_label(project_type)
        .map(KnownType::color)
        .unwrap_or(DEFAULT_TYPE_COLOR)
}
