use serde::{Deserialize, Serialize};

/// Inclusive purchase price bounds for an archetype, in currency units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Lower bound in whole cents.
    pub fn min_cents(&self) -> u64 {
        to_cents(self.min)
    }

    /// Upper bound in whole cents.
    pub fn max_cents(&self) -> u64 {
        to_cents(self.max)
    }
}

impl From<(f64, f64)> for PriceRange {
    fn from((min, max): (f64, f64)) -> Self {
        Self { min, max }
    }
}

impl From<PriceRange> for (f64, f64) {
    fn from(range: PriceRange) -> Self {
        (range.min, range.max)
    }
}

fn to_cents(value: f64) -> u64 {
    (value * 100.0).round().max(0.0) as u64
}

/// Template describing one category of inventory item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Archetype {
    pub category: String,
    pub manufacturers: Vec<String>,
    pub models: Vec<String>,
    pub price_range: PriceRange,
    pub description: String,
}

/// Ordered set of archetypes a generation run draws from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub archetypes: Vec<Archetype>,
}

impl Catalog {
    pub fn new(archetypes: Vec<Archetype>) -> Self {
        Self { archetypes }
    }

    /// Built-in catalog of consumer tech items.
    pub fn builtin() -> Self {
        let archetypes = BUILTIN
            .iter()
            .map(|entry| Archetype {
                category: entry.category.to_string(),
                manufacturers: entry.manufacturers.iter().map(|s| s.to_string()).collect(),
                models: entry.models.iter().map(|s| s.to_string()).collect(),
                price_range: PriceRange::new(entry.price_range.0, entry.price_range.1),
                description: entry.description.to_string(),
            })
            .collect();
        Self { archetypes }
    }

    pub fn len(&self) -> usize {
        self.archetypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archetypes.is_empty()
    }

    pub fn archetype(&self, category: &str) -> Option<&Archetype> {
        self.archetypes
            .iter()
            .find(|archetype| archetype.category == category)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

struct BuiltinArchetype {
    category: &'static str,
    manufacturers: &'static [&'static str],
    models: &'static [&'static str],
    price_range: (f64, f64),
    description: &'static str,
}

const BUILTIN: &[BuiltinArchetype] = &[
    BuiltinArchetype {
        category: "Laptop",
        manufacturers: &[
            "Dell", "Apple", "Lenovo", "HP", "ASUS", "Microsoft", "Acer", "MSI",
        ],
        models: &[
            "XPS",
            "MacBook Pro",
            "ThinkPad",
            "Spectre",
            "ZenBook",
            "Surface",
            "Aspire",
            "Stealth",
        ],
        price_range: (800.0, 3000.0),
        description: "High-performance laptop for professional use",
    },
    BuiltinArchetype {
        category: "Monitor",
        manufacturers: &[
            "LG", "Samsung", "Dell", "ASUS", "BenQ", "Acer", "ViewSonic", "AOC",
        ],
        models: &[
            "UltraGear",
            "Odyssey",
            "UltraSharp",
            "ProArt",
            "Zowie",
            "Predator",
            "Elite",
            "Gaming",
        ],
        price_range: (200.0, 1500.0),
        description: "High-resolution display with accurate color reproduction",
    },
    BuiltinArchetype {
        category: "Keyboard",
        manufacturers: &[
            "Logitech",
            "Corsair",
            "Razer",
            "HyperX",
            "SteelSeries",
            "Ducky",
            "Keychron",
            "GMMK",
        ],
        models: &[
            "G Pro",
            "K100",
            "BlackWidow",
            "Alloy",
            "Apex",
            "One 2",
            "K8",
            "Pro",
        ],
        price_range: (50.0, 300.0),
        description: "Mechanical keyboard with customizable RGB lighting",
    },
    BuiltinArchetype {
        category: "Mouse",
        manufacturers: &[
            "Logitech",
            "Razer",
            "SteelSeries",
            "Corsair",
            "Glorious",
            "Zowie",
            "HyperX",
            "Endgame Gear",
        ],
        models: &[
            "G Pro",
            "DeathAdder",
            "Rival",
            "Dark Core",
            "Model O",
            "EC2",
            "Pulsefire",
            "XM1",
        ],
        price_range: (30.0, 200.0),
        description: "Precision gaming mouse with adjustable DPI",
    },
    BuiltinArchetype {
        category: "Headphones",
        manufacturers: &[
            "Sony",
            "Bose",
            "Sennheiser",
            "Audio-Technica",
            "Beyerdynamic",
            "JBL",
            "AKG",
            "Jabra",
        ],
        models: &[
            "WH-1000XM5",
            "QuietComfort",
            "HD 660S",
            "ATH-M50x",
            "DT 990 Pro",
            "Quantum",
            "K712 Pro",
            "Elite",
        ],
        price_range: (100.0, 500.0),
        description: "Premium audio headphones with noise cancellation",
    },
    BuiltinArchetype {
        category: "Tablet",
        manufacturers: &[
            "Apple",
            "Samsung",
            "Microsoft",
            "Lenovo",
            "Amazon",
            "Huawei",
            "Google",
            "Wacom",
        ],
        models: &[
            "iPad Pro",
            "Galaxy Tab",
            "Surface Pro",
            "Tab P11",
            "Fire HD",
            "MatePad",
            "Pixel Slate",
            "Cintiq",
        ],
        price_range: (200.0, 1500.0),
        description: "Versatile tablet for productivity and entertainment",
    },
    BuiltinArchetype {
        category: "Smartphone",
        manufacturers: &[
            "Apple", "Samsung", "Google", "OnePlus", "Xiaomi", "Sony", "Motorola", "Nothing",
        ],
        models: &[
            "iPhone",
            "Galaxy S",
            "Pixel",
            "10 Pro",
            "Mi",
            "Xperia",
            "Edge",
            "Phone",
        ],
        price_range: (400.0, 1500.0),
        description: "Feature-rich smartphone with advanced camera system",
    },
    BuiltinArchetype {
        category: "Webcam",
        manufacturers: &[
            "Logitech",
            "Razer",
            "Elgato",
            "AverMedia",
            "Microsoft",
            "OBSBOT",
            "Insta360",
            "Poly",
        ],
        models: &[
            "StreamCam",
            "Kiyo",
            "Facecam",
            "PW513",
            "LifeCam",
            "Tiny",
            "Link",
            "Studio",
        ],
        price_range: (50.0, 300.0),
        description: "High-definition webcam for video conferencing",
    },
    BuiltinArchetype {
        category: "Microphone",
        manufacturers: &[
            "Blue",
            "Shure",
            "Audio-Technica",
            "Rode",
            "HyperX",
            "Elgato",
            "Razer",
            "Samson",
        ],
        models: &[
            "Yeti", "SM7B", "AT2020", "NT-USB", "QuadCast", "Wave", "Seiren", "G-Track",
        ],
        price_range: (50.0, 400.0),
        description: "Professional-grade microphone for streaming and recording",
    },
    BuiltinArchetype {
        category: "External Drive",
        manufacturers: &[
            "Western Digital",
            "Seagate",
            "Samsung",
            "SanDisk",
            "Crucial",
            "LaCie",
            "Toshiba",
            "Kingston",
        ],
        models: &[
            "My Passport",
            "Backup Plus",
            "T7",
            "Extreme",
            "X8",
            "Rugged",
            "Canvio",
            "XS2000",
        ],
        price_range: (80.0, 400.0),
        description: "Portable storage solution with high transfer speeds",
    },
];
