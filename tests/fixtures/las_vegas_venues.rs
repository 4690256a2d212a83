//! Real Las Vegas venues for realistic itineraries.
//!
//! Coordinates sourced from OpenStreetMap.

/// A named venue with coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Venue {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Venue {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }
}

/// Where the traveler starts.
pub const HOTEL: Venue = Venue::new("Bellagio", 36.1126, -115.1767);

// ============================================================================
// Strip venues (all within a few km of each other)
// ============================================================================

pub const STRIP_VENUES: &[Venue] = &[
    Venue::new("Brooklyn Bowl", 36.1175388, -115.1695094),
    Venue::new("Caesars Palace", 36.1162, -115.1745),
    Venue::new("MGM Grand", 36.1023654, -115.1688720),
    Venue::new("Wynn Las Vegas", 36.1263781, -115.1658180),
    Venue::new("Hard Rock Cafe", 36.1041592, -115.1722166),
];

// ============================================================================
// Outlying venues (20-30 minutes from the Strip at 50 km/h)
// ============================================================================

pub const OUTLYING_VENUES: &[Venue] = &[
    Venue::new("Green Valley Ranch Area", 36.0308, -115.0825),
    Venue::new("Islander's Grill", 36.0335058, -114.9856162),
    Venue::new("Rivas Mexican Grill North", 36.1450055, -115.0482587),
];
