//! Built-in catalogs.
//!
//! These are the fixed lists the application ships with. They stand in for a
//! real data source and are exposed through [`RecordSource`] so they can be
//! swapped for any other provider.

use crate::{Record, RecordSource, SourceError, StaticSource, Trip};

static DESTINATIONS: &[(&str, &str, &str)] = &[
    (
        "Amalfi Coast, Italy",
        "A breathtaking stretch of coastal villages, cliffs, and crystal-clear waters. (Photo by Paolo Costa Baldi)",
        "/resources/Amalfi_Coast.jpg",
    ),
    (
        "Santorini, Greece",
        "An island known for white-washed buildings, blue waters, and stunning sunsets. (Photo by Dietmar Rabich)",
        "/resources/Santorini.jpg",
    ),
    (
        "Tokyo, Japan",
        "A metropolis of neon nightlife and futuristic tech. (Photo by Basile Morin)",
        "/resources/Tokyo.jpg",
    ),
    (
        "Paris, France",
        "Romantic capital of the world with an abundance of art, fashion, and fine cuisine. (Photo by Benh LIEU SONG)",
        "/resources/Paris.jpg",
    ),
    (
        "New York City, USA",
        "The city that never sleeps\u{2014}vibrant, diverse, and always buzzing. (Photo by DLLU)",
        "/resources/NYC.jpg",
    ),
];

static RESORTS: &[(&str, &str, &str)] = &[
    (
        "Blue Dreams Resort & Spa, Turkey",
        "Unwind on the Turkish coastline with luxury spa treatments and ocean views.",
        "/resources/Blue_Dreams_Turkey.jpg",
    ),
    (
        "Catalonia Resort & Spa, Cancun",
        "Recharge in Cancun with beach yoga, fresh cuisine, and wellness programs.",
        "/resources/Catalonia_Cancun.jpg",
    ),
    (
        "Hyatt Regency Lake Tahoe Resort & Spa, Nevada",
        "Relax lakeside with massages, forest hikes, and spa and casino access in the Sierra Nevadas.",
        "/resources/Hyatt_Regency_Lake_Tahoe.jpg",
    ),
    (
        "Mansion Resort & Spa, Bali",
        "Detox in the heart of Bali with artful surroundings, herbal treatments, and tranquility.",
        "/resources/Mansion_Resort_and_Spa_Bali.jpg",
    ),
    (
        "Vale Resort, Golf, & Spa, UK",
        "Escape to the Welsh countryside with golf, spa therapy, and peaceful scenery.",
        "/resources/Vale_Hotel_UK.jpg",
    ),
];

/// The top five travel destinations.
#[derive(Debug, Clone, Copy, Default)]
pub struct Destinations;

impl RecordSource for Destinations {
    fn records(&self) -> Result<Vec<Record>, SourceError> {
        StaticSource::new(DESTINATIONS).records()
    }
}

/// The top five detox and wellness resorts.
#[derive(Debug, Clone, Copy, Default)]
pub struct Resorts;

impl RecordSource for Resorts {
    fn records(&self) -> Result<Vec<Record>, SourceError> {
        StaticSource::new(RESORTS).records()
    }
}

/// Returns the searchable trip facts for the destination catalog.
#[must_use]
pub fn trips() -> Vec<Trip> {
    vec![
        Trip::new("Amalfi Coast", "Italy", 1800, ["beach", "romantic", "scenic"]),
        Trip::new("Santorini", "Greece", 2000, ["island", "luxury", "sunset"]),
        Trip::new("Tokyo", "Japan", 2200, ["city", "tech", "culture"]),
        Trip::new("Paris", "France", 1600, ["romantic", "city", "art"]),
        Trip::new("New York City", "USA", 1500, ["city", "shopping", "broadway"]),
    ]
}
