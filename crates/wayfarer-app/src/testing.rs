use std::io::Cursor;

use image::{ImageFormat, RgbaImage};
use wayfarer_core::{
    Record, RecordSource as _,
    catalog::{self, Destinations, Resorts},
};
use wayfarer_gallery::{MemoryResolver, MissingImagePolicy};

use crate::session::Session;

pub(crate) fn png_bytes() -> Vec<u8> {
    let mut bytes = Vec::new();
    RgbaImage::new(4, 3)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

fn insert_all(resolver: &mut MemoryResolver, records: &[Record], missing: &[usize]) {
    for (index, record) in records.iter().enumerate() {
        if !missing.contains(&index) {
            resolver.insert(record.image_ref(), png_bytes());
        }
    }
}

/// Builds a session over the built-in catalogs whose images all resolve,
/// except the destinations and resorts at the given indices.
pub(crate) fn session(
    missing_destinations: &[usize],
    missing_resorts: &[usize],
    policy: MissingImagePolicy,
) -> Session {
    let destinations = Destinations.records().unwrap();
    let resorts = Resorts.records().unwrap();
    let mut resolver = MemoryResolver::new();
    insert_all(&mut resolver, &destinations, missing_destinations);
    insert_all(&mut resolver, &resorts, missing_resorts);
    Session::new(
        destinations,
        resorts,
        catalog::trips(),
        Box::new(resolver),
        policy,
    )
}
