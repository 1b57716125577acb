//! Demo dogs for a fresh store.
//!
//! Lennon and Olivia, with walk/feed history relative to the moment of
//! seeding so the status column is interesting straight away.

use chrono::Duration;
use log::info;

use crate::app::ports::{Clock, RecordStore, StoreError};
use crate::record::NewRecord;

struct SeedDog {
    name: &'static str,
    birthdate: &'static str,
    breed: &'static str,
    image_url: &'static str,
    walked_ago: Duration,
    fed_ago: Duration,
}

const SEED_DOGS: [SeedDog; 2] = [
    SeedDog {
        name: "Lennon",
        birthdate: "2020-08-31",
        breed: "Pomeranian",
        image_url: "https://res.cloudinary.com/dnocv6uwb/image/upload/v1609370267/dakota-and-lennon-square-compressed_hoenfo.jpg",
        walked_ago: Duration::days(1),
        fed_ago: Duration::hours(1),
    },
    SeedDog {
        name: "Olivia",
        birthdate: "2018-03-31",
        breed: "Terrier",
        image_url: "https://res.cloudinary.com/dnocv6uwb/image/upload/v1631229064/zx6CPsp_d_utkmww.webp",
        walked_ago: Duration::days(3),
        fed_ago: Duration::hours(3),
    },
];

/// Seed `store` if it holds no records.  Returns how many dogs were added.
pub fn seed_if_empty(store: &mut impl RecordStore, clock: &impl Clock) -> Result<usize, StoreError> {
    if store.count()? > 0 {
        return Ok(0);
    }
    let now = clock.now();
    for dog in &SEED_DOGS {
        let record = store.create(NewRecord {
            name: dog.name.to_owned(),
            birth_descriptor: Some(dog.birthdate.to_owned()),
            breed: dog.breed.to_owned(),
            image_url: dog.image_url.to_owned(),
        })?;
        store.record_walk(record.id, now - dog.walked_ago)?;
        store.record_feeding(record.id, now - dog.fed_ago)?;
    }
    info!("Seeded {} demo dogs", SEED_DOGS.len());
    Ok(SEED_DOGS.len())
}
