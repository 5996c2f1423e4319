use crate::modules::user::application::domain::entities::{GeoLocation, User, UserId};
use crate::modules::user::application::ports::outgoing::NewUserRecord;

pub const SAMPLE_CREATED_AT: i64 = 1_700_000_000_000;

pub fn new_york() -> GeoLocation {
    GeoLocation {
        latitude: 40.7484,
        longitude: -73.9967,
        timezone: "America/New_York".to_string(),
        utc_offset_seconds: Some(-14400),
    }
}

pub fn san_francisco() -> GeoLocation {
    GeoLocation {
        latitude: 37.7898,
        longitude: -122.3942,
        timezone: "America/Los_Angeles".to_string(),
        utc_offset_seconds: Some(-25200),
    }
}

/// A record located in New York regardless of `zip`.
pub fn sample_record(name: &str, zip: &str) -> NewUserRecord {
    let location = new_york();
    NewUserRecord {
        name: name.to_string(),
        zip: zip.to_string(),
        latitude: location.latitude,
        longitude: location.longitude,
        timezone: location.timezone,
        created_at: SAMPLE_CREATED_AT,
        updated_at: SAMPLE_CREATED_AT,
    }
}

pub fn sample_user(id: &str, name: &str, zip: &str) -> User {
    sample_record(name, zip).into_user(UserId::from(id))
}
