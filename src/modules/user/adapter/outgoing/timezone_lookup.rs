use std::sync::Arc;

use tzf_rs::DefaultFinder;

/// Offline coordinate → IANA zone lookup backed by the polygon data bundled
/// with `tzf-rs`. Building the finder is expensive, so clones share one.
#[derive(Clone)]
pub struct TimezoneLookup {
    finder: Arc<DefaultFinder>,
}

impl TimezoneLookup {
    pub fn new() -> Self {
        Self {
            finder: Arc::new(DefaultFinder::new()),
        }
    }

    pub fn zone_for(&self, latitude: f64, longitude: f64) -> String {
        let name = self.finder.get_tz_name(longitude, latitude);
        if name.is_empty() {
            nautical_zone(longitude)
        } else {
            name.to_string()
        }
    }
}

impl Default for TimezoneLookup {
    fn default() -> Self {
        Self::new()
    }
}

/// `Etc/GMT±N` zone for points outside every polygon. POSIX sign convention:
/// east of Greenwich is negative.
fn nautical_zone(longitude: f64) -> String {
    let offset = (longitude / 15.0).round() as i32;
    match offset {
        0 => "Etc/GMT".to_string(),
        o if o > 0 => format!("Etc/GMT-{}", o),
        o => format!("Etc/GMT+{}", -o),
    }
}
