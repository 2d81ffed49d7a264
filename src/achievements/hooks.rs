//! External collaborators invoked on unlock.
//!
//! Both ports are one-way: an implementation may fail internally, but
//! nothing it does can roll back the unlock or the rewards that
//! triggered it.

use crate::achievements::types::Category;
use crate::build_info;

/// One-way analytics sink notified of every first-time unlock.
pub trait TelemetrySink {
    fn record_achievement(&mut self, id: &str, name: &str, player_level: u32, category: Category);
}

/// Optional bridge to a platform achievement service (console/storefront).
pub trait PlatformBridge {
    fn unlock(&mut self, id: &str);
}

/// Default sink that drops everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTelemetry;

impl TelemetrySink for NullTelemetry {
    fn record_achievement(&mut self, _id: &str, _name: &str, _player_level: u32, _category: Category) {}
}

/// Sink that POSTs unlock events as JSON to an HTTP endpoint.
pub struct HttpTelemetry {
    endpoint: String,
}

impl HttpTelemetry {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl TelemetrySink for HttpTelemetry {
    fn record_achievement(&mut self, id: &str, name: &str, player_level: u32, category: Category) {
        let payload = serde_json::json!({
            "event": "achievement_unlocked",
            "id": id,
            "name": name,
            "player_level": player_level,
            "category": category.name(),
            "client": build_info::client_tag(),
        });

        // Fire-and-forget: swallow transport errors entirely.
        let _ = ureq::post(&self.endpoint)
            .set("User-Agent", &build_info::client_tag())
            .send_json(payload);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_telemetry_accepts_anything() {
        let mut sink = NullTelemetry;
        sink.record_achievement("first_blood", "First Blood", 3, Category::Combat);
    }

    #[test]
    fn test_http_telemetry_construction() {
        let sink = HttpTelemetry::new("http://localhost:9/events");
        assert_eq!(sink.endpoint, "http://localhost:9/events");
    }
}
