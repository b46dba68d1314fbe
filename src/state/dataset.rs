use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use uuid::Uuid;

use crate::core::position::BlockGeometry;
use crate::core::time_span::{to_millis, TimeSpan};
use crate::error::{Result, TimelineError};

/// Built-in dataset shipped with the application.
const REFERENCE_DATASET_JSON: &str = include_str!("../../assets/reference_dataset.json");

/// A historical event with an inclusive time range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Identity used for render keys; generated when absent from the source.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl EventRecord {
    #[allow(dead_code)]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            start,
            end,
        }
    }

    /// Both bounds are inclusive.
    pub fn is_active_at(&self, time: NaiveDateTime) -> bool {
        self.start <= time && time <= self.end
    }

    /// Horizontal placement of this event's block within `span`.
    pub fn geometry(&self, span: &TimeSpan) -> BlockGeometry {
        BlockGeometry::new(
            to_millis(self.start),
            to_millis(self.end),
            span.start_ms(),
            span.duration_ms(),
        )
    }
}

/// A named, colored track of events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Stable identifier (e.g. "politics").
    pub id: String,
    /// Display name (e.g. "Politics").
    pub name: String,
    /// Any CSS color.
    pub color: String,
    #[serde(default)]
    pub events: Vec<EventRecord>,
}

/// An active event together with the layer it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveEvent {
    pub layer_name: String,
    pub color: String,
    pub event: EventRecord,
}

/// Ordered collection of layers. Order is kept exactly as supplied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub layers: Vec<Layer>,
}

impl Dataset {
    /// The built-in 1900-2025 dataset.
    pub fn reference() -> Result<Self> {
        Self::from_json(REFERENCE_DATASET_JSON)
    }

    /// Parse and validate a dataset from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let dataset: Dataset = serde_json::from_str(json)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Load a dataset from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|err| TimelineError::io(path, err))?;
        Self::from_json(&json)
    }

    /// Reject events whose end precedes their start.
    pub fn validate(&self) -> Result<()> {
        for layer in &self.layers {
            if let Some(event) = layer.events.iter().find(|event| event.start > event.end) {
                return Err(TimelineError::InvalidEvent {
                    layer: layer.name.clone(),
                    title: event.title.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn event_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.events.len()).sum()
    }

    /// All events containing `time`, in layer order then event order.
    pub fn active_at(&self, time: NaiveDateTime) -> Vec<ActiveEvent> {
        self.layers
            .iter()
            .flat_map(|layer| {
                layer
                    .events
                    .iter()
                    .filter(move |event| event.is_active_at(time))
                    .map(move |event| ActiveEvent {
                        layer_name: layer.name.clone(),
                        color: layer.color.clone(),
                        event: event.clone(),
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    fn titles(active: &[ActiveEvent]) -> Vec<&str> {
        active.iter().map(|a| a.event.title.as_str()).collect()
    }

    #[test]
    fn test_reference_dataset_loads() {
        let dataset = Dataset::reference().unwrap();
        let ids: Vec<_> = dataset.layers.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["politics", "science", "culture", "technology"]);
        assert_eq!(dataset.event_count(), 31);
    }

    #[test]
    fn test_world_war_one_start() {
        let dataset = Dataset::reference().unwrap();
        let span = TimeSpan::default();
        let time = at(1914, 7, 28);

        let active = dataset.active_at(time);
        let names = titles(&active);
        assert!(names.contains(&"World War I"));
        assert!(!names.contains(&"World War II"));
        assert!(names.contains(&"Theory of Relativity"));

        let position = span.position_of(time);
        assert!(position > 11.4 && position < 11.7, "position was {position}");
    }

    #[test]
    fn test_active_bounds_inclusive() {
        let start = at(1969, 7, 16);
        let end = at(1969, 7, 24);
        let event = EventRecord::new("Moon Landing", "", start, end);
        assert!(event.is_active_at(start));
        assert!(event.is_active_at(end));
        assert!(!event.is_active_at(at(1969, 7, 25)));
        assert!(!event.is_active_at(at(1969, 7, 15)));
    }

    #[test]
    fn test_active_events_keep_layer_order() {
        let dataset = Dataset::reference().unwrap();
        let active = dataset.active_at(at(2012, 9, 1));
        let layers: Vec<_> = active.iter().map(|a| a.layer_name.as_str()).collect();
        let mut sorted = layers.clone();
        sorted.dedup();
        assert_eq!(sorted, ["Politics", "Science", "Culture", "Technology"]);
        assert!(titles(&active).contains(&"Higgs Boson Discovery"));
    }

    #[test]
    fn test_inverted_event_rejected() {
        let json = r#"{"layers":[{"id":"x","name":"X","color":"red","events":[
            {"title":"Backwards","start":"2000-01-01T00:00:00","end":"1999-01-01T00:00:00"}
        ]}]}"#;
        let err = Dataset::from_json(json).unwrap_err();
        assert!(matches!(err, TimelineError::InvalidEvent { ref title, .. } if title == "Backwards"));
    }

    #[test]
    fn test_missing_ids_are_generated() {
        let json = r#"{"layers":[{"id":"x","name":"X","color":"red","events":[
            {"title":"A","start":"2000-01-01T00:00:00","end":"2000-01-02T00:00:00"},
            {"title":"B","start":"2000-01-01T00:00:00","end":"2000-01-02T00:00:00"}
        ]}]}"#;
        let dataset = Dataset::from_json(json).unwrap();
        let events = &dataset.layers[0].events;
        assert_ne!(events[0].id, events[1].id);
        assert_eq!(events[0].description, "");
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let path = std::env::temp_dir().join(format!("missing-{}.json", Uuid::new_v4()));
        assert!(matches!(Dataset::load(&path), Err(TimelineError::Io { .. })));
    }

    #[test]
    fn test_event_geometry() {
        let span = TimeSpan::default();
        let event = EventRecord::new("Cold War", "", at(1947, 3, 12), at(1991, 12, 26));
        let geometry = event.geometry(&span);
        assert!(geometry.left_percent > 37.0 && geometry.left_percent < 38.0);
        assert!(geometry.shows_label());
    }
}
