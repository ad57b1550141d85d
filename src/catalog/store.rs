use super::{Event, Registration};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

lazy_static! {
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("email regex is valid");
}

#[derive(Deserialize)]
struct EventsFile {
    #[serde(default)]
    events: Vec<Event>,
}

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Event not found")]
    UnknownEvent(i64),
}

/// Registration request body. All fields optional so that presence
/// checks happen in [`EventCatalog::validate_registration`] rather than
/// at deserialization time.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RegisterPayload {
    pub event_id: Option<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub team_members: Option<Vec<String>>,
}

/// A validated registration together with the event it resolved to.
#[derive(Debug)]
pub struct AcceptedRegistration {
    pub registration: Registration,
    pub event: Event,
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct EventTypeBreakdown {
    pub competitions: u32,
    pub workshops: u32,
    pub tournaments: u32,
}

impl EventTypeBreakdown {
    /// Fixed categories for this festival's lineup, not derived from the
    /// dataset.
    pub fn fixed() -> EventTypeBreakdown {
        EventTypeBreakdown {
            competitions: 4,
            workshops: 1,
            tournaments: 1,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct CatalogStats {
    pub total_events: usize,
    pub total_capacity: u64,
    pub event_types: EventTypeBreakdown,
}

/// File-backed event catalog. Holds only the dataset path: every
/// operation reloads and reparses the file, so there is no shared state
/// between requests and an out-of-band edit to the dataset is picked up
/// on the next call.
#[derive(Debug, Clone)]
pub struct EventCatalog {
    data_path: PathBuf,
}

impl EventCatalog {
    pub fn new<P: AsRef<Path>>(data_path: P) -> EventCatalog {
        EventCatalog {
            data_path: data_path.as_ref().to_owned(),
        }
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Loads the full catalog in file order. A missing or malformed
    /// dataset degrades to an empty catalog, callers treat "no events"
    /// as a valid state.
    pub fn load(&self) -> Vec<Event> {
        let text = match std::fs::read_to_string(&self.data_path) {
            Ok(text) => text,
            Err(err) => {
                warn!(
                    "Could not read event dataset {}: {}",
                    self.data_path.display(),
                    err
                );
                return Vec::new();
            }
        };

        let events = match serde_json::from_str::<EventsFile>(&text) {
            Ok(file) => file.events,
            Err(err) => {
                warn!(
                    "Could not parse event dataset {}: {}",
                    self.data_path.display(),
                    err
                );
                return Vec::new();
            }
        };

        let mut seen_ids = HashSet::new();
        for event in events.iter() {
            if !seen_ids.insert(event.event_id) {
                warn!(
                    "Duplicate event_id {} in dataset, lookups resolve to the first occurrence",
                    event.event_id
                );
            }
        }

        events
    }

    /// First event with a matching id, in file order.
    pub fn find_by_id(&self, id: i64) -> Option<Event> {
        self.load().into_iter().find(|e| e.event_id == id)
    }

    /// Case-insensitive substring search over title and brief. Blank
    /// queries are a handler-level validation error and never reach
    /// this method.
    pub fn search(&self, query: &str) -> Vec<Event> {
        let needle = query.to_lowercase();
        self.load()
            .into_iter()
            .filter(|e| e.matches(&needle))
            .collect()
    }

    pub fn stats(&self) -> CatalogStats {
        let events = self.load();
        let total_capacity = events
            .iter()
            .map(|e| e.max_participants.unwrap_or(0) as u64)
            .sum();
        CatalogStats {
            total_events: events.len(),
            total_capacity,
            event_types: EventTypeBreakdown::fixed(),
        }
    }

    /// Checks the payload and resolves its event. Returns the first
    /// failing condition: presence of required fields, then email
    /// format, then event resolution.
    pub fn validate_registration(
        &self,
        payload: &RegisterPayload,
    ) -> Result<AcceptedRegistration, ValidationError> {
        let (Some(event_id), Some(name), Some(email), Some(phone)) = (
            payload.event_id,
            payload.name.as_ref(),
            payload.email.as_ref(),
            payload.phone.as_ref(),
        ) else {
            return Err(ValidationError::MissingFields);
        };

        if !EMAIL_REGEX.is_match(email) {
            return Err(ValidationError::InvalidEmail);
        }

        let event = self
            .find_by_id(event_id)
            .ok_or(ValidationError::UnknownEvent(event_id))?;

        let registration = Registration::new(
            event_id,
            name.clone(),
            email.clone(),
            phone.clone(),
            payload.team_members.clone().unwrap_or_default(),
        );

        Ok(AcceptedRegistration {
            registration,
            event,
        })
    }
}
