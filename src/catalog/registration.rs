use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    Pending,
    Confirmed,
    Cancelled,
}

/// A participant's intent to join an event. Constructed per registration
/// request and never persisted, the confirmation response is computed
/// entirely from this and the matched event.
#[derive(Clone, Serialize, Debug)]
pub struct Registration {
    pub registration_id: String,
    pub event_id: i64,
    pub participant_name: String,
    pub email: String,
    pub phone: String,
    pub team_members: Vec<String>,
    pub registered_at: DateTime<Utc>,
    pub status: RegistrationStatus,
}

impl Registration {
    pub fn new(
        event_id: i64,
        participant_name: String,
        email: String,
        phone: String,
        team_members: Vec<String>,
    ) -> Registration {
        Registration {
            registration_id: Uuid::new_v4().to_string(),
            event_id,
            participant_name,
            email,
            phone,
            team_members,
            registered_at: Utc::now(),
            status: RegistrationStatus::Pending,
        }
    }

    pub fn confirm(&mut self) {
        self.status = RegistrationStatus::Confirmed;
    }

    pub fn cancel(&mut self) {
        self.status = RegistrationStatus::Cancelled;
    }
}
