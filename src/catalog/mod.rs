mod event;
mod registration;
mod store;

pub use event::{Event, Rules, TeamSize};
pub use registration::{Registration, RegistrationStatus};
pub use store::{
    AcceptedRegistration, CatalogStats, EventCatalog, EventTypeBreakdown, RegisterPayload,
    ValidationError,
};
