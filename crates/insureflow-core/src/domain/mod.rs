pub mod ids;
pub mod interaction;
pub mod lead;
pub mod policy;
pub mod status;

pub use ids::{InteractionId, LeadId};
pub use interaction::{Interaction, InteractionKind};
pub use lead::{validate_commission, Lead};
pub use policy::PolicyType;
pub use status::LeadStatus;
