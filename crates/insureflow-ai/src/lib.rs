pub mod error;
pub mod gemini;
pub mod outbound;
pub mod prompts;
pub mod service;

pub use error::{AiError, OutboundError, Result};
pub use gemini::GeminiClient;
pub use outbound::{DeliveryChannel, OutboundChannel, SimulatedChannel};
pub use service::{LeadCandidate, ScriptService};
