use crate::error::OutboundError;
use std::fmt;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryChannel {
    Sms,
    Email,
}

impl DeliveryChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryChannel::Sms => "sms",
            DeliveryChannel::Email => "email",
        }
    }
}

impl fmt::Display for DeliveryChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outbound message transport. Delivery success must be known before the
/// interaction logger commits any status side effect.
pub trait OutboundChannel {
    fn channel_name(&self) -> &'static str;
    fn deliver(
        &self,
        channel: DeliveryChannel,
        address: &str,
        content: &str,
    ) -> Result<(), OutboundError>;
}

/// Stand-in transport: validates the address, logs the payload, reports
/// success. No real SMS/email leaves the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedChannel;

impl OutboundChannel for SimulatedChannel {
    fn channel_name(&self) -> &'static str {
        "simulated"
    }

    fn deliver(
        &self,
        channel: DeliveryChannel,
        address: &str,
        content: &str,
    ) -> Result<(), OutboundError> {
        if address.trim().is_empty() {
            return Err(OutboundError::MissingAddress(channel));
        }
        info!(
            channel = channel.as_str(),
            address,
            bytes = content.len(),
            "simulated delivery"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{DeliveryChannel, OutboundChannel, SimulatedChannel};
    use crate::error::OutboundError;

    #[test]
    fn simulated_delivery_succeeds_with_address() {
        let channel = SimulatedChannel;
        assert!(channel
            .deliver(DeliveryChannel::Sms, "512-555-0123", "Hi Sarah")
            .is_ok());
    }

    #[test]
    fn missing_address_is_rejected_per_channel() {
        let channel = SimulatedChannel;
        let err = channel
            .deliver(DeliveryChannel::Email, "  ", "body")
            .unwrap_err();
        assert!(matches!(
            err,
            OutboundError::MissingAddress(DeliveryChannel::Email)
        ));
    }
}
