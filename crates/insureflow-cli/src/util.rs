use anyhow::{anyhow, Result};
use insureflow_ai::DeliveryChannel;
use insureflow_core::domain::{LeadId, LeadStatus, PolicyType};
use insureflow_core::time;
use std::str::FromStr;

pub use insureflow_core::time::{format_timestamp_date, format_timestamp_datetime};

pub fn now_utc() -> i64 {
    time::now_utc()
}

pub fn parse_local_timestamp(input: &str) -> Result<i64> {
    Ok(time::parse_local_timestamp(input)?)
}

pub fn parse_lead_id(raw: &str) -> Result<LeadId> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("lead id cannot be empty"));
    }
    LeadId::from_str(trimmed).map_err(|_| anyhow!("invalid lead id"))
}

pub fn parse_status(raw: &str) -> Result<LeadStatus> {
    Ok(LeadStatus::from_str(raw)?)
}

pub fn parse_policy(raw: &str) -> Result<PolicyType> {
    Ok(PolicyType::from_str(raw)?)
}

pub fn parse_channel(raw: &str) -> Result<DeliveryChannel> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "sms" | "text" => Ok(DeliveryChannel::Sms),
        "email" => Ok(DeliveryChannel::Email),
        _ => Err(anyhow!("invalid channel: expected sms|email")),
    }
}

/// Accepts "mm:ss" or a bare second count.
pub fn parse_duration_secs(raw: &str) -> Result<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("duration cannot be empty"));
    }
    if let Some((minutes, seconds)) = trimmed.split_once(':') {
        let minutes: i64 = minutes
            .parse()
            .map_err(|_| anyhow!("invalid duration: expected mm:ss"))?;
        let seconds: i64 = seconds
            .parse()
            .map_err(|_| anyhow!("invalid duration: expected mm:ss"))?;
        if minutes < 0 || !(0..60).contains(&seconds) {
            return Err(anyhow!("invalid duration: expected mm:ss"));
        }
        Ok(minutes * 60 + seconds)
    } else {
        let seconds: i64 = trimmed
            .parse()
            .map_err(|_| anyhow!("invalid duration: expected mm:ss or seconds"))?;
        if seconds < 0 {
            return Err(anyhow!("duration cannot be negative"));
        }
        Ok(seconds)
    }
}

/// Whole-dollar display with thousands separators, e.g. "$12,000".
pub fn format_money(value: f64) -> String {
    let rounded = value.round() as i64;
    let negative = rounded < 0;
    let mut digits = rounded.abs().to_string();
    let mut grouped = String::new();
    while digits.len() > 3 {
        let split = digits.len() - 3;
        grouped = format!(",{}{}", &digits[split..], grouped);
        digits.truncate(split);
    }
    format!("{}${}{}", if negative { "-" } else { "" }, digits, grouped)
}
