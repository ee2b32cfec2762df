pub mod metrics;
pub mod suggest;
pub mod template;

pub use metrics::{
    active_deal_count, conversion_rate, pipeline_value, policy_breakdown, revenue_time_series,
    status_distribution, total_closed_revenue, MonthBucket, PolicyBreakdown, StatusCount,
};
pub use suggest::{
    suggest_status, CALL_OUTCOMES, OUTCOME_APPOINTMENT_SET, OUTCOME_NOT_INTERESTED, OUTCOME_SENT,
    OUTCOME_SPOKE_WITH_LEAD,
};
pub use template::{personalize, templates_for, MessageTemplate};
