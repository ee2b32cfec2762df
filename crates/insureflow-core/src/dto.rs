use crate::domain::{InteractionId, LeadId, LeadStatus, PolicyType};
use crate::rules::{MonthBucket, PolicyBreakdown, StatusCount};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadListItemDto {
    pub id: LeadId,
    pub name: String,
    pub phone: String,
    pub status: LeadStatus,
    pub policy_interest: PolicyType,
    pub estimated_commission: f64,
    pub last_contacted: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionDto {
    pub id: InteractionId,
    pub occurred_at: i64,
    pub kind: String,
    pub outcome: String,
    pub note: String,
    pub duration_secs: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadDetailDto {
    pub id: LeadId,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub status: LeadStatus,
    pub policy_interest: PolicyType,
    pub estimated_commission: f64,
    pub notes: String,
    pub last_contacted: Option<i64>,
    pub next_follow_up: Option<i64>,
    pub closed_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
    pub history: Vec<InteractionDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardDto {
    pub lead_count: usize,
    pub total_closed_revenue: f64,
    pub pipeline_value: f64,
    pub active_deals: usize,
    pub conversion_rate: f64,
    pub status_distribution: Vec<StatusCount>,
    pub policy_breakdown: Vec<PolicyBreakdown>,
    pub revenue_by_month: Vec<MonthBucket>,
    pub monthly_goal: Option<f64>,
}
