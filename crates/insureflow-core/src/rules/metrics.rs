use crate::domain::{Lead, LeadStatus, PolicyType};
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: LeadStatus,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolicyBreakdown {
    pub policy: PolicyType,
    pub lead_count: usize,
    pub earned: f64,
    pub pending: f64,
}

impl PolicyBreakdown {
    pub fn total_potential(&self) -> f64 {
        self.earned + self.pending
    }
}

/// Revenue booked in one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthBucket {
    pub year: i32,
    pub month: u32,
    pub revenue: f64,
}

impl MonthBucket {
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

pub fn total_closed_revenue(leads: &[Lead]) -> f64 {
    leads
        .iter()
        .filter(|lead| lead.status == LeadStatus::ClosedWon)
        .map(|lead| lead.estimated_commission)
        .sum()
}

pub fn pipeline_value(leads: &[Lead]) -> f64 {
    leads
        .iter()
        .filter(|lead| lead.status.in_pipeline())
        .map(|lead| lead.estimated_commission)
        .sum()
}

pub fn active_deal_count(leads: &[Lead]) -> usize {
    leads.iter().filter(|lead| lead.status.in_pipeline()).count()
}

/// Closed-won share of all leads, as a percentage. Zero on an empty set.
pub fn conversion_rate(leads: &[Lead]) -> f64 {
    if leads.is_empty() {
        return 0.0;
    }
    let won = leads
        .iter()
        .filter(|lead| lead.status == LeadStatus::ClosedWon)
        .count();
    won as f64 / leads.len() as f64 * 100.0
}

/// One entry per status in funnel order, zero counts included.
pub fn status_distribution(leads: &[Lead]) -> Vec<StatusCount> {
    LeadStatus::ALL
        .iter()
        .map(|&status| StatusCount {
            status,
            count: leads.iter().filter(|lead| lead.status == status).count(),
        })
        .collect()
}

/// Earned/pending commission per policy type. Types with no leads and no
/// value are omitted; the rest appear in enumeration order.
pub fn policy_breakdown(leads: &[Lead]) -> Vec<PolicyBreakdown> {
    PolicyType::ALL
        .iter()
        .map(|&policy| {
            let mut breakdown = PolicyBreakdown {
                policy,
                lead_count: 0,
                earned: 0.0,
                pending: 0.0,
            };
            for lead in leads.iter().filter(|lead| lead.policy_interest == policy) {
                breakdown.lead_count += 1;
                if lead.status == LeadStatus::ClosedWon {
                    breakdown.earned += lead.estimated_commission;
                } else if lead.status.in_pipeline() {
                    breakdown.pending += lead.estimated_commission;
                }
            }
            breakdown
        })
        .filter(|b| b.lead_count > 0 || b.earned > 0.0 || b.pending > 0.0)
        .collect()
}

/// Closed-won commission per trailing calendar month, ending at the month
/// containing `now_utc`. Leads without a close date are omitted rather than
/// spread across the window.
pub fn revenue_time_series(leads: &[Lead], now_utc: i64, months_back: usize) -> Vec<MonthBucket> {
    let anchor = DateTime::<Utc>::from_timestamp(now_utc, 0)
        .unwrap_or_else(|| DateTime::<Utc>::from_timestamp(0, 0).expect("epoch is valid"));

    let mut months = Vec::with_capacity(months_back);
    let mut year = anchor.year();
    let mut month = anchor.month();
    for _ in 0..months_back {
        months.push((year, month));
        if month == 1 {
            month = 12;
            year -= 1;
        } else {
            month -= 1;
        }
    }
    months.reverse();

    months
        .into_iter()
        .map(|(year, month)| MonthBucket {
            year,
            month,
            revenue: leads
                .iter()
                .filter(|lead| lead.status == LeadStatus::ClosedWon)
                .filter_map(|lead| lead.closed_at.map(|ts| (lead, ts)))
                .filter(|(_, ts)| {
                    DateTime::<Utc>::from_timestamp(*ts, 0)
                        .map(|dt| dt.year() == year && dt.month() == month)
                        .unwrap_or(false)
                })
                .map(|(lead, _)| lead.estimated_commission)
                .sum(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{
        conversion_rate, pipeline_value, policy_breakdown, revenue_time_series,
        status_distribution, total_closed_revenue,
    };
    use crate::domain::{Lead, LeadId, LeadStatus, PolicyType};
    use chrono::{TimeZone, Utc};

    fn lead(status: LeadStatus, policy: PolicyType, commission: f64) -> Lead {
        Lead {
            id: LeadId::new(),
            name: "Test Lead".to_string(),
            phone: String::new(),
            email: String::new(),
            status,
            policy_interest: policy,
            estimated_commission: commission,
            notes: String::new(),
            last_contacted: None,
            next_follow_up: None,
            closed_at: None,
            created_at: 0,
            updated_at: 0,
            history: Vec::new(),
        }
    }

    #[test]
    fn revenue_counts_only_closed_won() {
        let leads = vec![
            lead(LeadStatus::ClosedWon, PolicyType::TermLife, 1500.0),
            lead(LeadStatus::ClosedWon, PolicyType::WholeLife, 12_000.0),
            lead(LeadStatus::ClosedLost, PolicyType::TermLife, 900.0),
            lead(LeadStatus::Negotiation, PolicyType::FinalExpense, 700.0),
        ];
        assert_eq!(total_closed_revenue(&leads), 13_500.0);
    }

    #[test]
    fn pipeline_value_covers_negotiation_and_appointment() {
        let leads = vec![
            lead(LeadStatus::Negotiation, PolicyType::WholeLife, 12_000.0),
            lead(LeadStatus::Appointment, PolicyType::TermLife, 1500.0),
            lead(LeadStatus::New, PolicyType::TermLife, 800.0),
            lead(LeadStatus::ClosedWon, PolicyType::TermLife, 400.0),
        ];
        assert_eq!(pipeline_value(&leads), 13_500.0);
    }

    #[test]
    fn conversion_rate_is_zero_on_empty_store() {
        assert_eq!(conversion_rate(&[]), 0.0);
    }

    #[test]
    fn conversion_rate_is_won_share_of_all_leads() {
        let leads = vec![
            lead(LeadStatus::ClosedWon, PolicyType::TermLife, 1.0),
            lead(LeadStatus::New, PolicyType::TermLife, 1.0),
            lead(LeadStatus::ClosedLost, PolicyType::TermLife, 1.0),
            lead(LeadStatus::Contacted, PolicyType::TermLife, 1.0),
        ];
        assert_eq!(conversion_rate(&leads), 25.0);
    }

    #[test]
    fn status_distribution_includes_zero_counts_in_order() {
        let leads = vec![lead(LeadStatus::Negotiation, PolicyType::WholeLife, 1.0)];
        let distribution = status_distribution(&leads);
        assert_eq!(distribution.len(), LeadStatus::ALL.len());
        for (entry, status) in distribution.iter().zip(LeadStatus::ALL) {
            assert_eq!(entry.status, status);
        }
        assert_eq!(distribution[3].count, 1);
        assert_eq!(distribution[0].count, 0);
    }

    #[test]
    fn policy_breakdown_partitions_earned_and_pending() {
        let leads = vec![
            lead(LeadStatus::ClosedWon, PolicyType::MortgageProtection, 4200.0),
            lead(LeadStatus::Negotiation, PolicyType::MortgageProtection, 3500.0),
            lead(LeadStatus::New, PolicyType::MortgageProtection, 900.0),
            lead(LeadStatus::Appointment, PolicyType::TermLife, 1500.0),
        ];
        let breakdown = policy_breakdown(&leads);
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].policy, PolicyType::MortgageProtection);
        assert_eq!(breakdown[0].lead_count, 3);
        assert_eq!(breakdown[0].earned, 4200.0);
        assert_eq!(breakdown[0].pending, 3500.0);
        assert_eq!(breakdown[1].policy, PolicyType::TermLife);
        assert_eq!(breakdown[1].pending, 1500.0);
    }

    #[test]
    fn time_series_buckets_by_calendar_month_across_year_boundary() {
        let november = Utc.with_ymd_and_hms(2025, 11, 20, 9, 0, 0).unwrap().timestamp();
        let january = Utc.with_ymd_and_hms(2026, 1, 5, 17, 30, 0).unwrap().timestamp();
        let now = Utc.with_ymd_and_hms(2026, 2, 10, 12, 0, 0).unwrap().timestamp();

        let mut won_november = lead(LeadStatus::ClosedWon, PolicyType::WholeLife, 12_000.0);
        won_november.closed_at = Some(november);
        let mut won_january = lead(LeadStatus::ClosedWon, PolicyType::TermLife, 1500.0);
        won_january.closed_at = Some(january);
        let undated = lead(LeadStatus::ClosedWon, PolicyType::FinalExpense, 999.0);

        let series = revenue_time_series(&[won_november, won_january, undated], now, 4);
        let labels: Vec<String> = series.iter().map(|bucket| bucket.label()).collect();
        assert_eq!(labels, ["2025-11", "2025-12", "2026-01", "2026-02"]);
        assert_eq!(series[0].revenue, 12_000.0);
        assert_eq!(series[1].revenue, 0.0);
        assert_eq!(series[2].revenue, 1500.0);
        assert_eq!(series[3].revenue, 0.0);
    }

    #[test]
    fn time_series_is_empty_for_zero_window() {
        assert!(revenue_time_series(&[], 1_700_000_000, 0).is_empty());
    }
}
