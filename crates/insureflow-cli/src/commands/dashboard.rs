use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use crate::util::{format_money, now_utc};
use anyhow::Result;
use clap::Args;
use insureflow_config::MAX_MONTHS_BACK;
use insureflow_core::dto::DashboardDto;

#[derive(Debug, Args)]
pub struct DashboardArgs {
    /// Trailing months in the revenue series
    #[arg(long)]
    pub months: Option<usize>,
}

pub fn dashboard(ctx: &Context<'_>, args: DashboardArgs) -> Result<()> {
    let months = args.months.unwrap_or(ctx.config.dashboard.months_back);
    if months < 1 || months > MAX_MONTHS_BACK {
        return Err(invalid_input(format!(
            "invalid months value: {months} (expected 1..={MAX_MONTHS_BACK})"
        )));
    }

    let now = now_utc();
    let analytics = ctx.store.analytics();
    let dto = DashboardDto {
        lead_count: analytics.lead_count(),
        total_closed_revenue: analytics.total_closed_revenue(),
        pipeline_value: analytics.pipeline_value(),
        active_deals: analytics.active_deal_count(),
        conversion_rate: analytics.conversion_rate(),
        status_distribution: analytics.status_distribution(),
        policy_breakdown: analytics.policy_breakdown(),
        revenue_by_month: analytics.revenue_time_series(now, months),
        monthly_goal: ctx.config.dashboard.monthly_goal,
    };

    if ctx.json {
        print_json(&dto)?;
    } else {
        print_human(&dto);
    }
    Ok(())
}

fn print_human(dto: &DashboardDto) {
    println!("total revenue:   {}", format_money(dto.total_closed_revenue));
    println!(
        "pipeline value:  {} ({} active deals)",
        format_money(dto.pipeline_value),
        dto.active_deals
    );
    println!(
        "conversion rate: {:.1}% (based on {} leads)",
        dto.conversion_rate, dto.lead_count
    );
    if let Some(goal) = dto.monthly_goal {
        let progress = dto.total_closed_revenue / goal * 100.0;
        println!(
            "monthly goal:    {} ({:.0}% reached)",
            format_money(goal),
            progress
        );
    }

    println!();
    println!("pipeline health");
    for entry in &dto.status_distribution {
        println!("  {:<16} {}", entry.status.label(), entry.count);
    }

    println!();
    println!("revenue by policy type");
    if dto.policy_breakdown.is_empty() {
        println!("  no commission data available yet");
    }
    for item in &dto.policy_breakdown {
        println!(
            "  {:<30} {:>3} leads  earned {:>10}  pending {:>10}  total {:>10}",
            item.policy.label(),
            item.lead_count,
            format_money(item.earned),
            format_money(item.pending),
            format_money(item.total_potential())
        );
    }

    println!();
    println!("revenue by month");
    for bucket in &dto.revenue_by_month {
        println!("  {}  {}", bucket.label(), format_money(bucket.revenue));
    }
}
