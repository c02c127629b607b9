use crate::infra::resolve_policy;
use bloodflow::config::AppConfig;
use bloodflow::error::AppError;
use bloodflow::inventory::BloodType;
use bloodflow::views::{
    analytics_view, dashboard_view, donor_view, AnalyticsData, AnalyticsTab, AnalyticsView,
    DashboardData, DashboardTab, DashboardView, DonorData, DonorView,
};
use clap::Args;
use serde::Serialize;

#[derive(Args, Debug, Default)]
pub(crate) struct DashboardArgs {
    /// Dashboard tab to print (overview, inventory, predictions, drives, ai-analytics)
    #[arg(long, default_value_t = DashboardTab::Overview)]
    pub(crate) tab: DashboardTab,
    /// Stock ratio below which a blood type is critical (0 < ratio <= 1)
    #[arg(long)]
    pub(crate) critical_ratio: Option<f64>,
    /// Emit the view as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct AnalyticsArgs {
    /// Analytics tab to print (data-sources, predictions, risk-analysis, geospatial)
    #[arg(long, default_value_t = AnalyticsTab::DataSources)]
    pub(crate) tab: AnalyticsTab,
    /// Emit the view as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DonorArgs {
    /// Nearby request id to mark as selected
    #[arg(long)]
    pub(crate) request: Option<u32>,
    /// Emit the view as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_dashboard(args: DashboardArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let policy = resolve_policy(&config.classification.status_policy, args.critical_ratio)?;
    let view = dashboard_view(&DashboardData::sample(), &policy, args.tab);

    if args.json {
        print_json(&view);
    } else {
        println!("{}", format_dashboard(&view));
    }
    Ok(())
}

pub(crate) fn run_analytics(args: AnalyticsArgs) -> Result<(), AppError> {
    let view = analytics_view(&AnalyticsData::sample(), args.tab);

    if args.json {
        print_json(&view);
    } else {
        println!("{}", format_analytics(&view));
    }
    Ok(())
}

pub(crate) fn run_donor(args: DonorArgs) -> Result<(), AppError> {
    let view = donor_view(&DonorData::sample(), args.request);

    if args.json {
        print_json(&view);
    } else {
        println!("{}", format_donor(&view));
    }
    Ok(())
}

fn print_json<T: Serialize>(view: &T) {
    match serde_json::to_string_pretty(view) {
        Ok(json) => println!("{}", json),
        Err(err) => println!("View payload unavailable: {}", err),
    }
}

fn blood_types(types: &[BloodType]) -> String {
    types
        .iter()
        .map(|blood_type| blood_type.label())
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn format_dashboard(view: &DashboardView) -> String {
    let summary = &view.summary;
    let mut lines = vec![
        format!("BloodFlow dashboard - {}", view.tab_label),
        format!(
            "- {} total units | {} critical / {} low / {} good (critical below {:.0}% of required)",
            summary.total_units,
            summary.critical_count,
            summary.low_count,
            summary.good_count,
            view.critical_ratio * 100.0
        ),
    ];
    if let Some(accuracy) = view.forecast_accuracy_pct {
        lines.push(format!("- Prediction accuracy {:.1}%", accuracy));
    }

    if let Some(cards) = &view.inventory {
        lines.push("\nInventory".to_string());
        for card in cards {
            lines.push(format!(
                "  {:<4} {:>3}/{:<3} units  {:>5.1}%  [{}] {} ({})",
                card.blood_type_label,
                card.current_units,
                card.required_units,
                card.stock_pct,
                card.emphasis.label(),
                card.status_label,
                card.delta_label
            ));
        }
    }

    if let Some(alerts) = &view.alerts {
        lines.push("\nAlerts".to_string());
        for alert in alerts {
            lines.push(format!(
                "  [{}] {} ({}) -> {}",
                alert.emphasis.label(),
                alert.message,
                alert.age_label,
                alert.suggested_action
            ));
        }
    }

    if let Some(forecast) = &view.forecast {
        lines.push("\n7-day demand forecast".to_string());
        for point in forecast {
            let actual = point
                .actual
                .map(|value| value.to_string())
                .unwrap_or_else(|| "-".to_string());
            lines.push(format!(
                "  {}: predicted {} | actual {}",
                point.day, point.predicted, actual
            ));
        }
    }

    if let Some(drives) = &view.drives {
        lines.push("\nUpcoming blood drives".to_string());
        for drive in drives {
            lines.push(format!(
                "  {} - {} | {} expected donors | targets {}",
                drive.location,
                drive.scheduled_for,
                drive.expected_donors,
                blood_types(&drive.target_types)
            ));
        }
        if let Some(total) = view.expected_drive_donors {
            lines.push(format!("  {} donors expected across all drives", total));
        }
    }

    if let Some(drivers) = &view.demand_drivers {
        lines.push("\nDemand drivers".to_string());
        for driver in drivers {
            lines.push(format!(
                "  [{}] {} - {} impact, {}% confidence ({})",
                driver.emphasis.label(),
                driver.factor,
                driver.impact_label,
                driver.confidence_pct,
                blood_types(&driver.blood_types)
            ));
        }
    }

    lines.join("\n")
}

pub(crate) fn format_analytics(view: &AnalyticsView) -> String {
    let mut lines = vec![
        format!("BloodFlow analytics - {}", view.tab_label),
        format!(
            "- {} data points processed | {} high-impact risk factors",
            view.total_data_points, view.high_impact_count
        ),
    ];

    if let Some(sources) = &view.data_sources {
        lines.push("\nData sources".to_string());
        for source in sources {
            lines.push(format!(
                "  [{}] {} - {}% accurate, {} points, updated {}",
                source.emphasis.label(),
                source.source,
                source.accuracy_pct,
                source.data_points,
                source.update_frequency
            ));
        }
    }

    if let Some(rows) = &view.predictions {
        lines.push("\nMulti-source predictions".to_string());
        for row in rows {
            let prediction = &row.prediction;
            lines.push(format!(
                "  {}: combined {} (baseline {}, led by {})",
                prediction.date, prediction.combined, prediction.baseline, row.dominant_signal
            ));
        }
    }

    if let Some(factors) = &view.risk_factors {
        lines.push("\nRisk factors".to_string());
        for factor in factors {
            lines.push(format!(
                "  [{}] {} - {}% likely, {} impact, {} ({})",
                factor.emphasis.label(),
                factor.name,
                factor.probability_pct,
                factor.impact_label,
                factor.timeframe,
                blood_types(&factor.affected_blood_types)
            ));
        }
    }

    if let Some(districts) = &view.districts {
        lines.push("\nDistricts by risk".to_string());
        for district in districts {
            lines.push(format!(
                "  [{}] {:<12} {:>3}  {} | pop {} | {} hospitals",
                district.emphasis.label(),
                district.name,
                district.risk_score,
                district.tier_label,
                district.population,
                district.hospital_count
            ));
        }
        if let Some(population) = view.population_at_risk {
            lines.push(format!("  {} residents in high-risk districts", population));
        }
    }

    lines.join("\n")
}

pub(crate) fn format_donor(view: &DonorView) -> String {
    let profile = &view.profile;
    let mut lines = vec![
        format!(
            "{} ({}) - {} donor, {}",
            profile.name,
            profile.initials,
            profile.blood_type.label(),
            profile.verification
        ),
        format!(
            "- {} donations | {} reward points | next eligible {}",
            profile.total_donations, profile.reward_points, profile.next_eligible
        ),
    ];
    if let Some(rating) = view.average_rating {
        lines.push(format!(
            "- {:.1}/5 across {} hospital reviews",
            rating,
            view.reviews.len()
        ));
    }

    lines.push("\nNearby requests".to_string());
    for request in &view.requests {
        let marker = if request.selected { ">" } else { " " };
        let matched = if request.matches_donor {
            " (your type)"
        } else {
            ""
        };
        lines.push(format!(
            "{} [{}] {} needs {} x {}{} - {:.1} km, ~{} min wait | {}",
            marker,
            request.emphasis.label(),
            request.hospital,
            request.units_needed,
            request.blood_type.label(),
            matched,
            request.distance_km,
            request.wait_minutes,
            request.incentive
        ));
    }

    lines.push("\nCredentials".to_string());
    for credential in &view.credentials {
        lines.push(format!(
            "  {} - {} by {} on {}",
            credential.kind, credential.status, credential.issuer, credential.issued_on
        ));
    }

    lines.join("\n")
}
