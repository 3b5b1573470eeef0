use tracing::debug;

use crate::domain::answers::Answers;
use crate::domain::cost::{CostBreakdownItem, CostCategory, CostSummary, MarketComparison};

pub const GOVERNMENT_FEE_PER_DEPENDENT: f64 = 350.0;

const MARKET_COMPARISON: [(&str, f64); 3] = [
    ("Your Estimate", 1.0),
    ("Industry Avg", 1.2),
    ("High-End", 1.5),
];

/// Computes the total cost and its categorized breakdown.
///
/// Returns an empty summary with a total of 0 when no visa type has been
/// chosen yet. Never fails; out-of-range inputs flow through unchanged.
pub fn compute_cost_summary(answers: &Answers) -> CostSummary {
    let Some(resolved) = answers.resolve() else {
        return CostSummary::default();
    };

    let base_cost = resolved.visa_type.cost;
    let status_adjustment = resolved.status_adjustment;
    let dependent_count = resolved.dependent_count;
    let dependent_cost = f64::from(dependent_count) * resolved.cost_per_dependent;
    let premium_cost = resolved.premium_cost;
    let total = base_cost + status_adjustment + dependent_cost + premium_cost;

    // Premium processing is paid to USCIS, so it counts as a government fee.
    let government_base = resolved.visa_type.kind.government_base_fee();
    let government_fees = government_base
        + f64::from(dependent_count) * GOVERNMENT_FEE_PER_DEPENDENT
        + premium_cost.max(0.0);
    let legal_fees = base_cost - government_base;
    if legal_fees < 0.0 {
        debug!(
            visa = resolved.visa_type.kind.key(),
            base_cost, government_base, "legal fee portion is negative"
        );
    }

    let mut breakdown = vec![
        CostBreakdownItem::new(
            CostCategory::Legal,
            legal_fees,
            "Attorney and paralegal services",
        ),
        CostBreakdownItem::new(
            CostCategory::Government,
            government_fees,
            "Government filing fees",
        ),
    ];
    if dependent_cost > 0.0 {
        breakdown.push(CostBreakdownItem::new(
            CostCategory::Dependents,
            dependent_cost,
            format!("Additional fees for {dependent_count} dependent(s)"),
        ));
    }
    if status_adjustment > 0.0 {
        breakdown.push(CostBreakdownItem::new(
            CostCategory::StatusAdjustment,
            status_adjustment,
            "Additional processing based on current status",
        ));
    }
    if premium_cost > 0.0 {
        breakdown.push(CostBreakdownItem::new(
            CostCategory::Premium,
            premium_cost,
            "15 business day processing",
        ));
    }

    let market_comparison = MARKET_COMPARISON
        .iter()
        .map(|(name, factor)| MarketComparison {
            name: (*name).to_string(),
            amount: if *factor == 1.0 { total } else { (total * factor).round() },
        })
        .collect();

    CostSummary {
        total,
        legal_fees,
        government_fees,
        breakdown,
        market_comparison,
    }
}
