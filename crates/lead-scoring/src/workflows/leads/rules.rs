use super::domain::{Lead, Offer};

const SENIOR_ROLE_KEYWORDS: [&str; 4] = ["head", "vp", "founder", "director"];
const MANAGER_ROLE_KEYWORDS: [&str; 2] = ["manager", "lead"];

pub const MAX_RULE_SCORE: u32 = 50;

// A `Lead` always carries all six attributes (empty strings count as present),
// so the completeness bonus is unconditional.
const COMPLETENESS_POINTS: u32 = 10;

/// Deterministic local score in `0..=50`.
pub fn rule_score(lead: &Lead, offer: &Offer) -> u32 {
    seniority_points(&lead.role)
        + industry_points(&lead.industry, &offer.ideal_use_cases)
        + COMPLETENESS_POINTS
}

fn seniority_points(role: &str) -> u32 {
    let role = role.to_lowercase();
    if SENIOR_ROLE_KEYWORDS.iter().any(|keyword| role.contains(keyword)) {
        20
    } else if MANAGER_ROLE_KEYWORDS.iter().any(|keyword| role.contains(keyword)) {
        10
    } else {
        0
    }
}

// Partial matches only count one way: the lead's industry must contain the ideal use case.
fn industry_points(industry: &str, ideal_use_cases: &str) -> u32 {
    let industry = industry.to_lowercase();
    let ideal = ideal_use_cases.to_lowercase();
    if industry == ideal {
        20
    } else if industry.contains(&ideal) {
        10
    } else {
        0
    }
}
