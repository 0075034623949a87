use super::domain::{ClassifierScore, IntentLabel, Lead, ScoreResult};

/// Combine the rule and classifier components into the exported result.
///
/// A missing classifier score falls back to [`ClassifierScore::FALLBACK`]. The sum is
/// not capped.
pub fn merge(lead: &Lead, rule_score: u32, classifier: Option<ClassifierScore>) -> ScoreResult {
    let classifier_points = classifier.unwrap_or(ClassifierScore::FALLBACK).points();
    let score = rule_score + classifier_points;

    ScoreResult {
        name: lead.name.clone(),
        role: lead.role.clone(),
        company: lead.company.clone(),
        score,
        intent: IntentLabel::from_score(score),
        reasoning: format!("Rule: {rule_score} + AI: {classifier_points}"),
    }
}
