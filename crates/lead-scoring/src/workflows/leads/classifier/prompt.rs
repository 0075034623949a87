use std::fmt::Write as _;

use super::ClassificationRequest;

pub const SYSTEM_PROMPT: &str = "You are an AI sales assistant.";

pub fn render_prompt(request: &ClassificationRequest) -> String {
    let offer = &request.offer;
    let mut prompt = String::from("Classify intent for these leads:\n");

    writeln!(
        prompt,
        "Offer: {} - [{}]",
        offer.name,
        offer.value_props.join(", ")
    )
    .expect("write offer");
    writeln!(prompt, "Ideal Use Cases: {}", offer.ideal_use_cases).expect("write use cases");
    prompt.push('\n');

    for (index, lead) in request.leads.iter().enumerate() {
        writeln!(
            prompt,
            "{}. Name: {}, Role: {}, Company: {}, Industry: {}, Location: {}, Bio: {}",
            index + 1,
            lead.name,
            lead.role,
            lead.company,
            lead.industry,
            lead.location,
            lead.bio
        )
        .expect("write lead line");
    }

    prompt.push_str("\nRespond with numbered results like:\n");
    prompt.push_str("1. High - reason...\n2. Medium - reason...\n");
    prompt
}
