use insureflow_core::domain::PolicyType;
use std::fmt::Write as _;

/// Tonality presets offered by the script generator.
pub const TONE_OPTIONS: [&str; 5] = [
    "Confident & Authoritative (Wolf of Wall Street)",
    "Empathetic & Understanding",
    "Consultative & Educational",
    "Urgent & Action-Oriented",
    "Relaxed & Relatable",
];

/// Agent persona presets offered by the script generator.
pub const PERSONA_OPTIONS: [&str; 5] = [
    "Elite 1% Closer (High Pressure)",
    "Trusted Family Advisor (Warm & Safe)",
    "Data-Driven Analyst (Logical)",
    "New Agent (Humble & Hungry)",
    "Tech-Savvy Millennial (Modern & Quick)",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SopPreset {
    pub title: &'static str,
    pub topic: &'static str,
}

pub const SOP_PRESETS: [SopPreset; 4] = [
    SopPreset {
        title: "Infinite Banking Concept Explained",
        topic: "explaining the infinite banking concept using whole life insurance to a novice client",
    },
    SopPreset {
        title: "Handling \"Too Expensive\" Objections",
        topic: "overcoming price objections in mortgage protection insurance sales",
    },
    SopPreset {
        title: "Referral Generation System",
        topic: "asking for referrals after closing a life insurance policy",
    },
    SopPreset {
        title: "Underwriting Pre-qualification",
        topic: "field underwriting health questions for whole life policies",
    },
];

pub const DEFAULT_SCRIPT_CONTEXT: &str = "Standard cold outbound call or lead response.";

#[derive(Debug, Clone)]
pub struct ScriptPrompt<'a> {
    pub lead_name: &'a str,
    pub policy: PolicyType,
    pub context: &'a str,
    pub tone: Option<&'a str>,
    pub persona: Option<&'a str>,
    pub objection: Option<&'a str>,
}

/// Builds the sales-script instruction block. The objection branch asks for
/// a pattern interrupt and rebuttal; otherwise a four-part initial-call
/// structure is requested. Whole Life always gets the living-benefits
/// explainer.
pub fn sales_script_prompt(input: &ScriptPrompt<'_>) -> String {
    let mut prompt = String::new();
    let _ = writeln!(
        prompt,
        "Act as a world-class, top 1% insurance sales trainer and closer."
    );
    let _ = writeln!(
        prompt,
        "Your tonality is confident, authoritative yet empathetic, and unbreakable."
    );
    if let Some(persona) = input.persona {
        let _ = writeln!(prompt, "Adopt this agent persona: {persona}.");
    }
    if let Some(tone) = input.tone {
        let _ = writeln!(prompt, "Deliver every line in this tonality: {tone}.");
    }
    let _ = writeln!(
        prompt,
        "\nTask: Generate a sales script for a lead named \"{}\" interested in \"{}\".",
        input.lead_name,
        input.policy.label()
    );
    let _ = writeln!(prompt, "\nContext/Scenario: {}", input.context);

    match input.objection {
        Some(objection) => {
            let _ = writeln!(
                prompt,
                "\nThe lead just gave this objection: \"{objection}\"."
            );
            let _ = writeln!(
                prompt,
                "Provide a \"Pattern Interrupt\" followed by a confident rebuttal that loops back to closing."
            );
        }
        None => {
            let _ = writeln!(prompt, "\nProvide a script for the initial call or presentation.");
            let _ = writeln!(prompt, "Structure:");
            let _ = writeln!(prompt, "1. Opener (Authority & Warmth)");
            let _ = writeln!(prompt, "2. Discovery (Pain finding)");
            let _ = writeln!(
                prompt,
                "3. The Solution (Tie specifically to {})",
                input.policy.label()
            );
            let _ = writeln!(prompt, "4. The Close (Assumptive)");
        }
    }

    if input.policy == PolicyType::WholeLife {
        let _ = writeln!(
            prompt,
            "\nMake sure to briefly explain the \"Living Benefits\" and how they can borrow against the cash value (Infinite Banking concept) in simple, powerful terms."
        );
    }

    let _ = writeln!(
        prompt,
        "\nFormat the output in clean Markdown. Use bolding for emphasis on tonal shifts."
    );
    prompt
}

/// Builds the SOP instruction block: five fixed sections, instructional tone.
pub fn sop_prompt(topic: &str) -> String {
    let mut prompt = String::new();
    let _ = writeln!(
        prompt,
        "Create a detailed Standard Operating Procedure (SOP) for Life Insurance Agents regarding: {topic}."
    );
    let _ = writeln!(prompt, "\nStructure it as:");
    let _ = writeln!(prompt, "1. **Objective**");
    let _ = writeln!(prompt, "2. **Prerequisites**");
    let _ = writeln!(prompt, "3. **Step-by-Step Process** (Numbered list)");
    let _ = writeln!(prompt, "4. **Key Success Metrics**");
    let _ = writeln!(prompt, "5. **Common Pitfalls**");
    let _ = writeln!(prompt, "\nTone: Professional, Instructional, Action-Oriented.");
    prompt
}

/// Builds the candidate-discovery instruction block. The structured response
/// schema is supplied separately by the client.
pub fn discovery_prompt(city: &str, policy: PolicyType) -> String {
    let mut prompt = String::new();
    let _ = writeln!(
        prompt,
        "Generate 3 realistic, fictional leads for an insurance agent in {city} who would be good candidates for {}.",
        policy.label()
    );
    let _ = writeln!(
        prompt,
        "\nProvide a mix of scenarios (e.g., new homeowner, new parent, small business owner for infinite banking)."
    );
    let _ = writeln!(
        prompt,
        "Generate realistic names, fake phone numbers (555-xxxx), and fake emails."
    );
    let _ = writeln!(
        prompt,
        "Estimate a realistic commission value between $1000 and $8000 based on the policy type."
    );
    prompt
}

#[cfg(test)]
mod tests {
    use super::{
        discovery_prompt, sales_script_prompt, sop_prompt, ScriptPrompt, SOP_PRESETS,
    };
    use insureflow_core::domain::PolicyType;

    #[test]
    fn objection_branch_replaces_call_structure() {
        let with_objection = sales_script_prompt(&ScriptPrompt {
            lead_name: "Sarah Jenkins",
            policy: PolicyType::TermLife,
            context: "Facebook form submitted yesterday",
            tone: None,
            persona: None,
            objection: Some("I need to talk to my spouse"),
        });
        assert!(with_objection.contains("Pattern Interrupt"));
        assert!(!with_objection.contains("Opener (Authority & Warmth)"));

        let without = sales_script_prompt(&ScriptPrompt {
            lead_name: "Sarah Jenkins",
            policy: PolicyType::TermLife,
            context: "Facebook form submitted yesterday",
            tone: None,
            persona: None,
            objection: None,
        });
        assert!(without.contains("Opener (Authority & Warmth)"));
        assert!(without.contains("Tie specifically to Term Life"));
    }

    #[test]
    fn whole_life_scripts_explain_living_benefits() {
        let prompt = sales_script_prompt(&ScriptPrompt {
            lead_name: "Prospect",
            policy: PolicyType::WholeLife,
            context: "cold call",
            tone: Some("Empathetic & Understanding"),
            persona: Some("Trusted Family Advisor (Warm & Safe)"),
            objection: None,
        });
        assert!(prompt.contains("Living Benefits"));
        assert!(prompt.contains("Empathetic & Understanding"));
        assert!(prompt.contains("Trusted Family Advisor"));
    }

    #[test]
    fn sop_prompt_lists_all_five_sections() {
        let prompt = sop_prompt(SOP_PRESETS[0].topic);
        for section in [
            "**Objective**",
            "**Prerequisites**",
            "**Step-by-Step Process**",
            "**Key Success Metrics**",
            "**Common Pitfalls**",
        ] {
            assert!(prompt.contains(section), "missing {section}");
        }
    }

    #[test]
    fn discovery_prompt_names_market_and_policy() {
        let prompt = discovery_prompt("Austin, TX", PolicyType::MortgageProtection);
        assert!(prompt.contains("Austin, TX"));
        assert!(prompt.contains("Mortgage Protection"));
        assert!(prompt.contains("$1000 and $8000"));
    }
}
