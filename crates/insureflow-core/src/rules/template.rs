use crate::domain::{InteractionKind, Lead};
use serde::Serialize;

/// A canned outreach message. `{name}` and `{policy}` placeholders are
/// substituted per lead before sending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MessageTemplate {
    pub id: &'static str,
    pub label: &'static str,
    pub subject: Option<&'static str>,
    pub body: &'static str,
}

pub const SMS_TEMPLATES: [MessageTemplate; 3] = [
    MessageTemplate {
        id: "sms-intro",
        label: "Initial Outreach",
        subject: None,
        body: "Hi {name}, this is your local agent regarding your {policy} request. Do you have 5 mins to chat about your options?",
    },
    MessageTemplate {
        id: "sms-followup",
        label: "Follow Up - No Contact",
        subject: None,
        body: "Hi {name}, I tried reaching you earlier. When is a good time to go over the {policy} quotes I prepared for you?",
    },
    MessageTemplate {
        id: "sms-appt",
        label: "Appointment Confirm",
        subject: None,
        body: "Hi {name}, confirming our call for tomorrow at [Time] to discuss your coverage. Please reply C to confirm.",
    },
];

pub const EMAIL_TEMPLATES: [MessageTemplate; 2] = [
    MessageTemplate {
        id: "email-intro",
        label: "Information Request",
        subject: Some("Your {policy} Information Request"),
        body: "Hi {name},\n\nThank you for your interest in {policy}. I have reviewed your preliminary information and have found a few options that fit your criteria.\n\nAre you available for a brief 10-minute call this week to review them?\n\nBest,\n[Agent Name]",
    },
    MessageTemplate {
        id: "email-quote",
        label: "Quote Details",
        subject: Some("{policy} Quote Options"),
        body: "Dear {name},\n\nAs promised, here is a summary of the {policy} benefits we discussed. These plans provide the security your family needs.\n\nLet me know when you'd like to move forward with the application.\n\nSincerely,\n[Agent Name]",
    },
];

/// Templates available for a channel. Calls have no canned messages.
pub fn templates_for(kind: InteractionKind) -> &'static [MessageTemplate] {
    match kind {
        InteractionKind::Sms => &SMS_TEMPLATES,
        InteractionKind::Email => &EMAIL_TEMPLATES,
        InteractionKind::Call => &[],
    }
}

/// Literal, case-sensitive substitution of every `{name}` and `{policy}`
/// occurrence. Unknown placeholders pass through untouched.
pub fn personalize(template: &str, lead: &Lead) -> String {
    template
        .replace("{name}", lead.first_name())
        .replace("{policy}", lead.policy_interest.label())
}

#[cfg(test)]
mod tests {
    use super::{personalize, templates_for, EMAIL_TEMPLATES, SMS_TEMPLATES};
    use crate::domain::{InteractionKind, Lead, LeadId, LeadStatus, PolicyType};

    fn lead(name: &str, policy: PolicyType) -> Lead {
        Lead {
            id: LeadId::new(),
            name: name.to_string(),
            phone: String::new(),
            email: String::new(),
            status: LeadStatus::New,
            policy_interest: policy,
            estimated_commission: 0.0,
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
    fn personalize_substitutes_first_name_and_policy_label() {
        let lead = lead("Sarah Jenkins", PolicyType::WholeLife);
        assert_eq!(
            personalize("Hi {name}, re: {policy}", &lead),
            "Hi Sarah, re: Whole Life (Infinite Banking)"
        );
    }

    #[test]
    fn personalize_replaces_every_occurrence() {
        let lead = lead("Robert Martinez", PolicyType::TermLife);
        assert_eq!(
            personalize("{name} {name} {policy}", &lead),
            "Robert Robert Term Life"
        );
    }

    #[test]
    fn personalize_leaves_unknown_placeholders_alone() {
        let lead = lead("Emma Wilson", PolicyType::FinalExpense);
        assert_eq!(personalize("See you at [Time], {name}", &lead), "See you at [Time], Emma");
    }

    #[test]
    fn catalog_ids_are_unique_per_channel() {
        let mut ids: Vec<&str> = SMS_TEMPLATES
            .iter()
            .chain(EMAIL_TEMPLATES.iter())
            .map(|t| t.id)
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SMS_TEMPLATES.len() + EMAIL_TEMPLATES.len());
        assert!(templates_for(InteractionKind::Call).is_empty());
        assert!(EMAIL_TEMPLATES.iter().all(|t| t.subject.is_some()));
    }
}
