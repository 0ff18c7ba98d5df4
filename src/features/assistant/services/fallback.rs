//! Canned answers used when the completion service is unavailable.

/// A keyword rule: the response is chosen when the lowercased question
/// contains any of the keywords.
pub struct FallbackRule {
    pub keywords: &'static [&'static str],
    pub response: &'static str,
}

impl FallbackRule {
    fn matches(&self, question: &str) -> bool {
        self.keywords.iter().any(|keyword| question.contains(keyword))
    }
}

pub const RIGHTS_RESPONSE: &str = "Under Ghana's Mining Act (Act 703), you have several important rights as a community member:\n\n• Right to compensation for damaged property or crops\n• Right to clean water and air\n• Right to prior consultation before mining operations begin\n• Right to receive a portion of mining royalties through the District Assembly\n• Right to employment opportunities from mining companies\n\nYou can file complaints with the Environmental Protection Agency (EPA) or Minerals Commission if these rights are violated.";

pub const POLLUTION_RESPONSE: &str = "To report water pollution from mining activities:\n\n1. **Document the issue**: Take photos, note the date, time, and location\n2. **Contact EPA**: Call the Environmental Protection Agency hotline or visit their regional office\n3. **File with Minerals Commission**: Submit a formal complaint with evidence\n4. **Community leader**: Inform your traditional authority or assembly member\n5. **Keep records**: Save all correspondence and reference numbers\n\nUnder Ghana's Water Resources Commission Act, mining companies must treat wastewater before discharge and maintain water quality standards.";

pub const COMPENSATION_RESPONSE: &str = "You may be entitled to compensation for:\n\n**Property Damage**: Buildings, structures, or land affected by mining operations\n**Crop Loss**: Agricultural crops destroyed or damaged\n**Water Sources**: Contaminated boreholes, wells, or streams\n**Noise/Dust**: Health impacts from mining activities\n\n**Process**:\n1. Document all damages with photos and receipts\n2. Report to the mining company's Community Relations Officer\n3. If unsatisfied, contact the Minerals Commission\n4. Legal action may be necessary for complex cases\n\nCompensation should be fair market value plus additional damages for inconvenience.";

pub const STANDARDS_RESPONSE: &str = "Mining companies in Ghana must comply with:\n\n**Environmental Standards**:\n• Environmental Impact Assessment (EIA) before operations\n• Water quality standards (no toxic discharge)\n• Air quality limits for dust and emissions\n• Noise level restrictions (especially at night)\n• Land reclamation after mining ends\n\n**Monitoring Requirements**:\n• Regular environmental audits\n• Community consultation meetings\n• Public disclosure of environmental data\n• Emergency response plans for accidents\n\nThe EPA enforces these standards and can issue fines or suspend operations for violations.";

pub const GENERIC_RESPONSE: &str = "Thank you for your question. I can help you with information about mining rights, environmental regulations, compensation processes, and legal procedures in Ghana. Could you please be more specific about what aspect of mining law or community rights you'd like to know about?";

/// Ordered rule table; the first matching rule wins.
pub const FALLBACK_RULES: &[FallbackRule] = &[
    FallbackRule {
        keywords: &["rights", "right"],
        response: RIGHTS_RESPONSE,
    },
    FallbackRule {
        keywords: &["water", "pollution"],
        response: POLLUTION_RESPONSE,
    },
    FallbackRule {
        keywords: &["compensation", "damage"],
        response: COMPENSATION_RESPONSE,
    },
    FallbackRule {
        keywords: &["environmental", "standard"],
        response: STANDARDS_RESPONSE,
    },
];

/// Pick the canned answer for `question`, case-insensitively.
pub fn fallback_response(question: &str) -> &'static str {
    let question = question.to_lowercase();

    FALLBACK_RULES
        .iter()
        .find(|rule| rule.matches(&question))
        .map(|rule| rule.response)
        .unwrap_or(GENERIC_RESPONSE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_selection() {
        assert_eq!(fallback_response("What are my rights?"), RIGHTS_RESPONSE);
        assert_eq!(
            fallback_response("How do I report water pollution?"),
            POLLUTION_RESPONSE
        );
        assert_eq!(
            fallback_response("What compensation can I claim?"),
            COMPENSATION_RESPONSE
        );
        assert_eq!(
            fallback_response("What environmental standards apply?"),
            STANDARDS_RESPONSE
        );
        assert_eq!(fallback_response("hello"), GENERIC_RESPONSE);
    }

    #[test]
    fn test_fallback_is_case_insensitive() {
        assert_eq!(fallback_response("WATER IN MY WELL"), POLLUTION_RESPONSE);
        assert_eq!(fallback_response("Dust Damage"), COMPENSATION_RESPONSE);
    }

    #[test]
    fn test_first_matching_rule_wins() {
        // Mentions both rights and water; rights is checked first
        assert_eq!(
            fallback_response("Do I have a right to clean water?"),
            RIGHTS_RESPONSE
        );
        // Mentions pollution and compensation; pollution is checked first
        assert_eq!(
            fallback_response("compensation for pollution"),
            POLLUTION_RESPONSE
        );
    }

    #[test]
    fn test_substring_matching() {
        // "standard" matches inside "standards", "right" inside "copyright"
        assert_eq!(fallback_response("substandard roads"), STANDARDS_RESPONSE);
        assert_eq!(fallback_response("copyright"), RIGHTS_RESPONSE);
    }
}
