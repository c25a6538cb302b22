use serde::{Deserialize, Serialize};

/// Signup classification that steers the onboarding route graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignupQualifier {
    /// Very small business
    #[serde(rename = "vsb", alias = "VSB")]
    Vsb,
    #[serde(rename = "smb", alias = "SMB")]
    Smb,
    #[serde(rename = "individual")]
    Individual,
    #[serde(untagged)]
    Other(String),
}

impl SignupQualifier {
    pub fn is_vsb(&self) -> bool {
        matches!(self, SignupQualifier::Vsb)
    }
}

/// Server-side onboarding NVP (`nvp_onboarding`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingNvp {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signup_qualifier: Option<SignupQualifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_completed_guided_setup_flow: Option<bool>,
}

impl OnboardingNvp {
    pub fn is_vsb(&self) -> bool {
        self.signup_qualifier.as_ref().map_or(false, SignupQualifier::is_vsb)
    }
}

/// Choices offered on the purpose step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OnboardingPurpose {
    #[serde(rename = "newDotTrackWorkspace")]
    TrackWorkspace,
    #[serde(rename = "newDotEmployer")]
    Employer,
    #[serde(rename = "newDotManageTeam")]
    ManageTeam,
    #[serde(rename = "newDotPersonalSpend")]
    PersonalSpend,
    #[serde(rename = "newDotLookingAround")]
    LookingAround,
}

impl OnboardingPurpose {
    pub fn all() -> [OnboardingPurpose; 5] {
        [
            OnboardingPurpose::TrackWorkspace,
            OnboardingPurpose::Employer,
            OnboardingPurpose::ManageTeam,
            OnboardingPurpose::PersonalSpend,
            OnboardingPurpose::LookingAround,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OnboardingPurpose::TrackWorkspace => "newDotTrackWorkspace",
            OnboardingPurpose::Employer => "newDotEmployer",
            OnboardingPurpose::ManageTeam => "newDotManageTeam",
            OnboardingPurpose::PersonalSpend => "newDotPersonalSpend",
            OnboardingPurpose::LookingAround => "newDotLookingAround",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OnboardingPurpose::TrackWorkspace => "Track and budget expenses",
            OnboardingPurpose::Employer => "Get paid back by my employer",
            OnboardingPurpose::ManageTeam => "Manage my team's expenses",
            OnboardingPurpose::PersonalSpend => "Track personal spend",
            OnboardingPurpose::LookingAround => "Something else",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_qualifier_wire_values() {
        let nvp: OnboardingNvp = serde_json::from_str(r#"{"signupQualifier":"vsb"}"#).unwrap();
        assert!(nvp.is_vsb());

        let nvp: OnboardingNvp = serde_json::from_str(r#"{"signupQualifier":"VSB"}"#).unwrap();
        assert!(nvp.is_vsb());

        let nvp: OnboardingNvp = serde_json::from_str(r#"{"signupQualifier":"enterprise"}"#).unwrap();
        assert_eq!(nvp.signup_qualifier, Some(SignupQualifier::Other("enterprise".to_string())));
        assert!(!nvp.is_vsb());

        let nvp: OnboardingNvp = serde_json::from_str("{}").unwrap();
        assert!(!nvp.is_vsb());
    }

    #[test]
    fn test_purpose_names_match_serde() {
        for purpose in OnboardingPurpose::all() {
            assert_eq!(serde_json::to_value(purpose).unwrap(), purpose.as_str());
        }
    }
}
