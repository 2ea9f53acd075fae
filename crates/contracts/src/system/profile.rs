use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub full_name: String,
    pub email: String,
    pub department: String,
    pub role: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub initials: String,
}

impl UserProfile {
    /// Configured initials, or the first letters of the name without titles ("Dr.").
    pub fn avatar_fallback(&self) -> String {
        if !self.initials.is_empty() {
            return self.initials.clone();
        }
        self.full_name
            .split_whitespace()
            .filter(|word| !word.ends_with('.'))
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPreferences {
    pub email_notifications: bool,
    pub in_app_notifications: bool,
    pub sms_alerts: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email_notifications: true,
            in_app_notifications: true,
            sms_alerts: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySettings {
    pub dark_mode: bool,
    pub compact_view: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            compact_view: true,
        }
    }
}

/// Everything the profile settings page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSettings {
    pub profile: UserProfile,
    #[serde(default)]
    pub notifications: NotificationPreferences,
    #[serde(default)]
    pub display: DisplaySettings,
}

impl ProfileSettings {
    /// Copy for display, with `initials` filled from the name when unset.
    pub fn resolved(&self) -> Self {
        let mut settings = self.clone();
        settings.profile.initials = self.profile.avatar_fallback();
        settings
    }
}
