use crate::core::PlayerState;

pub const REFERRAL_PREFIX: &str = "ref_";

/// Who is playing this session. Fixed for the whole session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: String,
    pub display_name: Option<String>,
    pub is_admin: bool,
}

impl Identity {
    pub fn resolve(
        user_id: impl Into<String>,
        display_name: Option<String>,
        admin_usernames: &[String],
    ) -> Self {
        let display_name = display_name.filter(|name| !name.trim().is_empty());
        let is_admin = display_name
            .as_ref()
            .is_some_and(|name| admin_usernames.iter().any(|admin| admin == name));
        Self {
            user_id: user_id.into(),
            display_name,
            is_admin,
        }
    }

    /// Replaces the placeholder character name with the display name.
    /// Returns whether the name changed.
    pub fn adopt_display_name(&self, player: &mut PlayerState, default_name: &str) -> bool {
        let Some(display_name) = &self.display_name else {
            return false;
        };
        if player.character_name != default_name {
            return false;
        }
        player.character_name = display_name.clone();
        true
    }

    /// The referrer encoded in a `ref_<id>` start parameter, unless it is
    /// empty or points back at this user.
    pub fn referrer_from_start_param<'a>(&self, start_param: &'a str) -> Option<&'a str> {
        let referrer = start_param.strip_prefix(REFERRAL_PREFIX)?;
        if referrer.is_empty() || referrer == self.user_id {
            return None;
        }
        Some(referrer)
    }
}
