use serde::{Deserialize, Serialize};

/// Social platforms an influencer or competitor can be linked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Youtube,
    Twitter,
    Instagram,
    Linkedin,
    Reddit,
    Tiktok,
}

impl Platform {
    /// All platforms in display order.
    pub const ALL: [Platform; 6] = [
        Platform::Youtube,
        Platform::Twitter,
        Platform::Instagram,
        Platform::Linkedin,
        Platform::Reddit,
        Platform::Tiktok,
    ];

    /// Lowercase key used in form files and CSV headers.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Platform::Youtube => "youtube",
            Platform::Twitter => "twitter",
            Platform::Instagram => "instagram",
            Platform::Linkedin => "linkedin",
            Platform::Reddit => "reddit",
            Platform::Tiktok => "tiktok",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Platform::Youtube => "YouTube",
            Platform::Twitter => "Twitter (X)",
            Platform::Instagram => "Instagram",
            Platform::Linkedin => "LinkedIn",
            Platform::Reddit => "Reddit",
            Platform::Tiktok => "TikTok",
        }
    }

    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            Platform::Youtube => "https://youtube.com/@username",
            Platform::Twitter => "https://twitter.com/username",
            Platform::Instagram => "https://instagram.com/username",
            Platform::Linkedin => "https://linkedin.com/in/username",
            Platform::Reddit => "https://reddit.com/u/username",
            Platform::Tiktok => "https://tiktok.com/@username",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// One URL slot per [`Platform`]. An unset slot is the empty string.
///
/// URLs are stored verbatim; nothing here checks that they are well formed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SocialLinks {
    pub youtube: String,
    pub twitter: String,
    pub instagram: String,
    pub linkedin: String,
    pub reddit: String,
    pub tiktok: String,
}

impl SocialLinks {
    #[must_use]
    pub fn get(&self, platform: Platform) -> &str {
        match platform {
            Platform::Youtube => &self.youtube,
            Platform::Twitter => &self.twitter,
            Platform::Instagram => &self.instagram,
            Platform::Linkedin => &self.linkedin,
            Platform::Reddit => &self.reddit,
            Platform::Tiktok => &self.tiktok,
        }
    }

    pub fn set(&mut self, platform: Platform, url: impl Into<String>) {
        let slot = match platform {
            Platform::Youtube => &mut self.youtube,
            Platform::Twitter => &mut self.twitter,
            Platform::Instagram => &mut self.instagram,
            Platform::Linkedin => &mut self.linkedin,
            Platform::Reddit => &mut self.reddit,
            Platform::Tiktok => &mut self.tiktok,
        };
        *slot = url.into();
    }

    /// Iterates over the platforms that have a non-empty URL, in display order.
    pub fn filled(&self) -> impl Iterator<Item = (Platform, &str)> {
        Platform::ALL
            .into_iter()
            .map(|p| (p, self.get(p)))
            .filter(|(_, url)| !url.is_empty())
    }
}
