#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarStyle {
    Anime,
    Cyberpunk,
    Fantasy,
    Business,
}

impl AvatarStyle {
    pub const ALL: [AvatarStyle; 4] = [
        Self::Anime,
        Self::Cyberpunk,
        Self::Fantasy,
        Self::Business,
    ];

    pub fn value(&self) -> &'static str {
        match *self {
            Self::Anime => "anime",
            Self::Cyberpunk => "cyberpunk",
            Self::Fantasy => "fantasy",
            Self::Business => "business",
        }
    }

    /// Exact, case-sensitive match on the style name.
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.value() == value)
    }

    pub fn prompt(&self) -> &'static str {
        match *self {
            Self::Anime => "portrait photo of anime character, highly detailed face, beautiful lighting, studio ghibli style, professional photography",
            Self::Cyberpunk => "portrait photo of cyberpunk character, detailed face, neon lighting, futuristic, professional studio photography",
            Self::Fantasy => "portrait photo of fantasy character, detailed face, ethereal lighting, mystical atmosphere, professional photography",
            Self::Business => "professional headshot portrait, business attire, neutral background, studio lighting, professional photography",
        }
    }
}
