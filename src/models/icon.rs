use serde::{Deserialize, Serialize};

/// Icon identifiers that categories and expenses can carry.
///
/// Names match the icon set the stored JSON has always used, so existing
/// documents keep loading. Anything unrecognised resolves to `MoreHorizontal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Icon {
    Utensils,
    ShoppingCart,
    BookOpen,
    Bus,
    GraduationCap,
    Wifi,
    Heart,
    Shirt,
    Coffee,
    Smartphone,
    Home,
    Zap,
    Music,
    Film,
    Gamepad,
    Dumbbell,
    Plane,
    Gift,
    Briefcase,
    Wrench,
    PaintBucket,
    Scissors,
    Phone,
    Mail,
    Calendar,
    Clock,
    DollarSign,
    CreditCard,
    Wallet,
    Laptop,
    Tv,
    Camera,
    Headphones,
    Lightbulb,
    Umbrella,
    TreePine,
    #[default]
    MoreHorizontal,
}

impl Icon {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Utensils => "Utensils",
            Self::ShoppingCart => "ShoppingCart",
            Self::BookOpen => "BookOpen",
            Self::Bus => "Bus",
            Self::GraduationCap => "GraduationCap",
            Self::Wifi => "Wifi",
            Self::Heart => "Heart",
            Self::Shirt => "Shirt",
            Self::Coffee => "Coffee",
            Self::Smartphone => "Smartphone",
            Self::Home => "Home",
            Self::Zap => "Zap",
            Self::Music => "Music",
            Self::Film => "Film",
            Self::Gamepad => "Gamepad",
            Self::Dumbbell => "Dumbbell",
            Self::Plane => "Plane",
            Self::Gift => "Gift",
            Self::Briefcase => "Briefcase",
            Self::Wrench => "Wrench",
            Self::PaintBucket => "PaintBucket",
            Self::Scissors => "Scissors",
            Self::Phone => "Phone",
            Self::Mail => "Mail",
            Self::Calendar => "Calendar",
            Self::Clock => "Clock",
            Self::DollarSign => "DollarSign",
            Self::CreditCard => "CreditCard",
            Self::Wallet => "Wallet",
            Self::Laptop => "Laptop",
            Self::Tv => "Tv",
            Self::Camera => "Camera",
            Self::Headphones => "Headphones",
            Self::Lightbulb => "Lightbulb",
            Self::Umbrella => "Umbrella",
            Self::TreePine => "TreePine",
            Self::MoreHorizontal => "MoreHorizontal",
        }
    }

    /// Terminal stand-in for the icon.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Utensils => "🍴",
            Self::ShoppingCart => "🛒",
            Self::BookOpen => "📖",
            Self::Bus => "🚌",
            Self::GraduationCap => "🎓",
            Self::Wifi => "📶",
            Self::Heart => "❤",
            Self::Shirt => "👕",
            Self::Coffee => "☕",
            Self::Smartphone => "📱",
            Self::Home => "🏠",
            Self::Zap => "⚡",
            Self::Music => "🎵",
            Self::Film => "🎬",
            Self::Gamepad => "🎮",
            Self::Dumbbell => "🏋",
            Self::Plane => "✈",
            Self::Gift => "🎁",
            Self::Briefcase => "💼",
            Self::Wrench => "🔧",
            Self::PaintBucket => "🎨",
            Self::Scissors => "✂",
            Self::Phone => "📞",
            Self::Mail => "✉",
            Self::Calendar => "📅",
            Self::Clock => "🕒",
            Self::DollarSign => "💲",
            Self::CreditCard => "💳",
            Self::Wallet => "👛",
            Self::Laptop => "💻",
            Self::Tv => "📺",
            Self::Camera => "📷",
            Self::Headphones => "🎧",
            Self::Lightbulb => "💡",
            Self::Umbrella => "☂",
            Self::TreePine => "🌲",
            Self::MoreHorizontal => "…",
        }
    }

    /// Icons offered when creating a custom category, in display order.
    pub fn picker() -> &'static [Icon] {
        &[
            Self::Utensils,
            Self::ShoppingCart,
            Self::BookOpen,
            Self::Bus,
            Self::GraduationCap,
            Self::Wifi,
            Self::Heart,
            Self::Shirt,
            Self::Coffee,
            Self::Smartphone,
            Self::Home,
            Self::Zap,
            Self::Music,
            Self::Film,
            Self::Gamepad,
            Self::Dumbbell,
            Self::Plane,
            Self::Gift,
            Self::Briefcase,
            Self::Wrench,
            Self::PaintBucket,
            Self::Scissors,
            Self::Phone,
            Self::Mail,
            Self::Calendar,
            Self::Clock,
            Self::DollarSign,
            Self::CreditCard,
            Self::Wallet,
            Self::Laptop,
            Self::Tv,
            Self::Camera,
            Self::Headphones,
            Self::Lightbulb,
            Self::Umbrella,
            Self::TreePine,
        ]
    }

    /// Resolve an icon by name (case-insensitive), if it is a known one.
    pub fn find(name: &str) -> Option<Icon> {
        let name = name.trim();
        if name.eq_ignore_ascii_case(Self::MoreHorizontal.as_str()) {
            return Some(Self::MoreHorizontal);
        }
        Self::picker()
            .iter()
            .copied()
            .find(|icon| icon.as_str().eq_ignore_ascii_case(name))
    }

    /// Resolve an icon by name, falling back to `MoreHorizontal`.
    pub fn parse(name: &str) -> Self {
        Self::find(name).unwrap_or_default()
    }

    /// Picker icons whose name contains `query`, ignoring case.
    pub fn search(query: &str) -> Vec<Icon> {
        let query = query.trim().to_lowercase();
        Self::picker()
            .iter()
            .copied()
            .filter(|icon| icon.as_str().to_lowercase().contains(&query))
            .collect()
    }
}

impl From<String> for Icon {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Icon> for &'static str {
    fn from(value: Icon) -> Self {
        value.as_str()
    }
}

impl std::fmt::Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
