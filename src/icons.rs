//! Closed set of icons used by scenarios, structure trees and the object catalog.
//!
//! Data refers to icons by their canonical names ("Package", "Truck", ...). Names
//! that are not part of the set resolve to [`Icon::Unknown`], which renders as a
//! generic help glyph.

use std::fmt;

macro_rules! icon_set {
    ($($variant:ident => $name:literal, $glyph:literal;)*) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Icon {
            $($variant,)*
            Unknown,
        }

        impl Icon {
            /// Every known icon, excluding the fallback.
            pub const ALL: &'static [Icon] = &[$(Icon::$variant,)*];

            pub fn name(self) -> &'static str {
                match self {
                    $(Icon::$variant => $name,)*
                    Icon::Unknown => "HelpCircle",
                }
            }

            pub fn glyph(self) -> &'static str {
                match self {
                    $(Icon::$variant => $glyph,)*
                    Icon::Unknown => "❔",
                }
            }

            fn lookup(name: &str) -> Option<Icon> {
                match name {
                    $($name => Some(Icon::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

icon_set! {
    AlertCircle => "AlertCircle", "⚠️";
    AtSign => "AtSign", "＠";
    Award => "Award", "🏅";
    BarChart3 => "BarChart3", "📊";
    BookOpen => "BookOpen", "📖";
    Box => "Box", "📦";
    Briefcase => "Briefcase", "💼";
    Building => "Building", "🏢";
    Calendar => "Calendar", "📅";
    CheckCircle => "CheckCircle", "✅";
    ChevronDown => "ChevronDown", "⌄";
    CircleDollarSign => "CircleDollarSign", "💲";
    ClipboardCheck => "ClipboardCheck", "📋";
    ClipboardList => "ClipboardList", "🗒️";
    Clock => "Clock", "🕒";
    Coffee => "Coffee", "☕";
    Contact => "Contact", "📇";
    Cpu => "Cpu", "🖥️";
    Database => "Database", "🗄️";
    DollarSign => "DollarSign", "💵";
    FileCheck => "FileCheck", "🧾";
    FileSignature => "FileSignature", "✍️";
    FileText => "FileText", "📄";
    Film => "Film", "🎞️";
    FormInput => "FormInput", "📝";
    Globe => "Globe", "🌐";
    Handshake => "Handshake", "🤝";
    HardHat => "HardHat", "👷";
    Hash => "Hash", "#";
    Headphones => "Headphones", "🎧";
    History => "History", "🕘";
    Image => "Image", "🖼️";
    Layers => "Layers", "🗂️";
    LayoutGrid => "LayoutGrid", "▦";
    Lightbulb => "Lightbulb", "💡";
    Link => "Link", "🔗";
    MapPin => "MapPin", "📍";
    Megaphone => "Megaphone", "📣";
    MessageSquare => "MessageSquare", "💬";
    Monitor => "Monitor", "🖥";
    Package => "Package", "📦";
    Palette => "Palette", "🎨";
    PartyPopper => "PartyPopper", "🎉";
    PenTool => "PenTool", "🖊️";
    Phone => "Phone", "📞";
    Receipt => "Receipt", "🧾";
    Rocket => "Rocket", "🚀";
    Share2 => "Share2", "🔁";
    ShoppingCart => "ShoppingCart", "🛒";
    Target => "Target", "🎯";
    TicketCheck => "TicketCheck", "🎫";
    TrendingUp => "TrendingUp", "📈";
    Truck => "Truck", "🚚";
    Type => "Type", "🔤";
    UserCircle => "UserCircle", "👤";
    UserMinus => "UserMinus", "➖";
    UserPlus => "UserPlus", "➕";
    Users => "Users", "👥";
    Video => "Video", "🎥";
    Warehouse => "Warehouse", "🏭";
    Wrench => "Wrench", "🔧";
    Zap => "Zap", "⚡";
}

impl Icon {
    /// Resolves a canonical icon name. Unrecognised names map to `Unknown`.
    pub fn from_name(name: &str) -> Self {
        Self::lookup(name.trim()).unwrap_or(Icon::Unknown)
    }

    pub fn is_known(self) -> bool {
        self != Icon::Unknown
    }
}

impl Default for Icon {
    fn default() -> Self {
        Icon::Unknown
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for Icon {
    fn from(name: &str) -> Self {
        Icon::from_name(name)
    }
}

impl From<String> for Icon {
    fn from(name: String) -> Self {
        Icon::from_name(&name)
    }
}

impl From<Icon> for String {
    fn from(icon: Icon) -> Self {
        icon.name().to_string()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Icon {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Icon {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Icon::from_name(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_lookup() {
        for icon in Icon::ALL {
            assert_eq!(Icon::from_name(icon.name()), *icon);
            assert!(!icon.glyph().trim().is_empty());
        }
    }

    #[test]
    fn icon_names_are_unique() {
        let mut names: Vec<&str> = Icon::ALL.iter().map(|i| i.name()).collect();
        names.sort_unstable();
        let before = names.len();
        names.dedup();
        assert_eq!(before, names.len());
    }

    #[test]
    fn unknown_names_fall_back() {
        assert_eq!(Icon::from_name("Sparkles"), Icon::Unknown);
        assert_eq!(Icon::from_name(""), Icon::Unknown);
        assert_eq!(Icon::Unknown.name(), "HelpCircle");
        assert!(!Icon::Unknown.is_known());
    }

    #[test]
    fn lookup_is_case_sensitive_but_trims() {
        assert_eq!(Icon::from_name(" Truck "), Icon::Truck);
        assert_eq!(Icon::from_name("truck"), Icon::Unknown);
    }
}
