use std::collections::HashMap;
use strum::{AsRefStr, EnumString};

/// Day of the week as used for opening hours.
///
/// The string representation (`mon`..`sun`) is the
/// key format of the stored hours mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr)]
pub enum Weekday {
    #[strum(serialize = "mon")]
    Monday,
    #[strum(serialize = "tue")]
    Tuesday,
    #[strum(serialize = "wed")]
    Wednesday,
    #[strum(serialize = "thu")]
    Thursday,
    #[strum(serialize = "fri")]
    Friday,
    #[strum(serialize = "sat")]
    Saturday,
    #[strum(serialize = "sun")]
    Sunday,
}

impl Weekday {
    /// Order in which days are displayed.
    pub const DISPLAY_ORDER: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Monday => "Mon",
            Self::Tuesday => "Tue",
            Self::Wednesday => "Wed",
            Self::Thursday => "Thu",
            Self::Friday => "Fri",
            Self::Saturday => "Sat",
            Self::Sunday => "Sun",
        }
    }
}

impl From<time::Weekday> for Weekday {
    fn from(from: time::Weekday) -> Self {
        match from {
            time::Weekday::Monday => Self::Monday,
            time::Weekday::Tuesday => Self::Tuesday,
            time::Weekday::Wednesday => Self::Wednesday,
            time::Weekday::Thursday => Self::Thursday,
            time::Weekday::Friday => Self::Friday,
            time::Weekday::Saturday => Self::Saturday,
            time::Weekday::Sunday => Self::Sunday,
        }
    }
}

/// Partial mapping from weekday to free-text hours.
///
/// A missing day means "not specified".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpeningHours(HashMap<Weekday, String>);

impl OpeningHours {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, day: Weekday) -> Option<&str> {
        self.0.get(&day).map(String::as_str)
    }

    pub fn set(&mut self, day: Weekday, hours: impl Into<String>) {
        self.0.insert(day, hours.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(|v| v.is_empty())
    }

    /// Specified days in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &str)> + '_ {
        Weekday::DISPLAY_ORDER
            .into_iter()
            .filter_map(|day| self.get(day).filter(|v| !v.is_empty()).map(|v| (day, v)))
    }

    pub fn into_inner(self) -> HashMap<Weekday, String> {
        self.0
    }
}

impl From<HashMap<Weekday, String>> for OpeningHours {
    fn from(from: HashMap<Weekday, String>) -> Self {
        Self(from)
    }
}

impl FromIterator<(Weekday, String)> for OpeningHours {
    fn from_iter<T: IntoIterator<Item = (Weekday, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
