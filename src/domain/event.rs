use std::fmt;

use strsim::levenshtein;

/// The closed set of event kinds the studio takes inquiries for.
///
/// Each variant selects one field template; the set is deliberately a tagged
/// enum so template dispatch stays exhaustively checkable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Wedding,
    Engagement,
    BirthdayParty,
    NamingCeremony,
    BabyShower,
    CorporateEvent,
    Concert,
    HouseWarming,
    Anniversary,
    Graduation,
    FamilyPortrait,
}

impl EventType {
    /// All event types, in the order they appear on the welcome screen.
    pub fn all() -> &'static [EventType] {
        &[
            Self::Wedding,
            Self::Engagement,
            Self::BirthdayParty,
            Self::NamingCeremony,
            Self::BabyShower,
            Self::CorporateEvent,
            Self::Concert,
            Self::HouseWarming,
            Self::Anniversary,
            Self::Graduation,
            Self::FamilyPortrait,
        ]
    }

    /// Display label, matching the identifiers used by the form templates.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Wedding => "Wedding",
            Self::Engagement => "Engagement",
            Self::BirthdayParty => "Birthday Party",
            Self::NamingCeremony => "Naming Ceremony",
            Self::BabyShower => "Baby Shower",
            Self::CorporateEvent => "Corporate Event",
            Self::Concert => "Concert",
            Self::HouseWarming => "House Warming",
            Self::Anniversary => "Anniversary",
            Self::Graduation => "Graduation",
            Self::FamilyPortrait => "Family Portrait",
        }
    }

    /// Short blurb shown next to the label on the welcome menu.
    pub fn blurb(&self) -> &'static str {
        match self {
            Self::Wedding => "Your love story, captured moment by moment",
            Self::Engagement => "Celebrate the question and the yes",
            Self::BirthdayParty => "Milestones worth remembering",
            Self::NamingCeremony => "Welcoming your little one",
            Self::BabyShower => "The joy before the arrival",
            Self::CorporateEvent => "Professional coverage for your business",
            Self::Concert => "The energy of live music",
            Self::HouseWarming => "A new home, a new chapter",
            Self::Anniversary => "Years of love, celebrated",
            Self::Graduation => "An achievement to be proud of",
            Self::FamilyPortrait => "Timeless portraits of your family",
        }
    }

    /// Case-insensitive lookup by display label.
    pub fn from_label(input: &str) -> Option<EventType> {
        let needle = input.trim();
        Self::all()
            .iter()
            .find(|ty| ty.label().eq_ignore_ascii_case(needle))
            .copied()
    }

    /// Closest label for a misspelled event name, for CLI suggestions.
    pub fn closest_label(input: &str) -> Option<&'static str> {
        let needle = input.trim().to_ascii_lowercase();
        Self::all()
            .iter()
            .map(|ty| (ty.label(), levenshtein(&needle, &ty.label().to_ascii_lowercase())))
            .min_by_key(|(_, distance)| *distance)
            .filter(|(_, distance)| *distance <= 3)
            .map(|(label, _)| label)
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eleven_event_types() {
        assert_eq!(EventType::all().len(), 11);
    }

    #[test]
    fn labels_round_trip() {
        for ty in EventType::all() {
            assert_eq!(EventType::from_label(ty.label()), Some(*ty));
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(
            EventType::from_label("birthday party"),
            Some(EventType::BirthdayParty)
        );
        assert_eq!(EventType::from_label(" WEDDING "), Some(EventType::Wedding));
        assert_eq!(EventType::from_label("Funeral"), None);
    }

    #[test]
    fn misspellings_get_suggestions() {
        assert_eq!(EventType::closest_label("Weding"), Some("Wedding"));
        assert_eq!(EventType::closest_label("concerto"), Some("Concert"));
        assert_eq!(EventType::closest_label("quarterly report"), None);
    }
}
