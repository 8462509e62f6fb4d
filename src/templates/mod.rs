//! Declarative form templates: one field set per event type, the shared
//! services/contact step, and the numbered wedding timeline rows.
//!
//! Field keys use the inquiry form's camelCase names (`brideName`,
//! `contactEmail`, `eventName_1`, …); the summary module probes them by
//! exact key.

use crate::domain::{EventType, SERVICE_CATALOG};

/// One option of a select field. `value` is what gets captured; `label` is
/// what the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

impl Choice {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

/// Supported control kinds. `Number` and `Date` carry no model-level format
/// validation: the only enforced rule anywhere is "required means non-empty".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Date,
    TextArea,
    Select(&'static [Choice]),
    /// A service checkbox; the field key doubles as the service identifier.
    Checkbox,
}

/// Declarative description of a single form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub hint: Option<String>,
}

impl FieldSpec {
    pub fn new(key: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind,
            required: true,
            hint: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// The full field set of one wizard step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepTemplate {
    pub title: String,
    pub intro: Option<String>,
    pub fields: Vec<FieldSpec>,
    /// Whether this step carries the repeatable timeline sub-form.
    pub timeline: bool,
}

impl StepTemplate {
    fn new(title: impl Into<String>, intro: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        Self {
            title: title.into(),
            intro: Some(intro.into()),
            fields,
            timeline: false,
        }
    }

    fn with_timeline(mut self) -> Self {
        self.timeline = true;
        self
    }

    /// Keys of every required field declared by this template.
    pub fn required_keys(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|field| field.required)
            .map(|field| field.key.as_str())
            .collect()
    }
}

/// Event-details field set for the given event type.
pub fn event_details(event_type: EventType) -> StepTemplate {
    match event_type {
        EventType::Wedding => wedding(),
        EventType::Engagement => engagement(),
        EventType::BirthdayParty => birthday_party(),
        EventType::NamingCeremony => naming_ceremony(),
        EventType::BabyShower => baby_shower(),
        EventType::CorporateEvent => corporate_event(),
        EventType::Concert => concert(),
        EventType::HouseWarming => house_warming(),
        EventType::Anniversary => anniversary(),
        EventType::Graduation => graduation(),
        EventType::FamilyPortrait => family_portrait(),
    }
}

/// Field specs for one numbered timeline row.
pub fn timeline_row_fields(number: u32) -> Vec<FieldSpec> {
    vec![
        FieldSpec::new(
            format!("eventName_{number}"),
            format!("Event {number} name"),
            FieldKind::Text,
        )
        .with_hint("e.g., Ceremony, Reception, Cocktail Hour"),
        FieldSpec::new(
            format!("guestCount_{number}"),
            format!("Event {number} guest count"),
            FieldKind::Number,
        )
        .optional(),
        FieldSpec::new(
            format!("duration_{number}"),
            format!("Event {number} duration (hrs)"),
            FieldKind::Number,
        )
        .optional(),
    ]
}

/// Services checkboxes plus contact fields, shared by every event type.
pub fn services_contact() -> StepTemplate {
    let mut fields: Vec<FieldSpec> = SERVICE_CATALOG
        .iter()
        .map(|(id, name)| FieldSpec::new(*id, *name, FieldKind::Checkbox).optional())
        .collect();
    fields.extend([
        FieldSpec::new("contactName", "Your name", FieldKind::Text),
        FieldSpec::new("contactEmail", "Email address", FieldKind::Text),
        FieldSpec::new("contactPhone", "Phone number", FieldKind::Text).optional(),
        FieldSpec::new(
            "preferredContact",
            "Preferred contact method",
            FieldKind::Select(PREFERRED_CONTACT),
        )
        .optional(),
    ]);
    StepTemplate::new(
        "Services & Contact",
        "Choose the coverage you would like and tell us how to reach you",
        fields,
    )
}

/// The review step declares no fields of its own; its guard passes once the
/// earlier steps have been saved.
pub fn review() -> StepTemplate {
    StepTemplate::new(
        "Review & Submit",
        "Look over your inquiry before sending it",
        Vec::new(),
    )
}

const PREFERRED_CONTACT: &[Choice] = &[
    Choice::new("", "No preference"),
    Choice::new("email", "Email"),
    Choice::new("phone", "Phone"),
    Choice::new("whatsapp", "WhatsApp"),
];

const BABY_GENDER: &[Choice] = &[
    Choice::new("", "Prefer not to say"),
    Choice::new("boy", "Boy"),
    Choice::new("girl", "Girl"),
    Choice::new("surprise", "It's a surprise!"),
];

const CORPORATE_EVENT_KIND: &[Choice] = &[
    Choice::new("conference", "Conference"),
    Choice::new("seminar", "Seminar/Workshop"),
    Choice::new("product-launch", "Product Launch"),
    Choice::new("team-building", "Team Building"),
    Choice::new("awards", "Awards Ceremony"),
    Choice::new("networking", "Networking Event"),
    Choice::new("other", "Other"),
];

const DEGREE_LEVEL: &[Choice] = &[
    Choice::new("high-school", "High School"),
    Choice::new("associates", "Associate's Degree"),
    Choice::new("bachelors", "Bachelor's Degree"),
    Choice::new("masters", "Master's Degree"),
    Choice::new("phd", "PhD/Doctorate"),
    Choice::new("professional", "Professional Certification"),
];

const SESSION_DURATION: &[Choice] = &[
    Choice::new("", "Decide later"),
    Choice::new("1", "1 hour"),
    Choice::new("1.5", "1.5 hours"),
    Choice::new("2", "2 hours"),
    Choice::new("custom", "Custom timing"),
];

fn wedding() -> StepTemplate {
    StepTemplate::new(
        "Tell Us About Your Love Story",
        "Every love story is unique - help us understand yours so we can capture it perfectly",
        vec![
            FieldSpec::new("brideName", "Bride's name", FieldKind::Text),
            FieldSpec::new("groomName", "Groom's name", FieldKind::Text),
            FieldSpec::new("weddingDate", "Wedding date", FieldKind::Date)
                .with_hint("The magical day when you say \"I do\""),
            FieldSpec::new("weddingVenue", "Wedding venue", FieldKind::Text)
                .with_hint("Venue name and location"),
            FieldSpec::new("loveStory", "How did you meet?", FieldKind::TextArea)
                .with_hint("The beautiful beginning of your love story"),
            FieldSpec::new("photographyVision", "Your photography vision", FieldKind::TextArea)
                .optional()
                .with_hint("Romantic and dreamy, modern and elegant, rustic and natural..."),
            FieldSpec::new("specialMoments", "Must-have shots", FieldKind::TextArea)
                .optional()
                .with_hint("First look, grandparents' reactions, family heirlooms..."),
            FieldSpec::new("specialRequests", "Special considerations", FieldKind::TextArea)
                .optional()
                .with_hint("Venue restrictions, surprise elements, accessibility needs..."),
        ],
    )
    .with_timeline()
}

fn engagement() -> StepTemplate {
    StepTemplate::new(
        "Celebrate Your Engagement",
        "Let's capture the joy and excitement of this special time",
        vec![
            FieldSpec::new("partner1Name", "Partner 1 name", FieldKind::Text),
            FieldSpec::new("partner2Name", "Partner 2 name", FieldKind::Text),
            FieldSpec::new("engagementDate", "Preferred shoot date", FieldKind::Date),
            FieldSpec::new("shootLocation", "Preferred location", FieldKind::Text)
                .optional()
                .with_hint("Beach, park, urban setting, meaningful location..."),
            FieldSpec::new("proposalStory", "Your proposal story", FieldKind::TextArea)
                .optional()
                .with_hint("If you'd like to share"),
            FieldSpec::new("shootStyle", "Photography style preference", FieldKind::TextArea)
                .optional()
                .with_hint("Romantic and soft, fun and playful, elegant and classic..."),
        ],
    )
}

fn birthday_party() -> StepTemplate {
    StepTemplate::new(
        "Birthday Celebration Details",
        "Every milestone deserves to be celebrated and remembered",
        vec![
            FieldSpec::new("celebrantName", "Birthday celebrant's name", FieldKind::Text),
            FieldSpec::new("celebrantAge", "Age they're turning", FieldKind::Number),
            FieldSpec::new("partyDate", "Party date", FieldKind::Date),
            FieldSpec::new("partyVenue", "Party venue", FieldKind::Text)
                .with_hint("Home, restaurant, party hall..."),
            FieldSpec::new("guestCount", "Expected guest count", FieldKind::Number).optional(),
            FieldSpec::new("partyDuration", "Party duration (hours)", FieldKind::Number)
                .optional(),
            FieldSpec::new("partyTheme", "Party theme & style", FieldKind::TextArea)
                .optional()
                .with_hint("Princess theme, superhero party, casual backyard BBQ..."),
            FieldSpec::new("specialMoments", "Special moments to capture", FieldKind::TextArea)
                .optional()
                .with_hint("Cake cutting, gift opening, candid laughter..."),
        ],
    )
}

fn naming_ceremony() -> StepTemplate {
    StepTemplate::new(
        "Welcoming Your Little One",
        "This precious milestone deserves to be captured with care",
        vec![
            FieldSpec::new("babyName", "Baby's name", FieldKind::Text),
            FieldSpec::new("babyAge", "Baby's age", FieldKind::Text)
                .optional()
                .with_hint("3 months, 6 weeks..."),
            FieldSpec::new("ceremonyDate", "Ceremony date", FieldKind::Date),
            FieldSpec::new("ceremonyVenue", "Ceremony venue", FieldKind::Text)
                .with_hint("Temple, home, community hall..."),
            FieldSpec::new("guestCount", "Expected guest count", FieldKind::Number).optional(),
            FieldSpec::new("ceremonyDuration", "Ceremony duration (hours)", FieldKind::Number)
                .optional(),
            FieldSpec::new(
                "culturalSignificance",
                "Cultural or religious significance",
                FieldKind::TextArea,
            )
            .optional()
            .with_hint("Traditions and meaning behind the ceremony"),
            FieldSpec::new("familyTraditions", "Special family moments", FieldKind::TextArea)
                .optional()
                .with_hint("Grandparents' blessings, traditional outfits..."),
        ],
    )
}

fn baby_shower() -> StepTemplate {
    StepTemplate::new(
        "Celebrating New Life",
        "Capturing the joy and anticipation of welcoming your little one",
        vec![
            FieldSpec::new("expectingParent", "Expecting parent's name", FieldKind::Text),
            FieldSpec::new(
                "babyGender",
                "Baby's gender (if known)",
                FieldKind::Select(BABY_GENDER),
            )
            .optional(),
            FieldSpec::new("showerDate", "Baby shower date", FieldKind::Date),
            FieldSpec::new("showerVenue", "Shower venue", FieldKind::Text)
                .with_hint("Home, restaurant, event space..."),
            FieldSpec::new("guestCount", "Expected guest count", FieldKind::Number).optional(),
            FieldSpec::new("showerDuration", "Shower duration (hours)", FieldKind::Number)
                .optional(),
            FieldSpec::new("showerTheme", "Shower theme & decorations", FieldKind::TextArea)
                .optional()
                .with_hint("Garden party, safari theme, pastel elegance..."),
            FieldSpec::new(
                "specialActivities",
                "Special activities & games",
                FieldKind::TextArea,
            )
            .optional()
            .with_hint("Gift opening, baby games, group photos..."),
        ],
    )
}

fn corporate_event() -> StepTemplate {
    StepTemplate::new(
        "Corporate Event Details",
        "Professional photography that showcases your company",
        vec![
            FieldSpec::new("companyName", "Company name", FieldKind::Text),
            FieldSpec::new(
                "eventType",
                "Type of event",
                FieldKind::Select(CORPORATE_EVENT_KIND),
            ),
            FieldSpec::new("eventDate", "Event date", FieldKind::Date),
            FieldSpec::new("eventVenue", "Event venue", FieldKind::Text)
                .with_hint("Hotel, convention center, office..."),
            FieldSpec::new("attendeeCount", "Expected attendee count", FieldKind::Number)
                .optional(),
            FieldSpec::new("eventDuration", "Event duration (hours)", FieldKind::Number)
                .optional(),
            FieldSpec::new("keyMoments", "Key moments & people", FieldKind::TextArea)
                .optional()
                .with_hint("Keynote speakers, award presentations, CEO speech..."),
            FieldSpec::new("brandGuidelines", "Brand guidelines & usage", FieldKind::TextArea)
                .optional()
                .with_hint("Website, social media, annual report..."),
        ],
    )
}

fn concert() -> StepTemplate {
    StepTemplate::new(
        "Concert/Music Event Details",
        "Dynamic photography that captures the energy of live music",
        vec![
            FieldSpec::new("artistName", "Artist/band name", FieldKind::Text),
            FieldSpec::new("musicGenre", "Music genre", FieldKind::Text)
                .optional()
                .with_hint("Rock, Pop, Classical, Jazz..."),
            FieldSpec::new("concertDate", "Concert date", FieldKind::Date),
            FieldSpec::new("venue", "Venue", FieldKind::Text)
                .with_hint("Concert hall, club, outdoor venue..."),
            FieldSpec::new("audienceSize", "Expected audience size", FieldKind::Number)
                .optional(),
            FieldSpec::new(
                "performanceDuration",
                "Performance duration (hours)",
                FieldKind::Number,
            )
            .optional(),
            FieldSpec::new(
                "performanceStyle",
                "Performance style & atmosphere",
                FieldKind::TextArea,
            )
            .optional()
            .with_hint("High-energy rock show, intimate acoustic set..."),
            FieldSpec::new("keyShots", "Key shots needed", FieldKind::TextArea)
                .optional()
                .with_hint("Stage action, crowd reactions, backstage moments..."),
        ],
    )
}

fn house_warming() -> StepTemplate {
    StepTemplate::new(
        "House Warming Celebration",
        "Celebrating your beautiful new home",
        vec![
            FieldSpec::new("homeownerNames", "Homeowner name(s)", FieldKind::Text),
            FieldSpec::new("houseWarmingDate", "House warming date", FieldKind::Date),
            FieldSpec::new("homeLocation", "Home location", FieldKind::Text)
                .with_hint("City, neighborhood"),
            FieldSpec::new("guestCount", "Expected guest count", FieldKind::Number).optional(),
            FieldSpec::new("partyDuration", "Celebration duration (hours)", FieldKind::Number)
                .optional(),
            FieldSpec::new("homeStyle", "Home style", FieldKind::Text)
                .optional()
                .with_hint("Modern, traditional, farmhouse, contemporary..."),
            FieldSpec::new("homeFeatures", "Special features to highlight", FieldKind::TextArea)
                .optional()
                .with_hint("Beautiful kitchen, cozy fireplace, garden..."),
            FieldSpec::new("celebrationStyle", "Celebration activities", FieldKind::TextArea)
                .optional()
                .with_hint("House tours, blessing ceremony, outdoor barbecue..."),
        ],
    )
}

fn anniversary() -> StepTemplate {
    StepTemplate::new(
        "Anniversary Celebration",
        "Celebrating your beautiful journey together",
        vec![
            FieldSpec::new("coupleNames", "Couple names", FieldKind::Text)
                .with_hint("John & Jane Smith"),
            FieldSpec::new("anniversaryYear", "Anniversary year", FieldKind::Number)
                .with_hint("How many years are you celebrating?"),
            FieldSpec::new("celebrationDate", "Celebration date", FieldKind::Date),
            FieldSpec::new("celebrationVenue", "Celebration venue", FieldKind::Text)
                .with_hint("Home, restaurant, banquet hall..."),
            FieldSpec::new("guestCount", "Expected guest count", FieldKind::Number).optional(),
            FieldSpec::new(
                "celebrationDuration",
                "Celebration duration (hours)",
                FieldKind::Number,
            )
            .optional(),
            FieldSpec::new("loveJourney", "Your love journey", FieldKind::TextArea)
                .optional()
                .with_hint("Adventures shared, challenges overcome..."),
            FieldSpec::new("specialMoments", "Important moments to capture", FieldKind::TextArea)
                .optional()
                .with_hint("Vow renewals, speeches, special dances..."),
        ],
    )
}

fn graduation() -> StepTemplate {
    StepTemplate::new(
        "Graduation Celebration",
        "Capturing this incredible achievement",
        vec![
            FieldSpec::new("graduateName", "Graduate's name", FieldKind::Text),
            FieldSpec::new(
                "degreeLevel",
                "Degree/achievement level",
                FieldKind::Select(DEGREE_LEVEL),
            ),
            FieldSpec::new("fieldOfStudy", "Field of study", FieldKind::Text)
                .optional()
                .with_hint("Engineering, Medicine, Arts, Business..."),
            FieldSpec::new("graduationDate", "Graduation date", FieldKind::Date),
            FieldSpec::new("celebrationVenue", "Celebration venue", FieldKind::Text)
                .with_hint("University, home, restaurant..."),
            FieldSpec::new("guestCount", "Expected guest count", FieldKind::Number).optional(),
            FieldSpec::new("achievementStory", "Your achievement journey", FieldKind::TextArea)
                .optional()
                .with_hint("Challenges overcome, future plans..."),
            FieldSpec::new("importantPeople", "Important people & moments", FieldKind::TextArea)
                .optional()
                .with_hint("Proud parents, mentors, cap toss..."),
        ],
    )
}

fn family_portrait() -> StepTemplate {
    StepTemplate::new(
        "Family Portrait Session",
        "Timeless portraits that celebrate your family",
        vec![
            FieldSpec::new("familyName", "Family name", FieldKind::Text)
                .with_hint("The Smith Family"),
            FieldSpec::new("sessionDate", "Preferred session date", FieldKind::Date),
            FieldSpec::new("familySize", "Number of family members", FieldKind::Number)
                .optional(),
            FieldSpec::new("childrenAges", "Children's ages", FieldKind::Text)
                .optional()
                .with_hint("5, 8, 12 years old"),
            FieldSpec::new("sessionLocation", "Preferred location", FieldKind::Text)
                .optional()
                .with_hint("Park, beach, home, studio..."),
            FieldSpec::new(
                "sessionDuration",
                "Preferred session duration",
                FieldKind::Select(SESSION_DURATION),
            )
            .optional(),
            FieldSpec::new("familyPersonality", "Your family's personality", FieldKind::TextArea)
                .optional()
                .with_hint("Playful and energetic, calm and loving..."),
            FieldSpec::new("portraitStyle", "Portrait style preference", FieldKind::TextArea)
                .optional()
                .with_hint("Classic and timeless, natural and candid..."),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required_keys_for(event_type: EventType) -> Vec<String> {
        event_details(event_type)
            .required_keys()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn every_event_type_declares_its_required_fields() {
        let expectations: &[(EventType, &[&str])] = &[
            (
                EventType::Wedding,
                &["brideName", "groomName", "weddingDate", "weddingVenue", "loveStory"],
            ),
            (
                EventType::Engagement,
                &["partner1Name", "partner2Name", "engagementDate"],
            ),
            (
                EventType::BirthdayParty,
                &["celebrantName", "celebrantAge", "partyDate", "partyVenue"],
            ),
            (
                EventType::NamingCeremony,
                &["babyName", "ceremonyDate", "ceremonyVenue"],
            ),
            (
                EventType::BabyShower,
                &["expectingParent", "showerDate", "showerVenue"],
            ),
            (
                EventType::CorporateEvent,
                &["companyName", "eventType", "eventDate", "eventVenue"],
            ),
            (EventType::Concert, &["artistName", "concertDate", "venue"]),
            (
                EventType::HouseWarming,
                &["homeownerNames", "houseWarmingDate", "homeLocation"],
            ),
            (
                EventType::Anniversary,
                &["coupleNames", "anniversaryYear", "celebrationDate", "celebrationVenue"],
            ),
            (
                EventType::Graduation,
                &["graduateName", "degreeLevel", "graduationDate", "celebrationVenue"],
            ),
            (EventType::FamilyPortrait, &["familyName", "sessionDate"]),
        ];

        assert_eq!(expectations.len(), EventType::all().len());
        for (event_type, expected) in expectations {
            assert_eq!(
                required_keys_for(*event_type),
                expected.to_vec(),
                "required fields for {event_type}"
            );
        }
    }

    #[test]
    fn only_the_wedding_template_carries_the_timeline() {
        for event_type in EventType::all() {
            let template = event_details(*event_type);
            assert_eq!(template.timeline, *event_type == EventType::Wedding);
        }
    }

    #[test]
    fn timeline_rows_embed_their_number_in_every_key() {
        let fields = timeline_row_fields(4);
        let keys: Vec<&str> = fields.iter().map(|field| field.key.as_str()).collect();
        assert_eq!(keys, ["eventName_4", "guestCount_4", "duration_4"]);
        assert!(fields[0].required);
        assert!(!fields[1].required);
        assert!(!fields[2].required);
    }

    #[test]
    fn services_contact_marks_name_and_email_required() {
        let template = services_contact();
        assert_eq!(template.required_keys(), ["contactName", "contactEmail"]);
        let checkbox_count = template
            .fields
            .iter()
            .filter(|field| field.kind == FieldKind::Checkbox)
            .count();
        assert_eq!(checkbox_count, 5);
    }

    #[test]
    fn review_step_declares_no_fields() {
        assert!(review().fields.is_empty());
    }
}
