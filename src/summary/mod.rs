//! Builds the review/confirmation summary from captured form data.
//!
//! The generator never fails: unknown or missing fields simply produce fewer
//! lines. Date and venue are recovered by probing a fixed list of per-type
//! keys in order; when several are populated the last probed key wins.

use crate::domain::{service_display_name, EventType, FormData};

/// Keys probed, in order, for the headline event date.
const DATE_KEYS: &[&str] = &[
    "eventDate",
    "celebrationDate",
    "partyDate",
    "sessionDate",
    "concertDate",
];

/// Keys probed, in order, for the headline venue.
const VENUE_KEYS: &[&str] = &["venue", "eventVenue", "celebrationVenue", "partyVenue"];

/// A titled block of summary lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarySection {
    pub title: String,
    pub lines: Vec<String>,
}

impl SummarySection {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }
}

/// The assembled inquiry summary, shown on the review and confirmation
/// screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InquirySummary {
    pub sections: Vec<SummarySection>,
}

impl InquirySummary {
    /// Renders the summary as indented plain text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (index, section) in self.sections.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            out.push_str(&section.title);
            out.push('\n');
            for line in &section.lines {
                out.push_str("  ");
                out.push_str(line);
                out.push('\n');
            }
        }
        out
    }
}

/// Generates the summary for the given event type and captured data.
pub fn summarize(event_type: EventType, form: &FormData) -> InquirySummary {
    let mut sections = vec![event_details_section(event_type, form)];
    if let Some(services) = services_section(form) {
        sections.push(services);
    }
    if let Some(contact) = contact_section(form) {
        sections.push(contact);
    }
    InquirySummary { sections }
}

fn event_details_section(event_type: EventType, form: &FormData) -> SummarySection {
    let mut section = SummarySection::new("Event Details");
    section.line(format!("Event Type: {event_type}"));

    if event_type == EventType::Wedding {
        if let (Some(bride), Some(groom)) = (
            form.get_non_empty("brideName"),
            form.get_non_empty("groomName"),
        ) {
            section.line(format!("Couple: {bride} & {groom}"));
        }
        if let Some(date) = form.get_non_empty("weddingDate") {
            section.line(format!("Wedding Date: {date}"));
        }
        if let Some(venue) = form.get_non_empty("weddingVenue") {
            section.line(format!("Venue: {venue}"));
        }
        return section;
    }

    if let Some(date) = probe(form, DATE_KEYS) {
        section.line(format!("Event Date: {date}"));
    }
    if let Some(venue) = probe(form, VENUE_KEYS) {
        section.line(format!("Venue: {venue}"));
    }
    section
}

/// Walks the probe keys in order; each populated key overwrites the previous
/// hit, so the last populated key in the list wins.
fn probe<'a>(form: &'a FormData, keys: &[&str]) -> Option<&'a str> {
    let mut found = None;
    for key in keys {
        if let Some(value) = form.get_non_empty(key) {
            found = Some(value);
        }
    }
    found
}

fn services_section(form: &FormData) -> Option<SummarySection> {
    if form.service_count() == 0 {
        return None;
    }
    let names: Vec<&str> = form.services().map(service_display_name).collect();
    let mut section = SummarySection::new("Selected Services");
    section.line(names.join(", "));
    Some(section)
}

fn contact_section(form: &FormData) -> Option<SummarySection> {
    let mut section = SummarySection::new("Contact Information");
    for (key, label) in [
        ("contactName", "Name"),
        ("contactEmail", "Email"),
        ("contactPhone", "Phone"),
        ("preferredContact", "Preferred Contact"),
    ] {
        if let Some(value) = form.get_non_empty(key) {
            section.line(format!("{label}: {value}"));
        }
    }
    if section.lines.is_empty() {
        None
    } else {
        Some(section)
    }
}
