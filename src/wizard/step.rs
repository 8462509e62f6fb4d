/// The three form steps, in wizard order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepId {
    EventDetails,
    ServicesContact,
    Review,
}

impl StepId {
    pub const TOTAL: usize = 3;

    pub fn all() -> &'static [StepId] {
        &[Self::EventDetails, Self::ServicesContact, Self::Review]
    }

    /// Zero-based position.
    pub fn index(&self) -> usize {
        match self {
            Self::EventDetails => 0,
            Self::ServicesContact => 1,
            Self::Review => 2,
        }
    }

    /// One-based position, for "Step N of 3" progress lines.
    pub fn number(&self) -> usize {
        self.index() + 1
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::EventDetails => "Event Details",
            Self::ServicesContact => "Services & Contact",
            Self::Review => "Review & Submit",
        }
    }

    pub fn next(&self) -> Option<StepId> {
        match self {
            Self::EventDetails => Some(Self::ServicesContact),
            Self::ServicesContact => Some(Self::Review),
            Self::Review => None,
        }
    }

    pub fn previous(&self) -> Option<StepId> {
        match self {
            Self::EventDetails => None,
            Self::ServicesContact => Some(Self::EventDetails),
            Self::Review => Some(Self::ServicesContact),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_ordered_and_numbered() {
        assert_eq!(StepId::all().len(), StepId::TOTAL);
        for (index, step) in StepId::all().iter().enumerate() {
            assert_eq!(step.index(), index);
            assert_eq!(step.number(), index + 1);
        }
    }

    #[test]
    fn next_and_previous_are_inverses_inside_the_range() {
        assert_eq!(StepId::EventDetails.previous(), None);
        assert_eq!(StepId::Review.next(), None);
        for step in StepId::all() {
            if let Some(next) = step.next() {
                assert_eq!(next.previous(), Some(*step));
            }
        }
    }
}
