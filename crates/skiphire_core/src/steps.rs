//! The booking flow as a fixed sequence of steps.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BookingStep {
    Postcode,
    WasteType,
    SelectSkip,
    PermitCheck,
    ChooseDate,
    Payment,
}

impl BookingStep {
    pub const ALL: [BookingStep; 6] = [
        BookingStep::Postcode,
        BookingStep::WasteType,
        BookingStep::SelectSkip,
        BookingStep::PermitCheck,
        BookingStep::ChooseDate,
        BookingStep::Payment,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BookingStep::Postcode => "Postcode",
            BookingStep::WasteType => "Waste Type",
            BookingStep::SelectSkip => "Select Skip",
            BookingStep::PermitCheck => "Permit Check",
            BookingStep::ChooseDate => "Choose Date",
            BookingStep::Payment => "Payment",
        }
    }

    pub fn next(self) -> Option<BookingStep> {
        let idx = Self::ALL.iter().position(|s| *s == self)?;
        Self::ALL.get(idx + 1).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Active,
    Pending,
}

/// Where the user is in the booking flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingProgress {
    current: BookingStep,
}

impl Default for BookingProgress {
    /// Postcode and waste type are already settled when skips are listed
    fn default() -> Self {
        Self::at(BookingStep::SelectSkip)
    }
}

impl BookingProgress {
    pub fn at(current: BookingStep) -> Self {
        Self { current }
    }

    pub fn current(&self) -> BookingStep {
        self.current
    }

    pub fn status(&self, step: BookingStep) -> StepStatus {
        match step.cmp(&self.current) {
            std::cmp::Ordering::Less => StepStatus::Completed,
            std::cmp::Ordering::Equal => StepStatus::Active,
            std::cmp::Ordering::Greater => StepStatus::Pending,
        }
    }

    /// Move to the following step. Stays put on the final step.
    pub fn advance(&mut self) -> BookingStep {
        if let Some(next) = self.current.next() {
            self.current = next;
        }
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_progress_is_select_skip() {
        let progress = BookingProgress::default();
        assert_eq!(progress.status(BookingStep::Postcode), StepStatus::Completed);
        assert_eq!(progress.status(BookingStep::WasteType), StepStatus::Completed);
        assert_eq!(progress.status(BookingStep::SelectSkip), StepStatus::Active);
        assert_eq!(progress.status(BookingStep::Payment), StepStatus::Pending);
    }

    #[test]
    fn test_advance_stops_at_payment() {
        let mut progress = BookingProgress::default();
        assert_eq!(progress.advance(), BookingStep::PermitCheck);
        progress.advance();
        progress.advance();
        assert_eq!(progress.advance(), BookingStep::Payment);
        assert_eq!(progress.current(), BookingStep::Payment);
    }
}
