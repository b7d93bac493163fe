//! Filing wizard step machine
//!
//! Four ordered steps, strictly linear. Previous always works except on the
//! first step, where it stays put. Next requires the current step's data to
//! have been saved (saving runs validation, so a saved section is a valid
//! one).

use crate::record::TaxReturnRecord;

/// One stage of the filing wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WizardStep {
    /// Personal information
    Personal,
    /// Income
    Income,
    /// Deductions
    Deductions,
    /// Final review and submission
    Review,
}

impl WizardStep {
    /// Steps in wizard order
    pub const ORDER: [WizardStep; 4] = [
        WizardStep::Personal,
        WizardStep::Income,
        WizardStep::Deductions,
        WizardStep::Review,
    ];

    /// The following step; `Review` has none
    #[must_use]
    pub fn next(self) -> Option<WizardStep> {
        match self {
            WizardStep::Personal => Some(WizardStep::Income),
            WizardStep::Income => Some(WizardStep::Deductions),
            WizardStep::Deductions => Some(WizardStep::Review),
            WizardStep::Review => None,
        }
    }

    /// The preceding step; on `Personal` this stays at `Personal`
    #[must_use]
    pub fn previous(self) -> WizardStep {
        match self {
            WizardStep::Personal => WizardStep::Personal,
            WizardStep::Income => WizardStep::Personal,
            WizardStep::Deductions => WizardStep::Income,
            WizardStep::Review => WizardStep::Deductions,
        }
    }

    /// Title shown in the step header
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Personal => "Personal Information",
            WizardStep::Income => "Income",
            WizardStep::Deductions => "Deductions",
            WizardStep::Review => "Review & Submit",
        }
    }
}

/// Position tracker for one wizard session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilingWizard {
    current: Option<WizardStep>,
}

impl FilingWizard {
    /// Start at the personal-info step
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: Some(WizardStep::Personal),
        }
    }

    /// The step currently shown
    #[must_use]
    pub fn current(&self) -> WizardStep {
        self.current.unwrap_or(WizardStep::Personal)
    }

    /// Go back one step; a no-op on the first step
    pub fn back(&mut self) -> WizardStep {
        let step = self.current().previous();
        self.current = Some(step);
        step
    }

    /// Advance if the current step's data has been saved on `record`
    ///
    /// Returns the new step, or `None` when blocked (either the section is
    /// missing or the wizard is already on review).
    pub fn advance(&mut self, record: &TaxReturnRecord) -> Option<WizardStep> {
        let saved = match self.current() {
            WizardStep::Personal => record.personal_info.is_some(),
            WizardStep::Income => record.income.is_some(),
            WizardStep::Deductions => record.deductions.is_some(),
            WizardStep::Review => false,
        };
        if !saved {
            return None;
        }
        let next = self.current().next()?;
        self.current = Some(next);
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Deductions, Income};
    use taxflow_types::{ReturnId, UserId};

    #[test]
    fn previous_from_income_is_personal() {
        assert_eq!(WizardStep::Income.previous(), WizardStep::Personal);
    }

    #[test]
    fn previous_on_first_step_is_a_no_op() {
        assert_eq!(WizardStep::Personal.previous(), WizardStep::Personal);

        let mut wizard = FilingWizard::new();
        assert_eq!(wizard.back(), WizardStep::Personal);
        assert_eq!(wizard.current(), WizardStep::Personal);
    }

    #[test]
    fn advance_requires_saved_section() {
        let mut record = TaxReturnRecord::new_draft(ReturnId::new(), UserId::new(), 2023);
        let mut wizard = FilingWizard::new();

        // Nothing saved yet: blocked
        assert_eq!(wizard.advance(&record), None);
        assert_eq!(wizard.current(), WizardStep::Personal);

        record.personal_info = Some(crate::validate::tests_support::sample_personal());
        assert_eq!(wizard.advance(&record), Some(WizardStep::Income));

        record.income = Some(Income::default());
        assert_eq!(wizard.advance(&record), Some(WizardStep::Deductions));

        record.deductions = Some(Deductions::default());
        assert_eq!(wizard.advance(&record), Some(WizardStep::Review));

        // Review is terminal
        assert_eq!(wizard.advance(&record), None);
    }
}
