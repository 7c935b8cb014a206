//! Two-step wizard: activity details, then location details, then a success
//! overlay that resets everything when dismissed.

use std::fmt;

use activity_domain::{
    ActivityDraft, ActivityField, LocationDraft, LocationField, ReferenceData, SubmissionRecord,
    DEFAULT_COUNTRY_CODE,
};
use tracing::{debug, info};

use crate::error::CoreError;
use crate::error_map::ErrorMap;
use crate::submission::{SubmissionAck, SubmissionSink};
use crate::validation::{validate_activity, validate_location};

/// Discriminant of [`WizardStep`], used for display and error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    ActivityDetails,
    LocationDetails,
    Completed,
}

impl StepKind {
    /// Steps listed in the sidebar, in order.
    pub const SEQUENCE: [StepKind; 2] = [StepKind::ActivityDetails, StepKind::LocationDetails];

    pub fn label(self) -> &'static str {
        match self {
            StepKind::ActivityDetails => "Activity Details",
            StepKind::LocationDetails => "Location Details",
            StepKind::Completed => "Form Submitted",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where the wizard currently is. `Completed` owns the sink receipt, so no
/// step data can be shown while the success overlay is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardStep {
    ActivityDetails,
    LocationDetails,
    Completed(SubmissionAck),
}

impl WizardStep {
    pub fn kind(&self) -> StepKind {
        match self {
            WizardStep::ActivityDetails => StepKind::ActivityDetails,
            WizardStep::LocationDetails => StepKind::LocationDetails,
            WizardStep::Completed(_) => StepKind::Completed,
        }
    }
}

/// Result of a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The wizard moved to the given step.
    Moved(StepKind),
    /// The record was accepted by the sink and the success overlay is showing.
    Submitted(SubmissionAck),
    /// Validation failed; the wizard stayed put and stored these errors.
    Blocked(ErrorMap),
}

/// A field of either step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRef {
    Activity(ActivityField),
    Location(LocationField),
}

impl FieldRef {
    /// Looks up a field key across both steps.
    pub fn resolve(key: &str) -> Option<Self> {
        key.parse()
            .map(FieldRef::Activity)
            .or_else(|_| key.parse().map(FieldRef::Location))
            .ok()
    }

    pub fn all() -> impl Iterator<Item = FieldRef> {
        ActivityField::ALL
            .into_iter()
            .map(FieldRef::Activity)
            .chain(LocationField::ALL.into_iter().map(FieldRef::Location))
    }

    pub fn key(self) -> &'static str {
        match self {
            FieldRef::Activity(field) => field.key(),
            FieldRef::Location(field) => field.key(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldRef::Activity(field) => field.label(),
            FieldRef::Location(field) => field.label(),
        }
    }

    pub fn step(self) -> StepKind {
        match self {
            FieldRef::Activity(_) => StepKind::ActivityDetails,
            FieldRef::Location(_) => StepKind::LocationDetails,
        }
    }
}

/// Read-only snapshot handed to views.
#[derive(Debug, Clone, Copy)]
pub enum StepView<'a> {
    Activity {
        draft: &'a ActivityDraft,
        errors: &'a ErrorMap,
    },
    Location {
        draft: &'a LocationDraft,
        errors: &'a ErrorMap,
        reference: &'a ReferenceData,
    },
    Completed {
        ack: &'a SubmissionAck,
    },
}

/// Owned state for one form session.
#[derive(Debug, Clone)]
pub struct Wizard {
    step: WizardStep,
    activity: ActivityDraft,
    location: LocationDraft,
    activity_errors: ErrorMap,
    location_errors: ErrorMap,
    reference: ReferenceData,
    default_country_code: &'static str,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::ActivityDetails,
            activity: ActivityDraft::default(),
            location: LocationDraft::with_country_code(DEFAULT_COUNTRY_CODE),
            activity_errors: ErrorMap::new(),
            location_errors: ErrorMap::new(),
            reference: ReferenceData::standard(),
            default_country_code: DEFAULT_COUNTRY_CODE,
        }
    }

    /// Starts a wizard whose location drafts preselect `code` (`+44`, `UK`, …).
    pub fn with_default_country_code(code: &str) -> Result<Self, CoreError> {
        let mut wizard = Self::new();
        wizard.set_default_country_code(code)?;
        wizard.location = LocationDraft::with_country_code(wizard.default_country_code);
        Ok(wizard)
    }

    /// Changes the code used for blank entries and for the next reset. The
    /// current draft keeps whatever it holds.
    pub fn set_default_country_code(&mut self, code: &str) -> Result<(), CoreError> {
        let entry = self
            .reference
            .country(code)
            .ok_or_else(|| activity_domain::ParseChoiceError::new("country code", code))?;
        self.default_country_code = entry.code;
        Ok(())
    }

    pub fn step(&self) -> &WizardStep {
        &self.step
    }

    pub fn step_kind(&self) -> StepKind {
        self.step.kind()
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.step, WizardStep::Completed(_))
    }

    pub fn activity(&self) -> &ActivityDraft {
        &self.activity
    }

    pub fn location(&self) -> &LocationDraft {
        &self.location
    }

    pub fn activity_errors(&self) -> &ErrorMap {
        &self.activity_errors
    }

    pub fn location_errors(&self) -> &ErrorMap {
        &self.location_errors
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn default_country_code(&self) -> &'static str {
        self.default_country_code
    }

    pub fn view(&self) -> StepView<'_> {
        match &self.step {
            WizardStep::ActivityDetails => StepView::Activity {
                draft: &self.activity,
                errors: &self.activity_errors,
            },
            WizardStep::LocationDetails => StepView::Location {
                draft: &self.location,
                errors: &self.location_errors,
                reference: &self.reference,
            },
            WizardStep::Completed(ack) => StepView::Completed { ack },
        }
    }

    fn require(&self, expected: StepKind, action: &'static str) -> Result<(), CoreError> {
        let step = self.step_kind();
        if step == expected {
            Ok(())
        } else {
            Err(CoreError::InvalidTransition { action, step })
        }
    }

    /// Merges one activity field and clears that field's own error entry.
    pub fn edit_activity(&mut self, field: ActivityField, value: &str) -> Result<(), CoreError> {
        self.require(StepKind::ActivityDetails, "edit activity details")?;
        self.activity.set(field, value)?;
        self.activity_errors.remove(field.key());
        debug!(field = field.key(), "activity field edited");
        Ok(())
    }

    /// Merges one location field and clears that field's own error entry.
    pub fn edit_location(&mut self, field: LocationField, value: &str) -> Result<(), CoreError> {
        self.require(StepKind::LocationDetails, "edit location details")?;
        if field == LocationField::CountryCode && value.trim().is_empty() {
            self.location.country_code = self.default_country_code.to_string();
        } else {
            self.location.set(field, value, &self.reference)?;
        }
        self.location_errors.remove(field.key());
        debug!(field = field.key(), "location field edited");
        Ok(())
    }

    /// Edits a field by key, provided it belongs to the current step.
    pub fn edit(&mut self, key: &str, value: &str) -> Result<FieldRef, CoreError> {
        let field = FieldRef::resolve(key).ok_or_else(|| CoreError::UnknownField(key.into()))?;
        match field {
            FieldRef::Activity(field) => self.edit_activity(field, value)?,
            FieldRef::Location(field) => self.edit_location(field, value)?,
        }
        Ok(field)
    }

    /// Validates activity details and moves to the location step when clean.
    pub fn advance(&mut self) -> Result<Transition, CoreError> {
        self.require(StepKind::ActivityDetails, "continue")?;
        let errors = validate_activity(&self.activity);
        self.activity_errors = errors.clone();
        if !errors.is_empty() {
            debug!(errors = errors.len(), "activity details blocked");
            return Ok(Transition::Blocked(errors));
        }
        self.step = WizardStep::LocationDetails;
        debug!("advanced to location details");
        Ok(Transition::Moved(StepKind::LocationDetails))
    }

    /// Returns to activity details without validating or clearing anything.
    pub fn retreat(&mut self) -> Result<Transition, CoreError> {
        self.require(StepKind::LocationDetails, "go back")?;
        self.step = WizardStep::ActivityDetails;
        debug!("returned to activity details");
        Ok(Transition::Moved(StepKind::ActivityDetails))
    }

    /// Validates location details and hands the merged record to `sink`.
    ///
    /// A sink failure leaves the wizard on the location step with its data.
    pub fn submit<S: SubmissionSink + ?Sized>(
        &mut self,
        sink: &mut S,
    ) -> Result<Transition, CoreError> {
        self.require(StepKind::LocationDetails, "submit")?;
        let errors = validate_location(&self.location);
        self.location_errors = errors.clone();
        if !errors.is_empty() {
            debug!(errors = errors.len(), "location details blocked");
            return Ok(Transition::Blocked(errors));
        }

        let record = SubmissionRecord::from_drafts(&self.activity, &self.location);
        let ack = sink.submit(&record)?;
        info!(submission = %ack.id, "activity submitted");
        self.step = WizardStep::Completed(ack.clone());
        Ok(Transition::Submitted(ack))
    }

    /// Closes the success overlay and starts over with empty drafts.
    pub fn dismiss_success(&mut self) -> Result<Transition, CoreError> {
        self.require(StepKind::Completed, "dismiss the confirmation")?;
        self.activity = ActivityDraft::default();
        self.location = LocationDraft::with_country_code(self.default_country_code);
        self.activity_errors.clear();
        self.location_errors.clear();
        self.step = WizardStep::ActivityDetails;
        debug!("wizard reset after submission");
        Ok(Transition::Moved(StepKind::ActivityDetails))
    }
}
