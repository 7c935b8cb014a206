//! Text rendering of the wizard. Every value shown comes straight from the
//! wizard's drafts; views keep no copies.

use activity_core::{ErrorMap, StepKind, StepView, SubmissionAck, Wizard, MEMBERS_KEY};
use activity_domain::{
    ActivityDraft, ActivityField, LocationDraft, LocationField, ReferenceData,
};

use super::style::UiStyle;

pub const FORM_TITLE: &str = "Create new Activity";
pub const ADDRESS_HELP: &str = "Please specify the address for where the activity takes place.";
pub const CONTACT_HEADING: &str = "Contact details";
pub const CONTACT_HELP: &str = "Please provide contact information for this activity.";
pub const SUCCESS_MESSAGE: &str = "Your activity form has been successfully submitted.";

const ADDRESS_FIELDS: [LocationField; 5] = [
    LocationField::AddressLine1,
    LocationField::AddressLine2,
    LocationField::ZipCode,
    LocationField::City,
    LocationField::State,
];

const CONTACT_FIELDS: [LocationField; 3] = [
    LocationField::CountryCode,
    LocationField::ContactNumber,
    LocationField::ContactName,
];

/// Sidebar followed by the current step or the success overlay.
pub fn render(wizard: &Wizard, style: &UiStyle) -> String {
    let mut out = render_sidebar(wizard.step_kind(), style);
    out.push_str("\n\n");
    out.push_str(&render_step(wizard.view(), style));
    out
}

pub fn render_step(view: StepView<'_>, style: &UiStyle) -> String {
    match view {
        StepView::Activity { draft, errors } => render_activity(draft, errors, style),
        StepView::Location {
            draft,
            errors,
            reference,
        } => render_location(draft, errors, reference, style),
        StepView::Completed { ack } => render_success(ack, style),
    }
}

pub fn render_sidebar(current: StepKind, style: &UiStyle) -> String {
    let mut lines = vec![style.header(FORM_TITLE)];
    let blank_marker = " ".repeat(style.active_marker.chars().count());
    for (index, step) in StepKind::SEQUENCE.iter().enumerate() {
        let entry = format!("{}. {}", index + 1, step.label());
        if *step == current {
            lines.push(format!(
                "  {} {}",
                style.active_marker,
                style.apply_highlight_style(&entry)
            ));
        } else {
            lines.push(format!("  {} {}", blank_marker, entry));
        }
    }
    lines.join("\n")
}

struct FieldLines<'a> {
    lines: Vec<String>,
    style: &'a UiStyle,
}

impl<'a> FieldLines<'a> {
    fn new(style: &'a UiStyle) -> Self {
        Self {
            lines: Vec::new(),
            style,
        }
    }

    fn header(&mut self, title: &str) {
        self.lines.push(self.style.header(title));
    }

    fn help(&mut self, text: &str) {
        self.lines
            .push(format!("  {}", self.style.apply_muted_style(text)));
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }

    fn field(&mut self, label: &str, required: bool, value: &str, placeholder: &str) {
        let marker = if required {
            format!(" {}", self.style.required_marker)
        } else {
            String::new()
        };
        let shown = if value.trim().is_empty() {
            self.style.apply_muted_style(&format!("({placeholder})"))
        } else {
            value.to_string()
        };
        self.lines.push(format!("  {label}{marker}: {shown}"));
    }

    fn error(&mut self, errors: &ErrorMap, key: &str) {
        if let Some(message) = errors.get(key) {
            let text = format!("{} {}", self.style.error_marker, message);
            self.lines
                .push(format!("    {}", self.style.apply_error_style(&text)));
        }
    }

    fn finish(self) -> String {
        self.lines.join("\n")
    }
}

pub fn render_activity(draft: &ActivityDraft, errors: &ErrorMap, style: &UiStyle) -> String {
    let mut out = FieldLines::new(style);
    out.header(StepKind::ActivityDetails.label());
    for field in ActivityField::ALL {
        if field == ActivityField::OtherCategory && !draft.wants_other_category() {
            continue;
        }
        out.field(
            field.label(),
            field.required(),
            &draft.value(field),
            field.placeholder(),
        );
        match field {
            // Shown under the free-text line instead.
            ActivityField::Category if draft.wants_other_category() => {}
            ActivityField::OtherCategory => out.error(errors, ActivityField::Category.key()),
            _ => out.error(errors, field.key()),
        }
    }
    out.error(errors, MEMBERS_KEY);
    out.finish()
}

pub fn render_location(
    draft: &LocationDraft,
    errors: &ErrorMap,
    reference: &ReferenceData,
    style: &UiStyle,
) -> String {
    let mut out = FieldLines::new(style);
    out.header(StepKind::LocationDetails.label());
    out.help(ADDRESS_HELP);
    for field in ADDRESS_FIELDS {
        location_field(&mut out, draft, errors, reference, field);
    }
    out.blank();
    out.header(CONTACT_HEADING);
    out.help(CONTACT_HELP);
    for field in CONTACT_FIELDS {
        location_field(&mut out, draft, errors, reference, field);
    }
    out.finish()
}

fn location_field(
    out: &mut FieldLines<'_>,
    draft: &LocationDraft,
    errors: &ErrorMap,
    reference: &ReferenceData,
    field: LocationField,
) {
    let value = match field {
        LocationField::CountryCode => reference
            .country(&draft.country_code)
            .map(|entry| entry.display_label())
            .unwrap_or_else(|| draft.country_code.clone()),
        _ => draft.value(field),
    };
    out.field(field.label(), field.required(), &value, field.placeholder());
    out.error(errors, field.key());
}

pub fn render_success(ack: &SubmissionAck, style: &UiStyle) -> String {
    let mut out = FieldLines::new(style);
    out.header(StepKind::Completed.label());
    out.lines.push(format!("  {}", SUCCESS_MESSAGE));
    out.lines.push(format!("  Submission id: {}", ack.short_id()));
    out.help("Type `dismiss` to create another activity.");
    out.finish()
}
