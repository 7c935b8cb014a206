//! Shell command handlers.

use activity_core::{
    mask_contact_number, mask_member_count, CoreError, FieldRef, StepKind, Transition,
    CONTACT_NUMBER_DIGITS,
};
use activity_domain::FieldInput;
use strsim::levenshtein;

use crate::errors::{CommandError, CommandResult};
use crate::utils::build_info;

use super::guided::{run_guided, GuidedOutcome, TerminalInteraction};
use super::output;
use super::registry::{CommandEntry, SUGGESTION_DISTANCE};
use super::shell_context::ShellContext;
use super::views;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("help", "Show available commands", "help [command]", cmd_help),
        CommandEntry::new("show", "Render the current step", "show", cmd_show)
            .with_aliases(&["view"]),
        CommandEntry::new("steps", "Show the step sidebar", "steps", cmd_steps),
        CommandEntry::new("fields", "List the fields of the current step", "fields", cmd_fields),
        CommandEntry::new(
            "options",
            "List the allowed values of a choice field",
            "options <field>",
            cmd_options,
        ),
        CommandEntry::new("set", "Edit a field of the current step", "set <field> <value>", cmd_set),
        CommandEntry::new("clear", "Empty a field of the current step", "clear <field>", cmd_clear),
        CommandEntry::new(
            "next",
            "Validate activity details and continue",
            "next",
            cmd_next,
        )
        .with_aliases(&["continue"]),
        CommandEntry::new("back", "Return to activity details", "back", cmd_back)
            .with_aliases(&["previous"]),
        CommandEntry::new(
            "submit",
            "Validate location details and submit the activity",
            "submit",
            cmd_submit,
        ),
        CommandEntry::new(
            "dismiss",
            "Close the confirmation and start a new activity",
            "dismiss",
            cmd_dismiss,
        )
        .with_aliases(&["close"]),
        CommandEntry::new("errors", "List outstanding errors", "errors", cmd_errors),
        CommandEntry::new(
            "guided",
            "Answer the current step field by field",
            "guided",
            cmd_guided,
        ),
        CommandEntry::new(
            "config",
            "View and change preferences",
            "config [show|set <key> <value>]",
            cmd_config,
        ),
        CommandEntry::new("version", "Show build metadata", "version", cmd_version),
        CommandEntry::new("exit", "Exit the shell", "exit", cmd_exit).with_aliases(&["quit"]),
    ]
}

fn resolve_field(input: &str) -> Result<FieldRef, CommandError> {
    if let Some(field) = FieldRef::resolve(input) {
        return Ok(field);
    }
    let lowered = input.to_ascii_lowercase();
    let suggestion = FieldRef::all()
        .map(|field| (levenshtein(&field.key().to_ascii_lowercase(), &lowered), field.key()))
        .min_by_key(|(distance, _)| *distance)
        .filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE);
    let message = match suggestion {
        Some((_, key)) => format!("Unknown field `{}`. Did you mean `{}`?", input, key),
        None => format!("Unknown field `{}`. Use `fields` to list them.", input),
    };
    Err(CommandError::InvalidArguments(message))
}

/// Runs the input mask for digit fields before the edit reaches the wizard.
fn mask_input(field: FieldRef, raw: &str) -> Result<String, CommandError> {
    let input = match field {
        FieldRef::Activity(field) => field.input(),
        FieldRef::Location(field) => field.input(),
    };
    let masked = match input {
        FieldInput::Count => mask_member_count(raw).ok_or_else(|| {
            format!("{} accepts whole numbers only", field.label())
        }),
        FieldInput::Phone => mask_contact_number(raw).ok_or_else(|| {
            format!(
                "{} accepts at most {} digits",
                field.label(),
                CONTACT_NUMBER_DIGITS
            )
        }),
        _ => Ok(raw.to_string()),
    };
    masked.map_err(CommandError::InvalidArguments)
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        match context.registry.resolve(name) {
            Some(entry) => {
                output::section(format!("Help: {}", entry.name));
                output::info(format!("description: {}", entry.description));
                output::info(format!("usage: {}", entry.usage));
                if !entry.aliases.is_empty() {
                    output::info(format!("aliases: {}", entry.aliases.join(", ")));
                }
            }
            None => context.suggest_command(name),
        }
        return Ok(());
    }

    output::section("Available commands");
    let rows: Vec<String> = context
        .registry
        .list()
        .into_iter()
        .map(|entry| format!("  {:<10} {}", entry.name, entry.description))
        .collect();
    output::block(&rows.join("\n"));
    output::hint("Use `help <command>` for details.");
    Ok(())
}

fn cmd_show(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.render();
    Ok(())
}

fn cmd_steps(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::block(&views::render_sidebar(
        context.wizard.step_kind(),
        &context.style,
    ));
    Ok(())
}

fn cmd_fields(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let step = context.wizard.step_kind();
    if step == StepKind::Completed {
        output::info("The form has been submitted. Type `dismiss` to start a new activity.");
        return Ok(());
    }
    output::section(step.label());
    let rows: Vec<String> = FieldRef::all()
        .filter(|field| field.step() == step)
        .map(|field| {
            let required = match field {
                FieldRef::Activity(field) => field.required(),
                FieldRef::Location(field) => field.required(),
            };
            let marker = if required { " *" } else { "" };
            format!("  {:<15} {}{}", field.key(), field.label(), marker)
        })
        .collect();
    output::block(&rows.join("\n"));
    Ok(())
}

fn cmd_options(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let name = args
        .first()
        .ok_or_else(|| CommandError::InvalidArguments("usage: options <field>".into()))?;
    let field = resolve_field(name)?;
    let options: Vec<String> = match field {
        FieldRef::Activity(field) => field.options().into_iter().map(String::from).collect(),
        FieldRef::Location(field) => field.options(context.wizard.reference()),
    };
    if options.is_empty() {
        return Err(CommandError::InvalidArguments(format!(
            "`{}` is not a choice field",
            field.key()
        )));
    }
    output::section(format!("{} options", field.label()));
    let rows: Vec<String> = options.iter().map(|option| format!("  - {option}")).collect();
    output::block(&rows.join("\n"));
    Ok(())
}

fn cmd_set(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.len() < 2 {
        return Err(CommandError::InvalidArguments(
            "usage: set <field> <value>".into(),
        ));
    }
    let field = resolve_field(args[0])?;
    let value = mask_input(field, &args[1..].join(" "))?;
    context.wizard.edit(field.key(), &value)?;
    output::success(format!("{} updated.", field.label()));
    Ok(())
}

fn cmd_clear(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let name = args
        .first()
        .ok_or_else(|| CommandError::InvalidArguments("usage: clear <field>".into()))?;
    let field = resolve_field(name)?;
    context.wizard.edit(field.key(), "")?;
    output::success(format!("{} cleared.", field.label()));
    Ok(())
}

fn report_blocked(count: usize) {
    let noun = if count == 1 { "field" } else { "fields" };
    output::warning(format!("Please fix {count} {noun} before continuing."));
}

fn cmd_next(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    match context.wizard.advance()? {
        Transition::Blocked(errors) => report_blocked(errors.len()),
        _ => output::success("Activity details saved."),
    }
    context.render();
    Ok(())
}

fn cmd_back(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.wizard.retreat()?;
    context.render();
    Ok(())
}

fn cmd_submit(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    match context.wizard.submit(context.sink.as_mut())? {
        Transition::Blocked(errors) => report_blocked(errors.len()),
        Transition::Submitted(ack) => {
            output::success(format!("Submission {} accepted.", ack.short_id()))
        }
        Transition::Moved(_) => {}
    }
    context.render();
    Ok(())
}

fn cmd_dismiss(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.wizard.dismiss_success()?;
    output::info("Starting a new activity.");
    context.render();
    Ok(())
}

fn cmd_errors(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let errors = match context.wizard.step_kind() {
        StepKind::ActivityDetails => context.wizard.activity_errors(),
        StepKind::LocationDetails => context.wizard.location_errors(),
        StepKind::Completed => {
            output::info("No outstanding errors.");
            return Ok(());
        }
    };
    if errors.is_empty() {
        output::info("No outstanding errors.");
        return Ok(());
    }
    let rows: Vec<String> = errors
        .iter()
        .map(|(key, message)| format!("  {key}: {message}"))
        .collect();
    output::block(&rows.join("\n"));
    Ok(())
}

fn cmd_guided(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if !context.can_prompt() {
        return Err(CommandError::InvalidArguments(
            "`guided` needs an interactive terminal; use `set` in scripts".into(),
        ));
    }
    let outcome = run_guided(
        &mut context.wizard,
        context.sink.as_mut(),
        &mut TerminalInteraction,
    )?;
    match outcome {
        GuidedOutcome::Cancelled => {
            output::info("Guided entry cancelled. Answers given so far are kept.")
        }
        GuidedOutcome::Finished(Transition::Blocked(errors)) => report_blocked(errors.len()),
        GuidedOutcome::Finished(Transition::Moved(_)) => {
            output::success("Activity details saved.")
        }
        GuidedOutcome::Finished(Transition::Submitted(ack)) => {
            output::success(format!("Submission {} accepted.", ack.short_id()))
        }
    }
    context.render();
    Ok(())
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() || args[0].eq_ignore_ascii_case("show") {
        output::section("Configuration");
        let mut rows: Vec<String> = context
            .config
            .entries()
            .into_iter()
            .map(|(key, value)| format!("  {key:<22} {value}"))
            .collect();
        rows.push(format!(
            "  {:<22} {}",
            "file",
            context.config_manager.config_path().display()
        ));
        output::block(&rows.join("\n"));
        return Ok(());
    }

    if !args[0].eq_ignore_ascii_case("set") || args.len() < 3 {
        return Err(CommandError::InvalidArguments(
            "usage: config [show|set <key> <value>]".into(),
        ));
    }
    let key = args[1];
    let value = args[2..].join(" ");
    let mut updated = context.config.clone();
    updated.set(key, &value)?;
    context.config_manager.save(&updated)?;
    context.apply_config(updated)?;
    output::success(format!("Configuration `{}` updated.", key));
    Ok(())
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    output::section(format!("Activity Form {}", meta.version));
    let rows: Vec<String> = meta
        .rows()
        .into_iter()
        .map(|(label, value)| format!("  {label:<12}: {value}"))
        .collect();
    output::block(&rows.join("\n"));
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}

/// Hint shown after an action was refused on the current step.
pub(crate) fn step_hint(step: StepKind) -> &'static str {
    match step {
        StepKind::ActivityDetails => "Fill in the activity details, then type `next`.",
        StepKind::LocationDetails => "Type `submit` to finish or `back` to revise the activity.",
        StepKind::Completed => "Type `dismiss` to start a new activity.",
    }
}

pub(crate) fn is_sink_failure(err: &CoreError) -> bool {
    matches!(err, CoreError::Submission(_))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_typos_get_a_suggestion() {
        let err = resolve_field("cty").unwrap_err();
        assert_eq!(err.to_string(), "Unknown field `cty`. Did you mean `city`?");
    }

    #[test]
    fn unrelated_field_names_point_at_the_field_list() {
        let err = resolve_field("favourite_colour").unwrap_err();
        assert!(err.to_string().ends_with("Use `fields` to list them."));
    }

    #[test]
    fn digit_masks_guard_set_commands() {
        let phone = FieldRef::resolve("contactNumber").unwrap();
        assert_eq!(mask_input(phone, "98765 43210").unwrap(), "9876543210");
        assert!(mask_input(phone, "987654321012").is_err());

        let members = FieldRef::resolve("minMembers").unwrap();
        assert!(mask_input(members, "-2").is_err());
        assert_eq!(mask_input(members, " 4 ").unwrap(), "4");
    }
}
