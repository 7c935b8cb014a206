//! Runtime state of one shell session: the wizard, its sink and preferences.

use dialoguer::{theme::ColorfulTheme, Confirm};

use activity_config::{Config, ConfigManager};
use activity_core::{CoreError, SubmissionSink, Wizard};
use tracing::debug;

use crate::errors::{CliError, CommandError};
use crate::sinks::build_sink;

use super::commands::{self, is_sink_failure, step_hint};
use super::output;
use super::registry::CommandRegistry;
use super::shell::parse_command_line;
use super::style::UiStyle;
use super::test_mode;
use super::views;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub wizard: Wizard,
    pub sink: Box<dyn SubmissionSink>,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub style: UiStyle,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    /// Loads preferences from `ACTIVITY_FORM_HOME` or the platform config dir.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::from_env()?;
        let config = config_manager.load()?;
        Self::with_config(mode, config_manager, config)
    }

    pub fn with_config(
        mode: CliMode,
        config_manager: ConfigManager,
        config: Config,
    ) -> Result<Self, CliError> {
        output::apply_config(&config);
        let wizard = Wizard::with_default_country_code(&config.default_country_code)?;
        Ok(Self {
            mode,
            registry: CommandRegistry::new(commands::definitions()),
            wizard,
            sink: build_sink(config.sink),
            style: UiStyle::from_config(&config),
            config_manager,
            config,
            last_command: None,
            running: true,
        })
    }

    /// Replaces the configured sink.
    pub fn with_sink(mut self, sink: Box<dyn SubmissionSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Makes a freshly saved config current for output, views, sink and wizard.
    pub(crate) fn apply_config(&mut self, config: Config) -> Result<(), CommandError> {
        self.wizard
            .set_default_country_code(&config.default_country_code)?;
        if config.sink != self.config.sink {
            self.sink = build_sink(config.sink);
        }
        output::apply_config(&config);
        self.style = UiStyle::from_config(&config);
        self.config = config;
        Ok(())
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names()
    }

    pub fn prompt(&self) -> String {
        format!("activity-form [{}]> ", self.wizard.step_kind())
    }

    pub(crate) fn can_prompt(&self) -> bool {
        self.mode == CliMode::Interactive || test_mode::is_enabled()
    }

    pub(crate) fn render(&self) {
        output::block(&views::render(&self.wizard, &self.style));
    }

    /// Tokenizes and runs one input line.
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                output::warning(err.message);
                return Ok(LoopControl::Continue);
            }
        };
        let Some((raw, rest)) = tokens.split_first() else {
            return Ok(LoopControl::Continue);
        };
        let args: Vec<&str> = rest.iter().map(String::as_str).collect();
        self.last_command = Some(line.trim().to_string());

        let control = self.dispatch(raw, &args)?;
        if control == LoopControl::Exit {
            self.running = false;
        }
        Ok(control)
    }

    pub(crate) fn dispatch(
        &mut self,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.registry.resolve(raw).map(|entry| entry.handler) else {
            self.suggest_command(raw);
            return Ok(LoopControl::Continue);
        };
        debug!(command = raw, "dispatching command");
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));
        if let Some(best) = self.registry.suggest(input) {
            output::info(format!("Suggestion: `{}`?", best));
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Exit shell?")
            .default(false)
            .interact()
            .map_err(|err| CliError::Prompt(err.into()))
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
            }
            CommandError::Core(err @ CoreError::InvalidTransition { .. }) => {
                output::error(&err);
                output::hint(step_hint(self.wizard.step_kind()));
            }
            CommandError::Core(err) if is_sink_failure(&err) => {
                output::error(&err);
                output::hint("Your answers are kept. Type `submit` to try again.");
            }
            other => output::error(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    use activity_core::{MemorySink, SinkError, StepKind, SubmissionAck};
    use activity_domain::SubmissionRecord;
    use tempfile::TempDir;

    #[derive(Clone, Default)]
    struct SharedSink(Rc<RefCell<MemorySink>>);

    impl SubmissionSink for SharedSink {
        fn submit(&mut self, record: &SubmissionRecord) -> Result<SubmissionAck, SinkError> {
            self.0.borrow_mut().submit(record)
        }
    }

    fn context(dir: &TempDir) -> ShellContext {
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
        ShellContext::with_config(CliMode::Script, manager, Config::default()).expect("context")
    }

    fn run(context: &mut ShellContext, lines: &[&str]) {
        for line in lines {
            if let Err(err) = context.process_line(line) {
                panic!("`{line}` failed: {err}");
            }
        }
    }

    const ACTIVITY: [&str; 7] = [
        "set activityName \"Board Game Night\"",
        "set category \"Sports and Fitness\"",
        "set aboutActivity \"Weekly meetup\"",
        "set activityType Indoor",
        "set locationType \"Provider Location\"",
        "set minMembers 2",
        "set maxMembers 10",
    ];

    const LOCATION: [&str; 5] = [
        "set addressLine1 \"12 MG Road\"",
        "set zipCode 560001",
        "set city Bengaluru",
        "set state Karnataka",
        "set contactNumber 98765-43210",
    ];

    #[test]
    fn full_session_reaches_the_sink() {
        let dir = TempDir::new().expect("tempdir");
        let shared = SharedSink::default();
        let mut context = context(&dir).with_sink(Box::new(shared.clone()));

        run(&mut context, &ACTIVITY);
        run(&mut context, &["next"]);
        run(&mut context, &LOCATION);
        run(&mut context, &["submit"]);

        assert!(context.wizard.is_completed());
        let sink = shared.0.borrow();
        assert_eq!(sink.records().len(), 1);
        assert_eq!(sink.records()[0].contact_number, "9876543210");
    }

    #[test]
    fn aliases_drive_navigation() {
        let dir = TempDir::new().expect("tempdir");
        let mut context = context(&dir);
        run(&mut context, &ACTIVITY);
        run(&mut context, &["CONTINUE"]);
        assert_eq!(context.wizard.step_kind(), StepKind::LocationDetails);
        run(&mut context, &["previous"]);
        assert_eq!(context.wizard.step_kind(), StepKind::ActivityDetails);
    }

    #[test]
    fn wrong_step_edits_surface_as_core_errors() {
        let dir = TempDir::new().expect("tempdir");
        let mut context = context(&dir);
        let err = context.process_line("set city Pune").unwrap_err();
        assert!(matches!(err, CommandError::Core(CoreError::InvalidTransition { .. })));
    }

    #[test]
    fn exit_stops_the_loop() {
        let dir = TempDir::new().expect("tempdir");
        let mut context = context(&dir);
        assert_eq!(context.process_line("quit").unwrap(), LoopControl::Exit);
        assert!(!context.running);
    }

    #[test]
    fn unknown_commands_do_not_fail_the_loop() {
        let dir = TempDir::new().expect("tempdir");
        let mut context = context(&dir);
        assert_eq!(context.process_line("sumbit").unwrap(), LoopControl::Continue);
        assert_eq!(context.process_line("   ").unwrap(), LoopControl::Continue);
    }

    #[test]
    fn config_set_persists_and_updates_the_wizard_default() {
        let dir = TempDir::new().expect("tempdir");
        let mut context = context(&dir);
        run(&mut context, &["config set default_country_code UK"]);

        assert_eq!(context.config.default_country_code, "+44");
        assert_eq!(context.wizard.default_country_code(), "+44");
        let stored = context.config_manager.load().expect("load");
        assert_eq!(stored.default_country_code, "+44");
    }

    #[test]
    fn rejected_config_values_leave_everything_unchanged() {
        let dir = TempDir::new().expect("tempdir");
        let mut context = context(&dir);
        assert!(context.process_line("config set sink pigeon").is_err());
        assert_eq!(context.config, Config::default());
        assert!(!context.config_manager.config_path().exists());
    }

    #[test]
    fn guided_is_refused_without_a_terminal() {
        let dir = TempDir::new().expect("tempdir");
        let mut context = context(&dir);
        if test_mode::is_enabled() {
            return;
        }
        assert!(matches!(
            context.process_line("guided"),
            Err(CommandError::InvalidArguments(_))
        ));
    }
}
