use std::collections::HashMap;

use strsim::levenshtein;

use crate::errors::CommandResult;

use super::shell_context::ShellContext;

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

/// Largest edit distance still offered as a suggestion.
pub const SUGGESTION_DISTANCE: usize = 3;

pub struct CommandEntry {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            aliases: &[],
            description,
            usage,
            handler,
        }
    }

    pub fn with_aliases(self, aliases: &'static [&'static str]) -> Self {
        Self { aliases, ..self }
    }
}

#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<&'static str, CommandEntry>,
    aliases: HashMap<&'static str, &'static str>,
    order: Vec<&'static str>,
}

impl CommandRegistry {
    pub fn new(entries: Vec<CommandEntry>) -> Self {
        let mut registry = Self::default();
        for entry in entries {
            registry.register(entry);
        }
        registry
    }

    pub fn register(&mut self, entry: CommandEntry) {
        let name = entry.name;
        for alias in entry.aliases {
            self.aliases.insert(alias, name);
        }
        if self.commands.insert(name, entry).is_none() {
            self.order.push(name);
        }
    }

    /// Looks a command up by name or alias, ignoring case.
    pub fn resolve(&self, input: &str) -> Option<&CommandEntry> {
        let lowered = input.to_ascii_lowercase();
        let name = self
            .aliases
            .get(lowered.as_str())
            .copied()
            .unwrap_or(lowered.as_str());
        self.commands.get(name)
    }

    pub fn list(&self) -> Vec<&CommandEntry> {
        self.order
            .iter()
            .filter_map(|name| self.commands.get(name))
            .collect()
    }

    /// Names and aliases, for completion.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.order.clone();
        names.extend(self.aliases.keys().copied());
        names.sort_unstable();
        names
    }

    /// Closest known command within [`SUGGESTION_DISTANCE`] edits.
    pub fn suggest(&self, input: &str) -> Option<&'static str> {
        let lowered = input.to_ascii_lowercase();
        self.order
            .iter()
            .map(|name| (levenshtein(name, &lowered), *name))
            .min_by_key(|(distance, _)| *distance)
            .filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE)
            .map(|(_, name)| name)
    }
}
