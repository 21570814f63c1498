use crate::{
    constants::EVENT_CONTEXT,
    types::{ChoiceOptions, CommandCode, Entry, EventCommand, Location},
};
use std::mem::take;

/// Options of one choice block, found by [`collect_choice_options`].
#[derive(Debug, PartialEq, Eq)]
pub struct ChoiceBlock<'a> {
    pub options: ChoiceOptions<'a>,
    /// Index just past the terminator, or the list length if the block isn't terminated.
    pub end: usize,
}

/// Collects the option texts of a choice block, scanning from `start` for commands at `indent`.
///
/// The scan stops at a [`CommandCode::ShowChoiceEnd`] or at an empty [`CommandCode::ShowChoiceOption`]
/// (the cancel branch). Neither terminator is collected.
#[must_use]
pub fn collect_choice_options(
    commands: &[EventCommand],
    start: usize,
    indent: u32,
) -> ChoiceBlock<'_> {
    let mut options = ChoiceOptions::new();

    for (index, command) in commands.iter().enumerate().skip(start) {
        if command.indent != indent {
            continue;
        }

        let is_cancel_branch =
            command.code.is_show_choice_option() && command.string.is_empty();

        if command.code.is_show_choice_end() || is_cancel_branch {
            return ChoiceBlock {
                options,
                end: index + 1,
            };
        }

        if command.code.is_show_choice_option() {
            options.push(&command.string);
        }
    }

    ChoiceBlock {
        options,
        end: commands.len(),
    }
}

/// Turns a flat command list into dialogue and choice entries.
///
/// Consecutive message lines are merged into one entry, every choice block becomes one entry
/// with options separated by line breaks.
pub struct MessageExtractor {
    location: Location,
    has_open_message: bool,
    accumulated_text: String,
    info: String,
    entries: Vec<Entry>,
}

impl MessageExtractor {
    #[must_use]
    pub fn new(location: Location) -> Self {
        Self {
            location,
            has_open_message: false,
            accumulated_text: String::new(),
            info: String::new(),
            entries: Vec::new(),
        }
    }

    /// Runs the whole command list and returns the produced entries.
    #[must_use]
    pub fn extract(
        location: Location,
        commands: &[EventCommand],
    ) -> Vec<Entry> {
        let mut extractor = Self::new(location);

        for index in 0..commands.len() {
            extractor.step(commands, index);
        }

        extractor.finish()
    }

    /// Processes the command at `index`. Choice blocks look ahead in `commands`.
    pub fn step(&mut self, commands: &[EventCommand], index: usize) {
        let command = &commands[index];
        let line = index + 1;

        match command.code {
            CommandCode::ShowMessage => {
                if self.has_open_message {
                    self.finalize_message();
                }

                self.has_open_message = true;
                self.info = self.location.describe(line);
                self.accumulated_text.clear();
                self.push_line(&command.string);
            }
            CommandCode::ShowMessage2 => {
                if !self.has_open_message {
                    // Continuation without a message start. Drop whatever was accumulated.
                    self.accumulated_text.clear();
                }

                self.push_line(&command.string);
            }
            CommandCode::ShowChoice => {
                if self.has_open_message {
                    self.has_open_message = false;
                    self.finalize_message();
                }

                let block =
                    collect_choice_options(commands, index + 1, command.indent);

                if !block.options.is_empty() {
                    self.entries.push(Entry::new(
                        EVENT_CONTEXT,
                        block.options.join("\n"),
                        self.location.describe_choice(line),
                    ));
                }
            }
            _ => {
                if self.has_open_message {
                    self.has_open_message = false;
                    self.finalize_message();
                }
            }
        }
    }

    /// Flushes a message still open at the end of the list and returns all entries.
    #[must_use]
    pub fn finish(mut self) -> Vec<Entry> {
        if self.has_open_message {
            self.has_open_message = false;
            self.finalize_message();
        }

        self.entries
    }

    fn push_line(&mut self, string: &str) {
        self.accumulated_text.push_str(string);
        self.accumulated_text.push('\n');
    }

    fn finalize_message(&mut self) {
        let mut text = take(&mut self.accumulated_text);

        if text.ends_with('\n') {
            text.pop();
        }

        if text.is_empty() {
            return;
        }

        self.entries.push(Entry::new(EVENT_CONTEXT, text, take(&mut self.info)));
    }
}
