//! Interactive Prompter
//!
//! Terminal stand-ins for the native dialogs, built on `dialoguer`.

use std::path::{Path, PathBuf};

use dialoguer::{Confirm, Input, Select};

use crate::domain::ports::{Prompter, Question};
use crate::domain::value_objects::{FileKind, WindowId};

use super::diff::external_change_diff;

/// Prompter that asks on the controlling terminal.
///
/// Any terminal error counts as "Cancel".
#[derive(Debug, Default)]
pub struct InteractivePrompter;

impl InteractivePrompter {
    pub fn new() -> Self {
        Self
    }

    fn confirm_external_change(
        &self,
        window: WindowId,
        question: &Question<'_>,
        path: &Path,
        local: &str,
        incoming: &str,
    ) -> bool {
        let (yes, cancel) = question.buttons();
        let items = [yes, "Show changes", cancel];

        loop {
            eprintln!();
            eprintln!("[{}] {}", window, question.title());
            let choice = Select::new()
                .with_prompt(question.message())
                .items(&items)
                .default(0)
                .interact_opt();

            match choice {
                Ok(Some(0)) => return true,
                Ok(Some(1)) => {
                    eprintln!();
                    eprint!(
                        "{}",
                        external_change_diff(&path.display().to_string(), local, incoming)
                    );
                }
                _ => return false,
            }
        }
    }

    fn ask_path(&self, prompt: &str, initial: Option<&Path>) -> Option<PathBuf> {
        let mut input = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true);
        if let Some(initial) = initial {
            input = input.with_initial_text(initial.display().to_string());
        }

        match input.interact_text() {
            Ok(text) if !text.trim().is_empty() => Some(PathBuf::from(text.trim())),
            _ => None,
        }
    }
}

impl Prompter for InteractivePrompter {
    fn confirm(&self, window: WindowId, question: &Question<'_>) -> bool {
        if let Question::ExternalChange {
            path,
            local,
            incoming,
        } = question
        {
            return self.confirm_external_change(window, question, path, local, incoming);
        }

        let (yes, cancel) = question.buttons();
        eprintln!();
        eprintln!("[{}] {}", window, question.title());
        Confirm::new()
            .with_prompt(format!("{} ({} / {})", question.message(), yes, cancel))
            .default(false)
            .interact()
            .unwrap_or(false)
    }

    fn choose_open_path(&self, _window: Option<WindowId>, filters: &[FileKind]) -> Option<PathBuf> {
        let accepted: Vec<String> = filters
            .iter()
            .flat_map(|kind| kind.extensions().iter())
            .map(|ext| format!(".{}", ext))
            .collect();
        self.ask_path(&format!("Open file ({})", accepted.join(", ")), None)
    }

    fn choose_save_path(
        &self,
        _window: WindowId,
        kind: FileKind,
        suggested: Option<&Path>,
    ) -> Option<PathBuf> {
        let path = self.ask_path(&format!("Save as ({})", kind.label()), suggested)?;
        Some(kind.ensure_extension(path))
    }

    fn show_error(&self, window: Option<WindowId>, title: &str, message: &str) {
        eprintln!();
        match window {
            Some(id) => eprintln!("✗ [{}] {}", id, title),
            None => eprintln!("✗ {}", title),
        }
        eprintln!("  {}", message);
    }
}
