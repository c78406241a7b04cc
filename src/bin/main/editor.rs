use std::{io, path::Path};

use embassy_futures::select::{Either, select};
use log::{info, warn};
use prompter_core::script::Script;

use super::terminal::{LINES, QUIT};

const EXCERPT_WORDS: usize = 12;

/// Script text being composed before a session starts.
#[derive(Debug, Default)]
pub(super) struct ScriptDraft {
    text: String,
}

#[derive(Debug, PartialEq, Eq)]
pub(super) enum EditorAction {
    Continue,
    Submit(String),
    Quit,
}

impl ScriptDraft {
    /// Replaces the draft with the file contents. Returns the word count.
    pub(super) fn load(&mut self, path: &Path) -> io::Result<usize> {
        self.text = std::fs::read_to_string(path)?;
        Ok(Script::new(&self.text).word_count())
    }

    pub(super) fn push_line(&mut self, line: &str) {
        if !self.text.is_empty() {
            self.text.push('\n');
        }
        self.text.push_str(line);
    }

    pub(super) fn clear(&mut self) {
        self.text.clear();
    }

    pub(super) fn word_count(&self) -> usize {
        Script::new(&self.text).word_count()
    }

    /// Trimmed draft text, or `None` when it holds no words.
    pub(super) fn submit(&self) -> Option<String> {
        let trimmed = self.text.trim();
        if trimmed.is_empty() {
            warn!("editor: script is empty; type some text or `:load <path>`");
            return None;
        }
        Some(trimmed.to_string())
    }

    pub(super) fn handle_line(&mut self, line: &str) -> EditorAction {
        let Some(directive) = line.trim_start().strip_prefix(':') else {
            self.push_line(line);
            return EditorAction::Continue;
        };

        let mut parts = directive.splitn(2, char::is_whitespace);
        match parts.next().unwrap_or_default() {
            "go" => match self.submit() {
                Some(text) => EditorAction::Submit(text),
                None => EditorAction::Continue,
            },
            "clear" => {
                self.clear();
                info!("editor: draft cleared");
                EditorAction::Continue
            }
            "load" => {
                let path = parts.next().map(str::trim).unwrap_or_default();
                if path.is_empty() {
                    warn!("editor: usage `:load <path>`");
                    return EditorAction::Continue;
                }
                match self.load(Path::new(path)) {
                    Ok(words) => info!("editor: loaded {} words from {}", words, path),
                    Err(err) => warn!("editor: failed to read {}: {}", path, err),
                }
                EditorAction::Continue
            }
            "quit" | "q" => EditorAction::Quit,
            other => {
                warn!("editor: unknown directive :{}", other);
                EditorAction::Continue
            }
        }
    }
}

/// Collects script lines until `:go` submits non-blank text. `None` on quit.
pub(super) async fn compose(draft: &mut ScriptDraft) -> Option<String> {
    println!();
    println!("== Script ==");
    if draft.word_count() > 0 {
        println!(
            "Draft ({} words): {} ...",
            draft.word_count(),
            Script::new(&draft.text).excerpt(EXCERPT_WORDS)
        );
    }
    println!("Type the script, then `:go`. Also `:load <path>`, `:clear`, `:quit`.");

    loop {
        let line = match select(LINES.receive(), QUIT.wait()).await {
            Either::First(line) => line,
            Either::Second(()) => return None,
        };

        match draft.handle_line(&line) {
            EditorAction::Continue => {}
            EditorAction::Submit(text) => return Some(text),
            EditorAction::Quit => return None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_trims_and_refuses_blank_text() {
        let mut draft = ScriptDraft::default();
        assert_eq!(draft.submit(), None);

        draft.push_line("   ");
        assert_eq!(draft.handle_line(":go"), EditorAction::Continue);

        draft.push_line("  hello there  ");
        assert_eq!(
            draft.handle_line(":go"),
            EditorAction::Submit("hello there".to_string())
        );
    }

    #[test]
    fn lines_accumulate_until_cleared() {
        let mut draft = ScriptDraft::default();
        assert_eq!(draft.handle_line("one two"), EditorAction::Continue);
        assert_eq!(draft.handle_line("three"), EditorAction::Continue);
        assert_eq!(draft.word_count(), 3);

        assert_eq!(draft.handle_line(":clear"), EditorAction::Continue);
        assert_eq!(draft.word_count(), 0);
        assert_eq!(draft.handle_line(":quit"), EditorAction::Quit);
    }

    #[test]
    fn load_replaces_the_draft() {
        let path = std::env::temp_dir().join(format!("prompter-editor-{}.txt", std::process::id()));
        std::fs::write(&path, "\n  loaded script text \n").unwrap();

        let mut draft = ScriptDraft::default();
        draft.push_line("old words");
        let action = draft.handle_line(&format!(":load {}", path.display()));
        assert_eq!(action, EditorAction::Continue);
        assert_eq!(draft.submit().as_deref(), Some("loaded script text"));

        let _ = std::fs::remove_file(&path);
        assert!(draft.load(&path).is_err());
    }
}
