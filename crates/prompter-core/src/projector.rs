//! Word classification and scroll targeting derived from the active index.

use core::iter::{Skip, Take};

use crate::script::{Script, Words};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WordClass {
    Past,
    Active,
    Pending,
}

pub fn classify(index: usize, active: Option<usize>) -> WordClass {
    match active {
        Some(active) if index == active => WordClass::Active,
        Some(active) if index < active => WordClass::Past,
        _ => WordClass::Pending,
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ProjectedWord<'a> {
    pub index: usize,
    pub text: &'a str,
    pub class: WordClass,
}

/// The script as seen at one instant of playback.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Projection<'a> {
    script: Script<'a>,
    active: Option<usize>,
}

impl<'a> Projection<'a> {
    /// Out-of-range indices project as "no active word".
    pub fn new(script: Script<'a>, current_word: Option<usize>) -> Self {
        Self {
            script,
            active: current_word.filter(|index| *index < script.word_count()),
        }
    }

    pub const fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn active_word(&self) -> Option<&'a str> {
        self.active.and_then(|index| self.script.word_at(index))
    }

    pub const fn word_count(&self) -> usize {
        self.script.word_count()
    }

    pub fn iter(&self) -> ProjectedWords<'a> {
        ProjectedWords {
            words: self.script.words(),
            index: 0,
            active: self.active,
        }
    }

    /// Words within `before`/`after` positions of the active word (or from the
    /// start when nothing is active).
    pub fn window(&self, before: usize, after: usize) -> Take<Skip<ProjectedWords<'a>>> {
        let anchor = self.active.unwrap_or(0);
        let first = anchor.saturating_sub(before);
        let span = (anchor - first).saturating_add(after).saturating_add(1);
        self.iter().skip(first).take(span)
    }
}

impl<'a> IntoIterator for Projection<'a> {
    type Item = ProjectedWord<'a>;
    type IntoIter = ProjectedWords<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Clone, Debug)]
pub struct ProjectedWords<'a> {
    words: Words<'a>,
    index: usize,
    active: Option<usize>,
}

impl<'a> Iterator for ProjectedWords<'a> {
    type Item = ProjectedWord<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.words.next()?;
        let index = self.index;
        self.index += 1;
        Some(ProjectedWord {
            index,
            text,
            class: classify(index, self.active),
        })
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScrollBlock {
    Center,
}

/// Request to bring the active word into view.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScrollIntoView {
    pub index: usize,
    pub behavior: ScrollBehavior,
    pub block: ScrollBlock,
}

/// Emits a [`ScrollIntoView`] each time the active index changes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ScrollTracker {
    last_active: Option<usize>,
}

impl ScrollTracker {
    pub const fn new() -> Self {
        Self { last_active: None }
    }

    pub fn observe(&mut self, active: Option<usize>) -> Option<ScrollIntoView> {
        if active == self.last_active {
            return None;
        }

        let previous = self.last_active;
        self.last_active = active;
        let index = active?;

        // Moving backwards means a new take; jump instead of animating.
        let behavior = match previous {
            Some(previous) if index < previous => ScrollBehavior::Instant,
            _ => ScrollBehavior::Smooth,
        };

        Some(ScrollIntoView {
            index,
            behavior,
            block: ScrollBlock::Center,
        })
    }

    pub fn reset(&mut self) {
        self.last_active = None;
    }
}
