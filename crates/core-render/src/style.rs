//! Highlight category -> terminal color mapping.
//!
//! `None` means the terminal's default foreground. [`ColorRun`] tracks the
//! color currently active on the line so escapes are emitted only on change.

use crossterm::style::Color;
use core_syntax::Highlight;

pub fn color_for(hl: Highlight) -> Option<Color> {
    match hl {
        Highlight::Normal => None,
        Highlight::Comment => Some(Color::DarkCyan),
        Highlight::KeywordPrimary => Some(Color::DarkYellow),
        Highlight::KeywordSecondary => Some(Color::DarkGreen),
        Highlight::String => Some(Color::DarkMagenta),
        Highlight::Number => Some(Color::DarkRed),
        Highlight::Match => Some(Color::DarkBlue),
    }
}

/// Active foreground color while walking a row.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ColorRun {
    current: Option<Color>,
}

impl ColorRun {
    pub fn current(&self) -> Option<Color> {
        self.current
    }

    /// Switch to `next`; returns the color to emit when it differs from the
    /// active one (`Some(None)` meaning "back to default").
    pub fn switch(&mut self, next: Option<Color>) -> Option<Option<Color>> {
        if self.current == next {
            return None;
        }
        self.current = next;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_but_normal_is_colored() {
        assert_eq!(color_for(Highlight::Normal), None);
        for hl in [
            Highlight::Comment,
            Highlight::KeywordPrimary,
            Highlight::KeywordSecondary,
            Highlight::String,
            Highlight::Number,
            Highlight::Match,
        ] {
            assert!(color_for(hl).is_some(), "{hl:?}");
        }
    }

    #[test]
    fn run_emits_only_on_change() {
        let mut run = ColorRun::default();
        assert_eq!(run.switch(None), None);
        assert_eq!(run.switch(Some(Color::DarkRed)), Some(Some(Color::DarkRed)));
        assert_eq!(run.switch(Some(Color::DarkRed)), None);
        assert_eq!(run.switch(None), Some(None));
        assert_eq!(run.current(), None);
    }
}
