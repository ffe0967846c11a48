//! Screen navigation

use super::state::{App, CurrentScreen};

impl App {
    pub fn switch_screen(&mut self, screen: CurrentScreen) {
        if screen == self.current_screen {
            return;
        }
        self.previous_screen = self.current_screen;
        self.current_screen = screen;
    }

    /// Help returns to wherever it was opened from; everything else to the form
    pub fn go_back(&mut self) {
        self.current_screen = match self.current_screen {
            CurrentScreen::Help => self.previous_screen,
            _ => CurrentScreen::Form,
        };
        self.previous_screen = CurrentScreen::Form;
    }
}
