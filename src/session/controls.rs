/// Which player controls are currently usable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub start_enabled: bool,
    pub restart_enabled: bool,
}

impl Controls {
    pub fn new() -> Self {
        Self {
            start_enabled: true,
            restart_enabled: false,
        }
    }

    /// A session just began
    pub fn on_session_start(&mut self) {
        self.start_enabled = false;
        self.restart_enabled = false;
    }

    pub fn on_game_over(&mut self) {
        self.start_enabled = true;
        self.restart_enabled = true;
    }

    pub fn on_stop(&mut self) {
        self.start_enabled = true;
    }
}

impl Default for Controls {
    fn default() -> Self {
        Self::new()
    }
}
