//! UI surface toggled by the scene controller.

/// Widgets the controller shows, hides or relabels.
pub trait SceneUi {
    fn set_pause_overlay_visible(&mut self, visible: bool);
    fn set_congrats_visible(&mut self, visible: bool);
    fn set_leaderboard_button_visible(&mut self, visible: bool);
    fn set_reset_control_visible(&mut self, visible: bool);
    fn set_time_text(&mut self, text: &str);
    fn set_score_text(&mut self, text: &str);
}

/// UI that records the latest state of every widget.
///
/// Useful for headless hosts and tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordingUi {
    pub pause_overlay: bool,
    pub congrats: bool,
    pub leaderboard_button: bool,
    pub reset_control: bool,
    pub time_text: String,
    pub score_text: String,
    /// Number of score text updates seen.
    pub score_updates: usize,
}

impl Default for RecordingUi {
    fn default() -> Self {
        Self {
            pause_overlay: false,
            congrats: false,
            leaderboard_button: true,
            reset_control: true,
            time_text: String::new(),
            score_text: String::new(),
            score_updates: 0,
        }
    }
}

impl RecordingUi {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SceneUi for RecordingUi {
    fn set_pause_overlay_visible(&mut self, visible: bool) {
        self.pause_overlay = visible;
    }

    fn set_congrats_visible(&mut self, visible: bool) {
        self.congrats = visible;
    }

    fn set_leaderboard_button_visible(&mut self, visible: bool) {
        self.leaderboard_button = visible;
    }

    fn set_reset_control_visible(&mut self, visible: bool) {
        self.reset_control = visible;
    }

    fn set_time_text(&mut self, text: &str) {
        self.time_text.clear();
        self.time_text.push_str(text);
    }

    fn set_score_text(&mut self, text: &str) {
        self.score_text.clear();
        self.score_text.push_str(text);
        self.score_updates += 1;
    }
}
