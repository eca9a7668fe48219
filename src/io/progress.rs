//! Multi-file progress tracking with automatic batching for large sets

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

/// Processing stage of a single route file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Waiting to start
    Pending,
    /// Reading and validating the route
    Loading,
    /// Carving and digging
    Building,
    /// Writing images
    Exporting,
    /// All outputs written
    Done,
}

impl Stage {
    /// Stages counted on a file's bar
    pub const COUNT: u64 = 4;

    /// Bar position reached when the stage begins
    pub const fn position(self) -> u64 {
        match self {
            Self::Pending => 0,
            Self::Loading => 1,
            Self::Building => 2,
            Self::Exporting => 3,
            Self::Done => 4,
        }
    }

    /// Short label shown next to the bar
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Loading => "loading",
            Self::Building => "building",
            Self::Exporting => "exporting",
            Self::Done => "done",
        }
    }
}

/// Coordinates progress display for batch operations
///
/// Shows one bar per file for small batches and adds a batch bar when the
/// file count exceeds [`MAX_INDIVIDUAL_PROGRESS_BARS`]; the per-file bars
/// then show a rolling window of the most recent files.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    /// Stores (`filename`, `stage`) for rolling window display
    file_states: Vec<(String, Stage)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static FILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg:>9} [{bar:20.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Routes: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
            file_states: Vec::new(),
        }
    }

    /// Create a manager whose bars are never drawn
    pub fn hidden() -> Self {
        let manager = Self::new();
        manager
            .multi_progress
            .set_draw_target(indicatif::ProgressDrawTarget::hidden());
        manager
    }

    /// Initialize progress bars based on file count
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let pb = ProgressBar::new(Stage::COUNT);
            pb.set_style(FILE_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Register a file and show it as loading
    pub fn start_file(&mut self, index: usize, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if index >= self.file_states.len() {
            self.file_states
                .resize(index + 1, (String::new(), Stage::Pending));
        }
        if let Some(state) = self.file_states.get_mut(index) {
            *state = (display_name, Stage::Loading);
        }
        self.update_bars();
    }

    /// Move a file to a new stage
    pub fn set_stage(&mut self, index: usize, stage: Stage) {
        if let Some(state) = self.file_states.get_mut(index) {
            state.1 = stage;
        }
        self.update_bars();
    }

    /// Mark file as completed and update batch progress
    pub fn complete_file(&mut self, index: usize, elapsed: Duration) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.file_states.get_mut(index) {
            state.0 = format!("✓ {} ({:.1?})", state.0, elapsed);
            state.1 = Stage::Done;
        }
        self.update_bars();
    }

    /// Stage currently recorded for a file
    pub fn stage(&self, index: usize) -> Option<Stage> {
        self.file_states.get(index).map(|(_, stage)| *stage)
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All routes processed");
        }
        let _ = self.multi_progress.clear();
    }

    fn update_bars(&self) {
        let active: Vec<&(String, Stage)> = self
            .file_states
            .iter()
            .filter(|(name, _)| !name.is_empty())
            .collect();

        let start_idx = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start_idx..).unwrap_or(&[]);

        for (bar_idx, (name, stage)) in visible.iter().enumerate() {
            if let Some(bar) = self.file_bars.get(bar_idx) {
                bar.set_position(stage.position());
                bar.set_message(stage.label());
                bar.set_prefix(name.clone());
            }
        }

        for bar_idx in visible.len()..self.file_bars.len() {
            if let Some(bar) = self.file_bars.get(bar_idx) {
                bar.set_position(0);
                bar.set_message("");
                bar.set_prefix(String::new());
            }
        }
    }
}
