//! Wheel-driven reveal of the two stacked slide panels.
//!
//! Progress runs from 0 (both panels hidden) to 2 (both panels revealed).
//! It is kept as a whole number of steps so repeated wheel events never
//! accumulate rounding error.

use crate::config::REVEAL_STEPS_PER_PANEL;

const MAX_STEPS: u16 = REVEAL_STEPS_PER_PANEL * 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelDirection {
    Forward,
    Backward,
    /// No vertical movement, e.g. a horizontal wheel.
    Level,
}

impl WheelDirection {
    pub fn from_delta_y(delta_y: f64) -> Self {
        if delta_y > 0.0 {
            WheelDirection::Forward
        } else if delta_y < 0.0 {
            WheelDirection::Backward
        } else {
            WheelDirection::Level
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelOutcome {
    /// Leave the event alone and let the page scroll.
    PassThrough,
    /// The event drove the reveal; its default action must be prevented.
    Consumed,
}

/// Vertical extent of the stage region relative to the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StageBounds {
    pub top: f64,
    pub bottom: f64,
}

impl StageBounds {
    pub fn spans_viewport(&self, viewport_height: f64) -> bool {
        self.top <= 0.0 && self.bottom >= viewport_height
    }
}

/// A missing stage or an unknown viewport height counts as out of zone.
pub fn in_zone(stage: Option<StageBounds>, viewport_height: Option<f64>) -> bool {
    match (stage, viewport_height) {
        (Some(stage), Some(height)) => stage.spans_viewport(height),
        _ => false,
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealProgress {
    steps: u16,
}

impl RevealProgress {
    pub fn value(&self) -> f64 {
        f64::from(self.steps) / f64::from(REVEAL_STEPS_PER_PANEL)
    }

    pub fn is_start(&self) -> bool {
        self.steps == 0
    }

    pub fn advanced(self) -> Self {
        Self {
            steps: (self.steps + 1).min(MAX_STEPS),
        }
    }

    pub fn retreated(self) -> Self {
        Self {
            steps: self.steps.saturating_sub(1),
        }
    }

    /// Offset of the projects panel, in percent of its own height.
    pub fn first_panel_offset(&self) -> f64 {
        100.0 - self.value().min(1.0) * 100.0
    }

    /// Offset of the contact panel, in percent of its own height.
    pub fn second_panel_offset(&self) -> f64 {
        100.0 - (self.value() - 1.0).max(0.0) * 100.0
    }
}

pub fn panel_transform(offset_percent: f64) -> String {
    format!("transform: translateY({:.2}%);", offset_percent)
}

#[derive(Debug, Default)]
pub struct RevealController {
    progress: RevealProgress,
}

impl RevealController {
    pub fn progress(&self) -> RevealProgress {
        self.progress
    }

    pub fn on_wheel(&mut self, delta_y: f64, in_zone: bool) -> WheelOutcome {
        if !in_zone {
            return WheelOutcome::PassThrough;
        }
        let direction = WheelDirection::from_delta_y(delta_y);
        // Only scrolling back up past the stage is ordinary page scroll.
        if direction == WheelDirection::Backward && self.progress.is_start() {
            return WheelOutcome::PassThrough;
        }

        // A level wheel still holds the stage and counts as a step back.
        self.progress = match direction {
            WheelDirection::Forward => self.progress.advanced(),
            WheelDirection::Backward | WheelDirection::Level => self.progress.retreated(),
        };
        WheelOutcome::Consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= 1e-9,
            "expected {} got {}",
            expected,
            actual
        );
    }

    fn spin(controller: &mut RevealController, delta_y: f64, times: usize) {
        for _ in 0..times {
            controller.on_wheel(delta_y, true);
        }
    }

    #[test]
    fn forward_wheel_never_decreases_or_passes_two() {
        let mut controller = RevealController::default();
        let mut last = controller.progress().value();
        for _ in 0..500 {
            assert_eq!(controller.on_wheel(120.0, true), WheelOutcome::Consumed);
            let now = controller.progress().value();
            assert!(now >= last);
            assert!(now <= 2.0);
            last = now;
        }
        assert_close(last, 2.0);
    }

    #[test]
    fn backward_wheel_never_increases_or_goes_negative() {
        let mut controller = RevealController::default();
        spin(&mut controller, 1.0, 80);
        let mut last = controller.progress().value();
        for _ in 0..200 {
            controller.on_wheel(-3.0, true);
            let now = controller.progress().value();
            assert!(now <= last);
            assert!(now >= 0.0);
            last = now;
        }
        assert!(controller.progress().is_start());
    }

    #[test]
    fn backward_at_start_passes_through() {
        let mut controller = RevealController::default();
        assert_eq!(controller.on_wheel(-40.0, true), WheelOutcome::PassThrough);
        assert!(controller.progress().is_start());
    }

    #[test]
    fn returning_to_start_releases_the_wheel() {
        let mut controller = RevealController::default();
        spin(&mut controller, 10.0, 3);
        spin(&mut controller, -10.0, 3);
        assert!(controller.progress().is_start());
        assert_eq!(controller.on_wheel(-10.0, true), WheelOutcome::PassThrough);
    }

    #[test]
    fn out_of_zone_leaves_progress_alone() {
        let mut controller = RevealController::default();
        spin(&mut controller, 5.0, 42);
        let before = controller.progress();
        assert_eq!(controller.on_wheel(5.0, false), WheelOutcome::PassThrough);
        assert_eq!(controller.on_wheel(-5.0, false), WheelOutcome::PassThrough);
        assert_eq!(controller.progress(), before);
    }

    #[test]
    fn level_wheel_steps_back_and_is_consumed() {
        let mut controller = RevealController::default();
        spin(&mut controller, 1.0, 10);
        assert_eq!(controller.on_wheel(0.0, true), WheelOutcome::Consumed);
        assert_close(controller.progress().value(), 0.09);
    }

    #[test]
    fn level_wheel_at_start_holds_the_stage() {
        let mut controller = RevealController::default();
        assert_eq!(controller.on_wheel(0.0, true), WheelOutcome::Consumed);
        assert!(controller.progress().is_start());
        assert_eq!(controller.on_wheel(0.0, false), WheelOutcome::PassThrough);
    }

    #[test]
    fn one_hundred_fifty_steps_reveal_half_of_second_panel() {
        let mut controller = RevealController::default();
        spin(&mut controller, 100.0, 150);
        let progress = controller.progress();
        assert_close(progress.value(), 1.5);
        assert_close(progress.first_panel_offset(), 0.0);
        assert_close(progress.second_panel_offset(), 50.0);
    }

    #[test]
    fn panels_start_hidden() {
        let progress = RevealProgress::default();
        assert_close(progress.first_panel_offset(), 100.0);
        assert_close(progress.second_panel_offset(), 100.0);
        assert_eq!(
            panel_transform(progress.first_panel_offset()),
            "transform: translateY(100.00%);"
        );
    }

    #[test]
    fn transform_is_rounded_to_hundredths() {
        let mut controller = RevealController::default();
        spin(&mut controller, 1.0, 7);
        let progress = controller.progress();
        assert_eq!(
            panel_transform(progress.first_panel_offset()),
            "transform: translateY(93.00%);"
        );
        assert_eq!(
            panel_transform(progress.second_panel_offset()),
            "transform: translateY(100.00%);"
        );
    }

    #[test]
    fn stage_must_span_the_whole_viewport() {
        let viewport = Some(800.0);
        assert!(in_zone(Some(StageBounds { top: 0.0, bottom: 800.0 }), viewport));
        assert!(in_zone(Some(StageBounds { top: -300.0, bottom: 1200.0 }), viewport));
        assert!(!in_zone(Some(StageBounds { top: 1.0, bottom: 2000.0 }), viewport));
        assert!(!in_zone(Some(StageBounds { top: -900.0, bottom: 799.0 }), viewport));
        assert!(!in_zone(None, viewport));
        assert!(!in_zone(Some(StageBounds { top: 0.0, bottom: 800.0 }), None));
    }
}
