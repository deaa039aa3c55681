// Reveal animation state.
// A content block starts hidden and offset, then animates into place exactly once.

use log::debug;

pub const DEFAULT_THRESHOLD: f64 = 0.1;
pub const DEFAULT_DURATION_SECS: f64 = 0.8;

/// Presentation state of a revealed block. Never goes back to `Hidden`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Visible,
}

/// Whether the controller still wants visibility signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Watch {
    Watching,
    Triggered,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    EaseOut,
}

impl Easing {
    pub fn css(&self) -> &'static str {
        match self {
            Easing::EaseOut => "ease-out",
        }
    }
}

/// Displacement in pixels applied while hidden.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Offset {
    Y(f64),
    X(f64),
}

impl Offset {
    fn transform(&self) -> String {
        match self {
            Offset::Y(px) => format!("translateY({}px)", px),
            Offset::X(px) => format!("translateX({}px)", px),
        }
    }
}

impl Default for Offset {
    fn default() -> Self {
        Offset::Y(50.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub offset: Offset,
    pub duration_secs: f64,
    pub delay_secs: f64,
    pub easing: Easing,
}

impl Motion {
    pub fn new(offset: Offset, duration_secs: f64, delay_secs: f64) -> Self {
        Self {
            offset,
            duration_secs: non_negative(duration_secs, DEFAULT_DURATION_SECS),
            delay_secs: non_negative(delay_secs, 0.0),
            easing: Easing::EaseOut,
        }
    }

    pub fn with_delay(self, delay_secs: f64) -> Self {
        Self::new(self.offset, self.duration_secs, delay_secs)
    }
}

impl Default for Motion {
    fn default() -> Self {
        Self::new(Offset::default(), DEFAULT_DURATION_SECS, 0.0)
    }
}

fn non_negative(value: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.max(0.0)
    }
}

/// Options recognised by a reveal: `delay`, `threshold` and `triggerOnce`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    motion: Motion,
    threshold: f64,
    trigger_once: bool,
}

impl RevealConfig {
    pub fn new(motion: Motion, threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            DEFAULT_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            motion,
            threshold,
            trigger_once: true,
        }
    }

    /// Scroll reveal with the default slide-up motion.
    pub fn scroll(delay_secs: f64, threshold: f64) -> Self {
        Self::new(Motion::default().with_delay(delay_secs), threshold)
    }

    pub fn motion(&self) -> &Motion {
        &self.motion
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn trigger_once(&self) -> bool {
        self.trigger_once
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self::new(Motion::default(), DEFAULT_THRESHOLD)
    }
}

/// The single "start visible transition" side effect of a reveal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration_secs: f64,
    pub delay_secs: f64,
    pub easing: Easing,
}

impl Transition {
    fn from_motion(motion: &Motion) -> Self {
        Self {
            duration_secs: motion.duration_secs,
            delay_secs: motion.delay_secs,
            easing: motion.easing,
        }
    }

    /// Value for the CSS `transition` property.
    pub fn css(&self) -> String {
        let timing = format!(
            "{}s {} {}s",
            self.duration_secs,
            self.easing.css(),
            self.delay_secs
        );
        format!("opacity {timing}, transform {timing}")
    }
}

#[derive(Debug, Clone)]
pub struct RevealController {
    config: RevealConfig,
    visibility: Visibility,
    watch: Watch,
    animated: bool,
}

impl RevealController {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            visibility: Visibility::Hidden,
            watch: Watch::Watching,
            animated: false,
        }
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_watching(&self) -> bool {
        self.watch == Watch::Watching
    }

    pub fn is_animated(&self) -> bool {
        self.animated
    }

    /// Feed one intersection ratio. Returns the transition only for the first
    /// ratio that meets the threshold; later signals are ignored.
    pub fn observe(&mut self, ratio: f64) -> Option<Transition> {
        if !self.is_watching() || ratio.is_nan() || ratio < self.config.threshold {
            return None;
        }
        self.trigger()
    }

    /// Reveal without waiting for a visibility signal.
    pub fn trigger(&mut self) -> Option<Transition> {
        if !self.is_watching() {
            return None;
        }
        self.watch = Watch::Triggered;
        self.visibility = Visibility::Visible;
        self.animated = true;
        let transition = Transition::from_motion(&self.config.motion);
        debug!("reveal triggered: {}", transition.css());
        Some(transition)
    }

    /// Show the content unanimated when visibility can't be observed.
    pub fn fail_open(&mut self) -> bool {
        if !self.is_watching() {
            return false;
        }
        self.watch = Watch::Triggered;
        self.visibility = Visibility::Visible;
        debug!("reveal failed open, showing content without animation");
        true
    }

    /// Inline style for the current state.
    pub fn style(&self) -> String {
        match (self.visibility, self.animated) {
            (Visibility::Hidden, _) => format!(
                "opacity: 0; transform: {};",
                self.config.motion.offset.transform()
            ),
            (Visibility::Visible, true) => format!(
                "opacity: 1; transform: none; transition: {};",
                Transition::from_motion(&self.config.motion).css()
            ),
            (Visibility::Visible, false) => "opacity: 1; transform: none;".to_string(),
        }
    }
}

impl Default for RevealController {
    fn default() -> Self {
        Self::new(RevealConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_defaults() {
        let config = RevealConfig::default();
        assert_eq!(config.threshold(), 0.1);
        assert!(config.trigger_once());
        assert_eq!(config.motion().duration_secs, 0.8);
        assert_eq!(config.motion().delay_secs, 0.0);
        assert_eq!(config.motion().offset, Offset::Y(50.0));
        assert_eq!(config.motion().easing, Easing::EaseOut);
    }

    #[test]
    fn test_config_clamps_out_of_range_values() {
        assert_eq!(RevealConfig::scroll(0.0, 1.5).threshold(), 1.0);
        assert_eq!(RevealConfig::scroll(0.0, -0.2).threshold(), 0.0);
        assert_eq!(RevealConfig::scroll(0.0, f64::NAN).threshold(), DEFAULT_THRESHOLD);
        assert_eq!(RevealConfig::scroll(-1.0, 0.1).motion().delay_secs, 0.0);
        assert_eq!(RevealConfig::scroll(f64::NAN, 0.1).motion().delay_secs, 0.0);
    }

    #[test]
    fn test_scroll_into_view_scenario() {
        let mut controller = RevealController::new(RevealConfig::scroll(0.2, 0.1));
        assert_eq!(controller.visibility(), Visibility::Hidden);

        assert!(controller.observe(0.05).is_none());
        assert_eq!(controller.visibility(), Visibility::Hidden);
        assert!(controller.is_watching());

        let transition = controller.observe(0.15).expect("qualifying ratio reveals");
        assert_eq!(controller.visibility(), Visibility::Visible);
        assert!(!controller.is_watching());
        assert_eq!(transition.delay_secs, 0.2);
        assert_eq!(transition.duration_secs, 0.8);
        assert_eq!(transition.easing, Easing::EaseOut);
    }

    #[test]
    fn test_ratio_equal_to_threshold_reveals() {
        let mut controller = RevealController::new(RevealConfig::scroll(0.0, 0.5));
        assert!(controller.observe(0.5).is_some());
    }

    #[test]
    fn test_nan_ratio_is_ignored() {
        let mut controller = RevealController::new(RevealConfig::scroll(0.0, 0.0));
        assert!(controller.observe(f64::NAN).is_none());
        assert_eq!(controller.visibility(), Visibility::Hidden);
    }

    #[test]
    fn test_styles_follow_state() {
        let mut controller = RevealController::new(RevealConfig::scroll(0.2, 0.1));
        assert_eq!(controller.style(), "opacity: 0; transform: translateY(50px);");

        controller.observe(1.0);
        assert_eq!(
            controller.style(),
            "opacity: 1; transform: none; transition: opacity 0.8s ease-out 0.2s, transform 0.8s ease-out 0.2s;"
        );
    }

    #[test]
    fn test_horizontal_entrance_style() {
        let motion = Motion::new(Offset::X(100.0), 1.2, 0.0);
        let mut controller = RevealController::new(RevealConfig::new(motion, DEFAULT_THRESHOLD));
        assert_eq!(controller.style(), "opacity: 0; transform: translateX(100px);");
        let transition = controller.trigger().unwrap();
        assert_eq!(transition.css(), "opacity 1.2s ease-out 0s, transform 1.2s ease-out 0s");
    }

    #[test]
    fn test_fail_open_shows_content_without_animation() {
        let mut controller = RevealController::new(RevealConfig::scroll(0.3, 0.1));
        assert!(controller.fail_open());
        assert_eq!(controller.visibility(), Visibility::Visible);
        assert!(!controller.is_animated());
        assert_eq!(controller.style(), "opacity: 1; transform: none;");

        // Already shown, nothing left to animate.
        assert!(!controller.fail_open());
        assert!(controller.observe(1.0).is_none());
        assert!(controller.trigger().is_none());
    }

    #[test]
    fn test_fail_open_after_reveal_keeps_animation() {
        let mut controller = RevealController::default();
        controller.observe(0.9);
        assert!(!controller.fail_open());
        assert!(controller.is_animated());
    }

    fn delays() -> impl Strategy<Value = f64> {
        0.0f64..10.0
    }

    fn thresholds() -> impl Strategy<Value = f64> {
        0.0f64..=1.0
    }

    proptest! {
        #[test]
        fn prop_hidden_until_threshold_met(
            delay in delays(),
            threshold in thresholds(),
            fractions in prop::collection::vec(0.0f64..0.99, 0..20),
        ) {
            prop_assume!(threshold > 0.0);
            let mut controller = RevealController::new(RevealConfig::scroll(delay, threshold));
            for fraction in fractions {
                prop_assert!(controller.observe(threshold * fraction).is_none());
                prop_assert_eq!(controller.visibility(), Visibility::Hidden);
            }
            prop_assert!(controller.observe(threshold).is_some());
            prop_assert_eq!(controller.visibility(), Visibility::Visible);
        }

        #[test]
        fn prop_visible_is_monotonic(
            delay in delays(),
            threshold in thresholds(),
            ratios in prop::collection::vec(0.0f64..=1.0, 0..30),
        ) {
            let mut controller = RevealController::new(RevealConfig::scroll(delay, threshold));
            controller.observe(1.0);
            for ratio in ratios {
                controller.observe(ratio);
                controller.observe(0.0);
                prop_assert_eq!(controller.visibility(), Visibility::Visible);
            }
        }

        #[test]
        fn prop_at_most_one_transition(
            delay in delays(),
            threshold in thresholds(),
            ratios in prop::collection::vec(0.0f64..=1.0, 0..30),
        ) {
            let mut controller = RevealController::new(RevealConfig::scroll(delay, threshold));
            let started = ratios
                .into_iter()
                .chain(std::iter::repeat(1.0).take(3))
                .filter_map(|ratio| controller.observe(ratio))
                .count();
            prop_assert_eq!(started, 1);
        }
    }
}
