//! Hero slider state machine.
//!
//! Owns the slides, up to two background layers and the displayed text.
//! Everything is driven by `update(dt)`: layer animations, the completion
//! fallback and the auto-advance interval are all frame-advanced timers.

use std::time::Duration;

use tracing::{debug, trace};

use crate::constants::{AUTO_ADVANCE_INTERVAL, COMPLETION_FALLBACK, TRANSITION_DURATION};
use crate::layer::Layer;
use crate::slide::Slide;
use crate::state::{Direction, SliderState};
use crate::timer::Timer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderConfig {
    pub auto_advance: Duration,
    pub transition: Duration,
    pub completion_fallback: Duration,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            auto_advance: AUTO_ADVANCE_INTERVAL,
            transition: TRANSITION_DURATION,
            completion_fallback: COMPLETION_FALLBACK,
        }
    }
}

/// What the hero currently shows in its text block and dot row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeroText {
    pub title: String,
    pub subtitle: String,
    pub active_dot: usize,
}

#[derive(Debug)]
struct Transition {
    target: usize,
    incoming: usize,
    outgoing: usize,
    fallback: Timer,
    completed: bool,
}

pub struct HeroSlider {
    config: SliderConfig,
    slides: Vec<Slide>,
    layers: Vec<Layer>,
    text: HeroText,

    current_index: usize,
    active_layer: usize,
    state: SliderState,
    pending_target: Option<usize>,
    transition: Option<Transition>,
    auto_advance: Option<Timer>,

    transitions_completed: u64,
}

impl HeroSlider {
    /// Shows slide 0 without animation and starts auto-advance.
    /// Returns `None` when there is nothing to show.
    pub fn initialize(slides: Vec<Slide>, layer_count: usize, config: SliderConfig) -> Option<Self> {
        if slides.is_empty() {
            debug!("hero has no slides, slider not started");
            return None;
        }

        let mut slider = Self {
            config,
            slides,
            layers: (0..layer_count.min(2)).map(|_| Layer::new()).collect(),
            text: HeroText::default(),
            current_index: 0,
            active_layer: 0,
            state: SliderState::Resting,
            pending_target: None,
            transition: None,
            auto_advance: None,
            transitions_completed: 0,
        };

        let background = slider.slides[0].background.clone();
        if let Some(layer) = slider.layers.first_mut() {
            layer.set_background(&background);
            layer.place(0.0, 1.0);
        }
        slider.render_text(0);
        slider.start();

        debug!(slides = slider.slides.len(), layers = slider.layers.len(), "hero slider initialized");
        Some(slider)
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn active_layer(&self) -> usize {
        self.active_layer
    }

    pub fn is_animating(&self) -> bool {
        self.state == SliderState::Transitioning
    }

    pub fn pending_target(&self) -> Option<usize> {
        self.pending_target
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn text(&self) -> &HeroText {
        &self.text
    }

    pub fn transitions_completed(&self) -> u64 {
        self.transitions_completed
    }

    /// Time until the next automatic advance, `None` while stopped.
    pub fn auto_advance_remaining(&self) -> Option<Duration> {
        self.auto_advance.as_ref().map(Timer::remaining)
    }

    /// (Re)starts auto-advance with a full interval.
    pub fn start(&mut self) {
        self.stop();
        self.auto_advance = Some(Timer::repeating(self.config.auto_advance));
    }

    pub fn stop(&mut self) {
        self.auto_advance = None;
    }

    pub fn go_to(&mut self, target: usize) {
        let target = target % self.slides.len();
        if target == self.current_index {
            return;
        }
        if self.is_animating() {
            // Only the latest request survives
            trace!(to = target, "queued while animating");
            self.pending_target = Some(target);
            return;
        }
        self.begin_transition(target);
    }

    /// Dot click: the interval restarts from the selection.
    pub fn on_user_select(&mut self, target: usize) {
        self.stop();
        self.go_to(target);
        self.start();
    }

    pub fn update(&mut self, dt: Duration) {
        // Signals only count for the transition running when the frame began
        let running = self.transition.as_mut().map(|t| (t.incoming, t.fallback.tick(dt)));
        let signals: Vec<usize> = self.layers.iter_mut().map(|layer| layer.update(dt)).collect();

        if let Some((incoming, fallback_fired)) = running {
            if signals[incoming] > 0 {
                self.handle_transition_end(incoming);
            } else if fallback_fired {
                debug!("transition end signal missing, completing from fallback timer");
                self.complete_transition();
            }
        }

        let advance = self.auto_advance.as_mut().is_some_and(|timer| timer.tick(dt));
        if advance {
            self.go_to((self.current_index + 1) % self.slides.len());
        }
    }

    /// End-of-transition signal for `layer`. Only the incoming layer of the
    /// running transition counts.
    pub fn handle_transition_end(&mut self, layer: usize) {
        if self.transition.as_ref().is_some_and(|t| t.incoming == layer) {
            self.complete_transition();
        }
    }

    fn begin_transition(&mut self, target: usize) {
        let background = self.slides[target].background.clone();

        if self.layers.len() < 2 {
            if let Some(layer) = self.layers.first_mut() {
                layer.set_background(&background);
                layer.place(0.0, 1.0);
            }
            self.render_text(target);
            self.current_index = target;
            return;
        }

        let dir = Direction::between(self.current_index, target).sign();
        let incoming = 1 - self.active_layer;
        let outgoing = self.active_layer;

        // Positioned before any tween exists, so the jump is never animated.
        // The incoming layer stays opaque: only the outgoing one fades.
        let layer = &mut self.layers[incoming];
        layer.set_background(&background);
        layer.place(dir, 1.0);

        self.render_text(target);

        self.layers[incoming].animate_to(0.0, 1.0, self.config.transition);
        self.layers[outgoing].animate_to(-dir, 0.0, self.config.transition);

        self.transition = Some(Transition {
            target,
            incoming,
            outgoing,
            fallback: Timer::once(self.config.completion_fallback),
            completed: false,
        });
        self.state = SliderState::Transitioning;
        trace!(from = self.current_index, to = target, "transition started");
    }

    fn complete_transition(&mut self) {
        let Some(transition) = self.transition.as_mut() else {
            return;
        };
        if transition.completed {
            return;
        }
        transition.completed = true;
        let Transition { target, incoming, outgoing, .. } = *transition;
        self.transition = None;

        self.layers[outgoing].reset();
        self.layers[incoming].place(0.0, 1.0);
        self.active_layer = incoming;
        self.current_index = target;
        self.state = SliderState::Resting;
        self.transitions_completed += 1;
        trace!(index = target, layer = incoming, "transition completed");

        if let Some(pending) = self.pending_target.take() {
            if pending != self.current_index {
                self.begin_transition(pending);
            }
        }
    }

    fn render_text(&mut self, index: usize) {
        let slide = &self.slides[index];
        self.text = HeroText {
            title: slide.title.clone(),
            subtitle: slide.subtitle.clone(),
            active_dot: index,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const MS: Duration = Duration::from_millis(1);
    const STEP: Duration = Duration::from_millis(10);

    fn slides(names: &[&str]) -> Vec<Slide> {
        names
            .iter()
            .map(|n| Slide::new(n, &format!("{n} sub"), &format!("{}.jpg", n.to_lowercase())))
            .collect()
    }

    fn abc() -> HeroSlider {
        HeroSlider::initialize(slides(&["A", "B", "C"]), 2, SliderConfig::default()).unwrap()
    }

    fn advance(slider: &mut HeroSlider, total: Duration) {
        let mut elapsed = Duration::ZERO;
        while elapsed < total {
            slider.update(STEP);
            elapsed += STEP;
        }
    }

    fn visible_layers(slider: &HeroSlider) -> Vec<usize> {
        slider.layers().iter().enumerate().filter(|(_, l)| l.opacity() == 1.0).map(|(i, _)| i).collect()
    }

    fn assert_at_rest(slider: &HeroSlider) {
        assert!(!slider.is_animating());
        let layers = slider.layers();
        let active = slider.active_layer();
        assert_eq!(layers[active].opacity(), 1.0);
        assert_eq!(layers[1 - active].opacity(), 0.0);
        assert_eq!(layers[active].offset(), 0.0);
        assert_eq!(
            layers[active].background(),
            Some(slider.slides()[slider.current_index()].background.as_str())
        );
        assert_eq!(slider.text().title, slider.slides()[slider.current_index()].title);
    }

    #[test]
    fn empty_slides_do_not_initialize() {
        assert!(HeroSlider::initialize(Vec::new(), 2, SliderConfig::default()).is_none());
    }

    #[test]
    fn initialize_shows_first_slide_without_animation() {
        for n in 1..=4 {
            let names: Vec<String> = (0..n).map(|i| format!("S{i}")).collect();
            let names: Vec<&str> = names.iter().map(String::as_str).collect();
            let slider = HeroSlider::initialize(slides(&names), 2, SliderConfig::default()).unwrap();

            assert_eq!(slider.current_index(), 0);
            assert_eq!(visible_layers(&slider), vec![0]);
            assert_eq!(slider.layers()[0].background(), Some("s0.jpg"));
            assert!(!slider.layers().iter().any(Layer::is_animating));
            assert_eq!(slider.text().active_dot, 0);
            assert_eq!(slider.auto_advance_remaining(), Some(AUTO_ADVANCE_INTERVAL));
        }
    }

    #[test]
    fn go_to_current_is_a_no_op() {
        let mut slider = abc();
        slider.go_to(0);
        assert!(!slider.is_animating());
        assert_eq!(slider.pending_target(), None);

        slider.go_to(2);
        slider.go_to(0);
        assert_eq!(slider.pending_target(), None, "current index is still 0 while animating");
    }

    #[test]
    fn transition_completes_after_animation() {
        let mut slider = abc();
        slider.go_to(1);

        assert!(slider.is_animating());
        assert_eq!(slider.text().title, "B", "text switches when the transition starts");
        assert_eq!(slider.current_index(), 0);
        assert_eq!(slider.layers()[1].offset(), 1.0, "incoming enters from the right");

        advance(&mut slider, 690 * MS);
        assert!(slider.is_animating());
        advance(&mut slider, STEP);
        assert_eq!(slider.current_index(), 1);
        assert_eq!(slider.active_layer(), 1);
        assert_eq!(slider.transitions_completed(), 1);
        assert_at_rest(&slider);
    }

    #[test]
    fn incoming_layer_is_opaque_while_on_screen() {
        for target in [1, 0] {
            let mut slider = HeroSlider::initialize(slides(&["A", "B"]), 2, SliderConfig::default()).unwrap();
            if target == 0 {
                slider.go_to(1);
                advance(&mut slider, 700 * MS);
            }
            slider.go_to(target);
            let incoming = 1 - slider.active_layer();

            for _ in 0..7 {
                advance(&mut slider, 90 * MS);
                let layer = &slider.layers()[incoming];
                assert!(layer.offset().abs() < 1.0, "incoming layer has entered the frame");
                assert_eq!(layer.opacity(), 1.0, "offset {}", layer.offset());
            }
        }
    }

    #[test]
    fn requests_while_animating_coalesce_to_the_last_one() {
        let slide_names = ["A", "B", "C", "D"];
        let mut slider = HeroSlider::initialize(slides(&slide_names), 2, SliderConfig::default()).unwrap();
        slider.go_to(3);
        advance(&mut slider, 100 * MS);

        slider.go_to(1);
        slider.go_to(2);
        assert_eq!(slider.pending_target(), Some(2));

        advance(&mut slider, 600 * MS);
        assert_eq!(slider.current_index(), 3);
        assert_eq!(slider.transitions_completed(), 1);
        assert!(slider.is_animating(), "pending target chains immediately");
        assert_eq!(slider.pending_target(), None);
        assert_eq!(slider.text().title, "C");

        advance(&mut slider, 700 * MS);
        assert_eq!(slider.current_index(), 2);
        assert_eq!(slider.transitions_completed(), 2);
        assert_at_rest(&slider);
    }

    #[test]
    fn pending_equal_to_landing_index_is_dropped() {
        let mut slider = abc();
        slider.go_to(1);
        slider.go_to(2);
        slider.go_to(1);
        assert_eq!(slider.pending_target(), Some(1));

        advance(&mut slider, 700 * MS);
        assert_eq!(slider.current_index(), 1);
        assert!(!slider.is_animating());
        assert_eq!(slider.transitions_completed(), 1);
    }

    #[test]
    fn completion_runs_once_for_duplicate_signals() {
        let mut slider = abc();
        slider.go_to(1);
        slider.handle_transition_end(1);
        slider.handle_transition_end(1);
        assert_eq!(slider.transitions_completed(), 1);
        assert_at_rest(&slider);

        // The outgoing layer's tweens were reset and never signal
        advance(&mut slider, 1000 * MS);
        assert_eq!(slider.transitions_completed(), 1);
    }

    #[test]
    fn outgoing_layer_signal_is_ignored() {
        let mut slider = abc();
        slider.go_to(1);
        slider.handle_transition_end(0);
        assert!(slider.is_animating());
    }

    #[test]
    fn fallback_completes_when_end_signal_is_late() {
        let config = SliderConfig { transition: Duration::from_millis(2000), ..SliderConfig::default() };
        let mut slider = HeroSlider::initialize(slides(&["A", "B"]), 2, config).unwrap();
        slider.go_to(1);

        advance(&mut slider, 890 * MS);
        assert!(slider.is_animating());
        advance(&mut slider, STEP);
        assert!(!slider.is_animating());
        assert_eq!(slider.transitions_completed(), 1);
        assert_at_rest(&slider);
    }

    #[test]
    fn every_completed_transition_leaves_exactly_one_visible_layer() {
        let mut slider = abc();
        for target in [2, 0, 1, 2, 1, 0] {
            slider.go_to(target);
            advance(&mut slider, 700 * MS);
            assert_eq!(visible_layers(&slider), vec![slider.active_layer()]);
            assert_at_rest(&slider);
        }
    }

    #[test]
    fn auto_advance_visits_slides_in_order() {
        let mut slider = abc();
        let mut visited = Vec::new();
        let mut previous = slider.current_index();
        let mut elapsed = Duration::ZERO;
        while elapsed < 5 * AUTO_ADVANCE_INTERVAL + TRANSITION_DURATION {
            slider.update(STEP);
            elapsed += STEP;
            if slider.current_index() != previous {
                previous = slider.current_index();
                visited.push(previous);
            }
        }
        assert_eq!(visited, vec![1, 2, 0, 1, 2]);
    }

    #[test]
    fn wrap_to_first_slide_slides_backward() {
        // Raw index comparison: last -> 0 is treated as moving backward even
        // though auto-advance is going forward through the rotation.
        let mut slider = abc();
        slider.go_to(2);
        advance(&mut slider, 700 * MS);

        slider.go_to(0);
        let incoming = 1 - slider.active_layer();
        assert_eq!(slider.layers()[incoming].offset(), -1.0, "incoming enters from the left");
    }

    #[test]
    fn user_select_restarts_the_interval() {
        let mut slider = abc();
        advance(&mut slider, 3000 * MS);
        slider.on_user_select(2);
        assert_eq!(slider.auto_advance_remaining(), Some(AUTO_ADVANCE_INTERVAL));

        advance(&mut slider, 700 * MS);
        assert_eq!(slider.text().title, "C");
        assert_eq!(slider.layers()[slider.active_layer()].background(), Some("c.jpg"));
        assert_at_rest(&slider);

        // The original schedule (5000ms after initialize) must not fire
        advance(&mut slider, 1300 * MS);
        assert_eq!(slider.current_index(), 2);
        assert!(!slider.is_animating());

        advance(&mut slider, 3000 * MS);
        assert!(slider.is_animating(), "fires 5000ms after the selection");
        assert_eq!(slider.text().title, "A");
    }

    #[test]
    fn stop_halts_auto_advance() {
        let mut slider = abc();
        slider.stop();
        advance(&mut slider, 20_000 * MS);
        assert_eq!(slider.current_index(), 0);
        assert_eq!(slider.auto_advance_remaining(), None);
    }

    #[test]
    fn single_layer_swaps_instantly() {
        let mut slider = HeroSlider::initialize(slides(&["A", "B", "C"]), 1, SliderConfig::default()).unwrap();
        slider.go_to(2);
        assert!(!slider.is_animating());
        assert_eq!(slider.current_index(), 2);
        assert_eq!(slider.layers()[0].background(), Some("c.jpg"));
        assert_eq!(slider.layers()[0].opacity(), 1.0);
        assert_eq!(slider.text().title, "C");
    }

    #[test]
    fn no_layers_still_rotates_text() {
        let mut slider = HeroSlider::initialize(slides(&["A", "B"]), 0, SliderConfig::default()).unwrap();
        assert!(slider.layers().is_empty());
        advance(&mut slider, 5000 * MS);
        assert_eq!(slider.current_index(), 1);
        assert_eq!(slider.text().title, "B");
    }

    #[test]
    fn out_of_range_targets_wrap() {
        let mut slider = HeroSlider::initialize(slides(&["A", "B", "C"]), 1, SliderConfig::default()).unwrap();
        slider.go_to(4);
        assert_eq!(slider.current_index(), 1);
    }
}
