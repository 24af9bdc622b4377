//! Hero slide rotation.
//!
//! [`SlideRotator`] owns which slide is showing and whether autoplay is
//! running. It knows nothing about the DOM: the component renders from
//! [`SlideRotator::frame`] and [`SlideRotator::indicators`], and the repeating
//! timer is reached through the [`AutoplayTimer`] seam.

pub const DEFAULT_INTERVAL_MS: u32 = 5000;

/// A repeating timer that advances the rotator on every tick.
pub trait AutoplayTimer {
    /// Begin ticking every `interval_ms`. Callers disarm first.
    fn arm(&mut self, interval_ms: u32);
    /// Cancel the outstanding timer. No-op when nothing is armed.
    fn disarm(&mut self);
    fn is_armed(&self) -> bool;
}

/// What the slider needs to render: the active slide and how many times a
/// slide has been activated. The counter keys the content block so its
/// entrance animation restarts on every activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideFrame {
    pub current: usize,
    pub activation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicator {
    pub index: usize,
    pub label: String,
    pub active: bool,
}

pub struct SlideRotator<T: AutoplayTimer> {
    count: usize,
    current: usize,
    activation: u64,
    interval_ms: u32,
    timer: T,
}

impl<T: AutoplayTimer> SlideRotator<T> {
    /// Builds a rotator from the slides' "active" markers. Returns `None` for
    /// an empty slide set, which leaves the slider inert.
    ///
    /// The timer is not armed here; call [`start`](Self::start) once the
    /// slider is mounted.
    pub fn new(marked_active: &[bool], interval_ms: u32, timer: T) -> Option<Self> {
        if marked_active.is_empty() {
            return None;
        }
        Some(Self {
            count: marked_active.len(),
            current: initial_index(marked_active),
            activation: 0,
            interval_ms,
            timer,
        })
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.current
    }

    pub fn is_playing(&self) -> bool {
        self.timer.is_armed()
    }

    pub fn frame(&self) -> SlideFrame {
        SlideFrame {
            current: self.current,
            activation: self.activation,
        }
    }

    pub fn indicators(&self) -> Vec<Indicator> {
        indicators_for(self.count, self.current)
    }

    pub fn show(&mut self, index: usize) {
        self.current = index % self.count;
        self.activation = self.activation.wrapping_add(1);
    }

    pub fn next(&mut self) {
        self.show((self.current + 1) % self.count);
    }

    pub fn previous(&mut self) {
        self.show((self.current + self.count - 1) % self.count);
    }

    /// Jump to `index` and resume rotation from there.
    pub fn go_to(&mut self, index: usize) {
        self.show(index);
        self.start();
    }

    pub fn start(&mut self) {
        self.stop();
        self.timer.arm(self.interval_ms);
    }

    pub fn stop(&mut self) {
        if self.timer.is_armed() {
            self.timer.disarm();
        }
    }

    /// Arrow-key navigation. The stop/start bracket resets the autoplay
    /// countdown so a nearly due tick cannot fire right after a manual step.
    /// Returns `true` when the key moved the slider.
    pub fn handle_key(&mut self, key: &str, typing: bool) -> bool {
        if typing {
            return false;
        }
        match key {
            "ArrowRight" => {
                self.stop();
                self.next();
                self.start();
                true
            }
            "ArrowLeft" => {
                self.stop();
                self.previous();
                self.start();
                true
            }
            _ => false,
        }
    }
}

/// Position of the first slide already marked active, or 0.
pub fn initial_index(marked_active: &[bool]) -> usize {
    marked_active.iter().position(|active| *active).unwrap_or(0)
}

pub fn indicators_for(count: usize, current: usize) -> Vec<Indicator> {
    (0..count)
        .map(|index| Indicator {
            index,
            label: format!("Go to slide {}", index + 1),
            active: index == current,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every armed interval. Arming never replaces an earlier
    /// registration, so a missing disarm shows up as a second live timer.
    #[derive(Clone, Default)]
    struct ManualTimer {
        live: Rc<RefCell<Vec<u32>>>,
    }

    impl AutoplayTimer for ManualTimer {
        fn arm(&mut self, interval_ms: u32) {
            self.live.borrow_mut().push(interval_ms);
        }

        fn disarm(&mut self) {
            self.live.borrow_mut().clear();
        }

        fn is_armed(&self) -> bool {
            !self.live.borrow().is_empty()
        }
    }

    fn fixture(marked: &[bool]) -> (SlideRotator<ManualTimer>, ManualTimer) {
        let timer = ManualTimer::default();
        let rotator = SlideRotator::new(marked, DEFAULT_INTERVAL_MS, timer.clone())
            .expect("non-empty slide set");
        (rotator, timer)
    }

    /// Fires every live timer as many times as it would tick in `elapsed_ms`.
    fn advance(rotator: &mut SlideRotator<ManualTimer>, timer: &ManualTimer, elapsed_ms: u32) -> usize {
        let ticks: u32 = timer.live.borrow().iter().map(|every| elapsed_ms / every).sum();
        for _ in 0..ticks {
            rotator.next();
        }
        ticks as usize
    }

    fn active_slides(rotator: &SlideRotator<ManualTimer>) -> Vec<usize> {
        (0..rotator.len()).filter(|i| rotator.is_active(*i)).collect()
    }

    #[test]
    fn empty_slide_set_is_inert() {
        assert!(SlideRotator::new(&[], DEFAULT_INTERVAL_MS, ManualTimer::default()).is_none());
    }

    #[test]
    fn initial_index_prefers_first_marked_slide() {
        assert_eq!(initial_index(&[false, false, false]), 0);
        assert_eq!(initial_index(&[false, true, true]), 1);
        assert_eq!(initial_index(&[true]), 0);
    }

    #[test]
    fn initialization_leaves_exactly_one_active() {
        for n in 1..=6 {
            for marked_at in 0..n {
                let marked: Vec<bool> = (0..n).map(|i| i >= marked_at).collect();
                let (rotator, _) = fixture(&marked);
                assert_eq!(active_slides(&rotator), vec![marked_at]);
                let active: Vec<usize> = rotator
                    .indicators()
                    .iter()
                    .filter(|dot| dot.active)
                    .map(|dot| dot.index)
                    .collect();
                assert_eq!(active, vec![marked_at]);
            }
        }
    }

    #[test]
    fn indicators_are_labeled_one_based() {
        let dots = indicators_for(3, 0);
        let labels: Vec<&str> = dots.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, ["Go to slide 1", "Go to slide 2", "Go to slide 3"]);
        assert_eq!(dots.iter().map(|d| d.index).collect::<Vec<_>>(), [0, 1, 2]);
    }

    #[test]
    fn navigation_wraps_in_both_directions() {
        let (mut rotator, _) = fixture(&[false, false, false, false]);
        rotator.previous();
        assert_eq!(rotator.current(), 3);
        rotator.next();
        assert_eq!(rotator.current(), 0);

        for step in 0..25 {
            if step % 3 == 0 {
                rotator.previous();
            } else {
                rotator.next();
            }
            assert!(rotator.current() < rotator.len());
            assert_eq!(active_slides(&rotator).len(), 1);
        }
    }

    #[test]
    fn single_slide_stays_put() {
        let (mut rotator, _) = fixture(&[false]);
        rotator.next();
        assert_eq!(rotator.current(), 0);
        rotator.previous();
        assert_eq!(rotator.current(), 0);
    }

    #[test]
    fn second_marked_slide_then_next_twice_wraps() {
        let (mut rotator, _) = fixture(&[false, true, false]);
        let dots: Vec<bool> = rotator.indicators().iter().map(|d| d.active).collect();
        assert_eq!(dots, [false, true, false]);

        rotator.next();
        assert_eq!(active_slides(&rotator), vec![2]);
        rotator.next();
        assert_eq!(active_slides(&rotator), vec![0]);
    }

    #[test]
    fn double_start_keeps_a_single_timer() {
        let (mut rotator, timer) = fixture(&[false, false, false, false, false]);
        rotator.start();
        rotator.start();
        assert_eq!(timer.live.borrow().len(), 1);

        let ticks = advance(&mut rotator, &timer, 20_000);
        assert_eq!(ticks, 4);
        assert_eq!(rotator.current(), 4);
    }

    #[test]
    fn stop_is_idempotent() {
        let (mut rotator, _) = fixture(&[false, false]);
        rotator.start();
        rotator.stop();
        rotator.stop();
        assert!(!rotator.is_playing());

        let (mut never_started, _) = fixture(&[false, false]);
        never_started.stop();
        assert!(!never_started.is_playing());
    }

    #[test]
    fn go_to_always_resumes_autoplay() {
        let (mut rotator, timer) = fixture(&[false, false, false]);
        rotator.go_to(2);
        assert_eq!(rotator.current(), 2);
        assert!(rotator.is_playing());

        rotator.stop();
        rotator.go_to(1);
        assert_eq!(rotator.current(), 1);
        assert!(rotator.is_playing());
        assert_eq!(timer.live.borrow().len(), 1);
    }

    #[test]
    fn every_show_bumps_activation() {
        let (mut rotator, _) = fixture(&[false, false]);
        let before = rotator.frame().activation;
        rotator.show(0);
        rotator.show(0);
        assert_eq!(rotator.frame().activation, before + 2);
        assert_eq!(rotator.frame().current, 0);
    }

    #[test]
    fn arrow_keys_step_and_restart_autoplay() {
        let (mut rotator, timer) = fixture(&[true, false, false]);
        rotator.start();

        assert!(rotator.handle_key("ArrowRight", false));
        assert_eq!(rotator.current(), 1);
        assert!(rotator.handle_key("ArrowLeft", false));
        assert!(rotator.handle_key("ArrowLeft", false));
        assert_eq!(rotator.current(), 2);
        assert_eq!(timer.live.borrow().len(), 1);
    }

    #[test]
    fn keys_are_ignored_while_typing_or_unrelated() {
        let (mut rotator, _) = fixture(&[true, false, false]);
        assert!(!rotator.handle_key("ArrowRight", true));
        assert!(!rotator.handle_key("Enter", false));
        assert_eq!(rotator.current(), 0);
        assert!(!rotator.is_playing());
    }

    #[test]
    fn pause_then_resume_on_hover() {
        let (mut rotator, timer) = fixture(&[false, false, false]);
        rotator.start();
        rotator.stop();
        assert_eq!(advance(&mut rotator, &timer, 60_000), 0);
        assert_eq!(rotator.current(), 0);

        rotator.start();
        assert_eq!(advance(&mut rotator, &timer, 5_000), 1);
        assert_eq!(rotator.current(), 1);
    }
}
