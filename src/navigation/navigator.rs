//! Animated navigation on top of a [`ViewportControl`]
//!
//! Every operation either applies its target immediately (zero duration) or
//! starts a batch of [`ViewportAnimation`] entries that the caller advances
//! with [`Navigator::update_animations`] once per frame. At most one batch is
//! active: starting a new navigation first stops the running one, snapping
//! it to its end values.

use crate::animation::engine::{Animation, AnimationEntry};
use crate::animation::interpolation::EasingFunction;
use crate::core::bounds::Bounds;
use crate::core::config::{NavigationProfile, NavigatorConfig};
use crate::core::geo::Point;
use crate::core::viewport::{normalize_rotation, Viewport};
use crate::navigation::animations::ViewportAnimation;
use crate::navigation::zoom::{zoom_in_resolution, zoom_out_resolution, ScaleMethod};
use crate::traits::ViewportControl;
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::time::Duration;

/// How the viewport changed, as reported to navigator subscribers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeType {
    /// A final state was reached: a jump, a completed or a stopped animation
    Discrete,
    /// An intermediate animation frame or gesture step
    Continuous,
}

/// Drives a viewport with discrete jumps, animations and gestures
#[derive(Debug)]
pub struct Navigator<V: ViewportControl> {
    viewport: V,
    config: NavigatorConfig,
    animation: Option<Animation<ViewportAnimation>>,
    listeners: Vec<Sender<ChangeType>>,
}

impl<V: ViewportControl> Navigator<V> {
    pub fn new(viewport: V) -> Self {
        Self::with_config(viewport, NavigatorConfig::default())
    }

    pub fn with_config(viewport: V, config: NavigatorConfig) -> Self {
        Self {
            viewport,
            config,
            animation: None,
            listeners: Vec::new(),
        }
    }

    pub fn with_profile(viewport: V, profile: NavigationProfile) -> Self {
        Self::with_config(viewport, profile.resolve())
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: NavigatorConfig) {
        self.config = config;
    }

    /// Current viewport state
    pub fn viewport(&self) -> &Viewport {
        self.viewport.viewport()
    }

    pub fn inner(&self) -> &V {
        &self.viewport
    }

    /// Direct access to the controlled viewport; bypasses notifications
    pub fn inner_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    pub fn into_inner(self) -> V {
        self.viewport
    }

    pub fn subscribe(&mut self) -> Receiver<ChangeType> {
        let (tx, rx) = unbounded();
        self.listeners.push(tx);
        rx
    }

    pub fn is_animating(&self) -> bool {
        self.animation
            .as_ref()
            .map_or(false, |animation| animation.is_running())
    }

    /// Entries of the running batch that have not finished yet
    pub fn active_animation_count(&self) -> usize {
        self.animation
            .as_ref()
            .map_or(0, |animation| animation.active_count())
    }

    /// Shows `extent` centered, scaled according to `scale_method`
    pub fn navigate_to_extent(
        &mut self,
        extent: &Bounds,
        scale_method: ScaleMethod,
        duration: Option<Duration>,
        easing: Option<EasingFunction>,
    ) {
        let viewport = self.viewport.viewport();
        if !viewport.has_size() {
            log::debug!("navigate_to_extent ignored: viewport has no size");
            return;
        }
        let resolution = scale_method.resolution(extent, viewport.width(), viewport.height());
        if !resolution.is_finite() || resolution <= 0.0 {
            log::debug!("navigate_to_extent ignored: unusable resolution {}", resolution);
            return;
        }
        self.navigate_to(extent.center(), resolution, duration, easing);
    }

    /// Shows the full map extent, if the viewport knows one
    pub fn navigate_to_full_extent(
        &mut self,
        scale_method: ScaleMethod,
        duration: Option<Duration>,
        easing: Option<EasingFunction>,
    ) {
        let Some(extent) = self.viewport.map().and_then(|map| map.extent) else {
            log::debug!("navigate_to_full_extent ignored: no map extent");
            return;
        };
        self.navigate_to_extent(&extent, scale_method, duration, easing);
    }

    pub fn navigate_to(
        &mut self,
        center: Point,
        resolution: f64,
        duration: Option<Duration>,
        easing: Option<EasingFunction>,
    ) {
        debug_assert!(
            resolution.is_finite() && resolution > 0.0,
            "resolution must be finite and positive, got {}",
            resolution
        );
        self.stop_running_animations(true);

        let (duration, easing) = self.timing(duration, easing);
        let viewport = self.viewport.viewport();
        let mut entries = Vec::with_capacity(2);
        if viewport.center() != center {
            entries.push(
                AnimationEntry::new("center", ViewportAnimation::center(viewport.center(), center))
                    .easing(easing),
            );
        }
        if viewport.resolution() != resolution {
            entries.push(
                AnimationEntry::new(
                    "resolution",
                    ViewportAnimation::resolution(viewport.resolution(), resolution),
                )
                .easing(easing),
            );
        }
        self.start(entries, duration);
    }

    pub fn zoom_to(
        &mut self,
        resolution: f64,
        duration: Option<Duration>,
        easing: Option<EasingFunction>,
    ) {
        self.stop_running_animations(true);
        let center = self.viewport.viewport().center();
        self.navigate_to(center, resolution, duration, easing);
    }

    /// Zooms keeping the world point under the screen position
    /// `center_of_zoom` fixed
    pub fn zoom_to_at(
        &mut self,
        resolution: f64,
        center_of_zoom: Point,
        duration: Option<Duration>,
        easing: Option<EasingFunction>,
    ) {
        // settle first so the anchor is computed from the final state
        self.stop_running_animations(true);

        let viewport = self.viewport.viewport();
        let zoom_world = viewport.screen_to_world(&center_of_zoom);
        let ratio = resolution / viewport.resolution();
        let center = zoom_world.subtract(&zoom_world.subtract(&viewport.center()).multiply(ratio));
        self.navigate_to(center, resolution, duration, easing);
    }

    pub fn zoom_in(&mut self, duration: Option<Duration>, easing: Option<EasingFunction>) {
        self.stop_running_animations(true);
        let resolution = zoom_in_resolution(self.viewport().resolution(), self.resolutions());
        self.zoom_to(resolution, duration, easing);
    }

    pub fn zoom_out(&mut self, duration: Option<Duration>, easing: Option<EasingFunction>) {
        self.stop_running_animations(true);
        let resolution = zoom_out_resolution(self.viewport().resolution(), self.resolutions());
        self.zoom_to(resolution, duration, easing);
    }

    pub fn zoom_in_at(
        &mut self,
        center_of_zoom: Point,
        duration: Option<Duration>,
        easing: Option<EasingFunction>,
    ) {
        self.stop_running_animations(true);
        let resolution = zoom_in_resolution(self.viewport().resolution(), self.resolutions());
        self.zoom_to_at(resolution, center_of_zoom, duration, easing);
    }

    pub fn zoom_out_at(
        &mut self,
        center_of_zoom: Point,
        duration: Option<Duration>,
        easing: Option<EasingFunction>,
    ) {
        self.stop_running_animations(true);
        let resolution = zoom_out_resolution(self.viewport().resolution(), self.resolutions());
        self.zoom_to_at(resolution, center_of_zoom, duration, easing);
    }

    pub fn center_on(
        &mut self,
        center: Point,
        duration: Option<Duration>,
        easing: Option<EasingFunction>,
    ) {
        self.stop_running_animations(true);

        let (duration, easing) = self.timing(duration, easing);
        let current = self.viewport.viewport().center();
        let mut entries = Vec::with_capacity(1);
        if current != center {
            entries.push(
                AnimationEntry::new("center", ViewportAnimation::center(current, center))
                    .easing(easing),
            );
        }
        self.start(entries, duration);
    }

    /// Moves to `center`, zooming out to `max_resolution` on the way and back
    /// to the current resolution on arrival. A zero duration only centers.
    pub fn fly_to(&mut self, center: Point, max_resolution: f64, duration: Option<Duration>) {
        self.stop_running_animations(true);

        let duration = duration.unwrap_or_else(|| self.config.fly_to_duration());
        if duration.is_zero() {
            self.center_on(center, Some(Duration::ZERO), None);
            return;
        }

        let viewport = self.viewport.viewport();
        let start_resolution = viewport.resolution();
        let entries = vec![
            AnimationEntry::new("center", ViewportAnimation::center(viewport.center(), center))
                .easing(EasingFunction::EaseInOutSine),
            AnimationEntry::new(
                "zoom out",
                ViewportAnimation::resolution(start_resolution, max_resolution),
            )
            .window(0.0, 0.5)
            .easing(EasingFunction::EaseInSine),
            AnimationEntry::new(
                "zoom in",
                ViewportAnimation::resolution(max_resolution, start_resolution),
            )
            .window(0.5, 1.0)
            .easing(EasingFunction::EaseOutSine),
        ];
        self.start(entries, duration);
    }

    /// Rotates along the shortest path to `rotation` degrees
    pub fn rotate_to(
        &mut self,
        rotation: f64,
        duration: Option<Duration>,
        easing: Option<EasingFunction>,
    ) {
        self.stop_running_animations(true);

        let (duration, easing) = self.timing(duration, easing);
        let current = self.viewport.viewport().rotation();
        let mut entries = Vec::with_capacity(1);
        if current != normalize_rotation(rotation) {
            entries.push(
                AnimationEntry::new("rotation", ViewportAnimation::rotation(current, rotation))
                    .easing(easing),
            );
        }
        self.start(entries, duration);
    }

    /// Momentum pan after a swipe with the given screen velocity in pixels
    /// per second. Slow swipes are ignored and leave running animations alone.
    pub fn fling_with(&mut self, velocity_x: f64, velocity_y: f64, max_duration: Duration) {
        let fling = &self.config.fling;
        let magnitude = velocity_x.hypot(velocity_y);
        if !magnitude.is_finite() || magnitude < fling.min_velocity {
            log::debug!("fling ignored: velocity {:.1} px/s too low", magnitude);
            return;
        }

        let millis = (magnitude / fling.velocity_divisor).min(max_duration.as_secs_f64() * 1000.0);
        let duration = Duration::from_secs_f64(millis / 1000.0);
        if duration < fling.frame() {
            log::debug!("fling ignored: duration {:?} shorter than a frame", duration);
            return;
        }

        // the map moves opposite to the finger
        let velocity = Point::new(-velocity_x, -velocity_y);
        let entry = AnimationEntry::new("fling", ViewportAnimation::fling(velocity, fling.frame()))
            .easing(fling.easing);

        self.stop_running_animations(true);
        self.start(vec![entry], duration);
    }

    /// Stops the running batch. With `call_final` the viewport snaps to the
    /// end values, otherwise it stays where the last frame left it.
    ///
    /// Stopping a running batch always emits one `Discrete`, even when the
    /// viewport did not move, so a run of `Continuous` frames is always
    /// closed. Calling this while idle emits nothing.
    pub fn stop_running_animations(&mut self, call_final: bool) {
        let Some(mut animation) = self.animation.take() else {
            return;
        };
        if animation.is_running() {
            log::debug!(
                "stopping {} running animation(s), call_final = {}",
                animation.active_count(),
                call_final
            );
            animation.stop(&mut self.viewport, call_final);
            self.notify(ChangeType::Discrete);
        }
    }

    /// Advances the running batch by `elapsed`; returns whether it is still
    /// running afterwards
    pub fn update_animations(&mut self, elapsed: Duration) -> bool {
        let Some(animation) = self.animation.as_mut() else {
            return false;
        };
        let update = animation.update(&mut self.viewport, elapsed);
        log::trace!("animation frame +{:?}: {:?}", elapsed, update);

        if update.running {
            if update.changed {
                self.notify(ChangeType::Continuous);
            }
        } else {
            self.animation = None;
            self.notify(ChangeType::Discrete);
        }
        update.running
    }

    /// One-finger drag step between two screen positions
    pub fn drag(&mut self, position: Point, previous: Point) {
        self.pinch(position, previous, 1.0, 0.0);
    }

    /// Two-finger gesture step, see [`Viewport::transform`]. Interrupts any
    /// running animation where it is.
    pub fn pinch(
        &mut self,
        position: Point,
        previous: Point,
        delta_resolution: f64,
        delta_rotation: f64,
    ) {
        self.stop_running_animations(false);
        self.viewport
            .transform(&position, &previous, delta_resolution, delta_rotation);
        self.notify(ChangeType::Continuous);
    }

    /// Resizes the screen without touching running animations
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.viewport.set_size(width, height);
        self.notify(ChangeType::Discrete);
    }

    fn timing(
        &self,
        duration: Option<Duration>,
        easing: Option<EasingFunction>,
    ) -> (Duration, EasingFunction) {
        (
            duration.unwrap_or_else(|| self.config.default_duration()),
            easing.unwrap_or(self.config.default_easing),
        )
    }

    fn resolutions(&self) -> &[f64] {
        self.viewport
            .map()
            .map_or(&[][..], |map| map.resolutions.as_slice())
    }

    fn start(&mut self, entries: Vec<AnimationEntry<ViewportAnimation>>, duration: Duration) {
        if entries.is_empty() {
            return;
        }

        let mut animation = Animation::new(entries, duration);
        if duration.is_zero() {
            animation.update(&mut self.viewport, Duration::ZERO);
            self.notify(ChangeType::Discrete);
            return;
        }

        log::debug!(
            "starting animation over {:?}: {}",
            duration,
            animation
                .entries()
                .iter()
                .map(|entry| entry.animator.kind())
                .collect::<Vec<_>>()
                .join(", ")
        );
        self.animation = Some(animation);
    }

    fn notify(&mut self, change: ChangeType) {
        self.listeners.retain(|tx| tx.send(change).is_ok());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn navigator() -> Navigator<Viewport> {
        Navigator::new(Viewport::new(Point::new(0.0, 0.0), 1.0, 100.0, 100.0))
    }

    fn ms(millis: u64) -> Option<Duration> {
        Some(Duration::from_millis(millis))
    }

    fn run_to_end(navigator: &mut Navigator<Viewport>) -> usize {
        let mut frames = 0;
        while navigator.update_animations(FRAME) {
            frames += 1;
            assert!(frames < 10_000, "animation never finished");
        }
        frames
    }

    #[test]
    fn test_discrete_center_on() {
        let mut navigator = navigator();
        let rx = navigator.subscribe();

        navigator.center_on(Point::new(10.0, 10.0), ms(0), None);

        assert_eq!(navigator.viewport().center(), Point::new(10.0, 10.0));
        assert_eq!(navigator.active_animation_count(), 0);
        assert!(!navigator.is_animating());
        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![ChangeType::Discrete]);
    }

    #[test]
    fn test_discrete_navigate_to_is_exact() {
        let mut navigator = navigator();
        navigator.navigate_to(Point::new(-3.25, 1e7), 0.123, ms(0), None);
        assert_eq!(navigator.viewport().center(), Point::new(-3.25, 1e7));
        assert_eq!(navigator.viewport().resolution(), 0.123);
        assert!(!navigator.is_animating());
    }

    #[test]
    fn test_navigate_to_skips_properties_already_at_target() {
        let mut navigator = navigator();
        navigator.navigate_to(Point::new(0.0, 0.0), 4.0, ms(300), None);
        assert_eq!(navigator.active_animation_count(), 1);

        let rx = navigator.subscribe();
        navigator.stop_running_animations(true);
        navigator.navigate_to(Point::new(0.0, 0.0), 4.0, ms(300), None);
        assert_eq!(navigator.active_animation_count(), 0);
        assert_eq!(rx.try_iter().count(), 1, "only the stop is reported");
    }

    #[test]
    fn test_animated_navigation_converges_exactly() {
        let mut navigator = navigator();
        let rx = navigator.subscribe();
        let target = Point::new(123.456, -78.9);

        navigator.navigate_to(target, 0.3, ms(250), Some(EasingFunction::EaseInOutCubic));
        assert!(navigator.is_animating());
        assert_eq!(navigator.active_animation_count(), 2);

        let frames = run_to_end(&mut navigator);
        assert!(frames > 10);
        assert_eq!(navigator.viewport().center(), target);
        assert_eq!(navigator.viewport().resolution(), 0.3);

        let changes: Vec<_> = rx.try_iter().collect();
        assert_eq!(changes.last(), Some(&ChangeType::Discrete));
        assert!(changes[..changes.len() - 1]
            .iter()
            .all(|change| *change == ChangeType::Continuous));
    }

    #[test]
    fn test_new_navigation_finishes_previous_batch() {
        let mut navigator = navigator();
        navigator.zoom_to(8.0, ms(300), None);
        navigator.update_animations(FRAME);

        navigator.center_on(Point::new(5.0, 5.0), ms(0), None);
        assert_eq!(navigator.viewport().resolution(), 8.0);
        assert_eq!(navigator.viewport().center(), Point::new(5.0, 5.0));
    }

    #[test]
    fn test_stop_without_final_leaves_intermediate_state() {
        let mut navigator = navigator();
        navigator.zoom_to(3.0, ms(100), Some(EasingFunction::Linear));
        navigator.update_animations(Duration::from_millis(50));
        navigator.stop_running_animations(false);

        assert!((navigator.viewport().resolution() - 2.0).abs() < 1e-9);
        assert!(!navigator.is_animating());
        assert!(!navigator.update_animations(FRAME));
    }

    #[test]
    fn test_every_stop_closes_with_discrete() {
        let mut navigator = navigator();
        let rx = navigator.subscribe();
        navigator.center_on(Point::new(100.0, 0.0), ms(100), None);
        navigator.update_animations(FRAME);
        let after_frame = navigator.viewport().center();
        rx.try_iter().for_each(drop);

        navigator.stop_running_animations(false);
        assert_eq!(navigator.viewport().center(), after_frame);
        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![ChangeType::Discrete]);

        navigator.stop_running_animations(false);
        navigator.stop_running_animations(true);
        assert_eq!(rx.try_iter().count(), 0);
    }

    #[test]
    fn test_zoom_to_settles_running_pan_first() {
        let mut navigator = navigator();
        navigator.center_on(Point::new(100.0, 0.0), ms(100), None);
        navigator.update_animations(FRAME);

        navigator.zoom_to(2.0, ms(0), None);
        assert_eq!(navigator.viewport().center(), Point::new(100.0, 0.0));
        assert_eq!(navigator.viewport().resolution(), 2.0);
    }

    #[test]
    fn test_default_duration_from_config() {
        let mut navigator = Navigator::with_profile(
            Viewport::new(Point::new(0.0, 0.0), 1.0, 100.0, 100.0),
            NavigationProfile::Instant,
        );
        navigator.zoom_to(2.0, None, None);
        assert_eq!(navigator.viewport().resolution(), 2.0);
        assert!(!navigator.is_animating());

        let mut navigator = self::navigator();
        navigator.zoom_to(2.0, None, None);
        assert!(navigator.is_animating());
        navigator.update_animations(Duration::from_millis(299));
        assert!(navigator.is_animating());
        assert!(!navigator.update_animations(Duration::from_millis(1)));
    }

    #[test]
    fn test_zoom_to_at_keeps_anchor() {
        let mut navigator = navigator();
        navigator.inner_mut().set_rotation(30.0);
        let anchor_screen = Point::new(80.0, 25.0);
        let anchor_world = navigator.viewport().screen_to_world(&anchor_screen);

        navigator.zoom_to_at(0.25, anchor_screen, ms(0), None);

        assert_eq!(navigator.viewport().resolution(), 0.25);
        let screen = navigator.viewport().world_to_screen(&anchor_world);
        assert!(screen.distance_to(&anchor_screen) < 1e-9, "{:?}", screen);
    }

    #[test]
    fn test_zoom_steps_without_map() {
        let mut navigator = navigator();
        navigator.zoom_in(ms(0), None);
        assert_eq!(navigator.viewport().resolution(), 0.5);
        navigator.zoom_out(ms(0), None);
        navigator.zoom_out(ms(0), None);
        assert_eq!(navigator.viewport().resolution(), 2.0);
    }

    #[test]
    fn test_zoom_in_at_keeps_anchor() {
        let mut navigator = navigator();
        let anchor_screen = Point::new(10.0, 90.0);
        let anchor_world = navigator.viewport().screen_to_world(&anchor_screen);

        navigator.zoom_in_at(anchor_screen, ms(0), None);
        assert_eq!(navigator.viewport().resolution(), 0.5);
        let screen = navigator.viewport().world_to_screen(&anchor_world);
        assert!(screen.distance_to(&anchor_screen) < 1e-9);
    }

    #[test]
    fn test_navigate_to_extent() {
        let mut navigator = navigator();
        let extent = Bounds::from_coords(0.0, 0.0, 400.0, 100.0);

        navigator.navigate_to_extent(&extent, ScaleMethod::Fit, ms(0), None);
        assert_eq!(navigator.viewport().center(), Point::new(200.0, 50.0));
        assert_eq!(navigator.viewport().resolution(), 4.0);
        assert!(navigator.viewport().extent().contains_bounds(&extent));

        navigator.navigate_to_extent(&extent, ScaleMethod::Fill, ms(0), None);
        assert_eq!(navigator.viewport().resolution(), 1.0);
    }

    #[test]
    fn test_navigate_to_extent_ignored_without_size() {
        let mut navigator = Navigator::new(Viewport::default());
        navigator.navigate_to_extent(
            &Bounds::from_coords(0.0, 0.0, 10.0, 10.0),
            ScaleMethod::Fit,
            ms(0),
            None,
        );
        assert_eq!(navigator.viewport().center(), Point::new(0.0, 0.0));
        assert_eq!(navigator.viewport().resolution(), 1.0);

        // a degenerate extent gives a zero resolution
        let mut navigator = self::navigator();
        navigator.navigate_to_extent(
            &Bounds::from_coords(5.0, 5.0, 5.0, 5.0),
            ScaleMethod::Fit,
            ms(0),
            None,
        );
        assert_eq!(navigator.viewport().center(), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_full_extent_needs_map() {
        let mut navigator = navigator();
        navigator.navigate_to_full_extent(ScaleMethod::Fit, ms(0), None);
        assert_eq!(navigator.viewport().center(), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_rotate_to_wraps_forward() {
        let mut navigator = navigator();
        navigator.inner_mut().set_rotation(350.0);
        navigator.rotate_to(10.0, ms(0), None);
        assert_eq!(navigator.viewport().rotation(), 10.0);

        navigator.inner_mut().set_rotation(350.0);
        navigator.rotate_to(10.0, ms(100), Some(EasingFunction::Linear));
        let mut seen = Vec::new();
        while navigator.update_animations(Duration::from_millis(10)) {
            seen.push(navigator.viewport().rotation());
        }
        assert!(seen
            .iter()
            .all(|rotation| *rotation >= 350.0 - 1e-9 || *rotation <= 10.0 + 1e-9));
        assert_eq!(navigator.viewport().rotation(), 10.0);
    }

    #[test]
    fn test_fly_to_phases() {
        let mut navigator = navigator();
        navigator.fly_to(Point::new(1000.0, 0.0), 64.0, None);

        assert!(navigator.update_animations(Duration::from_millis(500)));
        let quarter = navigator.viewport().resolution();
        assert!(quarter > 1.0 && quarter < 64.0);

        navigator.update_animations(Duration::from_millis(500));
        assert_eq!(navigator.viewport().resolution(), 64.0);

        assert!(!navigator.update_animations(Duration::from_millis(1000)));
        assert_eq!(navigator.viewport().resolution(), 1.0);
        assert_eq!(navigator.viewport().center(), Point::new(1000.0, 0.0));
    }

    #[test]
    fn test_fly_to_without_duration_only_centers() {
        let mut navigator = navigator();
        navigator.fly_to(Point::new(7.0, 8.0), 64.0, ms(0));
        assert_eq!(navigator.viewport().center(), Point::new(7.0, 8.0));
        assert_eq!(navigator.viewport().resolution(), 1.0);
    }

    #[test]
    fn test_slow_fling_is_rejected() {
        let mut navigator = navigator();
        navigator.center_on(Point::new(50.0, 0.0), ms(300), None);
        assert_eq!(navigator.active_animation_count(), 1);

        navigator.fling_with(5.0, 5.0, Duration::from_millis(1000));
        assert_eq!(navigator.active_animation_count(), 1);

        // fast enough but capped below one frame
        navigator.fling_with(500.0, 0.0, Duration::from_millis(10));
        assert_eq!(navigator.active_animation_count(), 1);
    }

    #[test]
    fn test_fling_moves_opposite_to_swipe_and_ends() {
        let mut navigator = navigator();
        navigator.fling_with(1000.0, 0.0, Duration::from_millis(1000));
        assert!(navigator.is_animating());

        let frames = run_to_end(&mut navigator);
        assert!(frames <= 100 / 16 + 1);
        let center = navigator.viewport().center();
        assert!(center.x < 0.0);
        assert_eq!(center.y, 0.0);
    }

    #[test]
    fn test_drag_interrupts_animation_in_place() {
        let mut navigator = navigator();
        let rx = navigator.subscribe();
        navigator.center_on(Point::new(100.0, 0.0), ms(100), Some(EasingFunction::Linear));
        navigator.update_animations(Duration::from_millis(50));

        navigator.drag(Point::new(60.0, 50.0), Point::new(50.0, 50.0));
        assert!(!navigator.is_animating());
        assert!((navigator.viewport().center().x - 40.0).abs() < 1e-9);
        assert_eq!(
            rx.try_iter().collect::<Vec<_>>(),
            vec![
                ChangeType::Continuous,
                ChangeType::Discrete,
                ChangeType::Continuous
            ]
        );
    }

    #[test]
    fn test_set_size_keeps_animation_running() {
        let mut navigator = navigator();
        navigator.zoom_to(2.0, ms(100), None);
        navigator.set_size(200.0, 50.0);
        assert!(navigator.is_animating());
        assert_eq!(navigator.viewport().width(), 200.0);
    }
}
