use std::time::Duration;

use raylib::core::math::lerp;

/// Opacity of every slide, animated between the outgoing and incoming one.
#[derive(Debug, Clone)]
pub struct CrossFade {
    opacity: Vec<f32>,
    start_opacity: Vec<f32>,
    end_opacity: Vec<f32>,
    duration: Duration,
    animation_timer: Duration,
    pub is_animating: bool,
}

impl CrossFade {
    /// Starts with `active` fully opaque and every other slide hidden.
    pub fn new(len: usize, active: usize, duration: Duration) -> Self {
        let opacity: Vec<f32> = (0..len).map(|i| if i == active { 1.0 } else { 0.0 }).collect();
        Self {
            start_opacity: opacity.clone(),
            end_opacity: opacity.clone(),
            opacity,
            duration,
            animation_timer: Duration::ZERO,
            is_animating: false,
        }
    }

    pub fn opacity(&self, index: usize) -> f32 {
        self.opacity.get(index).copied().unwrap_or(0.0)
    }

    /// Fades `from` out and `to` in, starting from the current opacities.
    pub fn transition(&mut self, from: usize, to: usize) {
        if from == to || to >= self.opacity.len() {
            return;
        }
        self.start_opacity.clone_from(&self.opacity);
        for (i, end) in self.end_opacity.iter_mut().enumerate() {
            *end = if i == to { 1.0 } else { 0.0 };
        }
        self.animation_timer = Duration::ZERO;
        self.is_animating = true;
        if self.duration.is_zero() {
            self.finish();
        }
    }

    pub fn update(&mut self, dt: Duration) {
        if !self.is_animating {
            return;
        }
        self.animation_timer += dt;
        if self.animation_timer >= self.duration {
            self.finish();
            return;
        }
        let t = self.animation_timer.as_secs_f32() / self.duration.as_secs_f32();
        for (i, opacity) in self.opacity.iter_mut().enumerate() {
            *opacity = lerp(self.start_opacity[i], self.end_opacity[i], t);
        }
    }

    fn finish(&mut self) {
        self.opacity.clone_from(&self.end_opacity);
        self.is_animating = false;
    }
}
