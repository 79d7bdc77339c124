//! raylib front end for a [`Carousel`]: input translation and drawing.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use raylib::prelude::*;

use crate::carousel::{Carousel, CarouselEvent};
use crate::constants::*;
use crate::fade::CrossFade;
use crate::layout::{Control, Layout};

/// Keyboard shortcut for a control: arrows step, digits jump.
pub fn control_for_key(key: KeyboardKey) -> Option<Control> {
    let index = match key {
        KeyboardKey::KEY_LEFT => return Some(Control::Previous),
        KeyboardKey::KEY_RIGHT => return Some(Control::Next),
        KeyboardKey::KEY_ONE => 0,
        KeyboardKey::KEY_TWO => 1,
        KeyboardKey::KEY_THREE => 2,
        KeyboardKey::KEY_FOUR => 3,
        KeyboardKey::KEY_FIVE => 4,
        KeyboardKey::KEY_SIX => 5,
        KeyboardKey::KEY_SEVEN => 6,
        KeyboardKey::KEY_EIGHT => 7,
        KeyboardKey::KEY_NINE => 8,
        _ => return None,
    };
    Some(Control::Indicator(index))
}

const SHORTCUT_KEYS: [KeyboardKey; 11] = [
    KeyboardKey::KEY_LEFT,
    KeyboardKey::KEY_RIGHT,
    KeyboardKey::KEY_ONE,
    KeyboardKey::KEY_TWO,
    KeyboardKey::KEY_THREE,
    KeyboardKey::KEY_FOUR,
    KeyboardKey::KEY_FIVE,
    KeyboardKey::KEY_SIX,
    KeyboardKey::KEY_SEVEN,
    KeyboardKey::KEY_EIGHT,
    KeyboardKey::KEY_NINE,
];

/// Runs a control against the carousel. Indicators past the end are ignored.
pub fn activate(carousel: &mut Carousel, control: Control) {
    match control {
        Control::Previous => carousel.retreat(),
        Control::Next => carousel.advance(),
        Control::Indicator(index) if index < carousel.len() => {
            // Bounds checked above
            let _ = carousel.select_slide(index);
        }
        Control::Indicator(_) => {}
    }
}

/// Scales the color's own alpha by `opacity`.
fn with_opacity(color: Color, opacity: f32) -> Color {
    color.fade(color.a as f32 / 255.0 * opacity.clamp(0.0, 1.0))
}

/// Texture for slide `index`; missing or failed entries draw as placeholders.
fn slide_texture<T>(textures: &[Option<T>], index: usize) -> Option<&T> {
    textures.get(index).and_then(Option::as_ref)
}

pub struct CarouselView {
    textures: Vec<Option<Texture2D>>,
    fade: Rc<RefCell<CrossFade>>,
    layout: Layout,
    screen_size: (i32, i32),
}

impl CarouselView {
    /// Subscribes a cross-fade to `carousel` so every slide change animates.
    pub fn new(
        carousel: &mut Carousel,
        textures: Vec<Option<Texture2D>>,
        fade_duration: Duration,
        screen_size: (i32, i32),
    ) -> Self {
        let fade = Rc::new(RefCell::new(CrossFade::new(
            carousel.len(),
            carousel.current_index(),
            fade_duration,
        )));
        let listener_fade = Rc::clone(&fade);
        carousel.subscribe(move |event| {
            if let CarouselEvent::SlideChanged { from, to, .. } = *event {
                listener_fade.borrow_mut().transition(from, to);
            }
        });

        Self {
            textures,
            fade,
            layout: Layout::compute(screen_size.0 as f32, screen_size.1 as f32, carousel.len()),
            screen_size,
        }
    }

    /// Forwards hover, clicks and shortcuts from this frame to the carousel.
    pub fn handle_input(&mut self, rl: &RaylibHandle, carousel: &mut Carousel) {
        let screen_size = (rl.get_screen_width(), rl.get_screen_height());
        if screen_size != self.screen_size {
            self.screen_size = screen_size;
            self.layout = Layout::compute(screen_size.0 as f32, screen_size.1 as f32, carousel.len());
        }

        let mouse = rl.get_mouse_position();
        carousel.set_pointer_inside(self.layout.contains(mouse));

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            if let Some(control) = self.layout.hit_test(mouse) {
                activate(carousel, control);
            }
        }

        for key in SHORTCUT_KEYS {
            if rl.is_key_pressed(key) {
                if let Some(control) = control_for_key(key) {
                    activate(carousel, control);
                }
            }
        }
    }

    pub fn update(&mut self, dt: Duration) {
        self.fade.borrow_mut().update(dt);
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, carousel: &Carousel) {
        d.clear_background(Color::BLACK);
        d.draw_rectangle_rec(self.layout.viewport, Color::new(24, 24, 28, 255));

        // Every slide stays in the scene; opacity alone decides visibility
        let fade = self.fade.borrow();
        for (i, slide) in carousel.slides().iter().enumerate() {
            let opacity = fade.opacity(i);
            if opacity <= 0.0 {
                continue;
            }
            match slide_texture(&self.textures, i) {
                Some(texture) => {
                    let (w, h) = (texture.width() as f32, texture.height() as f32);
                    d.draw_texture_pro(
                        texture,
                        Rectangle::new(0.0, 0.0, w, h),
                        self.layout.fit(w, h),
                        Vector2::zero(),
                        0.0,
                        with_opacity(Color::WHITE, opacity),
                    );
                }
                None => {
                    let dest = self.layout.fit(self.layout.viewport.width, self.layout.viewport.height);
                    d.draw_rectangle_rec(dest, with_opacity(Color::DARKGRAY, opacity));
                    d.draw_text(
                        slide.alt_text(),
                        dest.x as i32 + 16,
                        dest.y as i32 + 16,
                        CAPTION_FONT_SIZE,
                        with_opacity(Color::RAYWHITE, opacity),
                    );
                }
            }
        }

        // Caption belongs to the active slide only
        let caption_y = self.layout.viewport.y + self.layout.viewport.height
            - INDICATOR_BOTTOM_OFFSET - 2.0 * CAPTION_FONT_SIZE as f32;
        d.draw_text(
            carousel.active_slide().alt_text(),
            (self.layout.viewport.x + ARROW_WIDTH + 8.0) as i32,
            caption_y as i32,
            CAPTION_FONT_SIZE,
            Color::RAYWHITE,
        );

        for (rect, label) in [(self.layout.previous, "<"), (self.layout.next, ">")] {
            d.draw_rectangle_rec(rect, Color::new(0, 0, 0, 96));
            d.draw_text(
                label,
                (rect.x + rect.width * 0.5 - 6.0) as i32,
                (rect.y + rect.height * 0.5 - 14.0) as i32,
                28,
                Color::RAYWHITE,
            );
        }

        for (i, center) in self.layout.indicators.iter().enumerate() {
            let color = if carousel.is_active(i) { Color::RAYWHITE } else { Color::GRAY };
            d.draw_circle_v(*center, INDICATOR_RADIUS, color);
        }
    }
}
