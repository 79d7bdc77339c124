use crate::error::{CarouselError, Result};

/// What moved the carousel to a new slide.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Cause {
    Next,     // Manual step forward
    Previous, // Manual step backward
    Select,   // Direct jump from an indicator
    Autoplay, // Timer tick
}

/// Index of the active slide, always within `0..len`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct CarouselState {
    current_index: usize,
    len: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(CarouselError::NoSlides);
        }
        Ok(Self { current_index: 0, len })
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn advance(&mut self) {
        self.current_index = (self.current_index + 1) % self.len;
    }

    pub fn retreat(&mut self) {
        self.current_index = (self.current_index + self.len - 1) % self.len;
    }

    pub fn select(&mut self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(CarouselError::IndexOutOfRange { index, len: self.len });
        }
        self.current_index = index;
        Ok(())
    }
}
