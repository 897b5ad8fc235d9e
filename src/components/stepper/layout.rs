// ABOUTME: Geometry for the stepper stack
// Computes per-page offsets, heights, and the off-screen parking position

use super::state::StepperError;

/// Vertical placement of one page, in rows relative to the stepper's top
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageFrame {
    /// Stacked offset, independent of the active index
    pub offset: f32,
    /// Height of the cell
    pub height: f32,
    /// Offset while the page has not been reached yet
    pub parked: f32,
}

impl PageFrame {
    /// Current top edge given a reveal progress (0 = stacked, 1 = parked)
    pub fn top_at(&self, reveal: f32) -> f32 {
        self.offset + (self.parked - self.offset) * reveal
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepperLayout {
    pub available_height: f32,
    pub collapsed_fraction: f32,
    pub bottom_inset: f32,
}

impl StepperLayout {
    pub fn new(available_height: f32, collapsed_fraction: f32) -> Self {
        Self {
            available_height,
            collapsed_fraction,
            bottom_inset: 0.0,
        }
    }

    pub fn with_bottom_inset(mut self, bottom_inset: f32) -> Self {
        self.bottom_inset = bottom_inset;
        self
    }

    pub fn offset(&self, position: usize) -> f32 {
        self.available_height * self.collapsed_fraction * position as f32
    }

    pub fn height(&self, position: usize) -> f32 {
        self.available_height - self.offset(position)
    }

    pub fn frame(&self, position: usize) -> PageFrame {
        let offset = self.offset(position);
        let height = self.height(position);
        PageFrame {
            offset,
            height,
            parked: offset + height + self.bottom_inset,
        }
    }
}

pub fn validate_fraction(fraction: f32) -> Result<f32, StepperError> {
    if fraction.is_finite() && (0.0..1.0).contains(&fraction) {
        Ok(fraction)
    } else {
        Err(StepperError::InvalidFraction(fraction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_and_heights() {
        let layout = StepperLayout::new(1000.0, 0.1);

        assert_eq!(layout.offset(0), 0.0);
        assert!((layout.offset(1) - 100.0).abs() < 1e-3);
        assert!((layout.offset(2) - 200.0).abs() < 1e-3);
        assert!((layout.height(1) - 900.0).abs() < 1e-3);
    }

    #[test]
    fn test_parked_includes_bottom_inset() {
        let layout = StepperLayout::new(1000.0, 0.1).with_bottom_inset(20.0);

        // offset + height always lands on the bottom edge, the inset pushes past it
        assert!((layout.frame(0).parked - 1020.0).abs() < 1e-3);
        assert!((layout.frame(1).parked - 1020.0).abs() < 1e-3);
        assert!((layout.frame(2).parked - 1020.0).abs() < 1e-3);
    }

    #[test]
    fn test_top_at_interpolates() {
        let frame = StepperLayout::new(100.0, 0.2).frame(1);
        assert_eq!(frame.top_at(0.0), frame.offset);
        assert_eq!(frame.top_at(1.0), frame.parked);
        assert!((frame.top_at(0.5) - 60.0).abs() < 1e-3);
    }

    #[test]
    fn test_validate_fraction() {
        assert!(validate_fraction(0.1).is_ok());
        assert!(validate_fraction(0.0).is_ok());
        assert!(validate_fraction(1.0).is_err());
        assert!(validate_fraction(-0.1).is_err());
        assert!(validate_fraction(f32::NAN).is_err());
    }
}
