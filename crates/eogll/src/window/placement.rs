//! Screen rectangles and window centering

/// Axis-aligned rectangle in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width in screen units
    pub width: i32,
    /// Height in screen units
    pub height: i32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Area shared with `other`, zero when they do not overlap
    pub fn overlap_area(&self, other: &Self) -> i64 {
        let min_x = self.x.max(other.x);
        let min_y = self.y.max(other.y);
        let max_x = (self.x + self.width).min(other.x + other.width);
        let max_y = (self.y + self.height).min(other.y + other.height);

        i64::from((max_x - min_x).max(0)) * i64::from((max_y - min_y).max(0))
    }
}

/// Where to put `window` so it sits centered on a monitor
///
/// The monitor covering most of the window wins. A window that touches no
/// monitor goes to the middle of the primary monitor's video mode. Returns
/// `None` when neither applies.
pub(crate) fn centered_position(
    window: Rect,
    monitors: &[Rect],
    primary: Option<Rect>,
) -> Option<(i32, i32)> {
    let mut best_area = 0;
    let mut best = None;

    for monitor in monitors {
        let area = window.overlap_area(monitor);
        if area > best_area {
            best_area = area;
            best = Some((
                monitor.x + (monitor.width - window.width) / 2,
                monitor.y + (monitor.height - window.height) / 2,
            ));
        }
    }

    best.or_else(|| {
        primary.map(|desktop| {
            (
                (desktop.width - window.width) / 2,
                (desktop.height - window.height) / 2,
            )
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_area() {
        let a = Rect::new(0, 0, 100, 100);
        assert_eq!(a.overlap_area(&Rect::new(50, 50, 100, 100)), 2500);
        assert_eq!(a.overlap_area(&Rect::new(100, 0, 10, 10)), 0);
        assert_eq!(a.overlap_area(&Rect::new(-500, -500, 10, 10)), 0);
    }

    #[test]
    fn test_centers_on_single_monitor() {
        let window = Rect::new(10, 10, 800, 600);
        let monitor = Rect::new(0, 0, 1920, 1080);
        assert_eq!(
            centered_position(window, &[monitor], Some(monitor)),
            Some((560, 240))
        );
    }

    #[test]
    fn test_picks_monitor_with_most_overlap() {
        let left = Rect::new(0, 0, 1920, 1080);
        let right = Rect::new(1920, 0, 2560, 1440);
        // mostly on the right-hand monitor
        let window = Rect::new(1800, 100, 800, 600);

        assert_eq!(
            centered_position(window, &[left, right], Some(left)),
            Some((1920 + 880, 420))
        );
    }

    #[test]
    fn test_falls_back_to_primary_when_offscreen() {
        let window = Rect::new(-5000, -5000, 400, 300);
        let monitor = Rect::new(1920, 0, 1280, 1024);
        assert_eq!(
            centered_position(window, &[monitor], Some(monitor)),
            Some((440, 362))
        );
    }

    #[test]
    fn test_no_monitors() {
        let window = Rect::new(0, 0, 400, 300);
        assert_eq!(centered_position(window, &[], None), None);
    }
}
