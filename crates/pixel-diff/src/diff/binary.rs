//! Byte-exact classification.

use super::{Classifier, PixelOutcome};
use crate::color::Rgba;

/// Binary classifier: a position is unchanged only when both images cover
/// it and all four channels match.
///
/// Unchanged positions become [`Rgba::TRANSPARENT`], changed ones
/// [`Rgba::MAGENTA`]. The reported `norm` is always zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct Binary;

impl Classifier for Binary {
    #[inline]
    fn classify(&self, before: Option<Rgba>, after: Option<Rgba>) -> PixelOutcome {
        let changed = match (before, after) {
            (Some(b), Some(a)) => b != a,
            _ => true,
        };
        PixelOutcome {
            color: if changed { Rgba::MAGENTA } else { Rgba::TRANSPARENT },
            changed,
            norm: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba = Rgba::new(255, 0, 0, 255);

    #[test]
    fn test_identical_is_transparent() {
        let out = Binary.classify(Some(RED), Some(RED));
        assert!(!out.changed);
        assert_eq!(out.color, Rgba::TRANSPARENT);
    }

    #[test]
    fn test_any_channel_differs() {
        for changed in [
            Rgba::new(254, 0, 0, 255),
            Rgba::new(255, 1, 0, 255),
            Rgba::new(255, 0, 1, 255),
            Rgba::new(255, 0, 0, 254),
        ] {
            let out = Binary.classify(Some(RED), Some(changed));
            assert!(out.changed, "{changed:?} should differ from red");
            assert_eq!(out.color, Rgba::MAGENTA);
        }
    }

    #[test]
    fn test_single_coverage_is_changed() {
        // Even a transparent pixel differs from "no pixel at all"
        let out = Binary.classify(Some(Rgba::TRANSPARENT), None);
        assert!(out.changed);
        let out = Binary.classify(None, Some(Rgba::TRANSPARENT));
        assert!(out.changed);
    }
}
