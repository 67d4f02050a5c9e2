//! Property-based tests for the pixel mapping and the pure primitives.
//! Verifies invariants hold for ALL valid inputs, not just fixed examples.

use ssd1306_direct::ssd1306::geometry::{locate, row_of, PixelPosition};
use ssd1306_direct::ssd1306::glyph::{rasterize, GLYPH_HEIGHT};
use ssd1306_direct::ssd1306::line::{horizontal_run, vertical_run};
use ssd1306_direct::FONT_5X7;

proptest::proptest! {
    /// Every row decodes back to itself.
    #[test]
    fn locate_round_trips(row in 0u8..64) {
        let p = locate(row);
        assert!(p.byte < 8);
        assert_eq!(p.mask.count_ones(), 1);
        assert_eq!(row_of(p), Some(row));
    }

    /// Rows from opposite ends land on mirrored bytes and bits.
    #[test]
    fn locate_mirrors_opposite_rows(row in 0u8..64) {
        let a = locate(row);
        let b = locate(63 - row);
        assert_eq!(a, PixelPosition { byte: 7 - b.byte, mask: b.mask.reverse_bits() });
    }

    /// Exactly the rows of the run are set, and the span is the tightest cover.
    #[test]
    fn horizontal_run_sets_exactly_its_rows(x1 in 0u8..64, len in 1u8..=64) {
        let x2 = x1.saturating_add(len).min(64);
        proptest::prop_assume!(x1 < x2);
        let run = horizontal_run(x1, x2).unwrap();

        for row in 0..64u8 {
            let p = locate(row);
            let set = run.bytes()[p.byte] & p.mask != 0;
            assert_eq!(set, (x1..x2).contains(&row), "row {}", row);
        }

        let span = run.span();
        assert!(!span.is_empty());
        for (i, &byte) in run.bytes().iter().enumerate() {
            assert_eq!(byte != 0, span.contains(&i), "byte {}", i);
        }
        assert_eq!(run.transmit_len(), span.end);
    }

    /// Chunks cover the run with bursts of at most 8 columns.
    #[test]
    fn vertical_chunks_cover_the_run(y1 in 0u8..128, len in 1u8..=128, x in 0u8..64) {
        let y2 = y1.saturating_add(len).min(128);
        proptest::prop_assume!(y1 < y2);
        let run = vertical_run(y1, y2, x).unwrap();
        let chunks: Vec<usize> = run.chunks().collect();

        assert_eq!(chunks.iter().sum::<usize>(), usize::from(y2 - y1));
        assert!(chunks.iter().all(|&c| (1..=8).contains(&c)));
        assert!(chunks[..chunks.len() - 1].iter().all(|&c| c == 8));
    }

    /// Same text, same bytes; inverse is the complement over the glyph rows.
    #[test]
    fn rasterize_is_stable_and_inverse_complements(text in "[ -~]{0,10}") {
        let normal = rasterize(&FONT_5X7, &text, false).unwrap();
        assert_eq!(normal, rasterize(&FONT_5X7, &text, false).unwrap());

        let inverse = rasterize(&FONT_5X7, &text, true).unwrap();
        for x in 0..normal.width() as u8 {
            for row in 0..GLYPH_HEIGHT {
                assert_ne!(normal.is_lit(row, x), inverse.is_lit(row, x));
            }
            assert!(inverse.is_lit(GLYPH_HEIGHT, x));
        }
    }
}
