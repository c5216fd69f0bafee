//! Property tests for aligned printing.

use proptest::prelude::*;
use tagcell_render::buffer::Buffer;
use tagcell_render::cell::PackedRgba;
use tagcell_text::{Align, print};

const ROW: u16 = 40;

/// Columns holding a non-blank glyph.
fn occupied(buf: &Buffer) -> Vec<usize> {
    buf.row_text(0)
        .chars()
        .enumerate()
        .filter(|&(_, c)| c != ' ')
        .map(|(i, _)| i)
        .collect()
}

fn tagged(word: &str) -> String {
    let mut raw = String::from("[green]");
    for (i, ch) in word.chars().enumerate() {
        if i % 3 == 1 {
            raw.push_str("[::b]");
        }
        raw.push(ch);
    }
    raw
}

proptest! {
    #[test]
    fn left_and_right_windows(word in "[a-z]{0,12}", extra in 0usize..12, x in 0i32..8) {
        let w = word.len();
        let max = w + extra;
        let raw = tagged(&word);

        let mut left = Buffer::new(ROW, 1);
        let drawn = print(&mut left, &raw, x, 0, max as i32, Align::Left, PackedRgba::WHITE);
        prop_assert_eq!(drawn, (w, w));
        let start = x as usize;
        prop_assert_eq!(occupied(&left), (start..start + w).collect::<Vec<_>>());

        let mut right = Buffer::new(ROW, 1);
        let drawn = print(&mut right, &raw, x, 0, max as i32, Align::Right, PackedRgba::WHITE);
        prop_assert_eq!(drawn, (w, w));
        let start = x as usize + max - w;
        prop_assert_eq!(occupied(&right), (start..start + w).collect::<Vec<_>>());
    }

    #[test]
    fn center_shift_is_half_the_slack(word in "[a-z]{0,12}", extra in 0usize..12) {
        let w = word.len();
        let max = w + extra;
        let mut buf = Buffer::new(ROW, 1);
        print(&mut buf, &tagged(&word), 0, 0, max as i32, Align::Center, PackedRgba::WHITE);
        let start = extra / 2;
        prop_assert_eq!(occupied(&buf), (start..start + w).collect::<Vec<_>>());
    }

    #[test]
    fn center_trim_fills_ascii_exactly(word in "[a-z]{2,20}", max in 1usize..20) {
        prop_assume!(word.len() > max);
        let mut buf = Buffer::new(ROW, 1);
        let drawn = print(&mut buf, &tagged(&word), 0, 0, max as i32, Align::Center, PackedRgba::WHITE);
        prop_assert_eq!(drawn, (max, max));

        // Left side trimmed first, so it never keeps more than the right.
        let trimmed = word.len() - max;
        let expected = &word[trimmed.div_ceil(2)..trimmed.div_ceil(2) + max];
        prop_assert_eq!(buf.row_text(0)[..max].to_string(), expected);
    }

    #[test]
    fn center_trim_never_overflows(word in "[a-z漢]{1,16}", max in 0usize..12) {
        let mut buf = Buffer::new(ROW, 1);
        let (_, width) = print(&mut buf, &word, 0, 0, max as i32, Align::Center, PackedRgba::WHITE);
        prop_assert!(width <= max);
        let full = tagcell_text::string_width(&word);
        if full > max && max > 0 {
            prop_assert!(width + 1 >= max, "{word:?} in {max} drew {width}");
        }
    }
}

#[test]
fn center_trim_mixed_widths_fills_exactly() {
    let mut buf = Buffer::new(8, 1);
    let drawn = print(&mut buf, "[red]a漢b漢c", 0, 0, 5, Align::Center, PackedRgba::WHITE);
    assert_eq!(drawn, (3, 5));
    assert_eq!(buf.row_text(0), "漢漢b漢漢   ");
}
