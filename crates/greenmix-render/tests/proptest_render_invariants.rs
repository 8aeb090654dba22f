//! Property-based invariant tests for glyph rendering.
//!
//! Glyphs are ASCII letters so that one base `char` is one slot. Sections 1-4
//! use one code point per glyph; section 5 mixes in two code point glyphs.
//!
//! 1. Rendered slots equal the sum of percentages.
//! 2. Every line but the last holds exactly `line_width / 2` glyphs.
//! 3. A higher percentage category's glyphs all precede a lower one's.
//! 4. Rendering is deterministic.
//! 5. One and two code point glyphs each fill one slot on a shared line.

use greenmix_alloc::{Categories, Measurement, PercentageMap, allocate};
use greenmix_render::glyph::EMOJI_PRESENTATION;
use greenmix_render::{Glyph, GlyphSpec, UNITS_PER_GLYPH, render};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

const LETTERS: &[u8] = b"abcdefghijkl";

fn setup(values: &[u64]) -> (Categories, PercentageMap, GlyphSpec) {
    let codes: Vec<String> = (0..values.len()).map(|i| format!("C{i}")).collect();
    let cats: Categories = codes.iter().map(String::as_str).collect();
    let m: Measurement = codes.iter().cloned().zip(values.iter().copied()).collect();
    let pct = allocate(&m, &cats).unwrap();
    let glyphs: GlyphSpec = codes
        .iter()
        .zip(LETTERS)
        .map(|(c, l)| (c.as_str(), Glyph::single(char::from(*l))))
        .collect();
    (cats, pct, glyphs)
}

fn values_strategy() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(0u64..=5_000, 1..=LETTERS.len())
}

fn width_strategy() -> impl Strategy<Value = usize> {
    (1usize..=30).prop_map(|slots| slots * UNITS_PER_GLYPH)
}

/// Like [`setup`], but each category picks a plain or a presentation glyph.
fn mixed_setup(entries: &[(u64, bool)]) -> (Categories, PercentageMap, GlyphSpec) {
    let values: Vec<u64> = entries.iter().map(|(v, _)| *v).collect();
    let (cats, pct, _) = setup(&values);
    let glyphs: GlyphSpec = cats
        .iter()
        .zip(LETTERS)
        .zip(entries)
        .map(|((code, l), (_, wide))| {
            let c = char::from(*l);
            let glyph = if *wide {
                Glyph::presentation(c)
            } else {
                Glyph::single(c)
            };
            (code.clone(), glyph)
        })
        .collect();
    (cats, pct, glyphs)
}

fn mixed_strategy() -> impl Strategy<Value = Vec<(u64, bool)>> {
    prop::collection::vec((0u64..=5_000, any::<bool>()), 1..=LETTERS.len())
}

fn slots(line: &str) -> usize {
    line.chars().filter(|&c| c != EMOJI_PRESENTATION).count()
}

// ═════════════════════════════════════════════════════════════════════════
// 1-2. Slot count and line width
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn slots_match_percentages(values in values_strategy(), width in width_strategy()) {
        let (cats, pct, glyphs) = setup(&values);
        let msg = render(&pct, &cats, &glyphs, width).unwrap();
        prop_assert_eq!(msg.glyph_count() as u32, pct.sum());
        let chars: usize = msg.lines().iter().map(|l| l.chars().count()).sum();
        prop_assert_eq!(chars, msg.glyph_count());
    }

    #[test]
    fn full_lines_have_fixed_width(values in values_strategy(), width in width_strategy()) {
        let (cats, pct, glyphs) = setup(&values);
        let msg = render(&pct, &cats, &glyphs, width).unwrap();
        let per_line = width / UNITS_PER_GLYPH;
        if let Some((last, full)) = msg.lines().split_last() {
            for line in full {
                prop_assert_eq!(line.chars().count(), per_line);
            }
            prop_assert!((1..=per_line).contains(&last.chars().count()));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Monotonic ranking
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn higher_share_comes_first(values in values_strategy()) {
        let (cats, pct, glyphs) = setup(&values);
        let flat: Vec<char> = render(&pct, &cats, &glyphs, 20)
            .unwrap()
            .lines()
            .concat()
            .chars()
            .collect();
        for a in &cats {
            for b in &cats {
                if pct.get(a.as_str()) <= pct.get(b.as_str()) {
                    continue;
                }
                let ga = glyphs.get(a.as_str()).unwrap().code_points()[0];
                let gb = glyphs.get(b.as_str()).unwrap().code_points()[0];
                let last_a = flat.iter().rposition(|&c| c == ga);
                let first_b = flat.iter().position(|&c| c == gb);
                if let (Some(last_a), Some(first_b)) = (last_a, first_b) {
                    prop_assert!(last_a < first_b, "{} glyphs after {} glyphs", a, b);
                }
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Determinism
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn render_is_deterministic(values in values_strategy(), width in width_strategy()) {
        let (cats, pct, glyphs) = setup(&values);
        let a = render(&pct, &cats, &glyphs, width).unwrap().to_string();
        let b = render(&pct, &cats, &glyphs, width).unwrap().to_string();
        prop_assert_eq!(a, b);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Mixed glyph widths
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn mixed_glyphs_fill_equal_slots(entries in mixed_strategy(), width in width_strategy()) {
        let (cats, pct, glyphs) = mixed_setup(&entries);
        let msg = render(&pct, &cats, &glyphs, width).unwrap();
        let per_line = width / UNITS_PER_GLYPH;
        if let Some((last, full)) = msg.lines().split_last() {
            for line in full {
                prop_assert_eq!(slots(line), per_line, "line {:?}", line);
            }
            prop_assert!((1..=per_line).contains(&slots(last)));
        }
        let total: usize = msg.lines().iter().map(|l| slots(l)).sum();
        prop_assert_eq!(total as u32, pct.sum());
    }

    #[test]
    fn mixed_glyphs_are_never_split(entries in mixed_strategy(), width in width_strategy()) {
        let (cats, pct, glyphs) = mixed_setup(&entries);
        let msg = render(&pct, &cats, &glyphs, width).unwrap();

        let mut ranked: Vec<_> = cats.iter().map(|c| (c, pct.get(c.as_str()))).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        let flat: Vec<String> = ranked
            .iter()
            .flat_map(|(c, n)| {
                std::iter::repeat_n(glyphs.get(c.as_str()).unwrap().to_string(), usize::from(*n))
            })
            .collect();
        let expected: Vec<String> = flat
            .chunks(width / UNITS_PER_GLYPH)
            .map(|chunk| chunk.concat())
            .collect();
        prop_assert_eq!(msg.lines(), expected.as_slice());
        for line in msg.lines() {
            prop_assert!(!line.starts_with(EMOJI_PRESENTATION));
        }
    }
}
