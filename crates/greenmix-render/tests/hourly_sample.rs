#![forbid(unsafe_code)]

//! End-to-end check of one hour of Czech renewable generation: allocation
//! followed by rendering at the default line width.

use greenmix_alloc::{Categories, Measurement, PercentageMap, allocate};
use greenmix_render::{DEFAULT_LINE_WIDTH, GlyphSpec, render};
use pretty_assertions::assert_eq;

const SUN: &str = "\u{2600}\u{FE0F}";
const HERB: &str = "\u{1F33F}";
const TREE: &str = "\u{1F333}";
const DROPLET: &str = "\u{1F4A7}";
const SPLASH: &str = "\u{1F4A6}";
const WIND: &str = "\u{1F32C}\u{FE0F}";
const GLOBE: &str = "\u{1F30D}";

fn technologies() -> Categories {
    ["B01", "B09", "B11", "B12", "B15", "B16", "B19"]
        .into_iter()
        .collect()
}

fn glyphs() -> GlyphSpec {
    let mut spec = GlyphSpec::new();
    for (code, glyph) in [
        ("B01", TREE),
        ("B09", GLOBE),
        ("B11", SPLASH),
        ("B12", DROPLET),
        ("B15", HERB),
        ("B16", SUN),
        ("B19", WIND),
    ] {
        spec.insert(code, glyph).unwrap();
    }
    spec
}

fn sample() -> Measurement {
    [
        ("B01", 247_u64),
        ("B09", 0),
        ("B11", 122),
        ("B12", 126),
        ("B15", 261),
        ("B16", 867),
        ("B19", 24),
    ]
    .into_iter()
    .collect()
}

fn line(runs: &[(&str, usize)]) -> String {
    runs.iter().map(|(g, n)| g.repeat(*n)).collect()
}

#[test]
fn sample_renders_ten_lines() {
    let pct = allocate(&sample(), &technologies()).unwrap();
    let msg = render(&pct, &technologies(), &glyphs(), DEFAULT_LINE_WIDTH).unwrap();

    let expected = vec![
        line(&[(SUN, 10)]),
        line(&[(SUN, 10)]),
        line(&[(SUN, 10)]),
        line(&[(SUN, 10)]),
        line(&[(SUN, 10)]),
        line(&[(SUN, 3), (HERB, 7)]),
        line(&[(HERB, 9), (TREE, 1)]),
        line(&[(TREE, 10)]),
        line(&[(TREE, 4), (DROPLET, 6)]),
        line(&[(DROPLET, 2), (SPLASH, 7), (WIND, 1)]),
    ];

    assert_eq!(msg.lines(), expected.as_slice());
    assert_eq!(msg.glyph_count(), 100);
    assert_eq!(msg.to_string(), expected.join("\n"));
    assert!(!msg.to_string().contains(' '));
    assert!(!msg.to_string().contains(GLOBE));
}

#[test]
fn mixed_glyphs_share_narrow_lines() {
    let pct: PercentageMap = [("B01", 3_u8), ("B16", 5), ("B19", 2)].into_iter().collect();
    let mut spec = glyphs();
    // Two-unit table form: one code point followed by a space.
    spec.insert("B01", &format!("{TREE} ")).unwrap();

    let msg = render(&pct, &technologies(), &spec, 8).unwrap();

    let expected = vec![
        line(&[(SUN, 4)]),
        line(&[(SUN, 1), (TREE, 3)]),
        line(&[(WIND, 2)]),
    ];
    assert_eq!(msg.lines(), expected.as_slice());
    assert_eq!(msg.glyphs_per_line(), 4);
    assert!(!msg.to_string().contains(' '));
}

#[test]
fn render_is_byte_identical_across_runs() {
    let pct = allocate(&sample(), &technologies()).unwrap();
    let a = render(&pct, &technologies(), &glyphs(), DEFAULT_LINE_WIDTH).unwrap();
    let b = render(&pct, &technologies(), &glyphs(), DEFAULT_LINE_WIDTH).unwrap();
    assert_eq!(a.to_string().into_bytes(), b.to_string().into_bytes());
}

#[test]
fn hand_built_percentages_render_the_same() {
    let pct: PercentageMap = [
        ("B01", 15_u8),
        ("B09", 0),
        ("B11", 7),
        ("B12", 8),
        ("B15", 16),
        ("B16", 53),
        ("B19", 1),
    ]
    .into_iter()
    .collect();
    let from_alloc = allocate(&sample(), &technologies()).unwrap();
    assert_eq!(pct, from_alloc);
}

#[test]
fn zero_generation_renders_empty_message() {
    let pct = allocate(&Measurement::new(), &technologies()).unwrap();
    let msg = render(&pct, &technologies(), &glyphs(), DEFAULT_LINE_WIDTH).unwrap();
    assert_eq!(msg.to_string(), "");
    assert_eq!(msg.line_count(), 0);
}
