use pixel_invaders::canvas::{Color, RasterCanvas};
use pixel_invaders::error::SetupError;
use pixel_invaders::sprite::*;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const BG: Color = Color::rgb(0, 128, 0);
const INK: Color = Color::rgb(128, 0, 0);

fn canvas(w: usize, h: usize) -> RasterCanvas {
    RasterCanvas::new(w, h, BG).unwrap()
}

fn changed(c: &RasterCanvas) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    for y in 0..c.height() {
        for x in 0..c.width() {
            if c.pixel(x, y) != Some(BG) {
                out.push((x, y));
            }
        }
    }
    out
}

// ── MaskedSprite ──────────────────────────────────────────────────────────────

#[test]
fn from_art_reads_opaque_cells() {
    let s = MaskedSprite::from_art(&["@.", ".#"]).unwrap();
    assert_eq!((s.width(), s.height()), (2, 2));
    assert!(s.is_opaque(0, 0));
    assert!(!s.is_opaque(1, 0));
    assert!(!s.is_opaque(0, 1));
    assert!(s.is_opaque(1, 1));
    assert!(!s.is_opaque(5, 5)); // outside the mask
}

#[test]
fn from_art_rejects_ragged_rows() {
    assert_eq!(
        MaskedSprite::from_art(&["@@", "@@@"]),
        Err(SetupError::RaggedArt { row: 1, expected: 2, actual: 3 })
    );
}

#[test]
fn new_rejects_wrong_mask_length() {
    assert_eq!(
        MaskedSprite::new(2, 2, vec![true; 3]),
        Err(SetupError::MaskLength { expected: 4, actual: 3 })
    );
}

#[test]
fn sheet_hands_out_distinct_handles() {
    let mut sheet = SpriteSheet::new();
    assert!(sheet.is_empty());
    let a = sheet.insert(MaskedSprite::solid(1, 1));
    let b = sheet.insert(MaskedSprite::solid(2, 3));
    assert_ne!(a, b);
    assert_eq!(sheet.len(), 2);
    assert!(sheet.contains(b));
    assert_eq!(sheet.sprite(b).width(), 2);
    assert_eq!(sheet.get(a).map(|s| s.height()), Some(1));
}

// ── blit ──────────────────────────────────────────────────────────────────────

#[test]
fn blit_single_pixel_lands_at_flipped_row() {
    let mut c = canvas(16, 16);
    let mut mask = vec![false; 9];
    mask[0] = true; // xi = 0, yi = 0
    let s = MaskedSprite::new(3, 3, mask).unwrap();
    blit(&mut c, &s, 5, 5, INK);
    // row = height - 1 + y - yi = 2 + 5
    assert_eq!(changed(&c), vec![(5, 7)]);
    assert_eq!(c.pixel(5, 7), Some(INK));
}

#[test]
fn blit_first_stored_row_is_drawn_on_top() {
    let mut c = canvas(2, 2);
    let s = MaskedSprite::from_art(&[".@", "@."]).unwrap();
    blit(&mut c, &s, 0, 0, INK);
    assert_eq!(c.pixel(1, 1), Some(INK));
    assert_eq!(c.pixel(0, 0), Some(INK));
    // Transparent cells leave the background alone
    assert_eq!(c.pixel(0, 1), Some(BG));
    assert_eq!(c.pixel(1, 0), Some(BG));
}

#[test]
fn blit_fully_outside_changes_nothing() {
    let s = MaskedSprite::solid(3, 3);
    for (x, y) in [(100, 100), (-20, -20), (16, 0), (0, 16), (-3, 5), (5, -3)] {
        let mut c = canvas(16, 16);
        blit(&mut c, &s, x, y, INK);
        assert!(changed(&c).is_empty(), "draw at ({x}, {y}) leaked");
    }
}

#[test]
fn blit_clips_partially_visible_sprite() {
    let mut c = canvas(4, 4);
    blit(&mut c, &MaskedSprite::solid(3, 3), -1, -1, INK);
    let mut hits = changed(&c);
    hits.sort();
    assert_eq!(hits, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
}

#[test]
fn blit_below_bottom_edge_keeps_only_visible_rows() {
    let mut c = canvas(4, 4);
    blit(&mut c, &MaskedSprite::solid(1, 3), 2, -2, INK);
    assert_eq!(changed(&c), vec![(2, 0)]);
}

#[test]
fn blit_overwrites_without_blending() {
    let mut c = canvas(2, 2);
    blit(&mut c, &MaskedSprite::solid(2, 2), 0, 0, INK);
    blit(&mut c, &MaskedSprite::solid(1, 1), 0, 0, Color::BLACK);
    assert_eq!(c.pixel(0, 0), Some(Color::BLACK));
    assert_eq!(c.pixel(1, 1), Some(INK));
}

// ── overlaps ──────────────────────────────────────────────────────────────────

#[test]
fn overlapping_footprints_hit() {
    let a = MaskedSprite::solid(2, 2);
    let b = MaskedSprite::solid(3, 3);
    assert!(overlaps(&a, 1, 1, &b, 0, 0));
    assert!(overlaps(&a, 2, 2, &b, 0, 0));
}

#[test]
fn touching_edges_do_not_hit() {
    let a = MaskedSprite::solid(2, 2);
    assert!(!overlaps(&a, 0, 0, &a, 2, 0));
    assert!(!overlaps(&a, 0, 0, &a, 0, 2));
    assert!(!overlaps(&a, 0, 0, &a, -2, 0));
}

#[test]
fn transparent_cells_inside_footprint_still_hit() {
    let hollow = MaskedSprite::from_art(&["@.@", "...", "@.@"]).unwrap();
    let dot = MaskedSprite::solid(1, 1);
    assert!(overlaps(&dot, 1, 1, &hollow, 0, 0));
}

/// The vertical test uses sprite A's height.  A width-based vertical test
/// would report a miss here because the 1-wide, 3-tall sprite only reaches
/// the 1×1 sprite through its height.
#[test]
fn vertical_overlap_uses_sprite_height_not_width() {
    let tall = MaskedSprite::solid(1, 3);
    let dot = MaskedSprite::solid(1, 1);
    assert!(overlaps(&tall, 0, 0, &dot, 0, 2));
    assert!(!overlaps(&tall, 0, 0, &dot, 0, 3));
}

#[test]
fn overlap_is_symmetric() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..2000 {
        let a = MaskedSprite::solid(rng.gen_range(1..7), rng.gen_range(1..7));
        let b = MaskedSprite::solid(rng.gen_range(1..7), rng.gen_range(1..7));
        let (xa, ya) = (rng.gen_range(-10..10), rng.gen_range(-10..10));
        let (xb, yb) = (rng.gen_range(-10..10), rng.gen_range(-10..10));
        assert_eq!(
            overlaps(&a, xa, ya, &b, xb, yb),
            overlaps(&b, xb, yb, &a, xa, ya)
        );
    }
}

#[test]
fn overlap_matches_drawn_footprints() {
    // Two solid sprites overlap exactly when their blits share a pixel.
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..300 {
        let a = MaskedSprite::solid(rng.gen_range(1..5), rng.gen_range(1..5));
        let b = MaskedSprite::solid(rng.gen_range(1..5), rng.gen_range(1..5));
        let (xa, ya) = (rng.gen_range(0..8), rng.gen_range(0..8));
        let (xb, yb) = (rng.gen_range(0..8), rng.gen_range(0..8));

        let mut ca = canvas(16, 16);
        let mut cb = canvas(16, 16);
        blit(&mut ca, &a, xa, ya, INK);
        blit(&mut cb, &b, xb, yb, INK);
        let shared = changed(&ca).iter().any(|p| changed(&cb).contains(p));

        assert_eq!(overlaps(&a, xa, ya, &b, xb, yb), shared);
    }
}
