#![allow(missing_docs)]
//! End-to-end host tests for the gallery player loop.

use embassy_time::Instant;
use pixel_gallery::{
    canvas::PixelCanvas,
    frame::{Frame, IndexGrid},
    gallery::Gallery,
    input::{ButtonId, ButtonPad, DEBOUNCE_DWELL, InputController},
    palette::{Palette, RGB8, colors},
    player::{DEFAULT_TICK, GalleryPlayer},
    render::Surface,
};

#[derive(Default)]
struct ScriptPad {
    pressed: [bool; 4],
}

impl ButtonPad for ScriptPad {
    fn is_pressed(&self, button: ButtonId) -> bool {
        match button {
            ButtonId::A => self.pressed[0],
            ButtonId::B => self.pressed[1],
            ButtonId::C => self.pressed[2],
            ButtonId::D => self.pressed[3],
        }
    }
}

/// Double-buffered surface: the device sees pixels only on present, like a
/// real panel behind a driver.
struct BufferedSurface<const W: usize, const H: usize> {
    staging: PixelCanvas<W, H>,
    device: PixelCanvas<W, H>,
}

impl<const W: usize, const H: usize> BufferedSurface<W, H> {
    fn new() -> Self {
        Self {
            staging: PixelCanvas::new(),
            device: PixelCanvas::new(),
        }
    }
}

impl<const W: usize, const H: usize> Surface for BufferedSurface<W, H> {
    fn set_pixel(&mut self, x: usize, y: usize, color: RGB8) {
        if x < W && y < H {
            self.staging[(x, y)] = color;
        }
    }

    fn clear(&mut self, color: RGB8) {
        self.staging = PixelCanvas::filled(color);
    }

    fn present(&mut self) -> pixel_gallery::Result<()> {
        self.device = self.staging;
        Ok(())
    }
}

fn solid_frame(color: RGB8) -> Frame<2, 2> {
    let palette = Palette::from_colors(&[color]).unwrap();
    Frame::new(palette, IndexGrid::from_cells([[0, 0], [0, 0]])).unwrap()
}

fn player() -> GalleryPlayer {
    GalleryPlayer::new(DEFAULT_TICK, InputController::new(ButtonId::A, DEBOUNCE_DWELL))
}

fn at(ms: u64) -> Instant {
    Instant::from_millis(ms)
}

#[test]
fn advance_cycles_and_wraps() {
    let gallery: Gallery<2, 2, 4> =
        Gallery::from_frames([solid_frame(colors::RED), solid_frame(colors::GREEN)]).unwrap();
    let mut surface = BufferedSurface::<2, 2>::new();
    let mut pad = ScriptPad::default();
    let mut player = player();

    // startup: cursor 0, first frame on the device
    let outcome = player.step(&gallery, &mut surface, &pad, at(0)).unwrap();
    assert!(outcome.drawn && !outcome.advanced);
    assert_eq!(player.cursor(), 0);
    assert_eq!(surface.device[(0, 0)], colors::RED);

    // first advance event moves the cursor to 1
    pad.pressed[0] = true;
    let outcome = player.step(&gallery, &mut surface, &pad, at(100)).unwrap();
    assert!(outcome.advanced);
    assert_eq!(player.cursor(), 1);

    // held press: no further advance; the new frame reaches the device
    let outcome = player.step(&gallery, &mut surface, &pad, at(200)).unwrap();
    assert!(!outcome.advanced);
    assert_eq!(surface.device[(0, 0)], colors::GREEN);

    // release, then a second press wraps the cursor back to 0
    pad.pressed[0] = false;
    player.step(&gallery, &mut surface, &pad, at(300)).unwrap();
    pad.pressed[0] = true;
    let outcome = player.step(&gallery, &mut surface, &pad, at(400)).unwrap();
    assert!(outcome.advanced);
    assert_eq!(player.cursor(), 0);
}

#[test]
fn faulty_frame_is_skipped_and_the_loop_continues() {
    // middle frame references a color its palette lacks (mismatched source
    // data that skipped load validation)
    let bad_palette = Palette::from_colors(&[colors::BLACK]).unwrap();
    let bad = Frame::new_unchecked(bad_palette, IndexGrid::from_cells([[0, 5], [0, 0]]));
    let gallery: Gallery<2, 2, 4> =
        Gallery::from_frames([solid_frame(colors::RED), bad, solid_frame(colors::GREEN)]).unwrap();

    let mut surface = BufferedSurface::<2, 2>::new();
    let mut pad = ScriptPad::default();
    let mut player = player();

    player.step(&gallery, &mut surface, &pad, at(0)).unwrap();
    assert_eq!(surface.device[(0, 0)], colors::RED);

    pad.pressed[0] = true;
    player.step(&gallery, &mut surface, &pad, at(100)).unwrap();
    assert_eq!(player.cursor(), 1);

    // the bad frame is skipped, the device keeps the previous image
    pad.pressed[0] = false;
    let outcome = player.step(&gallery, &mut surface, &pad, at(200)).unwrap();
    assert!(!outcome.drawn);
    assert_eq!(surface.device[(0, 0)], colors::RED);

    // the loop keeps running: advance past it and draw normally again
    pad.pressed[0] = true;
    player.step(&gallery, &mut surface, &pad, at(300)).unwrap();
    assert_eq!(player.cursor(), 2);
    pad.pressed[0] = false;
    let outcome = player.step(&gallery, &mut surface, &pad, at(400)).unwrap();
    assert!(outcome.drawn);
    assert_eq!(surface.device[(0, 0)], colors::GREEN);
}
