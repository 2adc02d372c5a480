#![allow(missing_docs)]
//! Host-level tests for gallery loading and navigation.

use pixel_gallery::{
    Error,
    gallery::Gallery,
    palette::colors,
};

type TinyGallery = Gallery<2, 2, 4>;

const TWO_FRAMES: &str = r#"[
  {"palette": [{"r":0,"g":0,"b":0},{"r":255,"g":255,"b":255}],
   "grid": [[0,1],[1,0]]},
  {"palette": [{"r":255,"g":0,"b":0}],
   "grid": [[0,0],[0,0]]}
]"#;

#[test]
fn loads_frames_in_source_order() {
    let gallery = TinyGallery::from_json(TWO_FRAMES).unwrap();
    assert_eq!(gallery.len(), 2);

    let first = gallery.frame_at(0).unwrap();
    assert_eq!(first.palette().len(), 2);
    assert_eq!(first.palette().color_at(1).unwrap(), colors::WHITE);
    assert_eq!(first.grid().index_at(1, 0).unwrap(), 1);

    let second = gallery.frame_at(1).unwrap();
    assert_eq!(second.palette().color_at(0).unwrap(), colors::RED);
}

#[test]
fn next_advances_and_wraps() {
    let gallery = TinyGallery::from_json(TWO_FRAMES).unwrap();
    for cursor in 0..gallery.len() {
        assert_eq!(gallery.next(cursor), (cursor + 1) % gallery.len());
    }
    // advancing from the last index must wrap to 0
    assert_eq!(gallery.next(gallery.len() - 1), 0);
}

#[test]
fn empty_source_is_rejected() {
    let err = TinyGallery::from_json("[]").unwrap_err();
    assert!(matches!(err, Error::EmptyGallery));
}

#[test]
fn ragged_grid_is_rejected() {
    let source = r#"[
      {"palette": [{"r":0,"g":0,"b":0},{"r":9,"g":9,"b":9}],
       "grid": [[0,1],[1]]}
    ]"#;
    let err = TinyGallery::from_json(source).unwrap_err();
    match err {
        Error::RaggedGrid {
            row,
            expected,
            found,
        } => assert_eq!((row, expected, found), (1, 2, 1)),
        other => panic!("expected RaggedGrid, got {other:?}"),
    }
}

#[test]
fn wrong_grid_shape_is_rejected() {
    let source = r#"[
      {"palette": [{"r":0,"g":0,"b":0}],
       "grid": [[0,0,0],[0,0,0]]}
    ]"#;
    let err = TinyGallery::from_json(source).unwrap_err();
    assert!(matches!(
        err,
        Error::GridDimensions {
            width: 3,
            height: 2,
            expected_width: 2,
            expected_height: 2,
        }
    ));
}

#[test]
fn oversized_channel_is_rejected() {
    let source = r#"[
      {"palette": [{"r":300,"g":0,"b":0}],
       "grid": [[0,0],[0,0]]}
    ]"#;
    let err = TinyGallery::from_json(source).unwrap_err();
    assert!(matches!(
        err,
        Error::MalformedPalette {
            index: 0,
            value: 300,
        }
    ));
}

#[test]
fn grid_index_past_palette_is_rejected_at_load() {
    let source = r#"[
      {"palette": [{"r":0,"g":0,"b":0}],
       "grid": [[0,1],[0,0]]}
    ]"#;
    let err = TinyGallery::from_json(source).unwrap_err();
    assert!(matches!(
        err,
        Error::PaletteIndexOverflow {
            index: 1,
            palette_len: 1,
        }
    ));
}

#[test]
fn malformed_json_is_rejected() {
    let err = TinyGallery::from_json("not a gallery").unwrap_err();
    assert!(matches!(err, Error::SourceSyntax(_)));
}

#[test]
fn gallery_needs_at_least_one_frame() {
    let err = TinyGallery::from_frames([]).unwrap_err();
    assert!(matches!(err, Error::EmptyGallery));
}
