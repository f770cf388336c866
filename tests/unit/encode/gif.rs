use super::*;
use crate::foundation::color::Rgb;

fn palette() -> Palette {
    Palette::build(Rgb::WHITE, Rgb::BLACK, &[])
}

fn decode(bytes: &[u8]) -> (u16, u16, Vec<gif::Frame<'static>>) {
    let mut options = gif::DecodeOptions::new();
    options.set_color_output(gif::ColorOutput::Indexed);
    let mut decoder = options.read_info(std::io::Cursor::new(bytes)).unwrap();
    let size = (decoder.width(), decoder.height());
    let mut frames = Vec::new();
    while let Some(frame) = decoder.read_next_frame().unwrap() {
        frames.push(frame.clone());
    }
    (size.0, size.1, frames)
}

#[test]
fn empty_sequence_is_an_encode_error() {
    let seq = AnimationSequence::new(4, 4, palette());
    assert!(matches!(
        seq.encode().unwrap_err(),
        TickgifError::Encode(_)
    ));
}

#[test]
fn single_full_frame_roundtrips() {
    let mut seq = AnimationSequence::new(4, 3, palette());
    seq.push(IndexedFrame::solid(4, 3, 0), FRAME_DELAY_CS, Disposal::Keep);

    let bytes = seq.encode().unwrap();
    assert_eq!(&bytes[0..6], b"GIF89a");

    let (w, h, frames) = decode(&bytes);
    assert_eq!((w, h), (4, 3));
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].delay, FRAME_DELAY_CS);
    assert_eq!(frames[0].dispose, gif::DisposalMethod::Keep);
}

#[test]
fn delta_frames_keep_their_placement_rect() {
    let mut seq = AnimationSequence::new(8, 8, palette());
    seq.push(IndexedFrame::solid(8, 8, 0), FRAME_DELAY_CS, Disposal::Keep);
    seq.push(
        IndexedFrame {
            left: 3,
            top: 2,
            width: 4,
            height: 5,
            pixels: vec![1; 20],
        },
        FRAME_DELAY_CS,
        Disposal::Keep,
    );

    let (_, _, frames) = decode(&seq.encode().unwrap());
    assert_eq!(frames.len(), 2);
    assert_eq!(
        (frames[1].left, frames[1].top, frames[1].width, frames[1].height),
        (3, 2, 4, 5)
    );
}

#[test]
fn transparent_index_is_written_into_frames() {
    let mut p = palette();
    p.set_transparent(0);
    let mut seq = AnimationSequence::new(2, 2, p);
    seq.push(
        IndexedFrame::solid(2, 2, 0),
        FRAME_DELAY_CS,
        Disposal::Background,
    );

    let (_, _, frames) = decode(&seq.encode().unwrap());
    assert_eq!(frames[0].transparent, Some(0));
    assert_eq!(frames[0].dispose, gif::DisposalMethod::Background);
}

#[test]
fn frames_exceeding_the_canvas_are_rejected() {
    let mut seq = AnimationSequence::new(4, 4, palette());
    seq.push(
        IndexedFrame {
            left: 2,
            top: 0,
            width: 3,
            height: 4,
            pixels: vec![0; 12],
        },
        FRAME_DELAY_CS,
        Disposal::Keep,
    );
    assert!(matches!(
        seq.encode().unwrap_err(),
        TickgifError::Encode(_)
    ));
}
