use std::io::Cursor;

use image::{ImageFormat, Rgba as ImageRgba, RgbaImage};
use test_log::test;

use tintview::{
    AnsiTerminal, ChannelLayout, Error, PixelBuffer, RenderConfig, Renderer, Rgba,
    TerminalGeometry, decode,
    render::{composite::composite, layout::plan, sample::sample},
};

fn render_to_string(buffer: PixelBuffer<'_>, geometry: TerminalGeometry) -> String {
    let mut term = AnsiTerminal::with_geometry(Vec::new(), Some(geometry));
    let geometry = RenderConfig::default().geometry_for(&term);
    let grid = plan(buffer.width(), buffer.height(), geometry);
    Renderer::new(buffer, grid).render(&mut term).unwrap();
    String::from_utf8(term.into_inner()).unwrap()
}

#[test]
fn white_square_renders_two_white_cells() {
    let data = [255u8; 16];
    let buffer = PixelBuffer::new(2, 2, ChannelLayout::Rgba, &data).unwrap();
    let out = render_to_string(buffer, TerminalGeometry::DEFAULT);

    let white = "\x1b[48;2;255;255;255m \x1b[0m";
    let expected = format!("\x1b[2J\x1b[1;1H\x1b[?25l{white}{white}\n\x1b[?25h");
    assert_eq!(out, expected);
}

#[test]
fn transparent_pixel_renders_black() {
    let data = [100, 150, 200, 0];
    let buffer = PixelBuffer::new(1, 1, ChannelLayout::Rgba, &data).unwrap();
    assert_eq!(composite(sample(&buffer, 0.0, 0.0)), Rgba::OPAQUE_BLACK);

    let out = render_to_string(buffer, TerminalGeometry::DEFAULT);
    assert!(out.contains("\x1b[48;2;0;0;0m \x1b[0m\n"));
    assert!(!out.contains("100;150;200"));
}

#[test]
fn rows_are_emitted_in_scan_order() {
    // 4x8 image: top half red, bottom half blue. Planned as 4x4 cells.
    let mut img = RgbaImage::new(4, 8);
    for (_, y, px) in img.enumerate_pixels_mut() {
        *px = if y < 4 {
            ImageRgba([255, 0, 0, 255])
        } else {
            ImageRgba([0, 0, 255, 255])
        };
    }
    let buffer = PixelBuffer::new(4, 8, ChannelLayout::Rgba, img.as_raw()).unwrap();
    let out = render_to_string(buffer, TerminalGeometry::DEFAULT);

    let lines: Vec<&str> = out.split('\n').collect();
    // Four image rows plus the trailing show-cursor sequence.
    assert_eq!(lines.len(), 5);
    assert!(lines[0].ends_with(&"\x1b[48;2;255;0;0m \x1b[0m".repeat(4)));
    assert_eq!(lines[3], "\x1b[48;2;0;0;255m \x1b[0m".repeat(4));
    assert_eq!(lines[4], "\x1b[?25h");
}

#[test]
fn failed_geometry_query_uses_default() {
    let data = vec![255u8; 3 * 400 * 400];
    let buffer = PixelBuffer::new(400, 400, ChannelLayout::Rgb, &data).unwrap();
    let term = AnsiTerminal::with_geometry(Vec::new(), None);
    let geometry = RenderConfig::default().geometry_for(&term);
    let grid = plan(buffer.width(), buffer.height(), geometry);
    assert_eq!((grid.width, grid.height), (40, 20));
}

#[test]
fn decoded_png_flows_through_pipeline() {
    let mut encoded = Vec::new();
    RgbaImage::from_pixel(6, 6, ImageRgba([10, 20, 30, 255]))
        .write_to(&mut Cursor::new(&mut encoded), ImageFormat::Png)
        .unwrap();
    let image = decode::decode_bytes(&encoded).unwrap();
    let buffer = image.buffer().unwrap();
    let out = render_to_string(buffer, TerminalGeometry::DEFAULT);
    // 6x6 -> height min(20, 3) = 3, width 6.
    assert_eq!(out.matches("\x1b[48;2;10;20;30m \x1b[0m").count(), 18);
}

#[test]
fn garbage_bytes_are_decode_failures() {
    assert!(matches!(
        decode::decode_bytes(&[]),
        Err(Error::Decode { .. })
    ));
    assert!(matches!(
        decode::decode_bytes(b"\x89PNG\r\n\x1a\n\0\0"),
        Err(Error::Decode { .. })
    ));
}
