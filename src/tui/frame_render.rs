// src/tui/frame_render.rs — Draw an RGB image in the terminal with half blocks.
//
// Each cell shows two vertically stacked pixels: `▀` in the top pixel's color
// over a background of the bottom pixel's color.

use image::imageops::FilterType;
use image::RgbImage;
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

use crate::api::types::EncodedFrame;
use crate::infra::errors::DeckError;

const UPPER_HALF: &str = "\u{2580}";

/// Decode a base64 JPEG/PNG/BMP into RGB pixels.
pub fn decode_frame(frame: &EncodedFrame) -> Result<RgbImage, DeckError> {
    let bytes = frame.decode()?;
    let img = image::load_from_memory(&bytes)?;
    Ok(img.to_rgb8())
}

/// Cell size that fits `img` into `cols × rows` cells, keeping its aspect
/// ratio. Rows hold two pixels each.
pub fn fit(img_w: u32, img_h: u32, cols: u16, rows: u16) -> (u32, u32) {
    if img_w == 0 || img_h == 0 || cols == 0 || rows == 0 {
        return (0, 0);
    }
    let max_w = cols as f64;
    let max_h = rows as f64 * 2.0;
    let scale = (max_w / img_w as f64).min(max_h / img_h as f64);
    let w = ((img_w as f64 * scale).floor() as u32).max(1);
    let h = ((img_h as f64 * scale).floor() as u32).max(1);
    (w, h)
}

pub fn half_block_lines(img: &RgbImage, cols: u16, rows: u16) -> Vec<Line<'static>> {
    let (w, h) = fit(img.width(), img.height(), cols, rows);
    if w == 0 || h == 0 {
        return Vec::new();
    }
    let scaled = if (w, h) == img.dimensions() {
        img.clone()
    } else {
        image::imageops::resize(img, w, h, FilterType::Triangle)
    };

    let pad = (cols as u32).saturating_sub(w) / 2;
    (0..h)
        .step_by(2)
        .map(|y| {
            let mut spans = Vec::with_capacity(w as usize + 1);
            if pad > 0 {
                spans.push(Span::raw(" ".repeat(pad as usize)));
            }
            for x in 0..w {
                let top = scaled.get_pixel(x, y).0;
                let bottom = if y + 1 < h {
                    scaled.get_pixel(x, y + 1).0
                } else {
                    [0, 0, 0]
                };
                spans.push(Span::styled(
                    UPPER_HALF,
                    Style::default()
                        .fg(Color::Rgb(top[0], top[1], top[2]))
                        .bg(Color::Rgb(bottom[0], bottom[1], bottom[2])),
                ));
            }
            Line::from(spans)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_fit_keeps_aspect() {
        // 640x480 into 80 cols x 30 rows (60 px tall): height bound
        assert_eq!(fit(640, 480, 80, 30), (80, 60));
        // wide terminal: height still bound
        assert_eq!(fit(640, 480, 200, 30), (80, 60));
        assert_eq!(fit(640, 480, 0, 30), (0, 0));
    }

    #[test]
    fn test_two_rows_become_one_line() {
        let mut img = RgbImage::new(2, 2);
        img.put_pixel(0, 0, Rgb([255, 0, 0]));
        img.put_pixel(0, 1, Rgb([0, 0, 255]));
        img.put_pixel(1, 0, Rgb([0, 255, 0]));
        img.put_pixel(1, 1, Rgb([9, 9, 9]));

        let lines = half_block_lines(&img, 2, 1);
        assert_eq!(lines.len(), 1);
        let spans = &lines[0].spans;
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].style.fg, Some(Color::Rgb(255, 0, 0)));
        assert_eq!(spans[0].style.bg, Some(Color::Rgb(0, 0, 255)));
        assert_eq!(spans[1].style.fg, Some(Color::Rgb(0, 255, 0)));
    }

    #[test]
    fn test_decode_png_frame() {
        let img = RgbImage::from_pixel(4, 2, Rgb([10, 20, 30]));
        let mut buf = std::io::Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
        let frame = EncodedFrame::encode(buf.get_ref());
        let decoded = decode_frame(&frame).unwrap();
        assert_eq!(decoded.dimensions(), (4, 2));
        assert_eq!(decoded.get_pixel(3, 1).0, [10, 20, 30]);
    }

    #[test]
    fn test_garbage_frame_is_decode_error() {
        let frame = EncodedFrame::encode(b"not an image");
        assert!(matches!(decode_frame(&frame), Err(DeckError::Decode(_))));
    }
}
