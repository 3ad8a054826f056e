use super::TextBounds;
use crate::domain::canvas::Canvas;
use image::Rgb;
use rusttype::{point, Font, PositionedGlyph, Scale};

/// `rusttype` で読み込んだ TrueType / OpenType フォントと描画サイズの組。
#[derive(Clone)]
pub struct TrueTypeFace {
    font: Font<'static>,
    scale: Scale,
}

impl TrueTypeFace {
    /// フォントファイルのバイト列から生成します。解析できない場合は `None` を返します。
    pub fn from_bytes(bytes: Vec<u8>, size_px: f32) -> Option<Self> {
        let font = Font::try_from_vec(bytes)?;
        Some(Self {
            font,
            scale: Scale::uniform(size_px),
        })
    }

    // ベースラインを ascent の位置に置いて1行にレイアウトする。
    // 原点 (0, 0) は行の左上になる。
    fn layout<'a>(&'a self, text: &'a str) -> impl Iterator<Item = PositionedGlyph<'a>> + 'a {
        let ascent = self.font.v_metrics(self.scale).ascent;
        self.font.layout(text, self.scale, point(0.0, ascent))
    }

    pub fn measure(&self, text: &str) -> TextBounds {
        let mut bounds: Option<(i32, i32, i32, i32)> = None;
        for glyph in self.layout(text) {
            if let Some(bb) = glyph.pixel_bounding_box() {
                bounds = Some(match bounds {
                    None => (bb.min.x, bb.min.y, bb.max.x, bb.max.y),
                    Some((x0, y0, x1, y1)) => (
                        x0.min(bb.min.x),
                        y0.min(bb.min.y),
                        x1.max(bb.max.x),
                        y1.max(bb.max.y),
                    ),
                });
            }
        }

        match bounds {
            Some((x0, y0, x1, y1)) => TextBounds {
                left: x0,
                top: y0,
                width: (x1 - x0) as u32,
                height: (y1 - y0) as u32,
            },
            None => TextBounds::default(),
        }
    }

    pub fn draw(&self, canvas: &mut Canvas, text: &str, origin: (i32, i32), color: Rgb<u8>) {
        for glyph in self.layout(text) {
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|x, y, coverage| {
                    canvas.blend_pixel(
                        origin.0 + bb.min.x + x as i32,
                        origin.1 + bb.min.y + y as i32,
                        color,
                        coverage,
                    );
                });
            }
        }
    }
}

impl std::fmt::Debug for TrueTypeFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrueTypeFace")
            .field("glyph_count", &self.font.glyph_count())
            .field("scale", &self.scale)
            .finish()
    }
}
