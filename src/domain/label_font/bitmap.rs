use super::TextBounds;
use crate::domain::canvas::Canvas;
use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use image::Rgb;

const GLYPH_SIZE: u32 = 8;

/// `font8x8` の 8x8 ビットマップグリフを整数倍に拡大して描画する組み込みフォント。
///
/// 外部ファイルに依存しないため、常に利用できます。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapFace {
    scale: u32,
}

impl BitmapFace {
    pub fn new(scale: u32) -> Self {
        Self {
            scale: scale.max(1),
        }
    }

    fn cell(&self) -> u32 {
        GLYPH_SIZE * self.scale
    }

    // 収録されていない文字は `None` (何も描かずに1文字分進める)
    fn glyph(c: char) -> Option<[u8; 8]> {
        BASIC_FONTS.get(c).or_else(|| LATIN_FONTS.get(c))
    }

    /// 文字数 × セル幅 を幅、セル高さを高さとして返します。空文字列は 0x0 です。
    pub fn measure(&self, text: &str) -> TextBounds {
        let count = text.chars().count() as u32;
        if count == 0 {
            return TextBounds::default();
        }
        TextBounds {
            left: 0,
            top: 0,
            width: count * self.cell(),
            height: self.cell(),
        }
    }

    pub fn draw(&self, canvas: &mut Canvas, text: &str, origin: (i32, i32), color: Rgb<u8>) {
        let scale = self.scale as i32;
        let cell = self.cell() as i32;

        for (index, c) in text.chars().enumerate() {
            let Some(rows) = Self::glyph(c) else {
                continue;
            };
            let glyph_x = origin.0 + index as i32 * cell;
            for (row, bits) in rows.iter().enumerate() {
                for bit in 0..GLYPH_SIZE {
                    // 最下位ビットが左端のピクセル
                    if bits & (1 << bit) == 0 {
                        continue;
                    }
                    let px = glyph_x + bit as i32 * scale;
                    let py = origin.1 + row as i32 * scale;
                    for dy in 0..scale {
                        for dx in 0..scale {
                            canvas.blend_pixel(px + dx, py + dy, color, 1.0);
                        }
                    }
                }
            }
        }
    }
}
