use super::label_font::TextBounds;
use image::{Rgb, RgbImage};

/// 描画中の画像 (エンコード前のメモリ上のラスタ)。
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// 指定サイズのキャンバスを作成し、背景色で塗りつぶします。
    pub fn new(width: u32, height: u32, background: Rgb<u8>) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, background),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// テキストの外接矩形をキャンバス中央に置くための描画原点を返します。
    ///
    /// 除算は切り捨て (負方向への丸め) なので、端数は常に左上側に寄ります。
    /// テキストがキャンバスより大きい場合は負の原点になり、はみ出した部分は描画時に切り取られます。
    pub fn center_origin(&self, bounds: &TextBounds) -> (i32, i32) {
        let x = (i64::from(self.width()) - i64::from(bounds.width)).div_euclid(2)
            - i64::from(bounds.left);
        let y = (i64::from(self.height()) - i64::from(bounds.height)).div_euclid(2)
            - i64::from(bounds.top);
        (x as i32, y as i32)
    }

    /// 1ピクセルに `color` を被覆率 `coverage` (0.0..=1.0) で合成します。
    /// キャンバス外の座標は無視します。
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Rgb<u8>, coverage: f32) {
        if x < 0 || y < 0 || x as u32 >= self.width() || y as u32 >= self.height() {
            return;
        }
        let alpha = coverage.clamp(0.0, 1.0);
        if alpha == 0.0 {
            return;
        }
        let pixel = self.image.get_pixel_mut(x as u32, y as u32);
        for (dst, src) in pixel.0.iter_mut().zip(color.0) {
            let mixed = f32::from(*dst) * (1.0 - alpha) + f32::from(src) * alpha;
            *dst = mixed.round() as u8;
        }
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }
}
