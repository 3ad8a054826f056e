use image::Rgb;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// プレースホルダー画像の背景色。
///
/// `#RRGGBB` / `#RGB` 形式の16進表記、または基本的な色名から生成できます。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundColor(Rgb<u8>);

/// 色指定の解析に失敗した場合のエラー。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("色指定 '{0}' を解釈できません (例: '#2196F3', '#FFF', 'black')")]
    Invalid(String),
}

// 名前で指定できる色の一覧 (小文字で比較する)
const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("black", [0x00, 0x00, 0x00]),
    ("white", [0xFF, 0xFF, 0xFF]),
    ("red", [0xFF, 0x00, 0x00]),
    ("green", [0x00, 0x80, 0x00]),
    ("blue", [0x00, 0x00, 0xFF]),
    ("yellow", [0xFF, 0xFF, 0x00]),
    ("cyan", [0x00, 0xFF, 0xFF]),
    ("magenta", [0xFF, 0x00, 0xFF]),
    ("gray", [0x80, 0x80, 0x80]),
    ("grey", [0x80, 0x80, 0x80]),
    ("orange", [0xFF, 0xA5, 0x00]),
    ("purple", [0x80, 0x00, 0x80]),
];

impl BackgroundColor {
    /// RGB の3要素から直接生成します。
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(Rgb([r, g, b]))
    }

    /// 色指定の文字列を解析します。
    ///
    /// # 引数
    /// * `spec`: `#2196F3` のような16進表記、`#FFF` のような短縮表記、または `black` などの色名。
    ///
    /// # 戻り値
    /// * `Ok(BackgroundColor)`: 解析に成功した場合。
    /// * `Err(ColorError::Invalid)`: どの形式にも当てはまらない場合。
    pub fn parse(spec: &str) -> Result<Self, ColorError> {
        let trimmed = spec.trim();
        let invalid = || ColorError::Invalid(spec.to_string());

        if let Some(hex) = trimmed.strip_prefix('#') {
            if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            return match hex.len() {
                6 => {
                    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
                    Ok(Self::from_rgb(
                        channel(0).map_err(|_| invalid())?,
                        channel(2).map_err(|_| invalid())?,
                        channel(4).map_err(|_| invalid())?,
                    ))
                }
                3 => {
                    // 短縮表記は各桁を2回繰り返す (#F80 -> #FF8800)
                    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map(|v| v * 17);
                    Ok(Self::from_rgb(
                        channel(0).map_err(|_| invalid())?,
                        channel(1).map_err(|_| invalid())?,
                        channel(2).map_err(|_| invalid())?,
                    ))
                }
                _ => Err(invalid()),
            };
        }

        let lower = trimmed.to_ascii_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(_, [r, g, b])| Self::from_rgb(*r, *g, *b))
            .ok_or_else(invalid)
    }

    pub fn rgb(&self) -> Rgb<u8> {
        self.0
    }
}

impl FromStr for BackgroundColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for BackgroundColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0 .0;
        write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_six_digit_hex() {
        let color = BackgroundColor::parse("#2196F3").unwrap();
        assert_eq!(color.rgb(), Rgb([0x21, 0x96, 0xF3]));
    }

    #[test]
    fn parse_is_case_insensitive_for_hex_and_names() {
        assert_eq!(
            BackgroundColor::parse("#ff9800"),
            BackgroundColor::parse("#FF9800")
        );
        assert_eq!(
            BackgroundColor::parse("Black").unwrap(),
            BackgroundColor::from_rgb(0, 0, 0)
        );
    }

    #[test]
    fn parse_expands_short_hex() {
        let color = BackgroundColor::parse("#F80").unwrap();
        assert_eq!(color.rgb(), Rgb([0xFF, 0x88, 0x00]));
    }

    #[test]
    fn parse_rejects_malformed_specs() {
        for spec in ["", "#", "#12345", "#GGGGGG", "2196F3", "not-a-color", "#ＦＦＦ"] {
            assert_eq!(
                BackgroundColor::parse(spec),
                Err(ColorError::Invalid(spec.to_string())),
                "spec = {:?}",
                spec
            );
        }
    }

    #[test]
    fn display_formats_as_upper_hex() {
        let color: BackgroundColor = "#9c27b0".parse().unwrap();
        assert_eq!(color.to_string(), "#9C27B0");
    }
}
