// src/gui/fonts.rs
// egui's bundled fonts have no Hangul; borrow one from the OS if present.

use std::sync::Arc;

use eframe::egui::{self, FontData, FontDefinitions, FontFamily};

const CANDIDATES: &[&str] = &[
    "C:\\Windows\\Fonts\\malgun.ttf",
    "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    "/Library/Fonts/NanumGothic.ttf",
    "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
];

/// Returns the path that was loaded, if any.
pub fn install_hangul(ctx: &egui::Context) -> Option<&'static str> {
    let (path, bytes) = CANDIDATES
        .iter()
        .find_map(|p| std::fs::read(p).ok().map(|b| (*p, b)))?;

    let mut fonts = FontDefinitions::default();
    fonts.font_data.insert(s!("hangul"), Arc::new(FontData::from_owned(bytes)));
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        // fallback after the defaults so Latin keeps egui's look
        fonts.families.entry(family).or_default().push(s!("hangul"));
    }
    ctx.set_fonts(fonts);
    Some(path)
}
