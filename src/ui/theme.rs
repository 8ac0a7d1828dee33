use ratatui::style::Color;

use crate::model::RiskLevel;
use crate::notify::ToastLevel;
use crate::view::ViewStatus;

pub const BRAND_BLUE: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_WARN: Color = Color::Rgb(0xea, 0xb3, 0x08);
pub const STATUS_HIGH: Color = Color::Rgb(0xf9, 0x73, 0x16);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);

pub fn risk_color(level: RiskLevel) -> Color {
    match level {
        RiskLevel::Low => STATUS_OK,
        RiskLevel::Medium => STATUS_WARN,
        RiskLevel::High => STATUS_HIGH,
        RiskLevel::Critical => STATUS_ERROR,
    }
}

pub fn status_color(status: ViewStatus) -> Color {
    match status {
        ViewStatus::Idle => MUTED_TEXT,
        ViewStatus::Loading => BRAND_BLUE,
        ViewStatus::Ready => STATUS_OK,
        ViewStatus::Failed => STATUS_ERROR,
    }
}

pub fn toast_color(level: ToastLevel) -> Color {
    match level {
        ToastLevel::Info => BRAND_BLUE,
        ToastLevel::Success => STATUS_OK,
        ToastLevel::Error => STATUS_ERROR,
    }
}
