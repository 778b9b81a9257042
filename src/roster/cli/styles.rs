use console::Style;
use once_cell::sync::Lazy;

pub static MENU_HEADER: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static FIELD_LABEL: Lazy<Style> = Lazy::new(|| Style::new().cyan());
pub static SEPARATOR: Lazy<Style> = Lazy::new(|| Style::new().dim());
