//! Inline style fragments shared by the pages.

pub(crate) const PAGE: &str = "min-height: 100vh; background: #111827; color: #ffffff; font-family: 'Inter', system-ui, sans-serif;";
pub(crate) const PANEL: &str = "background: #1f2937; padding: 16px; border-radius: 6px; margin-bottom: 24px;";
pub(crate) const TABLE: &str = "min-width: 100%; border-collapse: collapse; background: #1f2937; color: #ffffff;";
pub(crate) const CELL: &str = "padding: 8px 16px; border-bottom: 1px solid #4b5563; text-align: left;";
pub(crate) const INPUT: &str = "padding: 6px 12px; background: #374151; color: #ffffff; border: none; border-radius: 4px;";
pub(crate) const MESSAGE: &str = "margin-top: 16px; color: #eab308; font-size: 0.875rem;";
pub(crate) const ERROR: &str = "color: #ef4444; font-size: 0.875rem;";
pub(crate) const SELECTED_ROW: &str = "cursor: pointer; background: #374151;";
pub(crate) const ROW: &str = "cursor: pointer;";

pub(crate) fn button(color: &str) -> String {
    format!(
        "padding: 4px 10px; margin-right: 6px; background: {color}; color: #ffffff; border: none; border-radius: 4px; cursor: pointer;"
    )
}

pub(crate) const BLUE: &str = "#2563eb";
pub(crate) const GREEN: &str = "#16a34a";
pub(crate) const RED: &str = "#dc2626";
pub(crate) const PURPLE: &str = "#9333ea";
pub(crate) const GRAY: &str = "#4b5563";
