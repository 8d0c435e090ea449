//! Header bar: sidebar toggle, nav dropdowns and the profile panel

use ratatui::layout::Rect;

use crate::app::Page;
use crate::core::{Action, NotifyLevel};
use crate::data::menu::{HEADER_NAV, PROFILE};
use crate::modules::dropdown::rect_contains;

pub const MENU_BUTTON: &str = " ≡ ";
pub const PROFILE_BUTTON: &str = " ◉ Profile ▾ ";
const NAV_GAP: u16 = 2;

/// Overlays that hang off the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Nav(usize),
    Profile,
}

/// Clickable regions of the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderTarget {
    MenuToggle,
    Nav(usize),
    Profile,
}

/// Inner (borderless) header line split into its clickable targets.
/// Shared by the renderer and mouse hit testing so both agree.
pub fn targets(area: Rect) -> Vec<(HeaderTarget, Rect)> {
    let inner = inner_line(area);
    let mut out = Vec::new();
    if inner.width == 0 {
        return out;
    }

    let menu_width = text_width(MENU_BUTTON).min(inner.width);
    out.push((
        HeaderTarget::MenuToggle,
        Rect::new(inner.x, inner.y, menu_width, 1),
    ));

    let profile_width = text_width(PROFILE_BUTTON);
    let right_edge = inner.x + inner.width;
    let profile_x = right_edge.saturating_sub(profile_width).max(inner.x);

    let mut x = inner.x + menu_width + NAV_GAP;
    for (idx, nav) in HEADER_NAV.iter().enumerate() {
        let width = text_width(nav.label) + 2;
        if x + width > profile_x {
            break;
        }
        out.push((HeaderTarget::Nav(idx), Rect::new(x, inner.y, width, 1)));
        x += width + NAV_GAP;
    }

    if profile_x >= x {
        out.push((
            HeaderTarget::Profile,
            Rect::new(profile_x, inner.y, right_edge - profile_x, 1),
        ));
    }
    out
}

pub fn hit(area: Rect, col: u16, row: u16) -> Option<HeaderTarget> {
    targets(area)
        .into_iter()
        .find(|(_, rect)| rect_contains(*rect, col, row))
        .map(|(target, _)| target)
}

/// Entries listed in an overlay, top to bottom.
pub fn overlay_entries(overlay: Overlay) -> Vec<&'static str> {
    match overlay {
        Overlay::Nav(idx) => HEADER_NAV
            .get(idx)
            .map(|nav| nav.entries.to_vec())
            .unwrap_or_default(),
        Overlay::Profile => PROFILE.actions.to_vec(),
    }
}

/// Lines drawn above the selectable entries of an overlay.
pub fn overlay_preamble(overlay: Overlay) -> usize {
    match overlay {
        Overlay::Nav(_) => 0,
        // name, role, email, separator
        Overlay::Profile => 4,
    }
}

/// Where an overlay hangs below its header target, clipped to `screen`.
pub fn overlay_rect(header: Rect, screen: Rect, overlay: Overlay) -> Option<Rect> {
    let target = match overlay {
        Overlay::Nav(idx) => HeaderTarget::Nav(idx),
        Overlay::Profile => HeaderTarget::Profile,
    };
    let (_, anchor) = targets(header).into_iter().find(|(t, _)| *t == target)?;

    let entries = overlay_entries(overlay);
    let longest = entries
        .iter()
        .map(|entry| text_width(entry))
        .chain(match overlay {
            Overlay::Profile => vec![text_width(PROFILE.email)],
            Overlay::Nav(_) => Vec::new(),
        })
        .max()
        .unwrap_or(0);
    let width = (longest + 4).max(anchor.width).min(screen.width);
    let height = (entries.len() + overlay_preamble(overlay) + 2) as u16;

    let y = header.y + header.height;
    let max_x = (screen.x + screen.width).saturating_sub(width);
    let x = anchor.x.min(max_x);
    let height = height.min((screen.y + screen.height).saturating_sub(y));
    if height == 0 {
        return None;
    }
    Some(Rect::new(x, y, width, height))
}

/// Resolves a click inside an open overlay to the entry under it.
pub fn overlay_entry_at(bounds: Rect, overlay: Overlay, row: u16) -> Option<usize> {
    let first = bounds.y + 1 + overlay_preamble(overlay) as u16;
    if row < first {
        return None;
    }
    let idx = (row - first) as usize;
    (idx < overlay_entries(overlay).len()).then_some(idx)
}

/// What choosing an overlay entry does.
pub fn choose(overlay: Overlay, entry: usize) -> Action {
    let entries = overlay_entries(overlay);
    let Some(label) = entries.get(entry).copied() else {
        return Action::None;
    };
    match (overlay, label) {
        (Overlay::Nav(_), "Dashboard") => Action::Navigate(Page::Home),
        (Overlay::Nav(_), "Project Tree") => Action::Navigate(Page::ProjectTree),
        (Overlay::Profile, "Sign out") => Action::Notify(
            format!("{} signed out (demo)", PROFILE.name),
            NotifyLevel::Warn,
        ),
        _ => Action::Notify(format!("{label} has no page yet"), NotifyLevel::Info),
    }
}

fn inner_line(area: Rect) -> Rect {
    if area.width < 2 || area.height < 3 {
        return Rect::new(area.x, area.y, 0, 0);
    }
    Rect::new(area.x + 1, area.y + 1, area.width - 2, 1)
}

pub fn text_width(text: &str) -> u16 {
    text.chars().count() as u16
}
