use crate::element::{Content, Element};
use crate::geometry::Rect;
use crate::layout::LayoutResult;
use crate::types::{Overflow, Position};

/// Find the topmost clickable element at the given screen coordinates.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_with(layout, root, x, y, &|el| el.clickable && !el.disabled)
}

/// Find the topmost focusable element at the given screen coordinates.
pub fn hit_test_focusable(
    layout: &LayoutResult,
    root: &Element,
    x: u16,
    y: u16,
) -> Option<String> {
    hit_with(layout, root, x, y, &|el| el.focusable && !el.disabled)
}

/// Find the topmost scroll container at the given screen coordinates.
pub fn hit_test_scrollable(
    layout: &LayoutResult,
    root: &Element,
    x: u16,
    y: u16,
) -> Option<String> {
    hit_with(layout, root, x, y, &|el| el.overflow == Overflow::Scroll)
}

/// Walk the tree in paint order collecting matching elements under the
/// point, then keep the one painted last: highest layer, then latest in
/// tree order. Scroll containers shift and clip their descendants the same
/// way rendering does.
fn hit_with(
    layout: &LayoutResult,
    root: &Element,
    x: u16,
    y: u16,
    predicate: &dyn Fn(&Element) -> bool,
) -> Option<String> {
    let screen = Rect::new(0, 0, u16::MAX, u16::MAX);
    let mut seq = 0u32;
    let mut best: Option<(i16, u32, String)> = None;

    visit(
        root, layout, x, y, 0, screen, 0, &mut seq, predicate, &mut best,
    );

    best.map(|(_, _, id)| id)
}

#[allow(clippy::too_many_arguments)]
fn visit(
    element: &Element,
    layout: &LayoutResult,
    x: u16,
    y: u16,
    offset_y: i32,
    clip: Rect,
    layer: i16,
    seq: &mut u32,
    predicate: &dyn Fn(&Element) -> bool,
    best: &mut Option<(i16, u32, String)>,
) {
    let Some(rect) = layout.get(&element.id) else {
        return;
    };

    let layer = if element.z_index != 0 {
        element.z_index
    } else {
        layer
    };

    *seq += 1;
    let this_seq = *seq;

    if let Some(screen_rect) = on_screen(element, *rect, offset_y, clip) {
        if screen_rect.contains(x, y) && predicate(element) {
            let better = match best {
                Some((best_layer, best_seq, _)) => {
                    (layer, this_seq) > (*best_layer, *best_seq)
                }
                None => true,
            };
            if better {
                *best = Some((layer, this_seq, element.id.clone()));
            }
        }
    }

    let Content::Children(children) = &element.content else {
        return;
    };

    let (child_offset, child_clip) = if element.overflow == Overflow::Scroll {
        let viewport = layout
            .scroll_area(&element.id)
            .map(|area| area.viewport)
            .unwrap_or(*rect);
        (
            offset_y + element.scroll_y as i32,
            clip.intersect(&viewport),
        )
    } else {
        (offset_y, clip)
    };

    for child in children {
        visit(
            child, layout, x, y, child_offset, child_clip, layer, seq, predicate, best,
        );
    }
}

/// The visible screen rect of an element, or None when scrolled or clipped
/// fully out of view.
fn on_screen(element: &Element, rect: Rect, offset_y: i32, clip: Rect) -> Option<Rect> {
    let mut sx = rect.x as i32;
    let mut sy = rect.y as i32 - offset_y;

    if element.position == Position::Relative {
        sx += element.left.unwrap_or(0) as i32;
        sy += element.top.unwrap_or(0) as i32;
    }

    if sx < 0 || sy + (rect.height as i32) <= 0 {
        return None;
    }

    let screen_rect = Rect::new(
        sx as u16,
        sy.max(0) as u16,
        rect.width,
        rect.height.saturating_sub(if sy < 0 { (-sy) as u16 } else { 0 }),
    );

    let visible = screen_rect.intersect(&clip);
    if visible.is_empty() {
        None
    } else {
        Some(visible)
    }
}
