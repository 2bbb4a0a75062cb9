use std::collections::HashMap;

use crate::element::{Content, Element};
use crate::geometry::Rect;
use crate::text::{display_width, wrap_words};
use crate::types::{Align, Border, Direction, Justify, Overflow, Position, Size, TextWrap};

/// Layout output: one rect per element. Descendants of a scroll container
/// get virtual rects (as if the whole content were visible); rendering and
/// hit testing subtract the container's scroll offset.
#[derive(Debug, Default)]
pub struct LayoutResult {
    rects: HashMap<String, Rect>,
    scrolls: HashMap<String, ScrollArea>,
}

/// Viewport and content extent of one scroll container.
#[derive(Debug, Clone, Copy)]
pub struct ScrollArea {
    pub viewport: Rect,
    pub content_height: u16,
}

impl LayoutResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&Rect> {
        self.rects.get(id)
    }

    /// Insert a rect directly. Mainly useful in tests.
    pub fn insert(&mut self, id: impl Into<String>, rect: Rect) {
        self.rects.insert(id.into(), rect);
    }

    pub fn scroll_area(&self, id: &str) -> Option<ScrollArea> {
        self.scrolls.get(id).copied()
    }

    /// Largest valid scroll offset for a container (0 when content fits).
    pub fn max_scroll(&self, id: &str) -> u16 {
        self.scrolls
            .get(id)
            .map(|area| area.content_height.saturating_sub(area.viewport.height))
            .unwrap_or(0)
    }
}

pub fn layout(element: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    layout_element(element, available, &mut result);
    result
}

fn layout_element(element: &Element, available: Rect, result: &mut LayoutResult) {
    if element.position == Position::Absolute {
        layout_absolute(element, available, result);
        return;
    }

    // Margin shrinks available space and offsets position
    let margin = &element.margin;
    let after_margin = available.shrink(margin.top, margin.right, margin.bottom, margin.left);

    let width = resolve_size(element.width, after_margin.width, element, true);
    let height = resolve_size(element.height, after_margin.height, element, false);
    let rect = Rect::new(after_margin.x, after_margin.y, width, height);
    result.rects.insert(element.id.clone(), rect);

    layout_children(element, rect, result);
}

/// Absolute elements anchor to the parent rect through their offsets.
/// `right`/`bottom` win over nothing; `left`/`top` win over them.
fn layout_absolute(element: &Element, parent: Rect, result: &mut LayoutResult) {
    let width = resolve_size(element.width, parent.width, element, true);
    let height = resolve_size(element.height, parent.height, element, false);

    let x = match (element.left, element.right) {
        (Some(left), _) => offset_coord(parent.x, left),
        (None, Some(right)) => {
            offset_coord(parent.right().saturating_sub(width), -right)
        }
        (None, None) => parent.x,
    };
    let y = match (element.top, element.bottom) {
        (Some(top), _) => offset_coord(parent.y, top),
        (None, Some(bottom)) => {
            offset_coord(parent.bottom().saturating_sub(height), -bottom)
        }
        (None, None) => parent.y,
    };

    let rect = Rect::new(x, y, width, height);
    result.rects.insert(element.id.clone(), rect);
    layout_children(element, rect, result);
}

fn offset_coord(base: u16, offset: i16) -> u16 {
    (base as i32 + offset as i32).max(0) as u16
}

fn layout_children(element: &Element, rect: Rect, result: &mut LayoutResult) {
    let Content::Children(children) = &element.content else {
        return;
    };

    if children.is_empty() {
        return;
    }

    let flow_children: Vec<_> = children
        .iter()
        .filter(|c| c.position != Position::Absolute)
        .collect();
    let absolute_children: Vec<_> = children
        .iter()
        .filter(|c| c.position == Position::Absolute)
        .collect();

    let border_size = if element.style.border == Border::None {
        0
    } else {
        1
    };

    let inner = rect.shrink(
        element.padding.top + border_size,
        element.padding.right + border_size,
        element.padding.bottom + border_size,
        element.padding.left + border_size,
    );

    if element.overflow == Overflow::Scroll {
        layout_scroll_column(element, inner, &flow_children, result);
    } else {
        layout_flex(element, inner, &flow_children, result);
    }

    for child in absolute_children {
        layout_element(child, rect, result);
    }
}

/// Flow layout inside a scroll container: a column laid out in virtual
/// space with no height limit. Records the container's scroll area.
fn layout_scroll_column(
    element: &Element,
    inner: Rect,
    flow_children: &[&Element],
    result: &mut LayoutResult,
) {
    let mut y = inner.y;
    let mut first = true;

    for child in flow_children {
        if !first {
            y += element.gap;
        }
        first = false;

        let avail_w = inner
            .width
            .saturating_sub(child.margin.horizontal_total());
        let width = probe_width(child, avail_w);
        let height = match child.height {
            Size::Fixed(n) => clamp_minmax(n, child.min_height, child.max_height),
            Size::Percent(p) => {
                clamp_minmax((inner.height as f32 * p) as u16, child.min_height, child.max_height)
            }
            // Fill has no meaning without a bound, fall back to content
            Size::Fill | Size::Auto => estimate_height(child, width),
        };

        let child_align = child.align_self.unwrap_or(element.align);
        let (x, width) = match child_align {
            Align::Start => (inner.x + child.margin.left, width),
            Align::Center => (
                inner.x + child.margin.left + avail_w.saturating_sub(width) / 2,
                width,
            ),
            Align::End => (
                inner.x + child.margin.left + avail_w.saturating_sub(width),
                width,
            ),
            Align::Stretch => (inner.x + child.margin.left, avail_w),
        };

        y += child.margin.top;
        let child_rect = Rect::new(x, y, width, height);
        result.rects.insert(child.id.clone(), child_rect);
        layout_children(child, child_rect, result);

        y += height + child.margin.bottom;
    }

    let content_height = y.saturating_sub(inner.y);
    result.scrolls.insert(
        element.id.clone(),
        ScrollArea {
            viewport: inner,
            content_height,
        },
    );
}

fn layout_flex(
    element: &Element,
    inner: Rect,
    flow_children: &[&Element],
    result: &mut LayoutResult,
) {
    let is_row = element.direction == Direction::Row;
    let main_size = if is_row { inner.width } else { inner.height };
    let cross_size = if is_row { inner.height } else { inner.width };

    // First pass: fixed sizes and flex item count
    let mut fixed_total = 0u16;
    let mut flex_count = 0u16;
    let gap_total = element.gap * flow_children.len().saturating_sub(1) as u16;

    for child in flow_children {
        let child_margin_main = if is_row {
            child.margin.horizontal_total()
        } else {
            child.margin.vertical_total()
        };

        let child_main_size = if is_row { child.width } else { child.height };
        match child_main_size {
            Size::Fixed(n) => fixed_total += n + child_margin_main,
            Size::Auto => {
                let estimated = estimate_main(child, is_row, inner.width);
                fixed_total += estimated + child_margin_main;
            }
            Size::Fill => flex_count += 1,
            Size::Percent(p) => fixed_total += (main_size as f32 * p) as u16 + child_margin_main,
        }
    }

    let remaining = main_size.saturating_sub(fixed_total + gap_total);
    let flex_size = if flex_count > 0 {
        remaining / flex_count
    } else {
        0
    };

    // Resolve main sizes including margins
    let mut child_sizes: Vec<(u16, u16, u16)> = Vec::with_capacity(flow_children.len());
    let mut total_child_size = 0u16;

    for child in flow_children {
        let (margin_before, margin_after) = if is_row {
            (child.margin.left, child.margin.right)
        } else {
            (child.margin.top, child.margin.bottom)
        };

        let child_main_size = if is_row { child.width } else { child.height };
        let main = match child_main_size {
            Size::Fixed(n) => n,
            Size::Auto => estimate_main(child, is_row, inner.width),
            Size::Fill => flex_size,
            Size::Percent(p) => (main_size as f32 * p) as u16,
        };

        let (min_main, max_main) = if is_row {
            (child.min_width, child.max_width)
        } else {
            (child.min_height, child.max_height)
        };
        let main = clamp_minmax(main, min_main, max_main);

        child_sizes.push((main, margin_before, margin_after));
        total_child_size += main + margin_before + margin_after;
    }

    // Justify spacing
    let total_with_gaps = total_child_size + gap_total;
    let extra_space = main_size.saturating_sub(total_with_gaps);

    let (start_offset, between_gap) = match element.justify {
        Justify::Start => (0, element.gap),
        Justify::End => (extra_space, element.gap),
        Justify::Center => (extra_space / 2, element.gap),
        Justify::SpaceBetween => {
            if flow_children.len() > 1 {
                (0, extra_space / (flow_children.len() - 1) as u16 + element.gap)
            } else {
                (0, element.gap)
            }
        }
    };

    // Second pass: place children
    let mut offset = start_offset;

    for (i, child) in flow_children.iter().enumerate() {
        let (main, margin_before, margin_after) = child_sizes[i];

        let (cross_margin_before, cross_margin_after) = if is_row {
            (child.margin.top, child.margin.bottom)
        } else {
            (child.margin.left, child.margin.right)
        };

        let child_align = child.align_self.unwrap_or(element.align);
        let child_cross_size = if is_row { child.height } else { child.width };
        let available_cross = cross_size.saturating_sub(cross_margin_before + cross_margin_after);

        let cross = match child_cross_size {
            Size::Fixed(n) => n,
            Size::Fill => available_cross,
            Size::Auto => {
                if child_align == Align::Stretch {
                    available_cross
                } else {
                    estimate_cross(child, is_row, available_cross).min(available_cross)
                }
            }
            Size::Percent(p) => (cross_size as f32 * p) as u16,
        };

        let (min_cross, max_cross) = if is_row {
            (child.min_height, child.max_height)
        } else {
            (child.min_width, child.max_width)
        };
        let cross = clamp_minmax(cross, min_cross, max_cross);

        let clamped_main = main.min(main_size.saturating_sub(offset + margin_before));
        let clamped_cross = cross.min(available_cross);

        let cross_offset = match child_align {
            Align::Start | Align::Stretch => cross_margin_before,
            Align::Center => {
                cross_margin_before + available_cross.saturating_sub(clamped_cross) / 2
            }
            Align::End => cross_margin_before + available_cross.saturating_sub(clamped_cross),
        };

        let child_rect = if is_row {
            Rect::new(
                inner.x + offset + margin_before,
                inner.y + cross_offset,
                clamped_main,
                clamped_cross,
            )
        } else {
            Rect::new(
                inner.x + cross_offset,
                inner.y + offset + margin_before,
                clamped_cross,
                clamped_main,
            )
        };

        result.rects.insert(child.id.clone(), child_rect);
        layout_children(child, child_rect, result);

        offset += margin_before + main + margin_after + between_gap;
    }
}

fn resolve_size(size: Size, available: u16, element: &Element, is_width: bool) -> u16 {
    let base = match size {
        Size::Fixed(n) => n.min(available),
        Size::Fill => available,
        Size::Auto => {
            if is_width {
                estimate_width(element).min(available)
            } else {
                let width = probe_width(element, available);
                estimate_height(element, width).min(available)
            }
        }
        Size::Percent(p) => ((available as f32 * p) as u16).min(available),
    };

    let (min, max) = if is_width {
        (element.min_width, element.max_width)
    } else {
        (element.min_height, element.max_height)
    };

    clamp_minmax(base, min, max).min(available)
}

fn clamp_minmax(value: u16, min: Option<u16>, max: Option<u16>) -> u16 {
    let with_min = min.map_or(value, |m| value.max(m));
    max.map_or(with_min, |m| with_min.min(m))
}

/// Estimated main-axis extent of a child in its parent's flow.
fn estimate_main(child: &Element, parent_is_row: bool, parent_inner_width: u16) -> u16 {
    if parent_is_row {
        estimate_width(child)
    } else {
        let avail_w = parent_inner_width.saturating_sub(child.margin.horizontal_total());
        estimate_height(child, probe_width(child, avail_w))
    }
}

/// Estimated cross-axis extent of a child in its parent's flow.
fn estimate_cross(child: &Element, parent_is_row: bool, available_cross: u16) -> u16 {
    if parent_is_row {
        estimate_height(child, probe_width(child, u16::MAX))
    } else {
        let _ = available_cross;
        estimate_width(child)
    }
}

/// The width a child will get, resolved well enough to measure wrapped
/// text against before heights are known.
fn probe_width(element: &Element, available: u16) -> u16 {
    let base = match element.width {
        Size::Fixed(n) => n,
        Size::Percent(p) => (available as f32 * p) as u16,
        Size::Fill => available,
        Size::Auto => estimate_width(element).min(available),
    };
    clamp_minmax(base, element.min_width, element.max_width).min(available)
}

/// Intrinsic width: widest content line plus padding and border.
fn estimate_width(element: &Element) -> u16 {
    if let Size::Fixed(n) = element.width {
        return clamp_minmax(n, element.min_width, element.max_width);
    }

    let border_size = if element.style.border == Border::None {
        0
    } else {
        2
    };
    let padding = element.padding.horizontal_total();

    let content = match &element.content {
        Content::Text(text) => text
            .lines()
            .map(|line| display_width(line) as u16)
            .max()
            .unwrap_or(0),
        Content::TextInput {
            value, placeholder, ..
        } => {
            let placeholder_width = placeholder
                .as_deref()
                .map(|p| display_width(p) as u16)
                .unwrap_or(0);
            (display_width(value) as u16).max(placeholder_width)
        }
        Content::Children(children) => {
            if children.is_empty() {
                0
            } else if element.direction == Direction::Row {
                let gap_total = element.gap * children.len().saturating_sub(1) as u16;
                children
                    .iter()
                    .map(|c| estimate_width(c) + c.margin.horizontal_total())
                    .sum::<u16>()
                    + gap_total
            } else {
                children
                    .iter()
                    .map(|c| estimate_width(c) + c.margin.horizontal_total())
                    .max()
                    .unwrap_or(0)
            }
        }
        Content::None => 0,
    };

    clamp_minmax(
        content + padding + border_size,
        element.min_width,
        element.max_width,
    )
}

/// Content height at a given width. Wrap-aware so scroll containers get a
/// truthful content extent.
fn estimate_height(element: &Element, width: u16) -> u16 {
    if let Size::Fixed(n) = element.height {
        return clamp_minmax(n, element.min_height, element.max_height);
    }

    let border_size = if element.style.border == Border::None {
        0
    } else {
        2
    };
    let padding = element.padding.vertical_total();
    let content_width = width.saturating_sub(padding_h(element) + border_size);

    let content = match &element.content {
        Content::Text(text) => match element.text_wrap {
            TextWrap::Wrap => wrap_words(text, content_width.max(1) as usize).len() as u16,
            _ => text.lines().count().max(1) as u16,
        },
        Content::TextInput { .. } => 1,
        Content::Children(children) => {
            if children.is_empty() {
                0
            } else if element.direction == Direction::Column {
                let gap_total = element.gap * children.len().saturating_sub(1) as u16;
                children
                    .iter()
                    .map(|c| {
                        let avail =
                            content_width.saturating_sub(c.margin.horizontal_total());
                        estimate_height(c, probe_width(c, avail)) + c.margin.vertical_total()
                    })
                    .sum::<u16>()
                    + gap_total
            } else {
                children
                    .iter()
                    .map(|c| {
                        let avail =
                            content_width.saturating_sub(c.margin.horizontal_total());
                        estimate_height(c, probe_width(c, avail)) + c.margin.vertical_total()
                    })
                    .max()
                    .unwrap_or(0)
            }
        }
        Content::None => 0,
    };

    clamp_minmax(
        content + padding + border_size,
        element.min_height,
        element.max_height,
    )
}

fn padding_h(element: &Element) -> u16 {
    element.padding.horizontal_total()
}
