use crate::buffer::{Buffer, Cell};
use crate::color::Rgb;
use crate::element::{Content, Element};
use crate::geometry::Rect;
use crate::layout::LayoutResult;
use crate::text::{align_offset, char_width, display_width, truncate_to_width, wrap_words};
use crate::types::{Backdrop, Border, Overflow, Position, TextStyle, TextWrap};

/// One element ready to paint: screen position (may be negative while
/// scrolled partly off), size, clip rect, and stacking order.
struct PaintJob<'a> {
    element: &'a Element,
    sx: i32,
    sy: i32,
    width: u16,
    height: u16,
    clip: Rect,
    layer: i16,
    seq: u32,
}

impl PaintJob<'_> {
    /// Content-box rect in screen coords, inside border and padding.
    fn inner_rect(&self) -> Option<(i32, i32, u16, u16)> {
        let element = self.element;
        let border = if element.effective_style().border == Border::None {
            0u16
        } else {
            1u16
        };
        let pad_x = element.padding.horizontal_total() + border * 2;
        let pad_y = element.padding.vertical_total() + border * 2;
        if self.width <= pad_x || self.height <= pad_y {
            return None;
        }
        Some((
            self.sx + (element.padding.left + border) as i32,
            self.sy + (element.padding.top + border) as i32,
            self.width - pad_x,
            self.height - pad_y,
        ))
    }
}

/// Paint the tree into the buffer. Elements are collected in tree order,
/// then sorted by (layer, order) so positive z-index subtrees paint above
/// everything else, exactly mirroring hit testing.
pub fn render_to_buffer(root: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    let screen = Rect::from_size(buf.width(), buf.height());
    let mut jobs = Vec::new();
    let mut seq = 0u32;
    collect(root, layout, 0, screen, 0, &mut seq, &mut jobs);

    jobs.sort_by_key(|job| (job.layer, job.seq));

    for job in jobs {
        paint(&job, buf);
    }
}

fn collect<'a>(
    element: &'a Element,
    layout: &LayoutResult,
    offset_y: i32,
    clip: Rect,
    layer: i16,
    seq: &mut u32,
    jobs: &mut Vec<PaintJob<'a>>,
) {
    let Some(rect) = layout.get(&element.id) else {
        return;
    };

    let layer = if element.z_index != 0 {
        element.z_index
    } else {
        layer
    };

    let mut sx = rect.x as i32;
    let mut sy = rect.y as i32 - offset_y;
    if element.position == Position::Relative {
        sx += element.left.unwrap_or(0) as i32;
        sy += element.top.unwrap_or(0) as i32;
    }

    *seq += 1;
    jobs.push(PaintJob {
        element,
        sx,
        sy,
        width: rect.width,
        height: rect.height,
        clip,
        layer,
        seq: *seq,
    });

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
        collect(child, layout, child_offset, child_clip, layer, seq, jobs);
    }
}

fn paint(job: &PaintJob, buf: &mut Buffer) {
    let element = job.element;

    if let Backdrop::Dim(strength) = element.backdrop {
        buf.dim(strength);
    }

    if job.width == 0 || job.height == 0 {
        return;
    }
    if job.sx + job.width as i32 <= 0 || job.sy + job.height as i32 <= 0 {
        return;
    }

    let style = element.effective_style();

    if let Some(bg) = &style.background {
        fill_rect(buf, &job.clip, job, bg.to_rgb());
    }

    paint_border(job, buf);

    match &element.content {
        Content::Text(text) => paint_text(job, text, buf),
        Content::TextInput {
            value,
            cursor,
            placeholder,
        } => paint_input(job, value, *cursor, placeholder.as_deref(), buf),
        Content::Children(_) | Content::None => {}
    }
}

fn fill_rect(buf: &mut Buffer, clip: &Rect, job: &PaintJob, bg: Rgb) {
    for row in 0..job.height as i32 {
        for col in 0..job.width as i32 {
            let (x, y) = (job.sx + col, job.sy + row);
            if !in_clip(clip, x, y) {
                continue;
            }
            if let Some(cell) = buf.get_mut(x as u16, y as u16) {
                cell.char = ' ';
                cell.bg = bg;
                cell.wide_continuation = false;
            }
        }
    }
}

fn put_char(
    buf: &mut Buffer,
    clip: &Rect,
    x: i32,
    y: i32,
    ch: char,
    fg: Rgb,
    bg: Option<Rgb>,
    style: TextStyle,
) {
    if !in_clip(clip, x, y) {
        return;
    }
    let (ux, uy) = (x as u16, y as u16);
    let bg = bg.unwrap_or_else(|| buf.get(ux, uy).map(|c| c.bg).unwrap_or_default());
    buf.set(
        ux,
        uy,
        Cell::new(ch).with_fg(fg).with_bg(bg).with_style(style),
    );

    // Mark the spill column of wide characters
    if char_width(ch) == 2 && in_clip(clip, x + 1, y) {
        if let Some(cell) = buf.get_mut(ux + 1, uy) {
            cell.char = ' ';
            cell.bg = bg;
            cell.wide_continuation = true;
        }
    }
}

fn in_clip(clip: &Rect, x: i32, y: i32) -> bool {
    x >= clip.x as i32
        && x < clip.right() as i32
        && y >= clip.y as i32
        && y < clip.bottom() as i32
}

fn paint_border(job: &PaintJob, buf: &mut Buffer) {
    let style = job.element.effective_style();

    let (tl, tr, bl, br, h, v) = match style.border {
        Border::None => return,
        Border::Single => ('┌', '┐', '└', '┘', '─', '│'),
        Border::Double => ('╔', '╗', '╚', '╝', '═', '║'),
        Border::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
        Border::Thick => ('┏', '┓', '┗', '┛', '━', '┃'),
    };

    if job.width < 2 || job.height < 2 {
        return;
    }

    let fg = style
        .foreground
        .map(|c| c.to_rgb())
        .unwrap_or(Rgb::new(255, 255, 255));
    let text_style = style.text_style;
    let clip = &job.clip;

    let (sx, sy) = (job.sx, job.sy);
    let right = sx + job.width as i32 - 1;
    let bottom = sy + job.height as i32 - 1;

    put_char(buf, clip, sx, sy, tl, fg, None, text_style);
    put_char(buf, clip, right, sy, tr, fg, None, text_style);
    put_char(buf, clip, sx, bottom, bl, fg, None, text_style);
    put_char(buf, clip, right, bottom, br, fg, None, text_style);

    for x in (sx + 1)..right {
        put_char(buf, clip, x, sy, h, fg, None, text_style);
        put_char(buf, clip, x, bottom, h, fg, None, text_style);
    }
    for y in (sy + 1)..bottom {
        put_char(buf, clip, sx, y, v, fg, None, text_style);
        put_char(buf, clip, right, y, v, fg, None, text_style);
    }
}

fn paint_text(job: &PaintJob, text: &str, buf: &mut Buffer) {
    let element = job.element;
    let style = element.effective_style();

    let Some((ix, iy, iw, ih)) = job.inner_rect() else {
        return;
    };

    let fg = style
        .foreground
        .map(|c| c.to_rgb())
        .unwrap_or(Rgb::new(255, 255, 255));
    let explicit_bg = style.background.map(|c| c.to_rgb());

    let lines: Vec<String> = match element.text_wrap {
        TextWrap::Wrap => wrap_words(text, iw as usize),
        TextWrap::Truncate => text
            .lines()
            .map(|line| truncate_to_width(line, iw as usize))
            .collect(),
        TextWrap::NoWrap => text.lines().map(str::to_string).collect(),
    };

    for (row, line) in lines.iter().enumerate() {
        if row as u16 >= ih {
            break;
        }
        let y = iy + row as i32;
        let indent = align_offset(display_width(line), iw as usize, element.text_align);
        let mut x = ix + indent as i32;

        for ch in line.chars() {
            let w = char_width(ch).max(1) as i32;
            if x + w > ix + iw as i32 {
                break;
            }
            put_char(buf, &job.clip, x, y, ch, fg, explicit_bg, style.text_style);
            x += w;
        }
    }
}

fn paint_input(
    job: &PaintJob,
    value: &str,
    cursor: usize,
    placeholder: Option<&str>,
    buf: &mut Buffer,
) {
    let element = job.element;
    let style = element.effective_style();

    let Some((ix, iy, iw, _)) = job.inner_rect() else {
        return;
    };

    let fg = style
        .foreground
        .map(|c| c.to_rgb())
        .unwrap_or(Rgb::new(255, 255, 255));
    let explicit_bg = style.background.map(|c| c.to_rgb());

    // Empty and unfocused shows the placeholder, dimmed
    if value.is_empty() && !element.focused {
        if let Some(placeholder) = placeholder {
            let text = truncate_to_width(placeholder, iw as usize);
            let mut x = ix;
            for ch in text.chars() {
                put_char(
                    buf,
                    &job.clip,
                    x,
                    iy,
                    ch,
                    fg,
                    explicit_bg,
                    style.text_style.dim(),
                );
                x += char_width(ch).max(1) as i32;
            }
        }
        return;
    }

    // Slide the window so the cursor stays visible
    let chars: Vec<char> = value.chars().collect();
    let window = iw as usize;
    let start = if element.focused && cursor >= window {
        cursor - window + 1
    } else {
        0
    };

    for (col, ch) in chars.iter().skip(start).take(window).enumerate() {
        let highlight = element.focused && start + col == cursor;
        let (cell_fg, cell_bg) = if highlight {
            cursor_colors(fg, explicit_bg)
        } else {
            (fg, explicit_bg)
        };
        put_char(
            buf,
            &job.clip,
            ix + col as i32,
            iy,
            *ch,
            cell_fg,
            cell_bg,
            style.text_style,
        );
    }

    // Cursor past the end of the value
    if element.focused && cursor >= chars.len() {
        let col = chars.len().saturating_sub(start);
        if col < window {
            let (cell_fg, cell_bg) = cursor_colors(fg, explicit_bg);
            put_char(
                buf,
                &job.clip,
                ix + col as i32,
                iy,
                ' ',
                cell_fg,
                cell_bg,
                style.text_style,
            );
        }
    }
}

/// Cursor cell: swap foreground and background so it reads in any theme.
fn cursor_colors(fg: Rgb, bg: Option<Rgb>) -> (Rgb, Option<Rgb>) {
    let bg = bg.unwrap_or(Rgb::new(0, 0, 0));
    (bg, Some(fg))
}
