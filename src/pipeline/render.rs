use chrono::{Datelike, NaiveDateTime};

use crate::error::RenderError;
use crate::pipeline::segment::{day_bounds, segment_day};
use crate::types::log::{DutyRow, LogSheet};
use crate::types::trip::DutyStatusEntry;

pub const SHEET_WIDTH: u32 = 920;
pub const SHEET_HEIGHT: u32 = 720;

const PAD: f64 = 30.0;
const W: f64 = SHEET_WIDTH as f64;

const GRID_LEFT: f64 = 120.0;
const TOTAL_COL_W: f64 = 58.0;
const ROW_H: f64 = 32.0;

const FONT_STACK: &str = "DejaVu Sans, Arial, sans-serif";

const ROW_LABELS: [&[&str]; 4] = [
    &["1. Off Duty"],
    &["2. Sleeper", "Berth"],
    &["3. Driving"],
    &["4. On Duty", "(not driving)"],
];
const ROW_FILL_COLORS: [&str; 4] = ["#f0fdf4", "#eff6ff", "#fefce8", "#fff7ed"];
const ROW_LINE_COLORS: [&str; 4] = ["#15803d", "#1d4ed8", "#ca8a04", "#c2410c"];

/// Statuses worth calling out in the remarks box: every non-driving stop.
const REMARK_NEEDLES: [&str; 6] = ["Rest", "Break", "Fueling", "Pickup", "Drop-off", "Restart"];
const MAX_REMARKS: usize = 6;

#[derive(Clone, Copy, PartialEq)]
enum Anchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Copy)]
struct Label<'a> {
    size: f64,
    bold: bool,
    italic: bool,
    color: &'a str,
    anchor: Anchor,
}

impl Default for Label<'_> {
    fn default() -> Self {
        Self {
            size: 10.0,
            bold: false,
            italic: false,
            color: "#111",
            anchor: Anchor::Start,
        }
    }
}

struct Canvas {
    body: String,
}

impl Canvas {
    fn new() -> Self {
        Self {
            body: String::with_capacity(32 * 1024),
        }
    }

    fn hline(&mut self, x1: f64, y: f64, x2: f64, color: &str, width: f64) {
        self.body.push_str(&format!(
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{}"/>"#,
            x1, y, x2, y, color, width
        ));
    }

    fn vline(&mut self, x: f64, y1: f64, y2: f64, color: &str, width: f64) {
        self.body.push_str(&format!(
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{}"/>"#,
            x, y1, x, y2, color, width
        ));
    }

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: Option<&str>, stroke: Option<(&str, f64)>) {
        let fill_attr = fill.unwrap_or("none");
        match stroke {
            Some((color, width)) => self.body.push_str(&format!(
                r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
                x, y, w, h, fill_attr, color, width
            )),
            None => self.body.push_str(&format!(
                r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}"/>"#,
                x, y, w, h, fill_attr
            )),
        }
    }

    fn text(&mut self, content: &str, x: f64, y: f64, label: Label) {
        let mut attrs = String::new();
        if label.bold {
            attrs.push_str(r#" font-weight="bold""#);
        }
        if label.italic {
            attrs.push_str(r#" font-style="italic""#);
        }
        match label.anchor {
            Anchor::Start => {}
            Anchor::Middle => attrs.push_str(r#" text-anchor="middle""#),
            Anchor::End => attrs.push_str(r#" text-anchor="end""#),
        }
        self.body.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" font-family="{}" font-size="{}" fill="{}"{}>{}</text>"#,
            x,
            y,
            FONT_STACK,
            label.size,
            label.color,
            attrs,
            escape_xml(content)
        ));
    }
}

fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Builds the complete Driver's Daily Log sheet for one calendar day as an
/// SVG document reproducing the paper form layout: header with date boxes
/// and mileage summary, the 4x24 duty grid with the day's step-line trace,
/// per-row hour totals, remarks, shipping documents and the 70-hour recap.
///
/// Deterministic: identical inputs produce an identical SVG string.
pub fn log_sheet_svg(sheet: &LogSheet) -> Result<String, RenderError> {
    if sheet.total_sheets == 0
        || sheet.sheet_number == 0
        || sheet.sheet_number > sheet.total_sheets
    {
        return Err(RenderError::SvgError(format!(
            "Invalid sheet numbering: {} of {}",
            sheet.sheet_number, sheet.total_sheets
        )));
    }

    let mut c = Canvas::new();
    c.rect(0.0, 0.0, W, SHEET_HEIGHT as f64, Some("#ffffff"), None);

    let mut cur_y = PAD;
    draw_header(&mut c, sheet, cur_y);
    cur_y += 50.0;

    draw_from_to(&mut c, sheet, cur_y);
    cur_y += 22.0;

    cur_y = draw_summary_boxes(&mut c, sheet, cur_y);

    let grid_top = cur_y + 24.0;
    let row_hours = draw_duty_grid(&mut c, sheet, cur_y, grid_top);
    cur_y = grid_top + ROW_H * 4.0 + 18.0;

    cur_y = draw_remarks(&mut c, sheet, cur_y);
    cur_y = draw_shipping(&mut c, cur_y);
    cur_y = draw_recap(&mut c, &row_hours, cur_y);

    // Outer document border.
    c.rect(
        PAD / 2.0,
        PAD / 2.0,
        W - PAD,
        cur_y - PAD / 2.0 + 8.0,
        None,
        Some(("#333", 1.5)),
    );

    Ok(format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">{body}</svg>"#,
        w = SHEET_WIDTH,
        h = SHEET_HEIGHT,
        body = c.body
    ))
}

fn draw_header(c: &mut Canvas, sheet: &LogSheet, cur_y: f64) {
    c.text(
        "Driver's Daily Log",
        PAD,
        cur_y + 15.0,
        Label { size: 17.0, bold: true, ..Label::default() },
    );
    c.text(
        "(24 hours)",
        PAD,
        cur_y + 27.0,
        Label { size: 8.0, color: "#666", ..Label::default() },
    );

    // Month / day / year boxes, centered left of the page midline.
    let db_y = cur_y + 3.0;
    let db_h = 20.0;
    let db_mid_x = W / 2.0 - 20.0;
    let centered = |size, bold| Label { size, bold, anchor: Anchor::Middle, ..Label::default() };
    let caption = Label { size: 7.0, color: "#888", anchor: Anchor::Middle, ..Label::default() };

    let fields = [
        (db_mid_x - 55.0, 38.0, sheet.date.month().to_string(), "(month)"),
        (db_mid_x - 11.0, 30.0, sheet.date.day().to_string(), "(day)"),
        (db_mid_x + 25.0, 42.0, sheet.date.year().to_string(), "(year)"),
    ];
    for (x, w, value, name) in fields {
        c.rect(x, db_y, w, db_h, Some("#f8fafc"), Some(("#999", 0.7)));
        c.text(&value, x + w / 2.0, db_y + 14.0, centered(11.0, true));
        c.text(name, x + w / 2.0, db_y + db_h + 9.0, caption);
    }

    let right = |size, bold, color| Label { size, bold, color, anchor: Anchor::End, ..Label::default() };
    c.text(
        "Original - File at home terminal.",
        W - PAD,
        cur_y + 10.0,
        right(7.0, false, "#555"),
    );
    c.text(
        "Duplicate - Driver retains in his/her possession for 8 days.",
        W - PAD,
        cur_y + 20.0,
        right(7.0, false, "#555"),
    );
    c.text(
        &format!("Sheet {} of {}", sheet.sheet_number, sheet.total_sheets),
        W - PAD,
        cur_y + 32.0,
        right(8.5, true, "#333"),
    );
}

fn draw_from_to(c: &mut Canvas, sheet: &LogSheet, cur_y: f64) {
    c.text("From:", PAD, cur_y + 11.0, Label { size: 9.0, bold: true, ..Label::default() });
    c.hline(PAD + 32.0, cur_y + 12.0, W / 2.0 - 8.0, "#999", 0.7);
    c.text(
        sheet.from_location,
        PAD + 36.0,
        cur_y + 11.0,
        Label { size: 9.0, color: "#222", ..Label::default() },
    );

    c.text("To:", W / 2.0 + 4.0, cur_y + 11.0, Label { size: 9.0, bold: true, ..Label::default() });
    c.hline(W / 2.0 + 22.0, cur_y + 12.0, W - PAD, "#999", 0.7);
    c.text(
        sheet.to_location,
        W / 2.0 + 26.0,
        cur_y + 11.0,
        Label { size: 9.0, color: "#222", ..Label::default() },
    );
}

fn draw_summary_boxes(c: &mut Canvas, sheet: &LogSheet, cur_y: f64) -> f64 {
    let box_h = 30.0;
    let left_w = W / 2.0 - PAD - 8.0;
    let right_x = W / 2.0 + 4.0;
    let right_w = W - right_x - PAD;
    let mile_box_w = (left_w * 0.42).floor();

    let value = Label { size: 13.0, bold: true, color: "#00414B", anchor: Anchor::Middle, ..Label::default() };
    let caption = Label { size: 7.0, color: "#666", anchor: Anchor::Middle, ..Label::default() };

    let miles = [
        (PAD, sheet.day_miles, "Total Miles Driving Today"),
        (PAD + mile_box_w + 6.0, sheet.total_miles, "Total Mileage Today"),
    ];
    for (x, amount, name) in miles {
        c.rect(x, cur_y, mile_box_w, box_h, Some("#f8fafc"), Some(("#aaa", 0.7)));
        c.text(
            &format!("{}", amount.round() as i64),
            x + mile_box_w / 2.0,
            cur_y + 18.0,
            value,
        );
        c.text(name, x + mile_box_w / 2.0, cur_y + box_h + 10.0, caption);
    }

    let truck_box_w = mile_box_w * 2.0 + 6.0;
    c.rect(PAD, cur_y + box_h + 18.0, truck_box_w, 24.0, Some("#f8fafc"), Some(("#aaa", 0.7)));
    c.text(
        "Truck/Tractor & Trailer Numbers or License Plate(s)/State",
        PAD + 4.0,
        cur_y + box_h + 27.0,
        Label { size: 7.0, color: "#777", ..Label::default() },
    );
    c.text(
        sheet.truck_number,
        PAD + truck_box_w / 2.0,
        cur_y + box_h + 38.0,
        Label { size: 9.0, bold: true, anchor: Anchor::Middle, ..Label::default() },
    );

    let right_fields = [
        ("Name of Carrier or Carriers", sheet.carrier),
        ("Main Office Address", sheet.main_office),
        ("Home Terminal Address", sheet.home_terminal),
    ];
    let mut field_y = cur_y;
    for (name, val) in right_fields {
        c.rect(right_x, field_y, right_w, 24.0, Some("#f8fafc"), Some(("#aaa", 0.7)));
        c.text(name, right_x + 4.0, field_y + 9.0, Label { size: 7.0, color: "#888", ..Label::default() });
        c.text(val, right_x + 4.0, field_y + 20.0, Label { size: 8.5, bold: true, ..Label::default() });
        field_y += 28.0;
    }

    cur_y + box_h + 18.0 + 24.0 + 18.0
}

/// Draws the 24-hour grid and the day's duty trace; returns per-row hours.
fn draw_duty_grid(c: &mut Canvas, sheet: &LogSheet, cur_y: f64, grid_top: f64) -> [f64; 4] {
    let grid_right = W - PAD - TOTAL_COL_W - 4.0;
    let grid_w = grid_right - GRID_LEFT;
    let grid_h = ROW_H * 4.0;

    let small = |size, bold, color| Label { size, bold, color, anchor: Anchor::Middle, ..Label::default() };

    // Hour scale: midnight at both edges, Noon called out by name.
    c.text("Mid-", GRID_LEFT, cur_y + 9.0, small(7.0, false, "#444"));
    c.text("night", GRID_LEFT, cur_y + 17.0, small(7.0, false, "#444"));
    for h in 1..=23u32 {
        let x = GRID_LEFT + h as f64 / 24.0 * grid_w;
        if h == 12 {
            c.text("Noon", x, cur_y + 14.0, small(8.5, true, "#111"));
        } else {
            let display = if h <= 12 { h } else { h - 12 };
            c.text(&display.to_string(), x, cur_y + 14.0, small(7.0, false, "#555"));
        }
    }
    c.text("Mid-", grid_right, cur_y + 9.0, small(7.0, false, "#444"));
    c.text("night", grid_right, cur_y + 17.0, small(7.0, false, "#444"));
    c.text("Total", grid_right + TOTAL_COL_W / 2.0 + 4.0, cur_y + 9.0, small(7.5, false, "#333"));
    c.text("Hours", grid_right + TOTAL_COL_W / 2.0 + 4.0, cur_y + 18.0, small(7.5, false, "#333"));

    // Row backgrounds and left-hand labels.
    for (i, label_lines) in ROW_LABELS.iter().enumerate() {
        let row_y = grid_top + i as f64 * ROW_H;
        c.rect(GRID_LEFT, row_y, grid_w, ROW_H, Some(ROW_FILL_COLORS[i]), None);
        c.rect(GRID_LEFT, row_y, grid_w, ROW_H, None, Some(("#bbb", 0.6)));
        for (li, line) in label_lines.iter().enumerate() {
            c.text(
                line,
                GRID_LEFT - 5.0,
                row_y + 12.0 + li as f64 * 11.0,
                Label { size: 8.0, color: "#222", anchor: Anchor::End, ..Label::default() },
            );
        }
    }

    // Hour verticals (major every 6h) and quarter-hour ticks; the half-hour
    // tick is longer, and ticks hang from both edges of every row.
    for h in 0..=24u32 {
        let x = GRID_LEFT + h as f64 / 24.0 * grid_w;
        let is_major = h % 6 == 0;
        let (color, width) = if is_major { ("#888", 1.0) } else { ("#d1d5db", 0.5) };
        c.vline(x, grid_top, grid_top + grid_h, color, width);
        if h < 24 {
            for q in 1..=3u32 {
                let qx = GRID_LEFT + (h as f64 + q as f64 / 4.0) / 24.0 * grid_w;
                let tick_len = if q == 2 { 7.0 } else { 4.0 };
                for r in 0..4 {
                    let row_y = grid_top + r as f64 * ROW_H;
                    c.vline(qx, row_y, row_y + tick_len, "#bbb", 0.5);
                    c.vline(qx, row_y + ROW_H - tick_len, row_y + ROW_H, "#bbb", 0.5);
                }
            }
        }
    }

    // Step-line trace through the grid.
    let segments = segment_day(sheet.timeline, sheet.date, DutyRow::from_status);
    let row_center = |row: DutyRow| grid_top + row.index() as f64 * ROW_H + ROW_H / 2.0;
    let seg_x = |fraction: f64| GRID_LEFT + fraction * grid_w;

    for (i, seg) in segments.segments.iter().enumerate() {
        let color = ROW_LINE_COLORS[seg.row.index()];
        let (x1, x2) = (seg_x(seg.start_fraction), seg_x(seg.end_fraction));
        let cy = row_center(seg.row);
        if i > 0 {
            // Connector from the previous segment's end at the shared
            // boundary: vertical step into this row.
            let prev = &segments.segments[i - 1];
            c.body.push_str(&format!(
                r#"<path d="M {:.2} {:.2} L {:.2} {:.2}" fill="none" stroke="{}" stroke-width="2.5" stroke-linecap="square" stroke-linejoin="miter"/>"#,
                seg_x(prev.end_fraction),
                row_center(prev.row),
                x1,
                cy,
                color
            ));
        }
        c.body.push_str(&format!(
            r#"<path d="M {:.2} {:.2} L {:.2} {:.2}" fill="none" stroke="{}" stroke-width="2.5" stroke-linecap="square" stroke-linejoin="miter"/>"#,
            x1, cy, x2, cy, color
        ));
    }

    // Per-row hour totals at the right edge.
    let mut row_hours = [0.0f64; 4];
    for (i, minutes) in segments.row_minutes.iter().enumerate() {
        let hours = minutes / 60.0;
        row_hours[i] = hours;
        let row_y = grid_top + i as f64 * ROW_H;
        c.rect(grid_right + 4.0, row_y, TOTAL_COL_W - 4.0, ROW_H, Some("#f8fafc"), Some(("#bbb", 0.6)));
        c.text(
            &format!("{:.2}", hours),
            grid_right + 4.0 + (TOTAL_COL_W - 4.0) / 2.0,
            row_y + ROW_H / 2.0 + 4.0,
            Label {
                size: 9.5,
                bold: true,
                color: if hours > 0.0 { "#00414B" } else { "#aaa" },
                anchor: Anchor::Middle,
                ..Label::default()
            },
        );
    }

    row_hours
}

fn remark_stops<'a>(timeline: &'a [DutyStatusEntry], sheet: &LogSheet) -> Vec<&'a DutyStatusEntry> {
    let (day_start, day_end) = day_bounds(sheet.date);
    timeline
        .iter()
        .filter(|e| e.start < day_end && e.end > day_start)
        .filter(|e| REMARK_NEEDLES.iter().any(|needle| e.status.contains(needle)))
        .take(MAX_REMARKS)
        .collect()
}

fn format_stop_time(time: NaiveDateTime) -> String {
    time.format("%I:%M %p").to_string()
}

fn draw_remarks(c: &mut Canvas, sheet: &LogSheet, mut cur_y: f64) -> f64 {
    c.text("Remarks", PAD, cur_y + 11.0, Label { size: 9.5, bold: true, ..Label::default() });
    cur_y += 16.0;
    c.rect(PAD, cur_y, W - PAD * 2.0, 56.0, Some("#fafafa"), Some(("#bbb", 0.7)));

    let column_w = (W - PAD * 2.0) / 2.0;
    let mut x = PAD + 6.0;
    let mut y = cur_y + 13.0;
    for (i, stop) in remark_stops(sheet.timeline, sheet).into_iter().enumerate() {
        if i == 3 {
            x = PAD + 6.0 + column_w;
            y = cur_y + 13.0;
        }
        c.text(
            &format!(
                "{} \u{2013} {} ({} min)",
                format_stop_time(stop.start),
                stop.status,
                stop.duration_minutes.round() as i64
            ),
            x,
            y,
            Label { size: 8.0, color: "#333", ..Label::default() },
        );
        y += 13.0;
    }

    cur_y + 66.0
}

fn draw_shipping(c: &mut Canvas, mut cur_y: f64) -> f64 {
    c.text("Shipping Documents:", PAD, cur_y + 11.0, Label { size: 9.0, bold: true, ..Label::default() });
    c.hline(PAD + 120.0, cur_y + 12.0, W / 2.0 + 60.0, "#bbb", 0.7);
    cur_y += 18.0;

    c.text("DVL or Manifest No.", PAD, cur_y + 10.0, Label { size: 8.0, ..Label::default() });
    c.hline(PAD + 110.0, cur_y + 11.0, W / 2.0, "#bbb", 0.7);
    c.text("or", PAD, cur_y + 22.0, Label { size: 8.0, ..Label::default() });
    c.hline(PAD + 18.0, cur_y + 23.0, W / 2.0, "#bbb", 0.7);
    cur_y += 30.0;

    c.text("Shipper & Commodity", PAD, cur_y + 10.0, Label { size: 8.0, ..Label::default() });
    c.hline(PAD + 120.0, cur_y + 11.0, W - PAD, "#bbb", 0.7);
    cur_y += 20.0;

    let center = Label { size: 7.5, color: "#555", anchor: Anchor::Middle, ..Label::default() };
    c.text(
        "Enter name of place you reported and where released from work and when and where each change of duty occurred.",
        W / 2.0,
        cur_y + 10.0,
        center,
    );
    c.text("Use time standard of home terminal.", W / 2.0, cur_y + 21.0, center);
    cur_y + 32.0
}

fn draw_recap(c: &mut Canvas, row_hours: &[f64; 4], cur_y: f64) -> f64 {
    let recap_h = 90.0;
    c.rect(PAD, cur_y, W - PAD * 2.0, recap_h, Some("#f8fafc"), Some(("#bbb", 0.7)));

    c.text("Recap:", PAD + 6.0, cur_y + 12.0, Label { size: 8.5, bold: true, ..Label::default() });
    c.text("Complete at", PAD + 6.0, cur_y + 24.0, Label { size: 7.5, ..Label::default() });
    c.text("end of day", PAD + 6.0, cur_y + 35.0, Label { size: 7.5, ..Label::default() });
    c.vline(PAD + 80.0, cur_y, cur_y + recap_h, "#ccc", 0.7);

    let col_x = PAD + 88.0;
    c.text("70 Hour / 8 Day Drivers", col_x, cur_y + 12.0, Label { size: 8.5, bold: true, ..Label::default() });
    c.text(
        "(Property-carrying, 70-hr/8-day cycle)",
        col_x,
        cur_y + 24.0,
        Label { size: 7.0, color: "#666", ..Label::default() },
    );

    let total_on_duty = row_hours[DutyRow::Driving.index()] + row_hours[DutyRow::OnDuty.index()];
    let sub_cols = [
        ("A.", ["On duty hours", "today (lines 3+4)"], format!("{:.2}", total_on_duty)),
        ("B.", ["Total on duty", "last 7 days"], "\u{2014}".to_string()),
        ("C.", ["Hrs available", "tomorrow"], "\u{2014}".to_string()),
    ];
    for (i, (head, caption_lines, value)) in sub_cols.iter().enumerate() {
        let x = col_x + 180.0 + i as f64 * 110.0;
        c.text(head, x, cur_y + 12.0, Label { size: 8.5, bold: true, ..Label::default() });
        c.rect(x, cur_y + 16.0, 100.0, recap_h - 22.0, Some("#fff"), Some(("#ccc", 0.6)));
        for (li, line) in caption_lines.iter().enumerate() {
            c.text(line, x + 4.0, cur_y + 28.0 + li as f64 * 11.0, Label { size: 7.0, color: "#666", ..Label::default() });
        }
        c.text(
            value,
            x + 50.0,
            cur_y + 72.0,
            Label { size: 11.0, bold: true, color: "#00414B", anchor: Anchor::Middle, ..Label::default() },
        );
    }

    c.text(
        "*34-hr restart resets 70-hr cycle",
        W - PAD - 4.0,
        cur_y + recap_h - 6.0,
        Label { size: 7.0, color: "#888", italic: true, anchor: Anchor::End, ..Label::default() },
    );

    cur_y + recap_h + 6.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(status: &str, start: &str, end: &str, is_driving: bool) -> DutyStatusEntry {
        let start: NaiveDateTime = start.parse().expect("start");
        let end: NaiveDateTime = end.parse().expect("end");
        DutyStatusEntry {
            status: status.to_string(),
            start,
            end,
            duration_minutes: (end - start).num_seconds() as f64 / 60.0,
            mile_marker: None,
            is_driving,
        }
    }

    fn sample_timeline() -> Vec<DutyStatusEntry> {
        vec![
            entry("On-Duty (Pickup)", "2025-03-01T08:00:00", "2025-03-01T09:00:00", false),
            entry("Driving", "2025-03-01T09:00:00", "2025-03-01T17:00:00", true),
            entry("Off-Duty (30min Break)", "2025-03-01T17:00:00", "2025-03-01T17:30:00", false),
            entry("Driving", "2025-03-01T17:30:00", "2025-03-01T20:30:00", true),
            entry("Off-Duty (10hr Rest)", "2025-03-01T20:30:00", "2025-03-02T06:30:00", false),
        ]
    }

    fn sample_sheet(timeline: &[DutyStatusEntry]) -> LogSheet<'_> {
        LogSheet {
            date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            timeline,
            total_miles: 605.0,
            day_miles: 605.0,
            carrier: "Spotter Logistics Inc.",
            main_office: "123 Logistics Blvd, Chicago, IL 60601",
            home_terminal: "456 Depot St, Chicago, IL 60602",
            truck_number: "TRK-2026-001",
            from_location: "Chicago, IL",
            to_location: "Dallas, TX",
            sheet_number: 1,
            total_sheets: 2,
        }
    }

    #[test]
    fn svg_carries_the_fixed_form_text() {
        let timeline = sample_timeline();
        let svg = log_sheet_svg(&sample_sheet(&timeline)).expect("svg");
        assert!(svg.contains("Driver&apos;s Daily Log") || svg.contains("Driver's Daily Log"));
        assert!(svg.contains("Noon"));
        assert!(svg.contains("Sheet 1 of 2"));
        assert!(svg.contains("Spotter Logistics Inc."));
        assert!(svg.contains("70 Hour / 8 Day Drivers"));
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn row_totals_are_printed_with_two_decimals() {
        let timeline = sample_timeline();
        let svg = log_sheet_svg(&sample_sheet(&timeline)).expect("svg");
        // 11h driving, 1.5h on duty/break split per classification.
        assert!(svg.contains(">11.00<"));
    }

    #[test]
    fn remarks_list_the_days_stops() {
        let timeline = sample_timeline();
        let svg = log_sheet_svg(&sample_sheet(&timeline)).expect("svg");
        assert!(svg.contains("On-Duty (Pickup) (60 min)"));
        assert!(svg.contains("Off-Duty (30min Break) (30 min)"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let timeline = sample_timeline();
        let sheet = sample_sheet(&timeline);
        assert_eq!(
            log_sheet_svg(&sheet).expect("first"),
            log_sheet_svg(&sheet).expect("second")
        );
    }

    #[test]
    fn invalid_sheet_numbering_is_rejected() {
        let timeline = sample_timeline();
        let mut sheet = sample_sheet(&timeline);
        sheet.sheet_number = 3;
        assert!(log_sheet_svg(&sheet).is_err());
    }

    #[test]
    fn trace_uses_row_stroke_colors() {
        let timeline = sample_timeline();
        let svg = log_sheet_svg(&sample_sheet(&timeline)).expect("svg");
        // Driving row color and on-duty row color both appear in the trace.
        assert!(svg.contains("#ca8a04"));
        assert!(svg.contains("#c2410c"));
    }
}
