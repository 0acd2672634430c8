//! SVG surface - turns surface calls into an SVG document
//!
//! Each `stroke` or `fill_preserve` becomes one `<path>` element carrying
//! the graphics state that was current at the time. Path semantics follow
//! cairo: `stroke` consumes the path, `fill_preserve` keeps it, and an `arc`
//! is joined to the current point by a straight line unless a new subpath
//! was started.

use std::f64::consts::{PI, TAU};
use std::fmt::Write;

use crate::geometry::{Color, Point};

use super::traits::Surface;

#[derive(Clone, Debug)]
struct State {
    color: Color,
    line_width: f64,
    dash: Vec<f64>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            line_width: 1.0,
            dash: Vec::new(),
        }
    }
}

/// A [`Surface`] that writes SVG
pub struct SvgSurface {
    width: f64,
    height: f64,
    background: Option<Color>,
    body: String,
    state: State,
    stack: Vec<State>,
    /// Path data for the current path
    data: String,
    current: Option<Point>,
    subpath_start: Option<Point>,
    elements: usize,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            background: None,
            body: String::new(),
            state: State::default(),
            stack: Vec::new(),
            data: String::new(),
            current: None,
            subpath_start: None,
            elements: 0,
        }
    }

    /// Paint a full-size background rectangle behind everything else
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Number of `<path>` elements emitted so far
    pub fn element_count(&self) -> usize {
        self.elements
    }

    /// Render the complete SVG document
    pub fn to_svg(&self) -> String {
        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w:.0}" height="{h:.0}" viewBox="0 0 {w:.2} {h:.2}">"#,
            w = self.width,
            h = self.height,
        );
        if let Some(bg) = self.background {
            let _ = writeln!(
                svg,
                r#"  <rect x="0" y="0" width="{:.2}" height="{:.2}" fill="{}" fill-opacity="{}"/>"#,
                self.width,
                self.height,
                rgb(bg),
                num(bg.a),
            );
        }
        svg.push_str(&self.body);
        svg.push_str("</svg>\n");
        svg
    }

    fn clear_path(&mut self) {
        self.data.clear();
        self.current = None;
        self.subpath_start = None;
    }

    fn push_cmd(&mut self, cmd: char, p: Point) {
        let _ = write!(self.data, "{}{},{}", cmd, num(p.x), num(p.y));
    }

    fn arc_cmd(&mut self, radius: f64, large: bool, end: Point) {
        let _ = write!(
            self.data,
            "A{r},{r} 0 {} 1 {},{}",
            u8::from(large),
            num(end.x),
            num(end.y),
            r = num(radius),
        );
    }
}

/// Format a coordinate with at most two decimals and no trailing zeros
fn num(v: f64) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn rgb(color: Color) -> String {
    let (r, g, b) = color.to_rgb8();
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

impl Surface for SvgSurface {
    fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    fn restore(&mut self) {
        match self.stack.pop() {
            Some(state) => self.state = state,
            None => log::warn!("SvgSurface: restore() without matching save()"),
        }
    }

    fn set_source_rgba(&mut self, color: Color) {
        self.state.color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width;
    }

    fn set_dash(&mut self, pattern: &[f64]) {
        self.state.dash = pattern.to_vec();
    }

    fn new_path(&mut self) {
        self.clear_path();
    }

    fn new_sub_path(&mut self) {
        self.current = None;
    }

    fn move_to(&mut self, p: Point) {
        self.push_cmd('M', p);
        self.current = Some(p);
        self.subpath_start = Some(p);
    }

    fn line_to(&mut self, p: Point) {
        if self.current.is_none() {
            self.move_to(p);
            return;
        }
        self.push_cmd('L', p);
        self.current = Some(p);
    }

    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64) {
        // Like cairo, an end angle below the start wraps forward by whole turns
        let span = end_angle - start_angle;
        let sweep = if span >= TAU {
            TAU
        } else if span.is_finite() {
            span.rem_euclid(TAU)
        } else {
            0.0
        };
        let start = center.polar_offset(start_angle, radius);
        let end = center.polar_offset(start_angle + sweep, radius);

        if self.current.is_some() {
            self.push_cmd('L', start);
        } else {
            self.push_cmd('M', start);
            self.subpath_start = Some(start);
        }

        if sweep >= TAU - 1e-9 {
            // SVG cannot express a full circle as one arc
            let mid = center.polar_offset(start_angle + PI, radius);
            self.arc_cmd(radius, false, mid);
            self.arc_cmd(radius, false, end);
        } else if sweep > 0.0 {
            self.arc_cmd(radius, sweep > PI, end);
        }
        self.current = Some(end);
    }

    fn close_path(&mut self) {
        if !self.data.is_empty() {
            self.data.push('Z');
        }
        self.current = self.subpath_start;
    }

    fn stroke(&mut self) {
        if !self.data.is_empty() {
            let state = &self.state;
            let mut attrs = format!(
                r#"fill="none" stroke="{}" stroke-opacity="{}" stroke-width="{}""#,
                rgb(state.color),
                num(state.color.a),
                num(state.line_width),
            );
            if !state.dash.is_empty() {
                let dash: Vec<String> = state.dash.iter().map(|d| num(*d)).collect();
                let _ = write!(attrs, r#" stroke-dasharray="{}""#, dash.join(" "));
            }
            let _ = writeln!(self.body, r#"  <path d="{}" {}/>"#, self.data, attrs);
            self.elements += 1;
        }
        self.clear_path();
    }

    fn fill_preserve(&mut self) {
        if self.data.is_empty() {
            return;
        }
        let _ = writeln!(
            self.body,
            r#"  <path d="{}" fill="{}" fill-opacity="{}" stroke="none"/>"#,
            self.data,
            rgb(self.state.color),
            num(self.state.color.a),
        );
        self.elements += 1;
    }
}
