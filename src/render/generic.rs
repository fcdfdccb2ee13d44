//! Bars and rings expressed through the basic `Graphics` calls.
//!
//! Backends without a native way to draw these shapes delegate here.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::core::{BarInfo, LabelPlacement, Style, Wedge};
use crate::render::Graphics;
use crate::render::canvas::saturate_i32;

/// Slack in cells around the grid when deciding whether an arc can be seen.
const VISIBILITY_MARGIN: f64 = 2.0;

/// Draws each bar as a rectangle plus its optional label.
///
/// Bars without their own style use `style`.
pub fn generic_bars<G: Graphics + ?Sized>(graphics: &mut G, bars: &[BarInfo], style: &Style) {
    let font = graphics.font("bar");
    for bar in bars {
        let bar_style = bar.style.as_ref().unwrap_or(style);
        graphics.rect(bar.x, bar.y, bar.w, bar.h, bar_style);

        let Some(label) = &bar.label else {
            continue;
        };
        let (bx, by) = (i64::from(bar.x), i64::from(bar.y));
        let (bw, bh) = (i64::from(bar.w), i64::from(bar.h));
        let top = by.min(by + bh);
        let y = match label.placement {
            LabelPlacement::Outside => top - 1,
            LabelPlacement::Inside => top + 1,
            LabelPlacement::Center => top + bh.abs() / 2,
        };
        graphics.text(
            saturate_i32(bx + bw / 2),
            saturate_i32(y),
            &label.text,
            "cc",
            0,
            &font,
        );
    }
}

/// Screen position at radius `r` and angle `t` around `(x, y)`.
///
/// Screen rows grow downward, so positive angles move up.
fn polar(x: i32, y: i32, r: f64, t: f64, eccentricity: f64) -> (i32, i32) {
    let dx = (r * eccentricity * t.cos()).round() as i32;
    let dy = (r * t.sin()).round() as i32;
    (x.saturating_add(dx), y.saturating_sub(dy))
}

/// Part of the drawing surface an arc around one center can reach.
#[derive(Debug, Clone, Copy)]
struct Visibility {
    /// Radii outside `min_radius..=max_radius` miss the grid entirely.
    min_radius: f64,
    max_radius: f64,
    /// Angles under which the grid is seen, when the center lies outside it.
    window: Option<(f64, f64)>,
}

impl Visibility {
    fn new<G: Graphics + ?Sized>(graphics: &G, x: i32, y: i32, eccentricity: f64) -> Self {
        let (width, height) = graphics.dimensions();
        let m = VISIBILITY_MARGIN;
        let (left, top) = (-m, -m);
        let right = (width as f64 - 1.0).max(0.0) + m;
        let bottom = (height as f64 - 1.0).max(0.0) + m;
        let (cx, cy) = (f64::from(x), f64::from(y));

        let radius = |px: f64, py: f64| ((px - cx) / eccentricity).hypot(py - cy);
        let nearest = radius(cx.clamp(left, right), cy.clamp(top, bottom));
        let farthest = [(left, top), (right, top), (left, bottom), (right, bottom)]
            .into_iter()
            .map(|(px, py)| radius(px, py))
            .fold(0.0, f64::max);

        let angle = |px: f64, py: f64| (cy - py).atan2((px - cx) / eccentricity);
        let window = (nearest > 0.0).then(|| {
            let reference = angle((left + right) / 2.0, (top + bottom) / 2.0);
            let corners = [(left, top), (right, top), (left, bottom), (right, bottom)]
                .map(|(px, py)| reference + (angle(px, py) - reference + PI).rem_euclid(TAU) - PI);
            let lo = corners.into_iter().fold(f64::INFINITY, f64::min);
            let hi = corners.into_iter().fold(f64::NEG_INFINITY, f64::max);
            (lo, hi)
        });

        Self {
            min_radius: nearest - m,
            max_radius: farthest + m,
            window,
        }
    }

    fn reaches(&self, r: f64) -> bool {
        (self.min_radius..=self.max_radius).contains(&r)
    }

    /// Segment indices of an arc split into `steps` pieces of `step` radians
    /// from `phi` that may touch the grid.
    fn segments(&self, phi: f64, psi: f64, step: f64, steps: usize) -> Vec<(usize, usize)> {
        let Some((lo, hi)) = self.window.filter(|_| step < FRAC_PI_2) else {
            return vec![(1, steps)];
        };
        let index = |t: f64| ((t - phi) / step).clamp(0.0, steps as f64);
        let first_turn = ((phi - hi) / TAU).ceil();
        let mut ranges = Vec::new();
        for k in 0..3 {
            let shift = (first_turn + f64::from(k)) * TAU;
            let (a, b) = ((lo + shift).max(phi), (hi + shift).min(psi));
            if a > b {
                continue;
            }
            let from = (index(a).floor() as usize).max(1);
            let to = (index(b).ceil() as usize).saturating_add(1).min(steps);
            if from <= to {
                ranges.push((from, to));
            }
        }
        ranges
    }
}

/// Polyline approximation of a circular arc.
///
/// Segment `i` joins the points at `phi + (i - 1) * step` and
/// `phi + i * step`; segments that cannot reach the grid are skipped.
#[allow(clippy::too_many_arguments)]
fn arc<G: Graphics + ?Sized>(
    graphics: &mut G,
    visibility: &Visibility,
    x: i32,
    y: i32,
    r: f64,
    phi: f64,
    psi: f64,
    eccentricity: f64,
    style: &Style,
) {
    if r <= 0.0 || !visibility.reaches(r) {
        return;
    }
    let steps = ((psi - phi) * r * eccentricity).ceil().max(1.0) as usize;
    let step = (psi - phi) / steps as f64;
    for (from, to) in visibility.segments(phi, psi, step, steps) {
        let mut last = polar(x, y, r, phi + step * (from - 1) as f64, eccentricity);
        for i in from..=to {
            let next = polar(x, y, r, phi + step * i as f64, eccentricity);
            graphics.line(last.0, last.1, next.0, next.1, style);
            last = next;
        }
    }
}

/// Outlines the ring segment between `phi` and `psi` around `(x, y)`.
///
/// Horizontal distances are scaled by `eccentricity`. Styles with a fill
/// color also get the arcs between the inner and outer radius.
#[allow(clippy::too_many_arguments)]
pub fn generic_wedge<G: Graphics + ?Sized>(
    graphics: &mut G,
    x: i32,
    y: i32,
    ro: i32,
    ri: i32,
    phi: f64,
    psi: f64,
    eccentricity: f64,
    style: &Style,
) {
    let (phi, psi) = if psi < phi { (psi, phi) } else { (phi, psi) };
    let psi = psi.min(phi + TAU);
    let (ro, ri) = (f64::from(ro.max(0)), f64::from(ri.clamp(0, ro.max(0))));

    if psi - phi < TAU - 1e-9 {
        for t in [phi, psi] {
            let inner = polar(x, y, ri, t, eccentricity);
            let outer = polar(x, y, ro, t, eccentricity);
            graphics.line(inner.0, inner.1, outer.0, outer.1, style);
        }
    }

    let visibility = Visibility::new(graphics, x, y, eccentricity);
    arc(graphics, &visibility, x, y, ro, phi, psi, eccentricity, style);
    arc(graphics, &visibility, x, y, ri, phi, psi, eccentricity, style);

    if style.fill_color.is_some() {
        let skipped = (visibility.min_radius - (ri + 1.0)).ceil().max(0.0);
        let mut r = ri + 1.0 + skipped;
        while r < ro && r <= visibility.max_radius {
            arc(graphics, &visibility, x, y, r, phi, psi, eccentricity, style);
            r += 1.0;
        }
    }
}

/// Draws every wedge and its label.
///
/// Shifted wedges move outward along their bisector. Labels sit on the
/// bisector halfway between the radii, or at 60% of the outer radius for
/// pies without a hole.
pub fn generic_rings<G: Graphics + ?Sized>(
    graphics: &mut G,
    wedges: &[Wedge],
    x: i32,
    y: i32,
    ro: i32,
    ri: i32,
    eccentricity: f64,
) {
    let font = graphics.font("label");
    for wedge in wedges {
        let mid = wedge.bisector();
        let (cx, cy) = if wedge.shift > 0.0 {
            polar(x, y, wedge.shift * f64::from(ro), mid, eccentricity)
        } else {
            (x, y)
        };
        generic_wedge(
            graphics,
            cx,
            cy,
            ro,
            ri,
            wedge.phi,
            wedge.psi,
            eccentricity,
            &wedge.style,
        );

        if wedge.label.is_empty() {
            continue;
        }
        let r = if ri > 0 {
            (f64::from(ro) + f64::from(ri)) / 2.0
        } else {
            f64::from(ro) * 0.6
        };
        let (lx, ly) = polar(cx, cy, r, mid, eccentricity);
        graphics.text(lx, ly, &wedge.label, "cc", 0, &font);
    }
}
