use std::f32::consts::{FRAC_PI_2, TAU};

use egui::emath::Rot2;
use egui::epaint::TextShape;
use egui::{Color32, FontId, Mesh, Painter, Pos2, Rect, Shape, Stroke, Vec2};

use crate::presentation::{EqualizerVisuals, PlayGlyph};

pub fn mix(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let ch = |from: u8, to: u8| {
        (f32::from(from) + (f32::from(to) - f32::from(from)) * t).round() as u8
    };
    Color32::from_rgba_premultiplied(
        ch(a.r(), b.r()),
        ch(a.g(), b.g()),
        ch(a.b(), b.b()),
        ch(a.a(), b.a()),
    )
}

/// Eases each channel of a color towards `target`.
pub fn animate_color(ctx: &egui::Context, id: egui::Id, target: Color32, secs: f32) -> Color32 {
    let [red, green, blue, alpha] = target.to_array();
    let channel = |slot: usize, value: u8| {
        ctx.animate_value_with_time(id.with(slot), f32::from(value), secs)
            .round()
            .clamp(0.0, 255.0) as u8
    };
    Color32::from_rgba_premultiplied(
        channel(0, red),
        channel(1, green),
        channel(2, blue),
        channel(3, alpha),
    )
}

/// Album art: a gradient square rotated by `angle` with a note glyph.
pub fn paint_artwork(
    painter: &Painter,
    rect: Rect,
    angle: f32,
    scale: f32,
    colors: (Color32, Color32),
    glyph_color: Color32,
) {
    let (from, to) = colors;
    let center = rect.center();
    let half = rect.size() * 0.5 * scale;
    let rot = Rot2::from_angle(angle);
    let corner = |dx: f32, dy: f32| center + rot * Vec2::new(dx * half.x, dy * half.y);

    let mut mesh = Mesh::default();
    let mid = mix(from, to, 0.5);
    mesh.colored_vertex(corner(-1.0, -1.0), from);
    mesh.colored_vertex(corner(1.0, -1.0), mid);
    mesh.colored_vertex(corner(1.0, 1.0), to);
    mesh.colored_vertex(corner(-1.0, 1.0), mid);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(Shape::mesh(mesh));

    let galley = painter.layout_no_wrap(
        "🎵".to_owned(),
        FontId::proportional(36.0 * scale),
        glyph_color,
    );
    let offset = rot * (galley.size() * 0.5);
    painter.add(TextShape::new(center - offset, galley, glyph_color).with_angle(angle));
}

/// Equalizer bars growing up from the bottom of `rect`.
pub fn paint_equalizer(painter: &Painter, rect: Rect, eq: &EqualizerVisuals, t: f32) {
    for bar in 0..eq.bar_count {
        let frame = eq.pattern.sample(bar, t);
        let height = eq.bar_height * frame.scale_y.clamp(0.0, 1.0);
        let left = rect.left() + bar as f32 * (eq.bar_width + eq.gap);
        let bar_rect = Rect::from_min_max(
            Pos2::new(left, rect.bottom() - height),
            Pos2::new(left + eq.bar_width, rect.bottom()),
        );
        painter.rect_filled(bar_rect, 2.0, eq.color.gamma_multiply(frame.opacity));
    }
}

/// A rounded track with a filled share on its left.
pub fn paint_track(painter: &Painter, rect: Rect, fraction: f32, track: Color32, fill: Color32) {
    let radius = rect.height() * 0.5;
    painter.rect_filled(rect, radius, track);
    let width = rect.width() * fraction.clamp(0.0, 1.0);
    if width > 0.0 {
        let fill_rect = Rect::from_min_size(rect.min, Vec2::new(width, rect.height()));
        painter.rect_filled(fill_rect, radius, fill);
    }
}

pub fn paint_play_glyph(
    painter: &Painter,
    center: Pos2,
    size: f32,
    glyph: PlayGlyph,
    color: Color32,
    t: f32,
) {
    match glyph {
        PlayGlyph::Play => {
            let h = size * 0.5;
            // nudge right so the triangle looks centered
            let c = center + Vec2::new(h * 0.12, 0.0);
            painter.add(Shape::convex_polygon(
                vec![
                    c + Vec2::new(-h * 0.4, -h * 0.5),
                    c + Vec2::new(h * 0.55, 0.0),
                    c + Vec2::new(-h * 0.4, h * 0.5),
                ],
                color,
                Stroke::NONE,
            ));
        }
        PlayGlyph::Pause => {
            let bar = Vec2::new(size * 0.13, size * 0.45);
            for dx in [-size * 0.12, size * 0.12] {
                let r = Rect::from_center_size(center + Vec2::new(dx, 0.0), bar);
                painter.rect_filled(r, 1.5, color);
            }
        }
        PlayGlyph::Spinner => paint_spinner(painter, center, size * 0.4, color, t),
    }
}

/// Faint ring with a quarter arc turning once per second.
pub fn paint_spinner(painter: &Painter, center: Pos2, radius: f32, color: Color32, t: f32) {
    painter.circle_stroke(center, radius, Stroke::new(3.0, color.gamma_multiply(0.12)));
    let start = t.fract() * TAU;
    let points: Vec<Pos2> = (0..=16)
        .map(|i| {
            let a = start + FRAC_PI_2 * i as f32 / 16.0;
            center + Vec2::angled(a) * radius
        })
        .collect();
    painter.add(Shape::line(points, Stroke::new(3.0, color)));
}
