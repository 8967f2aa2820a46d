//! Layered vector drawing of a Tank
//!
//! The drawing routines only talk to a [`DrawSurface`], so the same code paints
//! onto a browser canvas or into a recording used by tests.

use std::f64::consts::TAU;

use crate::{
    common::{
        config::TankPalette,
        constants::{
            GUN_PIVOT_OFFSET_Y, HULL_HEIGHT, HULL_WIDTH, SPRITE_HEIGHT, SPRITE_WIDTH,
            TREAD_HEIGHT, TREAD_SEGMENTS, TURRET_OFFSET_Y,
        },
        tank::Tank,
    },
    utils::Vector2,
};

/// A 2D vector drawing target with the semantics of an HTML canvas context
pub trait DrawSurface {
    type Error;

    fn save(&mut self);
    fn restore(&mut self);

    fn begin_path(&mut self);
    fn close_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64)
        -> Result<(), Self::Error>;
    fn fill(&mut self);
    fn stroke(&mut self);

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64);

    fn translate(&mut self, x: f64, y: f64) -> Result<(), Self::Error>;
    fn rotate(&mut self, angle: f64) -> Result<(), Self::Error>;

    fn set_fill_style(&mut self, color: &str);
    fn set_stroke_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn set_line_join(&mut self, join: &str);
    fn set_global_alpha(&mut self, alpha: f64);
}

/// How a closed polygon gets painted
pub struct PolygonStyle<'a> {
    /// Fill color, or `None` to only stroke the outline
    pub fill: Option<&'a str>,
    pub stroke: &'a str,
    pub line_width: f64,
}

/// Fill and stroke a closed polygon
///
/// Fewer than two points is not a shape and draws nothing.
pub fn draw_polygon<S: DrawSurface>(surface: &mut S, points: &[Vector2], style: &PolygonStyle) {
    let [first, rest @ ..] = points else {
        return;
    };
    if rest.is_empty() {
        return;
    }

    surface.begin_path();
    surface.move_to(first.x, first.y);
    for point in rest {
        surface.line_to(point.x, point.y);
    }
    surface.close_path();

    if let Some(color) = style.fill {
        surface.set_fill_style(color);
        surface.fill();
    }
    surface.set_line_width(style.line_width);
    surface.set_stroke_style(style.stroke);
    surface.stroke();
}

/// Paints Tanks using a fixed palette
#[derive(Debug, Clone, Default)]
pub struct TankRenderer {
    palette: TankPalette,
}

impl TankRenderer {
    pub fn new(palette: TankPalette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &TankPalette {
        &self.palette
    }

    /// Draw every layer of the Tank, back to front
    pub fn draw<S: DrawSurface>(&self, surface: &mut S, tank: &Tank) -> Result<(), S::Error> {
        surface.save();

        self.draw_outline(surface, tank);
        self.draw_treads(surface, tank);
        self.draw_hull(surface, tank);
        // the turret stays fixed, only the barrel follows the aim
        self.draw_turret(surface, tank);
        let result = self
            .draw_barrel(surface, tank)
            .and_then(|()| self.draw_highlights(surface, tank));

        surface.restore();
        result
    }

    fn draw_outline<S: DrawSurface>(&self, surface: &mut S, tank: &Tank) {
        let s = tank.scale;
        let Vector2 { x, y } = tank.position;

        let pad = 5.0 * s;
        let corner = 20.0 * s;
        let left = x - SPRITE_WIDTH * s / 2.0 - pad;
        let right = x + SPRITE_WIDTH * s / 2.0 + pad;
        let top = y - SPRITE_HEIGHT * s / 2.0 - pad;
        let bottom = y + SPRITE_HEIGHT * s / 2.0 + pad;

        surface.save();
        surface.begin_path();
        surface.move_to(left + corner, top);
        surface.line_to(right - corner, top);
        surface.quadratic_curve_to(right, top, right, top + corner);
        surface.line_to(right, bottom - corner);
        surface.quadratic_curve_to(right, bottom, right - corner, bottom);
        surface.line_to(left + corner, bottom);
        surface.quadratic_curve_to(left, bottom, left, bottom - corner);
        surface.line_to(left, top + corner);
        surface.quadratic_curve_to(left, top, left + corner, top);
        surface.close_path();

        // glow first, then the darker outline on top of it
        surface.set_stroke_style(&self.palette.reflection);
        surface.set_line_width(6.0 * s);
        surface.set_line_join("round");
        surface.stroke();

        surface.set_stroke_style(&self.palette.outline);
        surface.set_line_width(3.0 * s);
        surface.stroke();
        surface.restore();
    }

    fn draw_treads<S: DrawSurface>(&self, surface: &mut S, tank: &Tank) {
        let s = tank.scale;
        let Vector2 { x, y } = tank.position;

        let total_height = TREAD_HEIGHT * s;
        let segment_height = tank.segment_height();
        let tread_width = 50.0 * s;
        let gap = 70.0 * s;
        let top = y - total_height / 2.0;
        let left_x = x - gap - tread_width;
        let right_x = x + gap;

        surface.save();
        surface.set_fill_style(&self.palette.tread_housing);
        surface.fill_rect(left_x, top - 2.0 * s, tread_width, total_height + 4.0 * s);
        surface.fill_rect(right_x, top - 2.0 * s, tread_width, total_height + 4.0 * s);

        // one extra segment so the scroll wraps without a visible hole
        for i in 0..=TREAD_SEGMENTS {
            let mut segment_y = top + i as f64 * segment_height + tank.tread_offset - segment_height;

            if segment_y > top + total_height - segment_height / 2.0 {
                segment_y -= total_height + segment_height;
            }
            if segment_y < top - segment_height / 2.0 {
                segment_y += total_height + segment_height;
            }

            if segment_y <= top - segment_height || segment_y >= top + total_height {
                continue;
            }

            let color = match i % 2 {
                0 => &self.palette.tread_housing,
                _ => &self.palette.tread_light,
            };
            let draw_height = segment_height - 2.0 * s;

            surface.set_fill_style(color);
            surface.set_stroke_style(&self.palette.shadow);
            surface.set_line_width(s);
            for track_x in [left_x, right_x] {
                surface.fill_rect(track_x, segment_y, tread_width, draw_height);
                surface.stroke_rect(track_x, segment_y, tread_width, draw_height);
            }
        }

        surface.set_stroke_style(&self.palette.outline);
        surface.set_line_width(2.0 * s);
        surface.stroke_rect(left_x, top - 2.0 * s, tread_width, total_height + 4.0 * s);
        surface.stroke_rect(right_x, top - 2.0 * s, tread_width, total_height + 4.0 * s);
        surface.restore();
    }

    fn draw_hull<S: DrawSurface>(&self, surface: &mut S, tank: &Tank) {
        let s = tank.scale;
        let Vector2 { x, y } = tank.position;

        let width = HULL_WIDTH * s;
        let height = HULL_HEIGHT * s;
        let top = y - height / 2.0;
        let style = PolygonStyle {
            fill: Some(self.palette.body.as_str()),
            stroke: &self.palette.shadow,
            line_width: 2.0 * s,
        };

        surface.save();
        // tapered towards the rear
        let hull = [
            Vector2::new(x - width / 2.0, top),
            Vector2::new(x + width / 2.0, top),
            Vector2::new(x + width / 2.0 - 10.0 * s, top + height),
            Vector2::new(x - width / 2.0 + 10.0 * s, top + height),
        ];
        draw_polygon(surface, &hull, &style);

        let front_plate = [
            Vector2::new(x - width / 2.0 + 20.0 * s, top - 20.0 * s),
            Vector2::new(x + width / 2.0 - 20.0 * s, top - 20.0 * s),
            Vector2::new(x + width / 2.0, top),
            Vector2::new(x - width / 2.0, top),
        ];
        draw_polygon(surface, &front_plate, &style);

        surface.set_stroke_style(&self.palette.shadow);
        surface.set_line_width(2.5 * s);

        let (panel_width, panel_height) = (80.0 * s, 120.0 * s);
        let panel_y = top + 30.0 * s;
        surface.set_fill_style(&self.palette.body);
        surface.fill_rect(x - panel_width / 2.0, panel_y, panel_width, panel_height);
        surface.stroke_rect(x - panel_width / 2.0, panel_y, panel_width, panel_height);

        // vents
        let (vent_width, vent_height) = (25.0 * s, 15.0 * s);
        surface.set_fill_style(&self.palette.shadow);
        let rear_y = top + height - 40.0 * s;
        surface.fill_rect(x - width / 2.0 + 15.0 * s, rear_y, vent_width, vent_height);
        surface.fill_rect(
            x + width / 2.0 - 15.0 * s - vent_width,
            rear_y,
            vent_width,
            vent_height,
        );
        let (small_width, small_height) = (vent_width * 0.8, vent_height * 0.8);
        let front_y = top + 10.0 * s;
        surface.fill_rect(x - width / 2.0 + 30.0 * s, front_y, small_width, small_height);
        surface.fill_rect(
            x + width / 2.0 - 30.0 * s - small_width,
            front_y,
            small_width,
            small_height,
        );
        surface.restore();
    }

    fn draw_turret<S: DrawSurface>(&self, surface: &mut S, tank: &Tank) {
        let s = tank.scale;
        let x = tank.position.x;
        let center_y = tank.position.y + TURRET_OFFSET_Y * s;

        let major = 55.0 * s;
        let minor = 45.0 * s;

        surface.save();
        let base = [
            Vector2::new(x - major * 0.6, center_y - minor),
            Vector2::new(x + major * 0.6, center_y - minor),
            Vector2::new(x + major, center_y),
            Vector2::new(x + major * 0.6, center_y + minor),
            Vector2::new(x - major * 0.6, center_y + minor),
            Vector2::new(x - major, center_y),
        ];
        draw_polygon(
            surface,
            &base,
            &PolygonStyle {
                fill: Some(self.palette.shadow.as_str()),
                stroke: &self.palette.outline,
                line_width: 2.0 * s,
            },
        );

        // shrunk towards the center and lifted slightly
        let top = base.map(|p| Vector2 {
            x: x + (p.x - x) * 0.8,
            y: (center_y - 5.0 * s) + (p.y - center_y) * 0.8,
        });
        draw_polygon(
            surface,
            &top,
            &PolygonStyle {
                fill: Some(self.palette.body.as_str()),
                stroke: &self.palette.shadow,
                line_width: 2.0 * s,
            },
        );

        let eye = 8.0 * s;
        let eye_y = center_y - 10.0 * s;
        surface.set_fill_style(&self.palette.shadow);
        surface.fill_rect(x - 20.0 * s - eye / 2.0, eye_y - eye / 2.0, eye, eye);
        surface.fill_rect(x + 20.0 * s - eye / 2.0, eye_y - eye / 2.0, eye, eye);

        let (mouth_width, mouth_height) = (30.0 * s, 6.0 * s);
        surface.fill_rect(
            x - mouth_width / 2.0,
            center_y + 10.0 * s,
            mouth_width,
            mouth_height,
        );
        surface.restore();
    }

    fn draw_barrel<S: DrawSurface>(&self, surface: &mut S, tank: &Tank) -> Result<(), S::Error> {
        surface.save();
        let result = self.paint_barrel(surface, tank);
        surface.restore();
        result
    }

    fn paint_barrel<S: DrawSurface>(&self, surface: &mut S, tank: &Tank) -> Result<(), S::Error> {
        let s = tank.scale;
        let pivot_x = tank.position.x;
        let pivot_y = tank.position.y + (TURRET_OFFSET_Y + GUN_PIVOT_OFFSET_Y) * s;

        let length = 80.0 * s;
        let width = 18.0 * s;
        let (base_width, base_height) = (25.0 * s, 15.0 * s);
        let (muzzle_width, muzzle_length) = (width * 1.5, 15.0 * s);

        surface.translate(pivot_x, pivot_y)?;
        surface.rotate(tank.current_barrel_angle)?;

        // local coordinates: the barrel points along -y from the pivot
        surface.set_fill_style(&self.palette.gun_metal);
        surface.fill_rect(-base_width / 2.0, 0.0, base_width, base_height);
        surface.fill_rect(-width / 2.0, -length, width, length);
        surface.fill_rect(
            -muzzle_width / 2.0,
            -length - muzzle_length,
            muzzle_width,
            muzzle_length,
        );

        surface.set_fill_style(&self.palette.gun_highlight);
        surface.fill_rect(-width / 2.0 + 2.0 * s, -length, width - 4.0 * s, 10.0 * s);
        surface.fill_rect(-2.0 * s, -length * 0.8, 4.0 * s, length * 0.8);

        surface.set_stroke_style(&self.palette.outline);
        surface.set_line_width(1.5 * s);
        surface.stroke_rect(-base_width / 2.0, 0.0, base_width, base_height);
        surface.stroke_rect(-width / 2.0, -length, width, length);
        surface.stroke_rect(
            -muzzle_width / 2.0,
            -length - muzzle_length,
            muzzle_width,
            muzzle_length,
        );
        Ok(())
    }

    fn draw_highlights<S: DrawSurface>(
        &self,
        surface: &mut S,
        tank: &Tank,
    ) -> Result<(), S::Error> {
        surface.save();
        surface.set_fill_style(&self.palette.reflection);
        surface.set_global_alpha(0.7);

        let result = Self::paint_glints(surface, tank);

        surface.set_global_alpha(1.0);
        surface.restore();
        result
    }

    fn paint_glints<S: DrawSurface>(surface: &mut S, tank: &Tank) -> Result<(), S::Error> {
        let s = tank.scale;
        let Vector2 { x, y } = tank.position;
        let hull_top = y - HULL_HEIGHT * s / 2.0;

        // turret edge
        surface.begin_path();
        surface.arc(x + 40.0 * s, y + (TURRET_OFFSET_Y - 20.0) * s, 4.0 * s, 0.0, TAU)?;
        surface.fill();

        // hull corner
        surface.begin_path();
        surface.arc(x - 60.0 * s, hull_top + 10.0 * s, 5.0 * s, 0.0, TAU)?;
        surface.fill();
        Ok(())
    }
}
