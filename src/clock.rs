use std::fmt;
use std::str::FromStr;

use chrono::Timelike;
use eframe::egui::{Align2, Color32, FontFamily, FontId, Painter, Pos2, Shape, Stroke, Vec2};
use eframe::egui::emath::Rot2;

/// Rotates the drawing convention (0° pointing right) so that 0 on the dial points up.
pub const ANGLE_OFFSET: i32 = 270;

/// Returned by [`angle_for_name`] when the hand name is not recognized.
pub const HAND_ANGLE_SENTINEL: i32 = -1;

const NUMERALS: [&str; 12] = [
    "12", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HandUnit {
    Hour,
    Minute,
    Second,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown clock hand `{0}`")]
pub struct UnknownHandUnit(pub String);

impl FromStr for HandUnit {
    type Err = UnknownHandUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hour" | "hours" => Ok(HandUnit::Hour),
            "minute" | "minutes" => Ok(HandUnit::Minute),
            "second" | "seconds" => Ok(HandUnit::Second),
            _ => Err(UnknownHandUnit(s.to_owned())),
        }
    }
}

impl fmt::Display for HandUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandUnit::Hour => "hours",
            HandUnit::Minute => "minutes",
            HandUnit::Second => "seconds",
        };
        f.write_str(name)
    }
}

/// Angle of a hand in whole degrees, in `[270, 630)`.
///
/// Hands step: the hour hand ignores minutes and the minute hand ignores seconds.
pub fn compute_angle<T: Timelike>(unit: HandUnit, time: &T) -> i32 {
    let steps = match unit {
        HandUnit::Second => time.second() * 6,
        HandUnit::Minute => time.minute() * 6,
        HandUnit::Hour => (time.hour() % 12) * 30,
    };
    ANGLE_OFFSET + steps as i32
}

/// Like [`compute_angle`] but keyed by name, answering [`HAND_ANGLE_SENTINEL`]
/// for anything that is not a hand.
pub fn angle_for_name<T: Timelike>(name: &str, time: &T) -> i32 {
    match name.parse::<HandUnit>() {
        Ok(unit) => compute_angle(unit, time),
        Err(_) => HAND_ANGLE_SENTINEL,
    }
}

/// The three hand angles of one instant. Recomputed on every repaint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HandAngles {
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
}

impl HandAngles {
    pub fn at<T: Timelike>(time: &T) -> Self {
        Self {
            hour: compute_angle(HandUnit::Hour, time),
            minute: compute_angle(HandUnit::Minute, time),
            second: compute_angle(HandUnit::Second, time),
        }
    }

    pub fn get(&self, unit: HandUnit) -> i32 {
        match unit {
            HandUnit::Hour => self.hour,
            HandUnit::Minute => self.minute,
            HandUnit::Second => self.second,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandStyle {
    pub length: f32,
    pub color: Color32,
}

/// One drawing call of the clock, in face coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Disc {
        center: Pos2,
        radius: f32,
        color: Color32,
    },
    Hand {
        unit: HandUnit,
        outline: [Pos2; 4],
        pivot: Pos2,
        tip: Pos2,
        width: f32,
        color: Color32,
    },
    Numeral {
        text: &'static str,
        pos: Pos2,
        size: f32,
        color: Color32,
    },
}

/// Fixed geometry of the dial. Never mutated after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct ClockFace {
    pub center: Pos2,
    pub ring_radius: f32,
    pub face_radius: f32,
    pub hub_radius: f32,
    pub numeral_radius: f32,
    pub numeral_size: f32,
    pub hand_width: f32,
    pub ring_color: Color32,
    pub face_color: Color32,
    pub ink_color: Color32,
    pub hour_hand: HandStyle,
    pub minute_hand: HandStyle,
    pub second_hand: HandStyle,
    numeral_positions: [Pos2; 12],
}

impl Default for ClockFace {
    fn default() -> Self {
        Self::new(Pos2::new(250.0, 250.0))
    }
}

impl ClockFace {
    pub fn new(center: Pos2) -> Self {
        let numeral_radius = 172.0;
        let numeral_positions = std::array::from_fn(|i| {
            let degrees = ANGLE_OFFSET + 30 * i as i32;
            center + Rot2::from_angle(radians(degrees)) * Vec2::new(numeral_radius, 0.0)
        });
        Self {
            center,
            ring_radius: 210.0,
            face_radius: 200.0,
            hub_radius: 15.0,
            numeral_radius,
            numeral_size: 22.0,
            hand_width: 5.0,
            ring_color: Color32::BLACK,
            face_color: Color32::WHITE,
            ink_color: Color32::BLACK,
            hour_hand: HandStyle {
                length: 80.0,
                color: Color32::BLACK,
            },
            minute_hand: HandStyle {
                length: 120.0,
                color: Color32::BLACK,
            },
            second_hand: HandStyle {
                length: 150.0,
                color: Color32::RED,
            },
            numeral_positions,
        }
    }

    /// Anchor (glyph center) of each numeral, starting with "12" and going clockwise.
    pub fn numeral_positions(&self) -> &[Pos2; 12] {
        &self.numeral_positions
    }

    pub fn hand_style(&self, unit: HandUnit) -> HandStyle {
        match unit {
            HandUnit::Hour => self.hour_hand,
            HandUnit::Minute => self.minute_hand,
            HandUnit::Second => self.second_hand,
        }
    }

    /// Display list for one frame: ring, hands, hub, numerals, in paint order.
    pub fn render(&self, angles: &HandAngles) -> Vec<Primitive> {
        let mut list = Vec::with_capacity(18);
        list.push(Primitive::Disc {
            center: self.center,
            radius: self.ring_radius,
            color: self.ring_color,
        });
        list.push(Primitive::Disc {
            center: self.center,
            radius: self.face_radius,
            color: self.face_color,
        });
        for unit in [HandUnit::Hour, HandUnit::Minute, HandUnit::Second] {
            list.push(self.draw_hand(unit, angles.get(unit)));
        }
        list.push(Primitive::Disc {
            center: self.center,
            radius: self.hub_radius,
            color: self.ink_color,
        });
        for (text, pos) in NUMERALS.into_iter().zip(self.numeral_positions) {
            list.push(Primitive::Numeral {
                text,
                pos,
                size: self.numeral_size,
                color: self.ink_color,
            });
        }
        list
    }

    fn draw_hand(&self, unit: HandUnit, angle: i32) -> Primitive {
        let style = self.hand_style(unit);
        let rot = Rot2::from_angle(radians(angle));
        Primitive::Hand {
            unit,
            outline: hand_polygon(self.center, angle, style.length, self.hand_width),
            pivot: self.center,
            tip: self.center + rot * Vec2::new(style.length, 0.0),
            width: self.hand_width,
            color: style.color,
        }
    }
}

/// Outline of a bar of `length` × `width` lying on the ray from `center` at `angle` degrees.
pub fn hand_polygon(center: Pos2, angle: i32, length: f32, width: f32) -> [Pos2; 4] {
    let rot = Rot2::from_angle(radians(angle));
    let half = width / 2.0;
    [
        Vec2::new(0.0, -half),
        Vec2::new(length, -half),
        Vec2::new(length, half),
        Vec2::new(0.0, half),
    ]
    .map(|corner| center + rot * corner)
}

/// Issues the egui draw calls for a display list, translated by `origin`.
pub fn paint(painter: &Painter, origin: Vec2, list: &[Primitive]) {
    for primitive in list {
        match primitive {
            Primitive::Disc {
                center,
                radius,
                color,
            } => {
                painter.circle_filled(*center + origin, *radius, *color);
            }
            Primitive::Hand {
                outline,
                pivot,
                tip,
                width,
                color,
                ..
            } => {
                let points = outline.iter().map(|p| *p + origin).collect();
                painter.add(Shape::convex_polygon(points, *color, Stroke::NONE));
                // round caps
                painter.circle_filled(*pivot + origin, width / 2.0, *color);
                painter.circle_filled(*tip + origin, width / 2.0, *color);
            }
            Primitive::Numeral {
                text,
                pos,
                size,
                color,
            } => {
                painter.text(
                    *pos + origin,
                    Align2::CENTER_CENTER,
                    *text,
                    FontId::new(*size, FontFamily::Proportional),
                    *color,
                );
            }
        }
    }
}

fn radians(degrees: i32) -> f32 {
    (degrees as f32).to_radians()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn hms(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn parses_singular_and_plural_names() {
        assert_eq!("hours".parse::<HandUnit>(), Ok(HandUnit::Hour));
        assert_eq!("Minute".parse::<HandUnit>(), Ok(HandUnit::Minute));
        assert_eq!(" seconds ".parse::<HandUnit>(), Ok(HandUnit::Second));
        assert_eq!(
            "days".parse::<HandUnit>(),
            Err(UnknownHandUnit("days".to_owned()))
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        for unit in [HandUnit::Hour, HandUnit::Minute, HandUnit::Second] {
            assert_eq!(unit.to_string().parse::<HandUnit>(), Ok(unit));
        }
    }

    #[test]
    fn unknown_name_yields_sentinel() {
        assert_eq!(angle_for_name("fortnights", &hms(1, 2, 3)), HAND_ANGLE_SENTINEL);
        assert_eq!(angle_for_name("seconds", &hms(1, 2, 3)), 270 + 18);
    }

    #[test]
    fn hand_polygon_at_zero_degrees_lies_along_x() {
        let outline = hand_polygon(Pos2::new(10.0, 10.0), 0, 100.0, 4.0);
        assert_eq!(outline[0], Pos2::new(10.0, 8.0));
        assert_eq!(outline[1], Pos2::new(110.0, 8.0));
        assert_eq!(outline[2], Pos2::new(110.0, 12.0));
        assert_eq!(outline[3], Pos2::new(10.0, 12.0));
    }

    #[test]
    fn twelve_sits_above_center() {
        let face = ClockFace::default();
        let twelve = face.numeral_positions()[0];
        assert!((twelve.x - face.center.x).abs() < 1e-3);
        assert!((twelve.y - (face.center.y - face.numeral_radius)).abs() < 1e-3);
    }
}
