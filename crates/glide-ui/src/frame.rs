use glide_core::{Rect, SliderConfig, SliderOutput, Vec2};

/// Side of the square container the marker sits in. The marker is centered on
/// the handle's offset and lifted above the track line so it straddles it.
pub const MARKER_CONTAINER: f32 = 48.0;
pub const TRACK_THICKNESS: f32 = 2.0;

/// Drawable geometry for one slider, derived from controller output.
/// Pure data; painting it is the embedder's business.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderFrame {
    /// Selected (filled) part of the track.
    pub fill: Rect,
    /// Unselected remainder.
    pub rest: Rect,
    /// Marker container, centered on the marker offset.
    pub marker: Rect,
    /// Touch surface from `TouchDimensions`, centered in the marker container.
    pub touch: Rect,
    pub pressed: bool,
    pub value: f32,
}

impl SliderFrame {
    /// `origin` is the track's left end in the embedder's coordinate space.
    pub fn compute(output: SliderOutput, config: &SliderConfig, origin: Vec2) -> Self {
        let fill_w = output.track_fill_length;
        let half = MARKER_CONTAINER * 0.5;
        let marker = Rect {
            x: origin.x + output.marker_offset - half,
            y: origin.y - half,
            w: MARKER_CONTAINER,
            h: MARKER_CONTAINER,
        };
        Self {
            fill: Rect {
                x: origin.x,
                y: origin.y,
                w: fill_w,
                h: TRACK_THICKNESS,
            },
            rest: Rect {
                x: origin.x + fill_w,
                y: origin.y,
                w: config.track_length - fill_w,
                h: TRACK_THICKNESS,
            },
            marker,
            touch: Rect {
                x: marker.x + (MARKER_CONTAINER - config.touch.width) * 0.5,
                y: marker.y + (MARKER_CONTAINER - config.touch.height) * 0.5,
                w: config.touch.width,
                h: config.touch.height,
            },
            pressed: output.pressed,
            value: output.current_value,
        }
    }
}
