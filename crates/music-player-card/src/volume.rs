use tracing::debug;

pub const MAX_VOLUME: u8 = 100;

/// Maps a pointer x position on a horizontal track to a 0..=100 volume.
///
/// Returns `None` for a collapsed track or non-finite geometry.
pub fn volume_from_pointer(pointer_x: f32, track_left: f32, track_width: f32) -> Option<u8> {
    let usable = track_width.is_finite()
        && track_width > 0.0
        && pointer_x.is_finite()
        && track_left.is_finite();
    if !usable {
        return None;
    }
    let pct = ((pointer_x - track_left) / track_width * 100.0).round();
    Some(pct.clamp(0.0, f32::from(MAX_VOLUME)) as u8)
}

#[derive(Clone, Debug)]
pub struct VolumeControl {
    volume: u8,
    hovered: bool,
}

impl VolumeControl {
    pub fn new(initial: u8) -> Self {
        Self {
            volume: initial.min(MAX_VOLUME),
            hovered: false,
        }
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn hovered(&self) -> bool {
        self.hovered
    }

    /// Sets the volume from a pointer position; degenerate tracks are ignored.
    pub fn set_from_pointer(
        &mut self,
        pointer_x: f32,
        track_left: f32,
        track_width: f32,
    ) -> Option<u8> {
        let volume = volume_from_pointer(pointer_x, track_left, track_width)?;
        if volume != self.volume {
            debug!(from = self.volume, to = volume, "volume changed");
        }
        self.volume = volume;
        Some(volume)
    }

    /// Returns whether the flag changed.
    pub fn set_hovered(&mut self, hovered: bool) -> bool {
        let changed = self.hovered != hovered;
        self.hovered = hovered;
        changed
    }
}
