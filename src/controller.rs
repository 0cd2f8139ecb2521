use crate::color::{Channel, Color};
use crate::config::SpiralSpec;
use crate::error::{Result, SceneError};
use crate::input::{InputState, Key};
use crate::spiral::Spiral;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub spiral_name: &'static str,
    pub channel: Channel,
    pub value: u8,
}

impl Status {
    pub fn channel_label(&self) -> &'static str {
        self.channel.label()
    }

    pub fn value_color(&self) -> Color {
        self.channel.display_color()
    }
}

/// The spirals plus the keyboard-driven color editor.
///
/// Selection moves over a ring of `spirals × 3` states: stepping past the
/// last channel of a spiral lands on the first channel of the next one.
#[derive(Debug, Clone)]
pub struct Controller {
    spirals: Vec<Spiral>,
    active_spiral: usize,
    active_channel: Channel,
}

impl Controller {
    pub fn new(specs: &[SpiralSpec]) -> Result<Self> {
        if specs.is_empty() {
            return Err(SceneError::NoSpirals);
        }
        let spirals = specs.iter().map(Spiral::new).collect::<Result<Vec<_>>>()?;
        Ok(Self {
            spirals,
            active_spiral: 0,
            active_channel: Channel::Red,
        })
    }

    pub fn spirals(&self) -> &[Spiral] {
        &self.spirals
    }

    pub fn active_spiral(&self) -> usize {
        self.active_spiral
    }

    pub fn active_channel(&self) -> Channel {
        self.active_channel
    }

    fn ring_len(&self) -> usize {
        self.spirals.len() * Channel::ALL.len()
    }

    fn ring_position(&self) -> usize {
        self.active_spiral * Channel::ALL.len() + self.active_channel.index()
    }

    fn set_ring_position(&mut self, pos: usize) {
        self.active_spiral = pos / Channel::ALL.len();
        self.active_channel = Channel::from_index(pos % Channel::ALL.len());
    }

    pub fn select_next(&mut self) {
        let pos = (self.ring_position() + 1) % self.ring_len();
        self.set_ring_position(pos);
    }

    pub fn select_previous(&mut self) {
        let len = self.ring_len();
        let pos = (self.ring_position() + len - 1) % len;
        self.set_ring_position(pos);
    }

    pub fn increase(&mut self) {
        let channel = self.active_channel;
        self.spirals[self.active_spiral]
            .color_mut()
            .step_channel(channel, 1);
    }

    pub fn decrease(&mut self) {
        let channel = self.active_channel;
        self.spirals[self.active_spiral]
            .color_mut()
            .step_channel(channel, -1);
    }

    pub fn apply_input(&mut self, input: &InputState) {
        if input.is_pressed(Key::Right) {
            self.select_next();
        }
        if input.is_pressed(Key::Left) {
            self.select_previous();
        }
        if input.is_down(Key::Up) {
            self.increase();
        }
        if input.is_down(Key::Down) {
            self.decrease();
        }
    }

    pub fn recompute(&mut self, dt: f32) {
        for spiral in &mut self.spirals {
            spiral.recompute(dt);
        }
    }

    pub fn status(&self) -> Status {
        let spiral = &self.spirals[self.active_spiral];
        Status {
            spiral_name: spiral.name(),
            channel: self.active_channel,
            value: spiral.channel(self.active_channel),
        }
    }
}
