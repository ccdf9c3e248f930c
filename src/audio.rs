/// Fire-and-forget audio commands.  Nothing in the simulation waits on them.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sound {
    /// A projectile leaves the ninja's hand.
    Throw,
    /// An enemy reached the ninja.
    Gong,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Music {
    Calm,
}

pub trait Audio {
    fn play_sound(&mut self, sound: Sound);
    /// Loop `music`.  Asking for the track that is already playing is a no-op.
    fn play_music(&mut self, music: Music);
    fn stop_music(&mut self);
}
