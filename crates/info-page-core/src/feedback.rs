#![forbid(unsafe_code)]

//! Click feedback seam.

/// Best-effort audible cue played after a category change.
///
/// Implementations must not block and must swallow their own failures; the
/// caller never learns whether the cue actually played.
pub trait ClickCue {
    fn play(&mut self);
}

/// Cue that does nothing. Used by headless hosts.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCue;

impl ClickCue for NoopCue {
    fn play(&mut self) {}
}

impl<C: ClickCue + ?Sized> ClickCue for Box<C> {
    fn play(&mut self) {
        (**self).play();
    }
}
