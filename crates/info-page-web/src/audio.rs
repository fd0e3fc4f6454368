#![forbid(unsafe_code)]

//! `HTMLAudioElement`-backed [`ClickCue`].

use info_page_core::ClickCue;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::HtmlAudioElement;

/// Click cue backed by a preloaded `<audio>` element.
///
/// Every failure (construction, autoplay policy, decode) is ignored.
pub(crate) struct AudioCue {
    audio: Option<HtmlAudioElement>,
}

impl AudioCue {
    pub(crate) fn new(src: &str, volume: f64) -> Self {
        let audio = HtmlAudioElement::new_with_src(src).ok();
        if let Some(audio) = &audio {
            audio.set_preload("auto");
            audio.set_volume(volume);
        }
        Self { audio }
    }
}

impl ClickCue for AudioCue {
    fn play(&mut self) {
        let Some(audio) = &self.audio else {
            return;
        };
        audio.set_current_time(0.0);
        if let Ok(promise) = audio.play() {
            // Rejections (autoplay policy, decode errors) are discarded.
            spawn_local(async move {
                let _ = JsFuture::from(promise).await;
            });
        }
    }
}
