use crate::constants::{AMBIENT_SOUND_SRC, INTERACTION_SOUND_SRC};
use crate::core::constants::AMBIENT_VOLUME;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// A preloaded `<audio>` element played on demand.
pub struct SoundEffect {
    el: web::HtmlAudioElement,
    label: &'static str,
}

impl SoundEffect {
    pub fn load(src: &str, label: &'static str) -> anyhow::Result<SoundEffect> {
        let el = web::HtmlAudioElement::new_with_src(src)
            .map_err(|e| anyhow::anyhow!("{} audio element: {:?}", label, e))?;
        el.set_preload("auto");
        Ok(SoundEffect { el, label })
    }

    pub fn looping(self, volume: f64) -> SoundEffect {
        self.el.set_loop(true);
        self.el.set_volume(volume.clamp(0.0, 1.0));
        self
    }

    /// Best-effort playback. Never fails and never surfaces an error: both
    /// synchronous exceptions and a rejected play promise (autoplay policy,
    /// missing asset) are dropped after a debug log.
    pub fn attempt_play(&self) {
        match self.el.play() {
            Ok(promise) => {
                let label = self.label;
                spawn_local(async move {
                    if let Err(e) = JsFuture::from(promise).await {
                        log::debug!("[audio] {} play rejected: {:?}", label, e);
                    }
                });
            }
            Err(e) => log::debug!("[audio] {} play failed: {:?}", self.label, e),
        }
    }

    /// Rewind to the start and play.
    pub fn restart(&self) {
        self.el.set_current_time(0.0);
        self.attempt_play();
    }
}

/// The page's two sounds; either may be missing if its element failed to build.
pub struct Sounds {
    pub interaction: Option<SoundEffect>,
    pub ambient: Option<SoundEffect>,
}

impl Sounds {
    pub fn load() -> Sounds {
        let interaction = SoundEffect::load(INTERACTION_SOUND_SRC, "interaction")
            .map_err(|e| log::warn!("[audio] {e}"))
            .ok();
        let ambient = SoundEffect::load(AMBIENT_SOUND_SRC, "ambient")
            .map(|s| s.looping(AMBIENT_VOLUME))
            .map_err(|e| log::warn!("[audio] {e}"))
            .ok();
        Sounds {
            interaction,
            ambient,
        }
    }

    pub fn click(&self) {
        if let Some(s) = &self.interaction {
            s.restart();
        }
    }

    pub fn start_ambient(&self) {
        if let Some(s) = &self.ambient {
            s.attempt_play();
        }
    }
}
