//! Sound cues
//!
//! The game plays two cues: a springy punch when a hit scores and a whiff
//! when a punch finds nothing. Sinks are fire-and-forget. The real sink
//! synthesizes the cues procedurally on the default output device (behind
//! the `audio` feature); everything else gets the silent sink.

use crate::settings::AudioSettings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// A punch landed and scored
    Punch,
    /// A punch missed
    Whiff,
}

/// Plays sound cues
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);

    /// Whether this sink makes any noise at all
    fn is_audible(&self) -> bool {
        true
    }
}

/// Sink used when audio is unavailable or muted
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSink;

impl AudioSink for SilentSink {
    fn play(&mut self, _effect: SoundEffect) {}

    fn is_audible(&self) -> bool {
        false
    }
}

/// Pick the sink for this run. Called once at startup.
pub fn open_sink(settings: &AudioSettings) -> Box<dyn AudioSink> {
    if settings.muted || settings.effective_volume() <= 0.0 {
        log::info!("Audio muted");
        return Box::new(SilentSink);
    }
    open_device(settings)
}

#[cfg(feature = "audio")]
fn open_device(settings: &AudioSettings) -> Box<dyn AudioSink> {
    match device::DeviceSink::open(settings.effective_volume()) {
        Ok(sink) => Box::new(sink),
        Err(e) => {
            log::warn!("Failed to open audio device: {e}. Running without audio.");
            Box::new(SilentSink)
        }
    }
}

#[cfg(not(feature = "audio"))]
fn open_device(_settings: &AudioSettings) -> Box<dyn AudioSink> {
    log::info!("Built without the `audio` feature - sound disabled");
    Box::new(SilentSink)
}

#[cfg(feature = "audio")]
mod device {
    //! Procedural cue synthesis mixed into a cpal output stream

    use std::sync::{Arc, Mutex};

    use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

    use super::{AudioSink, SoundEffect};

    /// Maximum number of simultaneous voices
    const MAX_VOICES: usize = 8;

    /// One playing cue
    struct Voice {
        effect: SoundEffect,
        time: f32,
        phase: f32,
        noise_state: u32,
    }

    impl Voice {
        fn new(effect: SoundEffect) -> Self {
            Self {
                effect,
                time: 0.0,
                phase: 0.0,
                noise_state: 12345,
            }
        }

        fn duration(&self) -> f32 {
            match self.effect {
                SoundEffect::Punch => 0.35,
                SoundEffect::Whiff => 0.12,
            }
        }

        fn is_done(&self) -> bool {
            self.time > self.duration()
        }

        fn noise(&mut self) -> f32 {
            self.noise_state = self.noise_state.wrapping_mul(1103515245).wrapping_add(12345);
            ((self.noise_state >> 16) as f32 / 32768.0) - 1.0
        }

        fn next_sample(&mut self, sample_rate: f32) -> f32 {
            if self.is_done() {
                return 0.0;
            }
            let dt = 1.0 / sample_rate;
            self.time += dt;
            match self.effect {
                SoundEffect::Punch => {
                    // Boing: pitch wobbles around a falling tone
                    let wobble = (self.time * 38.0 * std::f32::consts::TAU).sin() * 60.0;
                    let freq = 420.0 - self.time * 600.0 + wobble;
                    self.phase += freq * dt;
                    let env = (-self.time / 0.12).exp();
                    (self.phase * std::f32::consts::TAU).sin() * env * 0.6
                }
                SoundEffect::Whiff => {
                    // Short swell of noise
                    let t = self.time / self.duration();
                    let env = (t * std::f32::consts::PI).sin();
                    self.noise() * env * 0.25
                }
            }
        }
    }

    struct MixState {
        voices: Vec<Voice>,
        sample_rate: f32,
        volume: f32,
    }

    /// Real output device
    pub struct DeviceSink {
        state: Arc<Mutex<MixState>>,
        _stream: cpal::Stream,
    }

    impl DeviceSink {
        pub fn open(volume: f32) -> Result<Self, String> {
            let host = cpal::default_host();
            let device = host
                .default_output_device()
                .ok_or("No audio output device found")?;
            let config = device
                .default_output_config()
                .map_err(|e| format!("No default output config: {e}"))?;
            if config.sample_format() != cpal::SampleFormat::F32 {
                return Err(format!("Unsupported sample format: {:?}", config.sample_format()));
            }

            let channels = config.channels() as usize;
            let state = Arc::new(Mutex::new(MixState {
                voices: Vec::new(),
                sample_rate: config.sample_rate().0 as f32,
                volume,
            }));
            let mix = Arc::clone(&state);

            let stream = device
                .build_output_stream(
                    &config.into(),
                    move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                        fill_buffer(data, channels, &mix);
                    },
                    |err| log::error!("Audio stream error: {err}"),
                    None,
                )
                .map_err(|e| format!("Failed to build stream: {e}"))?;
            stream.play().map_err(|e| format!("Failed to play stream: {e}"))?;

            log::info!("Audio output opened");
            Ok(Self {
                state,
                _stream: stream,
            })
        }
    }

    impl AudioSink for DeviceSink {
        fn play(&mut self, effect: SoundEffect) {
            if let Ok(mut state) = self.state.lock() {
                state.voices.retain(|v| !v.is_done());
                if state.voices.len() >= MAX_VOICES {
                    state.voices.remove(0);
                }
                state.voices.push(Voice::new(effect));
            }
        }
    }

    fn fill_buffer(data: &mut [f32], channels: usize, state: &Arc<Mutex<MixState>>) {
        data.fill(0.0);
        let Ok(mut state) = state.lock() else {
            return;
        };
        let sample_rate = state.sample_rate;
        let volume = state.volume;
        for frame in data.chunks_mut(channels.max(1)) {
            let mut sample = 0.0;
            for voice in state.voices.iter_mut() {
                sample += voice.next_sample(sample_rate);
            }
            let sample = (sample * volume).clamp(-1.0, 1.0);
            for out in frame.iter_mut() {
                *out = sample;
            }
        }
        state.voices.retain(|v| !v.is_done());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_muted_settings_get_silent_sink() {
        let settings = AudioSettings {
            muted: true,
            ..Default::default()
        };
        let mut sink = open_sink(&settings);
        assert!(!sink.is_audible());
        sink.play(SoundEffect::Punch);
    }

    #[test]
    fn test_zero_volume_is_silent() {
        let settings = AudioSettings {
            master_volume: 0.0,
            ..Default::default()
        };
        assert!(!open_sink(&settings).is_audible());
    }
}
