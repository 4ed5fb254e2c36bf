use log::{info, warn};
use macroquad::audio::{PlaySoundParams, Sound, load_sound_from_bytes, play_sound};

const ALARM_FREQUENCY_HZ: f32 = 800.0;
const ALARM_DURATION_MS: u32 = 90;
const ALARM_VOLUME: f32 = 0.4;
const SAMPLE_RATE: u32 = 44_100;

/// Builds a mono 16-bit PCM WAV file holding a sine tone.
/// The last few milliseconds fade out to avoid a click.
pub fn tone_wav(frequency_hz: f32, duration_ms: u32, sample_rate: u32) -> Vec<u8> {
    let sample_count = (sample_rate as u64 * duration_ms as u64 / 1000) as u32;
    let data_len = sample_count * 2;
    let fade_samples = (sample_rate / 200).max(1);

    let mut wav = Vec::with_capacity(44 + data_len as usize);
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(36 + data_len).to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes()); // fmt chunk size
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&1u16.to_le_bytes()); // mono
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&(sample_rate * 2).to_le_bytes()); // byte rate
    wav.extend_from_slice(&2u16.to_le_bytes()); // block align
    wav.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_len.to_le_bytes());

    for i in 0..sample_count {
        let t = i as f32 / sample_rate as f32;
        let remaining = sample_count - i;
        let envelope = (remaining as f32 / fade_samples as f32).min(1.0);
        let value = (t * frequency_hz * std::f32::consts::TAU).sin() * envelope;
        let sample = (value * i16::MAX as f32) as i16;
        wav.extend_from_slice(&sample.to_le_bytes());
    }
    wav
}

#[derive(Default)]
pub struct AudioManager {
    alarm_sound: Option<Sound>,
    muted: bool,
}

impl AudioManager {
    pub fn new(muted: bool) -> Self {
        AudioManager {
            alarm_sound: None,
            muted,
        }
    }

    // A failed load leaves the alarm silent
    pub async fn load_assets(&mut self) {
        if self.muted {
            info!("Audio muted, skipping alarm synthesis");
            return;
        }
        let wav = tone_wav(ALARM_FREQUENCY_HZ, ALARM_DURATION_MS, SAMPLE_RATE);
        self.alarm_sound = load_sound_from_bytes(&wav)
            .await
            .map_err(|e| {
                warn!("Failed to load synthesized alarm sound: {}", e);
                e
            })
            .ok();
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    // Play the low-time alarm if loaded
    pub fn play_alarm(&self) {
        if self.muted {
            return;
        }
        if let Some(ref sound) = self.alarm_sound {
            play_sound(
                sound,
                PlaySoundParams {
                    looped: false,
                    volume: ALARM_VOLUME,
                },
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_u32(bytes: &[u8], at: usize) -> u32 {
        u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
    }

    #[test]
    fn test_tone_wav_header() {
        let wav = tone_wav(800.0, 90, 44_100);
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(&wav[36..40], b"data");
        assert_eq!(read_u32(&wav, 24), 44_100);

        // 90 ms at 44.1 kHz, two bytes per sample
        let data_len = read_u32(&wav, 40);
        assert_eq!(data_len, 3969 * 2);
        assert_eq!(wav.len(), 44 + data_len as usize);
        assert_eq!(read_u32(&wav, 4), 36 + data_len);
    }

    #[test]
    fn test_tone_wav_fades_out() {
        let wav = tone_wav(800.0, 90, 44_100);
        let last = i16::from_le_bytes([wav[wav.len() - 2], wav[wav.len() - 1]]);
        assert!(last.abs() < 200, "last sample too loud: {}", last);
    }

    #[test]
    fn test_muted_manager_is_silent() {
        let audio = AudioManager::new(true);
        assert!(audio.is_muted());
        // No sound loaded, so this must be a no-op
        audio.play_alarm();
    }
}
