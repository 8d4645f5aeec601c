//!
//! Audio output through the default output device
//!
//! The sink opens one continuously running output stream at startup and keeps it alive for
//! its whole lifetime, rendering silence while no tones are scheduled. Scheduling only hands
//! a batch of tones to the stream callback; the actual sound rendering happens asynchronously
//! on the audio thread and is not awaited. Once scheduled, tones play to completion, there is
//! deliberately no stop mechanism.
//!

use crate::sonify::ToneEvent;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{BuildStreamError, DefaultStreamConfigError, PlayStreamError, SampleFormat, Stream};
use std::sync::mpsc::{channel, Receiver, Sender};
use thiserror::Error;

/// Errors which prevent tones from being played
///
/// None of these are fatal for the rest of the program; drawing works fine without sound.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Playback was requested but no audio sink is attached to the session
    #[error("audio output is unavailable")]
    Unavailable,
    /// The host has no default audio output device
    #[error("no audio output device is available")]
    NoDevice,
    /// The output device wants a sample format we cannot produce
    #[error("the output device does not support f32 samples (it wants {0:?})")]
    UnsupportedSampleFormat(SampleFormat),
    /// The default stream configuration could not be queried
    #[error("could not query the output device configuration")]
    Config(#[from] DefaultStreamConfigError),
    /// The output stream could not be built
    #[error("could not build the output stream")]
    Build(#[from] BuildStreamError),
    /// The output stream could not be started
    #[error("could not start the output stream")]
    Play(#[from] PlayStreamError),
    /// The stream callback is gone and no longer accepts tone batches
    #[error("the audio stream is no longer running")]
    StreamClosed,
}

/// A tone converted into the sample domain of the output stream
///
/// Until the mixer picks the tone up, `start` and `end` are offsets relative to the moment
/// the batch arrives at the callback; the mixer rebases them onto its running sample clock.
struct ScheduledTone {
    start: u64,
    end: u64,
    phase: f32,
    phase_step: f32,
    amplitude: f32,
}

/// The mixer state owned by the stream callback
struct Mixer {
    clock: u64,
    tones: Vec<ScheduledTone>,
    inbox: Receiver<Vec<ScheduledTone>>,
}

impl Mixer {
    fn new(inbox: Receiver<Vec<ScheduledTone>>) -> Self {
        Self {
            clock: 0,
            tones: Vec::new(),
            inbox,
        }
    }

    /// Fill one output buffer, mixing all currently sounding tones
    fn fill(&mut self, data: &mut [f32], channels: usize) {
        // pick up freshly scheduled batches and rebase them onto the sample clock
        while let Ok(batch) = self.inbox.try_recv() {
            let base = self.clock;
            self.tones.extend(batch.into_iter().map(|t| ScheduledTone {
                start: base + t.start,
                end: base + t.end,
                ..t
            }));
        }
        self.tones.retain(|t| t.end > self.clock);

        for frame in data.chunks_mut(channels) {
            let mut sample = 0.0f32;
            for tone in self.tones.iter_mut() {
                if tone.start <= self.clock && self.clock < tone.end {
                    sample += tone.amplitude * tone.phase.sin();
                    tone.phase = (tone.phase + tone.phase_step) % std::f32::consts::TAU;
                }
            }
            self.clock += 1;
            for out in frame.iter_mut() {
                *out = sample;
            }
        }
    }
}

/// A handle to a running audio output stream that tone sequences can be scheduled on
pub struct AudioSink {
    /// Keeps the cpal stream alive; dropping the sink stops audio output
    _stream: Stream,
    sender: Sender<Vec<ScheduledTone>>,
    sample_rate: u32,
}

impl AudioSink {
    /// Open the default output device and start a continuously running output stream
    pub fn new() -> Result<Self, AudioError> {
        let host = cpal::default_host();
        let device = host.default_output_device().ok_or(AudioError::NoDevice)?;
        let supported = device.default_output_config()?;
        if supported.sample_format() != SampleFormat::F32 {
            return Err(AudioError::UnsupportedSampleFormat(supported.sample_format()));
        }

        let config = supported.config();
        let sample_rate = config.sample_rate.0;
        let channels = config.channels as usize;
        tracing::info!(
            "Opening audio output on {} with {} channels at {} Hz",
            device.name().unwrap_or_else(|_| "<unknown device>".to_string()),
            channels,
            sample_rate
        );

        let (sender, inbox) = channel();
        let mut mixer = Mixer::new(inbox);
        let data_callback = move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
            mixer.fill(data, channels);
        };
        let err_callback = |err: cpal::StreamError| {
            tracing::error!("Audio stream error: {}", err);
        };

        let stream = device.build_output_stream(&config, data_callback, err_callback)?;
        stream.play()?;

        Ok(Self {
            _stream: stream,
            sender,
            sample_rate,
        })
    }

    /// The sample rate the output stream runs at
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Schedule a batch of tones for playback starting now
    ///
    /// This only schedules and returns immediately; it never waits for the sound to finish.
    pub fn schedule(&self, tones: &[ToneEvent]) -> Result<(), AudioError> {
        self.sender
            .send(to_sample_domain(tones, self.sample_rate))
            .map_err(|_| AudioError::StreamClosed)
    }
}

/// Convert tone events from seconds into sample counts at the given sample rate
fn to_sample_domain(tones: &[ToneEvent], sample_rate: u32) -> Vec<ScheduledTone> {
    tones
        .iter()
        .map(|t| ScheduledTone {
            start: (t.start * sample_rate as f64) as u64,
            end: ((t.start + t.duration) * sample_rate as f64) as u64,
            phase: 0.0,
            phase_step: (std::f64::consts::TAU * t.frequency / sample_rate as f64) as f32,
            amplitude: t.amplitude,
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    const RATE: u32 = 48_000;

    fn tone(start: f64, duration: f64, frequency: f64) -> ToneEvent {
        ToneEvent {
            frequency,
            start,
            duration,
            amplitude: 0.3,
        }
    }

    #[test]
    fn test_sample_domain_conversion() {
        let scheduled = to_sample_domain(&[tone(0.2, 0.018, 550.0)], RATE);
        assert_eq!(scheduled.len(), 1);
        assert_eq!(scheduled[0].start, 9600);
        assert_eq!(scheduled[0].end, 9600 + 864);
        assert!((scheduled[0].phase_step - (550.0 / RATE as f32) * std::f32::consts::TAU).abs() < 1e-6);
    }

    #[test]
    fn test_mixer_renders_only_inside_the_tone_window() {
        let (sender, inbox) = channel();
        let mut mixer = Mixer::new(inbox);

        // one tone from sample 100 to sample 200
        sender
            .send(to_sample_domain(&[tone(100.0 / RATE as f64, 100.0 / RATE as f64, 440.0)], RATE))
            .unwrap();

        let mut buffer = vec![0.0f32; 300];
        mixer.fill(&mut buffer, 1);

        assert!(buffer[..100].iter().all(|&s| s == 0.0));
        assert!(buffer[100..200].iter().any(|&s| s != 0.0));
        assert!(buffer[200..].iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_mixer_spreads_one_sample_over_all_channels() {
        let (sender, inbox) = channel();
        let mut mixer = Mixer::new(inbox);
        sender
            .send(to_sample_domain(&[tone(0.0, 0.01, 440.0)], RATE))
            .unwrap();

        let mut buffer = vec![0.0f32; 64];
        mixer.fill(&mut buffer, 2);

        for frame in buffer.chunks(2) {
            assert_eq!(frame[0], frame[1]);
        }
    }

    #[test]
    fn test_mixer_is_silent_without_scheduled_tones() {
        let (_sender, inbox) = channel::<Vec<ScheduledTone>>();
        let mut mixer = Mixer::new(inbox);

        let mut buffer = vec![1.0f32; 128];
        mixer.fill(&mut buffer, 2);
        assert!(buffer.iter().all(|&s| s == 0.0));
    }
}
