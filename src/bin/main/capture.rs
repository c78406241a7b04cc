use std::{
    io::Cursor,
    sync::{Arc, Mutex},
};

use hound::{SampleFormat, WavSpec, WavWriter};
use log::{info, warn};
use prompter_core::recording::{Artifact, CaptureError, RecordingSession, RecordingStatus};

const WAV_MIME: &str = "audio/wav";

/// Whether this build can open an input device at all.
pub(super) const CAPTURE_AVAILABLE: bool = cfg!(feature = "microphone");

type SampleBuffer = Arc<Mutex<Vec<i16>>>;

/// Encodes 16-bit mono samples as an in-memory WAV file.
pub(super) fn encode_wav(samples: &[i16], sample_rate: u32) -> Result<Vec<u8>, hound::Error> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = WavWriter::new(&mut cursor, spec)?;
        for &sample in samples {
            writer.write_sample(sample)?;
        }
        writer.finalize()?;
    }
    Ok(cursor.into_inner())
}

/// Narration capture from the default input device.
///
/// The device stream lives only between `start` and `stop`; samples are
/// downmixed to mono and encoded when the take ends.
pub(super) struct MicrophoneRecorder {
    status: RecordingStatus,
    samples: SampleBuffer,
    stream: Option<CaptureStream>,
    artifact: Option<Vec<u8>>,
}

impl MicrophoneRecorder {
    pub(super) fn new() -> Self {
        Self {
            status: RecordingStatus::Inactive,
            samples: Arc::new(Mutex::new(Vec::new())),
            stream: None,
            artifact: None,
        }
    }

    fn take_samples(&self) -> Vec<i16> {
        match self.samples.lock() {
            Ok(mut samples) => std::mem::take(&mut *samples),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl RecordingSession for MicrophoneRecorder {
    fn start(&mut self) -> Result<(), CaptureError> {
        if self.status == RecordingStatus::Recording {
            return Ok(());
        }

        self.artifact = None;
        let _ = self.take_samples();

        let stream = CaptureStream::open(Arc::clone(&self.samples))?;
        info!("capture: recording at {} Hz", stream.sample_rate);
        self.stream = Some(stream);
        self.status = RecordingStatus::Recording;
        Ok(())
    }

    fn stop(&mut self) {
        if self.status != RecordingStatus::Recording {
            return;
        }

        let Some(stream) = self.stream.take() else {
            self.status = RecordingStatus::Stopped;
            return;
        };
        let sample_rate = stream.sample_rate;
        drop(stream);

        let samples = self.take_samples();
        self.artifact = match encode_wav(&samples, sample_rate) {
            Ok(bytes) => {
                info!(
                    "capture: {} samples encoded into {} bytes",
                    samples.len(),
                    bytes.len()
                );
                Some(bytes)
            }
            Err(err) => {
                warn!("capture: wav encoding failed: {}", err);
                None
            }
        };
        self.status = RecordingStatus::Stopped;
    }

    fn discard(&mut self) {
        self.stream = None;
        self.artifact = None;
        let _ = self.take_samples();
        self.status = RecordingStatus::Inactive;
    }

    fn status(&self) -> RecordingStatus {
        self.status
    }

    fn artifact(&self) -> Option<Artifact<'_>> {
        self.artifact.as_deref().map(|bytes| Artifact {
            bytes,
            mime: WAV_MIME,
        })
    }
}

/// Open input stream; dropping it releases the device.
#[cfg_attr(not(feature = "microphone"), allow(dead_code))]
struct CaptureStream {
    sample_rate: u32,
    #[cfg(feature = "microphone")]
    _stream: cpal::Stream,
}

#[cfg(feature = "microphone")]
impl CaptureStream {
    fn open(samples: SampleBuffer) -> Result<Self, CaptureError> {
        use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

        let host = cpal::default_host();
        let device = host.default_input_device().ok_or_else(|| {
            warn!("capture: no default input device");
            CaptureError::DeviceUnavailable
        })?;
        let supported = device.default_input_config().map_err(|err| {
            warn!("capture: input config unavailable: {}", err);
            CaptureError::DeviceUnavailable
        })?;

        let sample_rate = supported.sample_rate().0;
        let channels = usize::from(supported.channels()).max(1);
        let config: cpal::StreamConfig = supported.config();

        let stream = match supported.sample_format() {
            cpal::SampleFormat::F32 => build_stream::<f32>(&device, &config, channels, samples),
            cpal::SampleFormat::I16 => build_stream::<i16>(&device, &config, channels, samples),
            cpal::SampleFormat::U16 => build_stream::<u16>(&device, &config, channels, samples),
            other => {
                warn!("capture: unsupported sample format {:?}", other);
                return Err(CaptureError::DeviceUnavailable);
            }
        }
        .map_err(|err| {
            warn!("capture: failed to open input stream: {}", err);
            match err {
                cpal::BuildStreamError::BackendSpecific { .. } => CaptureError::PermissionDenied,
                _ => CaptureError::DeviceUnavailable,
            }
        })?;

        stream.play().map_err(|err| {
            warn!("capture: failed to start input stream: {}", err);
            CaptureError::DeviceUnavailable
        })?;

        Ok(Self {
            sample_rate,
            _stream: stream,
        })
    }
}

#[cfg(not(feature = "microphone"))]
impl CaptureStream {
    fn open(_samples: SampleBuffer) -> Result<Self, CaptureError> {
        warn!("capture: built without the `microphone` feature");
        Err(CaptureError::DeviceUnavailable)
    }
}

#[cfg(feature = "microphone")]
fn build_stream<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    channels: usize,
    samples: SampleBuffer,
) -> Result<cpal::Stream, cpal::BuildStreamError>
where
    T: cpal::SizedSample + Send + 'static,
    i16: cpal::FromSample<T>,
{
    use cpal::{Sample, traits::DeviceTrait};

    device.build_input_stream(
        config,
        move |data: &[T], _: &cpal::InputCallbackInfo| {
            if let Ok(mut samples) = samples.lock() {
                // First channel only.
                samples.extend(data.chunks(channels).map(|frame| i16::from_sample(frame[0])));
            }
        },
        |err| warn!("capture: input stream error: {}", err),
        None,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wav_header_matches_the_samples() {
        let bytes = encode_wav(&[0, 1_000, -1_000, i16::MAX], 16_000).unwrap();
        assert_eq!(&bytes[..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");

        let mut reader = hound::WavReader::new(Cursor::new(bytes)).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 16_000);
        assert_eq!(spec.bits_per_sample, 16);

        let decoded: Vec<i16> = reader.samples::<i16>().map(Result::unwrap).collect();
        assert_eq!(decoded, vec![0, 1_000, -1_000, i16::MAX]);
    }

    #[test]
    fn stop_and_discard_without_a_take_are_no_ops() {
        let mut recorder = MicrophoneRecorder::new();
        recorder.stop();
        assert_eq!(recorder.status(), RecordingStatus::Inactive);
        assert!(recorder.artifact().is_none());

        recorder.discard();
        assert_eq!(recorder.status(), RecordingStatus::Inactive);
    }

    #[test]
    fn microphone_capture_is_enabled_by_default() {
        let manifest = include_str!("../../../Cargo.toml");
        let default_features = manifest
            .lines()
            .find(|line| line.trim_start().starts_with("default"))
            .unwrap();
        assert!(default_features.contains("\"microphone\""));
    }

    #[cfg(not(feature = "microphone"))]
    #[test]
    fn start_reports_missing_device_without_the_microphone_feature() {
        let mut recorder = MicrophoneRecorder::new();
        assert_eq!(recorder.start(), Err(CaptureError::DeviceUnavailable));
        assert_eq!(recorder.status(), RecordingStatus::Inactive);
        assert!(recorder.stream.is_none());
    }
}
