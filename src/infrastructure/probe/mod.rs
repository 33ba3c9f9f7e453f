//! Audio duration probe adapters

pub mod ffprobe;
pub mod noop;

pub use ffprobe::{is_ffprobe_available, FfprobeDurationProbe};
pub use noop::NoOpDurationProbe;

use crate::application::ports::DurationProbe;

/// Pick ffprobe when installed, otherwise the no-op probe
pub async fn create_duration_probe() -> Box<dyn DurationProbe> {
    if is_ffprobe_available().await {
        Box::new(FfprobeDurationProbe::new())
    } else {
        tracing::debug!("ffprobe not found, audio duration will be reported as 0");
        Box::new(NoOpDurationProbe::new())
    }
}
