// src/simulation/progress.rs

use tracing::info;

/// 進捗の通知先
///
/// 処理済みの割合 (0〜1] だけを受け取り、シミュレーションの状態には触れない。
pub trait ProgressObserver {
    fn on_progress(&mut self, fraction: f64);
}

impl<F: FnMut(f64)> ProgressObserver for F {
    fn on_progress(&mut self, fraction: f64) {
        self(fraction)
    }
}

/// 通知しない
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_progress(&mut self, _fraction: f64) {}
}

/// 一定割合ごとに `tracing` で進捗を出力する
#[derive(Debug, Clone)]
pub struct TracingProgress {
    step_percent: u32,
    next_percent: u32,
}

impl TracingProgress {
    pub fn new(step_percent: u32) -> Self {
        let step_percent = step_percent.clamp(1, 100);
        TracingProgress {
            step_percent,
            next_percent: step_percent,
        }
    }
}

impl ProgressObserver for TracingProgress {
    fn on_progress(&mut self, fraction: f64) {
        let percent = (fraction * 100.0).floor() as u32;
        if percent >= self.next_percent {
            info!(progress = percent, "simulation progress");
            self.next_percent = (percent / self.step_percent + 1) * self.step_percent;
        }
    }
}
