use std::io::Write;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use crate::config::constants::SPINNER_FRAME_INTERVAL_MS;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Stderr spinner shown while a remote resource resolves.
pub struct FetchSpinner {
    resource: String,
    stop_sender: Option<mpsc::UnboundedSender<()>>,
    task_handle: Option<JoinHandle<()>>,
}

impl FetchSpinner {
    pub fn start(resource: &str) -> Self {
        let (stop_tx, mut stop_rx) = mpsc::unbounded_channel();
        let label = format!("Fetching {resource}");

        let handle = tokio::spawn(async move {
            let mut frame = 0;
            let mut interval = tokio::time::interval(tokio::time::Duration::from_millis(SPINNER_FRAME_INTERVAL_MS));

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        eprint!("\r{} {} ", label, FRAMES[frame]);
                        let _ = std::io::stderr().flush();
                        frame = (frame + 1) % FRAMES.len();
                    }
                    _ = stop_rx.recv() => break,
                }
            }
        });

        Self {
            resource: resource.to_string(),
            stop_sender: Some(stop_tx),
            task_handle: Some(handle),
        }
    }

    pub async fn finish(mut self, succeeded: bool) {
        if let Some(sender) = self.stop_sender.take() {
            let _ = sender.send(());
        }
        if let Some(handle) = self.task_handle.take() {
            let _ = handle.await;
        }

        if succeeded {
            eprint!("\r\x1b[K✅ Fetched {}\n", self.resource);
        } else {
            eprint!("\r\x1b[K❌ Could not fetch {}, using app categories\n", self.resource);
        }
        let _ = std::io::stderr().flush();
    }
}
