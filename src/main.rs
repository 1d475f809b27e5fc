use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};

use tokio::task::LocalSet;
use tracing::info;

use ssr_control::config::Config;
use ssr_control::controller::{ControllerHandle, RecorderController};
use ssr_control::server::ControlServer;

/// Stand-in recorder so the control service can run without the real
/// capture pipeline. Tracks the state flags and logs every transition.
struct SimulatedRecorder {
    recording: Cell<bool>,
    paused: Cell<bool>,
    recorded: Cell<Duration>,
    resumed_at: Cell<Option<Instant>>,
    file_name: RefCell<String>,
}

impl SimulatedRecorder {
    fn new() -> Self {
        Self {
            recording: Cell::new(false),
            paused: Cell::new(false),
            recorded: Cell::new(Duration::ZERO),
            resumed_at: Cell::new(None),
            file_name: RefCell::new(String::new()),
        }
    }

    fn elapsed(&self) -> Duration {
        let running = self
            .resumed_at
            .get()
            .map(|t| t.elapsed())
            .unwrap_or_default();
        self.recorded.get() + running
    }

    fn finish(&self) {
        self.recording.set(false);
        self.paused.set(false);
        self.recorded.set(Duration::ZERO);
        self.resumed_at.set(None);
        self.file_name.borrow_mut().clear();
    }
}

impl RecorderController for SimulatedRecorder {
    fn is_recording(&self) -> bool {
        self.recording.get()
    }

    fn is_paused(&self) -> bool {
        self.paused.get()
    }

    fn current_file_name(&self) -> String {
        self.file_name.borrow().clone()
    }

    fn current_file_size(&self) -> u64 {
        // pretend the encoder writes ~2 MB per second
        self.elapsed().as_millis() as u64 * 2048
    }

    fn total_time(&self) -> u64 {
        self.elapsed().as_millis() as u64
    }

    fn start(&self) {
        info!("simulated recorder: start");
        self.recording.set(true);
        self.paused.set(false);
        self.recorded.set(Duration::ZERO);
        self.resumed_at.set(Some(Instant::now()));
        *self.file_name.borrow_mut() = "simulated.mkv".to_string();
    }

    fn toggle_pause(&self) {
        if self.paused.get() {
            info!("simulated recorder: resume");
            self.paused.set(false);
            self.resumed_at.set(Some(Instant::now()));
        } else {
            self.pause();
        }
    }

    fn pause(&self) {
        info!("simulated recorder: pause");
        if let Some(resumed_at) = self.resumed_at.take() {
            self.recorded.set(self.recorded.get() + resumed_at.elapsed());
        }
        self.paused.set(true);
    }

    fn save(&self, _confirm: bool) {
        info!(file = %self.file_name.borrow(), "simulated recorder: save");
        self.finish();
    }

    fn cancel(&self, _confirm: bool) {
        info!("simulated recorder: cancel");
        self.finish();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load();
    if !cfg.enabled {
        info!("control server disabled by configuration");
        return Ok(());
    }

    LocalSet::new()
        .run_until(async move {
            let recorder: Rc<dyn RecorderController> = Rc::new(SimulatedRecorder::new());
            let handle = ControllerHandle::new(Rc::downgrade(&recorder));

            let mut server = ControlServer::new(handle)?;
            server.start(cfg.port).await?;

            tokio::signal::ctrl_c().await?;
            info!("shutdown signal received");
            server.stop();

            Ok(())
        })
        .await
}
