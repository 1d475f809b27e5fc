use serde_json::{Map, Value, json};
use tracing::warn;

use crate::api::envelope::Envelope;
use crate::controller::ControllerHandle;
use crate::http::request::Request;
use crate::http::response::{Response, StatusCode};

/// Help page served for `/`, `/index` and `/index.html`.
const INDEX_BODY: &str = "SimpleScreenRecorder API Server\n\n\
Available endpoints:\n\
- /start - Start recording\n\
- /pause - Pause recording\n\
- /save - Save recording\n\
- /cancel - Cancel recording\n\
- /status - Get status information\n";

/// Routes one parsed request to its endpoint.
///
/// Matching is exact on the normalized path; the method is ignored. Paths
/// outside the table answer 404, except under `api/` where the legacy JSON
/// API reports unknown endpoints inside the envelope instead.
pub fn dispatch(req: &Request, controller: &ControllerHandle) -> anyhow::Result<Response> {
    let path = req.normalized_path();

    let envelope = match path {
        "" | "index" | "index.html" => {
            return Ok(Response::text(StatusCode::Ok, INDEX_BODY));
        }
        "start" | "record/start" => start_or_resume(controller),
        "pause" | "record/pause" => pause(controller),
        "save" | "record/save" => save(controller),
        "cancel" | "record/cancel" => cancel(controller),
        "status" | "record/status" | "api/status" | "api/record/status" => status(controller),
        _ => {
            if let Some(suffix) = path.strip_prefix("api/") {
                dispatch_legacy(suffix, &req.body, controller)
            } else {
                warn!(path, "unknown path");
                return Ok(Response::not_found());
            }
        }
    };

    Ok(Response::json(&envelope)?)
}

/// Legacy JSON API kept for backward compatibility.
///
/// The body may carry a JSON object; it is parsed but no endpoint reads it
/// today, so its content is discarded.
fn dispatch_legacy(suffix: &str, body: &[u8], controller: &ControllerHandle) -> Envelope {
    let _request = parse_json_object(body);

    match suffix {
        "status" => status(controller),
        "record/start" => start_or_resume(controller),
        "record/pause" => pause(controller),
        "record/cancel" => cancel(controller),
        "record/save" => save(controller),
        _ => {
            warn!(suffix, "unknown api endpoint");
            Envelope::error("Unknown API endpoint")
        }
    }
}

fn parse_json_object(body: &[u8]) -> Option<Map<String, Value>> {
    if body.is_empty() {
        return None;
    }
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

const RECORDER_GONE: &str = "Recorder is not available";

fn start_or_resume(controller: &ControllerHandle) -> Envelope {
    let Some(recorder) = controller.upgrade() else {
        return Envelope::error(RECORDER_GONE);
    };

    if recorder.is_paused() {
        recorder.toggle_pause();
        Envelope::success(json!({"action": "resumed"}))
    } else if !recorder.is_recording() {
        recorder.start();
        Envelope::success(json!({"action": "started"}))
    } else {
        Envelope::error("Already recording")
    }
}

fn pause(controller: &ControllerHandle) -> Envelope {
    let Some(recorder) = controller.upgrade() else {
        return Envelope::error(RECORDER_GONE);
    };

    if recorder.is_recording() && !recorder.is_paused() {
        recorder.pause();
        Envelope::success_empty()
    } else {
        Envelope::error("Not recording or already paused")
    }
}

fn save(controller: &ControllerHandle) -> Envelope {
    let Some(recorder) = controller.upgrade() else {
        return Envelope::error(RECORDER_GONE);
    };

    // Paused sessions still count as recording and can be saved.
    if recorder.is_recording() {
        recorder.save(false);
        Envelope::success_empty()
    } else {
        Envelope::error("Not recording")
    }
}

fn cancel(controller: &ControllerHandle) -> Envelope {
    let Some(recorder) = controller.upgrade() else {
        return Envelope::error(RECORDER_GONE);
    };

    if recorder.is_recording() {
        recorder.cancel(false);
        Envelope::success_empty()
    } else {
        Envelope::error("Not recording")
    }
}

fn status(controller: &ControllerHandle) -> Envelope {
    // Status degrades to an empty snapshot when the recorder is gone;
    // pollers must never see success:false here.
    let Some(recorder) = controller.upgrade() else {
        return Envelope::success_empty();
    };

    Envelope::success(json!({
        "is_recording": recorder.is_recording(),
        "is_paused": recorder.is_paused(),
        "file_name": recorder.current_file_name(),
        "file_size": recorder.current_file_size().to_string(),
        "total_time": recorder.total_time(),
    }))
}
