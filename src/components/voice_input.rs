//! Voice input: record from the microphone and transcribe into the query
//! input.
//!
//! SYSTEM CONTEXT
//! ==============
//! The first click on the voice button opens the microphone and starts a
//! `MediaRecorder`; the second stops it. On stop the collected chunks are
//! uploaded to the transcription endpoint and the returned text replaces the
//! query input's value. The user still submits the chat form manually.
//!
//! ERROR HANDLING
//! ==============
//! A failed transcription leaves the typed value alone and swaps the input's
//! placeholder for a failure notice; the next successful one restores it.
//! Every exit from a recording releases the microphone stream.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Blob, BlobEvent, BlobPropertyBag, Document, Element, HtmlInputElement, MediaRecorder,
    MediaStream, MediaStreamConstraints, MediaStreamTrack,
};

use crate::config::PageConfig;
use crate::net::api;
use crate::state::voice::{InputUpdate, RECORDING_CLASS, Released, Session, VoiceAction, VoicePhase};
use crate::util::dom;

const AUDIO_MIME: &str = "audio/webm";

type Recorder = Session<MediaRecorder, MediaStream, Blob, EventListener>;

#[derive(Clone)]
struct VoiceContext {
    recorder: Rc<RefCell<Recorder>>,
    button: Element,
    input: HtmlInputElement,
    placeholder: Rc<str>,
    url: Rc<str>,
}

/// Wire the voice button. Requires both the button and the query input.
pub fn bind(document: &Document, config: &Rc<PageConfig>) {
    let ids = &config.elements;
    let Some(button) = dom::element_by_id::<Element>(document, &ids.voice_button) else {
        return;
    };
    let Some(input) = dom::element_by_id::<HtmlInputElement>(document, &ids.query_input) else {
        return;
    };

    let ctx = VoiceContext {
        recorder: Rc::new(RefCell::new(Recorder::default())),
        button: button.clone(),
        placeholder: Rc::from(input.placeholder()),
        input,
        url: Rc::from(config.endpoints.transcribe.as_str()),
    };
    EventListener::new(&button, "click", move |_| {
        let action = ctx.recorder.borrow().phase.on_click();
        match action {
            VoiceAction::Start => {
                ctx.recorder.borrow_mut().phase = VoicePhase::Requesting;
                wasm_bindgen_futures::spawn_local(start(ctx.clone()));
            }
            VoiceAction::Stop => stop(&ctx),
            VoiceAction::Ignore => {}
        }
    })
    .forget();
}

async fn open_microphone() -> Result<MediaStream, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let devices = window.navigator().media_devices()?;
    let constraints = MediaStreamConstraints::new();
    constraints.set_audio(&JsValue::TRUE);
    let stream = JsFuture::from(devices.get_user_media_with_constraints(&constraints)?).await?;
    stream.dyn_into::<MediaStream>()
}

async fn start(ctx: VoiceContext) {
    let stream = match open_microphone().await {
        Ok(stream) => stream,
        Err(e) => {
            log::warn!("microphone unavailable: {e:?}");
            ctx.recorder.borrow_mut().phase = VoicePhase::Idle;
            return;
        }
    };
    let media = match MediaRecorder::new_with_media_stream(&stream) {
        Ok(media) => media,
        Err(e) => {
            log::warn!("could not create recorder: {e:?}");
            stop_tracks(&stream);
            ctx.recorder.borrow_mut().phase = VoicePhase::Idle;
            return;
        }
    };

    let on_data = {
        let recorder = Rc::clone(&ctx.recorder);
        EventListener::new(&media, "dataavailable", move |event| {
            if let Some(blob) = event.dyn_ref::<BlobEvent>().and_then(BlobEvent::data) {
                recorder.borrow_mut().push_chunk(blob);
            }
        })
    };
    let on_stop = {
        let ctx = ctx.clone();
        EventListener::new(&media, "stop", move |_| {
            wasm_bindgen_futures::spawn_local(finish(ctx.clone()));
        })
    };

    if let Err(e) = media.start() {
        log::warn!("could not start recording: {e:?}");
        stop_tracks(&stream);
        ctx.recorder.borrow_mut().phase = VoicePhase::Idle;
        return;
    }

    let stale = ctx
        .recorder
        .borrow_mut()
        .begin(media, stream, vec![on_data, on_stop]);
    if let Some(stale) = stale {
        stop_tracks(&stale);
    }
    dom::toggle_class(&ctx.button, RECORDING_CLASS, true);
    log::debug!("voice recording started");
}

fn stop(ctx: &VoiceContext) {
    let failed = {
        let mut recorder = ctx.recorder.borrow_mut();
        recorder.phase = VoicePhase::Uploading;
        let stopped = recorder.media().map(MediaRecorder::stop);
        match stopped {
            Some(Err(e)) => {
                log::warn!("could not stop recording: {e:?}");
                Some(recorder.abort())
            }
            Some(Ok(())) => None,
            None => Some(recorder.abort()),
        }
    };
    // No `stop` event will follow, so nothing else frees the microphone.
    if let Some(released) = failed {
        discard(released);
    }
    dom::toggle_class(&ctx.button, RECORDING_CLASS, false);
}

fn discard(released: Released<MediaStream, Blob, EventListener>) {
    drop(released.listeners);
    if let Some(stream) = released.stream {
        stop_tracks(&stream);
    }
}

// Runs outside the `stop` callback so its listener can be dropped here.
async fn finish(ctx: VoiceContext) {
    let Released { stream, chunks, listeners } = ctx.recorder.borrow_mut().release();
    drop(listeners);
    if let Some(stream) = stream {
        stop_tracks(&stream);
    }
    dom::toggle_class(&ctx.button, RECORDING_CLASS, false);

    let update = match audio_blob(&chunks) {
        Ok(blob) => InputUpdate::from_result(api::transcribe(&ctx.url, &blob).await),
        Err(e) => InputUpdate::Failed(format!("could not assemble recording: {e:?}")),
    };
    if let InputUpdate::Failed(reason) = &update {
        log::warn!("POST {}: {reason}", ctx.url);
    }
    ctx.input.set_placeholder(update.placeholder(&ctx.placeholder));
    if let InputUpdate::Fill(text) = &update {
        ctx.input.set_value(text);
    }
    ctx.recorder.borrow_mut().phase = VoicePhase::Idle;
}

fn audio_blob(chunks: &[Blob]) -> Result<Blob, JsValue> {
    let parts = js_sys::Array::new();
    for chunk in chunks {
        parts.push(chunk);
    }
    let options = BlobPropertyBag::new();
    options.set_type(AUDIO_MIME);
    Blob::new_with_blob_sequence_and_options(&parts, &options)
}

fn stop_tracks(stream: &MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
            track.stop();
        }
    }
}
