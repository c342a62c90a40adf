use crate::browser;
use crate::error::GameError;
use futures::channel::oneshot::{channel, Receiver, Sender};
// ELI5: web assembly is a single threaded environment, so Rc RefCell > Mutex
use std::cell::RefCell;
use std::rc::Rc;
use js_sys::Function;
use wasm_bindgen::JsCast;
use web_sys::{HtmlAudioElement, HtmlElement, HtmlImageElement};

pub const DEFAULT_TIMEOUT_MS: i32 = 10_000;

const LOAD: &str = "load";
const CAN_PLAY_THROUGH: &str = "canplaythrough";
const ERROR: &str = "error";
const MP3_MIME: &str = "audio/mpeg";

type Completion = Result<(), GameError>;

fn failure(url: &str, reason: impl ToString) -> GameError {
    GameError::AssetLoadFailure {
        url: url.to_string(),
        reason: reason.to_string(),
    }
}

/// One asset waiting on ready / error / timeout
struct Pending {
    tx: Option<Sender<Completion>>,
    element: HtmlElement,
    ready_event: String,
    ready: Option<Function>,
    error: Option<Function>,
    timer: Option<i32>,
}

impl Pending {
    /// First caller sends the result and unhooks the listeners and the timer;
    /// every later call finds `tx` empty and returns
    fn settle(&mut self, result: Completion) {
        let tx = match self.tx.take() {
            Some(tx) => tx,
            None => return,
        };
        if let Some(timer) = self.timer.take() {
            browser::clear_timeout(timer);
        }
        if let Some(ready) = self.ready.take() {
            let _ = self
                .element
                .remove_event_listener_with_callback(&self.ready_event, &ready);
        }
        if let Some(error) = self.error.take() {
            let _ = self.element.remove_event_listener_with_callback(ERROR, &error);
        }
        let _ = tx.send(result);
    }
}

/// Wire `ready_event`, `error` and a timeout to a single oneshot channel.
/// The receiver resolves at most once, and the element is left with no
/// listeners from this load afterwards.
fn completion(
    element: &HtmlElement,
    ready_event: &str,
    url: &str,
    timeout_ms: i32,
) -> Result<Receiver<Completion>, GameError> {
    let (tx, rx) = channel::<Completion>();
    let pending = Rc::new(RefCell::new(Pending {
        tx: Some(tx),
        element: element.clone(),
        ready_event: ready_event.to_string(),
        ready: None,
        error: None,
        timer: None,
    }));

    let success_pending = pending.clone();
    let success_callback = browser::event_closure(move || {
        success_pending.borrow_mut().settle(Ok(()));
    });

    let error_pending = pending.clone();
    let error_url = url.to_string();
    let error_callback = browser::event_closure(move || {
        error_pending
            .borrow_mut()
            .settle(Err(failure(&error_url, "the browser reported an error")));
    });

    let timeout_pending = pending.clone();
    let timeout_url = url.to_string();
    let timeout_callback = browser::event_closure(move || {
        let mut pending = timeout_pending.borrow_mut();
        if pending.tx.is_some() {
            log::warn!("{} did not load within {}ms", timeout_url, timeout_ms);
        }
        // the timer has fired, nothing left to clear
        pending.timer = None;
        pending.settle(Err(failure(
            &timeout_url,
            format!("timed out after {}ms", timeout_ms),
        )));
    });

    let ready: Function = success_callback.as_ref().unchecked_ref::<Function>().clone();
    let error: Function = error_callback.as_ref().unchecked_ref::<Function>().clone();
    element
        .add_event_listener_with_callback(ready_event, &ready)
        .map_err(|err| failure(url, format!("{:#?}", err)))?;
    element
        .add_event_listener_with_callback(ERROR, &error)
        .map_err(|err| failure(url, format!("{:#?}", err)))?;
    let timer = browser::set_timeout(&timeout_callback, timeout_ms).map_err(|err| failure(url, err))?;

    {
        let mut pending = pending.borrow_mut();
        pending.ready = Some(ready);
        pending.error = Some(error);
        pending.timer = Some(timer);
    }

    // unhooked on settle, but JS may still hold a queued call
    success_callback.forget();
    error_callback.forget();
    timeout_callback.forget();

    Ok(rx)
}

/// Asynchronously load an image from a given source path
/// # Arguments
/// * `source` - string slice to path/url
/// * `timeout_ms` - give up after this long
/// # Returns
/// * `Ok(HtmlImageElement)` - on load success
/// * `Err(GameError::AssetLoadFailure)` - on error or timeout, naming `source`
pub async fn load_image(source: &str, timeout_ms: i32) -> Result<HtmlImageElement, GameError> {
    let image = browser::new_image().map_err(|err| failure(source, err))?;
    let rx = completion(&image, LOAD, source, timeout_ms)?;
    image.set_src(source);

    // ?? - Result<Result<(), GameError>, oneshot::Canceled>
    rx.await.map_err(|_| failure(source, "loader dropped"))??;
    log::debug!("loaded image {}", source);

    Ok(image)
}

/// Same contract as [`load_image`], ready once the browser can play it through
pub async fn load_audio(source: &str, timeout_ms: i32) -> Result<HtmlAudioElement, GameError> {
    let audio = browser::new_audio().map_err(|err| failure(source, err))?;
    let rx = completion(&audio, CAN_PLAY_THROUGH, source, timeout_ms)?;
    audio.set_preload("auto");
    audio.set_src(source);
    audio.load();

    rx.await.map_err(|_| failure(source, "loader dropped"))??;
    log::debug!("loaded audio {}", source);

    Ok(audio)
}

/// File extension of the audio format this browser can play
pub fn audio_extension() -> anyhow::Result<&'static str> {
    let audio = browser::new_audio()?;
    Ok(extension_for(&audio.can_play_type(MP3_MIME)))
}

/// `canPlayType` answers "", "maybe" or "probably"; anything but "" is a yes
pub fn extension_for(can_play_mp3: &str) -> &'static str {
    if can_play_mp3.is_empty() {
        "ogg"
    } else {
        "mp3"
    }
}
