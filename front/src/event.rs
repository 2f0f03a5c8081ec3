//! Platform-independent events and their dispatch to an application.

use core::ops::ControlFlow::{self, Break, Continue};

use crate::dims::Dims;

/// A key press.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Key {
    /// A typed character, with the shift state already applied.
    Char(char),
    Escape,
}

/// An input or window event delivered by the platform.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Event {
    /// The drawable surface changed size.
    Resize(Dims),
    /// A key was pressed while the pointer was at the given position.
    Key(Key, (f32, f32)),
    /// The platform asks for the window contents to be repainted.
    Redraw,
}

/// An application's response to a key press.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Reply {
    /// Nothing visible changed.
    #[default]
    Ignore,
    /// The frame is out of date and should be redrawn.
    Redraw,
    /// The application wants to exit.
    Quit,
}

/// An interactive application driving a rendering backend `B`.
///
/// The platform invokes these callbacks serially. Only the initialization,
/// resize, and redraw callbacks get access to the backend; key handling
/// just updates the application state and tells the platform what to do
/// next.
pub trait App<B> {
    /// Called once before any other callback.
    fn on_init(&mut self, backend: &mut B);

    /// Called with the initial surface size and on every size change.
    /// Both dimensions are always nonzero.
    fn on_resize(&mut self, dims: Dims, backend: &mut B);

    /// Called on each key press.
    fn on_key(&mut self, key: Key, pos: (f32, f32)) -> Reply;

    /// Called to render and present a complete frame.
    fn on_redraw(&mut self, backend: &mut B);
}

/// Delivers events to an [`App`], coalescing redraw requests.
///
/// Redraw requests only mark the frame dirty; the app is asked to redraw
/// at most once per batch of events, after every event in the batch has
/// been handled.
#[derive(Clone, Debug, Default)]
pub struct Dispatcher {
    dirty: bool,
    quit: bool,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initializes `app` and sends it the initial surface size.
    ///
    /// The first frame is drawn before this returns.
    pub fn start<A, B>(&mut self, app: &mut A, backend: &mut B, dims: Dims)
    where
        A: App<B>,
    {
        log::debug!("initializing app with surface size {}x{}", dims.0, dims.1);
        app.on_init(backend);
        self.dirty = true;
        let _ = self.dispatch(app, backend, [Event::Resize(dims)]);
    }

    /// Marks the frame dirty so that it is redrawn after the next batch.
    pub fn request_redraw(&mut self) {
        self.dirty = true;
    }

    /// Returns whether a redraw is pending.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns whether the app has asked to quit.
    pub fn has_quit(&self) -> bool {
        self.quit
    }

    /// Handles a batch of events, then redraws if any of them asked for it.
    ///
    /// Returns `Break` once the app has replied [`Reply::Quit`]; any events
    /// after the quitting one, and all later batches, are dropped without
    /// being delivered.
    pub fn dispatch<A, B>(
        &mut self,
        app: &mut A,
        backend: &mut B,
        events: impl IntoIterator<Item = Event>,
    ) -> ControlFlow<()>
    where
        A: App<B>,
    {
        if self.quit {
            return Break(());
        }
        for ev in events {
            match ev {
                Event::Resize((w, h)) if w == 0 || h == 0 => {
                    log::trace!("ignoring zero-sized surface {w}x{h}");
                }
                Event::Resize(dims) => {
                    log::debug!("surface resized to {}x{}", dims.0, dims.1);
                    app.on_resize(dims, backend);
                    self.dirty = true;
                }
                Event::Key(key, pos) => match app.on_key(key, pos) {
                    Reply::Ignore => {}
                    Reply::Redraw => self.dirty = true,
                    Reply::Quit => {
                        log::info!("quit requested by {key:?}");
                        self.quit = true;
                        return Break(());
                    }
                },
                Event::Redraw => self.dirty = true,
            }
        }
        if self.dirty {
            self.dirty = false;
            app.on_redraw(backend);
        }
        Continue(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every callback into the "backend", a list of strings.
    #[derive(Default)]
    struct Recorder {
        keys: Vec<Key>,
    }

    type Log = Vec<String>;

    impl App<Log> for Recorder {
        fn on_init(&mut self, log: &mut Log) {
            log.push("init".into());
        }
        fn on_resize(&mut self, (w, h): Dims, log: &mut Log) {
            log.push(format!("resize {w}x{h}"));
        }
        fn on_key(&mut self, key: Key, _: (f32, f32)) -> Reply {
            self.keys.push(key);
            match key {
                Key::Escape => Reply::Quit,
                Key::Char('r') => Reply::Redraw,
                Key::Char(_) => Reply::Ignore,
            }
        }
        fn on_redraw(&mut self, log: &mut Log) {
            log.push("redraw".into());
        }
    }

    fn key(c: char) -> Event {
        Event::Key(Key::Char(c), (0.0, 0.0))
    }

    #[test]
    fn start_initializes_resizes_and_draws() {
        let (mut app, mut log) = (Recorder::default(), Log::new());
        let mut disp = Dispatcher::new();
        disp.start(&mut app, &mut log, (500, 500));

        assert_eq!(log, ["init", "resize 500x500", "redraw"]);
        assert!(!disp.is_dirty());
    }

    #[test]
    fn redraw_requests_are_coalesced() {
        let (mut app, mut log) = (Recorder::default(), Log::new());
        let mut disp = Dispatcher::new();

        let res = disp.dispatch(&mut app, &mut log, [key('r'), key('r'), Event::Redraw]);

        assert_eq!(res, Continue(()));
        assert_eq!(log, ["redraw"]);
        assert_eq!(app.keys.len(), 2);
    }

    #[test]
    fn ignored_keys_do_not_redraw() {
        let (mut app, mut log) = (Recorder::default(), Log::new());
        let mut disp = Dispatcher::new();

        let _ = disp.dispatch(&mut app, &mut log, [key('x'), key('y')]);

        assert!(log.is_empty());
        assert_eq!(app.keys, [Key::Char('x'), Key::Char('y')]);
    }

    #[test]
    fn explicit_redraw_request() {
        let (mut app, mut log) = (Recorder::default(), Log::new());
        let mut disp = Dispatcher::new();
        disp.request_redraw();
        assert!(disp.is_dirty());

        let _ = disp.dispatch(&mut app, &mut log, []);
        assert_eq!(log, ["redraw"]);
    }

    #[test]
    fn quit_drops_remaining_events() {
        let (mut app, mut log) = (Recorder::default(), Log::new());
        let mut disp = Dispatcher::new();

        let events = [key('r'), Event::Key(Key::Escape, (1.0, 2.0)), key('x')];
        let res = disp.dispatch(&mut app, &mut log, events);

        assert_eq!(res, Break(()));
        assert!(disp.has_quit());
        assert_eq!(app.keys, [Key::Char('r'), Key::Escape]);
        assert!(log.is_empty(), "no redraw after quit: {log:?}");

        let res = disp.dispatch(&mut app, &mut log, [key('r'), Event::Redraw]);
        assert_eq!(res, Break(()));
        assert_eq!(app.keys.len(), 2);
        assert!(log.is_empty());
    }

    #[test]
    fn zero_sized_resizes_are_swallowed() {
        let (mut app, mut log) = (Recorder::default(), Log::new());
        let mut disp = Dispatcher::new();

        let events = [Event::Resize((0, 300)), Event::Resize((300, 0))];
        let _ = disp.dispatch(&mut app, &mut log, events);
        assert!(log.is_empty());

        let _ = disp.dispatch(&mut app, &mut log, [Event::Resize((640, 480))]);
        assert_eq!(log, ["resize 640x480", "redraw"]);
    }
}
