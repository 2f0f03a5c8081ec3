//! Frontend using the `minifb` crate for window creation and event handling.

use std::{cell::RefCell, mem, rc::Rc};

use minifb::{InputCallback, KeyRepeat, MouseMode, WindowOptions};

use fogcoord_core::render::immediate::Immediate;

use crate::{
    dims::{Dims, SQUARE_500},
    event::{App, Dispatcher, Event, Key},
};

/// A lightweight wrapper of a `minifb` window.
pub struct Window {
    /// The wrapped minifb window.
    pub imp: minifb::Window,
    /// The width and height of the window.
    pub dims: Dims,
    chars: CharQueue,
}

/// Builder for creating `Window`s.
pub struct Builder<'title> {
    pub dims: Dims,
    pub title: &'title str,
    pub target_fps: Option<u32>,
    pub opts: WindowOptions,
}

/// Collects the characters typed since the last poll.
#[derive(Clone, Default)]
struct CharQueue(Rc<RefCell<Vec<char>>>);

impl InputCallback for CharQueue {
    fn add_char(&mut self, uni_char: u32) {
        // Esc and other control keys are read as key states instead
        if let Some(c) = char::from_u32(uni_char).filter(|c| !c.is_control()) {
            self.0.borrow_mut().push(c);
        }
    }
}

impl Default for Builder<'_> {
    fn default() -> Self {
        Self {
            dims: SQUARE_500,
            title: "fogcoord",
            target_fps: Some(60),
            opts: WindowOptions {
                resize: true,
                ..WindowOptions::default()
            },
        }
    }
}

impl<'t> Builder<'t> {
    /// Sets the width and height of the window.
    pub fn dims(mut self, dims: Dims) -> Self {
        self.dims = dims;
        self
    }
    /// Sets the title of the window.
    pub fn title(mut self, title: &'t str) -> Self {
        self.title = title;
        self
    }
    /// Sets the frame rate cap of the window. `None` means unlimited
    /// frame rate (the main loop runs as fast as possible).
    pub fn target_fps(mut self, fps: Option<u32>) -> Self {
        self.target_fps = fps;
        self
    }
    /// Sets whether the user can resize the window.
    pub fn resizable(mut self, resize: bool) -> Self {
        self.opts.resize = resize;
        self
    }
    /// Sets other `minifb` options.
    pub fn options(mut self, opts: WindowOptions) -> Self {
        self.opts = opts;
        self
    }

    /// Creates the window.
    pub fn build(self) -> minifb::Result<Window> {
        let Self { dims, title, target_fps, opts } = self;
        let mut imp =
            minifb::Window::new(title, dims.0 as usize, dims.1 as usize, opts)?;
        if let Some(fps) = target_fps {
            imp.set_target_fps(fps as usize);
        }
        let chars = CharQueue::default();
        imp.set_input_callback(Box::new(chars.clone()));
        log::info!("opened {}x{} window \"{title}\"", dims.0, dims.1);
        Ok(Window { imp, dims, chars })
    }
}

impl Window {
    /// Returns a window builder.
    pub fn builder() -> Builder<'static> {
        Builder::default()
    }

    /// Updates the window content with the front buffer of `gl`.
    ///
    /// The data is interpreted as colors in `0x00_RR_GG_BB` format; the
    /// buffer is stretched to fill the window.
    pub fn present(&mut self, gl: &Immediate) -> minifb::Result<()> {
        let buf = gl.front_buffer();
        let (w, h) = buf.dims();
        self.imp
            .update_with_buffer(buf.data(), w as usize, h as usize)
    }

    /// Runs the main loop of the program, delivering input and resize
    /// events to `app` and presenting the frames it renders.
    ///
    /// Before the loop starts, the app is initialized and receives the
    /// initial window size. The main loop stops and this function returns
    /// if:
    /// * the user closes the window via the GUI (e.g. titlebar close button);
    ///   or
    /// * the app replies [`Quit`][crate::Reply::Quit] to a key press.
    ///
    /// # Errors
    /// If the window cannot be updated with the rendered frame.
    pub fn run<A: App<Immediate>>(&mut self, app: &mut A) -> minifb::Result<()> {
        let mut gl = Immediate::new(self.dims);
        let mut disp = Dispatcher::new();
        disp.start(app, &mut gl, self.dims);

        let mut events = Vec::new();
        while self.imp.is_open() {
            // Also pumps the window's event queue
            self.present(&gl)?;

            self.poll_events(&mut gl, &mut events);
            if disp.dispatch(app, &mut gl, events.drain(..)).is_break() {
                break;
            }
        }
        log::info!("render stats:\n{}", gl.stats);
        Ok(())
    }

    fn poll_events(&mut self, gl: &mut Immediate, events: &mut Vec<Event>) {
        let (w, h) = self.imp.get_size();
        let dims = (w as u32, h as u32);
        if dims != self.dims {
            self.dims = dims;
            if w > 0 && h > 0 {
                gl.resize(dims);
            }
            events.push(Event::Resize(dims));
        }

        let pos = self
            .imp
            .get_mouse_pos(MouseMode::Clamp)
            .unwrap_or_default();
        let typed = mem::take(&mut *self.chars.0.borrow_mut());
        events.extend(typed.into_iter().map(|c| Event::Key(Key::Char(c), pos)));

        if self.imp.is_key_pressed(minifb::Key::Escape, KeyRepeat::No) {
            events.push(Event::Key(Key::Escape, pos));
        }
    }
}
