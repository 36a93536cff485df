// Browser driver for the particle field: sizes a canvas to the viewport, keeps it
// in sync on resize, feeds mouse position in as the pointer target and runs the
// step/render loop on requestAnimationFrame until torn down.

use crate::field::ParticleField;
use crate::frame_loop::FrameLoop;
use crate::utils::Timer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

#[wasm_bindgen]
pub struct ParticleBackground {
    running: Option<Running>,
}

#[wasm_bindgen]
impl ParticleBackground {
    // A missing canvas or 2d context leaves the background inert instead of failing the page
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<ParticleBackground, JsValue> {
        let inert = ParticleBackground { running: None };

        let window = match web_sys::window() {
            Some(window) => window,
            None => return Ok(inert),
        };
        let document = match window.document() {
            Some(document) => document,
            None => return Ok(inert),
        };
        let canvas = match document
            .get_element_by_id(canvas_id)
            .and_then(|element| element.dyn_into::<HtmlCanvasElement>().ok())
        {
            Some(canvas) => canvas,
            None => {
                console::warn_1(&format!("particle background: no canvas #{}", canvas_id).into());
                return Ok(inert);
            }
        };
        let context = match canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|context| context.dyn_into::<CanvasRenderingContext2d>().ok())
        {
            Some(context) => context,
            None => {
                console::warn_1(&"particle background: 2d context unavailable".into());
                return Ok(inert);
            }
        };

        let running = Running::start(window, canvas, context)?;
        Ok(ParticleBackground {
            running: Some(running),
        })
    }

    pub fn is_active(&self) -> bool {
        self.running
            .as_ref()
            .map_or(false, |running| running.frame_loop.borrow().is_active())
    }

    pub fn particle_count(&self) -> usize {
        self.running
            .as_ref()
            .map_or(0, |running| running.scene.borrow().field.particles().len())
    }

    pub fn frame_count(&self) -> u32 {
        self.running
            .as_ref()
            .map_or(0, |running| running.frame_loop.borrow().frames() as u32)
    }

    pub fn pointer_x(&self) -> f64 {
        self.running
            .as_ref()
            .map_or(0.0, |running| running.scene.borrow().field.pointer()[0])
    }

    pub fn pointer_y(&self) -> f64 {
        self.running
            .as_ref()
            .map_or(0.0, |running| running.scene.borrow().field.pointer()[1])
    }

    // Wraps every frame in a console.time span while enabled
    pub fn set_frame_timing(&mut self, enabled: bool) {
        if let Some(running) = self.running.as_ref() {
            running.scene.borrow_mut().timing = enabled;
        }
    }

    pub fn frame_timing(&self) -> bool {
        self.running
            .as_ref()
            .map_or(false, |running| running.scene.borrow().timing)
    }

    // Safe to call any number of times. The stopped session is kept so its
    // counters still describe what ran before teardown.
    pub fn teardown(&mut self) -> Result<(), JsValue> {
        match self.running.as_mut() {
            Some(running) => running.stop(),
            None => Ok(()),
        }
    }
}

impl Drop for ParticleBackground {
    fn drop(&mut self) {
        if let Some(running) = self.running.as_mut() {
            if let Err(err) = running.stop() {
                console::error_2(&"particle background: teardown failed".into(), &err);
            }
        }
    }
}

struct Scene {
    field: ParticleField,
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    timing: bool,
}

impl Scene {
    fn fit_to(&mut self, window: &Window) {
        let (width, height) = viewport_size(window);
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.field.resize(width as f64, height as f64);
    }

    fn tick(&mut self) {
        let _timer = Timer::new("ParticleBackground::tick", self.timing);
        self.field.step();
        if let Err(err) = self.field.render(&mut self.context) {
            console::error_2(&"particle background: render failed".into(), &err);
        }
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

struct Running {
    window: Window,
    scene: Rc<RefCell<Scene>>,
    frame_loop: Rc<RefCell<FrameLoop>>,
    frame: FrameCallback,
    on_resize: Closure<dyn FnMut()>,
    on_mouse_move: Closure<dyn FnMut(MouseEvent)>,
    listening: bool,
}

impl Running {
    fn start(
        window: Window,
        canvas: HtmlCanvasElement,
        context: CanvasRenderingContext2d,
    ) -> Result<Running, JsValue> {
        let (width, height) = viewport_size(&window);
        canvas.set_width(width);
        canvas.set_height(height);
        let field = ParticleField::new(width as f64, height as f64);
        console::log_1(
            &format!(
                "particle background: {}x{} surface, {} particles",
                width,
                height,
                field.particles().len()
            )
            .into(),
        );

        let scene = Rc::new(RefCell::new(Scene {
            field,
            canvas,
            context,
            timing: false,
        }));
        let frame_loop: Rc<RefCell<FrameLoop>> = Rc::new(RefCell::new(FrameLoop::new()));

        let on_resize = {
            let scene = scene.clone();
            let window = window.clone();
            Closure::wrap(Box::new(move || {
                scene.borrow_mut().fit_to(&window);
            }) as Box<dyn FnMut()>)
        };
        let on_mouse_move = {
            let scene = scene.clone();
            Closure::wrap(Box::new(move |event: MouseEvent| {
                scene
                    .borrow_mut()
                    .field
                    .set_pointer(event.client_x() as f64, event.client_y() as f64);
            }) as Box<dyn FnMut(MouseEvent)>)
        };

        let frame: FrameCallback = Rc::new(RefCell::new(None));
        {
            let next = frame.clone();
            let scene = scene.clone();
            let frame_loop = frame_loop.clone();
            let window = window.clone();
            *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                if !frame_loop.borrow_mut().begin_frame() {
                    return;
                }
                scene.borrow_mut().tick();
                if let Some(callback) = next.borrow().as_ref() {
                    match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                        Ok(handle) => {
                            frame_loop.borrow_mut().scheduled(handle);
                        }
                        Err(err) => {
                            console::error_2(&"particle background: frame request failed".into(), &err)
                        }
                    }
                }
            }) as Box<dyn FnMut()>));
        }

        let mut running = Running {
            window,
            scene,
            frame_loop,
            frame,
            on_resize,
            on_mouse_move,
            listening: false,
        };
        let started = running.listen().and_then(|_| running.request_first_frame());
        if let Err(err) = started {
            running.stop()?;
            return Err(err);
        }
        Ok(running)
    }

    fn listen(&mut self) -> Result<(), JsValue> {
        self.window
            .add_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref())?;
        self.window.add_event_listener_with_callback(
            "mousemove",
            self.on_mouse_move.as_ref().unchecked_ref(),
        )?;
        self.listening = true;
        Ok(())
    }

    fn request_first_frame(&mut self) -> Result<(), JsValue> {
        let handle = match self.frame.borrow().as_ref() {
            Some(callback) => self
                .window
                .request_animation_frame(callback.as_ref().unchecked_ref())?,
            None => return Ok(()),
        };
        self.frame_loop.borrow_mut().scheduled(handle);
        Ok(())
    }

    fn stop(&mut self) -> Result<(), JsValue> {
        let cancelled = match self.frame_loop.borrow_mut().cancel() {
            Some(handle) => self.window.cancel_animation_frame(handle),
            None => Ok(()),
        };
        // Breaks the frame closure's reference back to itself
        self.frame.borrow_mut().take();

        // Both removals are attempted; the flag stays set until they succeed so a
        // later teardown retries them
        if self.listening {
            let resize = self.window.remove_event_listener_with_callback(
                "resize",
                self.on_resize.as_ref().unchecked_ref(),
            );
            let mouse_move = self.window.remove_event_listener_with_callback(
                "mousemove",
                self.on_mouse_move.as_ref().unchecked_ref(),
            );
            resize.and(mouse_move)?;
            self.listening = false;
        }
        cancelled
    }
}

fn viewport_size(window: &Window) -> (u32, u32) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    (width.max(0.0) as u32, height.max(0.0) as u32)
}
