use web_sys::console;

pub fn set_panic_hook() {
    // When the `console_error_panic_hook` feature is enabled, we can call the
    // `set_panic_hook` function at least once during initialization, and then
    // we will get better error messages if our code ever panics.
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// console.time span that closes when dropped. A disabled timer never touches
// the console, so frame code can create one unconditionally.
pub struct Timer<'a> {
    label: Option<&'a str>,
}

impl<'a> Timer<'a> {
    pub fn new(label: &'a str, enabled: bool) -> Timer<'a> {
        if !enabled {
            return Timer { label: None };
        }
        console::time_with_label(label);
        Timer { label: Some(label) }
    }

    pub fn is_recording(&self) -> bool {
        self.label.is_some()
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        if let Some(label) = self.label.take() {
            console::time_end_with_label(label);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_timer_records_nothing() {
        let timer = Timer::new("tick", false);
        assert!(!timer.is_recording());
        drop(timer);
    }
}
