/// Numeric picker demo entry point for native builds
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::Duration;

    use numpick::{PickerConfig, RealTimeDriver};
    use numpick_ui::{Button, Event, KeyCode, NumberPicker};

    let config = match std::env::args().nth(1) {
        Some(path) => match PickerConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => PickerConfig::default(),
    };

    env_logger::Builder::new()
        .filter_level(config.log_level.to_level_filter())
        .init();

    let mut picker = NumberPicker::new();
    config.apply(&mut picker);
    picker.set_on_change_listener(|_: &NumberPicker, old: f64, new: f64| {
        log::info!("Value changed: {} -> {}", old, new);
    });

    let mut driver = RealTimeDriver::new();
    log::info!("Starting at '{}'", picker.text());

    // Type a value and commit it with a tap
    driver.send(&mut picker, Event::FocusGained);
    driver.send(&mut picker, Event::text("4"));
    driver.send(&mut picker, Event::Tap(Button::Increment));

    // Step down with the keyboard
    driver.send(&mut picker, Event::key(KeyCode::Down));

    // Hold the increment button for a few repeat intervals
    let hold = picker.state().speed * 3 + Duration::from_millis(50);
    let ticks = driver.hold(&mut picker, Button::Increment, hold);
    driver.settle(&mut picker);
    log::info!("Long press delivered {} ticks", ticks);

    // Typing past the upper bound is refused, focus loss commits the rest
    driver.send(&mut picker, Event::FocusGained);
    driver.send(&mut picker, Event::key(KeyCode::Backspace));
    driver.send(&mut picker, Event::text("1"));
    driver.send(&mut picker, Event::text("99"));
    driver.send(&mut picker, Event::FocusLost);

    println!("Final value: {}", picker.get_float_current());
}

// WASM builds embed the widget in a host page instead
#[cfg(target_arch = "wasm32")]
fn main() {}
