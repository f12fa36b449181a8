/// In-memory display service for tests.
use std::cell::RefCell;
use std::rc::Rc;

use super::{BrightnessError, DisplayDevice, DisplayService};
use crate::iokit::ReturnCode;

/// `kIOReturnUnsupported`.
pub const UNSUPPORTED: ReturnCode = ReturnCode(-536_870_201);
/// `kIOReturnNotPermitted`.
pub const NOT_PERMITTED: ReturnCode = ReturnCode(-536_870_174);

/// State of one simulated display.
#[derive(Debug, Clone)]
pub struct MockDisplay {
    pub name: Option<String>,
    pub brightness: f32,
    pub read_error: Option<ReturnCode>,
    pub write_error: Option<ReturnCode>,
}

impl MockDisplay {
    pub fn new(name: &str, brightness: f32) -> Self {
        Self {
            name: Some(name.to_owned()),
            brightness,
            read_error: None,
            write_error: None,
        }
    }

    pub fn unnamed(brightness: f32) -> Self {
        Self {
            name: None,
            ..Self::new("", brightness)
        }
    }

    pub fn failing_read(mut self, code: ReturnCode) -> Self {
        self.read_error = Some(code);
        self
    }

    pub fn failing_write(mut self, code: ReturnCode) -> Self {
        self.write_error = Some(code);
        self
    }
}

#[derive(Debug, Default)]
struct Shared {
    displays: Vec<MockDisplay>,
    released: Vec<usize>,
    writes: Vec<(usize, f32)>,
    iterator_released: bool,
}

/// A display service backed by a `Vec`, recording releases and writes.
#[derive(Debug, Clone, Default)]
pub struct MockService {
    shared: Rc<RefCell<Shared>>,
    enumerate_error: Option<ReturnCode>,
}

impl MockService {
    pub fn new(displays: Vec<MockDisplay>) -> Self {
        Self {
            shared: Rc::new(RefCell::new(Shared {
                displays,
                ..Shared::default()
            })),
            enumerate_error: None,
        }
    }

    pub fn failing(code: ReturnCode) -> Self {
        Self {
            enumerate_error: Some(code),
            ..Self::default()
        }
    }

    /// The two displays used throughout the scenario tests.
    pub fn laptop_and_external() -> Self {
        Self::new(vec![
            MockDisplay::new("Color LCD", 0.8),
            MockDisplay::new("External", 0.5),
        ])
    }

    /// Indices of released handles, in release order.
    pub fn released(&self) -> Vec<usize> {
        self.shared.borrow().released.clone()
    }

    /// `(index, value)` of every successful write.
    pub fn writes(&self) -> Vec<(usize, f32)> {
        self.shared.borrow().writes.clone()
    }

    pub fn iterator_released(&self) -> bool {
        self.shared.borrow().iterator_released
    }

    pub fn brightness_of(&self, index: usize) -> f32 {
        self.shared.borrow().displays[index].brightness
    }
}

/// Handle to one simulated display. Records its release on drop.
pub struct MockHandle {
    index: usize,
    shared: Rc<RefCell<Shared>>,
}

impl DisplayDevice for MockHandle {
    fn name(&self) -> Option<String> {
        self.shared.borrow().displays[self.index].name.clone()
    }

    fn brightness(&self) -> Result<f32, BrightnessError> {
        let shared = self.shared.borrow();
        let display = &shared.displays[self.index];
        match display.read_error {
            Some(code) => Err(BrightnessError::Read { code }),
            None => Ok(display.brightness),
        }
    }

    fn set_brightness(&self, value: f32) -> Result<(), BrightnessError> {
        let mut shared = self.shared.borrow_mut();
        if let Some(code) = shared.displays[self.index].write_error {
            return Err(BrightnessError::Write { code });
        }
        shared.displays[self.index].brightness = value;
        shared.writes.push((self.index, value));
        Ok(())
    }
}

impl Drop for MockHandle {
    fn drop(&mut self) {
        self.shared.borrow_mut().released.push(self.index);
    }
}

/// Forward-only handle iterator. Records its own release on drop.
pub struct MockDevices {
    next: usize,
    shared: Rc<RefCell<Shared>>,
}

impl Iterator for MockDevices {
    type Item = MockHandle;

    fn next(&mut self) -> Option<MockHandle> {
        if self.next >= self.shared.borrow().displays.len() {
            return None;
        }
        let handle = MockHandle {
            index: self.next,
            shared: Rc::clone(&self.shared),
        };
        self.next += 1;
        Some(handle)
    }
}

impl Drop for MockDevices {
    fn drop(&mut self) {
        self.shared.borrow_mut().iterator_released = true;
    }
}

impl DisplayService for MockService {
    type Device = MockHandle;
    type Devices = MockDevices;

    fn displays(&self) -> Result<MockDevices, BrightnessError> {
        if let Some(code) = self.enumerate_error {
            return Err(BrightnessError::Enumerate { code });
        }
        Ok(MockDevices {
            next: 0,
            shared: Rc::clone(&self.shared),
        })
    }
}
